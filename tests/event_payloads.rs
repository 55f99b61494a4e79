//! Event packet payload selection through the public decoder

use anyhow::{Result, bail};
use f1_telemetry_2020::packets::event::{
    EVENT_DETAILS_SIZE, EventCode, EventDetails, FastestLap, Penalty, RaceWinner, Retirement,
    SpeedTrap, TeamMateInPits,
};
use f1_telemetry_2020::packets::PacketEventData;
use f1_telemetry_2020::wire::WireFormat;
use f1_telemetry_2020::{DecodeError, Packet, PacketHeader, PacketKind, decode, lookup};

fn event_buffer(code: &[u8; 4], region: [u8; EVENT_DETAILS_SIZE]) -> Vec<u8> {
    let header = PacketHeader {
        packet_format: 2020,
        packet_version: 1,
        packet_id: PacketKind::Event.id(),
        frame_identifier: 1234,
        ..Default::default()
    };
    let mut buf = header.to_bytes();
    buf.extend_from_slice(code);
    buf.extend_from_slice(&region);
    buf
}

fn decode_event(buf: &[u8]) -> Result<PacketEventData> {
    match decode(buf)? {
        Packet::Event(event) => Ok(event),
        other => bail!("expected an event packet, got {}", other.kind()),
    }
}

#[test]
fn codes_without_payload_expose_none() -> Result<()> {
    let cases = [
        (b"SSTA", EventDetails::SessionStarted),
        (b"SEND", EventDetails::SessionEnded),
        (b"DRSE", EventDetails::DrsEnabled),
        (b"DRSD", EventDetails::DrsDisabled),
        (b"CHQF", EventDetails::ChequeredFlag),
    ];
    for (code, expected) in cases {
        // Region contents are ignored for these codes.
        let event = decode_event(&event_buffer(code, [0x5A; EVENT_DETAILS_SIZE]))?;
        assert_eq!(event.details, expected);
        assert!(!event.code().has_payload());
        assert_eq!(event.code().as_bytes(), code);
    }
    Ok(())
}

#[test]
fn codes_with_payload_read_their_sub_record() -> Result<()> {
    let mut ftlp = [0u8; EVENT_DETAILS_SIZE];
    ftlp[0] = 7;
    ftlp[1..5].copy_from_slice(&91.234f32.to_le_bytes());

    let mut sptp = [0u8; EVENT_DETAILS_SIZE];
    sptp[0] = 19;
    sptp[1..5].copy_from_slice(&342.75f32.to_le_bytes());

    let cases = [
        (b"FTLP", ftlp, EventDetails::FastestLap(FastestLap { vehicle_idx: 7, lap_time: 91.234 })),
        (b"RTMT", [4, 9, 9, 9, 9, 9, 9], EventDetails::Retirement(Retirement { vehicle_idx: 4 })),
        (
            b"TMPT",
            [11, 0, 0, 0, 0, 0, 0],
            EventDetails::TeamMateInPits(TeamMateInPits { vehicle_idx: 11 }),
        ),
        (b"RCWN", [0, 1, 2, 3, 4, 5, 6], EventDetails::RaceWinner(RaceWinner { vehicle_idx: 0 })),
        (
            b"PENA",
            [2, 12, 5, 6, 10, 33, 1],
            EventDetails::Penalty(Penalty {
                penalty_type: 2,
                infringement_type: 12,
                vehicle_idx: 5,
                other_vehicle_idx: 6,
                time: 10,
                lap_num: 33,
                places_gained: 1,
            }),
        ),
        (b"SPTP", sptp, EventDetails::SpeedTrap(SpeedTrap { vehicle_idx: 19, speed: 342.75 })),
    ];

    for (code, region, expected) in cases {
        let event = decode_event(&event_buffer(code, region))?;
        assert_eq!(event.details, expected, "{}", String::from_utf8_lossy(code));
        assert!(event.code().has_payload());
    }
    Ok(())
}

#[test]
fn penalty_ids_resolve_to_names() -> Result<()> {
    let event = decode_event(&event_buffer(b"PENA", [4, 17, 3, 255, 5, 20, 0]))?;
    let EventDetails::Penalty(penalty) = event.details else {
        bail!("expected a penalty");
    };
    assert_eq!(lookup::penalty_type_name(penalty.penalty_type), Some("Time penalty"));
    assert_eq!(
        lookup::infringement_type_name(penalty.infringement_type),
        Some("Pit lane speeding")
    );
    Ok(())
}

#[test]
fn every_code_round_trips_through_the_wire() -> Result<()> {
    for code in EventCode::ALL {
        let buf = event_buffer(code.as_bytes(), [0; EVENT_DETAILS_SIZE]);
        let event = decode_event(&buf)?;
        assert_eq!(event.code(), code);
        assert_eq!(event.to_bytes(), buf);
    }
    Ok(())
}

#[test]
fn lowercase_or_garbage_codes_are_rejected() {
    for code in [b"ftlp", b"    ", b"\0\0\0\0", b"FTL\0"] {
        let result = decode(&event_buffer(code, [0; EVENT_DETAILS_SIZE]));
        assert!(
            matches!(result, Err(DecodeError::UnknownEventCode { code: c }) if &c == code),
            "{result:?}"
        );
    }
}
