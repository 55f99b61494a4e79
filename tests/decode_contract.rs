//! Integration tests for the decode entry point
//!
//! Exercise `decode` only through the public API: wire buffers are built from
//! `PacketHeader` and raw bytes, never from crate internals.

use anyhow::{Context, Result, bail, ensure};
use f1_telemetry_2020::packets::{
    CarTelemetryData, EventDetails, FastestLap, PacketCarTelemetryData, PacketEventData,
    PacketParticipantsData, ParticipantData,
};
use f1_telemetry_2020::registry;
use f1_telemetry_2020::wire::WireFormat;
use f1_telemetry_2020::{DecodeError, FixedString, Packet, PacketHeader, PacketKind, decode};

const EXPECTED_SIZES: [(PacketKind, usize); 10] = [
    (PacketKind::Motion, 1464),
    (PacketKind::Session, 251),
    (PacketKind::LapData, 1190),
    (PacketKind::Event, 35),
    (PacketKind::Participants, 1213),
    (PacketKind::CarSetups, 1102),
    (PacketKind::CarTelemetry, 1307),
    (PacketKind::CarStatus, 1344),
    (PacketKind::FinalClassification, 839),
    (PacketKind::LobbyInfo, 1169),
];

fn header(kind: PacketKind) -> PacketHeader {
    PacketHeader {
        packet_format: 2020,
        game_major_version: 1,
        game_minor_version: 17,
        packet_version: 1,
        packet_id: kind.id(),
        session_uid: 0xDEAD_BEEF_0000_0042,
        session_time: 12.5,
        frame_identifier: 777,
        player_car_index: 2,
        secondary_player_car_index: 255,
    }
}

fn zeroed(kind: PacketKind, size: usize) -> Vec<u8> {
    let mut buf = header(kind).to_bytes();
    buf.resize(size, 0);
    if kind == PacketKind::Event {
        buf[24..28].copy_from_slice(b"SSTA");
    }
    buf
}

#[test]
fn zero_filled_buffers_decode_for_every_kind() -> Result<()> {
    let _ = tracing_subscriber::fmt::try_init();

    for (kind, size) in EXPECTED_SIZES {
        let buf = zeroed(kind, size);
        let packet = decode(&buf).with_context(|| format!("decoding zeroed {kind} packet"))?;
        ensure!(packet.kind() == kind, "{kind} decoded as {}", packet.kind());
        ensure!(packet.header() == &header(kind), "{kind} header did not round-trip");
        ensure!(packet.encode() == buf, "{kind} did not re-encode to the same bytes");
    }
    Ok(())
}

#[test]
fn registry_sizes_match_the_wire_format() {
    for (kind, size) in EXPECTED_SIZES {
        let schema = registry::resolve(2020, 1, kind.id());
        assert_eq!(schema.map(|s| s.size()), Some(size), "{kind}");
    }
    assert_eq!(registry::entries().count(), 10);
}

#[test]
fn one_byte_off_is_a_size_mismatch() {
    for (kind, size) in EXPECTED_SIZES {
        let mut buf = zeroed(kind, size);

        buf.push(0);
        assert_eq!(
            decode(&buf),
            Err(DecodeError::SizeMismatch { kind, expected: size, actual: size + 1 })
        );

        buf.truncate(size - 1);
        assert_eq!(
            decode(&buf),
            Err(DecodeError::SizeMismatch { kind, expected: size, actual: size - 1 })
        );
    }
}

#[test]
fn buffers_shorter_than_a_header_are_too_short() {
    for len in 0..24 {
        let buf = vec![0xA5u8; len];
        assert_eq!(decode(&buf), Err(DecodeError::TooShort { actual: len, required: 24 }));
    }
}

#[test]
fn unregistered_triples_are_unknown_schema() {
    let cases = [(2019u16, 1u8, 0u8), (2020, 2, 6), (2020, 0, 3), (2020, 1, 10), (2021, 1, 9)];
    for (format, version, kind) in cases {
        let mut head = header(PacketKind::Motion);
        head.packet_format = format;
        head.packet_version = version;
        head.packet_id = kind;
        let mut buf = head.to_bytes();
        buf.resize(1464, 0);
        assert_eq!(decode(&buf), Err(DecodeError::UnknownSchema { format, version, kind }));
    }
}

#[test]
fn game_version_fields_do_not_affect_dispatch() -> Result<()> {
    let mut head = header(PacketKind::Session);
    head.game_major_version = 9;
    head.game_minor_version = 99;
    let mut buf = head.to_bytes();
    buf.resize(251, 0);
    let packet = decode(&buf)?;
    ensure!(packet.header().game_minor_version == 99);
    Ok(())
}

#[test]
fn fastest_lap_event_decodes_from_the_right_bytes() -> Result<()> {
    let mut buf = header(PacketKind::Event).to_bytes();
    buf.extend_from_slice(b"FTLP");
    buf.push(7);
    buf.extend_from_slice(&91.234f32.to_le_bytes());
    buf.extend_from_slice(&[0xEE, 0xEE]);
    assert_eq!(buf.len(), 35);

    let Packet::Event(event) = decode(&buf)? else {
        bail!("expected an event packet");
    };
    assert_eq!(
        event.details,
        EventDetails::FastestLap(FastestLap { vehicle_idx: 7, lap_time: 91.234 })
    );
    assert_eq!(event.code().as_str(), "FTLP");
    Ok(())
}

#[test]
fn unknown_event_code_fails_the_whole_packet() {
    let mut buf = zeroed(PacketKind::Event, 35);
    buf[24..28].copy_from_slice(b"ABCD");
    assert_eq!(decode(&buf), Err(DecodeError::UnknownEventCode { code: *b"ABCD" }));
}

#[test]
fn per_car_arrays_land_at_fixed_offsets() -> Result<()> {
    let mut packet =
        PacketCarTelemetryData { header: header(PacketKind::CarTelemetry), ..Default::default() };
    packet.car_telemetry_data[21] =
        CarTelemetryData { speed: 312, gear: -1, engine_rpm: 11_950, ..Default::default() };
    packet.button_status = 0x0001;
    packet.suggested_gear = 8;

    let buf = packet.to_bytes();
    // car 21 starts after the header and 21 full records
    let car = 24 + 21 * 58;
    assert_eq!(&buf[car..car + 2], &312u16.to_le_bytes());
    assert_eq!(buf[car + 15], 0xFF);
    assert_eq!(buf[1306], 8);

    let Packet::CarTelemetry(decoded) = decode(&buf)? else {
        bail!("expected car telemetry");
    };
    assert_eq!(decoded, packet);
    Ok(())
}

#[test]
fn participant_names_decode_as_text() -> Result<()> {
    let mut packet = PacketParticipantsData {
        header: header(PacketKind::Participants),
        num_active_cars: 2,
        ..Default::default()
    };
    packet.participants[1] = ParticipantData {
        driver_id: 58,
        name: FixedString::new("Charles Leclerc"),
        ..Default::default()
    };

    let Packet::Participants(decoded) = decode(&packet.to_bytes())? else {
        bail!("expected participants");
    };
    let names: Vec<_> = decoded.active().iter().map(|p| p.name.to_string()).collect();
    assert_eq!(names, vec!["".to_string(), "Charles Leclerc".to_string()]);
    assert_eq!(decoded.participants[1].driver_name(), Some("Charles Leclerc"));
    Ok(())
}

#[test]
fn decoded_packets_serialize_to_yaml() -> Result<()> {
    let event = PacketEventData {
        header: header(PacketKind::Event),
        details: EventDetails::FastestLap(FastestLap { vehicle_idx: 7, lap_time: 91.25 }),
    };
    let packet = decode(&event.to_bytes())?;

    let yaml = serde_yaml_ng::to_string(&packet)?;
    ensure!(yaml.contains("FastestLap"), "missing variant in:\n{yaml}");
    ensure!(yaml.contains("lap_time: 91.25"), "missing lap time in:\n{yaml}");

    let back: Packet = serde_yaml_ng::from_str(&yaml)?;
    ensure!(back == packet);
    Ok(())
}

#[test]
fn decode_is_shareable_across_threads() -> Result<()> {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Packet>();
    assert_send_sync::<DecodeError>();

    let buf = zeroed(PacketKind::LapData, 1190);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let buf = buf.clone();
            std::thread::spawn(move || decode(&buf).map(|p| p.kind()))
        })
        .collect();
    for handle in handles {
        let kind = handle.join().map_err(|_| anyhow::anyhow!("decoder thread panicked"))??;
        ensure!(kind == PacketKind::LapData);
    }
    Ok(())
}
