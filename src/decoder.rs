//! Header-dispatched packet decoding

use tracing::{debug, trace};

use crate::packets::{HEADER_SIZE, Packet, PacketHeader};
use crate::{DecodeError, Result, registry};

/// Decode one UDP datagram into a typed packet.
///
/// The header is read first, its `(packet_format, packet_version, packet_id)` triple
/// selects the layout, and the buffer must then be exactly that layout's size. Any
/// failure is returned as-is; nothing is patched or defaulted.
///
/// ```rust
/// use f1_telemetry_2020::{DecodeError, Packet, PacketKind, decode};
///
/// let mut datagram = vec![0u8; 1307];
/// datagram[0..2].copy_from_slice(&2020u16.to_le_bytes());
/// datagram[4] = 1; // packet version
/// datagram[5] = 6; // car telemetry
///
/// let packet = decode(&datagram)?;
/// assert_eq!(packet.kind(), PacketKind::CarTelemetry);
/// assert!(matches!(packet, Packet::CarTelemetry(_)));
///
/// assert!(matches!(decode(&datagram[..1306]), Err(DecodeError::SizeMismatch { .. })));
/// # Ok::<(), DecodeError>(())
/// ```
pub fn decode(data: &[u8]) -> Result<Packet> {
    if data.len() < HEADER_SIZE {
        return Err(DecodeError::too_short(data.len(), HEADER_SIZE));
    }

    let header = PacketHeader::parse(data)?;
    let (format, version, kind) = header.schema_key();

    let schema = registry::resolve(format, version, kind)
        .ok_or(DecodeError::UnknownSchema { format, version, kind })?;

    if data.len() != schema.size() {
        return Err(DecodeError::SizeMismatch {
            kind: schema.kind(),
            expected: schema.size(),
            actual: data.len(),
        });
    }

    trace!(
        packet_id = kind,
        len = data.len(),
        body = schema.body_size(),
        frame = header.frame_identifier,
        "Dispatching {} packet",
        schema.name()
    );

    let packet = schema.decode(data)?;

    debug!(
        packet_id = kind,
        frame = header.frame_identifier,
        session_time = header.session_time,
        "Decoded {} packet",
        schema.name()
    );

    Ok(packet)
}
