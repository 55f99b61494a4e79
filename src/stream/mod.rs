//! Stream adapters for feeding datagrams from any async source

mod decode;

pub use decode::{DecodePackets, DecodeStreamExt};
