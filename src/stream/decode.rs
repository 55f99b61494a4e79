//! Stream decoding combinator

use futures::{Stream, ready};
use pin_project_lite::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::{Packet, Result, decode};

/// Extension trait to decode any Stream of datagrams
pub trait DecodeStreamExt: Stream {
    /// Decode each datagram into a [`Packet`].
    ///
    /// Every input item yields exactly one output item; failures are passed through as
    /// `Err` so the consumer decides whether to skip or stop.
    fn decode_packets(self) -> DecodePackets<Self>
    where
        Self: Sized,
        Self::Item: AsRef<[u8]>,
    {
        DecodePackets::new(self)
    }
}

impl<T: Stream> DecodeStreamExt for T {}

pin_project! {
    /// A stream combinator that decodes datagrams into packets
    pub struct DecodePackets<S> {
        #[pin]
        stream: S,
        decoded: u64,
        failed: u64,
    }
}

impl<S> DecodePackets<S> {
    pub fn new(stream: S) -> Self {
        Self { stream, decoded: 0, failed: 0 }
    }

    /// Datagrams decoded successfully so far.
    pub fn decoded(&self) -> u64 {
        self.decoded
    }

    /// Datagrams that failed to decode so far.
    pub fn failed(&self) -> u64 {
        self.failed
    }

    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S> Stream for DecodePackets<S>
where
    S: Stream,
    S::Item: AsRef<[u8]>,
{
    type Item = Result<Packet>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();

        match ready!(this.stream.poll_next(cx)) {
            Some(datagram) => {
                let result = decode(datagram.as_ref());
                match result {
                    Ok(_) => *this.decoded += 1,
                    Err(_) => *this.failed += 1,
                }
                Poll::Ready(Some(result))
            }
            None => Poll::Ready(None),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.stream.size_hint()
    }
}
