use crate::error::{Error, Result};

/// Byte encoding for elements stored in run files.
pub trait Codec: Sized {
    /// Append the encoded form of `self` to `buf`.
    fn encode(&self, buf: &mut Vec<u8>);

    /// Decode one element from exactly `data`.
    fn decode(data: &[u8]) -> Result<Self>;
}

fn fixed<const N: usize>(data: &[u8]) -> Result<[u8; N]> {
    data.try_into().map_err(|_| {
        Error::Corruption(format!("expected {N} bytes, found {}", data.len()))
    })
}

macro_rules! impl_codec_le {
    ( $($ty:ty),* ) => { $(
        impl Codec for $ty {
            fn encode(&self, buf: &mut Vec<u8>) {
                buf.extend_from_slice(&self.to_le_bytes());
            }

            fn decode(data: &[u8]) -> Result<Self> {
                Ok(<$ty>::from_le_bytes(fixed(data)?))
            }
        }
    )* }
}

impl_codec_le! { u32, u64, i64 }

impl Codec for Vec<u8> {
    fn encode(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self);
    }

    fn decode(data: &[u8]) -> Result<Self> {
        Ok(data.to_vec())
    }
}

impl Codec for String {
    fn encode(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.as_bytes());
    }

    fn decode(data: &[u8]) -> Result<Self> {
        String::from_utf8(data.to_vec())
            .map_err(|e| Error::Corruption(format!("invalid utf-8 element: {e}")))
    }
}
