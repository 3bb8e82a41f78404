use bytes::{Buf, BufMut};
use thiserror::Error;

pub mod compound;
pub mod tag;

pub use compound::NbtCompound;
pub use tag::NbtTag;

pub const END_ID: u8 = 0x00;
pub const BYTE_ID: u8 = 0x01;
pub const SHORT_ID: u8 = 0x02;
pub const INT_ID: u8 = 0x03;
pub const LONG_ID: u8 = 0x04;
pub const FLOAT_ID: u8 = 0x05;
pub const DOUBLE_ID: u8 = 0x06;
pub const BYTE_ARRAY_ID: u8 = 0x07;
pub const STRING_ID: u8 = 0x08;
pub const LIST_ID: u8 = 0x09;
pub const COMPOUND_ID: u8 = 0x0A;
pub const INT_ARRAY_ID: u8 = 0x0B;
pub const LONG_ARRAY_ID: u8 = 0x0C;

/// Deepest nesting of lists and compounds a reader accepts.
pub const MAX_DEPTH: usize = 512;

#[derive(Error, Debug)]
pub enum Error {
    #[error("The root tag of the NBT data is not a compound tag. Received tag id: {0}")]
    NoRootCompound(u8),
    #[error("Encountered an unknown NBT tag id {0}.")]
    UnknownTagId(u8),
    #[error("Failed to Cesu 8 Decode")]
    Cesu8DecodingError,
    #[error("NBT reading was cut short, {0} more bytes were expected")]
    Incomplete(usize),
    #[error("Negative list length {0}")]
    NegativeLength(i32),
    #[error("Length too large {0}")]
    LargeLength(usize),
    #[error("List elements must share one tag type, expected {expected} but found {found}")]
    MixedList { expected: u8, found: u8 },
    #[error("List of {0} elements has no element type")]
    UntypedList(usize),
    #[error("NBT nested deeper than {0} levels")]
    TooDeep(usize),
}

/// Fails with [`Error::Incomplete`] when fewer than `needed` bytes remain.
pub(crate) fn ensure_remaining(remaining: usize, needed: usize) -> Result<(), Error> {
    if remaining < needed {
        return Err(Error::Incomplete(needed - remaining));
    }
    Ok(())
}

pub(crate) fn get_length<B: Buf>(buf: &mut B) -> Result<usize, Error> {
    ensure_remaining(buf.remaining(), 4)?;
    let len = buf.get_i32();
    if len < 0 {
        return Err(Error::NegativeLength(len));
    }
    Ok(len as usize)
}

pub(crate) fn put_length<B: BufMut>(buf: &mut B, len: usize) -> Result<(), Error> {
    if len > i32::MAX as usize {
        return Err(Error::LargeLength(len));
    }
    buf.put_i32(len as i32);
    Ok(())
}

/// Reads a length-prefixed string in Java's modified UTF-8.
pub fn get_nbt_string<B: Buf>(buf: &mut B) -> Result<String, Error> {
    ensure_remaining(buf.remaining(), 2)?;
    let len = buf.get_u16() as usize;
    ensure_remaining(buf.remaining(), len)?;
    let string_bytes = buf.copy_to_bytes(len);
    let string = cesu8::from_java_cesu8(&string_bytes).map_err(|_| Error::Cesu8DecodingError)?;
    Ok(string.into_owned())
}

pub fn put_nbt_string<B: BufMut>(buf: &mut B, string: &str) -> Result<(), Error> {
    let java_string = cesu8::to_java_cesu8(string);
    let len = java_string.len();
    if len > u16::MAX as usize {
        return Err(Error::LargeLength(len));
    }

    buf.put_u16(len as u16);
    buf.put_slice(&java_string);
    Ok(())
}
