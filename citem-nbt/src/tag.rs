use bytes::{Buf, BufMut};

use crate::compound::NbtCompound;
use crate::{
    BYTE_ARRAY_ID, BYTE_ID, COMPOUND_ID, DOUBLE_ID, END_ID, Error, FLOAT_ID, INT_ARRAY_ID, INT_ID,
    LIST_ID, LONG_ARRAY_ID, LONG_ID, MAX_DEPTH, SHORT_ID, STRING_ID, ensure_remaining,
    get_length, get_nbt_string, put_length, put_nbt_string,
};

#[derive(Clone, Debug, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum NbtTag {
    End = END_ID,
    Byte(i8) = BYTE_ID,
    Short(i16) = SHORT_ID,
    Int(i32) = INT_ID,
    Long(i64) = LONG_ID,
    Float(f32) = FLOAT_ID,
    Double(f64) = DOUBLE_ID,
    ByteArray(Box<[u8]>) = BYTE_ARRAY_ID,
    String(String) = STRING_ID,
    List(Box<[NbtTag]>) = LIST_ID,
    Compound(NbtCompound) = COMPOUND_ID,
    IntArray(Box<[i32]>) = INT_ARRAY_ID,
    LongArray(Box<[i64]>) = LONG_ARRAY_ID,
}

impl NbtTag {
    /// Returns the numeric id associated with the data type.
    pub const fn get_type_id(&self) -> u8 {
        match self {
            NbtTag::End => END_ID,
            NbtTag::Byte(_) => BYTE_ID,
            NbtTag::Short(_) => SHORT_ID,
            NbtTag::Int(_) => INT_ID,
            NbtTag::Long(_) => LONG_ID,
            NbtTag::Float(_) => FLOAT_ID,
            NbtTag::Double(_) => DOUBLE_ID,
            NbtTag::ByteArray(_) => BYTE_ARRAY_ID,
            NbtTag::String(_) => STRING_ID,
            NbtTag::List(_) => LIST_ID,
            NbtTag::Compound(_) => COMPOUND_ID,
            NbtTag::IntArray(_) => INT_ARRAY_ID,
            NbtTag::LongArray(_) => LONG_ARRAY_ID,
        }
    }

    pub fn serialize_data<B: BufMut>(&self, buf: &mut B) -> Result<(), Error> {
        match self {
            NbtTag::End => {}
            NbtTag::Byte(byte) => buf.put_i8(*byte),
            NbtTag::Short(short) => buf.put_i16(*short),
            NbtTag::Int(int) => buf.put_i32(*int),
            NbtTag::Long(long) => buf.put_i64(*long),
            NbtTag::Float(float) => buf.put_f32(*float),
            NbtTag::Double(double) => buf.put_f64(*double),
            NbtTag::ByteArray(byte_array) => {
                put_length(buf, byte_array.len())?;
                buf.put_slice(byte_array);
            }
            NbtTag::String(string) => put_nbt_string(buf, string)?,
            NbtTag::List(list) => {
                let element_id = list.first().map_or(END_ID, NbtTag::get_type_id);
                if let Some(other) = list.iter().find(|tag| tag.get_type_id() != element_id) {
                    return Err(Error::MixedList {
                        expected: element_id,
                        found: other.get_type_id(),
                    });
                }

                buf.put_u8(element_id);
                put_length(buf, list.len())?;
                for tag in list {
                    tag.serialize_data(buf)?;
                }
            }
            NbtTag::Compound(compound) => compound.serialize_content(buf)?,
            NbtTag::IntArray(int_array) => {
                put_length(buf, int_array.len())?;
                for int in int_array {
                    buf.put_i32(*int);
                }
            }
            NbtTag::LongArray(long_array) => {
                put_length(buf, long_array.len())?;
                for long in long_array {
                    buf.put_i64(*long);
                }
            }
        }
        Ok(())
    }

    /// Smallest number of bytes a tag of type `tag_id` takes once encoded.
    const fn min_encoded_size(tag_id: u8) -> Option<usize> {
        match tag_id {
            END_ID => Some(0),
            BYTE_ID | COMPOUND_ID => Some(1),
            SHORT_ID | STRING_ID => Some(2),
            INT_ID | FLOAT_ID | BYTE_ARRAY_ID | INT_ARRAY_ID | LONG_ARRAY_ID => Some(4),
            LIST_ID => Some(5),
            LONG_ID | DOUBLE_ID => Some(8),
            _ => None,
        }
    }

    pub fn deserialize_data<B: Buf>(buf: &mut B, tag_id: u8) -> Result<NbtTag, Error> {
        Self::read_data(buf, tag_id, 0)
    }

    /// Reads the payload of a tag found `depth` levels below the root.
    pub(crate) fn read_data<B: Buf>(
        buf: &mut B,
        tag_id: u8,
        depth: usize,
    ) -> Result<NbtTag, Error> {
        let tag = match tag_id {
            END_ID => NbtTag::End,
            BYTE_ID => {
                ensure_remaining(buf.remaining(), 1)?;
                NbtTag::Byte(buf.get_i8())
            }
            SHORT_ID => {
                ensure_remaining(buf.remaining(), 2)?;
                NbtTag::Short(buf.get_i16())
            }
            INT_ID => {
                ensure_remaining(buf.remaining(), 4)?;
                NbtTag::Int(buf.get_i32())
            }
            LONG_ID => {
                ensure_remaining(buf.remaining(), 8)?;
                NbtTag::Long(buf.get_i64())
            }
            FLOAT_ID => {
                ensure_remaining(buf.remaining(), 4)?;
                NbtTag::Float(buf.get_f32())
            }
            DOUBLE_ID => {
                ensure_remaining(buf.remaining(), 8)?;
                NbtTag::Double(buf.get_f64())
            }
            BYTE_ARRAY_ID => {
                let len = get_length(buf)?;
                ensure_remaining(buf.remaining(), len)?;
                NbtTag::ByteArray(buf.copy_to_bytes(len).to_vec().into_boxed_slice())
            }
            STRING_ID => NbtTag::String(get_nbt_string(buf)?),
            LIST_ID => {
                if depth > MAX_DEPTH {
                    return Err(Error::TooDeep(MAX_DEPTH));
                }
                ensure_remaining(buf.remaining(), 1)?;
                let element_id = buf.get_u8();
                let len = get_length(buf)?;

                if len > 0 {
                    if element_id == END_ID {
                        return Err(Error::UntypedList(len));
                    }
                    let element_size =
                        Self::min_encoded_size(element_id).ok_or(Error::UnknownTagId(element_id))?;
                    // Never trust the declared length for the allocation.
                    ensure_remaining(buf.remaining(), len.saturating_mul(element_size))?;
                }

                let mut list = Vec::with_capacity(len);
                for _ in 0..len {
                    list.push(NbtTag::read_data(buf, element_id, depth + 1)?);
                }
                NbtTag::List(list.into_boxed_slice())
            }
            COMPOUND_ID => NbtTag::Compound(NbtCompound::read_content(buf, depth)?),
            INT_ARRAY_ID => {
                let len = get_length(buf)?;
                ensure_remaining(buf.remaining(), len.saturating_mul(4))?;
                NbtTag::IntArray((0..len).map(|_| buf.get_i32()).collect())
            }
            LONG_ARRAY_ID => {
                let len = get_length(buf)?;
                ensure_remaining(buf.remaining(), len.saturating_mul(8))?;
                NbtTag::LongArray((0..len).map(|_| buf.get_i64()).collect())
            }
            _ => return Err(Error::UnknownTagId(tag_id)),
        };
        Ok(tag)
    }

    pub fn extract_byte(&self) -> Option<i8> {
        match self {
            NbtTag::Byte(byte) => Some(*byte),
            _ => None,
        }
    }

    pub fn extract_short(&self) -> Option<i16> {
        match self {
            NbtTag::Short(short) => Some(*short),
            _ => None,
        }
    }

    pub fn extract_int(&self) -> Option<i32> {
        match self {
            NbtTag::Int(int) => Some(*int),
            _ => None,
        }
    }

    pub fn extract_long(&self) -> Option<i64> {
        match self {
            NbtTag::Long(long) => Some(*long),
            _ => None,
        }
    }

    pub fn extract_double(&self) -> Option<f64> {
        match self {
            NbtTag::Double(double) => Some(*double),
            _ => None,
        }
    }

    pub fn extract_bool(&self) -> Option<bool> {
        self.extract_byte().map(|byte| byte != 0)
    }

    pub fn extract_string(&self) -> Option<&str> {
        match self {
            NbtTag::String(string) => Some(string),
            _ => None,
        }
    }

    pub fn extract_list(&self) -> Option<&[NbtTag]> {
        match self {
            NbtTag::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn extract_compound(&self) -> Option<&NbtCompound> {
        match self {
            NbtTag::Compound(compound) => Some(compound),
            _ => None,
        }
    }

    pub fn extract_int_array(&self) -> Option<&[i32]> {
        match self {
            NbtTag::IntArray(int_array) => Some(int_array),
            _ => None,
        }
    }
}

impl From<&str> for NbtTag {
    fn from(value: &str) -> Self {
        NbtTag::String(value.to_string())
    }
}

impl From<String> for NbtTag {
    fn from(value: String) -> Self {
        NbtTag::String(value)
    }
}

impl From<i8> for NbtTag {
    fn from(value: i8) -> Self {
        NbtTag::Byte(value)
    }
}

impl From<i32> for NbtTag {
    fn from(value: i32) -> Self {
        NbtTag::Int(value)
    }
}

impl From<bool> for NbtTag {
    fn from(value: bool) -> Self {
        NbtTag::Byte(value as i8)
    }
}

impl From<NbtCompound> for NbtTag {
    fn from(value: NbtCompound) -> Self {
        NbtTag::Compound(value)
    }
}
