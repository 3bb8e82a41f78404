use bytes::{Buf, BufMut, Bytes, BytesMut};
use std::vec::IntoIter;

use crate::tag::NbtTag;
use crate::{
    COMPOUND_ID, END_ID, Error, MAX_DEPTH, ensure_remaining, get_nbt_string, put_nbt_string,
};

#[derive(Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct NbtCompound {
    pub child_tags: Vec<(String, NbtTag)>,
}

impl NbtCompound {
    pub fn new() -> NbtCompound {
        NbtCompound {
            child_tags: Vec::new(),
        }
    }

    /// Reads a root compound that is not preceded by a root name.
    pub fn read_unnamed<B: Buf>(buf: &mut B) -> Result<NbtCompound, Error> {
        ensure_remaining(buf.remaining(), 1)?;
        let tag_type_id = buf.get_u8();
        if tag_type_id != COMPOUND_ID {
            return Err(Error::NoRootCompound(tag_type_id));
        }

        NbtCompound::deserialize_content(buf)
    }

    /// Writes this compound as an unnamed root compound.
    pub fn write_unnamed(&self) -> Result<Bytes, Error> {
        let mut buf = BytesMut::new();
        buf.put_u8(COMPOUND_ID);
        self.serialize_content(&mut buf)?;
        Ok(buf.freeze())
    }

    pub fn deserialize_content<B: Buf>(buf: &mut B) -> Result<NbtCompound, Error> {
        NbtCompound::read_content(buf, 0)
    }

    /// Reads the entries of a compound found `depth` levels below the root.
    pub(crate) fn read_content<B: Buf>(buf: &mut B, depth: usize) -> Result<NbtCompound, Error> {
        if depth > MAX_DEPTH {
            return Err(Error::TooDeep(MAX_DEPTH));
        }
        let mut compound = NbtCompound::new();

        loop {
            ensure_remaining(buf.remaining(), 1)?;
            let tag_id = buf.get_u8();
            if tag_id == END_ID {
                break;
            }

            let name = get_nbt_string(buf)?;
            let tag = NbtTag::read_data(buf, tag_id, depth + 1)?;
            compound.put(&name, tag);
        }

        Ok(compound)
    }

    pub fn serialize_content<B: BufMut>(&self, buf: &mut B) -> Result<(), Error> {
        for (name, tag) in &self.child_tags {
            buf.put_u8(tag.get_type_id());
            put_nbt_string(buf, name)?;
            tag.serialize_data(buf)?;
        }
        buf.put_u8(END_ID);
        Ok(())
    }

    /// Stores `value` under `name`. An existing entry with the same name is
    /// overwritten in place, so a key never appears twice.
    pub fn put(&mut self, name: &str, value: impl Into<NbtTag>) {
        let value = value.into();
        match self.child_tags.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value,
            None => self.child_tags.push((name.to_string(), value)),
        }
    }

    pub fn put_byte(&mut self, name: &str, value: i8) {
        self.put(name, NbtTag::Byte(value));
    }

    pub fn put_bool(&mut self, name: &str, value: bool) {
        self.put(name, NbtTag::Byte(if value { 1 } else { 0 }));
    }

    pub fn put_short(&mut self, name: &str, value: i16) {
        self.put(name, NbtTag::Short(value));
    }

    pub fn put_int(&mut self, name: &str, value: i32) {
        self.put(name, NbtTag::Int(value));
    }

    pub fn put_long(&mut self, name: &str, value: i64) {
        self.put(name, NbtTag::Long(value));
    }

    pub fn put_double(&mut self, name: &str, value: f64) {
        self.put(name, NbtTag::Double(value));
    }

    pub fn put_string(&mut self, name: &str, value: String) {
        self.put(name, NbtTag::String(value));
    }

    pub fn put_component(&mut self, name: &str, value: NbtCompound) {
        self.put(name, NbtTag::Compound(value));
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&NbtTag> {
        self.child_tags
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn remove(&mut self, name: &str) -> Option<NbtTag> {
        let index = self.child_tags.iter().position(|(key, _)| key == name)?;
        Some(self.child_tags.remove(index).1)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.child_tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.child_tags.is_empty()
    }

    pub fn get_byte(&self, name: &str) -> Option<i8> {
        self.get(name).and_then(|tag| tag.extract_byte())
    }

    pub fn get_short(&self, name: &str) -> Option<i16> {
        self.get(name).and_then(|tag| tag.extract_short())
    }

    pub fn get_int(&self, name: &str) -> Option<i32> {
        self.get(name).and_then(|tag| tag.extract_int())
    }

    pub fn get_long(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(|tag| tag.extract_long())
    }

    pub fn get_double(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(|tag| tag.extract_double())
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(|tag| tag.extract_bool())
    }

    pub fn get_string(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|tag| tag.extract_string())
    }

    pub fn get_list(&self, name: &str) -> Option<&[NbtTag]> {
        self.get(name).and_then(|tag| tag.extract_list())
    }

    pub fn get_compound(&self, name: &str) -> Option<&NbtCompound> {
        self.get(name).and_then(|tag| tag.extract_compound())
    }
}

impl FromIterator<(String, NbtTag)> for NbtCompound {
    fn from_iter<T: IntoIterator<Item = (String, NbtTag)>>(iter: T) -> Self {
        let mut compound = NbtCompound::new();
        compound.extend(iter);
        compound
    }
}

impl IntoIterator for NbtCompound {
    type Item = (String, NbtTag);
    type IntoIter = IntoIter<(String, NbtTag)>;

    fn into_iter(self) -> Self::IntoIter {
        self.child_tags.into_iter()
    }
}

impl Extend<(String, NbtTag)> for NbtCompound {
    fn extend<T: IntoIterator<Item = (String, NbtTag)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(&key, value);
        }
    }
}

impl AsRef<NbtCompound> for NbtCompound {
    fn as_ref(&self) -> &NbtCompound {
        self
    }
}
