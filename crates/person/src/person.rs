//! Person record and its wire format.
//!
//! ```text
//! [len: u8][age: u8][gender: u8][name: len - 3 bytes, UTF-8]
//! ```
//!
//! `len` counts the whole packet, itself included.

use std::fmt;

use bindec_buffers::print_octets;
use bindec_codec::{
    declared_length, peek_declared_length, remainder, Decode, DecodeError, Encode, EncodeError,
    Reader, Writer,
};

use crate::{Age, Gender, Name};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: Name,
    pub age: Age,
    pub gender: Gender,
}

impl Person {
    /// Length, age and gender bytes.
    pub const FIXED_FIELDS: usize = 3;

    pub fn new(name: Name, age: Age, gender: Gender) -> Self {
        Self { name, age, gender }
    }
}

impl Decode for Person {
    const MINIMUM_PACKET_SIZE: usize = Person::FIXED_FIELDS;

    fn read(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        peek_declared_length::<u8>(reader)?;

        let packet_length = reader.u8()?;
        let age = reader.u8()?;
        let gender = reader.u8()?;

        let name_len = remainder(packet_length as usize, Person::FIXED_FIELDS)?;
        let name_offset = reader.position();
        let name = String::from_utf8(reader.take_bytes(name_len)?).map_err(|e| {
            DecodeError::InvalidField {
                field: "name",
                detail: format!(
                    "invalid UTF-8 at offset {}: {}",
                    name_offset + e.utf8_error().valid_up_to(),
                    print_octets(e.as_bytes(), 16)
                ),
            }
        })?;

        Ok(Self {
            name: Name::new(name),
            age: Age(age),
            gender: Gender(gender),
        })
    }
}

impl Encode for Person {
    fn write(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        writer.u8(declared_length::<u8>(
            Person::FIXED_FIELDS + self.name.len(),
        )?);
        writer.u8(self.age.0);
        writer.u8(self.gender.0);
        writer.utf8(self.name.as_str());
        Ok(())
    }
}

/// Renders `"Last, First (GenderAge)"`, e.g. `"Doe, John (M35)"`.
impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#} ({}{})", self.name, self.gender, self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bindec_codec::{decode, encode, ErrorKind};

    #[test]
    fn decode_reads_fields_in_order() {
        let person: Person = decode(&[7, 20, b'F', b'A', b'n', b'n', b'a']).unwrap();
        assert_eq!(person.age, Age(20));
        assert_eq!(person.gender, Gender(b'F'));
        assert_eq!(person.name.as_str(), "Anna");
    }

    #[test]
    fn underflowing_length_is_invalid_input() {
        let err = decode::<Person>(&[2, 40, b'F']).unwrap_err();
        assert_eq!(
            err,
            DecodeError::LengthUnderflow {
                declared: 2,
                consumed: 3
            }
        );
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn bad_utf8_name_is_invalid_input() {
        let err = decode::<Person>(&[5, 30, b'M', 0xC3, 0x28]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidField {
                field: "name",
                detail: "invalid UTF-8 at offset 3: c3 28".to_string(),
            }
        );
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn encode_writes_declared_length() {
        let person = Person::new(Name::new("Al"), Age(9), Gender(b'M'));
        assert_eq!(encode(&person).unwrap(), [5, 9, b'M', b'A', b'l']);
    }

    #[test]
    fn encode_rejects_names_past_u8_length() {
        let person = Person::new(Name::new("x".repeat(253)), Age(1), Gender(b'F'));
        assert_eq!(
            encode(&person),
            Err(EncodeError::TooLong { len: 256, width: 1 })
        );

        let person = Person::new(Name::new("x".repeat(252)), Age(1), Gender(b'F'));
        assert_eq!(encode(&person).map(|b| b[0]), Ok(255));
    }
}
