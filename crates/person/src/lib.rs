//! Example person record built on the bindec decode contract.
//!
//! A small length-prefixed packet carrying a name, an age and a gender
//! marker. It shows how a record type plugs into
//! [`bindec_codec::decode`] and [`bindec_codec::encode`].
//!
//! # Example
//!
//! ```
//! use bindec_codec::decode;
//! use bindec_person::Person;
//!
//! let buffer = [11, 35, b'M', b'J', b'o', b'h', b'n', b' ', b'D', b'o', b'e'];
//! let person: Person = decode(&buffer).unwrap();
//! assert_eq!(person.name.first(), "John");
//! assert_eq!(person.name.last(), "Doe");
//! assert_eq!(person.to_string(), "Doe, John (M35)");
//! ```

mod fields;
mod name;
mod person;

pub use fields::{Age, Gender};
pub use name::Name;
pub use person::Person;
