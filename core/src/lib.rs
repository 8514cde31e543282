#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]
#![recursion_limit = "60"]

//! This is the core library of dcmset containing the concepts,
//! data structures and traits of a self-describing attribute container.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] comprises the element level data types:
//!   attribute tags, value representations and the [`Element`] itself.
//! - [`value`] holds the typed value lists of an element,
//!   one per [value domain](value::ValueDomain).
//! - [`dictionary`] describes common behavior of attribute dictionaries,
//!   which translate keywords and/or tags to a dictionary entry
//!   containing the default value representation of the attribute.

pub mod dictionary;
pub mod header;
pub mod value;

pub use dictionary::DataDictionary;
pub use header::{Element, Tag, VR};
pub use value::{CastValueError, Value, ValueDomain};

// re-export crates that are part of the public API
pub use smallvec;
