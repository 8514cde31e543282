#![allow(clippy::derive_partial_eq_without_eq)]
//! This crate contains a high-level abstraction for reading and manipulating
//! attribute containers.
//!
//! A [`DataSet`] is an ordered mapping from attribute [tags](Tag)
//! to [elements](dcmset_core::Element),
//! together with the transfer syntax the data set is meant to be encoded in.
//! Attributes may be addressed by tag, by `(group, element)` pair,
//! or by keyword (e.g. `"PatientName"`),
//! in which case the data set's dictionary resolves the keyword.
//!
//! # Examples
//!
//! ```
//! # use dcmset_object::{DataSet, VR};
//! let mut data_set = DataSet::new();
//! data_set.add_value("PatientName", ["Doe^John"])?;
//! data_set.add_value("SelectorUSValue", [1, 2, 3])?;
//!
//! assert_eq!(data_set.vr("PatientName")?, VR::PN);
//! assert_eq!(data_set.as_int("SelectorUSValue")?.as_slice(), &[1, 2, 3]);
//! assert_eq!(data_set.len(), 2);
//! # Ok::<(), dcmset_object::AccessError>(())
//! ```
pub mod mem;

pub use crate::mem::{AttributeKey, DataSet, InMemElement};
pub use dcmset_core::{Tag, VR};
pub use dcmset_dictionary_std::StandardDataDictionary;

use dcmset_core::value::CastValueError;
use snafu::{Backtrace, Snafu};

/// An error which may occur when looking up or manipulating
/// the attributes of a data set.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum AccessError {
    /// The data set has no element with the given tag
    #[snafu(display("No such data element with tag {}", tag))]
    NoSuchDataElementTag { tag: Tag, backtrace: Backtrace },

    /// Could not resolve attribute name from the data dictionary
    #[snafu(display("Unknown data attribute named `{}`", name))]
    NoSuchAttributeName { name: String, backtrace: Backtrace },

    /// The dictionary does not know the attribute,
    /// so no value representation can be assigned to it
    #[snafu(display("No value representation known for attribute {}", tag))]
    UnknownVr { tag: Tag, backtrace: Backtrace },

    /// The values given or requested are not in the element's value domain
    #[snafu(display("Value mismatch in attribute {}", tag))]
    ValueMismatch {
        tag: Tag,
        source: CastValueError,
        backtrace: Backtrace,
    },
}

/// Type alias for a result from this crate.
pub type Result<T, E = AccessError> = std::result::Result<T, E>;

