//! DICOM JSON module
//!
//! This library provides serialization of data sets to JSON
//! and deserialization of JSON to data sets,
//! as per the [DICOM standard part 18 chapter F][1].
//!
//! [1]: https://dicom.nema.org/medical/dicom/current/output/chtml/part18/chapter_F.html
//!
//! The easiest path to serialization is in
//! using the functions readily available [`to_string`] and [`to_value`].
//! Alternatively, a data set can be enclosed by a [`DicomJson`] value,
//! which implements serialization via [Serde](serde).
//!
//! Element order is kept in both directions.
//! The conversion is not lossless in all cases:
//! the transfer syntax is left out,
//! and the byte buffers of a binary element are concatenated
//! into a single `InlineBinary` value,
//! so such an element reads back with a multiplicity of 1.
//!
//! # Example
//!
//! To serialize a data set to standard DICOM JSON:
//!
//! ```rust
//! # use dcmset_object::DataSet;
//! # use dcmset_dictionary_std::tags;
//! let mut data_set = DataSet::new();
//! data_set.add_value(tags::SERIES_DATE, "20230610")?;
//! data_set.add_value(tags::INSTANCE_NUMBER, 5_i64)?;
//!
//! let json = dcmset_json::to_string(&data_set)?;
//!
//! assert_eq!(
//!     json,
//!     r#"{"00080021":{"vr":"DA","Value":["20230610"]},"00200013":{"vr":"IS","Value":[5]}}"#
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Use [`DicomJson`] for greater control on how to serialize it:
//!
//! ```rust
//! # use dcmset_object::DataSet;
//! # use dcmset_dictionary_std::tags;
//! # let mut data_set = DataSet::new();
//! # data_set.add_value(tags::SERIES_DATE, "20230610")?;
//! # data_set.add_value(tags::INSTANCE_NUMBER, 5_i64)?;
//! let json_data_set = dcmset_json::DicomJson::from(&data_set);
//! let serialized = serde_json::to_value(json_data_set)?;
//!
//! assert_eq!(
//!     serialized,
//!     serde_json::json!({
//!         "00080021": {
//!             "vr": "DA",
//!             "Value": [ "20230610" ]
//!         },
//!         "00200013": {
//!             "vr": "IS",
//!             "Value": [ 5 ]
//!         }
//!     }),
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Going the other way:
//!
//! ```rust
//! # use dcmset_object::{DataSet, VR};
//! let data_set: DataSet = dcmset_json::from_str(r#"{
//!     "00100010": { "vr": "PN", "Value": [ { "Alphabetic": "Doe^John" } ] }
//! }"#)?;
//!
//! assert_eq!(data_set.vr("PatientName")?, VR::PN);
//! assert_eq!(data_set.as_string("PatientName")?[0], "Doe^John");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod de;
mod ser;

pub use crate::de::{from_reader, from_slice, from_str, from_value};
pub use crate::ser::{to_string, to_string_pretty, to_value, to_vec, to_writer};

// Non-finite numbers have no JSON number form
const NAN: &str = "NaN";
const INFINITY: &str = "inf";
const NEG_INFINITY: &str = "-inf";

/// A wrapper type for data sets and their constituents
/// to be serialized to and deserialized from DICOM JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct DicomJson<T>(T);

impl<T> DicomJson<T> {
    /// Unwrap the DICOM JSON wrapper,
    /// returning the underlying value.
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Obtain a reference to the underlying value.
    pub fn inner(&self) -> &T {
        &self.0
    }
}
