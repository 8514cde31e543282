//! DICOM JSON serialization module

use std::io::Write;

use crate::DicomJson;
use dcmset_core::value::Value;
use dcmset_core::{Tag, VR};
use dcmset_object::{DataSet, InMemElement};
use serde::{ser::SerializeMap, Serialize, Serializer};

use self::value::{AsNumbers, AsPersonNames, AsStrings, InlineBinary};
mod value;

/// Serialize a piece of data as a string of JSON.
///
/// Binary elements with more than one byte buffer
/// are written as one concatenated `InlineBinary` value.
pub fn to_string<T>(data: T) -> Result<String, serde_json::Error>
where
    DicomJson<T>: From<T> + Serialize,
{
    serde_json::to_string(&DicomJson::from(data))
}

/// Serialize a piece of data as a pretty-printed string of JSON.
pub fn to_string_pretty<T>(data: T) -> Result<String, serde_json::Error>
where
    DicomJson<T>: From<T> + Serialize,
{
    serde_json::to_string_pretty(&DicomJson::from(data))
}

/// Serialize a piece of data as a serde JSON value.
pub fn to_value<T>(data: T) -> Result<serde_json::Value, serde_json::Error>
where
    DicomJson<T>: From<T> + Serialize,
{
    serde_json::to_value(&DicomJson::from(data))
}

/// Serialize a piece of data to a vector of bytes.
pub fn to_vec<T>(data: T) -> Result<Vec<u8>, serde_json::Error>
where
    DicomJson<T>: From<T> + Serialize,
{
    serde_json::to_vec(&DicomJson::from(data))
}

/// Serialize a piece of data to a byte writer.
pub fn to_writer<W, T>(writer: W, data: T) -> Result<(), serde_json::Error>
where
    DicomJson<T>: From<T> + Serialize,
    W: Write,
{
    serde_json::to_writer(writer, &DicomJson::from(data))
}

impl<'a, D> From<&'a DataSet<D>> for DicomJson<&'a DataSet<D>> {
    fn from(value: &'a DataSet<D>) -> Self {
        Self(value)
    }
}

impl<D> Serialize for DicomJson<&'_ DataSet<D>> {
    /// Serializes the data set as a map of tag to element,
    /// in the order of the data set.
    ///
    /// The transfer syntax is not part of the output.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(
            self.0
                .into_iter()
                .map(|(tag, elem)| (DicomJson(tag), DicomJson(elem))),
        )
    }
}

impl<D> From<DataSet<D>> for DicomJson<DataSet<D>> {
    fn from(value: DataSet<D>) -> Self {
        Self(value)
    }
}

impl<D> Serialize for DicomJson<DataSet<D>> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        DicomJson(&self.0).serialize(serializer)
    }
}

impl<'a, D> From<&'a [DataSet<D>]> for DicomJson<&'a [DataSet<D>]> {
    fn from(value: &'a [DataSet<D>]) -> Self {
        Self(value)
    }
}

impl<D> Serialize for DicomJson<&'_ [DataSet<D>]> {
    /// Serializes the sequence of data sets as a JSON array.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.0.iter().map(DicomJson))
    }
}

impl<D> From<Vec<DataSet<D>>> for DicomJson<Vec<DataSet<D>>> {
    fn from(value: Vec<DataSet<D>>) -> Self {
        Self(value)
    }
}

impl<D> Serialize for DicomJson<Vec<DataSet<D>>> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        DicomJson(self.0.as_slice()).serialize(serializer)
    }
}

impl<'a, D> From<&'a InMemElement<D>> for DicomJson<&'a InMemElement<D>> {
    fn from(value: &'a InMemElement<D>) -> Self {
        Self(value)
    }
}

impl<D> Serialize for DicomJson<&'_ InMemElement<D>> {
    /// Serializes the element as a single JSON object with the fields:
    ///
    /// - `"vr"`, containing the value representation;
    /// - Either `"Value"` (as an array of values)
    ///   or `"InlineBinary"` (binary data in base64),
    ///   if the value is not empty.
    ///
    /// The tag is not encoded,
    /// as it is typically serialized as the entry key within a data set.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut serializer = serializer.serialize_map(None)?;
        let vr = self.0.vr();
        serializer.serialize_entry("vr", vr.to_string())?;

        match self.0.value() {
            value if value.is_empty() => {
                // no-op
            }
            Value::DataSets(items) => {
                serializer.serialize_entry("Value", &DicomJson(items.as_slice()))?;
            }
            Value::Strings(strings) if vr == VR::PN => {
                serializer.serialize_entry("Value", &AsPersonNames::from(strings))?;
            }
            Value::Strings(strings) => {
                serializer.serialize_entry("Value", &AsStrings::from(strings))?;
            }
            Value::Integers(numbers) => {
                serializer.serialize_entry("Value", &AsNumbers::from(numbers))?;
            }
            Value::Reals(numbers) => {
                serializer.serialize_entry("Value", &AsNumbers::from(numbers))?;
            }
            Value::Binary(data) => {
                serializer.serialize_entry("InlineBinary", &InlineBinary::from(data))?;
            }
        }

        serializer.end()
    }
}

impl<D> From<InMemElement<D>> for DicomJson<InMemElement<D>> {
    fn from(value: InMemElement<D>) -> Self {
        Self(value)
    }
}

impl<D> Serialize for DicomJson<InMemElement<D>> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        DicomJson(&self.0).serialize(serializer)
    }
}

impl From<Tag> for DicomJson<Tag> {
    fn from(value: Tag) -> Self {
        Self(value)
    }
}

impl Serialize for DicomJson<Tag> {
    /// Serializes the tag as a single string in uppercase hexadecimal,
    /// with no separators or delimiters (`"GGGGEEEE"`).
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_hex())
    }
}
