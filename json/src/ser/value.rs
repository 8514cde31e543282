//! Value list serialization

use dcmset_core::value::C;
use serde::ser::SerializeSeq;
use serde::Serialize;

use crate::{INFINITY, NAN, NEG_INFINITY};

/// Wrapper type for a list of strings
/// which should always be encoded as strings.
///
/// Should be used for the string domain,
/// except for the value representation PN.
#[derive(Debug, Clone)]
pub struct AsStrings<'a>(&'a C<String>);

impl<'a> From<&'a C<String>> for AsStrings<'a> {
    fn from(value: &'a C<String>) -> Self {
        AsStrings(value)
    }
}

impl Serialize for AsStrings<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.0.iter())
    }
}

/// Wrapper type for a list of numbers
/// which should preferably be encoded as JSON numbers,
/// unless serialization would result in precision loss
/// or the number has no JSON representation.
#[derive(Debug, Clone)]
pub struct AsNumbers<'a, T>(&'a C<T>);

impl<'a, T> From<&'a C<T>> for AsNumbers<'a, T> {
    fn from(value: &'a C<T>) -> Self {
        AsNumbers(value)
    }
}

impl Serialize for AsNumbers<'_, i64> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut ser = serializer.serialize_seq(Some(self.0.len()))?;
        for number in self.0 {
            // JSON readers may lose precision beyond 32 bits
            if let Ok(narrowed) = i32::try_from(*number) {
                ser.serialize_element(&narrowed)?;
            } else {
                ser.serialize_element(&number.to_string())?;
            }
        }
        ser.end()
    }
}

impl Serialize for AsNumbers<'_, f64> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut ser = serializer.serialize_seq(Some(self.0.len()))?;
        for number in self.0 {
            if number.is_finite() {
                ser.serialize_element(number)?;
            } else if number.is_nan() {
                ser.serialize_element(NAN)?;
            } else if number.is_sign_positive() {
                ser.serialize_element(INFINITY)?;
            } else {
                ser.serialize_element(NEG_INFINITY)?;
            }
        }
        ser.end()
    }
}

/// Wrapper type for binary values
/// which should be encoded as a base64 inline string.
///
/// Multiple byte strings are concatenated.
#[derive(Debug, Clone)]
pub struct InlineBinary<'a>(&'a C<Vec<u8>>);

impl<'a> From<&'a C<Vec<u8>>> for InlineBinary<'a> {
    fn from(value: &'a C<Vec<u8>>) -> Self {
        InlineBinary(value)
    }
}

impl Serialize for InlineBinary<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use base64::Engine;
        let str = match self.0.as_slice() {
            [single] => base64::engine::general_purpose::STANDARD.encode(single),
            all => base64::engine::general_purpose::STANDARD.encode(all.concat()),
        };
        serializer.serialize_str(&str)
    }
}

/// Wrapper type for a list of strings
/// to be encoded as person names.
///
/// Should only used for the value representation PN.
#[derive(Debug, Clone)]
pub struct AsPersonNames<'a>(&'a C<String>);

impl<'a> From<&'a C<String>> for AsPersonNames<'a> {
    fn from(value: &'a C<String>) -> Self {
        AsPersonNames(value)
    }
}

impl Serialize for AsPersonNames<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.0.iter().map(|p| PersonNameDef::from(p.as_str())))
    }
}

/// Wrapper type for a string
/// to be interpreted as a person's name.
#[derive(Debug, Clone, Serialize)]
pub struct PersonNameDef<'a> {
    #[serde(rename = "Alphabetic")]
    alphabetic: &'a str,
}

impl<'a> From<&'a str> for PersonNameDef<'a> {
    fn from(value: &'a str) -> Self {
        PersonNameDef { alphabetic: value }
    }
}
