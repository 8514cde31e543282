//! DICOM JSON deserialization module

use std::{marker::PhantomData, str::FromStr};

use crate::DicomJson;
use dcmset_core::value::{Value, C};
use dcmset_core::{DataDictionary, Element, Tag, ValueDomain, VR};
use dcmset_object::DataSet;
use serde::de::{Deserialize, DeserializeOwned, Error as _, Visitor};

use self::value::{BulkDataUri, DicomJsonPerson, NumberOrText};

mod value;

/// Deserialize a piece of data from a string of JSON.
pub fn from_str<'a, T>(string: &'a str) -> Result<T, serde_json::Error>
where
    DicomJson<T>: Deserialize<'a>,
{
    serde_json::from_str::<DicomJson<T>>(string).map(DicomJson::into_inner)
}

/// Deserialize a piece of data from a byte slice.
pub fn from_slice<'a, T>(slice: &'a [u8]) -> Result<T, serde_json::Error>
where
    DicomJson<T>: Deserialize<'a>,
{
    serde_json::from_slice::<DicomJson<T>>(slice).map(DicomJson::into_inner)
}

/// Deserialize a piece of data from a standard byte reader.
pub fn from_reader<R, T>(reader: R) -> Result<T, serde_json::Error>
where
    R: std::io::Read,
    DicomJson<T>: DeserializeOwned,
{
    serde_json::from_reader::<_, DicomJson<T>>(reader).map(DicomJson::into_inner)
}

/// Deserialize a piece of data from a serde JSON value.
pub fn from_value<T>(value: serde_json::Value) -> Result<T, serde_json::Error>
where
    DicomJson<T>: DeserializeOwned,
{
    serde_json::from_value::<DicomJson<T>>(value).map(DicomJson::into_inner)
}

#[derive(Debug)]
struct DataSetVisitor<D>(PhantomData<D>);

impl<D> Default for DataSetVisitor<D> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<'de, D> Visitor<'de> for DataSetVisitor<D>
where
    D: Default + DataDictionary,
{
    type Value = DataSet<D>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a DICOM data set map")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut obj = DataSet::<D>::new_with_dict(D::default());
        while let Some(e) = map.next_entry::<DicomJson<Tag>, JsonDataElement<D>>()? {
            let (DicomJson(tag), JsonDataElement { elem, bulk_data_uri }) = e;
            if bulk_data_uri.is_some() {
                tracing::warn!("bulk data URI is not supported; skipping {}", tag);
            } else {
                obj.put(tag, elem);
            }
        }
        Ok(obj)
    }
}

impl<'de, I> Deserialize<'de> for DicomJson<DataSet<I>>
where
    I: Default + DataDictionary,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer
            .deserialize_map(DataSetVisitor::default())
            .map(DicomJson)
    }
}

impl<'de, I> Deserialize<'de> for DicomJson<Vec<DataSet<I>>>
where
    I: Default + DataDictionary,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let items: Vec<DicomJson<DataSet<I>>> = Deserialize::deserialize(deserializer)?;
        Ok(DicomJson(
            items.into_iter().map(DicomJson::into_inner).collect(),
        ))
    }
}

#[derive(Debug)]
struct JsonDataElement<D> {
    elem: Element<DataSet<D>>,
    bulk_data_uri: Option<BulkDataUri>,
}

#[derive(Debug)]
struct DataElementVisitor<D>(PhantomData<D>);

/// Read the JSON value list of an element
/// into the value domain of its value representation.
fn read_values<D, E>(vr: VR, value: serde_json::Value) -> Result<Value<DataSet<D>>, E>
where
    D: Default + DataDictionary,
    E: serde::de::Error,
{
    let values = match vr.domain() {
        ValueDomain::DataSets => {
            let items: Vec<DicomJson<DataSet<D>>> =
                serde_json::from_value(value).map_err(E::custom)?;
            Value::new_sequence(
                items
                    .into_iter()
                    .map(DicomJson::into_inner)
                    .collect::<C<_>>(),
            )
        }
        // person names
        ValueDomain::Strings if vr == VR::PN => {
            let items: Vec<Option<DicomJsonPerson>> =
                serde_json::from_value(value).map_err(E::custom)?;
            items
                .into_iter()
                .map(|v| v.map(|p| p.to_string()).unwrap_or_default())
                .collect::<C<String>>()
                .into()
        }
        // always text, null stands for an empty value
        ValueDomain::Strings => {
            let items: Vec<Option<String>> = serde_json::from_value(value).map_err(E::custom)?;
            items
                .into_iter()
                .map(|v| v.unwrap_or_default())
                .collect::<C<String>>()
                .into()
        }
        // sometimes numbers, sometimes text,
        // should parse on the spot
        ValueDomain::Integers => {
            let items: Vec<NumberOrText<i64>> =
                serde_json::from_value(value).map_err(E::custom)?;
            items
                .iter()
                .map(NumberOrText::to_num)
                .collect::<Result<C<i64>, _>>()
                .map_err(E::custom)?
                .into()
        }
        ValueDomain::Reals => {
            let items: Vec<NumberOrText<f64>> =
                serde_json::from_value(value).map_err(E::custom)?;
            items
                .iter()
                .map(NumberOrText::to_num)
                .collect::<Result<C<f64>, _>>()
                .map_err(E::custom)?
                .into()
        }
        // bytes listed as numbers make up a single byte string
        ValueDomain::Binary => {
            let items: Vec<u8> = serde_json::from_value(value).map_err(E::custom)?;
            items.into()
        }
    };
    Ok(values)
}

impl<'de, D> Visitor<'de> for DataElementVisitor<D>
where
    D: Default + DataDictionary,
{
    type Value = JsonDataElement<D>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a data element object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut vr = None;
        let mut value: Option<serde_json::Value> = None;
        let mut inline_binary: Option<String> = None;
        let mut bulk_data_uri = None;

        while let Some(key) = map.next_key::<String>()? {
            match &*key {
                "vr" => {
                    if vr.is_some() {
                        return Err(A::Error::custom("\"vr\" should only be set once"));
                    }

                    let val: String = map.next_value()?;
                    vr = Some(VR::from_str(&val).unwrap_or(VR::UN));
                }
                "Value" => {
                    if inline_binary.is_some() {
                        return Err(A::Error::custom(
                            "\"Value\" conflicts with \"InlineBinary\"",
                        ));
                    }

                    if bulk_data_uri.is_some() {
                        return Err(A::Error::custom("\"Value\" conflicts with \"BulkDataURI\""));
                    }

                    value = Some(map.next_value()?);
                }
                "InlineBinary" => {
                    if value.is_some() {
                        return Err(A::Error::custom(
                            "\"InlineBinary\" conflicts with \"Value\"",
                        ));
                    }

                    if bulk_data_uri.is_some() {
                        return Err(A::Error::custom(
                            "\"InlineBinary\" conflicts with \"BulkDataURI\"",
                        ));
                    }
                    // read value as string
                    let val: String = map.next_value()?;
                    inline_binary = Some(val);
                }
                "BulkDataURI" => {
                    if value.is_some() {
                        return Err(A::Error::custom("\"BulkDataURI\" conflicts with \"Value\""));
                    }

                    if inline_binary.is_some() {
                        return Err(A::Error::custom(
                            "\"BulkDataURI\" conflicts with \"InlineBinary\"",
                        ));
                    }

                    let val: BulkDataUri = map.next_value()?;
                    bulk_data_uri = Some(val);
                }
                _ => {
                    return Err(A::Error::custom("Unrecognized data element field"));
                }
            }
        }

        // ensure that VR is present
        let Some(vr) = vr else {
            return Err(A::Error::custom("missing VR field"));
        };

        let values = match (value, inline_binary) {
            (None, None) => None,
            (Some(value), None) => Some(read_values::<D, A::Error>(vr, value)?),
            (None, Some(inline_binary)) => {
                // decode from Base64
                use base64::Engine;
                let data = base64::engine::general_purpose::STANDARD
                    .decode(inline_binary)
                    .map_err(|_| A::Error::custom("inline binary data is not valid base64"))?;
                Some(Value::from(data))
            }
            (Some(_), Some(_)) => {
                return Err(A::Error::custom("\"Value\" conflicts with \"InlineBinary\""))
            }
        };

        let elem = match values {
            None => Element::empty(vr),
            Some(values) => Element::new(vr, values).map_err(A::Error::custom)?,
        };

        Ok(JsonDataElement {
            elem,
            bulk_data_uri,
        })
    }
}

impl<'de, I> Deserialize<'de> for JsonDataElement<I>
where
    I: Default + DataDictionary,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_struct(
            "DataElement",
            &["vr", "Value", "InlineBinary", "BulkDataURI"],
            DataElementVisitor(PhantomData),
        )
    }
}

#[derive(Debug)]
struct TagVisitor;

impl Visitor<'_> for TagVisitor {
    type Value = Tag;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a tag string in the form \"GGGGEEEE\"")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for DicomJson<Tag> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(TagVisitor).map(DicomJson)
    }
}

#[cfg(test)]
mod tests {
    use super::from_str;
    use dcmset_core::dcmset_value;
    use dcmset_core::{Element, Tag, VR};
    use dcmset_dictionary_std::tags;
    use dcmset_object::DataSet;
    use pretty_assertions::assert_eq;

    /// This asserts that two float slices are equal in size and content.
    /// It needs a special comparison for NAN values since assert_eq will not match.
    fn assert_float_slice_eq(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        assert!(actual
            .iter()
            .zip(expected.iter())
            .all(|(&a, &b)| (a == b) || (a.is_nan() && b.is_nan())));
    }

    #[test]
    fn can_parse_tags() {
        let serialized = "\"00080010\"";
        let tag: Tag = from_str(serialized).unwrap();
        assert_eq!(tag, Tag(0x0008, 0x0010));

        let serialized = "\"00200013\"";
        let tag: Tag = from_str(serialized).unwrap();
        assert_eq!(tag, Tag(0x0020, 0x0013));
    }

    #[test]
    fn can_parse_simple_data_sets() {
        let serialized = serde_json::json!({
            "00080005": {
                "Value": [ "ISO_IR 192" ],
                "vr": "CS"
            },
            "00080020": {
                "vr": "DA",
                "Value": [ "20130409" ]
            },
            "00080061": {
                "vr": "CS",
                "Value": [
                    "CT",
                    "PET"
                ]
            },
            "00080090": {
                "vr": "PN",
                "Value": [
                  {
                    "Alphabetic": "^Bob^^Dr."
                  }
                ]
            },
            "00091002": {
                "vr": "UN",
                "InlineBinary": "z0x9c8v7"
            },
            "00101010": {
                "vr": "AS",
                "Value": [ "30Y" ]
            }
        });

        let obj: DataSet = super::from_value(serialized).unwrap();

        assert_eq!(obj.len(), 6);
        assert_eq!(
            obj.element(tags::SPECIFIC_CHARACTER_SET).unwrap(),
            &Element::new(VR::CS, "ISO_IR 192").unwrap(),
        );
        assert_eq!(
            obj.as_string(Tag(0x0008, 0x0061)).unwrap().as_slice(),
            &["CT".to_string(), "PET".to_string()],
        );
        assert_eq!(obj.vr(Tag(0x0008, 0x0090)).unwrap(), VR::PN);
        assert_eq!(obj.as_string(Tag(0x0008, 0x0090)).unwrap()[0], "^Bob^^Dr.");
        assert_eq!(
            obj.as_binary(Tag(0x0009, 0x1002)).unwrap()[0],
            vec![0xcf, 0x4c, 0x7d, 0x73, 0xcb, 0xfb],
        );

        // document order is kept
        let keys: Vec<Tag> = obj.keys().collect();
        assert_eq!(
            keys,
            vec![
                Tag(0x0008, 0x0005),
                Tag(0x0008, 0x0020),
                Tag(0x0008, 0x0061),
                Tag(0x0008, 0x0090),
                Tag(0x0009, 0x1002),
                Tag(0x0010, 0x1010),
            ]
        );
    }

    #[test]
    fn can_parse_null_values() {
        let serialized = serde_json::json!({
            "00080008": {
                "Value": [
                  "DERIVED",
                  "PRIMARY",
                  "POST_PROCESSED",
                  "RT",
                  null,
                  null,
                  null,
                  null,
                  "100000"
                ],
                "vr": "CS"
              }
        });

        let obj: DataSet = super::from_value(serialized).unwrap();

        assert_eq!(
            obj.element(tags::IMAGE_TYPE).unwrap(),
            &Element::new(
                VR::CS,
                dcmset_value!(
                    Strings,
                    [
                        "DERIVED",
                        "PRIMARY",
                        "POST_PROCESSED",
                        "RT",
                        "",
                        "",
                        "",
                        "",
                        "100000",
                    ]
                )
            )
            .unwrap(),
        )
    }

    #[test]
    fn can_parse_empty_elements() {
        let obj: DataSet = from_str(r#"{"00100010": {"vr": "PN"}, "0040A043": {"vr": "SQ"}}"#)
            .unwrap();
        assert!(obj.is_element_empty(tags::PATIENT_NAME).unwrap());
        assert!(obj.is_data_set(tags::CONCEPT_NAME_CODE_SEQUENCE).unwrap());
        assert_eq!(obj.multiplicity(tags::CONCEPT_NAME_CODE_SEQUENCE).unwrap(), 0);
    }

    #[test]
    fn can_parse_nested_data_sets() {
        let obj: DataSet = from_str(
            r#"{
                "0040A043": {
                    "vr": "SQ",
                    "Value": [
                        { "00080100": { "vr": "SH", "Value": [ "121071" ] } },
                        {}
                    ]
                }
            }"#,
        )
        .unwrap();

        let items = obj.as_data_set(tags::CONCEPT_NAME_CODE_SEQUENCE).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_string(tags::CODE_VALUE).unwrap()[0], "121071");
        assert!(items[1].is_empty());
    }

    #[test]
    fn can_parse_numbers_given_as_text() {
        let obj: DataSet = from_str(
            r#"{
                "00200013": { "vr": "IS", "Value": [ 5, "6" ] },
                "00720083": { "vr": "UV", "Value": [ "876543245678" ] },
                "00101030": { "vr": "DS", "Value": [ 72.5, "80" ] }
            }"#,
        )
        .unwrap();

        assert_eq!(obj.as_int(tags::INSTANCE_NUMBER).unwrap().as_slice(), &[5, 6]);
        assert_eq!(
            obj.as_int(tags::SELECTOR_UV_VALUE).unwrap().as_slice(),
            &[876_543_245_678]
        );
        assert_eq!(
            obj.as_real(tags::PATIENT_WEIGHT).unwrap().as_slice(),
            &[72.5, 80.]
        );
    }

    #[test]
    fn can_resolve_bulk_data() {
        let serialized = serde_json::json!({
            "00100010": {
                "vr": "PN",
                "Value": [ { "Alphabetic": "Doe^John" } ]
            },
            "7FE00010": {
                "vr": "OW",
                "BulkDataURI": "http://localhost:8042/dicom-web/studies/1.2.3/series/4.5.6/instances/7.8.9/bulk/7fe00010"
            }
        });

        let obj: DataSet = super::from_value(serialized).unwrap();
        assert_eq!(obj.len(), 1);
        assert!(!obj.contains(tags::PIXEL_DATA));
    }

    #[test]
    fn can_resolve_nan_and_inf_float() {
        let serialized = serde_json::json!({
            "00720074": {
                "vr": "FD",
                "Value": [
                    5492.8545,
                    5462.5205,
                    "NaN",
                    "-inf",
                    "inf"
                ]
            }
        });

        let obj: DataSet = super::from_value(serialized).unwrap();
        let actual_values = obj.as_real(tags::SELECTOR_FD_VALUE).unwrap();
        let expected_values = &[
            5492.8545,
            5462.5205,
            f64::NAN,
            f64::NEG_INFINITY,
            f64::INFINITY,
        ];

        assert_float_slice_eq(actual_values, expected_values);
    }

    #[test]
    fn rejects_conflicting_fields() {
        let res = from_str::<DataSet>(
            r#"{"00091002": {"vr": "UN", "InlineBinary": "z0x9c8v7", "Value": [1]}}"#,
        );
        assert!(res.is_err());

        let res = from_str::<DataSet>(r#"{"00100010": {"Value": ["Doe^John"]}}"#);
        assert!(res.is_err());
    }

    #[test]
    fn rejects_values_outside_the_domain() {
        let res = from_str::<DataSet>(r#"{"00280010": {"vr": "US", "Value": ["many"]}}"#);
        assert!(res.is_err());

        let res = from_str::<DataSet>(r#"{"00100020": {"vr": "LO", "InlineBinary": "AAAA"}}"#);
        assert!(res.is_err());
    }
}
