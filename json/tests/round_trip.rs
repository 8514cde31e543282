//! A data set written to DICOM JSON and read back stays the same.

use dcmset_core::value::Value;
use dcmset_dictionary_std::tags;
use dcmset_object::{DataSet, Tag, VR};
use pretty_assertions::assert_eq;

fn sample() -> DataSet {
    let mut item = DataSet::new();
    item.add_value(tags::CODE_VALUE, "121071").unwrap();
    item.add_value(tags::CODE_MEANING, "Finding").unwrap();

    let mut data_set = DataSet::new();
    data_set.add_value(tags::PATIENT_NAME, "Doe^John").unwrap();
    data_set.add_value(tags::PATIENT_ID, "DJ123").unwrap();
    data_set.add_value(tags::MODALITY, "MR").unwrap();
    data_set.add_value(tags::ROWS, 256_i64).unwrap();
    data_set.add_value(tags::PIXEL_SPACING, [0.5_f64, 0.5]).unwrap();
    data_set
        .add_value(tags::CONCEPT_NAME_CODE_SEQUENCE, Value::new_sequence(vec![item]))
        .unwrap();
    data_set
        .add_value_with_vr(Tag(0x0009, 0x1002), VR::UN, vec![1_u8, 2, 3, 4])
        .unwrap();
    data_set.add(tags::STUDY_DATE).unwrap();
    data_set
        .add_value(tags::PIXEL_DATA, vec![0_u8; 16])
        .unwrap();
    data_set
}

#[test]
fn data_set_survives_round_trip() {
    let data_set = sample();
    let json = dcmset_json::to_string(&data_set).unwrap();
    let back: DataSet = dcmset_json::from_str(&json).unwrap();
    assert_eq!(back, data_set);
}

#[test]
fn order_is_preserved_through_values_and_bytes() {
    let data_set = sample();

    let value = dcmset_json::to_value(&data_set).unwrap();
    let back: DataSet = dcmset_json::from_value(value).unwrap();
    assert_eq!(
        back.keys().collect::<Vec<_>>(),
        data_set.keys().collect::<Vec<_>>()
    );

    let mut bytes = Vec::new();
    dcmset_json::to_writer(&mut bytes, &data_set).unwrap();
    assert_eq!(bytes, dcmset_json::to_vec(&data_set).unwrap());
    let back: DataSet = dcmset_json::from_reader(bytes.as_slice()).unwrap();
    assert_eq!(back, data_set);

    let pretty = dcmset_json::to_string_pretty(&data_set).unwrap();
    let back: DataSet = dcmset_json::from_slice(pretty.as_bytes()).unwrap();
    assert_eq!(back, data_set);
}

#[test]
fn transfer_syntax_is_not_carried() {
    let mut data_set = sample();
    data_set.set_transfer_syntax("1.2.840.10008.1.2.1");
    let back: DataSet = dcmset_json::from_str(&dcmset_json::to_string(&data_set).unwrap()).unwrap();
    assert!(back.transfer_syntax().is_empty());
    assert_eq!(back.len(), data_set.len());
}
