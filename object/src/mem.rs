//! This module contains the implementation for an in-memory data set.
//!
//! Elements are kept in insertion order.
//! Keys are never re-sorted by tag,
//! and replacing the value of an existing element keeps its position.

use snafu::{OptionExt, ResultExt};
use std::collections::HashMap;
use std::fmt;
use tracing::trace;

use crate::{
    NoSuchAttributeNameSnafu, NoSuchDataElementTagSnafu, Result, UnknownVrSnafu,
    ValueMismatchSnafu,
};
use dcmset_core::dictionary::{DataDictionary, DataDictionaryEntry};
use dcmset_core::value::{Value, C};
use dcmset_core::{Element, Tag, VR};
use dcmset_dictionary_std::StandardDataDictionary;

/// A full in-memory element, whose nested items are data sets.
pub type InMemElement<D = StandardDataDictionary> = Element<DataSet<D>>;

/// A means of addressing an attribute of a data set.
///
/// Implemented for [`Tag`], `(u16, u16)` pairs
/// and attribute keywords (`&str` and `String`).
/// Textual keys may also be numeric tag expressions
/// such as `"(0010,0010)"`.
pub trait AttributeKey {
    /// Resolve the key into a tag, using the given dictionary if needed.
    fn to_tag<D>(&self, dict: &D) -> Result<Tag>
    where
        D: DataDictionary;
}

impl AttributeKey for Tag {
    #[inline]
    fn to_tag<D>(&self, _: &D) -> Result<Tag>
    where
        D: DataDictionary,
    {
        Ok(*self)
    }
}

impl AttributeKey for (u16, u16) {
    #[inline]
    fn to_tag<D>(&self, _: &D) -> Result<Tag>
    where
        D: DataDictionary,
    {
        Ok(Tag::from(*self))
    }
}

impl AttributeKey for &str {
    fn to_tag<D>(&self, dict: &D) -> Result<Tag>
    where
        D: DataDictionary,
    {
        dict.parse_tag(self)
            .context(NoSuchAttributeNameSnafu { name: *self })
    }
}

impl AttributeKey for String {
    fn to_tag<D>(&self, dict: &D) -> Result<Tag>
    where
        D: DataDictionary,
    {
        self.as_str().to_tag(dict)
    }
}

/** An ordered collection of attributes fully contained in memory.
 *
 * Besides its elements, a data set records the transfer syntax
 * it is meant to be encoded in (empty if unspecified)
 * and the dictionary used to resolve keywords
 * and to assign default value representations.
 */
#[derive(Debug, Clone)]
pub struct DataSet<D = StandardDataDictionary> {
    /// the elements, in insertion order
    entries: Vec<(Tag, InMemElement<D>)>,
    /// position of each tag in `entries`
    index: HashMap<Tag, usize>,
    /// transfer syntax UID, empty if unspecified
    transfer_syntax: String,
    /// the data dictionary
    dict: D,
}

impl<D> PartialEq for DataSet<D> {
    // This implementation ignores the data dictionary.
    fn eq(&self, other: &Self) -> bool {
        self.transfer_syntax == other.transfer_syntax && self.entries == other.entries
    }
}

impl Default for DataSet<StandardDataDictionary> {
    fn default() -> Self {
        Self::new()
    }
}

impl DataSet<StandardDataDictionary> {
    /// Create a new empty data set with no transfer syntax.
    pub fn new() -> Self {
        Self::new_with_dict(StandardDataDictionary)
    }

    /// Create a new empty data set meant for the given transfer syntax.
    pub fn with_transfer_syntax(transfer_syntax: impl Into<String>) -> Self {
        let mut obj = Self::new();
        obj.transfer_syntax = transfer_syntax.into();
        obj
    }

    /// Construct a data set from an iterator of tagged elements.
    ///
    /// Later occurrences of a tag replace the element of earlier ones,
    /// at the position of the first occurrence.
    #[inline]
    pub fn from_element_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (Tag, InMemElement<StandardDataDictionary>)>,
    {
        Self::from_iter_with_dict(iter, StandardDataDictionary)
    }
}

macro_rules! impl_key_accessors {
    ($is: ident, $as: ident, $as_mut: ident, $t: ty) => {
        #[doc = concat!("Check the value domain of an attribute, as in [`Element::", stringify!($is), "`].")]
        ///
        /// Fails if the attribute is not present.
        pub fn $is<K: AttributeKey>(&self, key: K) -> Result<bool> {
            Ok(self.element(key)?.$is())
        }

        #[doc = concat!("Retrieve the values of an attribute, as in [`Element::", stringify!($as), "`].")]
        ///
        /// Fails if the attribute is not present
        /// or if its values are of another domain.
        pub fn $as<K: AttributeKey>(&self, key: K) -> Result<&C<$t>> {
            let tag = key.to_tag(&self.dict)?;
            self.get(tag)?.$as().context(ValueMismatchSnafu { tag })
        }

        #[doc = concat!("Retrieve the values of an attribute for in-place modification, as in [`Element::", stringify!($as_mut), "`].")]
        ///
        /// Fails if the attribute is not present
        /// or if its values are of another domain.
        pub fn $as_mut<K: AttributeKey>(&mut self, key: K) -> Result<&mut C<$t>> {
            let tag = key.to_tag(&self.dict)?;
            self.get_mut(tag)?.$as_mut().context(ValueMismatchSnafu { tag })
        }
    };
}

impl<D> DataSet<D>
where
    D: DataDictionary,
{
    /// Create a new empty data set,
    /// using the given dictionary for keyword and VR lookup.
    pub fn new_with_dict(dict: D) -> Self {
        DataSet {
            entries: Vec::new(),
            index: HashMap::new(),
            transfer_syntax: String::new(),
            dict,
        }
    }

    /// Construct a data set from an iterator of tagged elements,
    /// using the given dictionary.
    pub fn from_iter_with_dict<I>(iter: I, dict: D) -> Self
    where
        I: IntoIterator<Item = (Tag, InMemElement<D>)>,
    {
        let mut obj = Self::new_with_dict(dict);
        obj.extend(iter);
        obj
    }

    /// Retrieve the dictionary used by this data set.
    pub fn dictionary(&self) -> &D {
        &self.dict
    }

    /// Retrieve the transfer syntax UID of this data set,
    /// empty if unspecified.
    pub fn transfer_syntax(&self) -> &str {
        &self.transfer_syntax
    }

    /// Set the transfer syntax UID of this data set.
    pub fn set_transfer_syntax(&mut self, transfer_syntax: impl Into<String>) {
        self.transfer_syntax = transfer_syntax.into();
    }

    /// Obtain the number of elements in the data set.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the data set has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check whether the data set has an element for the given attribute.
    ///
    /// A keyword unknown to the dictionary is never contained.
    pub fn contains<K: AttributeKey>(&self, key: K) -> bool {
        key.to_tag(&self.dict)
            .map(|tag| self.index.contains_key(&tag))
            .unwrap_or(false)
    }

    /// Declare an attribute with its default value representation
    /// and no values.
    ///
    /// Nothing is done if the attribute is already present.
    /// Fails if the dictionary does not know the attribute,
    /// in which case [`add_with_vr`](Self::add_with_vr) should be used.
    pub fn add<K: AttributeKey>(&mut self, key: K) -> Result<()> {
        let tag = key.to_tag(&self.dict)?;
        if self.index.contains_key(&tag) {
            return Ok(());
        }
        let vr = self.default_vr(tag)?;
        self.push(tag, Element::empty(vr));
        Ok(())
    }

    /// Declare an attribute with the given value representation
    /// and no values.
    ///
    /// Nothing is done if the attribute is already present.
    pub fn add_with_vr<K: AttributeKey>(&mut self, key: K, vr: VR) -> Result<()> {
        let tag = key.to_tag(&self.dict)?;
        if !self.index.contains_key(&tag) {
            self.push(tag, Element::empty(vr));
        }
        Ok(())
    }

    /// Declare an attribute with its default value representation,
    /// then set its values.
    ///
    /// If the attribute is already present,
    /// its value representation is kept and its values are replaced.
    /// On failure the data set is left unchanged.
    pub fn add_value<K, T>(&mut self, key: K, value: T) -> Result<()>
    where
        K: AttributeKey,
        T: Into<Value<DataSet<D>>>,
    {
        let tag = key.to_tag(&self.dict)?;
        if let Some(elem) = self.find_mut(tag) {
            return elem.set(value).context(ValueMismatchSnafu { tag });
        }
        let vr = self.default_vr(tag)?;
        let elem = Element::new(vr, value).context(ValueMismatchSnafu { tag })?;
        self.push(tag, elem);
        Ok(())
    }

    /// Declare an attribute with the given value representation,
    /// then set its values.
    ///
    /// If the attribute is already present,
    /// its value representation is kept and its values are replaced.
    /// On failure the data set is left unchanged.
    pub fn add_value_with_vr<K, T>(&mut self, key: K, vr: VR, value: T) -> Result<()>
    where
        K: AttributeKey,
        T: Into<Value<DataSet<D>>>,
    {
        let tag = key.to_tag(&self.dict)?;
        if let Some(elem) = self.find_mut(tag) {
            return elem.set(value).context(ValueMismatchSnafu { tag });
        }
        let elem = Element::new(vr, value).context(ValueMismatchSnafu { tag })?;
        self.push(tag, elem);
        Ok(())
    }

    /// Insert an element into the data set, replacing (and returning) any
    /// previous element of the same attribute.
    ///
    /// A replaced element keeps its position,
    /// a new one is appended.
    pub fn put(&mut self, tag: Tag, elem: InMemElement<D>) -> Option<InMemElement<D>> {
        match self.find_mut(tag) {
            Some(old) => Some(std::mem::replace(old, elem)),
            None => {
                self.push(tag, elem);
                None
            }
        }
    }

    /// Replace the values of an existing attribute.
    ///
    /// Fails if the attribute is not present
    /// or if the values do not match its value representation,
    /// leaving the data set unchanged.
    pub fn set<K, T>(&mut self, key: K, value: T) -> Result<()>
    where
        K: AttributeKey,
        T: Into<Value<DataSet<D>>>,
    {
        let tag = key.to_tag(&self.dict)?;
        self.get_mut(tag)?
            .set(value)
            .context(ValueMismatchSnafu { tag })?;
        trace!("Replaced values of {}", tag);
        Ok(())
    }

    /// Remove an attribute from the data set, returning its element.
    ///
    /// Fails if the attribute is not present.
    /// The relative order of the remaining elements is kept.
    pub fn remove<K: AttributeKey>(&mut self, key: K) -> Result<InMemElement<D>> {
        let tag = key.to_tag(&self.dict)?;
        let pos = self
            .index
            .remove(&tag)
            .context(NoSuchDataElementTagSnafu { tag })?;
        let (_, elem) = self.entries.remove(pos);
        for (t, _) in &self.entries[pos..] {
            if let Some(p) = self.index.get_mut(t) {
                *p -= 1;
            }
        }
        trace!("Removed {} from data set", tag);
        Ok(elem)
    }

    /// Retrieve a particular element by its key.
    pub fn element<K: AttributeKey>(&self, key: K) -> Result<&InMemElement<D>> {
        let tag = key.to_tag(&self.dict)?;
        self.get(tag)
    }

    /// Retrieve a particular element by its key for in-place modification.
    pub fn element_mut<K: AttributeKey>(&mut self, key: K) -> Result<&mut InMemElement<D>> {
        let tag = key.to_tag(&self.dict)?;
        self.get_mut(tag)
    }

    /// Retrieve the value representation of an attribute.
    pub fn vr<K: AttributeKey>(&self, key: K) -> Result<VR> {
        Ok(self.element(key)?.vr())
    }

    /// Check whether an attribute is present but holds no values.
    pub fn is_element_empty<K: AttributeKey>(&self, key: K) -> Result<bool> {
        Ok(self.element(key)?.is_empty())
    }

    /// Retrieve the number of values of an attribute.
    pub fn multiplicity<K: AttributeKey>(&self, key: K) -> Result<usize> {
        Ok(self.element(key)?.multiplicity())
    }

    impl_key_accessors!(is_int, as_int, as_int_mut, i64);
    impl_key_accessors!(is_real, as_real, as_real_mut, f64);
    impl_key_accessors!(is_string, as_string, as_string_mut, String);
    impl_key_accessors!(is_binary, as_binary, as_binary_mut, Vec<u8>);
    impl_key_accessors!(is_data_set, as_data_set, as_data_set_mut, DataSet<D>);

    /// Obtain an iterator over the tags and elements, in insertion order.
    pub fn iter(&self) -> Iter<'_, D> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Obtain an iterator over the attribute tags, in insertion order.
    pub fn keys(&self) -> Keys<'_, D> {
        Keys {
            inner: self.entries.iter(),
        }
    }

    /// Obtain an iterator over the elements, in insertion order.
    pub fn values(&self) -> Values<'_, D> {
        Values {
            inner: self.entries.iter(),
        }
    }

    /// Obtain an iterator over mutable elements, in insertion order.
    pub fn values_mut(&mut self) -> ValuesMut<'_, D> {
        ValuesMut {
            inner: self.entries.iter_mut(),
        }
    }

    fn get(&self, tag: Tag) -> Result<&InMemElement<D>> {
        self.index
            .get(&tag)
            .map(|&pos| &self.entries[pos].1)
            .context(NoSuchDataElementTagSnafu { tag })
    }

    fn get_mut(&mut self, tag: Tag) -> Result<&mut InMemElement<D>> {
        self.find_mut(tag).context(NoSuchDataElementTagSnafu { tag })
    }

    fn find_mut(&mut self, tag: Tag) -> Option<&mut InMemElement<D>> {
        match self.index.get(&tag) {
            Some(&pos) => Some(&mut self.entries[pos].1),
            None => None,
        }
    }

    fn default_vr(&self, tag: Tag) -> Result<VR> {
        self.dict
            .by_tag(tag)
            .map(|e| e.vr())
            .context(UnknownVrSnafu { tag })
    }

    fn push(&mut self, tag: Tag, elem: InMemElement<D>) {
        trace!("Adding {} {} to data set", tag, elem.vr());
        self.index.insert(tag, self.entries.len());
        self.entries.push((tag, elem));
    }
}

impl<D> Extend<(Tag, InMemElement<D>)> for DataSet<D>
where
    D: DataDictionary,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (Tag, InMemElement<D>)>,
    {
        for (tag, elem) in iter {
            self.put(tag, elem);
        }
    }
}

impl<D> FromIterator<(Tag, InMemElement<D>)> for DataSet<D>
where
    D: DataDictionary,
    D: Default,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (Tag, InMemElement<D>)>,
    {
        Self::from_iter_with_dict(iter, D::default())
    }
}

impl<'a, D> IntoIterator for &'a DataSet<D> {
    type Item = (Tag, &'a InMemElement<D>);
    type IntoIter = Iter<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

impl<D> IntoIterator for DataSet<D> {
    type Item = (Tag, InMemElement<D>);
    type IntoIter = IntoIter<D>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

/// Iterator over the tags and elements of a data set.
pub struct Iter<'a, D> {
    inner: std::slice::Iter<'a, (Tag, InMemElement<D>)>,
}

/// Iterator over the tags of a data set.
pub struct Keys<'a, D> {
    inner: std::slice::Iter<'a, (Tag, InMemElement<D>)>,
}

/// Iterator over the elements of a data set.
pub struct Values<'a, D> {
    inner: std::slice::Iter<'a, (Tag, InMemElement<D>)>,
}

/// Iterator over the mutable elements of a data set.
pub struct ValuesMut<'a, D> {
    inner: std::slice::IterMut<'a, (Tag, InMemElement<D>)>,
}

/// Owning iterator over the tags and elements of a data set.
pub struct IntoIter<D> {
    inner: std::vec::IntoIter<(Tag, InMemElement<D>)>,
}

macro_rules! impl_entry_iterator {
    ($name: ident, $item: ty, |$entry: pat_param| $map: expr) => {
        impl<'a, D> Iterator for $name<'a, D> {
            type Item = $item;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                self.inner.next().map(|$entry| $map)
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                self.inner.size_hint()
            }
        }

        impl<'a, D> DoubleEndedIterator for $name<'a, D> {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                self.inner.next_back().map(|$entry| $map)
            }
        }

        impl<'a, D> ExactSizeIterator for $name<'a, D> {}

        impl<'a, D> fmt::Debug for $name<'a, D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("remaining", &self.inner.len())
                    .finish()
            }
        }
    };
}

impl_entry_iterator!(Iter, (Tag, &'a InMemElement<D>), |(tag, elem)| (*tag, elem));
impl_entry_iterator!(Keys, Tag, |(tag, _)| *tag);
impl_entry_iterator!(Values, &'a InMemElement<D>, |(_, elem)| elem);
impl_entry_iterator!(ValuesMut, &'a mut InMemElement<D>, |(_, elem)| elem);

// shared borrowing iterators can be restarted from a copy
impl<'a, D> Clone for Iter<'a, D> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, D> Clone for Keys<'a, D> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, D> Clone for Values<'a, D> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<D> Iterator for IntoIter<D> {
    type Item = (Tag, InMemElement<D>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<D> ExactSizeIterator for IntoIter<D> {}

impl<D> fmt::Debug for IntoIter<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("remaining", &self.inner.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AccessError;
    use dcmset_core::dcmset_value;
    use dcmset_core::dictionary::StubDataDictionary;
    use dcmset_dictionary_std::tags;
    use matches::assert_matches;

    #[test]
    fn empty_data_set() {
        let obj = DataSet::new();
        assert!(obj.is_empty());
        assert_eq!(obj.len(), 0);
        assert_eq!(obj.transfer_syntax(), "");
        assert_eq!(obj, DataSet::default());
    }

    #[test]
    fn data_set_compare() {
        let mut obj1 = DataSet::new();
        let mut obj2 = DataSet::new();
        assert_eq!(obj1, obj2);
        obj1.add(tags::PATIENT_NAME).unwrap();
        assert_ne!(obj1, obj2);
        obj2.add(tags::PATIENT_NAME).unwrap();
        assert_eq!(obj1, obj2);

        // transfer syntax takes part in equality
        obj2.set_transfer_syntax("1.2.840.10008.1.2.1");
        assert_ne!(obj1, obj2);
    }

    #[test]
    fn equality_depends_on_order() {
        let mut obj1 = DataSet::new();
        obj1.add("PatientName").unwrap();
        obj1.add("PatientID").unwrap();
        let mut obj2 = DataSet::new();
        obj2.add("PatientID").unwrap();
        obj2.add("PatientName").unwrap();
        assert_ne!(obj1, obj2);
    }

    #[test]
    fn add_is_idempotent() {
        let mut obj = DataSet::new();
        obj.add_value("PatientName", ["Doe^John"]).unwrap();
        obj.add("PatientName").unwrap();
        obj.add_with_vr("PatientName", VR::LO).unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj.vr("PatientName").unwrap(), VR::PN);
        assert_eq!(obj.multiplicity("PatientName").unwrap(), 1);
    }

    #[test]
    fn add_unknown_attribute() {
        let mut obj = DataSet::new();
        // private data element
        assert_matches!(
            obj.add(Tag(0x0009, 0x1001)),
            Err(AccessError::UnknownVr { tag: Tag(0x0009, 0x1001), .. })
        );
        assert_matches!(
            obj.add("NotAnAttribute"),
            Err(AccessError::NoSuchAttributeName { .. })
        );
        assert!(obj.is_empty());

        obj.add_with_vr(Tag(0x0009, 0x1001), VR::UN).unwrap();
        assert_eq!(obj.vr(Tag(0x0009, 0x1001)).unwrap(), VR::UN);
        assert!(obj.is_binary((0x0009, 0x1001)).unwrap());
    }

    #[test]
    fn failed_add_value_leaves_data_set_unchanged() {
        let mut obj = DataSet::new();
        assert_matches!(
            obj.add_value("PatientName", [1, 2]),
            Err(AccessError::ValueMismatch { .. })
        );
        assert!(obj.is_empty());
        assert!(!obj.contains("PatientName"));

        obj.add_value("SelectorUSValue", [1, 2]).unwrap();
        assert_matches!(
            obj.add_value("SelectorUSValue", ["one"]),
            Err(AccessError::ValueMismatch { .. })
        );
        assert_eq!(obj.as_int("SelectorUSValue").unwrap().as_slice(), &[1, 2]);
    }

    #[test]
    fn set_requires_presence() {
        let mut obj = DataSet::new();
        assert_matches!(
            obj.set("PatientID", ["ID"]),
            Err(AccessError::NoSuchDataElementTag { .. })
        );
        obj.add("PatientID").unwrap();
        obj.set("PatientID", ["ID"]).unwrap();
        assert_eq!(obj.as_string("PatientID").unwrap().as_slice(), &["ID".to_string()]);
        assert_matches!(
            obj.set("PatientID", [1.5]),
            Err(AccessError::ValueMismatch { tag: tags::PATIENT_ID, .. })
        );
    }

    #[test]
    fn keeps_insertion_order() {
        let mut obj = DataSet::new();
        obj.add(tags::PIXEL_DATA).unwrap();
        obj.add(tags::PATIENT_ID).unwrap();
        obj.add(tags::MODALITY).unwrap();
        obj.add(tags::PATIENT_NAME).unwrap();

        let keys: Vec<_> = obj.keys().collect();
        assert_eq!(
            keys,
            vec![
                tags::PIXEL_DATA,
                tags::PATIENT_ID,
                tags::MODALITY,
                tags::PATIENT_NAME
            ]
        );

        // setting values does not move the element
        obj.set(tags::PATIENT_ID, ["X"]).unwrap();
        assert_eq!(obj.keys().nth(1), Some(tags::PATIENT_ID));

        // removal keeps the relative order of the rest
        obj.remove(tags::PATIENT_ID).unwrap();
        let keys: Vec<_> = obj.keys().collect();
        assert_eq!(
            keys,
            vec![tags::PIXEL_DATA, tags::MODALITY, tags::PATIENT_NAME]
        );
        assert_eq!(obj.vr(tags::PATIENT_NAME).unwrap(), VR::PN);
        assert_eq!(obj.vr(tags::MODALITY).unwrap(), VR::CS);

        // re-adding appends at the end
        obj.add(tags::PATIENT_ID).unwrap();
        assert_eq!(obj.keys().last(), Some(tags::PATIENT_ID));
    }

    #[test]
    fn remove_absent_attribute() {
        let mut obj = DataSet::new();
        assert_matches!(
            obj.remove("PatientName"),
            Err(AccessError::NoSuchDataElementTag { .. })
        );
        obj.add("PatientName").unwrap();
        let elem = obj.remove("PatientName").unwrap();
        assert_eq!(elem.vr(), VR::PN);
        assert!(obj.is_empty());
    }

    #[test]
    fn put_replaces_in_place() {
        let mut obj = DataSet::new();
        obj.add_value(tags::MODALITY, ["CT"]).unwrap();
        obj.add_value(tags::PATIENT_ID, ["1"]).unwrap();

        let old = obj.put(
            tags::MODALITY,
            Element::new(VR::CS, dcmset_value!(Strings, "MR")).unwrap(),
        );
        assert_eq!(old.unwrap().as_string().unwrap()[0], "CT");
        assert_eq!(obj.keys().next(), Some(tags::MODALITY));
        assert_eq!(obj.as_string(tags::MODALITY).unwrap()[0], "MR");
        assert!(obj
            .put(tags::PATIENT_NAME, Element::empty(VR::PN))
            .is_none());
        assert_eq!(obj.len(), 3);
    }

    #[test]
    fn views_are_consistent() {
        let mut obj = DataSet::new();
        obj.add_value("PatientName", ["Doe^John"]).unwrap();
        obj.add_value("PatientID", ["DJ123"]).unwrap();

        let from_iter: Vec<_> = obj.iter().map(|(tag, _)| tag).collect();
        let from_keys: Vec<_> = obj.keys().collect();
        assert_eq!(from_iter, from_keys);
        let values: Vec<_> = obj.values().collect();
        for ((_, e1), e2) in obj.iter().zip(values) {
            assert_eq!(e1, e2);
        }

        // restartable
        let iter = obj.iter();
        assert_eq!(iter.clone().count(), 2);
        assert_eq!(iter.len(), 2);
        assert_eq!(obj.iter().rev().next().map(|(t, _)| t), Some(tags::PATIENT_ID));
    }

    #[test]
    fn values_mut_modifies_elements() {
        let mut obj = DataSet::new();
        obj.add_value("SelectorUSValue", [1, 2]).unwrap();
        obj.add_value("SelectorSLValue", [-1]).unwrap();
        for elem in obj.values_mut() {
            for v in elem.as_int_mut().unwrap().iter_mut() {
                *v *= 10;
            }
        }
        assert_eq!(obj.as_int("SelectorUSValue").unwrap().as_slice(), &[10, 20]);
        assert_eq!(obj.as_int("SelectorSLValue").unwrap().as_slice(), &[-10]);

        obj.as_real_mut("SelectorUSValue").unwrap_err();
        obj.as_int_mut("SelectorUSValue").unwrap().push(30);
        assert_eq!(obj.multiplicity("SelectorUSValue").unwrap(), 3);
    }

    #[test]
    fn nested_data_sets() {
        let mut item = DataSet::new();
        item.add_value("CodeValue", ["121327"]).unwrap();

        let mut obj = DataSet::new();
        obj.add_value(
            "SelectorCodeSequenceValue",
            Value::new_sequence(vec![item.clone(), DataSet::new()]),
        )
        .unwrap();

        assert!(obj.is_data_set("SelectorCodeSequenceValue").unwrap());
        let items = obj.as_data_set("SelectorCodeSequenceValue").unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], item);

        obj.as_data_set_mut("SelectorCodeSequenceValue").unwrap()[1]
            .add_value("CodeMeaning", ["Lesion"])
            .unwrap();
        assert_eq!(
            obj.as_data_set("SelectorCodeSequenceValue").unwrap()[1]
                .as_string("CodeMeaning")
                .unwrap()[0],
            "Lesion"
        );
    }

    #[test]
    fn collect_from_elements() {
        let obj: DataSet = vec![
            (tags::PATIENT_ID, Element::empty(VR::LO)),
            (tags::PATIENT_NAME, Element::empty(VR::PN)),
            (tags::PATIENT_ID, Element::new(VR::LO, ["X"]).unwrap()),
        ]
        .into_iter()
        .collect();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj.keys().next(), Some(tags::PATIENT_ID));
        assert_eq!(obj.multiplicity(tags::PATIENT_ID).unwrap(), 1);

        let again = DataSet::from_element_iter(obj.clone());
        assert_eq!(again, obj);
    }

    #[test]
    fn stub_dictionary_needs_explicit_vr() {
        let mut obj = DataSet::new_with_dict(StubDataDictionary);
        assert_matches!(
            obj.add("PatientName"),
            Err(AccessError::NoSuchAttributeName { .. })
        );
        assert_matches!(
            obj.add(Tag(0x0010, 0x0010)),
            Err(AccessError::UnknownVr { .. })
        );
        obj.add_value_with_vr(Tag(0x0010, 0x0010), VR::PN, ["Doe^John"])
            .unwrap();
        assert!(obj.is_string("(0010,0010)").unwrap());
    }

    #[test]
    fn accessors_on_missing_attribute() {
        let obj = DataSet::new();
        assert_matches!(
            obj.vr("PatientName"),
            Err(AccessError::NoSuchDataElementTag { .. })
        );
        assert_matches!(
            obj.is_element_empty(tags::PATIENT_NAME),
            Err(AccessError::NoSuchDataElementTag { .. })
        );
        assert_matches!(
            obj.as_int("SelectorUSValue"),
            Err(AccessError::NoSuchDataElementTag { .. })
        );
    }
}
