//! This module contains the concept of an attribute dictionary.
//!
//! A dictionary translates attribute keywords and tags
//! into an entry describing the attribute,
//! most importantly its default value representation.
//! The standard registry lives in the `dcmset-dictionary-std` crate.

pub mod stub;

pub use self::stub::StubDataDictionary;

use crate::header::{Tag, VR};
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use std::fmt::Debug;
use std::str::FromStr;

/// The range of tags covered by a dictionary entry.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum TagRange {
    /// Only a specific tag
    Single(Tag),
    /// The two rightmost digits of the _group_ portion are open:
    /// `(GGxx,EEEE)`
    Group100(Tag),
    /// The two rightmost digits of the _element_ portion are open:
    /// `(GGGG,EExx)`
    Element100(Tag),
    /// Generic group length tag,
    /// refers to any attribute of the form `(GGGG,0000)`,
    /// _save for the following exceptions_
    /// which have their own single tag record:
    ///
    /// - _Command Group Length_ (0000,0000)
    /// - _File Meta Information Group Length_ (0002,0000)
    GroupLength,
    /// Generic private creator tag,
    /// refers to any tag from (GGGG,0010) to (GGGG,00FF),
    /// where `GGGG` is an odd number.
    PrivateCreator,
}

impl TagRange {
    /// Retrieve the inner tag representation of this range.
    ///
    /// Open components are zeroed out.
    /// Returns a zeroed out tag
    /// (equivalent to _Command Group Length_)
    /// if it is a group length tag.
    /// If it is a private creator tag,
    /// this method returns `Tag(0x0009, 0x0010)`.
    pub fn inner(self) -> Tag {
        match self {
            TagRange::Single(tag) => tag,
            TagRange::Group100(tag) => tag,
            TagRange::Element100(tag) => tag,
            TagRange::GroupLength => Tag(0x0000, 0x0000),
            TagRange::PrivateCreator => Tag(0x0009, 0x0010),
        }
    }

    /// Check whether the given tag falls within this range.
    pub fn contains(self, tag: Tag) -> bool {
        match self {
            TagRange::Single(t) => t == tag,
            TagRange::Group100(t) => {
                t.group() & 0xFF00 == tag.group() & 0xFF00 && t.element() == tag.element()
            }
            TagRange::Element100(t) => {
                t.group() == tag.group() && t.element() & 0xFF00 == tag.element() & 0xFF00
            }
            TagRange::GroupLength => tag.element() == 0x0000,
            TagRange::PrivateCreator => {
                tag.is_private() && (0x0010..=0x00FF).contains(&tag.element())
            }
        }
    }
}

/// An error returned when parsing an invalid tag range.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum TagRangeParseError {
    #[snafu(display("Not enough tag components, expected tag (group, element)"))]
    MissingTag { backtrace: Backtrace },
    #[snafu(display("Not enough tag components, expected tag element"))]
    MissingTagElement { backtrace: Backtrace },
    #[snafu(display(
        "tag component `group` has an invalid length: got {} but must be 4",
        got
    ))]
    InvalidGroupLength { got: usize, backtrace: Backtrace },
    #[snafu(display(
        "tag component `element` has an invalid length: got {} but must be 4",
        got
    ))]
    InvalidElementLength { got: usize, backtrace: Backtrace },
    #[snafu(display("unsupported tag range"))]
    UnsupportedTagRange { backtrace: Backtrace },
    #[snafu(display("invalid tag component `group`"))]
    InvalidTagGroup {
        backtrace: Backtrace,
        source: std::num::ParseIntError,
    },
    #[snafu(display("invalid tag component `element`"))]
    InvalidTagElement {
        backtrace: Backtrace,
        source: std::num::ParseIntError,
    },
}

impl FromStr for TagRange {
    type Err = TagRangeParseError;

    /// Parse a tag range in the form `(GGGG,EEEE)`,
    /// where either the last two digits of the group
    /// or the last two digits of the element
    /// may be replaced by `xx`.
    fn from_str(mut s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('(') && s.ends_with(')') {
            s = &s[1..s.len() - 1];
        }
        let mut parts = s.split(',');
        let group = parts.next().context(MissingTagSnafu)?;
        let elem = parts.next().context(MissingTagElementSnafu)?;
        ensure!(
            group.len() == 4,
            InvalidGroupLengthSnafu { got: group.len() }
        );
        ensure!(
            elem.len() == 4,
            InvalidElementLengthSnafu { got: elem.len() }
        );

        match (&group.as_bytes()[2..], &elem.as_bytes()[2..]) {
            (b"xx", b"xx") => UnsupportedTagRangeSnafu.fail(),
            (b"xx", _) => {
                // Group100
                let group =
                    u16::from_str_radix(&group[..2], 16).context(InvalidTagGroupSnafu)? << 8;
                let elem = u16::from_str_radix(elem, 16).context(InvalidTagElementSnafu)?;
                Ok(TagRange::Group100(Tag(group, elem)))
            }
            (_, b"xx") => {
                // Element100
                let group = u16::from_str_radix(group, 16).context(InvalidTagGroupSnafu)?;
                let elem =
                    u16::from_str_radix(&elem[..2], 16).context(InvalidTagElementSnafu)? << 8;
                Ok(TagRange::Element100(Tag(group, elem)))
            }
            (_, _) => {
                let group = u16::from_str_radix(group, 16).context(InvalidTagGroupSnafu)?;
                let elem = u16::from_str_radix(elem, 16).context(InvalidTagElementSnafu)?;
                Ok(TagRange::Single(Tag(group, elem)))
            }
        }
    }
}

/** Type trait for a dictionary of attributes. Attribute dictionaries provide the
 * means to convert a tag to an alias and vice versa, as well as a form of retrieving
 * additional information about the attribute.
 *
 * The main methods herein have no generic parameters, so as to enable being
 * used as a trait object.
 */
pub trait DataDictionary: Debug {
    /// The type of the dictionary entry.
    type Entry: DataDictionaryEntry;

    /// Fetch an entry by its usual alias (e.g. "PatientName" or "SOPInstanceUID").
    /// Aliases (or keywords)
    /// are usually in UpperCamelCase,
    /// not separated by spaces,
    /// and are case sensitive.
    fn by_name(&self, name: &str) -> Option<&Self::Entry>;

    /// Fetch an entry by its tag.
    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry>;

    /// Fetch an entry by its alias or by a tag expression
    /// such as `(0010,0010)` or `00100010`.
    fn by_expr(&self, tag: &str) -> Option<&Self::Entry> {
        match tag.parse() {
            Ok(tag) => self.by_tag(tag),
            Err(_) => self.by_name(tag),
        }
    }

    /// Use this data element dictionary to interpret a string.
    ///
    /// If it is either a tag expression or a keyword
    /// present in the dictionary, the tag is returned.
    fn parse_tag(&self, tag: &str) -> Option<Tag> {
        tag.parse()
            .ok()
            .or_else(|| self.by_name(tag).map(|e| e.tag()))
    }
}

/// The dictionary entry data type, representing an attribute.
pub trait DataDictionaryEntry {
    /// The full possible tag range of the attribute.
    fn tag_range(&self) -> TagRange;

    /// Fetch a single tag applicable to this attribute.
    ///
    /// If the entry covers a range of tags,
    /// the open components are zeroed out.
    fn tag(&self) -> Tag {
        self.tag_range().inner()
    }

    /// The alias of the attribute, with no spaces, usually in UpperCamelCase.
    fn alias(&self) -> &str;

    /// The default value representation of the attribute.
    fn vr(&self) -> VR;
}

impl<'a, T> DataDictionary for &'a T
where
    T: DataDictionary,
{
    type Entry = T::Entry;

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        (**self).by_name(name)
    }

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        (**self).by_tag(tag)
    }
}

/// A data type for a dictionary entry with full ownership.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DataDictionaryEntryBuf {
    /// The attribute tag range
    pub tag: TagRange,
    /// The alias of the attribute, with no spaces, usually InCapitalizedCamelCase
    pub alias: String,
    /// The default value representation of the attribute
    pub vr: VR,
}

impl DataDictionaryEntry for DataDictionaryEntryBuf {
    fn tag_range(&self) -> TagRange {
        self.tag
    }
    fn alias(&self) -> &str {
        self.alias.as_str()
    }
    fn vr(&self) -> VR {
        self.vr
    }
}

/// A data type for a dictionary entry with a string slice for its alias.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DataDictionaryEntryRef<'a> {
    /// The attribute tag or tag range
    pub tag: TagRange,
    /// The alias of the attribute, with no spaces, usually InCapitalizedCamelCase
    pub alias: &'a str,
    /// The default value representation of the attribute
    pub vr: VR,
}

impl<'a> DataDictionaryEntry for DataDictionaryEntryRef<'a> {
    fn tag_range(&self) -> TagRange {
        self.tag
    }
    fn alias(&self) -> &str {
        self.alias
    }
    fn vr(&self) -> VR {
        self.vr
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matches::assert_matches;

    #[test]
    fn parse_single_tag_range() {
        let range: TagRange = "(0010,0010)".parse().unwrap();
        assert_eq!(range, TagRange::Single(Tag(0x0010, 0x0010)));
        let range: TagRange = "7FE0,0010".parse().unwrap();
        assert_eq!(range, TagRange::Single(Tag(0x7FE0, 0x0010)));
    }

    #[test]
    fn parse_open_tag_ranges() {
        let range: TagRange = "(60xx,3000)".parse().unwrap();
        assert_eq!(range, TagRange::Group100(Tag(0x6000, 0x3000)));
        let range: TagRange = "(0020,31xx)".parse().unwrap();
        assert_eq!(range, TagRange::Element100(Tag(0x0020, 0x3100)));
    }

    #[test]
    fn parse_bad_tag_ranges() {
        assert_matches!(
            "(60xx,30xx)".parse::<TagRange>(),
            Err(TagRangeParseError::UnsupportedTagRange { .. })
        );
        assert_matches!(
            "(0010)".parse::<TagRange>(),
            Err(TagRangeParseError::MissingTagElement { .. })
        );
        assert_matches!(
            "(010,0010)".parse::<TagRange>(),
            Err(TagRangeParseError::InvalidGroupLength { got: 3, .. })
        );
        assert_matches!(
            "(00G0,0010)".parse::<TagRange>(),
            Err(TagRangeParseError::InvalidTagGroup { .. })
        );
    }

    #[test]
    fn range_contains() {
        assert!(TagRange::Group100(Tag(0x6000, 0x3000)).contains(Tag(0x6002, 0x3000)));
        assert!(!TagRange::Group100(Tag(0x6000, 0x3000)).contains(Tag(0x6102, 0x3000)));
        assert!(TagRange::Element100(Tag(0x0020, 0x3100)).contains(Tag(0x0020, 0x31FF)));
        assert!(TagRange::GroupLength.contains(Tag(0x0018, 0x0000)));
        assert!(TagRange::PrivateCreator.contains(Tag(0x0009, 0x0010)));
        assert!(!TagRange::PrivateCreator.contains(Tag(0x0008, 0x0010)));
        assert!(!TagRange::PrivateCreator.contains(Tag(0x0009, 0x1000)));
    }
}
