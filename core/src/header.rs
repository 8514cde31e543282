//! This module contains the basic data types for addressing and
//! describing DICOM attributes:
//! the attribute [`Tag`], the value representation ([`VR`]),
//! and the attribute value slot ([`Element`]).

use crate::value::{CastValueError, Value, ValueDomain, C};
use snafu::{ensure, Backtrace, ResultExt, Snafu};
use std::fmt;
use std::str::{from_utf8, FromStr};

/// Idiomatic alias for a tag's group number.
pub type GroupNumber = u16;
/// Idiomatic alias for a tag's element number.
pub type ElementNumber = u16;

/// The data type for DICOM data element tags.
///
/// A tag is a `(group, element)` pair.
/// Tags are totally ordered by group first, then by element.
/// Both `(u16, u16)` and `[u16; 2]` can be efficiently converted
/// to this type as well.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy, Default)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// Getter for the tag's group value.
    #[inline]
    pub fn group(self) -> GroupNumber {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub fn element(self) -> ElementNumber {
        self.1
    }

    /// Check whether this tag belongs to a private group
    /// (odd group number).
    #[inline]
    pub fn is_private(self) -> bool {
        self.0 & 1 == 1
    }

    /// Obtain the tag as a single 32-bit word (`0xGGGGEEEE`).
    #[inline]
    pub fn to_u32(self) -> u32 {
        (u32::from(self.0) << 16) | u32::from(self.1)
    }

    /// Format the tag as eight contiguous uppercase hexadecimal digits,
    /// as used for keys in DICOM JSON.
    pub fn to_hex(self) -> String {
        format!("{:04X}{:04X}", self.0, self.1)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl PartialEq<(u16, u16)> for Tag {
    fn eq(&self, other: &(u16, u16)) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}

impl PartialEq<[u16; 2]> for Tag {
    fn eq(&self, other: &[u16; 2]) -> bool {
        self.0 == other[0] && self.1 == other[1]
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from(value: (u16, u16)) -> Tag {
        Tag(value.0, value.1)
    }
}

impl From<[u16; 2]> for Tag {
    #[inline]
    fn from(value: [u16; 2]) -> Tag {
        Tag(value[0], value[1])
    }
}

impl From<u32> for Tag {
    #[inline]
    fn from(value: u32) -> Tag {
        Tag((value >> 16) as u16, (value & 0xFFFF) as u16)
    }
}

/// An error returned when parsing an invalid tag expression.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ParseTagError {
    /// The expression does not have a recognizable tag form
    #[snafu(display("expected a tag of the form (GGGG,EEEE), GGGG,EEEE or GGGGEEEE"))]
    Form { backtrace: Backtrace },
    /// A tag component is not a valid hexadecimal number
    #[snafu(display("invalid tag component `{}`", component))]
    Component {
        component: String,
        backtrace: Backtrace,
        source: std::num::ParseIntError,
    },
}

/// Parse a tag from its numeric textual representation.
///
/// Accepted forms are `(GGGG,EEEE)`, `GGGG,EEEE` and `GGGGEEEE`,
/// where each digit is hexadecimal.
/// Attribute keywords are not handled here,
/// see [`DataDictionary::parse_tag`](crate::dictionary::DataDictionary::parse_tag).
impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .unwrap_or(s);

        let (group, element) = match s.split_once(',') {
            Some(parts) => parts,
            None => {
                ensure!(s.len() == 8 && s.is_char_boundary(4), FormSnafu);
                s.split_at(4)
            }
        };
        ensure!(group.len() == 4 && element.len() == 4, FormSnafu);

        let parse = |component: &str| -> Result<u16, ParseTagError> {
            ensure!(
                component.bytes().all(|b| b.is_ascii_hexdigit()),
                FormSnafu
            );
            u16::from_str_radix(component, 16).context(ComponentSnafu { component })
        };
        Ok(Tag(parse(group)?, parse(element)?))
    }
}

/// Stub type representing a non-existing DICOM data set.
///
/// This type cannot be instantiated.
/// This makes it so that `Value<EmptyObject>` is sure to be either
/// a primitive value list or a sequence with no items.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum EmptyObject {}

/// An enum type for a DICOM value representation.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd)]
pub enum VR {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Single
    FL,
    /// Floating Point Double
    FD,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Double
    OD,
    /// Other Float
    OF,
    /// Other Long
    OL,
    /// Other Very Long
    OV,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Signed Very Long
    SV,
    /// Time
    TM,
    /// Unlimited Characters
    UC,
    /// Unique Identifier (UID)
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// Universal Resource Identifier or Universal Resource Locator (URI/URL)
    UR,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
    /// Unsigned Very Long
    UV,
}

impl VR {
    /// Obtain the value representation corresponding to the given two bytes.
    /// Each byte should represent an alphabetic character in upper case.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        from_utf8(chars.as_ref())
            .ok()
            .and_then(|s| VR::from_str(s).ok())
    }

    /// Retrieve a string representation of this VR.
    pub fn to_string(self) -> &'static str {
        use VR::*;
        match self {
            AE => "AE",
            AS => "AS",
            AT => "AT",
            CS => "CS",
            DA => "DA",
            DS => "DS",
            DT => "DT",
            FL => "FL",
            FD => "FD",
            IS => "IS",
            LO => "LO",
            LT => "LT",
            OB => "OB",
            OD => "OD",
            OF => "OF",
            OL => "OL",
            OV => "OV",
            OW => "OW",
            PN => "PN",
            SH => "SH",
            SL => "SL",
            SQ => "SQ",
            SS => "SS",
            ST => "ST",
            SV => "SV",
            TM => "TM",
            UC => "UC",
            UI => "UI",
            UL => "UL",
            UN => "UN",
            UR => "UR",
            US => "US",
            UT => "UT",
            UV => "UV",
        }
    }

    /// Retrieve a copy of this VR's byte representation.
    /// The function returns two alphabetic characters in upper case.
    pub fn to_bytes(self) -> [u8; 2] {
        let bytes = self.to_string().as_bytes();
        [bytes[0], bytes[1]]
    }

    /// Retrieve the value domain in which values of this VR are kept.
    ///
    /// Every value representation belongs to exactly one domain.
    /// Textual numbers follow their numeric nature:
    /// _IS_ values are integers and _DS_ values are reals.
    pub fn domain(self) -> ValueDomain {
        use VR::*;
        match self {
            IS | SL | SS | SV | UL | US | UV => ValueDomain::Integers,
            DS | FD | FL => ValueDomain::Reals,
            AE | AS | AT | CS | DA | DT | LO | LT | PN | SH | ST | TM | UC | UI | UR | UT => {
                ValueDomain::Strings
            }
            OB | OD | OF | OL | OV | OW | UN => ValueDomain::Binary,
            SQ => ValueDomain::DataSets,
        }
    }
}

/// Obtain the value representation corresponding to the given string.
/// The string should hold exactly two UTF-8 encoded alphabetic characters
/// in upper case, otherwise no match is made.
impl FromStr for VR {
    type Err = &'static str;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        use VR::*;
        match string {
            "AE" => Ok(AE),
            "AS" => Ok(AS),
            "AT" => Ok(AT),
            "CS" => Ok(CS),
            "DA" => Ok(DA),
            "DS" => Ok(DS),
            "DT" => Ok(DT),
            "FL" => Ok(FL),
            "FD" => Ok(FD),
            "IS" => Ok(IS),
            "LO" => Ok(LO),
            "LT" => Ok(LT),
            "OB" => Ok(OB),
            "OD" => Ok(OD),
            "OF" => Ok(OF),
            "OL" => Ok(OL),
            "OV" => Ok(OV),
            "OW" => Ok(OW),
            "PN" => Ok(PN),
            "SH" => Ok(SH),
            "SL" => Ok(SL),
            "SQ" => Ok(SQ),
            "SS" => Ok(SS),
            "ST" => Ok(ST),
            "SV" => Ok(SV),
            "TM" => Ok(TM),
            "UC" => Ok(UC),
            "UI" => Ok(UI),
            "UL" => Ok(UL),
            "UN" => Ok(UN),
            "UR" => Ok(UR),
            "US" => Ok(US),
            "UT" => Ok(UT),
            "UV" => Ok(UV),
            _ => Err("no such value representation"),
        }
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(VR::to_string(*self))
    }
}

/// A single attribute's value slot:
/// a value representation plus exactly one list of values
/// in the domain of that representation.
///
/// `I` is the type of the nested data set items,
/// which are exclusively owned by the element.
///
/// Elements are created either declared but empty ([`Element::empty`])
/// or with an initial value list ([`Element::new`]).
/// Values are replaced wholesale with [`Element::set`].
/// The value list can never hold a domain other than the one of its VR.
#[derive(Debug, Clone, PartialEq)]
pub struct Element<I> {
    vr: VR,
    value: Value<I>,
}

/// Macro for implementing the typed accessors of an element,
/// one set per value domain.
macro_rules! impl_domain_accessors {
    ($is: ident, $as: ident, $as_mut: ident, $variant: ident, $getter: ident, $getter_mut: ident, $t: ty) => {
        #[doc = concat!("Check whether the element's VR belongs to the `", stringify!($variant), "` domain.")]
        #[inline]
        pub fn $is(&self) -> bool {
            self.vr.domain() == ValueDomain::$variant
        }

        #[doc = concat!("Retrieve the active `", stringify!($variant), "` list.")]
        ///
        /// An error is returned if the element belongs to another domain.
        pub fn $as(&self) -> Result<&C<$t>, CastValueError> {
            self.value.$getter()
        }

        #[doc = concat!("Retrieve the active `", stringify!($variant), "` list for in-place modification.")]
        ///
        /// An error is returned if the element belongs to another domain.
        pub fn $as_mut(&mut self) -> Result<&mut C<$t>, CastValueError> {
            self.value.$getter_mut()
        }
    };
}

impl<I> Element<I> {
    /// Create a declared but empty element with the given VR.
    ///
    /// The active list is an empty list of the VR's domain.
    pub fn empty(vr: VR) -> Self {
        Element {
            vr,
            value: Value::empty(vr.domain()),
        }
    }

    /// Create an element with an initial list of values.
    ///
    /// Returns an error if the domain of the given values
    /// does not match the domain of `vr`.
    pub fn new<T>(vr: VR, value: T) -> Result<Self, CastValueError>
    where
        T: Into<Value<I>>,
    {
        let value = value.into();
        check_domain(vr, &value)?;
        Ok(Element { vr, value })
    }

    /// Retrieve the value representation.
    #[inline]
    pub fn vr(&self) -> VR {
        self.vr
    }

    /// Retrieve the value domain of this element.
    #[inline]
    pub fn domain(&self) -> ValueDomain {
        self.vr.domain()
    }

    /// Retrieve the full value.
    #[inline]
    pub fn value(&self) -> &Value<I> {
        &self.value
    }

    /// Move the value out of the element, discarding the VR.
    pub fn into_value(self) -> Value<I> {
        self.value
    }

    /// Replace the value list of this element wholesale.
    ///
    /// The element's multiplicity becomes the length of the new list.
    /// If the domain of `value` does not match the element's VR,
    /// an error is returned and the element is left untouched.
    pub fn set<T>(&mut self, value: T) -> Result<(), CastValueError>
    where
        T: Into<Value<I>>,
    {
        let value = value.into();
        check_domain(self.vr, &value)?;
        self.value = value;
        Ok(())
    }

    /// Check whether the active list has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Retrieve the number of entries in the active list.
    #[inline]
    pub fn multiplicity(&self) -> usize {
        self.value.multiplicity()
    }

    impl_domain_accessors!(is_int, as_int, as_int_mut, Integers, integers, integers_mut, i64);
    impl_domain_accessors!(is_real, as_real, as_real_mut, Reals, reals, reals_mut, f64);
    impl_domain_accessors!(
        is_string,
        as_string,
        as_string_mut,
        Strings,
        strings,
        strings_mut,
        String
    );
    impl_domain_accessors!(
        is_binary,
        as_binary,
        as_binary_mut,
        Binary,
        binary,
        binary_mut,
        Vec<u8>
    );
    impl_domain_accessors!(
        is_data_set,
        as_data_set,
        as_data_set_mut,
        DataSets,
        items,
        items_mut,
        I
    );
}

fn check_domain<I>(vr: VR, value: &Value<I>) -> Result<(), CastValueError> {
    let expected = vr.domain();
    let got = value.domain();
    if expected == got {
        Ok(())
    } else {
        Err(CastValueError {
            requested: expected.name(),
            got,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type E = Element<EmptyObject>;

    #[test]
    fn tag_from_u16_pair() {
        let t = Tag::from((0x0010u16, 0x0020u16));
        assert_eq!(0x0010u16, t.group());
        assert_eq!(0x0020u16, t.element());
    }

    #[test]
    fn tag_from_u16_array() {
        let t = Tag::from([0x0010u16, 0x0020u16]);
        assert_eq!(0x0010u16, t.group());
        assert_eq!(0x0020u16, t.element());
    }

    #[test]
    fn tag_from_u32() {
        let t = Tag::from(0x7FE0_0010u32);
        assert_eq!(t, Tag(0x7FE0, 0x0010));
        assert_eq!(t.to_u32(), 0x7FE0_0010);
    }

    #[test]
    fn tag_ordering_is_lexicographic() {
        assert!(Tag(0x0008, 0xFFFF) < Tag(0x0010, 0x0000));
        assert!(Tag(0x0010, 0x0010) < Tag(0x0010, 0x0020));
        assert_eq!(Tag(0x0010, 0x0010), Tag(0x0010, 0x0010));
        assert_ne!(Tag(0x0010, 0x0010), Tag(0x0010, 0x0011));

        let mut tags = vec![Tag(0x0020, 0x000D), Tag(0x0008, 0x0060), Tag(0x0010, 0x0010)];
        tags.sort();
        assert_eq!(
            tags,
            vec![Tag(0x0008, 0x0060), Tag(0x0010, 0x0010), Tag(0x0020, 0x000D)]
        );
    }

    #[test]
    fn tag_formatting() {
        let t = Tag(0x0010, 0x0010);
        assert_eq!(t.to_string(), "(0010,0010)");
        assert_eq!(format!("{:?}", t), "Tag(0x0010, 0x0010)");
        assert_eq!(Tag(0x7FE0, 0x0010).to_hex(), "7FE00010");
    }

    #[test]
    fn tag_parsing() {
        assert_eq!("(0010,0020)".parse::<Tag>().unwrap(), Tag(0x0010, 0x0020));
        assert_eq!("0008,103e".parse::<Tag>().unwrap(), Tag(0x0008, 0x103E));
        assert_eq!("7FE00010".parse::<Tag>().unwrap(), Tag(0x7FE0, 0x0010));

        assert!("".parse::<Tag>().is_err());
        assert!("0010".parse::<Tag>().is_err());
        assert!("(0010,00200)".parse::<Tag>().is_err());
        assert!("GGGG,EEEE".parse::<Tag>().is_err());
        assert!("+010,0010".parse::<Tag>().is_err());
        assert!("0010,+010".parse::<Tag>().is_err());
        assert!("+0100010".parse::<Tag>().is_err());
        assert!("PatientName".parse::<Tag>().is_err());
    }

    #[test]
    fn private_tags() {
        assert!(Tag(0x0009, 0x0010).is_private());
        assert!(!Tag(0x0010, 0x0010).is_private());
    }

    #[test]
    fn vr_string_round_trip() {
        for vr in [VR::AE, VR::DS, VR::OW, VR::SQ, VR::UV] {
            assert_eq!(vr.to_string().parse::<VR>().unwrap(), vr);
            assert_eq!(VR::from_binary(vr.to_bytes()), Some(vr));
        }
        assert!("XX".parse::<VR>().is_err());
        assert_eq!(VR::from_binary(*b"pn"), None);
    }

    #[test]
    fn vr_domains() {
        assert_eq!(VR::US.domain(), ValueDomain::Integers);
        assert_eq!(VR::IS.domain(), ValueDomain::Integers);
        assert_eq!(VR::FL.domain(), ValueDomain::Reals);
        assert_eq!(VR::DS.domain(), ValueDomain::Reals);
        assert_eq!(VR::PN.domain(), ValueDomain::Strings);
        assert_eq!(VR::AT.domain(), ValueDomain::Strings);
        assert_eq!(VR::OW.domain(), ValueDomain::Binary);
        assert_eq!(VR::UN.domain(), ValueDomain::Binary);
        assert_eq!(VR::SQ.domain(), ValueDomain::DataSets);
    }

    #[test]
    fn empty_element_is_declared_with_domain() {
        let e = E::empty(VR::PN);
        assert_eq!(e.vr(), VR::PN);
        assert!(e.is_empty());
        assert_eq!(e.multiplicity(), 0);
        assert!(e.is_string());
        assert!(e.as_string().unwrap().is_empty());
        assert!(e.as_int().is_err());
    }

    #[test]
    fn element_new_checks_domain() {
        let e = E::new(VR::US, vec![1_i64, 2, 3]).unwrap();
        assert!(e.is_int());
        assert_eq!(e.multiplicity(), 3);
        assert_eq!(e.as_int().unwrap().as_slice(), &[1, 2, 3]);

        let err = E::new(VR::US, vec!["foo"]).unwrap_err();
        assert_eq!(err.requested, "integers");
        assert_eq!(err.got, ValueDomain::Strings);
    }

    #[test]
    fn element_typed_accessor_mismatch() {
        let e = E::new(VR::CS, vec!["foo", "bar"]).unwrap();
        assert!(e.is_string());
        assert!(!e.is_int());
        let err = e.as_int().unwrap_err();
        assert_eq!(err.got, ValueDomain::Strings);
        assert!(e.as_real().is_err());
        assert!(e.as_binary().is_err());
        assert!(e.as_data_set().is_err());
    }

    #[test]
    fn element_set_replaces_values() {
        let mut e = E::new(VR::FL, vec![1.5_f64, 2.0, 3.25]).unwrap();
        e.set(vec![4.0_f64, 5.0]).unwrap();
        assert_eq!(e.multiplicity(), 2);
        assert_eq!(e.as_real().unwrap().as_slice(), &[4.0, 5.0]);

        // no partial mutation on failure
        assert!(e.set(vec!["x"]).is_err());
        assert_eq!(e.as_real().unwrap().as_slice(), &[4.0, 5.0]);
    }

    #[test]
    fn element_mutable_accessor() {
        let mut e = E::new(VR::OW, vec![vec![1_u8, 2, 3]]).unwrap();
        e.as_binary_mut().unwrap().push(vec![4, 5]);
        assert_eq!(e.multiplicity(), 2);
        assert_eq!(e.as_binary().unwrap()[1], vec![4, 5]);
    }

    #[test]
    fn element_equality() {
        let a = E::new(VR::CS, vec!["A", "B"]).unwrap();
        let b = E::new(VR::CS, vec!["A", "B"]).unwrap();
        let c = E::new(VR::LO, vec!["A", "B"]).unwrap();
        let d = E::new(VR::CS, vec!["B", "A"]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }
}
