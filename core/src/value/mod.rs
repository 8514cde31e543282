//! This module includes a high level abstraction over an element's value.
//!
//! A [`Value`] holds exactly one active list of values,
//! whose kind (the [`ValueDomain`]) is determined by
//! the value representation of the element owning it.

use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt;

/// An aggregation of one or more elements in a value.
pub type C<T> = SmallVec<[T; 2]>;

/// The closed set of value kinds which an element may hold.
///
/// Every value representation maps to exactly one domain
/// (see [`VR::domain`](crate::header::VR::domain)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueDomain {
    /// Signed integers (IS, SL, SS, SV, UL, US, UV)
    Integers,
    /// Floating point numbers (DS, FD, FL)
    Reals,
    /// Text (AE, AS, AT, CS, DA, DT, LO, LT, PN, SH, ST, TM, UC, UI, UR, UT)
    Strings,
    /// Byte strings (OB, OD, OF, OL, OV, OW, UN)
    Binary,
    /// Nested data sets (SQ)
    DataSets,
}

impl ValueDomain {
    /// A human readable name of the domain.
    pub fn name(self) -> &'static str {
        match self {
            ValueDomain::Integers => "integers",
            ValueDomain::Reals => "reals",
            ValueDomain::Strings => "strings",
            ValueDomain::Binary => "binary",
            ValueDomain::DataSets => "data sets",
        }
    }
}

impl fmt::Display for ValueDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An error type for an attempt to access a value
/// in a domain other than the one it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct CastValueError {
    /// The value domain requested
    pub requested: &'static str,
    /// The value's actual domain
    pub got: ValueDomain,
}

impl fmt::Display for CastValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bad value cast: requested {} but value holds {}",
            self.requested, self.got
        )
    }
}

impl std::error::Error for CastValueError {}

/// An element value: one list of values of a single domain.
///
/// The type parameter `I` is the type of the nested data sets
/// held by sequence values.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<I> {
    /// Integer values
    Integers(C<i64>),
    /// Real values
    Reals(C<f64>),
    /// Textual values
    Strings(C<String>),
    /// Byte string values, one buffer per value
    Binary(C<Vec<u8>>),
    /// Nested data set items
    DataSets(C<I>),
}

macro_rules! impl_value_getters {
    ($getter: ident, $getter_mut: ident, $variant: ident, $t: ty) => {
        #[doc = concat!("Borrow the list of ", stringify!($getter), ".")]
        ///
        /// An error is returned if the value is of another domain.
        pub fn $getter(&self) -> Result<&C<$t>, CastValueError> {
            match self {
                Value::$variant(c) => Ok(c),
                value => Err(CastValueError {
                    requested: ValueDomain::$variant.name(),
                    got: value.domain(),
                }),
            }
        }

        #[doc = concat!("Mutably borrow the list of ", stringify!($getter), ".")]
        ///
        /// An error is returned if the value is of another domain.
        pub fn $getter_mut(&mut self) -> Result<&mut C<$t>, CastValueError> {
            match self {
                Value::$variant(c) => Ok(c),
                value => Err(CastValueError {
                    requested: ValueDomain::$variant.name(),
                    got: value.domain(),
                }),
            }
        }
    };
}

impl<I> Value<I> {
    /// Create an empty value of the given domain.
    pub fn empty(domain: ValueDomain) -> Self {
        match domain {
            ValueDomain::Integers => Value::Integers(C::new()),
            ValueDomain::Reals => Value::Reals(C::new()),
            ValueDomain::Strings => Value::Strings(C::new()),
            ValueDomain::Binary => Value::Binary(C::new()),
            ValueDomain::DataSets => Value::DataSets(C::new()),
        }
    }

    /// Retrieve the domain of the active list.
    pub fn domain(&self) -> ValueDomain {
        match self {
            Value::Integers(_) => ValueDomain::Integers,
            Value::Reals(_) => ValueDomain::Reals,
            Value::Strings(_) => ValueDomain::Strings,
            Value::Binary(_) => ValueDomain::Binary,
            Value::DataSets(_) => ValueDomain::DataSets,
        }
    }

    /// Obtain the number of individual values in the active list.
    ///
    /// In a binary value, each byte buffer counts as one value.
    pub fn multiplicity(&self) -> usize {
        match self {
            Value::Integers(c) => c.len(),
            Value::Reals(c) => c.len(),
            Value::Strings(c) => c.len(),
            Value::Binary(c) => c.len(),
            Value::DataSets(c) => c.len(),
        }
    }

    /// Check whether the active list is empty.
    pub fn is_empty(&self) -> bool {
        self.multiplicity() == 0
    }

    impl_value_getters!(integers, integers_mut, Integers, i64);
    impl_value_getters!(reals, reals_mut, Reals, f64);
    impl_value_getters!(strings, strings_mut, Strings, String);
    impl_value_getters!(binary, binary_mut, Binary, Vec<u8>);
    impl_value_getters!(items, items_mut, DataSets, I);

    /// Shorten the active list to at most `limit` values.
    pub fn truncate(&mut self, limit: usize) {
        match self {
            Value::Integers(c) => c.truncate(limit),
            Value::Reals(c) => c.truncate(limit),
            Value::Strings(c) => c.truncate(limit),
            Value::Binary(c) => c.truncate(limit),
            Value::DataSets(c) => c.truncate(limit),
        }
    }
}

/// A utility macro for implementing the conversions from
/// single values and collections of them into a [`Value`].
macro_rules! impl_from_for_value {
    ($typ: ty, $variant: ident) => {
        impl<I> From<$typ> for Value<I> {
            fn from(value: $typ) -> Self {
                Value::$variant(C::from_elem(value.into(), 1))
            }
        }

        impl<I> From<Vec<$typ>> for Value<I> {
            fn from(value: Vec<$typ>) -> Self {
                Value::$variant(value.into_iter().map(Into::into).collect())
            }
        }

        impl<I, const N: usize> From<[$typ; N]> for Value<I> {
            fn from(value: [$typ; N]) -> Self {
                Value::$variant(value.into_iter().map(Into::into).collect())
            }
        }
    };
}

impl_from_for_value!(i64, Integers);
impl_from_for_value!(i32, Integers);
impl_from_for_value!(u16, Integers);
impl_from_for_value!(u32, Integers);
impl_from_for_value!(f64, Reals);
impl_from_for_value!(f32, Reals);
impl_from_for_value!(String, Strings);
impl_from_for_value!(&str, Strings);
impl_from_for_value!(Vec<u8>, Binary);

impl<I> From<C<i64>> for Value<I> {
    fn from(value: C<i64>) -> Self {
        Value::Integers(value)
    }
}

impl<I> From<C<f64>> for Value<I> {
    fn from(value: C<f64>) -> Self {
        Value::Reals(value)
    }
}

impl<I> From<C<String>> for Value<I> {
    fn from(value: C<String>) -> Self {
        Value::Strings(value)
    }
}

impl<I> From<C<Vec<u8>>> for Value<I> {
    fn from(value: C<Vec<u8>>) -> Self {
        Value::Binary(value)
    }
}

impl<I> Value<I> {
    /// Construct a sequence value from a list of data set items.
    pub fn new_sequence<T>(items: T) -> Self
    where
        T: Into<C<I>>,
    {
        Value::DataSets(items.into())
    }
}

impl<I> fmt::Display for Value<I> {
    /// Writes the values separated by a backslash,
    /// as in the textual encoding of multi-valued elements.
    /// Binary values are shown as their length in bytes
    /// and nested data sets as their item count.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integers(c) => write!(f, "{}", c.iter().join("\\")),
            Value::Reals(c) => write!(f, "{}", c.iter().join("\\")),
            Value::Strings(c) => write!(f, "{}", c.iter().join("\\")),
            Value::Binary(c) => write!(
                f,
                "{}",
                c.iter().map(|b| format!("<{} bytes>", b.len())).join("\\")
            ),
            Value::DataSets(c) => write!(f, "<{} items>", c.len()),
        }
    }
}

/// Construct an element value.
///
/// The first token names the domain
/// (`Integers`, `Reals`, `Strings`, `Binary` or `DataSets`),
/// followed by either a single value or a bracketed list of values.
///
/// ```
/// # use dcmset_core::dcmset_value;
/// # use dcmset_core::value::Value;
/// # use dcmset_core::header::EmptyObject;
/// let v: Value<EmptyObject> = dcmset_value!(Integers, [1, 2, 3]);
/// assert_eq!(v.multiplicity(), 3);
/// let v: Value<EmptyObject> = dcmset_value!(Strings, "MR");
/// assert_eq!(v.strings().unwrap()[0], "MR");
/// ```
#[macro_export]
macro_rules! dcmset_value {
    (Strings, [ $($elem: expr),* $(,)? ]) => {
        $crate::value::Value::Strings($crate::smallvec::smallvec![$(String::from($elem),)*])
    };
    (Strings, $elem: expr) => {
        $crate::value::Value::Strings($crate::value::C::from_elem(String::from($elem), 1))
    };
    ($typ: ident, [ $($elem: expr),* $(,)? ]) => {
        $crate::value::Value::$typ($crate::smallvec::smallvec![$($elem,)*])
    };
    ($typ: ident, $elem: expr) => {
        $crate::value::Value::$typ($crate::value::C::from_elem($elem, 1))
    };
}
