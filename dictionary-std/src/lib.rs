//! This crate implements the standard attribute registry and constants.
//!
//! ## Run-time dictionary
//!
//! - [`data_element`]: contains the attributes of the bundled registry,
//!   including repeating groups (`60xx`), generic group lengths
//!   and private creators.
//!   It will be used by default by data sets to resolve attribute keywords
//!   and to assign a value representation to newly declared elements.
//!
//! The dictionary is provided as a singleton
//! behind the unit type [`StandardDataDictionary`],
//! built on first use and read-only afterwards.
//!
//! ## Constants
//!
//! The following modules contain constant declarations,
//! which perform an equivalent mapping at compile time,
//! thus without incurring a look-up cost:
//!
//! - [`tags`], which map an attribute alias to a tag
//! - [`uids`], for transfer syntaxes and common SOP classes
pub mod data_element;
pub mod tags;
pub mod uids;

pub use data_element::{registry, StandardDataDictionary, StandardDataDictionaryRegistry};
