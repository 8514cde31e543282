//! This crate contains the values exchanged
//! when two nodes negotiate an association
//! through the upper layer protocol.
//!
//! - The [`association`] module
//!   provides [`AssociationParameters`],
//!   the negotiated settings of an association:
//!   application entity titles, proposed presentation contexts,
//!   user identity and maximum message length.
//! - The [`pdu`] module
//!   provides data structures representing _protocol data units_
//!   and their items, as they are laid out in an association request.
//!
//! No transport is implemented here.
//! A session layer sends and receives the PDUs,
//! converting them from and to parameters
//! with [`AssociationParameters::to_association_rq`]
//! and [`AssociationParameters::from_association_rq`].

pub mod association;
pub mod pdu;

/// The implementation class UID generically referring to dcmset.
///
/// Generated as per the standard, part 5, section B.2.
pub const IMPLEMENTATION_CLASS_UID: &str = "2.25.338835816869658111292274941043409031074";

/// The implementation version name generically referring to dcmset.
pub const IMPLEMENTATION_VERSION_NAME: &str = "DCMSET 0.1.0";

// re-exports

pub use association::{
    AssociationParameters, ParametersError, PresentationContext, UserIdentity, UserIdentityType,
};
pub use pdu::AssociationRQ;
