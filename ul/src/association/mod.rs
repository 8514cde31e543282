//! Association negotiation module
//!
//! An association is established by exchanging
//! the settings of both nodes:
//! who is calling whom, which presentation contexts are proposed,
//! which user credentials are presented,
//! and how long the exchanged messages may be.
//! [`AssociationParameters`] holds these settings
//! and converts them from and to an [association request](crate::pdu::AssociationRQ).
pub mod parameters;

mod uid;

pub use parameters::{
    AssociationParameters, ParametersError, PresentationContext, UserIdentity, UserIdentityType,
};
