//! Protocol Data Unit module
//!
//! This module comprises the data structures representing
//! an association request PDU (A-ASSOCIATE-RQ) and its items,
//! as they are exchanged during association negotiation.
//! Byte level framing is left to the transport.

use std::fmt::Display;

/// The default maximum PDU size
pub const DEFAULT_MAX_PDU: u32 = 16_384;

/// The only protocol version defined by the standard.
pub const PROTOCOL_VERSION: u16 = 1;

/// Message component for a proposed presentation context.
#[derive(Clone, Eq, PartialEq, PartialOrd, Hash, Debug)]
pub struct PresentationContextProposed {
    /// the presentation context identifier
    pub id: u8,
    /// the expected abstract syntax UID
    /// (commonly referring to the expected SOP class)
    pub abstract_syntax: String,
    /// a list of transfer syntax UIDs to support in this interaction
    pub transfer_syntaxes: Vec<String>,
}

/// A sub-item of the user information item.
#[derive(Clone, Eq, PartialEq, PartialOrd, Hash, Debug)]
pub enum UserVariableItem {
    MaxLength(u32),
    ImplementationClassUID(String),
    ImplementationVersionName(String),
    UserIdentityItem(UserIdentity),
}

impl UserVariableItem {
    /// The item type code of this sub-item.
    pub fn item_type(&self) -> u8 {
        match self {
            UserVariableItem::MaxLength(_) => 0x51,
            UserVariableItem::ImplementationClassUID(_) => 0x52,
            UserVariableItem::ImplementationVersionName(_) => 0x55,
            UserVariableItem::UserIdentityItem(_) => 0x58,
        }
    }
}

/// User identity negotiation sub-item (item type 0x58).
#[derive(Clone, Eq, PartialEq, PartialOrd, Hash, Debug)]
pub struct UserIdentity {
    positive_response_requested: bool,
    identity_type: UserIdentityType,
    primary_field: Vec<u8>,
    secondary_field: Vec<u8>,
}

impl UserIdentity {
    pub fn new(
        positive_response_requested: bool,
        identity_type: UserIdentityType,
        primary_field: Vec<u8>,
        secondary_field: Vec<u8>,
    ) -> Self {
        UserIdentity {
            positive_response_requested,
            identity_type,
            primary_field,
            secondary_field,
        }
    }

    pub fn positive_response_requested(&self) -> bool {
        self.positive_response_requested
    }

    pub fn identity_type(&self) -> UserIdentityType {
        self.identity_type
    }

    pub fn primary_field(&self) -> &[u8] {
        &self.primary_field
    }

    /// The secondary field,
    /// only meaningful for [`UserIdentityType::UsernamePassword`].
    pub fn secondary_field(&self) -> &[u8] {
        &self.secondary_field
    }
}

/// The kind of credential carried by a user identity sub-item.
#[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Hash, Debug)]
#[non_exhaustive]
pub enum UserIdentityType {
    Username,
    UsernamePassword,
    KerberosServiceTicket,
    SamlAssertion,
    Jwt,
}

impl UserIdentityType {
    /// Obtain the identity type from its code in the sub-item.
    pub fn from_code(user_identity_type: u8) -> Option<Self> {
        match user_identity_type {
            1 => Some(Self::Username),
            2 => Some(Self::UsernamePassword),
            3 => Some(Self::KerberosServiceTicket),
            4 => Some(Self::SamlAssertion),
            5 => Some(Self::Jwt),
            _ => None,
        }
    }

    /// The code of this identity type in the sub-item.
    pub fn code(self) -> u8 {
        match self {
            Self::Username => 1,
            Self::UsernamePassword => 2,
            Self::KerberosServiceTicket => 3,
            Self::SamlAssertion => 4,
            Self::Jwt => 5,
        }
    }
}

impl Display for UserIdentityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            UserIdentityType::Username => "username",
            UserIdentityType::UsernamePassword => "username and passcode",
            UserIdentityType::KerberosServiceTicket => "Kerberos service ticket",
            UserIdentityType::SamlAssertion => "SAML assertion",
            UserIdentityType::Jwt => "JSON web token",
        };
        f.write_str(msg)
    }
}

/// An in-memory representation of an association request
#[derive(Debug, Clone, Eq, Hash, PartialEq, PartialOrd)]
pub struct AssociationRQ {
    pub protocol_version: u16,
    pub calling_ae_title: String,
    pub called_ae_title: String,
    pub application_context_name: String,
    pub presentation_contexts: Vec<PresentationContextProposed>,
    pub user_variables: Vec<UserVariableItem>,
}

impl AssociationRQ {
    /// Retrieve the maximum length sub-item, if present.
    pub fn max_length(&self) -> Option<u32> {
        self.user_variables.iter().find_map(|item| match item {
            UserVariableItem::MaxLength(len) => Some(*len),
            _ => None,
        })
    }

    /// Retrieve the user identity sub-item, if present.
    pub fn user_identity(&self) -> Option<&UserIdentity> {
        self.user_variables.iter().find_map(|item| match item {
            UserVariableItem::UserIdentityItem(user_identity) => Some(user_identity),
            _ => None,
        })
    }
}
