//! Negotiated association settings.

use std::collections::HashSet;

use dcmset_dictionary_std::uids;
use snafu::{ensure, Backtrace, Snafu};
use tracing::{debug, warn};

use super::uid::trim_uid;
use crate::pdu::{
    self, AssociationRQ, PresentationContextProposed, UserVariableItem, DEFAULT_MAX_PDU,
    PROTOCOL_VERSION,
};
use crate::{IMPLEMENTATION_CLASS_UID, IMPLEMENTATION_VERSION_NAME};

/// The maximum number of characters in an application entity title.
pub const MAX_AE_TITLE_LENGTH: usize = 16;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ParametersError {
    #[snafu(display(
        "AE title `{}` is longer than {} characters",
        ae_title,
        MAX_AE_TITLE_LENGTH
    ))]
    AeTitleTooLong {
        ae_title: String,
        backtrace: Backtrace,
    },

    /// an association request needs both AE titles
    #[snafu(display("missing {} AE title", which))]
    MissingAeTitle {
        which: &'static str,
        backtrace: Backtrace,
    },

    #[snafu(display("presentation context ID {} is not an odd number", id))]
    EvenPresentationContextId { id: u8, backtrace: Backtrace },

    #[snafu(display("presentation context ID {} is used more than once", id))]
    DuplicatePresentationContextId { id: u8, backtrace: Backtrace },

    #[snafu(display("user identity of type {} is not supported", identity_type))]
    UnsupportedUserIdentity {
        identity_type: pdu::UserIdentityType,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = ParametersError> = std::result::Result<T, E>;

/// A presentation context proposed in an association:
/// an abstract syntax along with the transfer syntaxes
/// the requestor is willing to use for it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct PresentationContext {
    /// the presentation context identifier, an odd number
    pub id: u8,
    /// the abstract syntax UID
    pub abstract_syntax: String,
    /// the candidate transfer syntax UIDs, by order of preference
    pub transfer_syntaxes: Vec<String>,
}

impl PresentationContext {
    pub fn new<A, T>(id: u8, abstract_syntax: A, transfer_syntaxes: T) -> Self
    where
        A: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        PresentationContext {
            id,
            abstract_syntax: abstract_syntax.into(),
            transfer_syntaxes: transfer_syntaxes.into_iter().map(Into::into).collect(),
        }
    }
}

/// The kind of credential presented by the association requestor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserIdentityType {
    /// no user identity negotiation
    #[default]
    None,
    Username,
    UsernameAndPassword,
    Kerberos,
    Saml,
}

/// User identity credentials.
///
/// The secondary field is only used
/// with [`UserIdentityType::UsernameAndPassword`]
/// and is empty otherwise.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct UserIdentity {
    pub identity_type: UserIdentityType,
    pub primary_field: String,
    pub secondary_field: String,
}

/// The settings of an association.
///
/// Setters may be chained.
/// Those which validate their input return a `Result`
/// and leave the parameters unchanged on failure.
///
/// # Example
///
/// ```
/// # use dcmset_ul::{AssociationParameters, PresentationContext, UserIdentityType};
/// let mut parameters = AssociationParameters::new();
/// parameters
///     .set_called_ae_title("STORE-SCP")?
///     .set_calling_ae_title("STORE-SCU")?
///     .set_presentation_contexts(vec![PresentationContext::new(
///         1,
///         "1.2.840.10008.5.1.4.1.1.4",
///         ["1.2.840.10008.1.2.1"],
///     )])?
///     .set_user_identity_to_username_and_password("molly", "s3cr3t")
///     .set_maximum_length(32_768);
///
/// assert_eq!(parameters.called_ae_title(), "STORE-SCP");
/// assert_eq!(parameters.user_identity().identity_type, UserIdentityType::UsernameAndPassword);
/// # Ok::<(), dcmset_ul::ParametersError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationParameters {
    called_ae_title: String,
    calling_ae_title: String,
    presentation_contexts: Vec<PresentationContext>,
    user_identity: UserIdentity,
    maximum_length: u32,
}

impl Default for AssociationParameters {
    fn default() -> Self {
        AssociationParameters {
            called_ae_title: String::new(),
            calling_ae_title: String::new(),
            presentation_contexts: Vec::new(),
            user_identity: UserIdentity::default(),
            maximum_length: DEFAULT_MAX_PDU,
        }
    }
}

impl AssociationParameters {
    /// Create parameters with empty AE titles,
    /// no presentation contexts, no user identity
    /// and the default maximum length.
    pub fn new() -> Self {
        Self::default()
    }

    /// The AE title of the node receiving the association request.
    pub fn called_ae_title(&self) -> &str {
        &self.called_ae_title
    }

    /// Set the called AE title.
    ///
    /// Fails if the title is longer than 16 characters.
    pub fn set_called_ae_title(&mut self, ae_title: impl Into<String>) -> Result<&mut Self> {
        self.called_ae_title = check_ae_title(ae_title.into())?;
        Ok(self)
    }

    /// The AE title of the node requesting the association.
    pub fn calling_ae_title(&self) -> &str {
        &self.calling_ae_title
    }

    /// Set the calling AE title.
    ///
    /// Fails if the title is longer than 16 characters.
    pub fn set_calling_ae_title(&mut self, ae_title: impl Into<String>) -> Result<&mut Self> {
        self.calling_ae_title = check_ae_title(ae_title.into())?;
        Ok(self)
    }

    pub fn presentation_contexts(&self) -> &[PresentationContext] {
        &self.presentation_contexts
    }

    /// Replace the proposed presentation contexts.
    ///
    /// Fails if an identifier is even or used more than once.
    pub fn set_presentation_contexts(
        &mut self,
        presentation_contexts: Vec<PresentationContext>,
    ) -> Result<&mut Self> {
        check_presentation_context_ids(&presentation_contexts)?;
        self.presentation_contexts = presentation_contexts;
        Ok(self)
    }

    pub fn user_identity(&self) -> &UserIdentity {
        &self.user_identity
    }

    /// Do not negotiate any user identity.
    pub fn set_user_identity_to_none(&mut self) -> &mut Self {
        self.set_user_identity(UserIdentityType::None, String::new(), String::new())
    }

    pub fn set_user_identity_to_username(&mut self, username: impl Into<String>) -> &mut Self {
        self.set_user_identity(UserIdentityType::Username, username.into(), String::new())
    }

    pub fn set_user_identity_to_username_and_password(
        &mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> &mut Self {
        self.set_user_identity(
            UserIdentityType::UsernameAndPassword,
            username.into(),
            password.into(),
        )
    }

    pub fn set_user_identity_to_kerberos(&mut self, ticket: impl Into<String>) -> &mut Self {
        self.set_user_identity(UserIdentityType::Kerberos, ticket.into(), String::new())
    }

    pub fn set_user_identity_to_saml(&mut self, assertion: impl Into<String>) -> &mut Self {
        self.set_user_identity(UserIdentityType::Saml, assertion.into(), String::new())
    }

    fn set_user_identity(
        &mut self,
        identity_type: UserIdentityType,
        primary_field: String,
        secondary_field: String,
    ) -> &mut Self {
        self.user_identity = UserIdentity {
            identity_type,
            primary_field,
            secondary_field,
        };
        self
    }

    /// The maximum length of a message which this node can receive.
    pub fn maximum_length(&self) -> u32 {
        self.maximum_length
    }

    /// Set the maximum message length. Zero means unlimited.
    pub fn set_maximum_length(&mut self, maximum_length: u32) -> &mut Self {
        self.maximum_length = maximum_length;
        self
    }

    /// Build an association request out of these parameters.
    ///
    /// Fails if either AE title is empty.
    pub fn to_association_rq(&self) -> Result<AssociationRQ> {
        ensure!(
            !self.called_ae_title.is_empty(),
            MissingAeTitleSnafu { which: "called" }
        );
        ensure!(
            !self.calling_ae_title.is_empty(),
            MissingAeTitleSnafu { which: "calling" }
        );

        let presentation_contexts = self
            .presentation_contexts
            .iter()
            .map(|pc| PresentationContextProposed {
                id: pc.id,
                abstract_syntax: pc.abstract_syntax.clone(),
                transfer_syntaxes: pc.transfer_syntaxes.clone(),
            })
            .collect();

        let mut user_variables = vec![
            UserVariableItem::MaxLength(self.maximum_length),
            UserVariableItem::ImplementationClassUID(IMPLEMENTATION_CLASS_UID.to_string()),
            UserVariableItem::ImplementationVersionName(IMPLEMENTATION_VERSION_NAME.to_string()),
        ];

        let identity_type = match self.user_identity.identity_type {
            UserIdentityType::None => None,
            UserIdentityType::Username => Some(pdu::UserIdentityType::Username),
            UserIdentityType::UsernameAndPassword => Some(pdu::UserIdentityType::UsernamePassword),
            UserIdentityType::Kerberos => Some(pdu::UserIdentityType::KerberosServiceTicket),
            UserIdentityType::Saml => Some(pdu::UserIdentityType::SamlAssertion),
        };
        if let Some(identity_type) = identity_type {
            user_variables.push(UserVariableItem::UserIdentityItem(pdu::UserIdentity::new(
                false,
                identity_type,
                self.user_identity.primary_field.as_bytes().to_vec(),
                self.user_identity.secondary_field.as_bytes().to_vec(),
            )));
        }

        debug!(
            "Association request from {} to {} with {} presentation contexts",
            self.calling_ae_title,
            self.called_ae_title,
            self.presentation_contexts.len()
        );

        Ok(AssociationRQ {
            protocol_version: PROTOCOL_VERSION,
            calling_ae_title: self.calling_ae_title.clone(),
            called_ae_title: self.called_ae_title.clone(),
            application_context_name: uids::DICOM_APPLICATION_CONTEXT_NAME.to_string(),
            presentation_contexts,
            user_variables,
        })
    }

    /// Collect the parameters proposed in an association request.
    ///
    /// AE titles lose their space padding and UIDs their null padding.
    /// Without a maximum length sub-item, the default maximum length is kept.
    pub fn from_association_rq(rq: &AssociationRQ) -> Result<Self> {
        if trim_uid(&rq.application_context_name) != uids::DICOM_APPLICATION_CONTEXT_NAME {
            warn!(
                "Unexpected application context name `{}`",
                rq.application_context_name
            );
        }

        let mut parameters = AssociationParameters::new();
        parameters
            .set_called_ae_title(rq.called_ae_title.trim())?
            .set_calling_ae_title(rq.calling_ae_title.trim())?
            .set_presentation_contexts(
                rq.presentation_contexts
                    .iter()
                    .map(|pc| {
                        PresentationContext::new(
                            pc.id,
                            trim_uid(&pc.abstract_syntax),
                            pc.transfer_syntaxes.iter().map(|ts| trim_uid(ts)),
                        )
                    })
                    .collect(),
            )?;

        for item in &rq.user_variables {
            match item {
                UserVariableItem::MaxLength(len) => {
                    parameters.set_maximum_length(*len);
                }
                UserVariableItem::UserIdentityItem(user_identity) => {
                    let primary = String::from_utf8_lossy(user_identity.primary_field());
                    let secondary = String::from_utf8_lossy(user_identity.secondary_field());
                    match user_identity.identity_type() {
                        pdu::UserIdentityType::Username => {
                            parameters.set_user_identity_to_username(primary)
                        }
                        pdu::UserIdentityType::UsernamePassword => parameters
                            .set_user_identity_to_username_and_password(primary, secondary),
                        pdu::UserIdentityType::KerberosServiceTicket => {
                            parameters.set_user_identity_to_kerberos(primary)
                        }
                        pdu::UserIdentityType::SamlAssertion => {
                            parameters.set_user_identity_to_saml(primary)
                        }
                        identity_type => {
                            return UnsupportedUserIdentitySnafu { identity_type }.fail()
                        }
                    };
                }
                other => {
                    debug!("Ignoring user variable item of type {:#04x}", other.item_type());
                }
            }
        }

        Ok(parameters)
    }
}

fn check_ae_title(ae_title: String) -> Result<String> {
    ensure!(
        ae_title.chars().count() <= MAX_AE_TITLE_LENGTH,
        AeTitleTooLongSnafu { ae_title }
    );
    Ok(ae_title)
}

fn check_presentation_context_ids(presentation_contexts: &[PresentationContext]) -> Result<()> {
    let mut seen = HashSet::new();
    for pc in presentation_contexts {
        ensure!(pc.id % 2 == 1, EvenPresentationContextIdSnafu { id: pc.id });
        ensure!(
            seen.insert(pc.id),
            DuplicatePresentationContextIdSnafu { id: pc.id }
        );
    }
    Ok(())
}
