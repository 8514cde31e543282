//! Private utility module for working with UIDs

/// Strip the trailing null padding of an even length UID.
pub(crate) fn trim_uid(uid: &str) -> &str {
    uid.trim_end_matches('\0')
}
