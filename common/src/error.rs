//! Error taxonomy shared by the pages that talk to the identity provider
//! and the document directory.
//!
//! Every error here is recoverable: auth errors are shown inline on the
//! sign-in page, write errors bounce the submission controller back to its
//! editing state, and profile-sync errors are logged and swallowed. Nothing
//! is ever fatal to the session.

use thiserror::Error;

/// Failures of the interactive popup sign-in round trip.
///
/// The `Display` text is the user-facing message rendered inline on the
/// sign-in page; the raw provider error is logged separately at the call
/// site.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Sign-in was cancelled. Please try again.")]
    PopupClosed,
    #[error("Popup was blocked. Please allow popups and try again.")]
    PopupBlocked,
    #[error("Failed to sign in. Please try again.")]
    Other,
}

impl AuthError {
    /// Maps the provider's error code onto the taxonomy. Unknown or missing
    /// codes collapse into [`AuthError::Other`].
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("auth/popup-closed-by-user") => AuthError::PopupClosed,
            Some("auth/popup-blocked") => AuthError::PopupBlocked,
            _ => AuthError::Other,
        }
    }
}

/// A rejected document-directory operation (unreachable, permission denied,
/// payload rejected). Carries the provider's description for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct WriteError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_provider_codes_map_to_specific_errors() {
        assert_eq!(
            AuthError::from_code(Some("auth/popup-closed-by-user")),
            AuthError::PopupClosed
        );
        assert_eq!(
            AuthError::from_code(Some("auth/popup-blocked")),
            AuthError::PopupBlocked
        );
    }

    #[test]
    fn unknown_codes_collapse_into_other() {
        assert_eq!(
            AuthError::from_code(Some("auth/network-request-failed")),
            AuthError::Other
        );
        assert_eq!(AuthError::from_code(None), AuthError::Other);
    }
}
