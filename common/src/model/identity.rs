//! The authenticated subject as reported by the identity provider.

use serde::{Deserialize, Serialize};

/// Snapshot of the signed-in user, read-only to this application.
///
/// Deserialized from the provider's auth-state callback and from the
/// interactive sign-in result. Wire names follow the provider
/// (`displayName`, `photoURL`, `emailVerified`); every attribute except
/// `uid` may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub uid: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "photoURL")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_provider_payload_with_absent_attributes() {
        let identity: Identity =
            serde_json::from_str(r#"{"uid":"u-42","displayName":null,"email":null}"#).unwrap();
        assert_eq!(identity.uid, "u-42");
        assert_eq!(identity.display_name, None);
        assert_eq!(identity.email, None);
        assert_eq!(identity.photo_url, None);
        assert!(!identity.email_verified);
    }

    #[test]
    fn deserializes_full_provider_payload() {
        let identity: Identity = serde_json::from_str(
            r#"{
                "uid": "u-1",
                "displayName": "Ada Lovelace",
                "email": "ada@x.io",
                "photoURL": "https://example.com/ada.png",
                "emailVerified": true
            }"#,
        )
        .unwrap();
        assert_eq!(identity.display_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(identity.photo_url.as_deref(), Some("https://example.com/ada.png"));
        assert!(identity.email_verified);
    }
}
