//! User-profile documents mirrored into the `users` collection on sign-in.
//!
//! The lifecycle is create-then-merge: the first successful sign-in writes
//! a [`NewUserProfile`] (with `createdAt` and `isNewUser`); every later
//! sign-in merge-updates only the [`UserProfile`] fields, so the creation
//! markers are written exactly once.

use serde::Serialize;

use crate::model::identity::Identity;
use crate::model::ServerStamp;

/// Sign-in metadata merged into `users/{uid}` on every sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    pub email_verified: bool,
    pub last_sign_in: ServerStamp,
    pub updated_at: ServerStamp,
}

impl UserProfile {
    pub fn from_identity(identity: &Identity) -> Self {
        Self {
            uid: identity.uid.clone(),
            email: identity.email.clone(),
            display_name: identity.display_name.clone(),
            photo_url: identity.photo_url.clone(),
            email_verified: identity.email_verified,
            last_sign_in: ServerStamp,
            updated_at: ServerStamp,
        }
    }
}

/// First-creation variant: the profile plus the one-time creation markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserProfile {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub created_at: ServerStamp,
    pub is_new_user: bool,
}

impl NewUserProfile {
    pub fn from_identity(identity: &Identity) -> Self {
        Self {
            profile: UserProfile::from_identity(identity),
            created_at: ServerStamp,
            is_new_user: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SERVER_TIMESTAMP;
    use serde_json::json;

    fn ada() -> Identity {
        Identity {
            uid: "uid-1".to_string(),
            display_name: Some("Ada Lovelace".to_string()),
            email: Some("ada@x.io".to_string()),
            photo_url: None,
            email_verified: true,
        }
    }

    #[test]
    fn first_sign_in_includes_the_creation_markers() {
        let value = serde_json::to_value(NewUserProfile::from_identity(&ada())).unwrap();
        assert_eq!(value["uid"], json!("uid-1"));
        assert_eq!(value["isNewUser"], json!(true));
        assert_eq!(value["createdAt"], json!(SERVER_TIMESTAMP));
        assert_eq!(value["lastSignIn"], json!(SERVER_TIMESTAMP));
        assert_eq!(value["updatedAt"], json!(SERVER_TIMESTAMP));
    }

    #[test]
    fn returning_sign_in_omits_the_creation_markers() {
        let value = serde_json::to_value(UserProfile::from_identity(&ada())).unwrap();
        assert!(value.get("createdAt").is_none());
        assert!(value.get("isNewUser").is_none());
        assert_eq!(value["photoURL"], json!(null));
        assert_eq!(value["emailVerified"], json!(true));
        assert_eq!(value["lastSignIn"], json!(SERVER_TIMESTAMP));
    }
}
