//! Typed directory surface: the feedback write and the user-profile sync.

use common::error::WriteError;
use common::model::feedback::FeedbackSubmission;
use common::model::identity::Identity;
use common::model::profile::{NewUserProfile, UserProfile};
use gloo_console::log;
use serde::Serialize;
use wasm_bindgen::JsValue;

pub const FEEDBACK_COLLECTION: &str = "feedback";
pub const USERS_COLLECTION: &str = "users";

/// Writes the immutable feedback document. Exactly one directory write per
/// call; a failure leaves nothing behind and the caller decides whether to
/// let the user retry.
pub async fn create_feedback(submission: &FeedbackSubmission) -> Result<String, WriteError> {
    let payload = encode(submission)?;
    match super::create_document(FEEDBACK_COLLECTION, &payload).await {
        Ok(id) => Ok(id.as_string().unwrap_or_default()),
        Err(err) => Err(WriteError(describe(&err))),
    }
}

/// Mirrors the signed-in identity into `users/{uid}`.
///
/// The first sign-in creates the profile with its one-time creation
/// markers; later sign-ins merge only the sign-in metadata. Errors are
/// returned so the caller can log them, but they must never interrupt the
/// sign-in flow itself.
pub async fn sync_user_profile(identity: &Identity) -> Result<(), WriteError> {
    let existing = super::read_document(USERS_COLLECTION, &identity.uid)
        .await
        .map_err(|err| WriteError(describe(&err)))?;

    let payload = if existing.is_null() || existing.is_undefined() {
        encode(&NewUserProfile::from_identity(identity))?
    } else {
        encode(&UserProfile::from_identity(identity))?
    };

    super::upsert_merge_document(USERS_COLLECTION, &identity.uid, &payload)
        .await
        .map_err(|err| WriteError(describe(&err)))?;
    log!("user profile synced for", identity.uid.clone());
    Ok(())
}

fn encode<T: Serialize>(value: &T) -> Result<String, WriteError> {
    serde_json::to_string(value).map_err(|err| WriteError(err.to_string()))
}

fn describe(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::Reflect::get(err, &JsValue::from_str("message"))
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| "directory request failed".to_string())
}
