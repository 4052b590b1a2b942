//! Typed auth surface: the session-gate subscription and the interactive
//! sign-in round trip.

use common::error::AuthError;
use common::model::identity::Identity;
use gloo_console::error;
use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use yew::Callback;

/// Gate status consumed by pages that depend on the session subject.
///
/// `Pending` covers the window between mount and the first auth-state
/// notification; pages render a loading indicator there instead of
/// flashing the gated content.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthStatus {
    Pending,
    Authenticated(Identity),
    Unauthenticated,
}

impl AuthStatus {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            AuthStatus::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }
}

/// Live auth-state subscription owned by exactly one page component.
///
/// Dropping it detaches the provider listener, so a destroyed page never
/// leaves a dangling callback behind.
pub struct AuthSubscription {
    unsubscribe: Function,
    _on_change: Closure<dyn FnMut(JsValue)>,
}

impl AuthSubscription {
    pub fn subscribe(on_change: Callback<Option<Identity>>) -> Self {
        let closure = Closure::new(move |value: JsValue| {
            on_change.emit(parse_identity(value));
        });
        let unsubscribe = super::subscribe_auth(closure.as_ref().unchecked_ref());
        Self {
            unsubscribe,
            _on_change: closure,
        }
    }
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        let _ = self.unsubscribe.call0(&JsValue::NULL);
    }
}

/// Runs the popup sign-in round trip. At most one call should be in
/// flight; the sign-in page guards this with its spinner flag.
pub async fn sign_in_with_popup() -> Result<Identity, AuthError> {
    match super::sign_in_with_google_popup().await {
        Ok(value) => parse_identity(value).ok_or(AuthError::Other),
        Err(err) => {
            let code = error_code(&err);
            error!("sign-in failed:", err);
            Err(AuthError::from_code(code.as_deref()))
        }
    }
}

/// Ends the provider session. Failures are logged only; the caller resets
/// its local state regardless.
pub async fn sign_out() {
    if let Err(err) = super::sign_out_user().await {
        error!("sign-out failed:", err);
    }
}

fn parse_identity(value: JsValue) -> Option<Identity> {
    let json = value.as_string()?;
    match serde_json::from_str(&json) {
        Ok(identity) => Some(identity),
        Err(err) => {
            error!("malformed identity payload:", err.to_string());
            None
        }
    }
}

fn error_code(err: &JsValue) -> Option<String> {
    Reflect::get(err, &JsValue::from_str("code"))
        .ok()
        .and_then(|code| code.as_string())
}
