//! Bindings to the external managed platform (identity provider plus
//! document directory), wrapped by `js/firebase.js`.
//!
//! The raw externs stay `pub(crate)` and untyped; the typed surface the
//! pages use lives in [`auth`] and [`firestore`].

pub mod auth;
pub mod firestore;

use js_sys::Function;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/js/firebase.js")]
extern "C" {
    /// Attaches `on_change` to the provider's auth-state stream. The
    /// callback receives an identity JSON string or `null`; the returned
    /// function detaches the listener.
    #[wasm_bindgen(js_name = "subscribeAuth")]
    pub(crate) fn subscribe_auth(on_change: &Function) -> Function;

    #[wasm_bindgen(js_name = "signInWithGooglePopup", catch)]
    pub(crate) async fn sign_in_with_google_popup() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = "signOutUser", catch)]
    pub(crate) async fn sign_out_user() -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = "createDocument", catch)]
    pub(crate) async fn create_document(
        collection: &str,
        payload_json: &str,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = "readDocument", catch)]
    pub(crate) async fn read_document(collection: &str, id: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = "upsertMergeDocument", catch)]
    pub(crate) async fn upsert_merge_document(
        collection: &str,
        id: &str,
        payload_json: &str,
    ) -> Result<(), JsValue>;
}
