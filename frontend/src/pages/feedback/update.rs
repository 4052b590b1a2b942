//! Update function for the feedback page.
//!
//! Transition rules live on the state in `state.rs`; this module wires
//! them to their side effects: the single directory write per accepted
//! submit, navigation for the session gate, and user notifications.

use common::model::feedback::ExperienceLevel;
use gloo_console::{error, log};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::Route;
use crate::firebase::{auth, firestore};
use crate::helpers::{blocking_notice, show_toast};
use yew_router::prelude::RouterScopeExt;

use super::messages::Msg;
use super::state::{FeedbackPage, SubmitDecision};

pub fn update(page: &mut FeedbackPage, ctx: &Context<FeedbackPage>, msg: Msg) -> bool {
    match msg {
        Msg::AuthChanged(identity) => {
            let signed_out = identity.is_none();
            page.observe_identity(identity);
            if signed_out {
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::SignUp);
                }
            }
            true
        }
        Msg::EditField(field, value) => page.apply_field(field, value),
        Msg::SelectExperience(value) => page.apply_experience(ExperienceLevel::from_value(&value)),
        Msg::SetRating(category, stars) => page.apply_rating(category, stars),
        Msg::Submit => match page.begin_submit() {
            SubmitDecision::NotAuthenticated => {
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::SignUp);
                }
                false
            }
            SubmitDecision::InFlight => false,
            SubmitDecision::MissingRequired => {
                show_toast("Name and email are required.");
                false
            }
            SubmitDecision::Proceed(submission) => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    match firestore::create_feedback(&submission).await {
                        Ok(_) => link.send_message(Msg::SubmitSucceeded),
                        Err(err) => link.send_message(Msg::SubmitFailed(err)),
                    }
                });
                true
            }
        },
        Msg::SubmitSucceeded => {
            log!("feedback submitted");
            page.submit_succeeded();
            true
        }
        Msg::SubmitFailed(err) => {
            error!("feedback write rejected:", err.to_string());
            page.submit_failed();
            blocking_notice("Failed to submit feedback. Please try again.");
            true
        }
        Msg::LogOut => {
            // Detach the gate first so the sign-out notification cannot
            // race the navigation back to the landing page.
            page.auth = None;
            let link = ctx.link().clone();
            spawn_local(async move {
                auth::sign_out().await;
                link.send_message(Msg::LoggedOut);
            });
            false
        }
        Msg::LoggedOut => {
            page.reset_after_sign_out();
            if let Some(navigator) = ctx.link().navigator() {
                navigator.push(&Route::Home);
            }
            true
        }
    }
}
