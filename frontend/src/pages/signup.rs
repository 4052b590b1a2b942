//! Sign-in page: interactive popup sign-in plus the user-profile sync.
//!
//! The auth subscription doubles as the forward gate here: as soon as the
//! provider reports a signed-in identity the page navigates to the
//! feedback form. Profile-sync failures are logged and swallowed so they
//! can never block sign-in.

use common::error::AuthError;
use common::model::identity::Identity;
use gloo_console::error;
use wasm_bindgen_futures::spawn_local;
use yew::{classes, html, Component, Context, Html};
use yew_router::prelude::*;

use crate::app::Route;
use crate::firebase::auth::{self, AuthStatus, AuthSubscription};
use crate::firebase::firestore;

pub enum Msg {
    AuthChanged(Option<Identity>),
    SignIn,
    SignInResolved(Result<Identity, AuthError>),
}

pub struct SignUpPage {
    status: AuthStatus,
    signing_in: bool,
    error: Option<AuthError>,
    _auth: Option<AuthSubscription>,
}

impl Component for SignUpPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let subscription = AuthSubscription::subscribe(ctx.link().callback(Msg::AuthChanged));
        Self {
            status: AuthStatus::Pending,
            signing_in: false,
            error: None,
            _auth: Some(subscription),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::AuthChanged(Some(identity)) => {
                self.status = AuthStatus::Authenticated(identity);
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Feedback);
                }
                true
            }
            Msg::AuthChanged(None) => {
                self.status = AuthStatus::Unauthenticated;
                true
            }
            Msg::SignIn => {
                if self.signing_in {
                    return false;
                }
                self.signing_in = true;
                self.error = None;

                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = auth::sign_in_with_popup().await;
                    if let Ok(identity) = &result {
                        // Never surfaced and never blocks sign-in.
                        if let Err(err) = firestore::sync_user_profile(identity).await {
                            error!("profile sync failed:", err.to_string());
                        }
                    }
                    link.send_message(Msg::SignInResolved(result));
                });
                true
            }
            Msg::SignInResolved(result) => {
                self.signing_in = false;
                self.error = result.err();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if let Some(identity) = self.status.identity() {
            return self.view_signed_in(ctx, identity);
        }
        self.view_sign_in_card(ctx)
    }
}

impl SignUpPage {
    fn view_signed_in(&self, ctx: &Context<Self>, identity: &Identity) -> Html {
        let display_name = identity
            .display_name
            .clone()
            .unwrap_or_default()
            .to_uppercase();
        let go_to_feedback = {
            let navigator = ctx.link().navigator();
            yew::Callback::from(move |_| {
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Feedback);
                }
            })
        };

        html! {
            <div class="page centered">
                <div class="auth-card neo-card">
                    <h2>{"WELCOME BACK!"}</h2>
                    <p class="auth-subtitle">{display_name}</p>
                    <p class="auth-note">{"You are already signed in!"}</p>
                    <button class="neo-button wide" onclick={go_to_feedback}>
                        {"GO TO FEEDBACK"}
                    </button>
                </div>
            </div>
        }
    }

    fn view_sign_in_card(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="page centered">
                <div class="auth-card neo-card">
                    <h2>{"JOIN THE REVOLUTION"}</h2>
                    <p class="auth-subtitle">{"BECOME PART OF THE WEB3 FEEDBACK COMMUNITY"}</p>

                    {
                        if let Some(error) = &self.error {
                            html! { <div class="error-box">{ error.to_string() }</div> }
                        } else {
                            html! {}
                        }
                    }

                    <button
                        class={classes!("neo-button", "wide", self.signing_in.then_some("busy"))}
                        disabled={self.signing_in}
                        onclick={link.callback(|_| Msg::SignIn)}
                    >
                        {
                            if self.signing_in {
                                html! { <>{"SIGNING IN..."}</> }
                            } else {
                                html! { <>{"SIGN IN WITH GOOGLE"}</> }
                            }
                        }
                    </button>

                    <p class="auth-terms">
                        {"By signing up, you agree to our Terms of Service and Privacy Policy"}
                    </p>
                </div>
            </div>
        }
    }
}
