//! Feedback form page: the session gate, the draft store, and the
//! submission controller, wired together Elm-style across `state`,
//! `messages`, `update`, and `view`.

use yew::{Component, Context, Html};

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::FeedbackPage;

use crate::firebase::auth::AuthSubscription;

impl Component for FeedbackPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut page = FeedbackPage::new();
        page.auth = Some(AuthSubscription::subscribe(
            ctx.link().callback(Msg::AuthChanged),
        ));
        page
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
