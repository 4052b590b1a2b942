use yew::{html, Component, Context, Html};
use yew_router::prelude::*;

use crate::pages::feedback::FeedbackPage;
use crate::pages::landing::LandingPage;
use crate::pages::signup::SignUpPage;

/// The three reachable routes. There are no query parameters and no
/// deep-linkable sub-states; the host serves index.html for unknown paths
/// so each route survives a full page load.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/signup")]
    SignUp,
    #[at("/feedback")]
    Feedback,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <LandingPage /> },
        Route::SignUp => html! { <SignUpPage /> },
        Route::Feedback => html! { <FeedbackPage /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        }
    }
}
