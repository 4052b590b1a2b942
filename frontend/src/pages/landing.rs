//! Static marketing page. No state; everything interactive is a link to
//! the feedback form.

use yew::{html, Component, Context, Html};
use yew_router::prelude::Link;

use crate::app::Route;

pub struct LandingPage;

impl Component for LandingPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        LandingPage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="page">
                <header class="site-header">
                    <div class="brand">
                        <div class="brand-mark neo-card">{"✉"}</div>
                        <span class="brand-name">{"FEEDBACK MATTERS"}</span>
                    </div>
                </header>

                <section class="hero">
                    <div class="hero-title neo-card">
                        <h1>
                            {"SHAPE THE"}
                            <br />
                            <span class="hero-highlight">{"WEB3 FUTURE"}</span>
                        </h1>
                    </div>
                    <p class="hero-copy">
                        {"YOUR FEEDBACK POWERS BETTER WEB3 EDUCATION."}
                        <br />
                        {"SPEAK UP. MAKE AN IMPACT. CHANGE THE GAME."}
                    </p>
                    <Link<Route> to={Route::Feedback}>
                        <button class="neo-button cta-button">{"SUBMIT FEEDBACK NOW"}</button>
                    </Link<Route>>
                </section>

                <section class="features">
                    <h2>{"WHY YOUR VOICE MATTERS"}</h2>
                    <div class="feature-grid">
                        <div class="feature-card neo-card accent">
                            <h3>{"LEVEL UP CONTENT"}</h3>
                            <p>{"HELP CRAFT WEB3 PRESENTATIONS THAT HIT DIFFERENT AND ACTUALLY MATTER"}</p>
                        </div>
                        <div class="feature-card neo-card secondary">
                            <h3>{"BOOST ENGAGEMENT"}</h3>
                            <p>{"SHAPE INTERACTIVE EXPERIENCES THAT KEEP AUDIENCES LEARNING"}</p>
                        </div>
                        <div class="feature-card neo-card cream">
                            <h3>{"CUSTOM CONTENT"}</h3>
                            <p>{"GET PRESENTATIONS TAILORED TO YOUR LEVEL AND INTERESTS IN THE WEB3 SPACE"}</p>
                        </div>
                    </div>
                </section>

                <section class="cta-band">
                    <h2>{"READY TO MAKE WAVES?"}</h2>
                    <p>{"2 MINUTES - LET'S GO."}</p>
                    <Link<Route> to={Route::Feedback}>
                        <button class="neo-button cta-button dark">{"SUBMIT FEEDBACK NOW"}</button>
                    </Link<Route>>
                </section>

                <footer class="site-footer">
                    <p>{"© 2025 FEEDBACK MATTERS. BUILT FOR THE WEB3 REVOLUTION."}</p>
                </footer>
            </div>
        }
    }
}
