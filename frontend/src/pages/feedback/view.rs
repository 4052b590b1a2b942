//! View rendering for the feedback page.
//!
//! The gate status picks between the loading screen, nothing (while the
//! redirect to sign-in is in flight), the form, and the success card. The
//! form itself is static presentation; every input funnels into one of
//! the single-key update messages.

use common::model::feedback::{ExperienceLevel, RatingCategory, TextField};
use common::model::identity::Identity;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::star_rating::StarRating;
use crate::firebase::auth::AuthStatus;

use super::messages::Msg;
use super::state::{FeedbackPage, SubmitPhase};

const RATING_BLOCKS: [(RatingCategory, &str, &str); 5] = [
    (
        RatingCategory::ContentQuality,
        "CONTENT QUALITY",
        "HOW VALUABLE AND RELEVANT WAS THE CONTENT?",
    ),
    (
        RatingCategory::SpeakerDelivery,
        "SPEAKER DELIVERY",
        "HOW ENGAGING AND CLEAR WAS THE PRESENTATION?",
    ),
    (
        RatingCategory::TechnicalDepth,
        "TECHNICAL DEPTH",
        "WAS THE TECHNICAL LEVEL RIGHT FOR YOU?",
    ),
    (
        RatingCategory::Engagement,
        "AUDIENCE ENGAGEMENT",
        "HOW WELL DID THE SPEAKER CONNECT WITH THE CROWD?",
    ),
    (
        RatingCategory::OverallExperience,
        "OVERALL EXPERIENCE",
        "YOUR OVERALL RATING OF THE EVENT",
    ),
];

pub fn view(page: &FeedbackPage, ctx: &Context<FeedbackPage>) -> Html {
    match (&page.status, page.phase) {
        (AuthStatus::Pending, _) => build_loading(),
        (AuthStatus::Unauthenticated, _) => html! {},
        (AuthStatus::Authenticated(_), SubmitPhase::Submitted) => build_success(ctx.link()),
        (AuthStatus::Authenticated(identity), _) => build_form(page, identity, ctx.link()),
    }
}

fn build_loading() -> Html {
    html! {
        <div class="page centered">
            <div class="loading">
                <div class="spinner"></div>
                <p>{"LOADING..."}</p>
            </div>
        </div>
    }
}

fn build_success(link: &Scope<FeedbackPage>) -> Html {
    html! {
        <div class="page centered">
            <div class="success-card neo-card">
                <div class="success-badge">{"✓"}</div>
                <h2>{"FEEDBACK RECEIVED!"}</h2>
                <p class="success-copy">
                    {"YOUR VOICE HAS BEEN HEARD. TOGETHER WE'RE BUILDING BETTER WEB3 EXPERIENCES."}
                </p>
                <button class="neo-button" onclick={link.callback(|_| Msg::LogOut)}>
                    {"LOG OUT"}
                </button>
            </div>
        </div>
    }
}

fn build_form(page: &FeedbackPage, identity: &Identity, link: &Scope<FeedbackPage>) -> Html {
    let onsubmit = link.callback(|event: SubmitEvent| {
        event.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="page">
            <div class="form-card neo-card">
                <div class="form-header">
                    <div>
                        <h1>{"FEEDBACK MATTERS"}</h1>
                        <p class="form-tagline">
                            {"YOUR INPUT SHAPES THE FUTURE OF WEB3 EDUCATION. EVERY OPINION COUNTS. MAKE IT COUNT."}
                        </p>
                    </div>
                    <div class="signed-in-as">
                        <p class="signed-in-label">{"SIGNED IN AS"}</p>
                        <p class="signed-in-name">
                            { identity.display_name.clone().unwrap_or_default() }
                        </p>
                    </div>
                </div>

                <form {onsubmit}>
                    { build_contact_section(page, link) }
                    { build_experience_section(page, link) }
                    { build_event_section(page, link) }
                    { build_ratings_section(page, link) }
                    { build_comments_section(page, link) }
                    { build_submit_button(page) }
                </form>
            </div>
        </div>
    }
}

fn build_contact_section(page: &FeedbackPage, link: &Scope<FeedbackPage>) -> Html {
    html! {
        <div class="form-section">
            <h3>{"CONTACT INFO"}</h3>
            <div class="field-grid">
                { text_input(link, "FULL NAME *", "YOUR FULL NAME", &page.draft.name, TextField::Name, "text", true) }
                { text_input(link, "EMAIL ADDRESS *", "YOUR@EMAIL.COM", &page.draft.email, TextField::Email, "email", true) }
            </div>
            <div class="field-grid">
                { text_input(link, "COMPANY/ORGANIZATION", "YOUR COMPANY", &page.draft.company, TextField::Company, "text", false) }
                { text_input(link, "ROLE/POSITION", "YOUR ROLE", &page.draft.role, TextField::Role, "text", false) }
            </div>
        </div>
    }
}

fn build_experience_section(page: &FeedbackPage, link: &Scope<FeedbackPage>) -> Html {
    let onchange = link.callback(|event: Event| {
        let select: HtmlSelectElement = event.target_unchecked_into();
        Msg::SelectExperience(select.value())
    });

    html! {
        <div class="form-section">
            <h3>{"YOUR WEB3 JOURNEY"}</h3>
            <div class="field">
                <label>{"YEARS OF EXPERIENCE IN WEB3"}</label>
                <select class="neo-input" {onchange}>
                    <option value="" selected={page.draft.experience_level.is_none()}>
                        {"SELECT YOUR EXPERIENCE LEVEL"}
                    </option>
                    { for ExperienceLevel::ALL.into_iter().map(|level| html! {
                        <option
                            value={level.as_str()}
                            selected={page.draft.experience_level == Some(level)}
                        >
                            { level.label() }
                        </option>
                    })}
                </select>
            </div>
        </div>
    }
}

fn build_event_section(page: &FeedbackPage, link: &Scope<FeedbackPage>) -> Html {
    html! {
        <div class="form-section">
            <h3>{"EVENT DETAILS"}</h3>
            <div class="field-grid">
                { text_input(link, "EVENT VENUE", "E.G., WEB3 SUMMIT MIAMI", &page.draft.event_venue, TextField::EventVenue, "text", false) }
                { text_input(link, "EVENT DATE", "", &page.draft.event_date, TextField::EventDate, "date", false) }
            </div>
        </div>
    }
}

fn build_ratings_section(page: &FeedbackPage, link: &Scope<FeedbackPage>) -> Html {
    html! {
        <div class="form-section">
            <h3>{"RATE THE EXPERIENCE"}</h3>
            { for RATING_BLOCKS.iter().map(|(category, title, blurb)| {
                let category = *category;
                let on_select = link.callback(move |stars: u8| Msg::SetRating(category, stars));
                html! {
                    <div class="rating-block neo-card">
                        <label>{*title}</label>
                        <p class="rating-blurb">{*blurb}</p>
                        <StarRating value={page.draft.ratings.get(category)} {on_select} />
                    </div>
                }
            })}
        </div>
    }
}

fn build_comments_section(page: &FeedbackPage, link: &Scope<FeedbackPage>) -> Html {
    html! {
        <div class="form-section">
            <h3>{"QUESTIONS & FEEDBACK"}</h3>
            { text_area(link, "QUESTIONS FOR THE SPEAKER", "GOT QUESTIONS? FIRE AWAY!", &page.draft.questions, TextField::Questions) }
            { text_area(link, "HOW CAN WE LEVEL UP?", "WHAT WOULD MAKE FUTURE PRESENTATIONS EVEN BETTER?", &page.draft.improvements, TextField::Improvements) }
        </div>
    }
}

fn build_submit_button(page: &FeedbackPage) -> Html {
    let submitting = page.phase == SubmitPhase::Submitting;
    html! {
        <div class="form-section">
            <button
                type="submit"
                class={classes!("neo-button", "wide", submitting.then_some("busy"))}
                disabled={submitting}
            >
                {
                    if submitting {
                        html! { <><span class="spinner small"></span>{"SUBMITTING..."}</> }
                    } else {
                        html! { {"SUBMIT FEEDBACK NOW"} }
                    }
                }
            </button>
        </div>
    }
}

fn text_input(
    link: &Scope<FeedbackPage>,
    label: &str,
    placeholder: &str,
    value: &str,
    field: TextField,
    input_type: &'static str,
    required: bool,
) -> Html {
    let oninput = link.callback(move |event: InputEvent| {
        let input: HtmlInputElement = event.target_unchecked_into();
        Msg::EditField(field, input.value())
    });

    html! {
        <div class="field">
            <label>{label.to_string()}</label>
            <input
                type={input_type}
                class="neo-input"
                value={value.to_string()}
                placeholder={placeholder.to_string()}
                {oninput}
                required={required}
            />
        </div>
    }
}

fn text_area(
    link: &Scope<FeedbackPage>,
    label: &str,
    placeholder: &str,
    value: &str,
    field: TextField,
) -> Html {
    let oninput = link.callback(move |event: InputEvent| {
        let input: HtmlTextAreaElement = event.target_unchecked_into();
        Msg::EditField(field, input.value())
    });

    html! {
        <div class="field">
            <label>{label.to_string()}</label>
            <textarea
                class="neo-input tall"
                value={value.to_string()}
                placeholder={placeholder.to_string()}
                {oninput}
            />
        </div>
    }
}
