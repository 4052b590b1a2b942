use yew::prelude::*;

/// A 1-5 star picker. Zero (unrated) is representable in the value but
/// never emitted: clicking always selects a star.
#[derive(Properties, PartialEq)]
pub struct StarRatingProps {
    pub value: u8,
    pub on_select: Callback<u8>,
}

pub struct StarRating;

impl Component for StarRating {
    type Message = ();
    type Properties = StarRatingProps;

    fn create(_ctx: &Context<Self>) -> Self {
        StarRating
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="star-row">
                { for (1..=5u8).map(|star| {
                    let on_select = props.on_select.clone();
                    let filled = star <= props.value;
                    html! {
                        <button
                            type="button"
                            class={classes!("star-btn", filled.then_some("filled"))}
                            onclick={Callback::from(move |_| on_select.emit(star))}
                        >
                            {"★"}
                        </button>
                    }
                })}
            </div>
        }
    }
}
