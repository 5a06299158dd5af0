use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AnimatedTextProps {
    pub text: String,
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Text that slides out, swaps and slides back in whenever `text` changes.
/// A change arriving before the swap fires replaces the pending one.
#[function_component(AnimatedText)]
pub fn animated_text(props: &AnimatedTextProps) -> Html {
    let shown = use_state(|| props.text.clone());
    let swapping = use_state_eq(|| false);

    {
        let shown = shown.clone();
        let swapping = swapping.clone();
        let delay_ms = props.delay_ms;
        use_effect_with_deps(
            move |text: &String| {
                let pending = if *shown != *text {
                    swapping.set(true);
                    let text = text.clone();
                    Some(Timeout::new(delay_ms, move || {
                        shown.set(text);
                        swapping.set(false);
                    }))
                } else {
                    swapping.set(false);
                    None
                };

                // dropping a Timeout cancels it
                move || drop(pending)
            },
            props.text.clone(),
        );
    }

    html! {
        <span class={classes!(props.class.clone(), "swap-text", (*swapping).then(|| "swapping"))}>
            { (*shown).clone() }
        </span>
    }
}
