use gloo_timers::callback::Timeout;
use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::debounce::Debouncer;
use crate::dom;

#[function_component(ScrollTopButton)]
pub fn scroll_top_button() -> Html {
    let visible = use_state_eq(|| false);
    let debouncer = use_mut_ref(Debouncer::<Timeout>::new);

    let refresh = {
        let visible = visible.clone();
        move || {
            let offset = dom::scroll_offset().unwrap_or_default();
            visible.set(config::scroll_button_visible(offset));
        }
    };

    use_mount(refresh.clone());

    use_event_with_window("scroll", move |_: Event| {
        let refresh = refresh.clone();
        debouncer
            .borrow_mut()
            .schedule(|| Timeout::new(config::SCROLL_DEBOUNCE_MS, refresh));
    });

    let onclick = Callback::from(|_: MouseEvent| dom::scroll_to_top());

    html! {
        <button
            id="scrollTopBtn"
            class={classes!("scroll-top-btn", (*visible).then(|| "show"))}
            title="Back to top"
            {onclick}
        >
            {"↑"}
        </button>
    }
}
