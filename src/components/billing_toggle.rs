use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::pricing::period::BillingPeriod;

#[derive(Properties, PartialEq)]
pub struct BillingToggleProps {
    pub period: BillingPeriod,
    pub discount_visible: bool,
    #[prop_or_default]
    pub savings: Option<u32>,
    pub on_change: Callback<BillingPeriod>,
}

#[function_component(BillingToggle)]
pub fn billing_toggle(props: &BillingToggleProps) -> Html {
    let yearly = props.period.is_yearly();

    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let period = if input.checked() {
                BillingPeriod::Yearly
            } else {
                BillingPeriod::Monthly
            };
            on_change.emit(period);
        })
    };

    let pick = |period: BillingPeriod| {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(period))
    };

    let badge_text = match props.savings {
        Some(percent) if percent > 0 => format!("Save up to {}%", percent),
        _ => "Save with yearly".to_string(),
    };

    html! {
        <div class="pricing-toggle">
            <span class={classes!("toggle-text", (!yearly).then(|| "active"))} onclick={pick(BillingPeriod::Monthly)}>
                {"Monthly"}
            </span>
            <label class="switch">
                <input type="checkbox" id="pricing-toggle" checked={yearly} {onchange} />
                <span class="slider"></span>
            </label>
            <span class={classes!("toggle-text", yearly.then(|| "active"))} onclick={pick(BillingPeriod::Yearly)}>
                {"Yearly"}
            </span>
            <span id="discount-badge" class={classes!("discount-badge", props.discount_visible.then(|| "show"))}>
                {badge_text}
            </span>
        </div>
    }
}
