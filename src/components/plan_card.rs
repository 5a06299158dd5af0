use yew::prelude::*;

use crate::components::animated_text::AnimatedText;
use crate::components::reveal::Reveal;
use crate::config;
use crate::pricing::catalog::Plan;

#[derive(Properties, PartialEq)]
pub struct PlanCardProps {
    pub plan: Plan,
    pub currency: String,
    pub amount: f64,
    pub label: &'static str,
    pub index: usize,
    pub on_select: Callback<String>,
}

/// Whole amounts render without decimals, e.g. `$96` but `$9.50`.
pub fn format_amount(currency: &str, amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}{}", currency, amount as i64)
    } else {
        format!("{}{:.2}", currency, amount)
    }
}

#[function_component(PlanCard)]
pub fn plan_card(props: &PlanCardProps) -> Html {
    let plan = &props.plan;
    let delay_ms = config::swap_delay_ms(props.index);

    let onclick = {
        let on_select = props.on_select.clone();
        let plan_id = plan.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_select.emit(plan_id.clone());
        })
    };

    html! {
        <Reveal
            class={classes!("pricing-card", plan.popular.then(|| "popular"))}
            delay_ms={props.index as u32 * 100}
        >
            {
                if plan.popular {
                    html! { <div class="popular-tag">{"Most Popular"}</div> }
                } else {
                    html! {}
                }
            }
            <div class="card-header">
                <h3>{plan.name.clone()}</h3>
                <p class="plan-description">{plan.description.clone()}</p>
                <div class="price-row">
                    <AnimatedText class={classes!("price")} text={format_amount(&props.currency, props.amount)} delay_ms={delay_ms} />
                    <AnimatedText class={classes!("period")} text={props.label.to_string()} delay_ms={delay_ms} />
                </div>
            </div>
            <ul>
                { for plan.features.iter().map(|feature| html! { <li>{feature.clone()}</li> }) }
            </ul>
            <button class="select-btn" data-plan={plan.id.clone()} {onclick}>
                <b>{"Choose "}{plan.name.clone()}</b>
            </button>
        </Reveal>
    }
}

#[cfg(test)]
mod tests {
    use super::format_amount;

    #[test]
    fn whole_amounts_have_no_decimals() {
        assert_eq!(format_amount("$", 96.0), "$96");
        assert_eq!(format_amount("€", 0.0), "€0");
    }

    #[test]
    fn fractional_amounts_use_two_decimals() {
        assert_eq!(format_amount("$", 9.5), "$9.50");
        assert_eq!(format_amount("$", 23.166), "$23.17");
    }
}
