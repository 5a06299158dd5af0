use log::{debug, info, warn};
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::billing_toggle::BillingToggle;
use crate::components::confirm_modal::ConfirmModal;
use crate::components::plan_card::PlanCard;
use crate::dom;
use crate::pricing::catalog::{CatalogProvider, StaticCatalog};
use crate::pricing::controller::{PendingSelection, PricingController};
use crate::pricing::period::BillingPeriod;
use crate::pricing::preference::{LocalStoragePreference, MemoryPreference, PreferenceStore};
use crate::pricing::shortcuts::Shortcut;

type PageController = PricingController<StaticCatalog, Box<dyn PreferenceStore>>;

fn preference_store() -> Box<dyn PreferenceStore> {
    if LocalStoragePreference::is_available() {
        Box::new(LocalStoragePreference::default())
    } else {
        warn!("localStorage unavailable, billing period will not be remembered");
        Box::new(MemoryPreference::new())
    }
}

#[function_component(PricingPage)]
pub fn pricing_page() -> Html {
    let controller = use_mut_ref(|| PageController::new(StaticCatalog::bundled(), preference_store()));
    let display = use_state(|| controller.borrow().display_state());
    let pending = use_state(|| None::<PendingSelection>);

    let on_period_change = {
        let controller = controller.clone();
        let display = display.clone();
        Callback::from(move |period: BillingPeriod| {
            let state = controller.borrow_mut().set_billing_period(period);
            info!("Billing period set to {}", state.period);
            display.set(state);
        })
    };

    let on_toggle = {
        let controller = controller.clone();
        let display = display.clone();
        Callback::from(move |_: ()| {
            let state = controller.borrow_mut().toggle_billing_period();
            info!("Billing period toggled to {}", state.period);
            display.set(state);
        })
    };

    let on_select = {
        let controller = controller.clone();
        let pending = pending.clone();
        Callback::from(move |plan_id: String| {
            let selection = controller.borrow_mut().select_plan(plan_id);
            debug!("Plan {} pending confirmation", selection.plan_id);
            pending.set(Some(selection));
        })
    };

    let on_cancel = {
        let controller = controller.clone();
        let pending = pending.clone();
        Callback::from(move |_: ()| {
            controller.borrow_mut().cancel_selection();
            pending.set(None);
        })
    };

    let on_confirm = {
        let controller = controller.clone();
        let pending = pending.clone();
        Callback::from(move |_: ()| {
            let result = controller.borrow_mut().confirm_selection();
            pending.set(None);
            match result {
                Ok(confirmation) => {
                    info!("Confirmed {} plan ({})", confirmation.plan_id, confirmation.period);
                    dom::alert(&confirmation.message());
                }
                Err(e) => warn!("Ignoring confirm: {}", e),
            }
        })
    };

    {
        let controller = controller.clone();
        let on_cancel = on_cancel.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            let modal_open = controller.borrow().current_state().pending_selection.is_some();
            match Shortcut::from_key(&e.key(), modal_open) {
                Some(Shortcut::CloseModal) => on_cancel.emit(()),
                Some(Shortcut::ToggleBilling) => on_toggle.emit(()),
                None => {}
            }
        });
    }

    let modal_open = pending.is_some();
    use_effect_with_deps(
        |open: &bool| {
            dom::set_scroll_locked(*open);
            || dom::set_scroll_locked(false)
        },
        modal_open,
    );

    let cards = {
        let controller = controller.borrow();
        let catalog = controller.catalog();
        let currency = catalog.currency().to_string();
        let cards: Html = catalog
            .plans()
            .iter()
            .enumerate()
            .map(|(index, plan)| {
                html! {
                    <PlanCard
                        key={plan.id.clone()}
                        plan={plan.clone()}
                        currency={currency.clone()}
                        amount={display.price_for(&plan.id).unwrap_or_default()}
                        label={display.label}
                        index={index}
                        on_select={on_select.clone()}
                    />
                }
            })
            .collect();
        cards
    };

    html! {
        <div class="pricing-container">
            <div class="pricing-header">
                <h1>{"Simple, transparent pricing"}</h1>
                <p>{"Pick the plan that fits. Switch or cancel anytime."}</p>
            </div>

            <BillingToggle
                period={display.period}
                discount_visible={display.discount_visible}
                savings={display.max_yearly_savings}
                on_change={on_period_change}
            />

            <div class="pricing-grid">
                { cards }
            </div>

            <p class="shortcut-hint">{"Tip: press T to switch billing period."}</p>

            <ConfirmModal
                plan_id={pending.as_ref().map(|selection| selection.plan_id.clone())}
                on_confirm={on_confirm}
                on_cancel={on_cancel}
            />

            <style>
                {r#"
                .pricing-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem 4rem;
                    color: #e0e0e0;
                }

                .pricing-header {
                    text-align: center;
                    margin-bottom: 2.5rem;
                }

                .pricing-header h1 {
                    font-size: 2.8rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    margin-bottom: 0.75rem;
                }

                .pricing-toggle {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 3rem;
                }

                .toggle-text {
                    cursor: pointer;
                    color: #888;
                    transition: color 0.3s ease;
                }

                .toggle-text.active {
                    color: #fff;
                    font-weight: 600;
                }

                .switch {
                    position: relative;
                    width: 56px;
                    height: 30px;
                }

                .switch input {
                    opacity: 0;
                    width: 0;
                    height: 0;
                }

                .slider {
                    position: absolute;
                    inset: 0;
                    cursor: pointer;
                    background: rgba(30, 144, 255, 0.3);
                    border-radius: 30px;
                    transition: background 0.3s ease;
                }

                .slider::before {
                    content: "";
                    position: absolute;
                    width: 22px;
                    height: 22px;
                    left: 4px;
                    top: 4px;
                    background: white;
                    border-radius: 50%;
                    transition: transform 0.3s ease;
                }

                .switch input:checked + .slider {
                    background: linear-gradient(45deg, #1E90FF, #4169E1);
                }

                .switch input:checked + .slider::before {
                    transform: translateX(26px);
                }

                .discount-badge {
                    background: linear-gradient(45deg, #00FFFF, #00CED1);
                    color: #111;
                    padding: 0.3rem 0.8rem;
                    border-radius: 20px;
                    font-size: 0.85rem;
                    opacity: 0;
                    transform: scale(0.8);
                    transition: all 0.3s ease;
                }

                .discount-badge.show {
                    opacity: 1;
                    transform: scale(1);
                }

                .pricing-grid {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 2rem;
                    justify-content: center;
                }

                .pricing-card {
                    flex: 1;
                    min-width: 260px;
                    max-width: 360px;
                    background: rgba(30, 30, 30, 0.8);
                    border: 1px solid rgba(30, 144, 255, 0.15);
                    border-radius: 24px;
                    padding: 2rem;
                    position: relative;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .pricing-card:not(.popular):hover {
                    transform: translateY(-10px) scale(1.02);
                    box-shadow: 0 8px 32px rgba(30, 144, 255, 0.15);
                }

                .pricing-card.popular {
                    background: rgba(30, 144, 255, 0.15);
                    border-color: rgba(30, 144, 255, 0.4);
                }

                .popular-tag {
                    position: absolute;
                    top: -15px;
                    right: 20px;
                    background: linear-gradient(45deg, #1E90FF, #4169E1);
                    color: white;
                    padding: 0.4rem 1rem;
                    border-radius: 20px;
                    font-size: 0.85rem;
                }

                .reveal {
                    animation: cardIn 0.6s ease-out both;
                    animation-play-state: paused;
                }

                .reveal.visible {
                    animation-play-state: running;
                }

                @keyframes cardIn {
                    from { opacity: 0; transform: translateY(30px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .price-row {
                    margin: 1.5rem 0;
                }

                .price-row .price {
                    font-size: 2.6rem;
                    font-weight: 700;
                    color: #fff;
                }

                .price-row .period {
                    color: #999;
                    margin-left: 0.25rem;
                }

                .swap-text {
                    display: inline-block;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }

                .swap-text.swapping {
                    transform: translateY(-15px) scale(0.8);
                    opacity: 0;
                }

                .pricing-card ul {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2rem;
                }

                .pricing-card li {
                    padding: 0.4rem 0;
                }

                .select-btn {
                    width: 100%;
                    background: linear-gradient(45deg, #1E90FF, #4169E1);
                    border: none;
                    color: white;
                    padding: 0.9rem 1.5rem;
                    border-radius: 8px;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .select-btn:hover {
                    transform: translateY(-3px);
                    box-shadow: 0 4px 15px rgba(30, 144, 255, 0.4);
                }

                .select-btn:active {
                    transform: translateY(-1px);
                }

                .shortcut-hint {
                    text-align: center;
                    color: #666;
                    margin-top: 2rem;
                    font-size: 0.9rem;
                }

                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.7);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    opacity: 0;
                    visibility: hidden;
                    transition: opacity 0.3s ease, visibility 0.3s ease;
                    z-index: 100;
                }

                .modal-overlay.show {
                    opacity: 1;
                    visibility: visible;
                }

                .modal {
                    position: relative;
                    background: #1a1a1a;
                    border: 1px solid rgba(30, 144, 255, 0.3);
                    border-radius: 16px;
                    padding: 2rem;
                    max-width: 420px;
                    width: 90%;
                    transform: translateY(20px);
                    transition: transform 0.3s ease;
                }

                .modal-overlay.show .modal {
                    transform: translateY(0);
                }

                .modal-close {
                    position: absolute;
                    top: 0.75rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: #999;
                    font-size: 1.5rem;
                    cursor: pointer;
                }

                .modal-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: flex-end;
                    margin-top: 1.5rem;
                }

                .modal-cancel, .modal-confirm {
                    padding: 0.7rem 1.4rem;
                    border-radius: 8px;
                    cursor: pointer;
                    border: 1px solid rgba(30, 144, 255, 0.4);
                }

                .modal-cancel {
                    background: transparent;
                    color: #e0e0e0;
                }

                .modal-confirm {
                    background: linear-gradient(45deg, #1E90FF, #4169E1);
                    color: white;
                    border: none;
                }

                @media (max-width: 768px) {
                    .pricing-header h1 {
                        font-size: 2rem;
                    }
                    .pricing-grid {
                        flex-direction: column;
                        align-items: center;
                    }
                }
                "#}
            </style>
        </div>
    }
}
