use log::{debug, warn};

use super::catalog::CatalogProvider;
use super::error::PricingError;
use super::period::BillingPeriod;
use super::preference::PreferenceStore;

#[derive(Debug, Clone, PartialEq)]
pub struct PlanPrice {
    pub plan_id: String,
    pub amount: f64,
}

/// Everything the page needs to render the price grid for one period.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    pub period: BillingPeriod,
    pub prices: Vec<PlanPrice>,
    pub label: &'static str,
    pub discount_visible: bool,
    pub max_yearly_savings: Option<u32>,
}

impl DisplayState {
    pub fn price_for(&self, plan_id: &str) -> Option<f64> {
        self.prices
            .iter()
            .find(|price| price.plan_id == plan_id)
            .map(|price| price.amount)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSelection {
    pub plan_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationResult {
    pub plan_id: String,
    pub period: BillingPeriod,
}

impl ConfirmationResult {
    pub fn message(&self) -> String {
        format!(
            "Thank you! You've selected the {} plan ({} billing).",
            self.plan_id, self.period
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerState {
    pub period: BillingPeriod,
    pub pending_selection: Option<PendingSelection>,
}

/// Billing period and pending plan selection for the pricing page.
///
/// Plan ids passed to `select_plan` are taken as-is; checking them against
/// the catalog is left to whoever renders the buttons.
pub struct PricingController<C, S> {
    catalog: C,
    store: S,
    period: BillingPeriod,
    pending: Option<PendingSelection>,
}

impl<C: CatalogProvider, S: PreferenceStore> PricingController<C, S> {
    pub fn new(catalog: C, store: S) -> Self {
        let period = store.load().unwrap_or_default();
        debug!("Pricing controller starting with {} billing", period);
        Self {
            catalog,
            store,
            period,
            pending: None,
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn set_billing_period(&mut self, period: BillingPeriod) -> DisplayState {
        self.period = period;
        if let Err(e) = self.store.save(period) {
            warn!("Could not persist billing period {}: {}", period, e);
        }
        self.display_state()
    }

    pub fn toggle_billing_period(&mut self) -> DisplayState {
        self.set_billing_period(self.period.toggled())
    }

    pub fn select_plan(&mut self, plan_id: impl Into<String>) -> PendingSelection {
        let selection = PendingSelection {
            plan_id: plan_id.into(),
        };
        self.pending = Some(selection.clone());
        selection
    }

    pub fn confirm_selection(&mut self) -> Result<ConfirmationResult, PricingError> {
        let selection = self.pending.take().ok_or(PricingError::NoPendingSelection)?;
        Ok(ConfirmationResult {
            plan_id: selection.plan_id,
            period: self.period,
        })
    }

    pub fn cancel_selection(&mut self) {
        self.pending = None;
    }

    pub fn current_state(&self) -> ControllerState {
        ControllerState {
            period: self.period,
            pending_selection: self.pending.clone(),
        }
    }

    pub fn display_state(&self) -> DisplayState {
        let plans = self.catalog.plans();
        DisplayState {
            period: self.period,
            prices: plans
                .iter()
                .map(|plan| PlanPrice {
                    plan_id: plan.id.clone(),
                    amount: plan.price_for(self.period),
                })
                .collect(),
            label: self.period.label(),
            discount_visible: self.period.is_yearly(),
            max_yearly_savings: plans.iter().filter_map(|p| p.yearly_savings_percent()).max(),
        }
    }
}
