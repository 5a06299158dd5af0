use log::error;
use serde::Deserialize;

use super::error::CatalogError;
use super::period::BillingPeriod;

const BUNDLED_CATALOG: &str = include_str!("../../assets/plans.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Plan {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub monthly_price: f64,
    pub yearly_price: f64,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
}

impl Plan {
    #[cfg(test)]
    pub fn new(id: impl Into<String>, monthly_price: f64, yearly_price: f64) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            description: String::new(),
            monthly_price,
            yearly_price,
            features: Vec::new(),
            popular: false,
        }
    }

    pub fn price_for(&self, period: BillingPeriod) -> f64 {
        match period {
            BillingPeriod::Monthly => self.monthly_price,
            BillingPeriod::Yearly => self.yearly_price,
        }
    }

    /// Percentage saved by paying yearly instead of twelve monthly payments.
    pub fn yearly_savings_percent(&self) -> Option<u32> {
        if self.monthly_price <= 0.0 {
            return None;
        }
        let full_year = self.monthly_price * 12.0;
        let saved = (1.0 - self.yearly_price / full_year) * 100.0;
        Some(saved.round().max(0.0) as u32)
    }
}

/// Ordered, read-only list of plans shown on the page.
pub trait CatalogProvider {
    fn plans(&self) -> &[Plan];

    fn currency(&self) -> &str {
        "$"
    }
}

impl CatalogProvider for Vec<Plan> {
    fn plans(&self) -> &[Plan] {
        self
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StaticCatalog {
    #[serde(default = "default_currency")]
    currency: String,
    plans: Vec<Plan>,
}

fn default_currency() -> String {
    "$".to_string()
}

impl StaticCatalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Catalog compiled into the binary. A malformed file leaves the page
    /// with no cards rather than no page.
    pub fn bundled() -> Self {
        match Self::from_json(BUNDLED_CATALOG) {
            Ok(catalog) => catalog,
            Err(e) => {
                error!("Failed to load bundled catalog: {}", e);
                Self {
                    currency: default_currency(),
                    plans: Vec::new(),
                }
            }
        }
    }
}

impl CatalogProvider for StaticCatalog {
    fn plans(&self) -> &[Plan] {
        &self.plans
    }

    fn currency(&self) -> &str {
        &self.currency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_for_picks_period_variant() {
        let plan = Plan::new("starter", 10.0, 96.0);
        assert_eq!(plan.price_for(BillingPeriod::Monthly), 10.0);
        assert_eq!(plan.price_for(BillingPeriod::Yearly), 96.0);
    }

    #[test]
    fn yearly_savings_is_rounded_percentage() {
        assert_eq!(Plan::new("starter", 10.0, 96.0).yearly_savings_percent(), Some(20));
        assert_eq!(Plan::new("pro", 29.0, 290.0).yearly_savings_percent(), Some(17));
    }

    #[test]
    fn yearly_savings_never_negative_and_skips_free_plans() {
        assert_eq!(Plan::new("odd", 10.0, 150.0).yearly_savings_percent(), Some(0));
        assert_eq!(Plan::new("free", 0.0, 0.0).yearly_savings_percent(), None);
    }

    #[test]
    fn parses_catalog_json_in_order() {
        let catalog = StaticCatalog::from_json(
            r#"{
                "currency": "€",
                "plans": [
                    {"id": "basic", "monthly_price": 5, "yearly_price": 48},
                    {"id": "team", "name": "Team", "monthly_price": 49, "yearly_price": 470, "popular": true}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(catalog.currency(), "€");
        let ids: Vec<&str> = catalog.plans().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["basic", "team"]);
        assert!(catalog.plans()[1].popular);
        assert!(catalog.plans()[0].features.is_empty());
    }

    #[test]
    fn currency_defaults_to_dollar() {
        let catalog = StaticCatalog::from_json(r#"{"plans": []}"#).unwrap();
        assert_eq!(catalog.currency(), "$");
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        let err = StaticCatalog::from_json(r#"{"plans": [{"id": "x"}]}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn bundled_catalog_parses() {
        let catalog = StaticCatalog::from_json(BUNDLED_CATALOG).unwrap();
        assert!(!catalog.plans().is_empty());
        assert_eq!(catalog.plans().iter().filter(|p| p.popular).count(), 1);
    }
}
