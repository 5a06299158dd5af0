use std::fmt;
use std::str::FromStr;

use super::error::ParsePeriodError;

/// Billing cadence used to pick which price of a plan is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl BillingPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "monthly",
            BillingPeriod::Yearly => "yearly",
        }
    }

    /// Suffix rendered next to a price, e.g. `$96/year`.
    pub fn label(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "/month",
            BillingPeriod::Yearly => "/year",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            BillingPeriod::Monthly => BillingPeriod::Yearly,
            BillingPeriod::Yearly => BillingPeriod::Monthly,
        }
    }

    pub fn is_yearly(&self) -> bool {
        matches!(self, BillingPeriod::Yearly)
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillingPeriod {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(BillingPeriod::Monthly),
            "yearly" => Ok(BillingPeriod::Yearly),
            _ => Err(ParsePeriodError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_monthly() {
        assert_eq!(BillingPeriod::default(), BillingPeriod::Monthly);
    }

    #[test]
    fn toggled_flips_between_the_two_periods() {
        assert_eq!(BillingPeriod::Monthly.toggled(), BillingPeriod::Yearly);
        assert_eq!(BillingPeriod::Yearly.toggled(), BillingPeriod::Monthly);
    }

    #[test]
    fn labels_match_rendered_suffixes() {
        assert_eq!(BillingPeriod::Monthly.label(), "/month");
        assert_eq!(BillingPeriod::Yearly.label(), "/year");
    }

    #[test]
    fn parses_stored_values_leniently() {
        assert_eq!("yearly".parse::<BillingPeriod>().unwrap(), BillingPeriod::Yearly);
        assert_eq!(" Monthly ".parse::<BillingPeriod>().unwrap(), BillingPeriod::Monthly);
        assert_eq!("YEARLY".parse::<BillingPeriod>().unwrap(), BillingPeriod::Yearly);
    }

    #[test]
    fn rejects_unknown_values() {
        let err = "weekly".parse::<BillingPeriod>().unwrap_err();
        assert_eq!(err.0, "weekly");
        assert!("".parse::<BillingPeriod>().is_err());
    }
}
