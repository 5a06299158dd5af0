use web_sys::{window, Storage};

use super::error::PreferenceError;
use super::period::BillingPeriod;
use crate::config;

/// Where the last chosen billing period is remembered between visits.
///
/// `load` folds every failure (no storage, missing key, unreadable value)
/// into `None`, so callers only ever see "a saved period" or "nothing saved".
pub trait PreferenceStore {
    fn load(&self) -> Option<BillingPeriod>;
    fn save(&mut self, period: BillingPeriod) -> Result<(), PreferenceError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn load(&self) -> Option<BillingPeriod> {
        (**self).load()
    }

    fn save(&mut self, period: BillingPeriod) -> Result<(), PreferenceError> {
        (**self).save(period)
    }
}

/// Browser `localStorage` backed store.
pub struct LocalStoragePreference {
    key: String,
}

impl LocalStoragePreference {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<Storage> {
        window().and_then(|w| w.local_storage().ok()).flatten()
    }

    /// Private browsing modes and sandboxed frames can refuse storage access.
    pub fn is_available() -> bool {
        Self::storage().is_some()
    }
}

impl Default for LocalStoragePreference {
    fn default() -> Self {
        Self::new(config::PREFERENCE_KEY)
    }
}

impl PreferenceStore for LocalStoragePreference {
    fn load(&self) -> Option<BillingPeriod> {
        Self::storage()
            .and_then(|storage| storage.get_item(&self.key).ok())
            .flatten()
            .and_then(|value| value.parse().ok())
    }

    fn save(&mut self, period: BillingPeriod) -> Result<(), PreferenceError> {
        let storage = Self::storage().ok_or(PreferenceError::Unavailable)?;
        storage
            .set_item(&self.key, period.as_str())
            .map_err(|e| PreferenceError::Write(format!("{:?}", e)))
    }
}

/// In-memory store holding the raw persisted string, for hosts without
/// browser storage and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreference {
    raw: Option<String>,
}

impl MemoryPreference {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    #[cfg(test)]
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl PreferenceStore for MemoryPreference {
    fn load(&self) -> Option<BillingPeriod> {
        self.raw.as_deref().and_then(|value| value.parse().ok())
    }

    fn save(&mut self, period: BillingPeriod) -> Result<(), PreferenceError> {
        self.raw = Some(period.as_str().to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_has_no_preference() {
        assert_eq!(MemoryPreference::new().load(), None);
    }

    #[test]
    fn saved_value_is_the_lowercase_period_name() {
        let mut store = MemoryPreference::new();
        store.save(BillingPeriod::Yearly).unwrap();
        assert_eq!(store.raw(), Some("yearly"));
        assert_eq!(store.load(), Some(BillingPeriod::Yearly));
    }

    #[test]
    fn boxed_store_delegates() {
        let mut store: Box<dyn PreferenceStore> = Box::new(MemoryPreference::with_raw("yearly"));
        assert_eq!(store.load(), Some(BillingPeriod::Yearly));
        store.save(BillingPeriod::Monthly).unwrap();
        assert_eq!(store.load(), Some(BillingPeriod::Monthly));
    }

    #[test]
    fn corrupt_value_reads_as_missing() {
        let store = MemoryPreference::with_raw("{not a period}");
        assert_eq!(store.load(), None);
    }
}
