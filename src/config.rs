use log::Level;

/// localStorage key holding the last chosen billing period.
pub const PREFERENCE_KEY: &str = "pricingToggle";

/// Vertical scroll offset (px) past which the scroll-to-top button shows.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;
pub const SCROLL_DEBOUNCE_MS: u32 = 10;

pub const PRICE_SWAP_DELAY_MS: u32 = 200;
pub const PRICE_STAGGER_MS: u32 = 50;

pub const REVEAL_THRESHOLD: f64 = 0.1;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Delay before the card at `index` swaps its price text.
pub fn swap_delay_ms(index: usize) -> u32 {
    PRICE_SWAP_DELAY_MS + index as u32 * PRICE_STAGGER_MS
}

pub fn scroll_button_visible(offset: f64) -> bool {
    offset > SCROLL_TOP_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_delay_is_staggered_per_card() {
        assert_eq!(swap_delay_ms(0), 200);
        assert_eq!(swap_delay_ms(1), 250);
        assert_eq!(swap_delay_ms(4), 400);
    }

    #[test]
    fn scroll_button_shows_strictly_past_threshold() {
        assert!(!scroll_button_visible(0.0));
        assert!(!scroll_button_visible(300.0));
        assert!(scroll_button_visible(300.5));
    }
}
