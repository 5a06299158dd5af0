#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    CloseModal,
    ToggleBilling,
}

impl Shortcut {
    /// Maps a `KeyboardEvent.key` value to a page action. Escape only acts on
    /// an open modal and `t` only while no modal is open.
    pub fn from_key(key: &str, modal_open: bool) -> Option<Self> {
        if key == "Escape" && modal_open {
            return Some(Shortcut::CloseModal);
        }
        if key.eq_ignore_ascii_case("t") && !modal_open {
            return Some(Shortcut::ToggleBilling);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_closes_open_modal() {
        assert_eq!(Shortcut::from_key("Escape", true), Some(Shortcut::CloseModal));
        assert_eq!(Shortcut::from_key("Escape", false), None);
    }

    #[test]
    fn t_toggles_only_without_modal() {
        assert_eq!(Shortcut::from_key("t", false), Some(Shortcut::ToggleBilling));
        assert_eq!(Shortcut::from_key("T", false), Some(Shortcut::ToggleBilling));
        assert_eq!(Shortcut::from_key("t", true), None);
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(Shortcut::from_key("Enter", true), None);
        assert_eq!(Shortcut::from_key("y", false), None);
        assert_eq!(Shortcut::from_key("Tab", false), None);
    }
}
