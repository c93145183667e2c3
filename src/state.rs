//! Inventory View State
//!
//! Everything the page renders lives in one [`InventoryState`]. Only the
//! controller mutates it, through the transitions below; none of them talk
//! to the backend.

use crate::models::{Draft, DraftField, Item};

/// Creation modal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// User-visible banner message
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    /// Identifies this notice so a stale dismiss timer can't clear a newer one
    pub seq: u32,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryState {
    /// Server's collection as of the last successful fetch
    pub items: Vec<Item>,
    pub draft: Draft,
    pub form: FormState,
    pub notice: Option<Notice>,
    notice_seq: u32,
}

/// Coerce input text to a number the way a browser's `Number(value)` does:
/// blank is 0, junk is NaN.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

impl InventoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_form_open(&self) -> bool {
        self.form == FormState::Open
    }

    /// Replace the list wholesale with a fresh server response
    pub fn replace_items(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    /// Update exactly one draft field from raw input text
    pub fn set_field(&mut self, field: DraftField, raw: &str) {
        match field {
            DraftField::Name => self.draft.name = raw.to_string(),
            DraftField::Price => self.draft.price = coerce_number(raw),
            DraftField::Quantity => self.draft.quantity = coerce_number(raw),
        }
    }

    pub fn open_form(&mut self) {
        self.form = FormState::Open;
    }

    /// Close the modal and throw the draft away
    pub fn cancel_form(&mut self) {
        self.draft = Draft::default();
        self.form = FormState::Closed;
    }

    /// A create request went through
    pub fn finish_create(&mut self) {
        self.draft = Draft::default();
        self.form = FormState::Closed;
    }

    /// Show a banner, replacing any current one. Returns its seq.
    pub fn notify(&mut self, kind: NoticeKind, text: impl Into<String>) -> u32 {
        self.notice_seq = self.notice_seq.wrapping_add(1);
        self.notice = Some(Notice {
            seq: self.notice_seq,
            kind,
            text: text.into(),
        });
        self.notice_seq
    }

    /// Clear the banner if it is still the one identified by `seq`
    pub fn dismiss_notice(&mut self, seq: u32) {
        if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
            self.notice = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, name: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
            price: 1.5,
            quantity: 2.0,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = InventoryState::new();
        assert!(state.items.is_empty());
        assert_eq!(state.draft, Draft::default());
        assert_eq!(state.form, FormState::Closed);
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number("12"), 12.0);
        assert_eq!(coerce_number(" 9.99 "), 9.99);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("   "), 0.0);
        assert_eq!(coerce_number("-3"), -3.0);
        assert!(coerce_number("abc").is_nan());
    }

    #[test]
    fn test_price_change_touches_only_price() {
        let mut state = InventoryState::new();
        state.set_field(DraftField::Name, "Widget");
        state.set_field(DraftField::Quantity, "3");

        state.set_field(DraftField::Price, "12");

        assert_eq!(state.draft.price, 12.0);
        assert_eq!(state.draft.name, "Widget");
        assert_eq!(state.draft.quantity, 3.0);
    }

    #[test]
    fn test_name_kept_verbatim() {
        let mut state = InventoryState::new();
        state.set_field(DraftField::Name, "  12 ");
        assert_eq!(state.draft.name, "  12 ");
    }

    #[test]
    fn test_replace_items_keeps_server_order() {
        let mut state = InventoryState::new();
        state.replace_items(vec![make_item(1, "a")]);
        state.replace_items(vec![make_item(3, "c"), make_item(2, "b")]);
        let ids: Vec<u32> = state.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn test_modal_open_and_cancel() {
        let mut state = InventoryState::new();
        state.open_form();
        assert!(state.is_form_open());
        // opening twice stays open
        state.open_form();
        assert_eq!(state.form, FormState::Open);

        state.set_field(DraftField::Name, "Half typed");
        state.cancel_form();
        assert_eq!(state.form, FormState::Closed);
        assert_eq!(state.draft, Draft::default());
    }

    #[test]
    fn test_finish_create_resets() {
        let mut state = InventoryState::new();
        state.open_form();
        state.set_field(DraftField::Name, "Widget");
        state.set_field(DraftField::Price, "9.99");
        state.finish_create();
        assert!(!state.is_form_open());
        assert_eq!(state.draft, Draft { name: String::new(), price: 0.0, quantity: 0.0 });
    }

    #[test]
    fn test_stale_dismiss_keeps_newer_notice() {
        let mut state = InventoryState::new();
        let first = state.notify(NoticeKind::Error, "first");
        let second = state.notify(NoticeKind::Success, "second");
        assert_ne!(first, second);

        state.dismiss_notice(first);
        assert_eq!(state.notice.as_ref().map(|n| n.text.as_str()), Some("second"));

        state.dismiss_notice(second);
        assert!(state.notice.is_none());
    }
}
