//! UI Components
//!
//! Leptos components for the inventory page.

mod item_form_modal;
mod item_table;
mod notice_banner;

pub use item_form_modal::ItemFormModal;
pub use item_table::ItemTable;
pub use notice_banner::NoticeBanner;
