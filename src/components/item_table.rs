//! Item Table Component
//!
//! All items in server order, one row per item, each with a delete button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_inventory;
use crate::models::Item;

/// Price cell text
pub fn format_price(price: f64) -> String {
    format!("${}", price)
}

/// Row key. Includes every displayed field so a refetch that changes a row
/// re-renders it, not just rows that were added or removed.
fn row_key(item: &Item) -> (u32, String, u64, u64) {
    (item.id, item.name.clone(), item.price.to_bits(), item.quantity.to_bits())
}

#[component]
pub fn ItemTable() -> impl IntoView {
    let ctrl = use_inventory();
    let state = *ctrl.state();

    view! {
        <table class="items-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Price"</th>
                    <th>"Quantity"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || state.with(|s| s.items.clone())
                    key=row_key
                    children=move |item| {
                        let id = item.id;
                        let ctrl = ctrl.clone();
                        view! {
                            <tr>
                                <td>{item.name}</td>
                                <td>{format_price(item.price)}</td>
                                <td>{item.quantity.to_string()}</td>
                                <td>
                                    <button
                                        class="delete-btn"
                                        on:click=move |_| {
                                            let ctrl = ctrl.clone();
                                            spawn_local(async move {
                                                ctrl.delete(id).await;
                                            });
                                        }
                                    >
                                        "❌ Delete"
                                    </button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, name: &str, price: f64) -> Item {
        Item { id, name: name.to_string(), price, quantity: 3.0 }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(9.99), "$9.99");
        assert_eq!(format_price(12.0), "$12");
        assert_eq!(format_price(0.0), "$0");
    }

    #[test]
    fn test_row_keys_unique_per_item() {
        use std::collections::HashSet;

        // Same name and price on every row; only the id tells them apart
        let items: Vec<Item> = (1..=50).map(|id| make_item(id, "Widget", 9.99)).collect();
        let keys: HashSet<_> = items.iter().map(row_key).collect();
        assert_eq!(keys.len(), items.len());
    }

    #[test]
    fn test_row_key_tracks_displayed_fields() {
        let item = make_item(1, "Widget", 9.99);
        assert_eq!(row_key(&item), row_key(&item.clone()));
        assert_ne!(row_key(&item), row_key(&make_item(1, "Gadget", 9.99)));
        assert_ne!(row_key(&item), row_key(&make_item(1, "Widget", 10.0)));
        assert_ne!(row_key(&item), row_key(&make_item(2, "Widget", 9.99)));
    }
}
