//! Cart Logic
//!
//! Pure mutation and totaling functions over the cart's item list. The
//! store wraps these (see `store.rs`); keeping them free of reactive types
//! means the whole contract is testable on the native target.
//!
//! Invariants:
//! - at most one `CartItem` per product id
//! - quantity is at least 1 while an item exists; setting it to 0 removes
//!   the item rather than persisting a non-positive count
//! - insertion order is preserved for display

use thiserror::Error;

use crate::models::{CartItem, Product};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CartError {
    /// An add with quantity 0 would produce an item violating the
    /// quantity invariant, so it is rejected outright.
    #[error("cannot add zero of a product to the cart")]
    ZeroQuantity,
}

/// Add `quantity` of `product`. If the product is already in the cart its
/// quantity is incremented (no upper bound); otherwise the item is
/// appended. Stock is the caller's concern: screens never offer the add
/// action for out-of-stock products, and this function does not re-check.
pub fn add_item(items: &mut Vec<CartItem>, product: &Product, quantity: u32) -> Result<(), CartError> {
    if quantity == 0 {
        return Err(CartError::ZeroQuantity);
    }
    match items.iter_mut().find(|item| item.product.id == product.id) {
        Some(item) => item.quantity += quantity,
        None => items.push(CartItem {
            product: product.clone(),
            quantity,
            note: None,
        }),
    }
    Ok(())
}

/// Remove the item with `product_id`. No-op if absent; idempotent.
pub fn remove_item(items: &mut Vec<CartItem>, product_id: &str) {
    items.retain(|item| item.product.id != product_id);
}

/// Set the quantity of `product_id` to exactly `quantity` (absolute, not a
/// delta). A quantity of 0 behaves as `remove_item`. No-op for unknown ids.
pub fn set_quantity(items: &mut Vec<CartItem>, product_id: &str, quantity: u32) {
    if quantity == 0 {
        remove_item(items, product_id);
        return;
    }
    if let Some(item) = items.iter_mut().find(|item| item.product.id == product_id) {
        item.quantity = quantity;
    }
}

/// Attach or clear the free-text note on an item. No-op for unknown ids.
pub fn set_note(items: &mut Vec<CartItem>, product_id: &str, note: Option<String>) {
    if let Some(item) = items.iter_mut().find(|item| item.product.id == product_id) {
        item.note = note;
    }
}

/// Item subtotal: Σ price × quantity. Recomputed on every read.
pub fn total(items: &[CartItem]) -> u32 {
    items.iter().map(|item| item.product.price * item.quantity).sum()
}

/// Total unit count: Σ quantity, not the number of distinct products.
pub fn items_count(items: &[CartItem]) -> u32 {
    items.iter().map(|item| item.quantity).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;

    fn make_product(id: &str, price: u32) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price,
            original_price: None,
            category: "Vegetables & Fruits".to_string(),
            in_stock: true,
            shop_id: "s1".to_string(),
            unit: None,
            discount: None,
        }
    }

    #[test]
    fn add_accumulates_quantity_for_same_product() {
        let mut items = Vec::new();
        let tomato = make_product("p1", 50);

        add_item(&mut items, &tomato, 2).unwrap();
        add_item(&mut items, &tomato, 3).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 5);
    }

    #[test]
    fn add_rejects_zero_quantity() {
        let mut items = Vec::new();
        let result = add_item(&mut items, &make_product("p1", 50), 0);
        assert_eq!(result, Err(CartError::ZeroQuantity));
        assert!(items.is_empty());
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut items = Vec::new();
        add_item(&mut items, &make_product("p1", 10), 1).unwrap();
        add_item(&mut items, &make_product("p2", 20), 1).unwrap();
        add_item(&mut items, &make_product("p3", 30), 1).unwrap();
        // Bumping an existing item must not move it
        add_item(&mut items, &make_product("p1", 10), 1).unwrap();

        let ids: Vec<&str> = items.iter().map(|i| i.product.id.as_str()).collect();
        assert_eq!(ids, ["p1", "p2", "p3"]);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut items = Vec::new();
        add_item(&mut items, &make_product("p1", 10), 1).unwrap();

        remove_item(&mut items, "p1");
        remove_item(&mut items, "p1");
        remove_item(&mut items, "never-existed");

        assert!(items.is_empty());
    }

    #[test]
    fn set_quantity_is_absolute() {
        let mut items = Vec::new();
        add_item(&mut items, &make_product("p1", 10), 4).unwrap();

        set_quantity(&mut items, "p1", 2);
        assert_eq!(items[0].quantity, 2);

        set_quantity(&mut items, "p1", 7);
        assert_eq!(items[0].quantity, 7);
    }

    #[test]
    fn set_quantity_zero_removes_item() {
        let mut items = Vec::new();
        add_item(&mut items, &make_product("p1", 10), 3).unwrap();

        set_quantity(&mut items, "p1", 0);

        assert!(items.is_empty());
        assert_eq!(total(&items), 0);
    }

    #[test]
    fn set_quantity_unknown_id_is_noop() {
        let mut items = Vec::new();
        add_item(&mut items, &make_product("p1", 10), 1).unwrap();

        set_quantity(&mut items, "p9", 5);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 1);
    }

    #[test]
    fn totals_track_mutations() {
        // Scenario from the cart contract: A at 50 birr, qty 2, then +1,
        // then removed via a zero update.
        let mut items = Vec::new();
        let a = make_product("a", 50);

        add_item(&mut items, &a, 2).unwrap();
        assert_eq!(total(&items), 100);
        assert_eq!(items_count(&items), 2);

        add_item(&mut items, &a, 1).unwrap();
        assert_eq!(items[0].quantity, 3);
        assert_eq!(total(&items), 150);

        set_quantity(&mut items, "a", 0);
        assert_eq!(total(&items), 0);
    }

    #[test]
    fn items_count_sums_quantities_not_lines() {
        let mut items = Vec::new();
        add_item(&mut items, &make_product("p1", 10), 3).unwrap();
        add_item(&mut items, &make_product("p2", 20), 2).unwrap();

        assert_eq!(items_count(&items), 5);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn clear_empties_cart() {
        let mut items = Vec::new();
        add_item(&mut items, &make_product("p1", 10), 3).unwrap();
        add_item(&mut items, &make_product("p2", 25), 1).unwrap();

        items.clear();

        assert!(items.is_empty());
        assert_eq!(total(&items), 0);
        assert_eq!(items_count(&items), 0);
    }

    #[test]
    fn note_set_and_cleared() {
        let mut items = Vec::new();
        add_item(&mut items, &make_product("p1", 10), 1).unwrap();

        set_note(&mut items, "p1", Some("no plastic bag".to_string()));
        assert_eq!(items[0].note.as_deref(), Some("no plastic bag"));

        set_note(&mut items, "p1", None);
        assert_eq!(items[0].note, None);

        // Unknown id is a no-op
        set_note(&mut items, "p9", Some("ignored".to_string()));
    }
}
