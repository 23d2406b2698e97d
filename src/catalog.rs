//! Catalog Source
//!
//! The fixed, read-only demo dataset: shops, products, categories, chat
//! threads, and one sample order. Nothing here is ever mutated; the app
//! state only ever copies products out of it into the cart.

use std::sync::LazyLock;

use crate::models::{
    CartItem, Category, ChatThread, GeoPoint, Order, Product, Runner, Shop, ThreadKind, User,
    Vehicle,
};
use crate::order::{OrderStage, DELIVERY_FEE};

fn shop(id: &str, name: &str, rating: f32, distance: &str, delivery_time: &str, is_verified: bool, is_open: bool, address: &str) -> Shop {
    Shop {
        id: id.to_string(),
        name: name.to_string(),
        rating,
        distance: distance.to_string(),
        delivery_time: delivery_time.to_string(),
        is_verified,
        is_open,
        address: address.to_string(),
    }
}

fn product(id: &str, name: &str, price: u32, original_price: Option<u32>, category: &str, in_stock: bool, shop_id: &str, unit: Option<&str>) -> Product {
    let discount = original_price
        .filter(|original| *original > price)
        .map(|original| (((original - price) * 100) / original) as u8);
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        original_price,
        category: category.to_string(),
        in_stock,
        shop_id: shop_id.to_string(),
        unit: unit.map(str::to_string),
        discount,
    }
}

static SHOPS: LazyLock<Vec<Shop>> = LazyLock::new(|| {
    vec![
        shop("s1", "Meskel Bakala", 4.8, "350 m", "15-25 min", true, true, "Bole Road, next to Friendship Hotel"),
        shop("s2", "Shola Fresh Corner", 4.6, "600 m", "20-30 min", true, true, "Shola Market, gate 2"),
        shop("s3", "Gerji Family Shop", 4.3, "1.1 km", "25-40 min", false, true, "Gerji Mebrat Hail"),
        shop("s4", "Kazanchis Mini Market", 4.5, "2.0 km", "30-45 min", true, false, "Kazanchis, behind the post office"),
    ]
});

static CATEGORIES: LazyLock<Vec<Category>> = LazyLock::new(|| {
    [
        ("c1", "Vegetables & Fruits", "🍅"),
        ("c2", "Dairy & Eggs", "🥚"),
        ("c3", "Bread & Bakery", "🍞"),
        ("c4", "Beverages", "🧃"),
        ("c5", "Grains & Spices", "🌾"),
        ("c6", "Household", "🧼"),
    ]
    .into_iter()
    .map(|(id, name, icon)| Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
    })
    .collect()
});

static PRODUCTS: LazyLock<Vec<Product>> = LazyLock::new(|| {
    vec![
        product("p1", "Tomatoes", 45, Some(60), "Vegetables & Fruits", true, "s1", Some("1 kg")),
        product("p2", "Red Onions", 38, None, "Vegetables & Fruits", true, "s1", Some("1 kg")),
        product("p3", "Bananas", 55, None, "Vegetables & Fruits", true, "s2", Some("1 kg")),
        product("p4", "Avocados", 70, Some(85), "Vegetables & Fruits", true, "s2", Some("4 pcs")),
        product("p5", "Fresh Milk", 65, None, "Dairy & Eggs", true, "s1", Some("1 L")),
        product("p6", "Eggs", 110, None, "Dairy & Eggs", true, "s3", Some("tray of 12")),
        product("p7", "Ayib Cheese", 90, None, "Dairy & Eggs", false, "s2", Some("250 g")),
        product("p8", "White Bread", 30, None, "Bread & Bakery", true, "s1", Some("loaf")),
        product("p9", "Ambasha", 48, None, "Bread & Bakery", true, "s3", None),
        product("p10", "Ambo Water", 25, None, "Beverages", true, "s1", Some("500 ml")),
        product("p11", "Teff Flour", 160, Some(180), "Grains & Spices", true, "s4", Some("1 kg")),
        product("p12", "Laundry Soap", 35, None, "Household", true, "s3", Some("bar")),
    ]
});

static CHAT_THREADS: LazyLock<Vec<ChatThread>> = LazyLock::new(|| {
    vec![
        ChatThread {
            id: "t1".to_string(),
            participant_name: "Meskel Bakala".to_string(),
            last_message: "Your order is being prepared now.".to_string(),
            minutes_ago: 2,
            unread_count: 1,
            kind: ThreadKind::Shop,
        },
        ChatThread {
            id: "t2".to_string(),
            participant_name: "Abel (Runner)".to_string(),
            last_message: "I'm close by, see you in a few minutes.".to_string(),
            minutes_ago: 14,
            unread_count: 0,
            kind: ThreadKind::Runner,
        },
        ChatThread {
            id: "t3".to_string(),
            participant_name: "Shola Fresh Corner".to_string(),
            last_message: "Thanks for ordering with us!".to_string(),
            minutes_ago: 190,
            unread_count: 0,
            kind: ThreadKind::Shop,
        },
    ]
});

static SAMPLE_ORDER: LazyLock<Order> = LazyLock::new(|| {
    let items: Vec<CartItem> = [("p1", 2), ("p5", 1), ("p8", 2)]
        .into_iter()
        .map(|(id, quantity)| CartItem {
            product: product_by_id(id).expect("sample order references catalog products").clone(),
            quantity,
            note: None,
        })
        .collect();
    let total = crate::cart::total(&items);
    Order {
        id: "ORD-2847".to_string(),
        items,
        shop: SHOPS[0].clone(),
        status: OrderStage::Preparing,
        total,
        delivery_fee: DELIVERY_FEE,
        estimated_delivery: "15-25 min".to_string(),
        runner: Some(Runner {
            id: "r1".to_string(),
            name: "Abel Tesfaye".to_string(),
            phone: "911234567".to_string(),
            rating: 4.9,
            vehicle: Vehicle::Bike,
        }),
        delivery_address: "Bole, Addis Ababa".to_string(),
        payment_method: "Cash on Delivery".to_string(),
    }
});

pub fn shops() -> &'static [Shop] {
    &SHOPS
}

pub fn products() -> &'static [Product] {
    &PRODUCTS
}

pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

pub fn chat_threads() -> &'static [ChatThread] {
    &CHAT_THREADS
}

pub fn sample_order() -> &'static Order {
    &SAMPLE_ORDER
}

fn product_by_id(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

/// Resolve a shop id from the navigation surface. An unknown id falls back
/// to the first shop in the catalog rather than failing — the demo dataset
/// always has somewhere to land.
pub fn shop_or_first(id: &str) -> &'static Shop {
    SHOPS
        .iter()
        .find(|s| s.id == id)
        .unwrap_or_else(|| SHOPS.first().expect("catalog contains at least one shop"))
}

/// Case-insensitive product search over name and category. An empty result
/// is the no-match outcome; this never fails.
pub fn search_products(query: &str) -> Vec<&'static Product> {
    let needle = query.to_lowercase();
    PRODUCTS
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle) || p.category.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Case-insensitive shop search by name
pub fn search_shops(query: &str) -> Vec<&'static Shop> {
    let needle = query.to_lowercase();
    SHOPS
        .iter()
        .filter(|s| s.name.to_lowercase().contains(&needle))
        .collect()
}

/// The fixture session installed by a successful OTP verification
pub fn demo_user(phone: &str) -> User {
    User {
        id: "u1".to_string(),
        name: "Nahom".to_string(),
        phone: phone.to_string(),
        address: "Bole Road, Addis Ababa".to_string(),
        location: GeoPoint {
            lat: 9.0054,
            lng: 38.7636,
            area: "Bole, Addis Ababa".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_shop_id_resolves() {
        assert_eq!(shop_or_first("s2").name, "Shola Fresh Corner");
    }

    #[test]
    fn unknown_shop_id_falls_back_to_first_shop() {
        let fallback = shop_or_first("no-such-shop");
        assert_eq!(fallback.id, shops()[0].id);
    }

    #[test]
    fn search_matches_name_and_category_case_insensitive() {
        let by_name = search_products("toma");
        assert!(by_name.iter().any(|p| p.name == "Tomatoes"));

        let by_category = search_products("DAIRY");
        assert!(!by_category.is_empty());
        assert!(by_category.iter().all(|p| p.category == "Dairy & Eggs"));
    }

    #[test]
    fn search_no_match_returns_empty() {
        assert!(search_products("zzz-nothing").is_empty());
        assert!(search_shops("zzz-nothing").is_empty());
    }

    #[test]
    fn shop_search_matches_by_name() {
        let hits = search_shops("bakala");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "s1");
    }

    #[test]
    fn sample_order_total_matches_items() {
        let order = sample_order();
        assert_eq!(order.total, crate::cart::total(&order.items));
        assert_eq!(order.delivery_fee, DELIVERY_FEE);
        assert!(!order.items.is_empty());
    }

    #[test]
    fn every_product_references_known_shop_and_category() {
        for p in products() {
            assert!(shops().iter().any(|s| s.id == p.shop_id), "{} has unknown shop", p.id);
            assert!(
                categories().iter().any(|c| c.name == p.category),
                "{} has unknown category",
                p.id
            );
        }
    }

    #[test]
    fn discounts_are_derived_from_original_price() {
        for p in products() {
            match (p.original_price, p.discount) {
                (Some(original), Some(discount)) => {
                    assert!(original > p.price);
                    assert_eq!(u32::from(discount), ((original - p.price) * 100) / original);
                }
                (None, Some(_)) => panic!("{} has a discount without an original price", p.id),
                _ => {}
            }
        }
    }
}
