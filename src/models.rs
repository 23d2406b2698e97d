//! Frontend Models
//!
//! Entity records for the storefront. Catalog entities (shops, products,
//! categories, chat threads, the sample order) are read-only once loaded;
//! only `CartItem` and `User` ever live inside the mutable app state.

use serde::{Deserialize, Serialize};

use crate::order::OrderStage;

/// A neighborhood shop listed in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    pub id: String,
    pub name: String,
    pub rating: f32,
    pub distance: String,
    pub delivery_time: String,
    pub is_verified: bool,
    pub is_open: bool,
    pub address: String,
}

/// A product listed in the catalog. Prices are whole birr.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: u32,
    /// Pre-discount price, shown struck through when present
    pub original_price: Option<u32>,
    pub category: String,
    pub in_stock: bool,
    pub shop_id: String,
    pub unit: Option<String>,
    /// Discount percentage for the badge
    pub discount: Option<u8>,
}

/// A product in the cart. Quantity is at least 1 for as long as the item
/// exists; a quantity update reaching 0 removes the item instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
    pub note: Option<String>,
}

/// Coordinates plus a human-readable area label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
    pub area: String,
}

/// A signed-in session. Absence of a `User` means guest mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub location: GeoPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vehicle {
    Bike,
    Scooter,
}

/// The runner delivering an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Runner {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub rating: f32,
    pub vehicle: Vehicle,
}

/// A placed order, as shown on the tracking screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub items: Vec<CartItem>,
    pub shop: Shop,
    pub status: OrderStage,
    /// Item subtotal, excluding the delivery fee
    pub total: u32,
    pub delivery_fee: u32,
    pub estimated_delivery: String,
    pub runner: Option<Runner>,
    pub delivery_address: String,
    pub payment_method: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThreadKind {
    Shop,
    Runner,
}

/// A conversation preview on the messages screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatThread {
    pub id: String,
    pub participant_name: String,
    pub last_message: String,
    /// Age of the last message, in minutes
    pub minutes_ago: u32,
    pub unread_count: u32,
    pub kind: ThreadKind,
}

/// A product category shown as a filter chip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
}
