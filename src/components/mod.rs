//! UI Components
//!
//! Reusable Leptos components shared across screens.

mod bottom_nav;
mod category_card;
mod menu_row;
mod mobile_layout;
mod product_card;
mod shop_card;
mod theme_toggle;

pub use bottom_nav::BottomNav;
pub use category_card::CategoryCard;
pub use menu_row::MenuRow;
pub use mobile_layout::MobileLayout;
pub use product_card::ProductCard;
pub use shop_card::ShopCard;
pub use theme_toggle::ThemeToggle;
