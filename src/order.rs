//! Order Flow
//!
//! The linear order-status machine and the constants driving the two
//! simulated flows: placement (checkout latency) and status progression
//! (tracking-screen ticks). Both are demo timers, not a tracking system.

use serde::{Deserialize, Serialize};

/// Flat delivery fee, in birr
pub const DELIVERY_FEE: u32 = 35;

/// Simulated network latency when placing an order
pub const PLACE_ORDER_DELAY_MS: u32 = 1_500;

/// Delay between automatic status advances on the tracking screen
pub const STAGE_ADVANCE_MS: u32 = 5_000;

/// One-directional order status. Stages only ever advance, one at a time,
/// and `Delivered` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStage {
    Placed,
    Accepted,
    Preparing,
    PickedUp,
    Delivered,
}

impl OrderStage {
    /// All stages in progression order, for rendering the timeline
    pub const ALL: [OrderStage; 5] = [
        OrderStage::Placed,
        OrderStage::Accepted,
        OrderStage::Preparing,
        OrderStage::PickedUp,
        OrderStage::Delivered,
    ];

    /// The following stage, or `None` at the terminal stage
    pub fn next(self) -> Option<OrderStage> {
        match self {
            OrderStage::Placed => Some(OrderStage::Accepted),
            OrderStage::Accepted => Some(OrderStage::Preparing),
            OrderStage::Preparing => Some(OrderStage::PickedUp),
            OrderStage::PickedUp => Some(OrderStage::Delivered),
            OrderStage::Delivered => None,
        }
    }

    /// One tick of the progression timer: advance one stage, or stay put
    /// at the terminal stage.
    pub fn advance(self) -> OrderStage {
        self.next().unwrap_or(self)
    }

    /// Position in the timeline, 0-based
    pub fn index(self) -> usize {
        match self {
            OrderStage::Placed => 0,
            OrderStage::Accepted => 1,
            OrderStage::Preparing => 2,
            OrderStage::PickedUp => 3,
            OrderStage::Delivered => 4,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderStage::Placed => "Order Placed",
            OrderStage::Accepted => "Shop Accepted",
            OrderStage::Preparing => "Preparing",
            OrderStage::PickedUp => "Picked Up",
            OrderStage::Delivered => "Delivered",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_advance_in_order() {
        let mut stage = OrderStage::Placed;
        let mut seen = vec![stage];
        while let Some(next) = stage.next() {
            stage = next;
            seen.push(stage);
        }
        assert_eq!(seen, OrderStage::ALL);
    }

    #[test]
    fn indices_match_timeline_positions() {
        for (position, stage) in OrderStage::ALL.iter().enumerate() {
            assert_eq!(stage.index(), position);
        }
    }

    #[test]
    fn delivered_is_absorbing() {
        assert_eq!(OrderStage::Delivered.next(), None);
        assert_eq!(OrderStage::Delivered.advance(), OrderStage::Delivered);
        assert!(OrderStage::Delivered.is_terminal());
    }

    #[test]
    fn preparing_reaches_terminal_and_stays() {
        // The tracking screen starts at Preparing (index 2). Three ticks
        // land on Delivered (index 4); a fourth leaves it unchanged.
        let mut stage = OrderStage::Preparing;
        for _ in 0..3 {
            stage = stage.advance();
        }
        assert_eq!(stage, OrderStage::Delivered);
        assert_eq!(stage.advance(), OrderStage::Delivered);
    }

    #[test]
    fn only_delivered_is_terminal() {
        for stage in OrderStage::ALL {
            assert_eq!(stage.is_terminal(), stage == OrderStage::Delivered);
        }
    }
}
