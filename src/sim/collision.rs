//! Apple/basket collision detection
//!
//! The basket is an axis-aligned box centered on its anchor. The anchor's y
//! is the rendered top edge (`field_height - basket_height`), so the box
//! reaches `basket_height` above and below it.

use glam::IVec2;

use super::state::{Apple, Basket};

/// Axis-aligned collision box around the basket anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasketBox {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl BasketBox {
    pub fn around(basket: &Basket) -> Self {
        Self {
            left: basket.pos.x.saturating_sub(basket.size.x),
            right: basket.pos.x.saturating_add(basket.size.x),
            top: basket.pos.y.saturating_sub(basket.size.y),
            bottom: basket.pos.y.saturating_add(basket.size.y),
        }
    }

    /// Strict containment; a point on any edge is outside
    pub fn contains(&self, point: IVec2) -> bool {
        point.x > self.left && point.x < self.right && point.y > self.top && point.y < self.bottom
    }
}

/// Whether the apple's center is inside the basket box.
///
/// The apple radius plays no part; only the center is tested.
pub fn apple_caught(apple: &Apple, basket: &Basket) -> bool {
    BasketBox::around(basket).contains(apple.pos)
}
