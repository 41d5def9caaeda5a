use chrono::{DateTime, Local};

use crate::{
    cart::Cart,
    model::{CartLine, OrderType},
    random::ReceiptNumbers,
};


// Frozen order shown on the receipt overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub number: u16,
    pub issued_at: DateTime<Local>,
    pub order_type: Option<OrderType>,
    pub lines: Vec<CartLine>,
    pub total: u64,
}

impl Receipt {
    // Snapshot the cart; the caller guarantees it is not empty
    pub fn issue(
        cart: &Cart,
        order_type: Option<OrderType>,
        issued_at: DateTime<Local>,
        numbers: &mut ReceiptNumbers,
    ) -> Self {
        Self {
            number: numbers.next_number(),
            issued_at,
            order_type,
            lines: cart.lines().to_vec(),
            total: cart.total(),
        }
    }
}
