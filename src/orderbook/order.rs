//! Order entities and the fixed execution policy of each order type

use pricelevel::Side;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How an order type interacts with the matching loop and the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionPolicy {
    /// Only contra orders at an acceptable price are eligible
    pub price_filtered: bool,

    /// Any unfilled remainder rests on the incoming order's side
    pub can_rest: bool,

    /// The whole quantity must fill, otherwise nothing happens
    pub atomic: bool,
}

impl ExecutionPolicy {
    const LIMIT: Self = Self {
        price_filtered: true,
        can_rest: true,
        atomic: false,
    };
    const MARKET: Self = Self {
        price_filtered: false,
        can_rest: false,
        atomic: false,
    };
    const IMMEDIATE_OR_CANCEL: Self = Self {
        price_filtered: true,
        can_rest: false,
        atomic: false,
    };
    const FILL_OR_KILL: Self = Self {
        price_filtered: true,
        can_rest: false,
        atomic: true,
    };
    const ICEBERG: Self = Self {
        price_filtered: true,
        can_rest: true,
        atomic: false,
    };
}

/// The closed set of supported order types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OrderKind {
    /// Limit order (LO)
    Limit,

    /// Market order (MO), no price limit
    Market,

    /// Immediate-or-cancel order (IOC)
    ImmediateOrCancel,

    /// Fill-or-kill order (FOK)
    FillOrKill,

    /// Iceberg order (ICE), revealing `display_size` at a time
    Iceberg {
        /// Size of each visible clip
        display_size: u64,
        /// Quantity left in the current visible clip
        remaining_display: u64,
    },
}

impl OrderKind {
    /// Returns the execution policy for this order type.
    pub fn policy(&self) -> ExecutionPolicy {
        match self {
            OrderKind::Limit => ExecutionPolicy::LIMIT,
            OrderKind::Market => ExecutionPolicy::MARKET,
            OrderKind::ImmediateOrCancel => ExecutionPolicy::IMMEDIATE_OR_CANCEL,
            OrderKind::FillOrKill => ExecutionPolicy::FILL_OR_KILL,
            OrderKind::Iceberg { .. } => ExecutionPolicy::ICEBERG,
        }
    }

    /// Short code used on the command line and in logs
    pub fn code(&self) -> &'static str {
        match self {
            OrderKind::Limit => "LO",
            OrderKind::Market => "MO",
            OrderKind::ImmediateOrCancel => "IOC",
            OrderKind::FillOrKill => "FOK",
            OrderKind::Iceberg { .. } => "ICE",
        }
    }

    /// Returns true for iceberg orders
    pub fn is_iceberg(&self) -> bool {
        matches!(self, OrderKind::Iceberg { .. })
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An order, either incoming or resting in the book.
///
/// `quantity` is the remaining open quantity and is decremented in place
/// as fills occur. `timestamp` is a logical priority stamp assigned by the
/// book when the order rests; it only breaks ties between equal prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier
    pub id: String,

    /// Buy or sell
    pub side: Side,

    /// Limit price in ticks (ignored for market orders)
    pub price: u64,

    /// Remaining open quantity
    pub quantity: u64,

    /// Order type, with iceberg clip state
    pub kind: OrderKind,

    /// Priority stamp
    pub timestamp: u64,
}

impl Order {
    /// Creates an order of the given kind. Iceberg clip state must already be set;
    /// prefer [`Order::iceberg`] for iceberg orders.
    pub fn new(id: &str, side: Side, price: u64, quantity: u64, kind: OrderKind) -> Self {
        Self {
            id: id.to_string(),
            side,
            price,
            quantity,
            kind,
            timestamp: 0,
        }
    }

    /// Creates a limit order
    pub fn limit(id: &str, side: Side, price: u64, quantity: u64) -> Self {
        Self::new(id, side, price, quantity, OrderKind::Limit)
    }

    /// Creates a market order
    pub fn market(id: &str, side: Side, quantity: u64) -> Self {
        Self::new(id, side, 0, quantity, OrderKind::Market)
    }

    /// Creates an immediate-or-cancel order
    pub fn immediate_or_cancel(id: &str, side: Side, price: u64, quantity: u64) -> Self {
        Self::new(id, side, price, quantity, OrderKind::ImmediateOrCancel)
    }

    /// Creates a fill-or-kill order
    pub fn fill_or_kill(id: &str, side: Side, price: u64, quantity: u64) -> Self {
        Self::new(id, side, price, quantity, OrderKind::FillOrKill)
    }

    /// Creates an iceberg order with its first clip revealed.
    pub fn iceberg(id: &str, side: Side, price: u64, quantity: u64, display_size: u64) -> Self {
        Self::new(
            id,
            side,
            price,
            quantity,
            OrderKind::Iceberg {
                display_size,
                remaining_display: display_size.min(quantity),
            },
        )
    }

    /// Quantity a single match may take from this order when it rests.
    pub fn executable_quantity(&self) -> u64 {
        match self.kind {
            OrderKind::Iceberg {
                remaining_display, ..
            } => remaining_display,
            _ => self.quantity,
        }
    }

    /// Visible clip of an iceberg order, `None` for other types
    pub fn visible_quantity(&self) -> Option<u64> {
        match self.kind {
            OrderKind::Iceberg {
                remaining_display, ..
            } => Some(remaining_display),
            _ => None,
        }
    }

    /// Returns true if `contra_price` is acceptable to this order's limit.
    pub fn accepts_price(&self, contra_price: u64) -> bool {
        match self.side {
            Side::Buy => contra_price <= self.price,
            Side::Sell => contra_price >= self.price,
        }
    }

    /// Returns true once nothing remains to fill
    pub fn is_filled(&self) -> bool {
        self.quantity == 0
    }
}

/// A request to change the quantity and price of a resting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderUpdate {
    /// Identifier of the resting order
    pub order_id: String,

    /// New remaining quantity
    pub quantity: u64,

    /// New price
    pub price: u64,
}

impl OrderUpdate {
    pub fn new(order_id: &str, quantity: u64, price: u64) -> Self {
        Self {
            order_id: order_id.to_string(),
            quantity,
            price,
        }
    }
}
