//! Cart snapshot types.
//!
//! Every cart endpoint returns the full updated cart, recomputed
//! server-side. `subtotal`, `total_price`, and `item_count` arrive already
//! derived; the client treats them as authoritative and never recomputes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{CartId, CartItemId, ProductId};
use super::unit::Unit;

/// The server-authoritative representation of a shopping cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    #[serde(default)]
    pub id: Option<CartId>,
    #[serde(default, deserialize_with = "super::nullable_vec")]
    pub items: Vec<CartItem>,
    pub total_price: Decimal,
    pub item_count: i64,
}

/// One line of a cart snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(default)]
    pub id: Option<CartItemId>,
    pub product_id: ProductId,
    #[serde(default)]
    pub product_name: String,
    pub price: Decimal,
    pub quantity: Decimal,
    #[serde(default)]
    pub unit: Unit,
    pub subtotal: Decimal,
}

/// Body for `POST /cart/items` and the bulk variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItemRequest {
    pub product_id: ProductId,
    pub quantity: Decimal,
}

/// Body for `PUT /cart/items/{product_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantityUpdate {
    pub quantity: Decimal,
}
