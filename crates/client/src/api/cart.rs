//! Cart endpoints (not cached - mutable state).
//!
//! Every mutation returns the full updated cart snapshot; callers replace
//! their stored copy wholesale.

use rust_decimal::Decimal;
use tracing::instrument;

use greenbasket_core::{CartItemRequest, CartSnapshot, ProductId, QuantityUpdate};

use super::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// Fetch the current cart. `GET /cart`
    ///
    /// # Errors
    ///
    /// Returns an error if the session is invalid or the request fails.
    #[instrument(skip(self))]
    pub async fn cart(&self) -> Result<CartSnapshot, ApiError> {
        self.get("/cart").await
    }

    /// Add a product to the cart. `POST /cart/items`
    ///
    /// # Errors
    ///
    /// Returns an error if the product is unknown, the quantity is
    /// rejected, or the request fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn add_cart_item(
        &self,
        product_id: ProductId,
        quantity: Decimal,
    ) -> Result<CartSnapshot, ApiError> {
        let request = CartItemRequest {
            product_id,
            quantity,
        };
        self.post("/cart/items", &request).await
    }

    /// Change a cart line's quantity. `PUT /cart/items/{product_id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not in the cart or the request
    /// fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn update_cart_item(
        &self,
        product_id: ProductId,
        quantity: Decimal,
    ) -> Result<CartSnapshot, ApiError> {
        let request = QuantityUpdate { quantity };
        self.put(&format!("/cart/items/{product_id}"), &request)
            .await
    }

    /// Remove a product from the cart. `DELETE /cart/items/{product_id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not in the cart or the request
    /// fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn remove_cart_item(&self, product_id: ProductId) -> Result<CartSnapshot, ApiError> {
        self.delete(&format!("/cart/items/{product_id}")).await
    }

    /// Empty the cart. `DELETE /cart`
    ///
    /// # Errors
    ///
    /// Returns an error if the session is invalid or the request fails.
    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> Result<CartSnapshot, ApiError> {
        self.delete("/cart").await
    }

    /// Add several products in one call. `POST /cart/items/bulk`
    ///
    /// # Errors
    ///
    /// Returns an error if any item is rejected or the request fails.
    #[instrument(skip(self, items), fields(count = items.len()))]
    pub async fn add_cart_items_bulk(
        &self,
        items: &[CartItemRequest],
    ) -> Result<CartSnapshot, ApiError> {
        self.post("/cart/items/bulk", &items).await
    }
}
