//! AI Chef endpoints.
//!
//! The assistant runs server-side; these calls hand it a dish name, the
//! cart, or a product selection and get structured suggestions back.

use tracing::instrument;

use greenbasket_core::{
    CartRecipes, CartSnapshot, DishIngredients, DishRequest, ProductId, ProductsRequest,
    RecipeSuggestion,
};

use super::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// Turn a dish name into a priced shopping list.
    /// `POST /ai/dish-to-ingredients`
    ///
    /// # Errors
    ///
    /// Returns an error if the assistant fails or the request fails.
    #[instrument(skip(self, request), fields(dish = %request.dish_name))]
    pub async fn dish_to_ingredients(
        &self,
        request: &DishRequest,
    ) -> Result<DishIngredients, ApiError> {
        self.post("/ai/dish-to-ingredients", request).await
    }

    /// Suggest recipes from the current cart contents.
    /// `GET /ai/cart-to-recipes`
    ///
    /// # Errors
    ///
    /// Returns an error if the cart is empty, the assistant fails, or the
    /// request fails.
    #[instrument(skip(self))]
    pub async fn cart_to_recipes(&self) -> Result<CartRecipes, ApiError> {
        self.get("/ai/cart-to-recipes").await
    }

    /// Suggest recipes from a product selection.
    /// `POST /ai/products-to-recipes`
    ///
    /// # Errors
    ///
    /// Returns an error if the assistant fails or the request fails.
    #[instrument(skip(self, product_ids), fields(count = product_ids.len()))]
    pub async fn products_to_recipes(
        &self,
        product_ids: &[ProductId],
    ) -> Result<Vec<RecipeSuggestion>, ApiError> {
        let request = ProductsRequest {
            product_ids: product_ids.to_vec(),
        };
        self.post("/ai/products-to-recipes", &request).await
    }

    /// Add a suggestion's available ingredients to the cart.
    /// `POST /ai/add-to-cart`
    ///
    /// # Errors
    ///
    /// Returns an error if no ingredient is available or the request
    /// fails.
    #[instrument(skip(self, suggestion), fields(recipe = %suggestion.name))]
    pub async fn add_suggestion_to_cart(
        &self,
        suggestion: &RecipeSuggestion,
    ) -> Result<CartSnapshot, ApiError> {
        self.post("/ai/add-to-cart", suggestion).await
    }
}
