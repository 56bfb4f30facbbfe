//! Recipe endpoints.

use tracing::instrument;

use greenbasket_core::{
    AddRecipeToCartRequest, CartSnapshot, Recipe, RecipeCalculation, RecipeId,
};

use super::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// List all recipes. `GET /recipes`
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        self.get("/recipes").await
    }

    /// Get a recipe by ID. `GET /recipes/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the recipe is not found or the request fails.
    #[instrument(skip(self), fields(recipe_id = %id))]
    pub async fn recipe(&self, id: RecipeId) -> Result<Recipe, ApiError> {
        self.get(&format!("/recipes/{id}")).await
    }

    /// Search recipes by name. `GET /recipes/search?q=`
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn search_recipes(&self, query: &str) -> Result<Vec<Recipe>, ApiError> {
        self.get_with_query("/recipes/search", &[("q", query)]).await
    }

    /// Scale a recipe's ingredients to a serving count and price them.
    /// `GET /recipes/{id}/calculate?servings=`
    ///
    /// # Errors
    ///
    /// Returns an error if the recipe is not found or the request fails.
    #[instrument(skip(self), fields(recipe_id = %id, servings))]
    pub async fn calculate_recipe(
        &self,
        id: RecipeId,
        servings: i32,
    ) -> Result<RecipeCalculation, ApiError> {
        self.get_with_query(
            &format!("/recipes/{id}/calculate"),
            &[("servings", servings.to_string())],
        )
        .await
    }

    /// Add a recipe's ingredients to the cart, scaled to a serving count.
    /// `POST /recipes/{id}/add-to-cart`
    ///
    /// # Errors
    ///
    /// Returns an error if the recipe is not found, an ingredient cannot
    /// be added, or the request fails.
    #[instrument(skip(self), fields(recipe_id = %id, servings))]
    pub async fn add_recipe_to_cart(
        &self,
        id: RecipeId,
        servings: i32,
    ) -> Result<CartSnapshot, ApiError> {
        let request = AddRecipeToCartRequest { servings };
        self.post(&format!("/recipes/{id}/add-to-cart"), &request)
            .await
    }
}
