//! Core types for Greenbasket.
//!
//! Wire-compatible representations of the grocery API's resources.

pub mod ai;
pub mod cart;
pub mod catalog;
pub mod id;
pub mod recipe;
pub mod unit;
pub mod user;

pub use ai::{
    CartRecipes, DishIngredients, DishRequest, MatchedProduct, ProductsRequest,
    RecipeSuggestion, RequiredIngredient, SuggestedIngredient,
};
pub use cart::{CartItem, CartItemRequest, CartSnapshot, QuantityUpdate};
pub use catalog::{
    Category, CategoryCreateRequest, Product, ProductCreateRequest, ProductUpdateRequest,
};
pub use id::*;
pub use recipe::{
    AddRecipeToCartRequest, Recipe, RecipeCalculation, RecipeCreateRequest, RecipeIngredient,
    RecipeIngredientRequest,
};
pub use unit::Unit;
pub use user::{AuthResponse, LoginRequest, RegisterRequest, Role, RoleUpdateRequest, User};

use serde::{Deserialize, Deserializer};

/// Generic `{"message": "..."}` acknowledgement returned by delete endpoints.
#[derive(Debug, Clone, serde::Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Deserialize a list field that the Go backend marshals as `null` when empty.
pub(crate) fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
