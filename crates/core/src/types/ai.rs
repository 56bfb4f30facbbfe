//! AI Chef payloads.
//!
//! The assistant logic runs server-side; these are the request and
//! response shapes for the `/ai/*` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::unit::Unit;

/// Body for `POST /ai/dish-to-ingredients`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishRequest {
    pub dish_name: String,
    /// Defaults to 2 servings server-side when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<i32>,
}

/// An ingredient the dish needs, as named by the assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredIngredient {
    pub name: String,
    pub quantity: Decimal,
    #[serde(default)]
    pub unit: String,
}

/// A store product matched against a required ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedProduct {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub unit: String,
}

/// Response of `POST /ai/dish-to-ingredients`: the dish's shopping list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishIngredients {
    pub dish_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub servings: i32,
    #[serde(default, deserialize_with = "super::nullable_vec")]
    pub required_ingredients: Vec<RequiredIngredient>,
    #[serde(default, deserialize_with = "super::nullable_vec")]
    pub matched_products: Vec<MatchedProduct>,
    #[serde(default)]
    pub cooking_tips: String,
    pub total_price: Decimal,
}

/// An ingredient of a suggested recipe, resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedIngredient {
    pub product_id: ProductId,
    #[serde(default)]
    pub product_name: String,
    pub quantity: Decimal,
    #[serde(default)]
    pub unit: Unit,
    /// False when the product is out of stock or unmatched; such
    /// ingredients are skipped when adding a suggestion to the cart.
    #[serde(default)]
    pub available: bool,
    pub price: Decimal,
}

/// A recipe the assistant proposes from cart contents or chosen products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeSuggestion {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub prep_time: i32,
    #[serde(default)]
    pub cook_time: i32,
    #[serde(default)]
    pub servings: i32,
    #[serde(default, deserialize_with = "super::nullable_vec")]
    pub ingredients: Vec<SuggestedIngredient>,
    pub total_price: Decimal,
    /// Assistant confidence score in `0.0..=1.0`.
    #[serde(default)]
    pub confidence: f64,
}

/// Response of `GET /ai/cart-to-recipes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartRecipes {
    #[serde(default, deserialize_with = "super::nullable_vec")]
    pub cart_items: Vec<String>,
    #[serde(default, deserialize_with = "super::nullable_vec")]
    pub recipes: Vec<RecipeSuggestion>,
}

/// Body for `POST /ai/products-to-recipes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsRequest {
    pub product_ids: Vec<ProductId>,
}
