//! Recipe resources and the servings-scaling payloads.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ai::SuggestedIngredient;
use super::catalog::Product;
use super::id::{IngredientId, ProductId, RecipeId};
use super::unit::Unit;

/// A recipe with its ingredient list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub servings: i32,
    /// Preparation time in minutes.
    #[serde(default)]
    pub prep_time: i32,
    /// Cooking time in minutes.
    #[serde(default)]
    pub cook_time: i32,
    #[serde(default)]
    pub image_url: String,
    #[serde(default, deserialize_with = "super::nullable_vec")]
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub is_ai_generated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One ingredient line of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    #[serde(default)]
    pub id: Option<IngredientId>,
    pub product_id: ProductId,
    /// The joined product, when the server expands it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
    pub quantity: Decimal,
    #[serde(default)]
    pub unit: Unit,
    /// Preparation note, e.g. "chopped" or "melted".
    #[serde(default)]
    pub notes: String,
}

/// Response of `GET /recipes/{id}/calculate?servings=` - the ingredient
/// list scaled to the requested servings, priced against the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeCalculation {
    #[serde(default)]
    pub servings: i32,
    #[serde(default, deserialize_with = "super::nullable_vec")]
    pub ingredients: Vec<SuggestedIngredient>,
    pub total_price: Decimal,
}

/// Body for `POST /recipes/{id}/add-to-cart`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddRecipeToCartRequest {
    pub servings: i32,
}

/// Body for `POST /admin/recipes` and `PUT /admin/recipes/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeCreateRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub instructions: String,
    pub servings: i32,
    pub prep_time: i32,
    pub cook_time: i32,
    #[serde(default)]
    pub image_url: String,
    pub ingredients: Vec<RecipeIngredientRequest>,
}

/// Ingredient line of a [`RecipeCreateRequest`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeIngredientRequest {
    pub product_id: ProductId,
    pub quantity: Decimal,
    pub unit: Unit,
    #[serde(default)]
    pub notes: String,
}
