//! Advisory client-side validation for the admin forms.
//!
//! These checks block obviously bad input before a request leaves the
//! client; the server remains the authority and may still reject input
//! that passes here. Messages are user-facing.

use rust_decimal::Decimal;
use thiserror::Error;

use greenbasket_core::{ProductCreateRequest, ProductUpdateRequest, RecipeCreateRequest};

/// A pre-submission validation failure; the request was never sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Validate a product creation form.
///
/// # Errors
///
/// Returns the first failed check as a user-facing message.
pub fn validate_product(req: &ProductCreateRequest) -> Result<(), ValidationError> {
    if req.name.trim().is_empty() {
        return Err(ValidationError::new("Product name is required"));
    }
    if req.price <= Decimal::ZERO {
        return Err(ValidationError::new("Price must be greater than 0"));
    }
    if req.stock < Decimal::ZERO {
        return Err(ValidationError::new("Stock cannot be negative"));
    }
    if req.category_id.as_u64() == 0 {
        return Err(ValidationError::new("Please select a category"));
    }
    Ok(())
}

/// Validate a product update form; only the provided fields are checked.
///
/// # Errors
///
/// Returns the first failed check as a user-facing message.
pub fn validate_product_update(req: &ProductUpdateRequest) -> Result<(), ValidationError> {
    if req.name.as_ref().is_some_and(|n| n.trim().is_empty()) {
        return Err(ValidationError::new("Product name is required"));
    }
    if req.price.is_some_and(|p| p <= Decimal::ZERO) {
        return Err(ValidationError::new("Price must be greater than 0"));
    }
    if req.stock.is_some_and(|s| s < Decimal::ZERO) {
        return Err(ValidationError::new("Stock cannot be negative"));
    }
    Ok(())
}

/// Validate a category form.
///
/// # Errors
///
/// Returns a user-facing message when the name is missing.
pub fn validate_category(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("Category name is required"));
    }
    Ok(())
}

/// Validate a recipe creation form, including each ingredient line.
///
/// # Errors
///
/// Returns the first failed check as a user-facing message.
pub fn validate_recipe(req: &RecipeCreateRequest) -> Result<(), ValidationError> {
    if req.name.trim().is_empty() {
        return Err(ValidationError::new("Recipe name is required"));
    }
    if req.instructions.trim().is_empty() {
        return Err(ValidationError::new("Instructions are required"));
    }
    if req.servings < 1 {
        return Err(ValidationError::new("Servings must be at least 1"));
    }
    if req.prep_time < 0 || req.cook_time < 0 {
        return Err(ValidationError::new("Prep/Cook time cannot be negative"));
    }
    if req.ingredients.is_empty() {
        return Err(ValidationError::new("At least one ingredient is required"));
    }
    for (index, ingredient) in req.ingredients.iter().enumerate() {
        let position = index + 1;
        if ingredient.product_id.as_u64() == 0 {
            return Err(ValidationError::new(format!(
                "Select a product for ingredient {position}"
            )));
        }
        if ingredient.quantity <= Decimal::ZERO {
            return Err(ValidationError::new(format!(
                "Quantity for ingredient {position} must be greater than 0"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenbasket_core::{CategoryId, ProductId, RecipeIngredientRequest, Unit};

    fn product_request() -> ProductCreateRequest {
        ProductCreateRequest {
            name: "Milk".to_string(),
            description: String::new(),
            price: Decimal::new(249, 2),
            stock: Decimal::from(30),
            unit: Unit::Liter,
            category_id: CategoryId::new(2),
            image_url: String::new(),
        }
    }

    fn recipe_request() -> RecipeCreateRequest {
        RecipeCreateRequest {
            name: "Pancakes".to_string(),
            description: String::new(),
            instructions: "Mix and fry".to_string(),
            servings: 2,
            prep_time: 10,
            cook_time: 15,
            image_url: String::new(),
            ingredients: vec![RecipeIngredientRequest {
                product_id: ProductId::new(1),
                quantity: Decimal::from(200),
                unit: Unit::Gram,
                notes: String::new(),
            }],
        }
    }

    #[test]
    fn test_valid_product_passes() {
        assert!(validate_product(&product_request()).is_ok());
    }

    #[test]
    fn test_product_price_must_be_positive() {
        let mut req = product_request();
        req.price = Decimal::ZERO;
        let err = validate_product(&req).expect_err("zero price rejected");
        assert_eq!(err.to_string(), "Price must be greater than 0");
    }

    #[test]
    fn test_product_stock_cannot_be_negative() {
        let mut req = product_request();
        req.stock = Decimal::from(-1);
        let err = validate_product(&req).expect_err("negative stock rejected");
        assert_eq!(err.to_string(), "Stock cannot be negative");
    }

    #[test]
    fn test_product_requires_category() {
        let mut req = product_request();
        req.category_id = CategoryId::new(0);
        let err = validate_product(&req).expect_err("missing category rejected");
        assert_eq!(err.to_string(), "Please select a category");
    }

    #[test]
    fn test_category_name_required() {
        assert!(validate_category("Dairy").is_ok());
        assert!(validate_category("   ").is_err());
    }

    #[test]
    fn test_recipe_ingredient_checks_name_position() {
        let mut req = recipe_request();
        req.ingredients.push(RecipeIngredientRequest {
            product_id: ProductId::new(0),
            quantity: Decimal::ONE,
            unit: Unit::Gram,
            notes: String::new(),
        });
        let err = validate_recipe(&req).expect_err("unselected product rejected");
        assert_eq!(err.to_string(), "Select a product for ingredient 2");
    }

    #[test]
    fn test_recipe_servings_minimum() {
        let mut req = recipe_request();
        req.servings = 0;
        let err = validate_recipe(&req).expect_err("zero servings rejected");
        assert_eq!(err.to_string(), "Servings must be at least 1");
    }

    #[test]
    fn test_update_skips_absent_fields() {
        let req = ProductUpdateRequest::default();
        assert!(validate_product_update(&req).is_ok());

        let req = ProductUpdateRequest {
            price: Some(Decimal::ZERO),
            ..Default::default()
        };
        assert!(validate_product_update(&req).is_err());
    }
}
