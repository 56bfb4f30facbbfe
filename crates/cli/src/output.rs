//! Rendering helpers for terminal output.

use greenbasket_core::{CartItem, CartSnapshot, Category, Product, Recipe, RecipeCalculation, User};
use rust_decimal::Decimal;

/// Formats a price with two decimal places and a currency marker.
pub fn price(value: Decimal) -> String {
    format!("${:.2}", value.round_dp(2))
}

pub fn user(user: &User) {
    println!("{} <{}> [{}] (id {})", user.name, user.email, user.role, user.id);
}

pub fn product_line(product: &Product) {
    println!(
        "{:>5}  {:<30} {:>10}/{}  stock: {}",
        product.id,
        product.name,
        price(product.price),
        product.unit,
        product.stock,
    );
}

pub fn product_detail(product: &Product) {
    println!("{} (id {})", product.name, product.id);
    if !product.description.is_empty() {
        println!("  {}", product.description);
    }
    println!("  Price: {} per {}", price(product.price), product.unit);
    println!("  In stock: {} {}", product.stock, product.unit);
    if let Some(category_id) = product.category_id {
        println!("  Category: {category_id}");
    }
}

pub fn category_line(category: &Category) {
    println!("{:>5}  {}", category.id, category.name);
}

pub fn cart(snapshot: &CartSnapshot) {
    if snapshot.items.is_empty() {
        println!("Your cart is empty.");
        return;
    }
    for item in &snapshot.items {
        println!("{}", cart_line(item));
    }
    println!();
    println!(
        "  {} item(s), total {}",
        snapshot.item_count,
        price(snapshot.total_price)
    );
}

/// One cart line, keyed by product ID since that is what `cart update`
/// and `cart remove` take.
fn cart_line(item: &CartItem) -> String {
    format!(
        "{:>5}  {:<30} {:>8} {} x {} = {}",
        item.product_id,
        item.product_name,
        item.quantity,
        item.unit,
        price(item.price),
        price(item.subtotal),
    )
}

pub fn recipe_line(recipe: &Recipe) {
    let tag = if recipe.is_ai_generated { " [AI]" } else { "" };
    println!(
        "{:>5}  {:<30} serves {}{}",
        recipe.id, recipe.name, recipe.servings, tag
    );
}

pub fn recipe_detail(recipe: &Recipe) {
    println!("{} (id {})", recipe.name, recipe.id);
    if !recipe.description.is_empty() {
        println!("  {}", recipe.description);
    }
    println!(
        "  Serves {}, prep {} min, cook {} min",
        recipe.servings, recipe.prep_time, recipe.cook_time
    );
    if !recipe.ingredients.is_empty() {
        println!("  Ingredients:");
        for ingredient in &recipe.ingredients {
            let name = ingredient
                .product
                .as_ref()
                .map_or("(unknown product)", |p| p.name.as_str());
            println!("    {} {} {}", ingredient.quantity, ingredient.unit, name);
        }
    }
    println!();
    println!("{}", recipe.instructions);
}

pub fn calculation(calc: &RecipeCalculation) {
    println!("For {} serving(s):", calc.servings);
    for ingredient in &calc.ingredients {
        let marker = if ingredient.available { " " } else { "!" };
        println!(
            "  {} {:<30} {:>8} {}  {}",
            marker,
            ingredient.product_name,
            ingredient.quantity,
            ingredient.unit,
            price(ingredient.price),
        );
    }
    println!("  Total: {}", price(calc.total_price));
    if calc.ingredients.iter().any(|i| !i.available) {
        println!("  (! marks ingredients currently out of stock)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenbasket_core::{ProductId, Unit};

    #[test]
    fn test_cart_line_keys_on_product_id() {
        let item = CartItem {
            id: None,
            product_id: ProductId::new(42),
            product_name: "Milk".to_string(),
            price: Decimal::new(249, 2),
            quantity: Decimal::from(2),
            unit: Unit::Liter,
            subtotal: Decimal::new(498, 2),
        };
        let line = cart_line(&item);
        assert!(line.starts_with("   42  "));
        assert!(line.contains("Milk"));
        assert!(line.ends_with("2 l x $2.49 = $4.98"));
    }

    #[test]
    fn test_price_rounds_to_two_decimals() {
        assert_eq!(price(Decimal::new(2499, 3)), "$2.50");
        assert_eq!(price(Decimal::ZERO), "$0.00");
    }
}
