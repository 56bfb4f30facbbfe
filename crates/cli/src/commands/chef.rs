//! AI Chef commands.

use std::collections::HashSet;

use clap::Subcommand;
use greenbasket_core::{DishIngredients, DishRequest, ProductId, RecipeSuggestion};
use rust_decimal::Decimal;
use tracing::warn;

use crate::context::AppContext;
use crate::error::CliError;
use crate::output;

#[derive(Subcommand)]
pub enum ChefAction {
    /// Turn a dish name into a priced shopping list
    Dish {
        /// Name of the dish, e.g. "pancakes"
        name: String,

        /// Serving count (server defaults to 2)
        #[arg(short, long)]
        servings: Option<i32>,
    },
    /// Look up a dish and add its matched products to the cart
    AddDish {
        /// Name of the dish
        name: String,

        /// Serving count (server defaults to 2)
        #[arg(short, long)]
        servings: Option<i32>,
    },
    /// Suggest recipes from what is already in the cart
    FromCart {
        /// Add the Nth suggestion's ingredients to the cart (1-based)
        #[arg(short, long)]
        add: Option<usize>,
    },
    /// Suggest recipes from a product selection
    FromProducts {
        /// Product IDs to cook with
        #[arg(required = true)]
        products: Vec<ProductId>,

        /// Add the Nth suggestion's ingredients to the cart (1-based)
        #[arg(short, long)]
        add: Option<usize>,
    },
}

pub async fn run(ctx: &AppContext, action: ChefAction) -> Result<(), CliError> {
    ctx.require_auth()?;

    match action {
        ChefAction::Dish { name, servings } => {
            let dish = lookup_dish(ctx, name, servings).await?;
            render_dish(&dish);
        }
        ChefAction::AddDish { name, servings } => {
            let dish = lookup_dish(ctx, name, servings).await?;
            render_dish(&dish);
            add_matched_products(ctx, &dish).await;
            if let Some(snapshot) = ctx.cart.snapshot() {
                println!();
                output::cart(&snapshot);
            }
        }
        ChefAction::FromCart { add } => {
            let response = ctx
                .api
                .cart_to_recipes()
                .await
                .map_err(|e| CliError::action(&e, "Failed to get recipe suggestions"))?;
            if !response.cart_items.is_empty() {
                println!("Cooking with: {}", response.cart_items.join(", "));
                println!();
            }
            handle_suggestions(ctx, response.recipes, add).await?;
        }
        ChefAction::FromProducts { products, add } => {
            let suggestions = ctx
                .api
                .products_to_recipes(&products)
                .await
                .map_err(|e| CliError::action(&e, "Failed to get recipe suggestions"))?;
            handle_suggestions(ctx, suggestions, add).await?;
        }
    }
    Ok(())
}

async fn lookup_dish(
    ctx: &AppContext,
    name: String,
    servings: Option<i32>,
) -> Result<DishIngredients, CliError> {
    if name.trim().is_empty() {
        return Err(CliError::Message("Please enter a dish name".to_owned()));
    }
    let request = DishRequest {
        dish_name: name,
        servings,
    };
    ctx.api
        .dish_to_ingredients(&request)
        .await
        .map_err(|e| CliError::action(&e, "Failed to get ingredients for this dish"))
}

fn render_dish(dish: &DishIngredients) {
    println!("{} (serves {})", dish.dish_name, dish.servings);
    if !dish.description.is_empty() {
        println!("  {}", dish.description);
    }
    println!();
    println!("You will need:");
    for ingredient in &dish.required_ingredients {
        println!(
            "  {} {} {}",
            ingredient.quantity, ingredient.unit, ingredient.name
        );
    }
    println!();
    if dish.matched_products.is_empty() {
        println!("No matching products in the store.");
    } else {
        println!("In the store:");
        for product in &dish.matched_products {
            println!(
                "{:>5}  {:<30} {}/{}",
                product.id,
                product.name,
                output::price(product.price),
                product.unit
            );
        }
        println!("  Estimated total: {}", output::price(dish.total_price));
    }
    if !dish.cooking_tips.is_empty() {
        println!();
        println!("Tip: {}", dish.cooking_tips);
    }
}

/// Adds each matched product one by one, quantity 1, skipping duplicates
/// and carrying on past individual failures. The cart store tracks the
/// snapshot the server returns after every add.
async fn add_matched_products(ctx: &AppContext, dish: &DishIngredients) {
    let mut added: HashSet<ProductId> = HashSet::new();
    for product in &dish.matched_products {
        if !added.insert(product.id) {
            continue;
        }
        match ctx.api.add_cart_item(product.id, Decimal::ONE).await {
            Ok(snapshot) => {
                ctx.cart.set(snapshot);
                println!("  Added {}", product.name);
            }
            Err(e) => {
                warn!(product_id = %product.id, "Failed to add product: {e}");
                println!("  Could not add {}: {}", product.name, e.user_message("add failed"));
            }
        }
    }
}

async fn handle_suggestions(
    ctx: &AppContext,
    suggestions: Vec<RecipeSuggestion>,
    add: Option<usize>,
) -> Result<(), CliError> {
    if suggestions.is_empty() {
        println!("No suggestions this time.");
        return Ok(());
    }
    for (index, suggestion) in suggestions.iter().enumerate() {
        render_suggestion(index + 1, suggestion);
    }

    if let Some(choice) = add {
        let suggestion = choice
            .checked_sub(1)
            .and_then(|i| suggestions.get(i))
            .ok_or_else(|| {
                CliError::Message(format!(
                    "No suggestion number {choice}; pick 1 to {}",
                    suggestions.len()
                ))
            })?;
        let snapshot = ctx
            .api
            .add_suggestion_to_cart(suggestion)
            .await
            .map_err(|e| CliError::action(&e, "Failed to add suggestion to cart"))?;
        ctx.cart.set(snapshot);
        println!();
        println!("Added \"{}\" ingredients to your cart.", suggestion.name);
        if let Some(snapshot) = ctx.cart.snapshot() {
            output::cart(&snapshot);
        }
    }
    Ok(())
}

fn render_suggestion(number: usize, suggestion: &RecipeSuggestion) {
    println!(
        "{number}. {} (serves {}, prep {} min, cook {} min, {:.0}% match)",
        suggestion.name,
        suggestion.servings,
        suggestion.prep_time,
        suggestion.cook_time,
        suggestion.confidence * 100.0
    );
    if !suggestion.description.is_empty() {
        println!("   {}", suggestion.description);
    }
    for ingredient in &suggestion.ingredients {
        let marker = if ingredient.available { " " } else { "!" };
        println!(
            "   {} {} {} {}",
            marker, ingredient.quantity, ingredient.unit, ingredient.product_name
        );
    }
    println!("   Total: {}", output::price(suggestion.total_price));
    println!();
}
