//! Recipe browsing and the servings-scaled add-to-cart flow.

use clap::Subcommand;
use greenbasket_core::RecipeId;

use crate::context::AppContext;
use crate::error::CliError;
use crate::output;

#[derive(Subcommand)]
pub enum RecipesAction {
    /// List all recipes
    List,
    /// Show a recipe with its ingredients and instructions
    Show {
        /// Recipe ID
        id: RecipeId,
    },
    /// Search recipes by name
    Search {
        /// Search term
        query: String,
    },
    /// Price a recipe's ingredients for a serving count
    Calculate {
        /// Recipe ID
        id: RecipeId,

        /// Serving count to scale to
        #[arg(short, long)]
        servings: Option<i32>,
    },
    /// Add a recipe's ingredients to the cart
    AddToCart {
        /// Recipe ID
        id: RecipeId,

        /// Serving count to scale to
        #[arg(short, long)]
        servings: Option<i32>,
    },
}

pub async fn run(ctx: &AppContext, action: RecipesAction) -> Result<(), CliError> {
    match action {
        RecipesAction::List => {
            let recipes = ctx
                .api
                .recipes()
                .await
                .map_err(|e| CliError::action(&e, "Failed to load recipes"))?;
            for recipe in &recipes {
                output::recipe_line(recipe);
            }
        }
        RecipesAction::Show { id } => {
            let recipe = ctx
                .api
                .recipe(id)
                .await
                .map_err(|e| CliError::action(&e, "Recipe not found"))?;
            output::recipe_detail(&recipe);
        }
        RecipesAction::Search { query } => {
            let recipes = ctx
                .api
                .search_recipes(&query)
                .await
                .map_err(|e| CliError::action(&e, "Search failed"))?;
            if recipes.is_empty() {
                println!("No recipes match \"{query}\".");
            }
            for recipe in &recipes {
                output::recipe_line(recipe);
            }
        }
        RecipesAction::Calculate { id, servings } => {
            let servings = resolve_servings(ctx, id, servings).await?;
            let calc = ctx
                .api
                .calculate_recipe(id, servings)
                .await
                .map_err(|e| CliError::action(&e, "Failed to calculate recipe"))?;
            output::calculation(&calc);
        }
        RecipesAction::AddToCart { id, servings } => {
            ctx.require_auth()?;

            let servings = resolve_servings(ctx, id, servings).await?;
            let snapshot = ctx
                .api
                .add_recipe_to_cart(id, servings)
                .await
                .map_err(|e| CliError::action(&e, "Failed to add recipe to cart"))?;
            ctx.cart.set(snapshot);

            println!("Recipe added for {servings} serving(s).");
            if let Some(snapshot) = ctx.cart.snapshot() {
                output::cart(&snapshot);
            }
        }
    }
    Ok(())
}

/// Uses the recipe's own serving count when none was given.
async fn resolve_servings(
    ctx: &AppContext,
    id: RecipeId,
    servings: Option<i32>,
) -> Result<i32, CliError> {
    match servings {
        Some(s) if s >= 1 => Ok(s),
        Some(_) => Err(CliError::Message("Servings must be at least 1".to_owned())),
        None => {
            let recipe = ctx
                .api
                .recipe(id)
                .await
                .map_err(|e| CliError::action(&e, "Recipe not found"))?;
            Ok(recipe.servings.max(1))
        }
    }
}
