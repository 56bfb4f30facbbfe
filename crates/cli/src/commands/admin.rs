//! Back-office commands.
//!
//! All input is validated locally before anything is sent, so a typo'd
//! form never reaches the server. The role check happens up front too.

use clap::Subcommand;
use greenbasket_client::validate;
use greenbasket_core::{
    CategoryCreateRequest, CategoryId, ProductCreateRequest, ProductId, ProductUpdateRequest,
    RecipeCreateRequest, RecipeId, RecipeIngredientRequest, Role, Unit, UserId,
};
use rust_decimal::Decimal;

use crate::context::AppContext;
use crate::error::CliError;
use crate::output;

#[derive(Subcommand)]
pub enum AdminAction {
    /// Manage user accounts
    Users {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Manage the product catalog
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Manage categories
    Categories {
        #[command(subcommand)]
        action: CategoryAction,
    },
    /// Manage recipes
    Recipes {
        #[command(subcommand)]
        action: RecipeAction,
    },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// List all accounts
    List,
    /// Change an account's role
    SetRole {
        /// User ID
        id: UserId,

        /// New role: "user" or "admin"
        role: Role,
    },
    /// Delete an account
    Delete {
        /// User ID
        id: UserId,
    },
}

#[derive(Subcommand)]
pub enum ProductAction {
    /// Create a product
    Create {
        #[arg(short, long)]
        name: String,

        #[arg(short, long, default_value = "")]
        description: String,

        #[arg(short, long)]
        price: Decimal,

        #[arg(short, long)]
        stock: Decimal,

        /// Unit of sale: g, kg, l, ml or pcs
        #[arg(short, long, default_value = "pcs")]
        unit: Unit,

        /// Category ID
        #[arg(short, long)]
        category: CategoryId,

        #[arg(long, default_value = "")]
        image_url: String,
    },
    /// Update a product (only the given fields change)
    Update {
        /// Product ID
        id: ProductId,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(short, long)]
        price: Option<Decimal>,

        #[arg(short, long)]
        stock: Option<Decimal>,

        #[arg(short, long)]
        unit: Option<Unit>,

        #[arg(short, long)]
        category: Option<CategoryId>,

        #[arg(long)]
        image_url: Option<String>,
    },
    /// Delete a product
    Delete {
        /// Product ID
        id: ProductId,
    },
}

#[derive(Subcommand)]
pub enum CategoryAction {
    /// Create a category
    Create {
        /// Category name
        name: String,
    },
    /// Rename a category
    Rename {
        /// Category ID
        id: CategoryId,

        /// New name
        name: String,
    },
    /// Delete a category
    Delete {
        /// Category ID
        id: CategoryId,
    },
}

#[derive(Subcommand)]
pub enum RecipeAction {
    /// Create a recipe
    Create {
        #[arg(short, long)]
        name: String,

        #[arg(short, long, default_value = "")]
        description: String,

        #[arg(short, long)]
        instructions: String,

        #[arg(long, default_value = "4")]
        servings: i32,

        /// Preparation time in minutes
        #[arg(long, default_value = "0")]
        prep_time: i32,

        /// Cooking time in minutes
        #[arg(long, default_value = "0")]
        cook_time: i32,

        /// Ingredient as "product_id:quantity:unit" or
        /// "product_id:quantity:unit:notes"; repeatable
        #[arg(long = "ingredient", value_parser = parse_ingredient, required = true)]
        ingredients: Vec<RecipeIngredientRequest>,
    },
    /// Delete a recipe
    Delete {
        /// Recipe ID
        id: RecipeId,
    },
}

pub async fn run(ctx: &AppContext, action: AdminAction) -> Result<(), CliError> {
    ctx.require_admin()?;

    match action {
        AdminAction::Users { action } => users(ctx, action).await,
        AdminAction::Products { action } => products(ctx, action).await,
        AdminAction::Categories { action } => categories(ctx, action).await,
        AdminAction::Recipes { action } => recipes(ctx, action).await,
    }
}

async fn users(ctx: &AppContext, action: UserAction) -> Result<(), CliError> {
    match action {
        UserAction::List => {
            let users = ctx
                .api
                .admin_users()
                .await
                .map_err(|e| CliError::action(&e, "Failed to load users"))?;
            for user in &users {
                output::user(user);
            }
        }
        UserAction::SetRole { id, role } => {
            let user = ctx
                .api
                .update_user_role(id, role)
                .await
                .map_err(|e| CliError::action(&e, "Failed to change role"))?;
            println!("Role updated:");
            output::user(&user);
        }
        UserAction::Delete { id } => {
            let response = ctx
                .api
                .delete_user(id)
                .await
                .map_err(|e| CliError::action(&e, "Failed to delete user"))?;
            println!("{}", response.message);
        }
    }
    Ok(())
}

async fn products(ctx: &AppContext, action: ProductAction) -> Result<(), CliError> {
    match action {
        ProductAction::Create {
            name,
            description,
            price,
            stock,
            unit,
            category,
            image_url,
        } => {
            let request = ProductCreateRequest {
                name,
                description,
                price,
                stock,
                unit,
                category_id: category,
                image_url,
            };
            validate::validate_product(&request)?;

            let product = ctx
                .api
                .create_product(&request)
                .await
                .map_err(|e| CliError::action(&e, "Failed to create product"))?;
            println!("Created:");
            output::product_detail(&product);
        }
        ProductAction::Update {
            id,
            name,
            description,
            price,
            stock,
            unit,
            category,
            image_url,
        } => {
            let request = ProductUpdateRequest {
                name,
                description,
                price,
                stock,
                unit,
                category_id: category,
                image_url,
            };
            validate::validate_product_update(&request)?;

            let product = ctx
                .api
                .update_product(id, &request)
                .await
                .map_err(|e| CliError::action(&e, "Failed to update product"))?;
            println!("Updated:");
            output::product_detail(&product);
        }
        ProductAction::Delete { id } => {
            let response = ctx
                .api
                .delete_product(id)
                .await
                .map_err(|e| CliError::action(&e, "Failed to delete product"))?;
            println!("{}", response.message);
        }
    }
    Ok(())
}

async fn categories(ctx: &AppContext, action: CategoryAction) -> Result<(), CliError> {
    match action {
        CategoryAction::Create { name } => {
            validate::validate_category(&name)?;
            let request = CategoryCreateRequest { name };
            let category = ctx
                .api
                .create_category(&request)
                .await
                .map_err(|e| CliError::action(&e, "Failed to create category"))?;
            output::category_line(&category);
        }
        CategoryAction::Rename { id, name } => {
            validate::validate_category(&name)?;
            let category = ctx
                .api
                .update_category(id, &name)
                .await
                .map_err(|e| CliError::action(&e, "Failed to rename category"))?;
            output::category_line(&category);
        }
        CategoryAction::Delete { id } => {
            let response = ctx
                .api
                .delete_category(id)
                .await
                .map_err(|e| CliError::action(&e, "Failed to delete category"))?;
            println!("{}", response.message);
        }
    }
    Ok(())
}

async fn recipes(ctx: &AppContext, action: RecipeAction) -> Result<(), CliError> {
    match action {
        RecipeAction::Create {
            name,
            description,
            instructions,
            servings,
            prep_time,
            cook_time,
            ingredients,
        } => {
            let request = RecipeCreateRequest {
                name,
                description,
                instructions,
                servings,
                prep_time,
                cook_time,
                image_url: String::new(),
                ingredients,
            };
            validate::validate_recipe(&request)?;

            let recipe = ctx
                .api
                .create_recipe(&request)
                .await
                .map_err(|e| CliError::action(&e, "Failed to create recipe"))?;
            println!("Created:");
            output::recipe_detail(&recipe);
        }
        RecipeAction::Delete { id } => {
            let response = ctx
                .api
                .delete_recipe(id)
                .await
                .map_err(|e| CliError::action(&e, "Failed to delete recipe"))?;
            println!("{}", response.message);
        }
    }
    Ok(())
}

/// Parses "product_id:quantity:unit" with an optional ":notes" tail.
fn parse_ingredient(value: &str) -> Result<RecipeIngredientRequest, String> {
    let mut parts = value.splitn(4, ':');
    let product_id = parts
        .next()
        .unwrap_or_default()
        .parse::<ProductId>()
        .map_err(|e| format!("bad product id: {e}"))?;
    let quantity = parts
        .next()
        .ok_or("missing quantity")?
        .parse::<Decimal>()
        .map_err(|e| format!("bad quantity: {e}"))?;
    let unit = parts
        .next()
        .ok_or("missing unit")?
        .parse::<Unit>()
        .map_err(|e| e.to_string())?;
    let notes = parts.next().unwrap_or_default().to_owned();
    Ok(RecipeIngredientRequest {
        product_id,
        quantity,
        unit,
        notes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ingredient_full() {
        let ing = parse_ingredient("3:250:g:sifted").expect("parses");
        assert_eq!(ing.product_id, ProductId::from(3));
        assert_eq!(ing.quantity, Decimal::new(250, 0));
        assert_eq!(ing.unit, Unit::Gram);
        assert_eq!(ing.notes, "sifted");
    }

    #[test]
    fn test_parse_ingredient_without_notes() {
        let ing = parse_ingredient("7:1.5:l").expect("parses");
        assert_eq!(ing.unit, Unit::Liter);
        assert_eq!(ing.notes, "");
    }

    #[test]
    fn test_parse_ingredient_rejects_garbage() {
        assert!(parse_ingredient("x:1:g").is_err());
        assert!(parse_ingredient("1").is_err());
        assert!(parse_ingredient("1:2:bags").is_err());
    }
}
