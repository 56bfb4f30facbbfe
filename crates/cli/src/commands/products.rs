//! Catalog browsing commands.

use clap::Subcommand;
use greenbasket_core::{CategoryId, ProductId};

use crate::context::AppContext;
use crate::error::CliError;
use crate::output;

#[derive(Subcommand)]
pub enum ProductsAction {
    /// List the full catalog
    List {
        /// Only show products in this category
        #[arg(short, long)]
        category: Option<CategoryId>,
    },
    /// Show one product
    Show {
        /// Product ID
        id: ProductId,
    },
    /// Search products by name
    Search {
        /// Search term
        query: String,
    },
}

pub async fn run(ctx: &AppContext, action: ProductsAction) -> Result<(), CliError> {
    match action {
        ProductsAction::List { category } => {
            let products = match category {
                Some(id) => ctx.api.products_by_category(id).await,
                None => ctx.api.products().await,
            }
            .map_err(|e| CliError::action(&e, "Failed to load products"))?;

            if products.is_empty() {
                println!("No products found.");
            }
            for product in &products {
                output::product_line(product);
            }
        }
        ProductsAction::Show { id } => {
            let product = ctx
                .api
                .product(id)
                .await
                .map_err(|e| CliError::action(&e, "Product not found"))?;
            output::product_detail(&product);
        }
        ProductsAction::Search { query } => {
            let products = ctx
                .api
                .search_products(&query)
                .await
                .map_err(|e| CliError::action(&e, "Search failed"))?;

            if products.is_empty() {
                println!("No products match \"{query}\".");
            }
            for product in &products {
                output::product_line(product);
            }
        }
    }
    Ok(())
}

pub async fn categories(ctx: &AppContext) -> Result<(), CliError> {
    let categories = ctx
        .api
        .categories()
        .await
        .map_err(|e| CliError::action(&e, "Failed to load categories"))?;
    for category in &categories {
        output::category_line(category);
    }
    Ok(())
}
