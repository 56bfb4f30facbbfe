//! Shopping cart commands.
//!
//! Every mutation replaces the local cart store with the snapshot the
//! server returns, then renders from the store.

use clap::Subcommand;
use greenbasket_core::ProductId;
use rust_decimal::Decimal;

use crate::context::AppContext;
use crate::error::CliError;
use crate::output;

#[derive(Subcommand)]
pub enum CartAction {
    /// Show the current cart
    Show,
    /// Add a product to the cart
    Add {
        /// Product ID
        product: ProductId,

        /// Quantity in the product's unit
        #[arg(short, long, default_value = "1")]
        quantity: Decimal,
    },
    /// Change a cart line's quantity (0 removes it)
    Update {
        /// Product ID
        product: ProductId,

        /// New quantity
        quantity: Decimal,
    },
    /// Remove a product from the cart
    Remove {
        /// Product ID
        product: ProductId,
    },
    /// Empty the cart
    Clear,
}

pub async fn run(ctx: &AppContext, action: CartAction) -> Result<(), CliError> {
    // The cart belongs to the signed-in user; bail before any network call
    ctx.require_auth()?;

    match action {
        CartAction::Show => {
            let snapshot = ctx
                .api
                .cart()
                .await
                .map_err(|e| CliError::action(&e, "Failed to load cart"))?;
            ctx.cart.set(snapshot);
        }
        CartAction::Add { product, quantity } => {
            if quantity <= Decimal::ZERO {
                return Err(CliError::Message(
                    "Quantity must be greater than 0".to_owned(),
                ));
            }
            let snapshot = ctx
                .api
                .add_cart_item(product, quantity)
                .await
                .map_err(|e| CliError::action(&e, "Failed to add to cart"))?;
            ctx.cart.set(snapshot);
        }
        CartAction::Update { product, quantity } => {
            let snapshot = if quantity <= Decimal::ZERO {
                ctx.api.remove_cart_item(product).await
            } else {
                ctx.api.update_cart_item(product, quantity).await
            }
            .map_err(|e| CliError::action(&e, "Failed to update cart"))?;
            ctx.cart.set(snapshot);
        }
        CartAction::Remove { product } => {
            let snapshot = ctx
                .api
                .remove_cart_item(product)
                .await
                .map_err(|e| CliError::action(&e, "Failed to remove from cart"))?;
            ctx.cart.set(snapshot);
        }
        CartAction::Clear => {
            let snapshot = ctx
                .api
                .clear_cart()
                .await
                .map_err(|e| CliError::action(&e, "Failed to clear cart"))?;
            ctx.cart.set(snapshot);
        }
    }

    if let Some(snapshot) = ctx.cart.snapshot() {
        output::cart(&snapshot);
    }
    Ok(())
}
