//! Greenbasket CLI - terminal storefront for the grocery store API.
//!
//! # Usage
//!
//! ```bash
//! # Sign in and browse
//! greenbasket login -e you@example.com -p secret1
//! greenbasket products list
//! greenbasket products search milk
//!
//! # Shop
//! greenbasket cart add 42 --quantity 2
//! greenbasket cart show
//!
//! # Cook
//! greenbasket recipes calculate 3 --servings 4
//! greenbasket chef dish "pancakes" --servings 2
//! greenbasket chef add-dish "pancakes"
//!
//! # Back-office (admin role required)
//! greenbasket admin products create --name Milk --price 2.49 --stock 30 --unit l --category 2
//! ```
//!
//! # Commands
//!
//! - `register` / `login` / `logout` / `whoami` - session management
//! - `products` / `categories` - catalog browsing
//! - `cart` - shopping cart
//! - `recipes` - recipe browsing and servings scaling
//! - `chef` - AI Chef assistant
//! - `admin` - back-office CRUD

#![cfg_attr(not(test), forbid(unsafe_code))]
// The CLI's whole purpose is rendering to stdout
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;
mod context;
mod error;
mod output;

use commands::admin::AdminAction;
use commands::cart::CartAction;
use commands::chef::ChefAction;
use commands::products::ProductsAction;
use commands::recipes::RecipesAction;
use context::AppContext;

#[derive(Parser)]
#[command(name = "greenbasket")]
#[command(author, version, about = "Greenbasket grocery store client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and sign in
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password (at least 6 characters)
        #[arg(short, long)]
        password: String,
    },
    /// Sign in with email and password
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Sign out and forget the stored session
    Logout,
    /// Show the signed-in user's profile
    Whoami,
    /// Browse the product catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// List product categories
    Categories,
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Browse recipes and add them to the cart
    Recipes {
        #[command(subcommand)]
        action: RecipesAction,
    },
    /// AI Chef assistant
    Chef {
        #[command(subcommand)]
        action: ChefAction,
    },
    /// Back-office management (admin role required)
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), error::CliError> {
    let ctx = AppContext::from_env()?;

    match cli.command {
        Commands::Register {
            name,
            email,
            password,
        } => commands::auth::register(&ctx, name, email, password).await?,
        Commands::Login { email, password } => commands::auth::login(&ctx, email, password).await?,
        Commands::Logout => commands::auth::logout(&ctx),
        Commands::Whoami => commands::auth::whoami(&ctx).await?,
        Commands::Products { action } => commands::products::run(&ctx, action).await?,
        Commands::Categories => commands::products::categories(&ctx).await?,
        Commands::Cart { action } => commands::cart::run(&ctx, action).await?,
        Commands::Recipes { action } => commands::recipes::run(&ctx, action).await?,
        Commands::Chef { action } => commands::chef::run(&ctx, action).await?,
        Commands::Admin { action } => commands::admin::run(&ctx, action).await?,
    }
    Ok(())
}
