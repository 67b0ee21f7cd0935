//! CLI command implementations.

pub mod account;
pub mod cart;
pub mod categories;
pub mod config;
pub mod orders;
pub mod product;
pub mod products;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Case-insensitive text matched against name and description.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Preset price range: 100k-1m, 1m-2m, 2m-3m, 3m-4m or 4m-5m.
    #[arg(short, long, conflicts_with_all = ["min", "max"])]
    pub bracket: Option<String>,

    /// Lowest price to include.
    #[arg(long)]
    pub min: Option<String>,

    /// Highest price to include.
    #[arg(long)]
    pub max: Option<String>,

    /// Sort order: none, lowest or highest.
    #[arg(short, long, default_value = "none")]
    pub sort: String,

    /// Only products in this category.
    #[arg(long)]
    pub category: Option<String>,

    /// Show only the first N results.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: String,
}

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {
    /// Show a single category from the list.
    pub id: Option<String>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart.
    Show,
    /// Add a product to the cart.
    Add {
        /// Product ID.
        product: String,
        /// Number of units.
        #[arg(short, long, default_value = "1")]
        quantity: i64,
    },
    /// Remove a cart line.
    Remove {
        /// Cart line ID.
        id: String,
    },
    /// Place an order for everything in the cart.
    Checkout,
}

/// Arguments for the orders command.
#[derive(Args)]
pub struct OrdersArgs {
    /// Show only the last N orders.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    #[arg(short, long)]
    pub email: String,

    #[arg(short, long)]
    pub password: String,
}

/// Arguments for the register command.
#[derive(Args)]
pub struct RegisterArgs {
    #[arg(short, long)]
    pub name: String,

    #[arg(short, long)]
    pub email: String,

    #[arg(short, long)]
    pub password: String,

    /// Phone number.
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Shipping address.
    #[arg(long, default_value = "")]
    pub address: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the configuration.
    Validate,
}
