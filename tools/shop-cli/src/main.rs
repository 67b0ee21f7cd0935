//! Shop CLI - browse the catalog and manage the cart from a terminal.
//!
//! Commands:
//! - `shop products` - List products with search, price range and sort
//! - `shop product` - Show one product
//! - `shop categories` - List categories
//! - `shop cart` - Show and edit the cart, or check out
//! - `shop orders` - List orders
//! - `shop login` / `shop register` - Customer accounts
//! - `shop config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    CartArgs, CategoriesArgs, ConfigArgs, LoginArgs, OrdersArgs, ProductArgs, ProductsArgs,
    RegisterArgs,
};
use shop_observability::LogLevel;

/// Shop CLI - browse products and manage your cart
#[derive(Parser)]
#[command(name = "shop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products(ProductsArgs),

    /// Show a single product
    Product(ProductArgs),

    /// List categories
    Categories(CategoriesArgs),

    /// Show or edit the cart
    Cart(CartArgs),

    /// List orders
    Orders(OrdersArgs),

    /// Sign in as a customer
    Login(LoginArgs),

    /// Create a customer account
    Register(RegisterArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let mut log = ctx.config.log;
    if cli.verbose {
        log.level = log.level.min(LogLevel::Debug);
    }
    shop_observability::init(log);

    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Product(args) => commands::product::run(args, &ctx).await,
        Commands::Categories(args) => commands::categories::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Orders(args) => commands::orders::run(args, &ctx).await,
        Commands::Login(args) => commands::account::login(args, &ctx).await,
        Commands::Register(args) => commands::account::register(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
