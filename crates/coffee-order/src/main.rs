//! # Coffee Order CLI
//!
//! A text front-end over [`OrderStore`](coffee_order::store::OrderStore): each subcommand
//! drives the same store operations a UI screen would.
//!
//! ```bash
//! coffee-order list
//! coffee-order add --name Martin --coffee "Latté" --size Large
//! coffee-order edit 7 --size Small
//! coffee-order --env prod delete 7
//! RUST_LOG=debug coffee-order show 7
//! ```

use clap::{Parser, Subcommand};
use coffee_order::config::{AppEnvironment, ClientConfig, ConfigError};
use coffee_order::lifecycle::OrderApp;
use coffee_order::model::{format_created_at, CoffeeName, CoffeeSize, OrderId};
use rest_framework::tracing::setup_tracing;
use tracing::{error, info, Instrument};

#[derive(Parser)]
#[command(name = "coffee-order")]
#[command(about = "List, place, edit and delete coffee orders")]
struct Cli {
    /// Target environment (dev, test, prod). Overrides `ENV`.
    #[arg(long, global = true, value_parser = AppEnvironment::parse)]
    env: Option<AppEnvironment>,

    /// Backend base URL. Overrides `COFFEE_ORDER_BASE_URL` and the environment default.
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every order.
    List,
    /// Print one order in detail.
    Show { id: i64 },
    /// Place a new order.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, value_parser = parse_coffee, default_value = "Espresso")]
        coffee: CoffeeName,
        #[arg(long, value_parser = parse_size, default_value = "Medium")]
        size: CoffeeSize,
    },
    /// Change an existing order. Omitted fields keep their current value.
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, value_parser = parse_coffee)]
        coffee: Option<CoffeeName>,
        #[arg(long, value_parser = parse_size)]
        size: Option<CoffeeSize>,
    },
    /// Delete an order.
    Delete { id: i64 },
}

fn parse_coffee(tag: &str) -> Result<CoffeeName, String> {
    CoffeeName::from_tag(tag).ok_or_else(|| {
        let menu: Vec<&str> = CoffeeName::ALL.iter().map(|c| c.as_str()).collect();
        format!("unknown coffee '{}' (expected one of: {})", tag, menu.join(", "))
    })
}

fn parse_size(tag: &str) -> Result<CoffeeSize, String> {
    CoffeeSize::from_tag(tag).ok_or_else(|| {
        let sizes: Vec<&str> = CoffeeSize::ALL.iter().map(|s| s.as_str()).collect();
        format!("unknown size '{}' (expected one of: {})", tag, sizes.join(", "))
    })
}

/// Env vars first, then `--env` (which resets the base URL to that environment's
/// default), then `--base-url`.
fn resolve_config(cli: &Cli) -> Result<ClientConfig, ConfigError> {
    let mut config = ClientConfig::from_env()?;
    if let Some(environment) = cli.env {
        config = ClientConfig::for_environment(environment)?.with_currency(config.currency);
    }
    if let Some(raw) = &cli.base_url {
        config = config.with_base_url(raw)?;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let cli = Cli::parse();
    let config = resolve_config(&cli).map_err(|e| e.to_string())?;
    let mut app = OrderApp::new(config);

    let span = tracing::info_span!("command", environment = %app.config.environment);
    run(&mut app, cli.command).instrument(span).await
}

async fn run(app: &mut OrderApp, command: Command) -> Result<(), String> {
    match command {
        Command::List => {
            load(app).await?;
            if app.store.orders().is_empty() {
                println!("No orders available!");
            }
            for order in app.store.orders() {
                println!("{}", app.row(order));
            }
        }

        Command::Show { id } => {
            load(app).await?;
            let order = app
                .store
                .find(OrderId(id))
                .ok_or_else(|| format!("Order {} not found", id))?;
            println!("Order #{}", id);
            println!("  Name:     {}", order.name);
            println!("  Coffee:   {}", order.coffee_name);
            println!("  Size:     {}", order.size);
            println!("  Total:    {}", app.display_total(order.total));
            println!("  Created:  {}", format_created_at(&order.created_at));
        }

        Command::Add { name, coffee, size } => {
            app.store.reset_form();
            app.store.form.name = name;
            app.store.form.coffee_name = coffee;
            app.store.form.size = size;
            validate(app)?;

            info!(price = app.store.price(), "Placing order");
            let created = app.store.submit().await.map_err(|e| {
                error!(error = %e, "Placing order failed");
                e.to_string()
            })?;
            println!("{}", app.row(&created));
        }

        Command::Edit {
            id,
            name,
            coffee,
            size,
        } => {
            load(app).await?;
            let current = app
                .store
                .find(OrderId(id))
                .cloned()
                .ok_or_else(|| format!("Order {} not found", id))?;

            app.store.begin_edit(&current);
            if let Some(name) = name {
                app.store.form.name = name;
            }
            if let Some(coffee) = coffee {
                app.store.form.coffee_name = coffee;
            }
            if let Some(size) = size {
                app.store.form.size = size;
            }
            validate(app)?;

            let updated = app.store.save_edit().await.map_err(|e| {
                error!(error = %e, order_id = id, "Updating order failed");
                e.to_string()
            })?;
            println!("{}", app.row(&updated));
        }

        Command::Delete { id } => {
            load(app).await?;
            app.store.remove(OrderId(id)).await.map_err(|e| {
                error!(error = %e, order_id = id, "Deleting order failed");
                e.to_string()
            })?;
            println!("Order {} deleted", id);
        }
    }
    Ok(())
}

async fn load(app: &mut OrderApp) -> Result<(), String> {
    app.store.load().await;
    match app.store.error_message() {
        Some(message) => Err(message.to_string()),
        None => Ok(()),
    }
}

fn validate(app: &mut OrderApp) -> Result<(), String> {
    if app.store.validate() {
        return Ok(());
    }
    Err(app
        .store
        .validation_error()
        .unwrap_or_default()
        .to_string())
}
