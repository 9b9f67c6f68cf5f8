//! Command-line front end for the built-in registries and composers.
//!
//! `families`, `pay`, and `product` resolve a single family key and fail on
//! unknown keys. `coffee` and `frame` compose layers from a key list and skip
//! keys they do not recognize, warning about each one on stderr.

use anyhow::{Context, Result};
use capweave::beverage::resolve_menu;
use capweave::{
    Beverage, Component, CompositionPlan, ConcreteComponent, frame_composer, logging,
    payment_registry, product_registry, split_list,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing::warn;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

#[derive(Parser)]
#[command(name = "capweave", version, about = "Resolve family keys and compose add-on chains")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the registered payment gateways and product kinds.
    Families,
    /// Process a charge through one gateway family.
    Pay {
        gateway: String,
        #[arg(long)]
        amount: f64,
        #[arg(long, value_enum, default_value_t = Plan::Both)]
        plan: Plan,
    },
    /// Run the creator for one product kind.
    Product { kind: String },
    /// Price a coffee with add-ons applied in the given order.
    Coffee {
        /// Add-on keys; comma- or space-separated lists are split.
        add_ons: Vec<String>,
        /// Menu file to use instead of $CAPWEAVE_MENU or the built-in menu.
        #[arg(long)]
        menu: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Frame the plain component with the given decorator keys.
    Frame { keys: Vec<String> },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Plan {
    OneTime,
    Subscription,
    Both,
}

#[derive(Serialize)]
struct CoffeeReport {
    description: String,
    cost: f64,
    #[serde(flatten)]
    plan: CompositionPlan,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init()?;

    match cli.command {
        Command::Families => list_families(),
        Command::Pay {
            gateway,
            amount,
            plan,
        } => pay(&gateway, amount, plan),
        Command::Product { kind } => product(&kind),
        Command::Coffee {
            add_ons,
            menu,
            json,
        } => coffee(&add_ons, menu, json),
        Command::Frame { keys } => frame(&keys),
    }
}

fn list_families() -> Result<()> {
    let payments = payment_registry()?;
    let products = product_registry()?;
    println!("payments: {}", payments.keys().collect::<Vec<_>>().join(", "));
    println!("products: {}", products.keys().collect::<Vec<_>>().join(", "));
    Ok(())
}

fn pay(gateway: &str, amount: f64, plan: Plan) -> Result<()> {
    let family = payment_registry()?
        .create_family(gateway)
        .context("unsupported payment gateway")?;
    if plan != Plan::Subscription {
        println!("{}", family.one_time.process(amount));
    }
    if plan != Plan::OneTime {
        println!("{}", family.subscription.process(amount));
    }
    Ok(())
}

fn product(kind: &str) -> Result<()> {
    let creator = product_registry()?
        .create_family(kind)
        .context("unsupported product")?;
    println!("{}", creator.some_operation());
    Ok(())
}

fn coffee(raw_add_ons: &[String], menu_path: Option<PathBuf>, json: bool) -> Result<()> {
    let menu = resolve_menu(menu_path.as_deref())?;
    let composer = menu.composer()?;
    let add_ons: Vec<String> = raw_add_ons.iter().flat_map(|raw| split_list(raw)).collect();

    let plan = composer.plan(&add_ons);
    for key in &plan.skipped {
        warn!(key = %key, "ignoring unknown add-on");
    }

    let drink = composer.compose(menu.base(), &add_ons);
    if json {
        let report = CoffeeReport {
            description: drink.description(),
            cost: drink.cost(),
            plan,
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{} => Cost: ${}", drink.description(), drink.cost());
    }
    Ok(())
}

fn frame(keys: &[String]) -> Result<()> {
    let composer = frame_composer()?;
    let plan = composer.plan(keys);
    for key in &plan.skipped {
        warn!(key = %key, "ignoring unknown frame");
    }
    let framed = composer.compose(Box::new(ConcreteComponent), keys);
    println!("RESULT: {}", framed.operation());
    Ok(())
}
