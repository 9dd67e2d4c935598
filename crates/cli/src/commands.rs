//! Argument parsing and command dispatch.

use std::io::Write;

use anyhow::Context;
use clap::{Parser, Subcommand};

use pizzeria_assembly::AssemblyLine;
use pizzeria_core::{ProductKind, Variant};
use pizzeria_observability::LogFormat;

use crate::render;

/// Sample orders replayed by `pizzeria demo`.
const DEMO_ORDERS: [(ProductKind, Variant); 3] = [
    (ProductKind::Basic, Variant::NewYork),
    (ProductKind::Mixed, Variant::NewYork),
    (ProductKind::Shellfish, Variant::Chicago),
];

#[derive(Debug, Parser)]
#[command(name = "pizzeria", version, about = "Assemble regional pizzas on a fixed line")]
pub struct Cli {
    /// Log output format (overrides PIZZERIA_LOG_FORMAT).
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Assemble one product.
    Order {
        /// basic|primary|shellfish|mixed (or cheese|pepperoni|clam|veggie).
        kind: ProductKind,
        /// new-york|chicago.
        variant: Variant,
        /// Print the product as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List every registered (variant, kind) pair.
    Menu,
    /// Run the three sample orders.
    Demo,
}

/// Execute `cli` against a standard line, writing results to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let line = AssemblyLine::standard();

    match &cli.command {
        Command::Order {
            kind,
            variant,
            json,
        } => {
            let product = line
                .process(*kind, *variant)
                .with_context(|| format!("could not assemble {kind} for {variant}"))?;
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&product)?)?;
            } else {
                writeln!(out, "{}", render::summary(&product))?;
                writeln!(out, "{}", render::describe(&product))?;
            }
        }
        Command::Menu => {
            for (kind, variant) in line.registry().combinations() {
                writeln!(
                    out,
                    "{:<10} {:<10} {} {}",
                    variant.as_str(),
                    kind.as_str(),
                    variant.style(),
                    kind.label()
                )?;
            }
        }
        Command::Demo => {
            for result in line.process_all(DEMO_ORDERS) {
                let product = result.context("demo order failed")?;
                writeln!(out, "{}", render::describe(&product))?;
            }
        }
    }

    Ok(())
}
