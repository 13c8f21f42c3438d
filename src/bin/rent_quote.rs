//! Price a single rent quote and optionally export its 12-month schedule

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Parser;
use rent_budget::schedule::{export_schedule, generate, schedule_file_name};
use rent_budget::pricing::parse_answer;
use rent_budget::{PricingEngine, QuoteRequest, RateTable};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "rent_quote", about = "Orçamento de aluguel (Apartamento, Casa ou Estudio)")]
struct Args {
    /// Property type: Apartamento, Casa or Estudio
    #[arg(short = 't', long)]
    property_type: String,

    /// Bedrooms (1 or 2, apartments and houses)
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    bedrooms: i32,

    /// Include a garage (apartments and houses)
    #[arg(short, long)]
    garage: bool,

    /// Children in the household (apartments): sim/nao
    #[arg(short, long, value_parser = parse_answer)]
    children: Option<bool>,

    /// Parking slots (studios)
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    slots: i32,

    /// Contract installments (1 to 5)
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    installments: i32,

    /// JSON file overriding the default rate table
    #[arg(long)]
    rates: Option<PathBuf>,

    /// Reference date for the schedule (YYYY-MM-DD, default today)
    #[arg(long)]
    anchor: Option<NaiveDate>,

    /// Export the 12-month schedule to this CSV file
    #[arg(short, long)]
    export: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rates = match &args.rates {
        Some(path) => RateTable::from_json_file(path)
            .with_context(|| format!("Failed to load rate table from {}", path.display()))?,
        None => RateTable::default(),
    };
    let engine = PricingEngine::new(rates);

    let request = QuoteRequest {
        property_type: args.property_type,
        bedrooms: args.bedrooms,
        has_garage: args.garage,
        has_children: args.children,
        parking_slots: args.slots,
        installments: args.installments,
    };
    let quote = engine.compute(&request)?;

    println!("{}", quote);

    if let Some(raw_name) = args.export {
        let anchor = args.anchor.unwrap_or_else(|| Local::now().date_naive());
        let schedule = generate(&quote, anchor);
        let file_name = schedule_file_name(&raw_name);
        export_schedule(&file_name, &schedule)
            .with_context(|| format!("Falha ao gerar CSV: {}", file_name))?;
        println!("\nCSV gerado com sucesso: {}", file_name);
    }

    Ok(())
}
