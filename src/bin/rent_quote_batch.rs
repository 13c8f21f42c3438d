//! Price every quote request in a CSV file
//!
//! Input is `;`-separated with a header row naming the request fields
//! (property_type;bedrooms;has_garage;has_children;parking_slots;installments).
//! Missing columns take their defaults.

use anyhow::Context;
use clap::Parser;
use rayon::prelude::*;
use rent_budget::format::format_brl;
use rent_budget::pricing::read_requests;
use rent_budget::{PricingEngine, QuoteRecord, RateTable, Result};
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "rent_quote_batch", about = "Price a CSV file of rent quote requests")]
struct Args {
    /// CSV file of quote requests
    input: PathBuf,

    /// JSON file overriding the default rate table
    #[arg(long)]
    rates: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let rates = match &args.rates {
        Some(path) => RateTable::from_json_file(path)
            .with_context(|| format!("Failed to load rate table from {}", path.display()))?,
        None => RateTable::default(),
    };
    let engine = PricingEngine::new(rates);

    let file = File::open(&args.input)
        .with_context(|| format!("Failed to open {}", args.input.display()))?;
    let rows = read_requests(file);
    log::info!("Loaded {} requests in {:?}", rows.len(), start.elapsed());

    // Pricing is pure, so requests are independent
    let results: Vec<(String, Result<QuoteRecord>)> = rows
        .into_par_iter()
        .map(|row| match row {
            Ok(request) => {
                let result = engine.compute(&request);
                (request.property_type, result)
            }
            Err(err) => ("-".to_string(), Err(err)),
        })
        .collect();

    let mut priced = 0usize;
    for (line, (property_type, result)) in results.iter().enumerate() {
        match result {
            Ok(quote) => {
                priced += 1;
                println!(
                    "{:>4} | {:<12} | {} | {}x de {}",
                    line + 1,
                    quote.property_type(),
                    format_brl(quote.monthly_rent()),
                    quote.contract_installments(),
                    format_brl(quote.installment_amount())
                );
            }
            Err(err) => {
                log::warn!("Request {} ({}) rejected: {}", line + 1, property_type, err);
                println!("{:>4} | {:<12} | {}", line + 1, property_type, err);
            }
        }
    }

    println!(
        "\n{} priced, {} rejected in {:?}",
        priced,
        results.len() - priced,
        start.elapsed()
    );
    Ok(())
}
