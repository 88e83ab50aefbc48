use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::bail;
use clap::Parser;
use rand::Rng;
use serde::{Deserialize, Serialize};

extern crate consist_core;
use consist_core::prelude::*;

/// Assembles a random freight consist behind a Big Boy and loads cargo into it.
/// After running `cargo build --release`, run with
/// ```bash
/// ./target/release/consist-cli --seed 4004 --cargo 220000 --car-type gondola
/// ```
/// To slow loading down for a demonstration, add `--load-delay-ms 50`.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct ConsistCliApi {
    #[clap(long, value_parser)]
    /// Seed for a reproducible consist; drawn at random if omitted
    seed: Option<u64>,
    #[clap(long, value_parser)]
    /// Consist number; drawn from 0..=9999 if omitted
    consist_number: Option<u32>,
    #[clap(long, value_parser, default_value_t = 4004)]
    /// Road number of the lead locomotive
    loco_number: u32,
    #[clap(long, value_parser)]
    /// Path to random consist config file (yaml or json)
    config: Option<PathBuf>,
    #[clap(long, value_parser, allow_hyphen_values = true, default_value_t = 500_000.)]
    /// Cargo mass to load (kg)
    cargo: f64,
    #[clap(long, value_parser)]
    /// Only load cars of this type, e.g. `gondola`
    car_type: Option<CarType>,
    #[clap(long, value_parser, default_value_t = 0)]
    /// Pause after each loaded car (ms)
    load_delay_ms: u64,
    #[clap(long, value_parser)]
    /// How to return results: `text`, `json`, or `yaml`
    res_fmt: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
struct LoadResults {
    seed: u64,
    cargo_remaining_kg: f64,
    summary: ConsistSummary,
}

pub fn main() -> anyhow::Result<()> {
    let api = ConsistCliApi::parse();
    let res_fmt = api.res_fmt.unwrap_or_else(|| String::from("text"));
    if !["text", "json", "yaml"].contains(&res_fmt.as_str()) {
        bail!("Invalid option `{}` for `--res-fmt`", res_fmt);
    }
    if !(api.cargo.is_finite() && api.cargo >= 0.) {
        bail!("Invalid value `{}` for `--cargo`, expected a non-negative mass", api.cargo);
    }

    let seed = api.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {seed}");
    let mut rng = seeded_rng(seed);
    let config = match &api.config {
        Some(config_file) => RandomConsistConfig::from_file(config_file)?,
        None => RandomConsistConfig::default(),
    };
    let number = api
        .consist_number
        .unwrap_or_else(|| rng.gen_range(0..=9999));
    let mut consist = random_consist(
        Locomotive::big_boy(api.loco_number),
        number,
        &config,
        &mut rng,
    )?;

    let text = res_fmt == "text";
    if text {
        println!("{consist}");
        println!();
        println!("Consist Length: {:.2}[m]", consist.length().get::<si::meter>());
        println!("Consist Weight: {:.3}[kg]", consist.weight().get::<si::kilogram>());
        println!();
        match api.car_type {
            Some(car_type) => println!("Loading {:.3}[kg] in {car_type} cars only...", api.cargo),
            None => println!("Loading {:.3}[kg]...", api.cargo),
        }
    }

    let delay = Duration::from_millis(api.load_delay_ms);
    let remaining = distribute_cargo_with(
        api.cargo * uc::KG,
        &mut consist,
        api.car_type,
        |i, car| {
            if text {
                eprintln!("[{i}] {car}");
            }
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        },
    );

    let results = LoadResults {
        seed,
        cargo_remaining_kg: remaining.get::<si::kilogram>(),
        summary: consist.summary(),
    };
    match res_fmt.as_str() {
        "json" => println!("{}", serde_json::to_string(&results)?),
        "yaml" => print!("{}", serde_yaml::to_string(&results)?),
        _ => {
            println!(
                "Cargo remaining after consist load: {:.3}[kg]",
                results.cargo_remaining_kg
            );
            println!();
            for car in &results.summary.cars {
                println!("{car}");
            }
            println!();
            println!(
                "After loading, consist weighs: {:.3}[kg]",
                results.summary.weight_kilograms
            );
            println!("Seed: {seed}");
        }
    }
    Ok(())
}
