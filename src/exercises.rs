//! Subcommand dispatch
//!
//! Each exercise writes to the given sink so the binary can hand in a locked
//! stdout and tests can hand in a `Vec<u8>`.

use std::io::Write;

use tracing::{debug, info};

use crate::animals::{self, habitat, legs, record};
use crate::car;
use crate::cli::{Commands, Schema};
use crate::config_file::SessionConfig;
use crate::error::Result;
use crate::tutorial::{self, random};

pub fn run<W: Write>(command: &Commands, config: &SessionConfig, out: &mut W) -> Result<()> {
    debug!(?command, "dispatching");
    match command {
        Commands::Animals { schema } => run_animals(out, *schema),
        Commands::Records { json } => run_records(out, *json),
        Commands::Car { brand } => {
            let brand = brand.as_deref().unwrap_or(&config.car_brand);
            run_car(out, brand)
        }
        Commands::DataTypes => run_data_types(out, config),
        Commands::All => run_all(out, config),
    }
}

pub fn run_animals<W: Write>(out: &mut W, schema: Schema) -> Result<()> {
    info!(%schema, "printing animals");
    match schema {
        Schema::Habitat => animals::print_all(out, &habitat::samples()),
        Schema::Legs => animals::print_all(out, &legs::samples()),
    }
}

pub fn run_records<W: Write>(out: &mut W, json: bool) -> Result<()> {
    let records = record::samples();
    if json {
        record::print_json(out, &records)
    } else {
        animals::print_all(out, &records)
    }
}

pub fn run_car<W: Write>(out: &mut W, brand: &str) -> Result<()> {
    car::run_demo(out, brand).map(|_| ())
}

pub fn run_data_types<W: Write>(out: &mut W, config: &SessionConfig) -> Result<()> {
    let mut rng = random::generator(config.seed);
    tutorial::run(out, &mut rng, config.random_range())
}

fn run_all<W: Write>(out: &mut W, config: &SessionConfig) -> Result<()> {
    run_animals(out, Schema::Habitat)?;
    writeln!(out)?;
    run_animals(out, Schema::Legs)?;
    writeln!(out)?;
    run_records(out, false)?;
    writeln!(out)?;
    run_car(out, &config.car_brand)?;
    writeln!(out)?;
    run_data_types(out, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(command: Commands, config: &SessionConfig) -> String {
        let mut out = Vec::new();
        run(&command, config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_car_uses_config_brand_by_default() {
        let config = SessionConfig {
            car_brand: "Volvo".to_string(),
            ..SessionConfig::default()
        };
        let text = capture(Commands::Car { brand: None }, &config);
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_records_json_lines_parse() {
        let text = capture(Commands::Records { json: true }, &SessionConfig::default());
        for line in text.lines() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value["number_of_legs"].is_u64());
        }
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_data_types_is_reproducible_with_seed() {
        let config = SessionConfig {
            seed: Some(3),
            ..SessionConfig::default()
        };
        let first = capture(Commands::DataTypes, &config);
        let second = capture(Commands::DataTypes, &config);
        assert_eq!(first, second);
        assert!(first.contains("draw(1..10) => "));
    }

    #[test]
    fn test_all_runs_every_exercise() {
        let config = SessionConfig {
            seed: Some(1),
            ..SessionConfig::default()
        };
        let text = capture(Commands::All, &config);
        assert!(text.contains("Legs: land"));
        assert!(text.contains("Legs: 4"));
        assert!(text.contains("'number_of_legs': 0"));
        assert!(text.contains("Engine has started"));
        assert!(text.contains("# Random number"));
    }
}
