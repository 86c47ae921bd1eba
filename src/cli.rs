use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use strum::Display;

/// Menagerie - introductory modeling exercises
#[derive(Parser, Debug)]
#[command(name = "menagerie")]
#[command(about = "Animals, a car and a tour of the built-in data types")]
#[command(version)]
pub struct Cli {
    /// Path to a JSON session config (car brand, random range, seed)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write the effective session config to this path before running
    #[arg(long, global = true)]
    pub save_config: Option<PathBuf>,

    /// Seed for the random draw (overrides the config file)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the five sample animals as objects
    Animals {
        /// Which fourth field to show
        #[arg(short, long, value_enum, default_value_t = Schema::Habitat)]
        schema: Schema,
    },
    /// Print the five sample animals as key/value mappings
    Records {
        /// One JSON object per line instead of a raw dump
        #[arg(long)]
        json: bool,
    },
    /// Show the engine status, start the car, show it again
    Car {
        /// Car brand (defaults to the config value)
        #[arg(short, long)]
        brand: Option<String>,
    },
    /// Tour of the built-in data types and conversions
    DataTypes,
    /// Run every exercise in order
    All,
}

/// Animal schema selector
#[derive(ValueEnum, Display, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[strum(serialize_all = "lowercase")]
pub enum Schema {
    /// Fourth field is a habitat (land, sky, sea)
    #[default]
    Habitat,
    /// Fourth field is a leg count
    Legs,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
