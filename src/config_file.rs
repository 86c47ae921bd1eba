//! Optional session configuration loaded from a JSON file.
//!
//! Every field has a default, so an empty object `{}` is a valid config and no
//! file at all reproduces the stock exercises.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::ops::Range;
use std::path::Path;
use tracing::info;

use crate::car::DEFAULT_BRAND;
use crate::error::MenagerieError;
use crate::tutorial::random::DEFAULT_RANGE;

/// Settings that tweak the exercises without changing their shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Brand of the car built by the car exercise
    pub car_brand: String,
    /// Inclusive lower bound of the random draw
    pub random_low: i64,
    /// Exclusive upper bound of the random draw
    pub random_high: i64,
    /// Fixed seed for a reproducible random draw
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            car_brand: DEFAULT_BRAND.to_string(),
            random_low: DEFAULT_RANGE.start,
            random_high: DEFAULT_RANGE.end,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Write the configuration as pretty JSON, creating missing parent directories
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {parent:?}"))?;
        }

        let file = File::create(path)
            .with_context(|| format!("Failed to create config file {path:?}"))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .with_context(|| format!("Failed to write session config to {path:?}"))?;
        writeln!(writer)?;
        writer.flush()?;

        Ok(())
    }

    /// Read a session config; missing fields fall back to their defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("Failed to open config file {path:?}"))?;

        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid session config in {path:?}"))
    }

    /// Validate the configuration
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.car_brand.trim().is_empty() {
            return Err(MenagerieError::config("car_brand must not be empty"));
        }

        if self.random_low >= self.random_high {
            return Err(MenagerieError::config(format!(
                "random_low ({}) must be below random_high ({})",
                self.random_low, self.random_high
            )));
        }

        Ok(())
    }

    /// Build the effective session config from the command line: load `config`
    /// (or start from defaults), let `seed` override, validate, then write the
    /// result to `save_to` when asked.
    pub fn resolve(
        config: Option<&Path>,
        seed: Option<u64>,
        save_to: Option<&Path>,
    ) -> Result<Self> {
        let mut session = match config {
            Some(path) => {
                info!("Loading configuration from: {:?}", path);
                Self::load_from_file(path)?
            }
            None => Self::default(),
        };
        if seed.is_some() {
            session.seed = seed;
        }
        session.validate().context("Invalid session configuration")?;

        if let Some(path) = save_to {
            session.save_to_file(path)?;
            info!("Saved session configuration to: {:?}", path);
        }

        Ok(session)
    }

    /// Half-open range for the random draw
    pub fn random_range(&self) -> Range<i64> {
        self.random_low..self.random_high
    }
}
