//! Car with an encapsulated engine
//!
//! The engine status is owned by [`Car`] and cannot be set from outside the
//! module. The only way to change it is [`Car::start`], which runs the private
//! `start_engine` transition.
//!
//! ```text
//! off --start()--> on
//! ```
//!
//! `on` is terminal: starting a running car is a no-op.
//!
//! # Example
//!
//! ```
//! use menagerie::car::Car;
//! use menagerie::types::EngineStatus;
//!
//! let mut car = Car::new("Audi");
//! let mut out = Vec::new();
//! car.start(&mut out).unwrap();
//! assert_eq!(car.engine_status(), EngineStatus::On);
//! assert_eq!(String::from_utf8(out).unwrap(), "Engine has started\n");
//! ```

use std::io::Write;

use tracing::{debug, info};

use crate::error::Result;
use crate::types::EngineStatus;

/// Brand used by the demo when none is configured
pub const DEFAULT_BRAND: &str = "Audi";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    brand: String,
    engine_status: EngineStatus,
}

impl Car {
    /// Create a car with its engine off.
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            engine_status: EngineStatus::Off,
        }
    }

    #[inline]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    #[inline]
    pub fn engine_status(&self) -> EngineStatus {
        self.engine_status
    }

    /// Write the current engine status line.
    pub fn display_status<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Engine status: {}", self.engine_status)?;
        Ok(())
    }

    /// Start the car. Does nothing if the engine is already running.
    pub fn start<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if self.engine_status.is_running() {
            debug!(brand = %self.brand, "engine already running, ignoring start");
            return Ok(());
        }
        self.start_engine(out)
    }

    fn start_engine<W: Write>(&mut self, out: &mut W) -> Result<()> {
        self.engine_status = EngineStatus::On;
        info!(brand = %self.brand, "engine started");
        writeln!(out, "Engine has started")?;
        Ok(())
    }
}

/// Display, start, display: the full car exercise.
pub fn run_demo<W: Write>(out: &mut W, brand: &str) -> Result<Car> {
    let mut car = Car::new(brand);
    car.display_status(out)?;
    car.start(out)?;
    car.display_status(out)?;
    Ok(car)
}
