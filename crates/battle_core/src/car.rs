use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CarError {
    #[error("The car needs to start in order for it to drive.")]
    NotRunning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    brand: String,
    color: String,
    cost: f64,
    mileage: f64,
    running: bool,
}

impl Car {
    pub fn new(brand: impl Into<String>, color: impl Into<String>, cost: f64) -> Self {
        Self::with_mileage(brand, color, cost, 0.0)
    }

    pub fn with_mileage(
        brand: impl Into<String>,
        color: impl Into<String>,
        cost: f64,
        mileage: f64,
    ) -> Self {
        Self {
            brand: brand.into(),
            color: color.into(),
            cost,
            mileage,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Adds `miles` to the odometer. Any value is accepted, negative included.
    /// A stopped car is left untouched and reports [`CarError::NotRunning`].
    pub fn drive(&mut self, miles: f64) -> Result<(), CarError> {
        if !self.running {
            warn!(target: "battle_core.car", brand = %self.brand, miles, "drive before start ignored");
            return Err(CarError::NotRunning);
        }
        self.mileage += miles;
        Ok(())
    }

    pub fn mileage(&self) -> f64 {
        self.mileage
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}
