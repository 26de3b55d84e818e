use crate::validation::errors::ValidationError;
use log::debug;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Running cost of one validation pass.
///
/// Safe to share between workers: every charge is a single atomic update and
/// the ceiling is checked against the value that update produced. The first
/// charge to cross the ceiling raises the `exceeded` flag, which other workers
/// poll to abandon their spends.
#[derive(Debug)]
pub struct CostMeter {
    max_cost: u64,
    total: AtomicU64,
    exceeded: AtomicBool,
}
impl CostMeter {
    #[must_use]
    pub fn new(max_cost: u64) -> Self {
        Self {
            max_cost,
            total: AtomicU64::new(0),
            exceeded: AtomicBool::new(false),
        }
    }
    pub fn charge(&self, amount: u64) -> Result<u64, ValidationError> {
        if self.is_exceeded() {
            return Err(self.exceeded_error());
        }
        let previous = self
            .total
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |t| {
                Some(t.saturating_add(amount))
            })
            .unwrap_or_else(|t| t);
        let total = previous.saturating_add(amount);
        if total > self.max_cost {
            if !self.exceeded.swap(true, Ordering::SeqCst) {
                debug!("Cost ceiling {} crossed at {total}", self.max_cost);
            }
            return Err(ValidationError::CostExceeded {
                cost: total,
                max_cost: self.max_cost,
            });
        }
        Ok(total)
    }
    /// Charges `units * weight`, saturating instead of wrapping.
    pub fn charge_scaled(&self, units: u64, weight: u64) -> Result<u64, ValidationError> {
        self.charge(units.saturating_mul(weight))
    }
    pub fn check(&self) -> Result<(), ValidationError> {
        if self.is_exceeded() {
            Err(self.exceeded_error())
        } else {
            Ok(())
        }
    }
    #[must_use]
    pub fn is_exceeded(&self) -> bool {
        self.exceeded.load(Ordering::SeqCst)
    }
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total.load(Ordering::SeqCst)
    }
    fn exceeded_error(&self) -> ValidationError {
        ValidationError::CostExceeded {
            cost: self.total(),
            max_cost: self.max_cost,
        }
    }
}
