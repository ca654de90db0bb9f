//! KPI achievement scoring and incentive bonus calculation.

pub mod calculation;
pub mod config;
pub mod divisions;
pub mod error;
pub mod format;
pub mod remote;
pub mod telemetry;

pub use calculation::{calculate, CalculationRequest, CalculationResult};
pub use divisions::DivisionProfile;
pub use error::AppError;
