#![forbid(unsafe_code)]

//! Core domain model and business logic for the Caltrack system.
//!
//! This crate provides:
//! - Domain types (biometrics, goals, intake entries, totals, budgets)
//! - BMI calculation and classification
//! - Intake ledger and goal evaluation
//! - Exercise and food suggestions
//! - Progress history, sessions and CSV export

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod biometrics;
pub mod ledger;
pub mod goals;
pub mod suggestion;
pub mod history;
pub mod session;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use biometrics::{classify, compute_bmi};
pub use ledger::IntakeLedger;
pub use goals::evaluate;
pub use suggestion::{suggest, ExerciseRate, Macro, Suggestion};
pub use history::ProgressHistory;
pub use session::{BmiReading, Evaluation, MemorySessionStore, SessionId, SessionStore, TrackingSession};
pub use export::{write_intake_csv, write_progress_csv};
