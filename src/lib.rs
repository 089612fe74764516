// Library interface for FightCamp modules
// The binary and the integration tests both go through this crate root

pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod fight_week;
pub mod import;
pub mod logging;
pub mod models;
pub mod recovery;

// Re-export commonly used types for convenience
pub use models::*;
pub use fight_week::{compute_fight_week_plan, MAX_PLAN_DAYS};
pub use recovery::{compute_all_metrics, compute_all_metrics_now, TrainingWindow};
pub use config::AppConfig;
pub use export::OutputFormat;
pub use import::ImportManager;
pub use error::{FightCampError, Result};
pub use logging::{LogConfig, LogFormat, LogLevel};
