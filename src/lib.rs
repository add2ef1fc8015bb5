//! `gezgin` - AI-assisted travel itinerary planning and trip budgeting
//!
//! This library provides the core flow behind the planner: building a
//! deterministic prompt from trip parameters, calling the Gemini API,
//! defensively parsing the reply into a typed itinerary, and sequencing
//! the form / loading / results / expenses views with an in-memory
//! expense ledger. Rendering is left entirely to the embedding layer.

pub mod app;
pub mod config;
pub mod error;
pub mod gemini;
pub mod models;
pub mod parser;
pub mod prompt;

// Re-export core types for public API
pub use app::{LedgerTotals, Planner, View};
pub use crate::config::{GeminiConfig, GezginConfig, LoggingConfig};
pub use error::GezginError;
pub use gemini::{GeminiClient, PlanGenerator};
pub use models::{
    Activity, CityLocation, DailyPlan, Destination, ExpenseCategory, ExpenseItem, ExpenseKind,
    GroundingSource, HourlyForecast, LocalCuisine, Location, TRANSPORT_OPTIONS, TravelPlan,
    TravelRequest, WeatherForecast, WeatherIconType,
};
pub use parser::parse_plan;
pub use prompt::{GenerationParams, build_prompt};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, GezginError>;

/// Initialize console logging from the configured level and format.
///
/// `RUST_LOG` takes precedence over the configured level. Safe to call
/// more than once; later calls are no-ops.
pub fn init_logging(logging: &crate::config::LoggingConfig) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.clone()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if logging.format == "compact" {
        builder.compact().try_init()
    } else {
        builder.pretty().try_init()
    };
    if result.is_err() {
        tracing::debug!("logging already initialized");
    }
}
