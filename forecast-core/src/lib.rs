//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Shared domain models (daily/hourly records, conditions, icons)
//! - The mock forecast generator, driven by an injected random source
//! - Day selection and the pure projection into view models
//! - Configuration handling
//!
//! It is used by `forecast-cli`, but can also back other front ends.

pub mod config;
pub mod dashboard;
pub mod generator;
pub mod model;
pub mod selection;
pub mod view;

pub use config::Config;
pub use dashboard::Dashboard;
pub use model::{Condition, ConditionIcon, DailyForecast, HourlyForecast};
pub use selection::SelectionController;
pub use view::DashboardView;
