pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::http::{create_router, serve};
pub use config::ServerConfig;
pub use crate::core::{cookbook::Cookbook, normalize::normalize_recipe_name};
pub use domain::model::{Entry, EntryCandidate, SummaryResult};
pub use utils::error::{AdmissionError, CookbookError, ResolutionError, Result};
