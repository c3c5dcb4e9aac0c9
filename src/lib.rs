pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::ApiClient;
pub use config::CliConfig;
pub use core::phrases::PhraseBank;
pub use core::populate::PopulationEngine;
pub use core::synthesizer::{TextSynthesizer, ThreadIndexSource};
pub use domain::model::PopulationReport;
pub use utils::error::{PopulateError, Result};
