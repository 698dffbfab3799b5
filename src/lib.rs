pub mod config;
pub mod error;
pub mod models;
pub mod rating;
pub mod parser;
pub mod analysis;

pub use config::Config;
pub use error::{Error, Result};
pub use rating::RatingScale;
pub use parser::{AbilityParser, ProcessParser};
pub use analysis::{AnalysisPipeline, GrowthReport};
