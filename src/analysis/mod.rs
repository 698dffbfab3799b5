pub mod pipeline;
pub mod ranking;

pub use pipeline::{AnalysisPipeline, GrowthReport};
pub use ranking::GrowthRanker;
