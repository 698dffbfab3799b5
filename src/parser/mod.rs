pub mod section;
pub mod ability;
pub mod process;

pub use ability::AbilityParser;
pub use process::ProcessParser;
