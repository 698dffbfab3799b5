use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

pub const REPORT_EXTENSION: &str = "md";
pub const DEFAULT_TOP_COUNT: usize = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub ability_dir: PathBuf,
    pub process_dir: PathBuf,
    pub output_file: PathBuf,
    pub top_count: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let ability_dir = env::var("ABILITY_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("ability"));

        let process_dir = env::var("PROCESS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("process"));

        let output_file = env::var("OUTPUT_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("top_students.json"));

        let top_count = match env::var("TOP_COUNT") {
            Ok(value) => value.parse().map_err(|_| {
                Error::Config(format!("TOP_COUNT is not a number: {}", value))
            })?,
            Err(_) => DEFAULT_TOP_COUNT,
        };

        Ok(Self {
            ability_dir,
            process_dir,
            output_file,
            top_count,
        })
    }
}
