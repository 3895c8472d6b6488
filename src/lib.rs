pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::counter::count_words;
pub use core::{engine::ZipfEngine, pipeline::CountsPipeline};
pub use domain::model::{CountTable, PowerLawFit, RankedEntry};
pub use utils::error::{Result, ZipfError};
