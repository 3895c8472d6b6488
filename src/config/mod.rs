pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "zipf-counts")]
#[command(about = "Collate word-count CSV files and fit a power-law exponent")]
pub struct CliConfig {
    /// Input word-count CSV files, processed in order
    pub infiles: Vec<String>,

    #[arg(short, long, help = "Output only the n most frequent words")]
    pub num: Option<usize>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, help = "Skip the power-law fit")]
    pub no_fit: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn count_files(&self) -> &[String] {
        &self.infiles
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn num_words(&self) -> Option<usize> {
        self.num
    }

    fn fit_enabled(&self) -> bool {
        !self.no_fit
    }
}

impl Validate for CliConfig {
    // Source names are deliberately not validated here: a bad source is
    // skipped during aggregation, it must not abort the whole run.
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;
        if let Some(num) = self.num {
            validate_positive_number("num", num, 1)?;
        }
        Ok(())
    }
}
