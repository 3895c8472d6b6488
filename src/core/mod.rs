pub mod collate;
pub mod counter;
pub mod engine;
pub mod estimator;
pub mod pipeline;
pub mod rank;

pub use crate::domain::model::{CountTable, PowerLawFit, RankedEntry, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
