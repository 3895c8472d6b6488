use crate::domain::model::{CountTable, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Sink for run artifacts. Write-only: count sources are opened by the
/// collator itself, which needs the raw I/O error kind to decide which
/// sources to skip.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// Word-count CSV sources to collate, in processing order.
    fn count_files(&self) -> &[String];
    fn output_path(&self) -> &str;
    /// Emit only the n most frequent words, or all of them when None.
    fn num_words(&self) -> Option<usize>;
    fn fit_enabled(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<CountTable>;
    async fn transform(&self, counts: CountTable) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
