use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ZipfEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ZipfEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting collate/fit run...");

        tracing::info!("Extracting word counts...");
        let counts = self.pipeline.extract().await?;
        tracing::info!("Collated {} distinct words", counts.len());

        tracing::info!("Transforming counts...");
        let result = self.pipeline.transform(counts).await?;
        if let Some(fit) = result.fit {
            tracing::info!("Power-law exponent alpha = {:.4}", fit.alpha);
        }

        tracing::info!("Loading results...");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
