use crate::core::collate::Collator;
use crate::core::estimator::{evaluate_fit, fit_power_law};
use crate::core::rank::assign_ranks;
use crate::core::{
    ConfigProvider, CountTable, Pipeline, PowerLawFit, RankedEntry, Storage, TransformResult,
};
use crate::utils::error::Result;

/// Collate word-count CSVs, rank the cumulative table, and fit the
/// power-law exponent, writing the artifacts through the storage port.
pub struct CountsPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CountsPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

fn render_counts_csv(counts: &CountTable, num: Option<usize>) -> Result<String> {
    let rows = counts.most_common();
    let limit = num.unwrap_or(rows.len());
    let mut writer = csv::Writer::from_writer(Vec::new());
    for (word, count) in rows.into_iter().take(limit) {
        writer.write_record([word.as_str(), &count.to_string()])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8(bytes).map_err(std::io::Error::other)?)
}

fn fit_and_sample(
    frequencies: &[u64],
    rank_table: &[RankedEntry],
) -> Result<(PowerLawFit, Vec<(f64, f64)>)> {
    let fit = fit_power_law(frequencies)?;
    let curve_xmin = frequencies.iter().copied().min().unwrap_or(1);
    let curve_xmax = frequencies.iter().copied().max().unwrap_or(1);
    let max_rank = rank_table.last().map(|e| e.rank).unwrap_or(0.0);
    let curve = evaluate_fit(fit.alpha, curve_xmin, curve_xmax, max_rank)?;
    Ok((fit, curve))
}

fn render_curve_csv(curve: &[(f64, f64)]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for (x, y) in curve {
        writer.write_record([x.to_string(), y.to_string()])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8(bytes).map_err(std::io::Error::other)?)
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CountsPipeline<S, C> {
    async fn extract(&self) -> Result<CountTable> {
        let mut collator = Collator::new();
        collator.aggregate(self.config.count_files());
        let counts = collator.finish();
        tracing::debug!("Cumulative table holds {} distinct words", counts.len());
        Ok(counts)
    }

    async fn transform(&self, counts: CountTable) -> Result<TransformResult> {
        let counts_csv = render_counts_csv(&counts, self.config.num_words())?;
        let frequencies = counts.frequencies();
        let rank_table = assign_ranks(&frequencies);

        // The fit is a separable stage: the collated table is emitted no
        // matter what the estimator does. A run over zero usable sources
        // still produces its (empty) cumulative table.
        let (fit, curve) = if !self.config.fit_enabled() {
            (None, Vec::new())
        } else if frequencies.is_empty() {
            tracing::warn!("Nothing to fit: cumulative table is empty");
            (None, Vec::new())
        } else {
            match fit_and_sample(&frequencies, &rank_table) {
                Ok((fit, curve)) => (Some(fit), curve),
                Err(e) => {
                    tracing::warn!("Power-law fit failed: {}", e);
                    (None, Vec::new())
                }
            }
        };

        Ok(TransformResult {
            counts_csv,
            rank_table,
            fit,
            curve,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        self.storage
            .write_file("collated.csv", result.counts_csv.as_bytes())
            .await?;

        if let Some(fit) = result.fit {
            let summary = serde_json::to_string_pretty(&fit)?;
            self.storage
                .write_file("fit.json", summary.as_bytes())
                .await?;

            let curve_csv = render_curve_csv(&result.curve)?;
            self.storage
                .write_file("fit_curve.csv", curve_csv.as_bytes())
                .await?;
        }

        Ok(format!("{}/collated.csv", self.config.output_path()))
    }
}
