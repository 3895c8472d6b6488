use crate::domain::model::PowerLawFit;
use crate::utils::error::{Result, ZipfError};

pub const DEFAULT_BETA_MIN: f64 = 1.0 + 1e-10;
pub const DEFAULT_BETA_MAX: f64 = 4.0;
pub const DEFAULT_TOLERANCE: f64 = 1e-8;
pub const DEFAULT_MAX_ITERATIONS: usize = 200;

/// Bounds and stopping rules for the likelihood search.
///
/// The likelihood is singular at `beta = 1` and underflows well above the
/// upper bound, so the search never samples at or outside
/// `(beta_min, beta_max)`. The defaults match the interval the model was
/// calibrated for; treat them as configuration, not as universal
/// mathematical limits.
#[derive(Debug, Clone, Copy)]
pub struct FitOptions {
    pub beta_min: f64,
    pub beta_max: f64,
    /// Relative bracket-width tolerance that counts as converged.
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            beta_min: DEFAULT_BETA_MIN,
            beta_max: DEFAULT_BETA_MAX,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Negative log-likelihood of observing `counts` under a power law with
/// parameter `beta`.
///
/// Each term is the log of the probability mass the model assigns to one
/// observed count, `(1/c)^(beta-1) - (1/(c+1))^(beta-1)`. Only defined for
/// `beta` strictly greater than 1 and positive counts.
pub fn neg_log_likelihood(beta: f64, counts: &[u64]) -> f64 {
    let mut log_likelihood = 0.0;
    for &count in counts {
        let count = count as f64;
        let mass = (1.0 / count).powf(beta - 1.0) - (1.0 / (count + 1.0)).powf(beta - 1.0);
        log_likelihood += mass.ln();
    }
    -log_likelihood
}

/// Fit the power-law exponent to a frequency array with default options.
pub fn fit_power_law(counts: &[u64]) -> Result<PowerLawFit> {
    fit_power_law_with(counts, FitOptions::default())
}

/// Fit the power-law exponent by minimizing the negative log-likelihood
/// with a golden-section search over `(beta_min, beta_max)`.
///
/// Validation is eager: an empty array or any zero count fails before the
/// optimizer runs, since the likelihood is undefined for them. The search
/// fails with a `ConvergenceError` rather than returning an approximate
/// answer if the objective turns non-finite or the iteration budget runs
/// out before the bracket narrows below tolerance.
pub fn fit_power_law_with(counts: &[u64], options: FitOptions) -> Result<PowerLawFit> {
    if counts.is_empty() {
        return Err(ZipfError::DomainError {
            message: "cannot fit a power law to an empty frequency array".to_string(),
        });
    }
    if counts.iter().any(|&c| c == 0) {
        return Err(ZipfError::DomainError {
            message: "frequency array contains a non-positive count; \
                      the likelihood is undefined for counts below 1"
                .to_string(),
        });
    }

    let evaluate = |beta: f64| -> Result<f64> {
        let value = neg_log_likelihood(beta, counts);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ZipfError::ConvergenceError {
                message: format!("objective is not finite at beta = {}", beta),
            })
        }
    };

    // Golden-section search. Interior points only, so the singular
    // endpoints are never sampled.
    const INV_PHI: f64 = 0.618_033_988_749_894_9;
    let mut a = options.beta_min;
    let mut b = options.beta_max;
    let mut c = b - INV_PHI * (b - a);
    let mut d = a + INV_PHI * (b - a);
    let mut fc = evaluate(c)?;
    let mut fd = evaluate(d)?;

    let mut converged = false;
    for _ in 0..options.max_iterations {
        if (b - a) <= options.tolerance * (a.abs() + b.abs()) {
            converged = true;
            break;
        }
        if fc < fd {
            b = d;
            d = c;
            fd = fc;
            c = b - INV_PHI * (b - a);
            fc = evaluate(c)?;
        } else {
            a = c;
            c = d;
            fc = fd;
            d = a + INV_PHI * (b - a);
            fd = evaluate(d)?;
        }
    }

    if !converged {
        return Err(ZipfError::ConvergenceError {
            message: format!(
                "bracket width {} still above tolerance after {} iterations",
                b - a,
                options.max_iterations
            ),
        });
    }

    let beta = 0.5 * (a + b);
    if beta <= options.beta_min + options.tolerance {
        return Err(ZipfError::DomainError {
            message: format!("alpha is undefined: beta = {} sits on the lower boundary", beta),
        });
    }

    Ok(PowerLawFit {
        alpha: 1.0 / (beta - 1.0),
        beta,
    })
}

/// Sample the fitted curve `y(x) = max_rank * x^(-1/alpha)` over the
/// integer grid `curve_xmin..=curve_xmax`, for an external plotting
/// collaborator. Pure; the only degenerate input is `alpha == 0`.
pub fn evaluate_fit(
    alpha: f64,
    curve_xmin: u64,
    curve_xmax: u64,
    max_rank: f64,
) -> Result<Vec<(f64, f64)>> {
    if alpha == 0.0 {
        return Err(ZipfError::DomainError {
            message: "fitted curve is undefined for alpha = 0".to_string(),
        });
    }
    Ok((curve_xmin..=curve_xmax)
        .map(|x| {
            let x = x as f64;
            (x, max_rank * x.powf(-1.0 / alpha))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Full Zipfian frequency multiset: counts floor(n/i) for i in 1..=n,
    /// including the long tail of count-1 words a real corpus has.
    fn zipfian_counts(n: u64) -> Vec<u64> {
        (1..=n).map(|i| n / i).collect()
    }

    #[test]
    fn test_empty_array_is_a_domain_error() {
        let err = fit_power_law(&[]).unwrap_err();
        assert!(matches!(err, ZipfError::DomainError { .. }));
    }

    #[test]
    fn test_zero_count_is_a_domain_error() {
        let err = fit_power_law(&[10, 5, 0, 2]).unwrap_err();
        assert!(matches!(err, ZipfError::DomainError { .. }));
    }

    #[test]
    fn test_ideal_zipf_corpus_fits_alpha_near_one() {
        let fit = fit_power_law(&zipfian_counts(120)).unwrap();
        assert!(
            (fit.alpha - 1.0).abs() < 0.3,
            "alpha = {} too far from 1",
            fit.alpha
        );
        assert!(fit.beta > 1.0 && fit.beta < 4.0);
    }

    #[test]
    fn test_known_head_counts_reproduce_reference_estimate() {
        // MLE for this head-only array sits near beta = 1.2732.
        let fit = fit_power_law(&[100, 50, 33, 25, 20]).unwrap();
        assert!((fit.beta - 1.2732).abs() < 0.01, "beta = {}", fit.beta);
        assert!((fit.alpha - 3.6604).abs() < 0.05, "alpha = {}", fit.alpha);
    }

    #[test]
    fn test_alpha_is_always_positive_on_success() {
        for counts in [
            vec![5u64, 5, 3],
            vec![1, 1, 1],
            zipfian_counts(60),
            vec![100, 50, 33, 25, 20],
        ] {
            let fit = fit_power_law(&counts).unwrap();
            assert!(fit.alpha > 0.0, "alpha = {} for {:?}", fit.alpha, counts);
            assert!(fit.beta > 1.0, "beta = {} for {:?}", fit.beta, counts);
        }
    }

    #[test]
    fn test_all_ones_pushes_beta_to_the_upper_bound() {
        // Every word seen once gives the flattest distribution the bounded
        // search can express.
        let fit = fit_power_law(&[1, 1, 1]).unwrap();
        assert!((fit.beta - 4.0).abs() < 1e-6, "beta = {}", fit.beta);
        assert!((fit.alpha - 1.0 / 3.0).abs() < 1e-3, "alpha = {}", fit.alpha);
    }

    #[test]
    fn test_custom_bounds_are_respected() {
        let options = FitOptions {
            beta_max: 2.0,
            ..FitOptions::default()
        };
        let fit = fit_power_law_with(&zipfian_counts(60), options).unwrap();
        assert!(fit.beta > 1.0 && fit.beta < 2.0);
    }

    #[test]
    fn test_exhausted_iteration_budget_is_a_convergence_error() {
        let options = FitOptions {
            max_iterations: 2,
            ..FitOptions::default()
        };
        let err = fit_power_law_with(&zipfian_counts(60), options).unwrap_err();
        assert!(matches!(err, ZipfError::ConvergenceError { .. }));
    }

    #[test]
    fn test_objective_is_finite_inside_the_interval() {
        let counts = zipfian_counts(60);
        for beta in [1.001, 1.5, 2.0, 3.0, 3.999] {
            assert!(neg_log_likelihood(beta, &counts).is_finite());
        }
    }

    #[test]
    fn test_curve_passes_through_max_rank_at_x_one() {
        let curve = evaluate_fit(1.0, 1, 100, 42.0).unwrap();
        assert_eq!(curve.len(), 100);
        let (x0, y0) = curve[0];
        assert_eq!(x0, 1.0);
        assert!((y0 - 42.0).abs() < 1e-12);
    }

    #[test]
    fn test_curve_is_decreasing_for_positive_alpha() {
        let curve = evaluate_fit(1.5, 1, 50, 200.0).unwrap();
        for pair in curve.windows(2) {
            assert!(pair[0].1 > pair[1].1);
        }
    }

    #[test]
    fn test_curve_rejects_zero_alpha() {
        let err = evaluate_fit(0.0, 1, 10, 5.0).unwrap_err();
        assert!(matches!(err, ZipfError::DomainError { .. }));
    }
}
