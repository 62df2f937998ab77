//! Threshold solver for Peirce's criterion (Gould 1855 formulation).
//!
//! Iterates Gould's equations A'–D to a fixed point in the auxiliary
//! ratio R, yielding the squared normalized-deviation cutoff x². A
//! negative intermediate x² clamps to 0, meaning "no further outliers
//! at this count".
//!
//! Uses the complementary error function via `statrs`.

use statrs::function::erf::erfc;
use tracing::trace;

use crate::errors::PeirceError;

/// Hard cap on fixed-point rounds. Sane inputs converge in well under
/// a hundred iterations; the cap only guards pathological floats.
const MAX_ITERATIONS: usize = 5_000;

/// Squared error threshold for outlier identification.
///
/// `observations`: total number of observations (N).
/// `suspected`: assumed number of outliers (n ≥ 1).
/// `unknowns`: number of fitted model unknowns (m ≥ 1; 1 for a plain mean).
///
/// Returns x² ≥ 0. `observations` of 0 or 1 short-circuits to 0 — too
/// little data to reject anything. Requires `suspected < observations`;
/// violations are rejected as `InvalidArgument` before any arithmetic,
/// since `N − n` appears as a divisor and as a base of fractional
/// exponents. NaN or infinity arising from degenerate exponents
/// propagates in the returned value rather than being coerced.
pub fn peirce_threshold(
    observations: usize,
    suspected: usize,
    unknowns: usize,
) -> Result<f64, PeirceError> {
    if observations <= 1 {
        return Ok(0.0);
    }
    if suspected == 0 || unknowns == 0 {
        return Err(PeirceError::InvalidArgument {
            reason: format!(
                "suspected outliers ({suspected}) and model unknowns ({unknowns}) must be at least 1"
            ),
        });
    }
    if suspected >= observations {
        return Err(PeirceError::InvalidArgument {
            reason: format!(
                "suspected outliers ({suspected}) must be fewer than observations ({observations})"
            ),
        });
    }

    let total = observations as f64;
    let removed = suspected as f64;
    let unknowns = unknowns as f64;

    // Nth root of Gould's equation B.
    let q = (removed.powf(removed / total) * (total - removed).powf((total - removed) / total))
        / total;

    // Deliberately unequal so the loop runs at least once.
    let mut r_new = 1.0_f64;
    let mut r_old = 0.0_f64;
    let mut x2 = 0.0_f64;

    // Relative-scale tolerance tied to machine epsilon and sample size.
    let tolerance = total * 2.0e-16;
    let mut iterations = 0_usize;

    while (r_new - r_old).abs() > tolerance {
        iterations += 1;
        if iterations > MAX_ITERATIONS {
            return Err(PeirceError::ConvergenceFailure {
                iterations: MAX_ITERATIONS,
                delta: (r_new - r_old).abs(),
            });
        }

        // 1/(N−n)th root of Gould's equation A'.
        let mut ldiv = r_new.powf(removed);
        if ldiv == 0.0 {
            ldiv = 1.0e-6; // Underflow guard
        }
        let lamda = (q.powf(total) / ldiv).powf(1.0 / (total - removed));

        // Gould's equation C.
        x2 = 1.0 + (total - unknowns - removed) / removed * (1.0 - lamda * lamda);

        if x2 < 0.0 {
            // No further outliers at this count. Freeze R so the next
            // tolerance check sees a difference of 0 and the loop exits.
            x2 = 0.0;
            r_old = r_new;
        } else {
            // Gould's equation D.
            r_old = r_new;
            r_new = ((x2 - 1.0) / 2.0).exp() * erfc(x2.sqrt() / std::f64::consts::SQRT_2);
        }
    }

    trace!(observations, suspected, x2, iterations, "threshold converged");
    Ok(x2)
}
