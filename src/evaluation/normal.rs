use crate::Probability;
use crate::Utility;

/// Two-sided standard normal critical value for a confidence level,
/// e.g. `0.95 -> 1.96`.
///
/// Rational approximation from Abramowitz & Stegun 26.2.23, absolute error
/// below 4.5e-4. Levels are clamped into the open unit interval.
pub fn critical(confidence: Probability) -> Utility {
    let confidence = confidence.clamp(1e-9, 1.0 - 1e-12);
    let p = (1.0 - confidence) / 2.0;
    let t = (-2.0 * p.ln()).sqrt();
    let numer = 2.515517 + 0.802853 * t + 0.010328 * t * t;
    let denom = 1.0 + 1.432788 * t + 0.189269 * t * t + 0.001308 * t * t * t;
    (t - numer / denom).max(0.0)
}
