use super::estimate::Estimate;
use super::welford::Welford;
use crate::CONFIDENCE;
use crate::Probability;
use crate::gameplay::HandOutcome;

/// Accumulates completed hands into running statistics.
///
/// The evaluated quantity is each hand's adjusted value (raw net plus the
/// server's variance-reduction term). Raw winnings are tracked alongside so
/// the report can show how much variance the adjustment removed.
///
/// Recording only ever appends: the count never decreases and earlier hands
/// are never revised. Sharing one evaluation across concurrent sessions
/// would require serializing calls to [`Evaluation::record`], e.g. behind a
/// mutex owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    adjusted: Welford,
    raw: Welford,
    showdowns: usize,
    confidence: Probability,
}

/// Snapshot of an [`Evaluation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub count: usize,
    pub adjusted: Estimate,
    pub raw: Estimate,
    pub showdowns: usize,
}

impl Evaluation {
    pub fn new(confidence: Probability) -> Self {
        Self {
            adjusted: Welford::default(),
            raw: Welford::default(),
            showdowns: 0,
            confidence,
        }
    }
    pub fn record(&mut self, outcome: &HandOutcome) {
        self.adjusted.push(outcome.adjusted());
        self.raw.push(outcome.net());
        self.showdowns += outcome.showdown() as usize;
    }
    pub fn count(&self) -> usize {
        self.adjusted.count()
    }
    pub fn report(&self) -> Report {
        Report {
            count: self.count(),
            adjusted: Estimate::from_moments(&self.adjusted, self.confidence),
            raw: Estimate::from_moments(&self.raw, self.confidence),
            showdowns: self.showdowns,
        }
    }
}

impl Default for Evaluation {
    fn default() -> Self {
        Self::new(CONFIDENCE)
    }
}

impl Report {
    pub fn mean(&self) -> f64 {
        self.adjusted.mean
    }
    pub fn std_error(&self) -> Option<f64> {
        self.adjusted.std_error
    }
    pub fn confidence_interval(&self) -> Option<(f64, f64)> {
        self.adjusted.interval
    }
    /// Adjusted over raw variance; below 1 means the adjustment helped.
    pub fn variance_ratio(&self) -> Option<f64> {
        (self.raw.variance > 0.0).then(|| self.adjusted.variance / self.raw.variance)
    }
    pub fn showdown_rate(&self) -> Option<f64> {
        (self.count > 0).then(|| self.showdowns as f64 / self.count as f64)
    }
}
