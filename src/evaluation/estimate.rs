use super::normal::critical;
use super::welford::Welford;
use crate::Probability;
use crate::Utility;

/// Point estimate with normal-approximation confidence interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub count: usize,
    pub mean: Utility,
    pub variance: Utility,
    pub std_error: Option<Utility>,
    pub interval: Option<(Utility, Utility)>,
    pub confidence: Probability,
}

impl Estimate {
    pub fn from_moments(moments: &Welford, confidence: Probability) -> Self {
        let mean = moments.mean();
        let std_error = moments.std_error();
        let interval = std_error
            .map(|se| critical(confidence) * se)
            .map(|half| (mean - half, mean + half));
        Self {
            count: moments.count(),
            mean,
            variance: moments.variance(),
            std_error,
            interval,
            confidence,
        }
    }
    pub fn half_width(&self) -> Option<Utility> {
        self.interval.map(|(lo, hi)| (hi - lo) / 2.0)
    }
}

impl std::fmt::Display for Estimate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (self.std_error, self.interval, self.half_width()) {
            (Some(se), Some((lo, hi)), Some(half)) => write!(
                f,
                "{:+.3} ± {:.3} (se {:.3}, {:.0}% CI [{:+.3}, {:+.3}])",
                self.mean,
                half,
                se,
                self.confidence * 100.0,
                lo,
                hi
            ),
            _ => write!(f, "{:+.3} (n = {}, interval undefined)", self.mean, self.count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_brackets_mean() {
        let mut w = Welford::default();
        for x in [10.0, -10.0, 30.0, -30.0] {
            w.push(x);
        }
        let e = Estimate::from_moments(&w, 0.95);
        let (lo, hi) = e.interval.unwrap();
        assert!(lo < e.mean && e.mean < hi);
        assert!((e.half_width().unwrap() - critical(0.95) * e.std_error.unwrap()).abs() < 1e-9);
    }

    #[test]
    fn single_sample_has_no_interval() {
        let mut w = Welford::default();
        w.push(5.0);
        let e = Estimate::from_moments(&w, 0.95);
        assert_eq!(e.mean, 5.0);
        assert_eq!(e.interval, None);
        assert_eq!(e.half_width(), None);
    }
}
