use crate::Utility;

/// Streaming mean and sum of squared deviations.
///
/// Welford's update keeps the second moment well-conditioned over long runs,
/// where the naive `Σx² - n·mean²` loses everything to cancellation.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Welford {
    n: usize,
    mean: Utility,
    m2: Utility,
}

impl Welford {
    pub fn push(&mut self, x: Utility) {
        self.n += 1;
        let delta = x - self.mean;
        self.mean += delta / self.n as Utility;
        self.m2 += delta * (x - self.mean);
    }
    pub fn count(&self) -> usize {
        self.n
    }
    pub fn mean(&self) -> Utility {
        self.mean
    }
    /// Unbiased sample variance; zero until there are two samples.
    pub fn variance(&self) -> Utility {
        match self.n {
            0 | 1 => 0.0,
            n => (self.m2 / (n - 1) as Utility).max(0.0),
        }
    }
    /// Standard error of the mean; undefined below two samples.
    pub fn std_error(&self) -> Option<Utility> {
        match self.n {
            0 | 1 => None,
            n => Some((self.variance() / n as Utility).sqrt()),
        }
    }
}
