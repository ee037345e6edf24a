//! Running evaluation of completed hands.
//!
//! - [`Evaluation`] — Aggregator fed once per completed hand
//! - [`Report`] — Snapshot with adjusted and raw estimates
//! - [`Estimate`] — Mean, standard error, and confidence interval
//! - [`Welford`] — Numerically stable streaming moments
pub mod estimate;
pub use estimate::*;

pub mod evaluation;
pub use evaluation::*;

pub mod normal;
pub use normal::*;

pub mod welford;
pub use welford::*;
