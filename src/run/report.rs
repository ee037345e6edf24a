use crate::evaluation::Report;
use crate::gameroom::Abandonment;
use crate::transport::SessionError;
use colored::Colorize;
use std::time::Duration;

/// How a run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    /// Every requested hand was attempted.
    Completed,
    /// Stopped between hands on request.
    Cancelled,
    /// Authentication failed or the session lapsed.
    Fatal(SessionError),
}

impl Status {
    pub fn is_fatal(&self) -> bool {
        matches!(self, Status::Fatal(_))
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Status::Completed => write!(f, "completed"),
            Status::Cancelled => write!(f, "cancelled"),
            Status::Fatal(e) => write!(f, "fatal: {}", e),
        }
    }
}

/// Final account of a run.
///
/// Statistics cover completed hands only. Abandoned hands are listed
/// separately and never enter the evaluation as zero-valued samples.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub agent: String,
    pub status: Status,
    pub requested: usize,
    pub evaluation: Report,
    pub abandonments: Vec<Abandonment>,
    pub elapsed: Duration,
}

impl RunReport {
    pub fn completed(&self) -> usize {
        self.evaluation.count
    }
    pub fn abandoned(&self) -> usize {
        self.abandonments.len()
    }
    /// Hands that reached a terminal phase, completed or not.
    pub fn attempted(&self) -> usize {
        self.completed() + self.abandoned()
    }
    /// Abandonments caused by the agent choosing an illegal action.
    pub fn agent_faults(&self) -> usize {
        self.abandonments.iter().filter(|a| a.is_agent_fault()).count()
    }
    pub fn abandonment_rate(&self) -> Option<f64> {
        match self.attempted() {
            0 => None,
            n => Some(self.abandoned() as f64 / n as f64),
        }
    }
    pub fn seconds_per_hand(&self) -> Option<f64> {
        match self.attempted() {
            0 => None,
            n => Some(self.elapsed.as_secs_f64() / n as f64),
        }
    }
    /// Process exit code: non-zero only when the run failed fatally before
    /// any hand completed. A session lapsing late still leaves a usable report.
    pub fn exit_code(&self) -> u8 {
        match self.status {
            Status::Fatal(_) if self.completed() == 0 => 1,
            _ => 0,
        }
    }
}

impl std::fmt::Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let status = match self.status {
            Status::Completed => self.status.to_string().green(),
            Status::Cancelled => self.status.to_string().yellow(),
            Status::Fatal(_) => self.status.to_string().red(),
        };
        writeln!(f, "{}", "== benchmark report ==".bold())?;
        writeln!(f, "agent       {}", self.agent)?;
        writeln!(f, "status      {}", status)?;
        writeln!(
            f,
            "hands       {} completed, {} abandoned, {} requested",
            self.completed(),
            self.abandoned(),
            self.requested
        )?;
        writeln!(f, "adjusted    {}", self.evaluation.adjusted.to_string().bold())?;
        writeln!(f, "raw         {}", self.evaluation.raw)?;
        if let Some(ratio) = self.evaluation.variance_ratio() {
            writeln!(f, "variance    {:.1}% of raw", ratio * 100.0)?;
        }
        if let Some(rate) = self.evaluation.showdown_rate() {
            writeln!(f, "showdowns   {:.1}%", rate * 100.0)?;
        }
        match self.seconds_per_hand() {
            Some(s) => writeln!(f, "elapsed     {:.1?} ({:.2}s/hand)", self.elapsed, s)?,
            None => writeln!(f, "elapsed     {:.1?}", self.elapsed)?,
        }
        if let Some(rate) = self.abandonment_rate().filter(|r| *r > 0.0) {
            let warning = format!(
                "{:.1}% of hands abandoned ({} by the agent); treat statistics with suspicion",
                rate * 100.0,
                self.agent_faults()
            );
            writeln!(f, "{}", warning.yellow())?;
            for abandonment in self.abandonments.iter() {
                writeln!(f, "  - {}", abandonment)?;
            }
        }
        Ok(())
    }
}
