use super::cancel::Cancel;
use super::report::*;
use crate::CONFIDENCE;
use crate::HANDS;
use crate::PROGRESS_LOG_INTERVAL;
use crate::Probability;
use crate::evaluation::Evaluation;
use crate::gameroom::*;
use crate::players::Agent;
use crate::transport::*;
use std::time::Instant;

/// Plays a fixed number of hands over one session and reports.
///
/// Hands run strictly one after another. Completed hands feed the
/// evaluation; abandoned hands are collected and the run moves on. Only a
/// fatal session error (bad credentials, lapsed session) stops the run
/// early, and the report still covers every hand completed before it.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    hands: usize,
    backoff: Backoff,
    confidence: Probability,
    cancel: Cancel,
}

impl Orchestrator {
    pub fn new(hands: usize) -> Self {
        Self {
            hands,
            backoff: Backoff::default(),
            confidence: CONFIDENCE,
            cancel: Cancel::default(),
        }
    }
    pub fn with_backoff(mut self, backoff: Backoff) -> Self {
        self.backoff = backoff;
        self
    }
    pub fn with_confidence(mut self, confidence: Probability) -> Self {
        self.confidence = confidence;
        self
    }
    pub fn with_cancel(mut self, cancel: Cancel) -> Self {
        self.cancel = cancel;
        self
    }
    /// Handle for stopping the run between hands.
    pub fn cancel(&self) -> &Cancel {
        &self.cancel
    }
    pub fn hands(&self) -> usize {
        self.hands
    }

    /// Connect, play every hand, close, report.
    pub async fn run<R: Remote>(
        &self,
        remote: R,
        credentials: Credentials,
        agent: &mut dyn Agent,
    ) -> RunReport {
        let start = Instant::now();
        let mut evaluation = Evaluation::new(self.confidence);
        let mut abandonments = Vec::new();
        log::info!("benchmarking {} over {} hands", agent.name(), self.hands);
        let status = match Transport::connect(remote, credentials, self.backoff).await {
            Ok(mut transport) => {
                let status = self
                    .play(&mut transport, agent, &mut evaluation, &mut abandonments)
                    .await;
                transport.close().await;
                status
            }
            Err(e) => Status::Fatal(e),
        };
        match status {
            Status::Fatal(ref e) => log::error!("run aborted: {}", e),
            ref status => log::info!("run {} after {:.1?}", status, start.elapsed()),
        }
        RunReport {
            agent: agent.name().to_string(),
            status,
            requested: self.hands,
            evaluation: evaluation.report(),
            abandonments,
            elapsed: start.elapsed(),
        }
    }

    async fn play<R: Remote>(
        &self,
        transport: &mut Transport<R>,
        agent: &mut dyn Agent,
        evaluation: &mut Evaluation,
        abandonments: &mut Vec<Abandonment>,
    ) -> Status {
        for played in 0..self.hands {
            if self.cancel.is_cancelled() {
                log::warn!("cancelled after {} of {} hands", played, self.hands);
                return Status::Cancelled;
            }
            match HandDriver::new(transport, &mut *agent).run().await {
                Ok(Conclusion::Completed(outcome)) => evaluation.record(&outcome),
                Ok(Conclusion::Abandoned(abandonment)) => abandonments.push(abandonment),
                Err(e) => return Status::Fatal(e),
            }
            if (played + 1) % PROGRESS_LOG_INTERVAL == 0 {
                let report = evaluation.report();
                log::info!(
                    "[{}/{}] mean {:+.3} se {} abandoned {}",
                    played + 1,
                    self.hands,
                    report.mean(),
                    report
                        .std_error()
                        .map(|se| format!("{:.3}", se))
                        .unwrap_or_else(|| "n/a".into()),
                    abandonments.len(),
                );
            }
        }
        Status::Completed
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new(HANDS)
    }
}
