use super::abandonment::*;
use super::phase::*;
use crate::MAX_DECISIONS;
use crate::gameplay::*;
use crate::players::Agent;
use crate::transport::*;

/// Drives a single hand from deal to conclusion.
///
/// Borrows the transport and the agent for the duration of one hand and is
/// dropped afterwards; nothing carries over between hands. Faults that only
/// cost this hand end in [`Phase::Abandoned`]. Fatal session faults are
/// returned as errors for the run to handle.
pub struct HandDriver<'a, R: Remote> {
    transport: &'a mut Transport<R>,
    agent: &'a mut dyn Agent,
    phase: Phase,
    decisions: usize,
}

impl<'a, R: Remote> HandDriver<'a, R> {
    pub fn new(transport: &'a mut Transport<R>, agent: &'a mut dyn Agent) -> Self {
        Self {
            transport,
            agent,
            phase: Phase::AwaitingHand,
            decisions: 0,
        }
    }
    pub fn phase(&self) -> &Phase {
        &self.phase
    }
    /// Run until the hand is completed or abandoned.
    pub async fn run(mut self) -> Result<Conclusion, SessionError> {
        while !self.phase.is_terminal() {
            self.step().await?;
        }
        match self.phase {
            Phase::Completed(outcome) => {
                log::debug!("{}", outcome);
                self.agent.observe(&outcome).await;
                Ok(Conclusion::Completed(outcome))
            }
            Phase::Abandoned(abandonment) => {
                log::warn!("{}", abandonment);
                Ok(Conclusion::Abandoned(abandonment))
            }
            _ => unreachable!("loop exits on terminal phase"),
        }
    }
    /// Advance by one transition. Terminal phases stay put.
    pub async fn step(&mut self) -> Result<(), SessionError> {
        let phase = std::mem::replace(&mut self.phase, Phase::AwaitingHand);
        self.phase = match phase {
            Phase::AwaitingHand => self.deal().await?,
            Phase::InProgress(state) => self.decide(state).await?,
            terminal => terminal,
        };
        Ok(())
    }
}

impl<'a, R: Remote> HandDriver<'a, R> {
    async fn deal(&mut self) -> Result<Phase, SessionError> {
        match self.transport.request_hand().await {
            Ok(reply) => Ok(Self::advance(reply)),
            Err(e) => self.fail(None, e),
        }
    }
    async fn decide(&mut self, state: HandState) -> Result<Phase, SessionError> {
        let hand = state.hand().clone();
        if self.decisions >= MAX_DECISIONS {
            self.transport.abandon();
            return Ok(Phase::Abandoned(Abandonment {
                hand: Some(hand),
                reason: Reason::Runaway(self.decisions),
            }));
        }
        let action = self.agent.decide(&state).await;
        if !state.is_legal(&action) {
            self.transport.abandon();
            return Ok(Phase::Abandoned(Abandonment {
                hand: Some(hand),
                reason: Reason::Agent {
                    action,
                    legal: state.legal().clone(),
                },
            }));
        }
        self.decisions += 1;
        log::debug!("[hand {}] {} {} -> {}", hand, self.agent.name(), state.street(), action);
        match self.transport.submit_action(action).await {
            Ok(reply) => Ok(Self::advance(reply)),
            Err(e) => self.fail(Some(hand), e),
        }
    }
    fn advance(reply: Reply) -> Phase {
        match reply {
            Reply::Pending(state) => Phase::InProgress(state),
            Reply::Concluded(outcome) => Phase::Completed(outcome),
        }
    }
    fn fail(&mut self, hand: Option<HandId>, e: SessionError) -> Result<Phase, SessionError> {
        self.transport.abandon();
        if e.is_fatal() {
            return Err(e);
        }
        Ok(Phase::Abandoned(Abandonment {
            hand,
            reason: Reason::Transport(e),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::Shover;

    /// Always plays the same action, legal or not.
    struct Stubborn(Action);

    #[async_trait::async_trait]
    impl Agent for Stubborn {
        fn name(&self) -> &str {
            "stubborn"
        }
        async fn decide(&mut self, _: &HandState) -> Action {
            self.0
        }
    }

    fn facing(id: &str) -> HandState {
        HandState::new(HandId::from(id), 0)
            .with_pot(150)
            .with_stacks([19950, 19900])
            .with_bets([50, 100])
            .with_legal(Legal::from(vec![
                Choice::Fold,
                Choice::Call,
                Choice::Raise(Bounds::new(200, 20000).unwrap()),
            ]))
            .validated()
            .unwrap()
    }
    fn won(id: &str, net: f64) -> Reply {
        Reply::Concluded(HandOutcome::new(HandId::from(id), net, 0.0))
    }
    async fn open(remote: Scripted) -> Transport<Scripted> {
        Transport::connect(remote, Credentials::new("key").unwrap(), Backoff::immediate(3))
            .await
            .unwrap()
    }
    fn acts(transport: &Transport<Scripted>) -> Vec<Call> {
        transport
            .remote()
            .calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Act(..)))
            .collect()
    }

    #[tokio::test]
    async fn scripted_hand_completes() {
        let remote = Scripted::default()
            .create(Ok(Reply::Pending(facing("h1"))))
            .act(Ok(Reply::Pending(facing("h1"))))
            .act(Ok(won("h1", 150.0)));
        let mut transport = open(remote).await;
        let mut agent = Shover;
        let conclusion = HandDriver::new(&mut transport, &mut agent).run().await.unwrap();
        assert_eq!(
            conclusion,
            Conclusion::Completed(HandOutcome::new(HandId::from("h1"), 150.0, 0.0))
        );
        assert_eq!(
            acts(&transport),
            vec![
                Call::Act(HandId::from("h1"), Action::Raise(20000)),
                Call::Act(HandId::from("h1"), Action::Raise(20000)),
            ]
        );
    }

    #[tokio::test]
    async fn phases_step_in_order() {
        let remote = Scripted::default()
            .create(Ok(Reply::Pending(facing("h1"))))
            .act(Ok(won("h1", 100.0)));
        let mut transport = open(remote).await;
        let mut agent = Shover;
        let mut driver = HandDriver::new(&mut transport, &mut agent);
        assert_eq!(driver.phase(), &Phase::AwaitingHand);
        driver.step().await.unwrap();
        assert!(matches!(driver.phase(), Phase::InProgress(_)));
        driver.step().await.unwrap();
        assert!(matches!(driver.phase(), Phase::Completed(_)));
        driver.step().await.unwrap();
        assert!(matches!(driver.phase(), Phase::Completed(_)));
    }

    #[tokio::test]
    async fn immediate_conclusion_needs_no_decision() {
        let remote = Scripted::default().create(Ok(won("h1", 50.0)));
        let mut transport = open(remote).await;
        let mut agent = Stubborn(Action::Check);
        let conclusion = HandDriver::new(&mut transport, &mut agent).run().await.unwrap();
        assert!(matches!(conclusion, Conclusion::Completed(_)));
        assert!(acts(&transport).is_empty());
    }

    #[tokio::test]
    async fn illegal_agent_action_is_never_sent() {
        let remote = Scripted::default().create(Ok(Reply::Pending(facing("h1"))));
        let mut transport = open(remote).await;
        let mut agent = Stubborn(Action::Check);
        let conclusion = HandDriver::new(&mut transport, &mut agent).run().await.unwrap();
        let Conclusion::Abandoned(abandonment) = conclusion else {
            panic!("expected abandonment");
        };
        assert!(abandonment.is_agent_fault());
        assert_eq!(abandonment.hand, Some(HandId::from("h1")));
        assert!(acts(&transport).is_empty());
        assert!(transport.session().current().is_none());
    }

    #[tokio::test]
    async fn exhausted_retries_abandon() {
        let unavailable = || Err(SessionError::Unavailable("503".into()));
        let remote = Scripted::default()
            .create(Ok(Reply::Pending(facing("h1"))))
            .act(unavailable())
            .fetch(Ok(Reply::Pending(facing("h1"))))
            .act(unavailable())
            .fetch(Ok(Reply::Pending(facing("h1"))))
            .act(unavailable());
        let mut transport = open(remote).await;
        let mut agent = Shover;
        let conclusion = HandDriver::new(&mut transport, &mut agent).run().await.unwrap();
        let Conclusion::Abandoned(abandonment) = conclusion else {
            panic!("expected abandonment");
        };
        assert!(matches!(
            abandonment.reason,
            Reason::Transport(SessionError::Unavailable(_))
        ));
        assert_eq!(acts(&transport).len(), 3);
    }

    #[tokio::test]
    async fn server_rejection_abandons() {
        let remote = Scripted::default()
            .create(Ok(Reply::Pending(facing("h1"))))
            .act(Err(SessionError::IllegalAction("422".into())));
        let mut transport = open(remote).await;
        let mut agent = Shover;
        let conclusion = HandDriver::new(&mut transport, &mut agent).run().await.unwrap();
        assert!(matches!(conclusion, Conclusion::Abandoned(_)));
    }

    #[tokio::test]
    async fn fatal_errors_escape() {
        let remote = Scripted::default().create(Err(SessionError::Auth("401".into())));
        let mut transport = open(remote).await;
        let mut agent = Shover;
        let result = HandDriver::new(&mut transport, &mut agent).run().await;
        assert!(matches!(result, Err(SessionError::Auth(_))));
    }
}
