/// Phase of the live-update channel. The dashboard starts `Connecting`,
/// is `Live` while push messages arrive, and degrades to `Polling` when the
/// channel fails. `Polling` is terminal for the lifetime of a mount: there
/// is no Polling -> Live recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LivePhase {
    Connecting,
    Live,
    Polling,
}

impl LivePhase {
    pub fn label(&self) -> &'static str {
        match self {
            LivePhase::Connecting => "connecting",
            LivePhase::Live => "live",
            LivePhase::Polling => "polling",
        }
    }
}

/// Observable events on the push channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveEvent {
    /// Any inbound message; the payload is ignored.
    Message,
    /// Open failure, stream error, or stream end.
    ConnectionLost,
}

/// What the caller must do after feeding an event to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveAction {
    None,
    /// Re-fetch every dataset.
    Refresh,
    /// Arm the fixed-interval polling timer. Emitted at most once.
    StartPolling,
}

/// Explicit state machine for the live-update channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveUpdates {
    phase: LivePhase,
}

impl LiveUpdates {
    pub fn new() -> Self {
        Self {
            phase: LivePhase::Connecting,
        }
    }

    pub fn phase(&self) -> LivePhase {
        self.phase
    }

    /// Advances the machine and returns the action the event demands.
    /// Once `Polling`, every further event is absorbed: a second
    /// `ConnectionLost` cannot arm the timer again, and a late message
    /// cannot promote the channel back to `Live`.
    pub fn apply(&mut self, event: LiveEvent) -> LiveAction {
        match (self.phase, event) {
            (LivePhase::Connecting | LivePhase::Live, LiveEvent::Message) => {
                self.phase = LivePhase::Live;
                LiveAction::Refresh
            }
            (LivePhase::Connecting | LivePhase::Live, LiveEvent::ConnectionLost) => {
                log::warn!("push channel lost, falling back to polling");
                self.phase = LivePhase::Polling;
                LiveAction::StartPolling
            }
            (LivePhase::Polling, _) => LiveAction::None,
        }
    }
}

impl Default for LiveUpdates {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_connecting() {
        assert_eq!(LiveUpdates::new().phase(), LivePhase::Connecting);
    }

    #[test]
    fn first_message_goes_live_and_refreshes() {
        let mut machine = LiveUpdates::new();
        assert_eq!(machine.apply(LiveEvent::Message), LiveAction::Refresh);
        assert_eq!(machine.phase(), LivePhase::Live);
    }

    #[test]
    fn every_live_message_refreshes() {
        let mut machine = LiveUpdates::new();
        machine.apply(LiveEvent::Message);
        assert_eq!(machine.apply(LiveEvent::Message), LiveAction::Refresh);
        assert_eq!(machine.apply(LiveEvent::Message), LiveAction::Refresh);
        assert_eq!(machine.phase(), LivePhase::Live);
    }

    #[test]
    fn connect_failure_arms_polling_exactly_once() {
        let mut machine = LiveUpdates::new();
        assert_eq!(
            machine.apply(LiveEvent::ConnectionLost),
            LiveAction::StartPolling
        );
        assert_eq!(machine.phase(), LivePhase::Polling);

        // A stream that errors and then ends reports the loss twice; the
        // second report must not arm a duplicate timer.
        assert_eq!(machine.apply(LiveEvent::ConnectionLost), LiveAction::None);
        assert_eq!(machine.phase(), LivePhase::Polling);
    }

    #[test]
    fn live_failure_degrades_to_polling() {
        let mut machine = LiveUpdates::new();
        machine.apply(LiveEvent::Message);
        assert_eq!(
            machine.apply(LiveEvent::ConnectionLost),
            LiveAction::StartPolling
        );
        assert_eq!(machine.phase(), LivePhase::Polling);
    }

    #[test]
    fn no_recovery_from_polling() {
        let mut machine = LiveUpdates::new();
        machine.apply(LiveEvent::ConnectionLost);
        assert_eq!(machine.apply(LiveEvent::Message), LiveAction::None);
        assert_eq!(machine.phase(), LivePhase::Polling);
    }
}
