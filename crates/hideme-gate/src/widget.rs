//! Payload-wrapping widget shell.
//!
//! Pairs a concealed payload with its reveal gate. The embedder feeds
//! interaction events in and reads the state back out; what to draw for a
//! given state is its problem.

use rand::Rng;
use rand::rngs::ThreadRng;

use hideme_common::{Appearance, GateOptions};

use crate::age::{Clock, SystemClock};
use crate::gate::{GateEvent, GateState, RevealGate};

/// A concealed payload plus its reveal gate.
///
/// Without a payload there is nothing to conceal: no gate is constructed,
/// every event is a no-op, and nothing is ever exposed.
#[derive(Debug)]
pub struct HideMe<T, R = ThreadRng, C = SystemClock> {
    payload: Option<T>,
    gate: Option<RevealGate<R, C>>,
}

impl<T> HideMe<T> {
    pub fn new(payload: Option<T>, options: GateOptions) -> Self {
        let gate = payload.as_ref().map(|_| RevealGate::new(options));
        Self { payload, gate }
    }
}

impl<T, R: Rng, C: Clock> HideMe<T, R, C> {
    /// Create a widget with an injected RNG and clock
    pub fn with_parts(payload: Option<T>, options: GateOptions, rng: R, clock: C) -> Self {
        let gate = payload
            .as_ref()
            .map(|_| RevealGate::with_parts(options, rng, clock));
        Self { payload, gate }
    }

    /// Forward one interaction event to the gate, if there is one
    pub fn handle(&mut self, event: GateEvent) {
        if let Some(gate) = &mut self.gate {
            gate.handle(event);
        }
    }

    /// Gate state, or `None` for the degenerate payload-less widget
    pub fn state(&self) -> Option<GateState> {
        self.gate.as_ref().map(RevealGate::state)
    }

    pub fn gate(&self) -> Option<&RevealGate<R, C>> {
        self.gate.as_ref()
    }

    /// The payload, visible only once the gate has revealed it
    pub fn content(&self) -> Option<&T> {
        match &self.gate {
            Some(gate) if gate.is_revealed() => self.payload.as_ref(),
            _ => None,
        }
    }

    /// Visual treatment while concealed; `None` once revealed or when there
    /// is nothing to conceal
    pub fn appearance(&self) -> Option<Appearance> {
        match &self.gate {
            Some(gate) if !gate.is_revealed() => Some(gate.options().appearance()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hideme_common::ConcealMode;

    #[test]
    fn test_absent_payload_renders_nothing() {
        let mut widget: HideMe<&str> = HideMe::new(None, GateOptions::default());

        assert!(widget.state().is_none());
        assert!(widget.appearance().is_none());

        widget.handle(GateEvent::Activate);
        widget.handle(GateEvent::Submit);
        assert!(widget.state().is_none());
        assert!(widget.content().is_none());
    }

    #[test]
    fn test_content_hidden_until_revealed() {
        let mut widget = HideMe::new(Some("secret"), GateOptions::default());

        assert_eq!(widget.state(), Some(GateState::Concealed));
        assert!(widget.content().is_none());
        assert_eq!(widget.appearance(), Some(Appearance::Blur(5)));

        widget.handle(GateEvent::Activate);

        assert_eq!(widget.state(), Some(GateState::Revealed));
        assert_eq!(widget.content(), Some(&"secret"));
        assert!(widget.appearance().is_none());
    }

    #[test]
    fn test_blackout_appearance() {
        let widget = HideMe::new(
            Some("secret"),
            GateOptions {
                mode: ConcealMode::Blur,
                black_out: true,
                ..Default::default()
            },
        );
        assert_eq!(widget.appearance(), Some(Appearance::Blackout));
    }

    #[test]
    fn test_captcha_flow_through_widget() {
        let mut widget = HideMe::new(
            Some(vec![1, 2, 3]),
            GateOptions {
                mode: ConcealMode::Captcha,
                ..Default::default()
            },
        );

        widget.handle(GateEvent::Activate);
        assert!(widget.content().is_none());

        let answer = widget.gate().unwrap().problem().unwrap().answer;
        widget.handle(GateEvent::AnswerInput(answer.to_string()));
        widget.handle(GateEvent::Submit);

        assert_eq!(widget.content(), Some(&vec![1, 2, 3]));
    }
}
