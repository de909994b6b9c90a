//! Reveal-gate state machine.
//!
//! Owns the widget's visibility state and runs the verification
//! sub-protocols. Every transition is a synchronous response to a discrete
//! user-interaction event; `Revealed` is terminal and there is no path back
//! to `Concealed`.

use chrono::NaiveDate;
use rand::Rng;
use rand::rngs::ThreadRng;
use serde::{Deserialize, Serialize};

use hideme_common::constants::DATE_INPUT_FORMAT;
use hideme_common::{
    AgeVerificationError, ChallengeKind, ConcealMode, GateOptions, MathProblem,
};

use crate::age::{self, Clock, SystemClock};
use crate::captcha;

/// Gate visibility state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateState {
    /// Content hidden, gate waiting for activation
    Concealed,
    /// A verification challenge is open
    ChallengeOpen(ChallengeKind),
    /// Content visible. Terminal.
    Revealed,
}

/// User-interaction events driving the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateEvent {
    /// Pointer or keyboard activation of the gate control
    Activate,
    /// CAPTCHA answer field changed
    AnswerInput(String),
    /// Date-of-birth field changed
    DateInput(String),
    /// Submit the open challenge
    Submit,
    /// Dismiss the open challenge
    Cancel,
}

impl GateEvent {
    /// Map a key press on the gate control to an event.
    ///
    /// Enter and Space are equivalent to a pointer activation; every other
    /// key produces nothing.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | " " => Some(Self::Activate),
            _ => None,
        }
    }
}

/// The reveal-gate state machine.
///
/// Holds the only mutable state of the widget: the gate state, the current
/// CAPTCHA problem, the in-progress challenge inputs, and the current
/// validation error. The RNG and clock are injectable for deterministic
/// tests; [`RevealGate::new`] wires in the thread RNG and the system clock.
#[derive(Debug)]
pub struct RevealGate<R = ThreadRng, C = SystemClock> {
    options: GateOptions,
    state: GateState,
    problem: Option<MathProblem>,
    answer_input: String,
    date_input: String,
    error: Option<AgeVerificationError>,
    rng: R,
    clock: C,
}

impl RevealGate {
    pub fn new(options: GateOptions) -> Self {
        Self::with_parts(options, rand::rng(), SystemClock)
    }
}

impl<R: Rng, C: Clock> RevealGate<R, C> {
    /// Create a gate with an injected RNG and clock
    pub fn with_parts(options: GateOptions, rng: R, clock: C) -> Self {
        Self {
            options,
            state: GateState::Concealed,
            problem: None,
            answer_input: String::new(),
            date_input: String::new(),
            error: None,
            rng,
            clock,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == GateState::Revealed
    }

    pub fn options(&self) -> &GateOptions {
        &self.options
    }

    /// The current CAPTCHA problem, present while the CAPTCHA challenge is open
    pub fn problem(&self) -> Option<&MathProblem> {
        self.problem.as_ref()
    }

    pub fn answer_input(&self) -> &str {
        &self.answer_input
    }

    pub fn date_input(&self) -> &str {
        &self.date_input
    }

    pub fn error(&self) -> Option<&AgeVerificationError> {
        self.error.as_ref()
    }

    /// Inline message for the current validation error, if any
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// Apply one event. Unlisted (state, event) pairs are no-ops, and once
    /// revealed every event is ignored.
    pub fn handle(&mut self, event: GateEvent) {
        if self.state == GateState::Revealed {
            return;
        }

        match (self.state, event) {
            (GateState::Concealed, GateEvent::Activate) => self.activate(),
            (GateState::ChallengeOpen(ChallengeKind::Captcha), GateEvent::AnswerInput(value)) => {
                self.answer_input = value;
            }
            (
                GateState::ChallengeOpen(ChallengeKind::AgeVerification),
                GateEvent::DateInput(value),
            ) => {
                // Editing the date clears any prior message
                self.date_input = value;
                self.error = None;
            }
            (GateState::ChallengeOpen(ChallengeKind::Captcha), GateEvent::Submit) => {
                self.submit_captcha();
            }
            (GateState::ChallengeOpen(ChallengeKind::AgeVerification), GateEvent::Submit) => {
                self.submit_age();
            }
            (GateState::ChallengeOpen(_), GateEvent::Cancel) => self.cancel(),
            _ => {}
        }
    }

    fn activate(&mut self) {
        match self.options.mode {
            ConcealMode::Captcha => {
                self.problem = Some(captcha::generate(
                    self.options.captcha_difficulty,
                    &mut self.rng,
                ));
                self.state = GateState::ChallengeOpen(ChallengeKind::Captcha);
                tracing::debug!(
                    difficulty = ?self.options.captcha_difficulty,
                    "CAPTCHA challenge opened"
                );
            }
            ConcealMode::AgeVerification => {
                self.state = GateState::ChallengeOpen(ChallengeKind::AgeVerification);
                tracing::debug!(
                    minimum_age = self.options.minimum_age,
                    "Age verification challenge opened"
                );
            }
            ConcealMode::Blur | ConcealMode::Blackout => self.reveal(),
        }
    }

    fn submit_captcha(&mut self) {
        let correct = self
            .problem
            .as_ref()
            .is_some_and(|p| captcha::check_answer(p, &self.answer_input));

        if correct {
            self.reveal();
        } else {
            // Wrong answer: draw a fresh problem and clear the field
            self.problem = Some(captcha::generate(
                self.options.captcha_difficulty,
                &mut self.rng,
            ));
            self.answer_input.clear();
            tracing::debug!("Incorrect CAPTCHA answer, problem regenerated");
        }
    }

    fn submit_age(&mut self) {
        match self.validate_date_of_birth() {
            Ok(()) => self.reveal(),
            Err(err) => {
                tracing::debug!(error = %err, "Age verification rejected");
                self.error = Some(err);
            }
        }
    }

    /// Validation order: empty, unparseable, future, underage. The first
    /// failure wins and replaces any prior message.
    fn validate_date_of_birth(&self) -> Result<(), AgeVerificationError> {
        let input = self.date_input.trim();
        if input.is_empty() {
            return Err(AgeVerificationError::MissingDate);
        }

        let birth_date = NaiveDate::parse_from_str(input, DATE_INPUT_FORMAT)
            .map_err(|_| AgeVerificationError::InvalidDate)?;

        let today = self.clock.today();
        if birth_date > today {
            return Err(AgeVerificationError::FutureDate);
        }

        if !age::is_age_valid(birth_date, self.options.minimum_age, today) {
            return Err(AgeVerificationError::Underage {
                minimum_age: self.options.minimum_age,
            });
        }

        Ok(())
    }

    fn reveal(&mut self) {
        self.state = GateState::Revealed;
        self.problem = None;
        self.answer_input.clear();
        self.date_input.clear();
        self.error = None;
        tracing::debug!("Content revealed");
    }

    fn cancel(&mut self) {
        self.state = GateState::Concealed;
        self.problem = None;
        self.answer_input.clear();
        self.date_input.clear();
        self.error = None;
        tracing::debug!("Challenge cancelled");
    }
}
