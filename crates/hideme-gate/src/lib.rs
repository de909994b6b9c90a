//! # HideMe Gate
//!
//! The HideMe logic engine. Conceals a payload behind an interactive reveal
//! gate and runs the verification sub-protocols (arithmetic CAPTCHA,
//! date-of-birth age check) before revealing it.
//!
//! ## Architecture
//! ```text
//! HideMe (payload shell)
//!    └── RevealGate (state machine)
//!           ├── captcha (problem generation + answer checking)
//!           └── age (age computation + Clock)
//! ```
//!
//! Rendering, styling, and accessibility wiring are the embedder's job; this
//! crate owns only the state the widget needs and the transitions between
//! states. Randomness and "now" are injectable so every path is
//! deterministically testable.

pub mod age;
pub mod captcha;
pub mod gate;
pub mod widget;

pub use gate::{GateEvent, GateState, RevealGate};
pub use widget::HideMe;
