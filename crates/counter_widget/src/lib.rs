#![forbid(unsafe_code)]

//! # Counter Widget
//!
//! A counter with increment and decrement buttons, a numeric display, and an
//! error message shown when a decrement is attempted at zero.
//!
//! The widget follows the Elm Architecture: it owns a [`CounterState`],
//! reacts to [`Message`]s in [`Model::update`], and re-derives its output
//! from state in [`Render::render`] and [`Model::view`].
//!
//! ## Render hooks
//!
//! | Hook | Node |
//! |------|------|
//! | `component-app` | root container |
//! | `increment-button` | increment control |
//! | `decrement-button` | decrement control |
//! | `counter-display` | display container |
//! | `count` | decimal count, inside the display |
//! | `error-message` | present only after a refused decrement |
//!
//! ## Example
//!
//! ```rust
//! use counter_widget::simulator::ProgramSimulator;
//! use counter_widget::{CounterWidget, COUNT_ID, DECREMENT_ID, ERROR_ID};
//!
//! let mut sim = ProgramSimulator::new(CounterWidget::new());
//! sim.simulate_click(DECREMENT_ID);
//!
//! assert_eq!(sim.text_of(COUNT_ID).as_deref(), Some("0"));
//! assert!(sim.has_one(ERROR_ID));
//! ```

pub mod command;
pub mod key;
pub mod layout;
pub mod message;
pub mod model;
pub mod mouse;
pub mod node;
pub mod simulator;
pub mod state;
pub mod widget;

pub use command::{Cmd, quit};
pub use key::{KeyMsg, KeyType};
pub use layout::{Frame, HitRegion, Span, SpanStyle, layout};
pub use message::{CounterMsg, InterruptMsg, Message, QuitMsg, WindowSizeMsg};
pub use model::{Model, Render};
pub use mouse::{MouseAction, MouseButton, MouseMsg};
pub use node::{Node, NodeKind, Tone};
pub use state::{CounterState, Outcome, Phase};
pub use widget::{
    APP_ID, COUNT_ID, CounterWidget, DECREMENT_ID, DISPLAY_ID, ERROR_ID, ERROR_TEXT, Focus,
    INCREMENT_ID,
};
