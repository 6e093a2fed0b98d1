//! Counter state and its transitions.
//!
//! [`CounterState`] is the whole of the widget's domain state. It changes only
//! through [`CounterState::increment`] and [`CounterState::decrement`], both of
//! which are total: neither can fail, and the floor at zero is modeled as a
//! visible flag rather than an error.

use std::fmt;

/// The count and the below-zero flag.
///
/// `show_error` is true exactly when the most recent transition was a
/// decrement attempted at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CounterState {
    count: u64,
    show_error: bool,
}

/// What a transition did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The count went up by one.
    Incremented,
    /// The count went down by one.
    Decremented,
    /// A decrement was attempted at zero; the count is unchanged and the
    /// error flag is set.
    Floored,
}

/// The two logical states of the widget, ignoring the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No error is shown.
    Normal,
    /// The floor error is shown.
    ErrorShown,
}

impl CounterState {
    /// A freshly mounted counter: zero, no error.
    pub const fn new() -> Self {
        Self {
            count: 0,
            show_error: false,
        }
    }

    /// The current count.
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Whether the floor error is shown.
    pub const fn show_error(&self) -> bool {
        self.show_error
    }

    /// The current logical phase.
    pub const fn phase(&self) -> Phase {
        if self.show_error {
            Phase::ErrorShown
        } else {
            Phase::Normal
        }
    }

    /// Add one and clear any error.
    ///
    /// Saturates at `u64::MAX`: at that value the count stays put instead of
    /// growing by one. The error flag is still cleared.
    pub fn increment(&mut self) -> Outcome {
        self.count = self.count.saturating_add(1);
        self.show_error = false;
        Outcome::Incremented
    }

    /// Subtract one, or flag the error if already at zero.
    pub fn decrement(&mut self) -> Outcome {
        if self.count > 0 {
            self.count -= 1;
            self.show_error = false;
            Outcome::Decremented
        } else {
            self.show_error = true;
            Outcome::Floored
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Incremented => "incremented",
            Self::Decremented => "decremented",
            Self::Floored => "floored",
        };
        write!(f, "{name}")
    }
}
