//! Commands for side effects.
//!
//! A command is a lazy computation that produces a message when the host
//! runs it. The counter's transitions are pure, so the only command the widget
//! ever returns is [`quit`].

use crate::message::{Message, QuitMsg};

/// A command that produces a message when executed.
///
/// Commands don't run until the host executes them, which keeps `update`
/// free of side effects.
///
/// # Example
///
/// ```rust
/// use counter_widget::{Cmd, CounterMsg, Message};
///
/// let cmd = Cmd::new(|| Message::new(CounterMsg::Increment));
/// let msg = cmd.execute().unwrap();
/// assert!(msg.is::<CounterMsg>());
/// ```
pub struct Cmd(Box<dyn FnOnce() -> Option<Message> + Send + 'static>);

impl Cmd {
    /// Create a new command from a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() -> Message + Send + 'static,
    {
        Self(Box::new(move || Some(f())))
    }

    /// Execute the command and return the resulting message.
    pub fn execute(self) -> Option<Message> {
        (self.0)()
    }
}

impl std::fmt::Debug for Cmd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cmd").finish_non_exhaustive()
    }
}

/// Command that signals the program to quit.
pub fn quit() -> Cmd {
    Cmd::new(|| Message::new(QuitMsg))
}
