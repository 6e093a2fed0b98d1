//! Message types for the counter.
//!
//! Every input the widget reacts to arrives as a [`Message`]: activation
//! events from the buttons, keyboard and mouse input from the host, and the
//! lifecycle signals that end the event loop.

use std::any::Any;
use std::fmt;

/// A type-erased message container.
///
/// Messages can be any type that is `Send + 'static`. Use [`Message::new`] to
/// wrap a value and [`Message::downcast`] or [`Message::downcast_ref`] to get
/// it back.
///
/// # Example
///
/// ```rust
/// use counter_widget::{CounterMsg, Message};
///
/// let msg = Message::new(CounterMsg::Increment);
/// assert_eq!(msg.downcast_ref::<CounterMsg>(), Some(&CounterMsg::Increment));
/// ```
pub struct Message(Box<dyn Any + Send>);

impl Message {
    /// Create a new message from any sendable type.
    pub fn new<M: Any + Send + 'static>(msg: M) -> Self {
        Self(Box::new(msg))
    }

    /// Try to downcast to a specific message type.
    pub fn downcast<M: Any + Send + 'static>(self) -> Option<M> {
        self.0.downcast::<M>().ok().map(|b| *b)
    }

    /// Try to get a reference to the message as a specific type.
    pub fn downcast_ref<M: Any + Send + 'static>(&self) -> Option<&M> {
        self.0.downcast_ref::<M>()
    }

    /// Check if the message is of a specific type.
    pub fn is<M: Any + Send + 'static>(&self) -> bool {
        self.0.is::<M>()
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message").finish_non_exhaustive()
    }
}

impl From<CounterMsg> for Message {
    fn from(msg: CounterMsg) -> Self {
        Self::new(msg)
    }
}

/// Activation events delivered to the counter widget.
///
/// These are what the increment and decrement buttons emit when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterMsg {
    /// The increment button was activated.
    Increment,
    /// The decrement button was activated.
    Decrement,
}

impl fmt::Display for CounterMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Increment => write!(f, "increment"),
            Self::Decrement => write!(f, "decrement"),
        }
    }
}

/// Message to quit the program gracefully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuitMsg;

/// Message for Ctrl+C interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterruptMsg;

/// Message containing terminal window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSizeMsg {
    /// Terminal width in columns.
    pub width: u16,
    /// Terminal height in rows.
    pub height: u16,
}
