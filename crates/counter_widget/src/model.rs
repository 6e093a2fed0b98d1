//! The Elm-architecture traits.

use crate::command::Cmd;
use crate::message::Message;
use crate::node::Node;

/// A component driven by messages.
///
/// # Example
///
/// ```rust
/// use counter_widget::{Cmd, CounterMsg, Message, Model};
///
/// struct Clicks(u32);
///
/// impl Model for Clicks {
///     fn init(&self) -> Option<Cmd> { None }
///
///     fn update(&mut self, msg: Message) -> Option<Cmd> {
///         if msg.is::<CounterMsg>() {
///             self.0 += 1;
///         }
///         None
///     }
///
///     fn view(&self) -> String {
///         format!("Clicks: {}", self.0)
///     }
/// }
/// ```
pub trait Model: Send + 'static {
    /// Return an optional startup command. Called once at mount.
    fn init(&self) -> Option<Cmd>;

    /// Process a message and return an optional follow-up command.
    fn update(&mut self, msg: Message) -> Option<Cmd>;

    /// Render the model as a string for display.
    fn view(&self) -> String;
}

/// A model whose output is an addressable node tree.
pub trait Render {
    /// Build the render tree for the current state.
    fn render(&self) -> Node;
}
