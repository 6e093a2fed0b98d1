//! The counter widget.
//!
//! [`CounterWidget`] wraps a [`CounterState`] with the presentation concerns
//! around it: which button has keyboard focus and whether output is colored.
//! Neither affects the count. The render tree, the text frame and the view
//! string are all re-derived from the current state on demand.

use crossterm::style::Stylize;
use tracing::{debug, info, trace};

use crate::command::{Cmd, quit};
use crate::key::{KeyMsg, KeyType};
use crate::layout::{Frame, SpanStyle, layout};
use crate::message::{CounterMsg, Message};
use crate::model::{Model, Render};
use crate::mouse::MouseMsg;
use crate::node::{Node, Tone};
use crate::state::{CounterState, Outcome};

/// Test hook of the root container.
pub const APP_ID: &str = "component-app";
/// Test hook of the increment button.
pub const INCREMENT_ID: &str = "increment-button";
/// Test hook of the decrement button.
pub const DECREMENT_ID: &str = "decrement-button";
/// Test hook of the display container.
pub const DISPLAY_ID: &str = "counter-display";
/// Test hook of the count text inside the display.
pub const COUNT_ID: &str = "count";
/// Test hook of the error message.
pub const ERROR_ID: &str = "error-message";

/// Text shown while the floor error is set.
pub const ERROR_TEXT: &str = "The counter cannot go below zero";

const DISPLAY_PREFIX: &str = "The counter is currently ";
const HELP_TEXT: &str = "+/- change · tab/enter select · click buttons · q quit";

/// Which button has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    /// The increment button.
    #[default]
    Increment,
    /// The decrement button.
    Decrement,
}

impl Focus {
    /// The other button.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Increment => Self::Decrement,
            Self::Decrement => Self::Increment,
        }
    }

    /// The message the focused button emits.
    pub const fn action(self) -> CounterMsg {
        match self {
            Self::Increment => CounterMsg::Increment,
            Self::Decrement => CounterMsg::Decrement,
        }
    }
}

fn increment_clicked() -> Message {
    Message::new(CounterMsg::Increment)
}

fn decrement_clicked() -> Message {
    Message::new(CounterMsg::Decrement)
}

/// A counter with increment and decrement buttons that never goes below zero.
///
/// # Example
///
/// ```rust
/// use counter_widget::{CounterMsg, CounterWidget, Message, Model};
///
/// let mut widget = CounterWidget::new();
/// widget.update(Message::new(CounterMsg::Decrement));
/// assert_eq!(widget.state().count(), 0);
/// assert!(widget.state().show_error());
///
/// widget.update(Message::new(CounterMsg::Increment));
/// assert_eq!(widget.state().count(), 1);
/// assert!(!widget.state().show_error());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CounterWidget {
    state: CounterState,
    focus: Focus,
    color: bool,
}

impl CounterWidget {
    /// A freshly mounted widget with plain output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable ANSI styling in [`Model::view`].
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// The domain state.
    pub fn state(&self) -> &CounterState {
        &self.state
    }

    /// The focused button.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Whether [`Model::view`] emits ANSI styling.
    pub fn color(&self) -> bool {
        self.color
    }

    /// Apply one activation event.
    pub fn apply(&mut self, msg: CounterMsg) -> Outcome {
        let outcome = match msg {
            CounterMsg::Increment => self.state.increment(),
            CounterMsg::Decrement => self.state.decrement(),
        };
        if outcome == Outcome::Floored {
            info!(count = self.state.count(), "decrement refused at zero");
        } else {
            debug!(%msg, %outcome, count = self.state.count(), "counter transition");
        }
        outcome
    }

    /// Lay out the current render tree.
    pub fn frame(&self) -> Frame {
        layout(&self.render())
    }

    fn handle_key(&mut self, key: &KeyMsg) -> Option<Cmd> {
        trace!(%key, "key");
        match key.key_type {
            KeyType::Runes => match key.rune() {
                Some('+' | '=' | 'k') => {
                    self.apply(CounterMsg::Increment);
                }
                Some('-' | '_' | 'j') => {
                    self.apply(CounterMsg::Decrement);
                }
                Some('q' | 'Q') => return Some(quit()),
                _ => {}
            },
            KeyType::Up => {
                self.apply(CounterMsg::Increment);
            }
            KeyType::Down => {
                self.apply(CounterMsg::Decrement);
            }
            KeyType::Tab | KeyType::ShiftTab | KeyType::Left | KeyType::Right => {
                self.focus = self.focus.toggled();
            }
            KeyType::Enter | KeyType::Space => {
                self.apply(self.focus.action());
            }
            KeyType::Esc | KeyType::CtrlC => return Some(quit()),
            KeyType::Backspace | KeyType::Other => {}
        }
        None
    }

    fn handle_mouse(&mut self, mouse: &MouseMsg) {
        if !mouse.is_click() {
            return;
        }
        let tree = self.render();
        let Some(region) = layout(&tree).hit(mouse.x, mouse.y).cloned() else {
            trace!(%mouse, "click outside controls");
            return;
        };
        let action = tree
            .find_first(&region.test_id)
            .and_then(Node::activate)
            .and_then(Message::downcast::<CounterMsg>);
        if let Some(action) = action {
            self.focus = match action {
                CounterMsg::Increment => Focus::Increment,
                CounterMsg::Decrement => Focus::Decrement,
            };
            self.apply(action);
        }
    }

    fn paint(&self, frame: &Frame) -> String {
        let mut lines: Vec<String> = frame
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|span| {
                        if !self.color {
                            return span.text.clone();
                        }
                        let text = span.text.as_str();
                        match span.style {
                            SpanStyle::Text(Tone::Normal) | SpanStyle::Gap => text.to_string(),
                            SpanStyle::Text(Tone::Strong) => text.bold().to_string(),
                            SpanStyle::Text(Tone::Alert) => text.red().bold().to_string(),
                            SpanStyle::Button { focused: true } => text.reverse().to_string(),
                            SpanStyle::Button { focused: false } => text.to_string(),
                        }
                    })
                    .collect()
            })
            .collect();

        lines.push(String::new());
        lines.push(if self.color {
            HELP_TEXT.dim().to_string()
        } else {
            HELP_TEXT.to_string()
        });
        lines.join("\n")
    }
}

impl Render for CounterWidget {
    fn render(&self) -> Node {
        let error = self.state.show_error().then(|| {
            Node::text(ERROR_TEXT)
                .with_test_id(ERROR_ID)
                .with_tone(Tone::Alert)
        });

        Node::container()
            .with_test_id(APP_ID)
            .with_child(
                Node::container()
                    .with_test_id(DISPLAY_ID)
                    .with_child(Node::text(DISPLAY_PREFIX))
                    .with_child(
                        Node::text(self.state.count().to_string())
                            .with_test_id(COUNT_ID)
                            .with_tone(Tone::Strong),
                    ),
            )
            .with_optional_child(error)
            .with_child(
                Node::button("Increment", increment_clicked)
                    .with_test_id(INCREMENT_ID)
                    .with_focus(self.focus == Focus::Increment),
            )
            .with_child(
                Node::button("Decrement", decrement_clicked)
                    .with_test_id(DECREMENT_ID)
                    .with_focus(self.focus == Focus::Decrement),
            )
    }
}

impl Model for CounterWidget {
    fn init(&self) -> Option<Cmd> {
        None
    }

    fn update(&mut self, msg: Message) -> Option<Cmd> {
        if let Some(action) = msg.downcast_ref::<CounterMsg>() {
            self.apply(*action);
            return None;
        }
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key);
        }
        if let Some(mouse) = msg.downcast_ref::<MouseMsg>() {
            self.handle_mouse(mouse);
        }
        None
    }

    fn view(&self) -> String {
        self.paint(&self.frame())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{QuitMsg, WindowSizeMsg};

    fn send(widget: &mut CounterWidget, msg: impl std::any::Any + Send) -> Option<Cmd> {
        widget.update(Message::new(msg))
    }

    fn region(widget: &CounterWidget, id: &str) -> (u16, u16) {
        let frame = widget.frame();
        let region = frame
            .regions()
            .iter()
            .find(|r| r.test_id == id)
            .cloned()
            .unwrap();
        (region.start, region.row)
    }

    #[test]
    fn initial_view() {
        let widget = CounterWidget::new();
        assert_eq!(
            widget.view(),
            format!(
                "The counter is currently 0\n\n[ Increment ]  [ Decrement ]\n\n{HELP_TEXT}"
            )
        );
    }

    #[test]
    fn view_shows_error_line() {
        let mut widget = CounterWidget::new();
        widget.apply(CounterMsg::Decrement);
        let view = widget.view();
        let lines: Vec<&str> = view.lines().collect();
        assert_eq!(lines[0], "The counter is currently 0");
        assert_eq!(lines[1], ERROR_TEXT);
    }

    #[test]
    fn render_tree_has_each_hook_once() {
        let tree = CounterWidget::new().render();
        for id in [APP_ID, DISPLAY_ID, COUNT_ID, INCREMENT_ID, DECREMENT_ID] {
            assert_eq!(tree.find_by_test_attr(id).len(), 1, "hook {id}");
        }
        assert!(tree.find_by_test_attr(ERROR_ID).is_empty());
    }

    #[test]
    fn count_node_holds_decimal_count() {
        let mut widget = CounterWidget::new();
        for _ in 0..12 {
            widget.apply(CounterMsg::Increment);
        }
        let tree = widget.render();
        assert_eq!(tree.find_first(COUNT_ID).unwrap().text_content(), "12");
        assert_eq!(
            tree.find_first(DISPLAY_ID).unwrap().text_content(),
            "The counter is currently 12"
        );
    }

    #[test]
    fn keys_drive_transitions() {
        let mut widget = CounterWidget::new();
        send(&mut widget, KeyMsg::from_char('+'));
        send(&mut widget, KeyMsg::from_char('k'));
        send(&mut widget, KeyMsg::from_type(KeyType::Up));
        assert_eq!(widget.state().count(), 3);

        send(&mut widget, KeyMsg::from_char('-'));
        send(&mut widget, KeyMsg::from_char('j'));
        send(&mut widget, KeyMsg::from_type(KeyType::Down));
        assert_eq!(widget.state().count(), 0);
        assert!(!widget.state().show_error());

        send(&mut widget, KeyMsg::from_char('-'));
        assert!(widget.state().show_error());
    }

    #[test]
    fn enter_activates_focused_button() {
        let mut widget = CounterWidget::new();
        assert_eq!(widget.focus(), Focus::Increment);
        send(&mut widget, KeyMsg::from_type(KeyType::Enter));
        assert_eq!(widget.state().count(), 1);

        send(&mut widget, KeyMsg::from_type(KeyType::Tab));
        assert_eq!(widget.focus(), Focus::Decrement);
        send(&mut widget, KeyMsg::from_type(KeyType::Space));
        assert_eq!(widget.state().count(), 0);
        send(&mut widget, KeyMsg::from_type(KeyType::Enter));
        assert!(widget.state().show_error());
    }

    #[test]
    fn focus_does_not_touch_state() {
        let mut widget = CounterWidget::new();
        let before = *widget.state();
        send(&mut widget, KeyMsg::from_type(KeyType::Right));
        send(&mut widget, KeyMsg::from_type(KeyType::Left));
        send(&mut widget, KeyMsg::from_type(KeyType::ShiftTab));
        assert_eq!(*widget.state(), before);
        assert_eq!(widget.focus(), Focus::Decrement);
    }

    #[test]
    fn quit_keys_return_quit_command() {
        for key in [
            KeyMsg::from_char('q'),
            KeyMsg::from_type(KeyType::Esc),
            KeyMsg::from_type(KeyType::CtrlC),
        ] {
            let mut widget = CounterWidget::new();
            let cmd = send(&mut widget, key).expect("quit command");
            assert!(cmd.execute().unwrap().is::<QuitMsg>());
        }
    }

    #[test]
    fn unbound_input_is_ignored() {
        let mut widget = CounterWidget::new();
        assert!(send(&mut widget, KeyMsg::from_char('x')).is_none());
        assert!(send(&mut widget, KeyMsg::from_type(KeyType::Other)).is_none());
        assert!(
            send(
                &mut widget,
                WindowSizeMsg {
                    width: 80,
                    height: 24
                }
            )
            .is_none()
        );
        assert_eq!(*widget.state(), CounterState::new());
    }

    #[test]
    fn mouse_click_on_buttons() {
        let mut widget = CounterWidget::new();
        let (x, y) = region(&widget, INCREMENT_ID);
        send(&mut widget, MouseMsg::left_press(x + 1, y));
        assert_eq!(widget.state().count(), 1);

        let (x, y) = region(&widget, DECREMENT_ID);
        send(&mut widget, MouseMsg::left_press(x, y));
        assert_eq!(widget.state().count(), 0);
        assert_eq!(widget.focus(), Focus::Decrement);

        send(&mut widget, MouseMsg::left_press(x, y));
        assert!(widget.state().show_error());
    }

    #[test]
    fn mouse_click_tracks_button_row_when_error_shown() {
        let mut widget = CounterWidget::new();
        let (_, row_before) = region(&widget, INCREMENT_ID);
        widget.apply(CounterMsg::Decrement);
        let (x, row_after) = region(&widget, INCREMENT_ID);
        assert_eq!(row_after, row_before + 1);

        send(&mut widget, MouseMsg::left_press(x, row_after));
        assert_eq!(widget.state().count(), 1);
        assert!(!widget.state().show_error());
    }

    #[test]
    fn mouse_click_outside_is_ignored() {
        let mut widget = CounterWidget::new();
        send(&mut widget, MouseMsg::left_press(0, 0));
        send(&mut widget, MouseMsg::left_press(200, 2));
        assert_eq!(*widget.state(), CounterState::new());
    }

    #[test]
    fn colored_view_contains_plain_text() {
        let widget = CounterWidget::new().with_color(true);
        assert!(widget.color());
        let view = widget.view();
        assert!(view.contains("Increment"));
        assert!(view.contains('\u{1b}'));
    }
}
