//! Program simulator for testing models without a terminal.
//!
//! [`ProgramSimulator`] mounts a model, feeds it messages one at a time and
//! records every view it produces. For models that implement [`Render`] it
//! can also query the render tree by test hook and click buttons, the way a
//! user would.

use std::collections::VecDeque;

use crate::command::Cmd;
use crate::message::{InterruptMsg, Message, QuitMsg};
use crate::model::{Model, Render};
use crate::node::Node;

/// Statistics tracked during simulation.
#[derive(Debug, Clone, Default)]
pub struct SimulationStats {
    /// Number of times init() was called.
    pub init_calls: usize,
    /// Number of times update() was called.
    pub update_calls: usize,
    /// Number of times view() was called.
    pub view_calls: usize,
    /// Commands that were returned from init/update.
    pub commands_returned: usize,
    /// Whether quit was requested.
    pub quit_requested: bool,
}

/// A simulator for testing Model implementations without a terminal.
///
/// # Example
///
/// ```rust
/// use counter_widget::simulator::ProgramSimulator;
/// use counter_widget::{CounterWidget, COUNT_ID, INCREMENT_ID};
///
/// let mut sim = ProgramSimulator::new(CounterWidget::new());
/// sim.simulate_click(INCREMENT_ID);
///
/// assert_eq!(sim.text_of(COUNT_ID).as_deref(), Some("1"));
/// ```
pub struct ProgramSimulator<M: Model> {
    model: M,
    input_queue: VecDeque<Message>,
    output_views: Vec<String>,
    stats: SimulationStats,
    initialized: bool,
}

impl<M: Model> ProgramSimulator<M> {
    /// Create a new simulator with the given model.
    pub fn new(model: M) -> Self {
        Self {
            model,
            input_queue: VecDeque::new(),
            output_views: Vec::new(),
            stats: SimulationStats::default(),
            initialized: false,
        }
    }

    /// Initialize the model, calling init() and capturing any returned command.
    ///
    /// Only the first call has an effect.
    pub fn init(&mut self) -> Option<Cmd> {
        if self.initialized {
            return None;
        }
        self.initialized = true;
        self.stats.init_calls += 1;

        let cmd = self.model.init();
        if cmd.is_some() {
            self.stats.commands_returned += 1;
        }

        self.stats.view_calls += 1;
        self.output_views.push(self.model.view());

        cmd
    }

    /// Queue a message for processing.
    pub fn send(&mut self, msg: impl Into<Message>) {
        self.input_queue.push_back(msg.into());
    }

    /// Process one message from the queue, calling update and view.
    ///
    /// Returns the command returned by update, if any. A [`QuitMsg`] or
    /// [`InterruptMsg`] marks the simulation as quit without reaching the model.
    pub fn step(&mut self) -> Option<Cmd> {
        if !self.initialized {
            self.init();
        }

        let msg = self.input_queue.pop_front()?;
        if msg.is::<QuitMsg>() || msg.is::<InterruptMsg>() {
            self.stats.quit_requested = true;
            return None;
        }

        self.stats.update_calls += 1;
        let cmd = self.model.update(msg);
        if cmd.is_some() {
            self.stats.commands_returned += 1;
        }

        self.stats.view_calls += 1;
        self.output_views.push(self.model.view());

        cmd
    }

    /// Process all pending messages until the queue is empty or quit is requested.
    ///
    /// Commands returned by update are executed inline and their messages
    /// queued. Returns the number of messages processed.
    pub fn run_until_empty(&mut self) -> usize {
        let mut processed = 0;
        while !self.input_queue.is_empty() && !self.stats.quit_requested {
            if let Some(msg) = self.step().and_then(Cmd::execute) {
                self.input_queue.push_back(msg);
            }
            processed += 1;
        }
        processed
    }

    /// Run until quit is received or `max_steps` is reached.
    ///
    /// Returns the number of steps processed.
    pub fn run_until_quit(&mut self, max_steps: usize) -> usize {
        let mut steps = 0;
        while steps < max_steps && !self.stats.quit_requested && !self.input_queue.is_empty() {
            if let Some(msg) = self.step().and_then(Cmd::execute) {
                self.input_queue.push_back(msg);
            }
            steps += 1;
        }
        steps
    }

    /// Get a reference to the current model state.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Consume the simulator and return the final model.
    pub fn into_model(self) -> M {
        self.model
    }

    /// Get the simulation statistics.
    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    /// Get all captured view outputs.
    pub fn views(&self) -> &[String] {
        &self.output_views
    }

    /// Get the most recent view output.
    pub fn last_view(&self) -> Option<&str> {
        self.output_views.last().map(String::as_str)
    }

    /// Check if quit has been requested.
    pub fn is_quit(&self) -> bool {
        self.stats.quit_requested
    }

    /// Check if the model has been initialized.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Get the number of pending messages.
    pub fn pending_count(&self) -> usize {
        self.input_queue.len()
    }
}

impl<M: Model + Render> ProgramSimulator<M> {
    /// Render the current tree.
    pub fn tree(&self) -> Node {
        self.model.render()
    }

    /// Every node in the current tree whose test hook is `id`.
    pub fn find_by_test_attr(&self, id: &str) -> Vec<Node> {
        self.tree()
            .find_by_test_attr(id)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Whether exactly one node carries the test hook `id`.
    pub fn has_one(&self, id: &str) -> bool {
        self.find_by_test_attr(id).len() == 1
    }

    /// Text content of the first node whose test hook is `id`.
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.tree().find_first(id).map(Node::text_content)
    }

    /// Activate every control carrying the test hook `id` and process the
    /// resulting messages.
    ///
    /// Returns `false` if no control matched.
    pub fn simulate_click(&mut self, id: &str) -> bool {
        let handlers: Vec<fn() -> Message> = self
            .tree()
            .find_by_test_attr(id)
            .into_iter()
            .filter_map(Node::activation)
            .collect();
        if handlers.is_empty() {
            return false;
        }
        for handler in handlers {
            self.input_queue.push_back(handler());
        }
        self.run_until_empty();
        true
    }
}
