//! The render tree.
//!
//! A [`Node`] is one labeled element of the widget's output. Nodes carry an
//! optional test hook so tests (and the mouse hit-tester) can address them
//! without depending on layout. Buttons carry the message they emit when
//! activated.

use crate::message::Message;

/// What a node is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Groups children. Renders nothing by itself.
    Container,
    /// A text run.
    Text(String),
    /// An activatable control.
    Button {
        /// Visible label.
        label: String,
        /// Whether the control has keyboard focus.
        focused: bool,
    },
}

/// Visual weight of a text node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    /// Ordinary text.
    #[default]
    Normal,
    /// Highlighted value.
    Strong,
    /// Error text.
    Alert,
}

/// One element of the render tree.
#[derive(Debug, Clone)]
pub struct Node {
    kind: NodeKind,
    test_id: Option<String>,
    tone: Tone,
    on_activate: Option<fn() -> Message>,
    children: Vec<Node>,
}

impl Node {
    fn with_kind(kind: NodeKind) -> Self {
        Self {
            kind,
            test_id: None,
            tone: Tone::Normal,
            on_activate: None,
            children: Vec::new(),
        }
    }

    /// An empty container.
    pub fn container() -> Self {
        Self::with_kind(NodeKind::Container)
    }

    /// A text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::with_kind(NodeKind::Text(text.into()))
    }

    /// A button that emits `on_activate()` when activated.
    pub fn button(label: impl Into<String>, on_activate: fn() -> Message) -> Self {
        let mut node = Self::with_kind(NodeKind::Button {
            label: label.into(),
            focused: false,
        });
        node.on_activate = Some(on_activate);
        node
    }

    /// Attach a test hook.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }

    /// Set the text tone.
    #[must_use]
    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// Mark a button as focused. No effect on other kinds.
    #[must_use]
    pub fn with_focus(mut self, focus: bool) -> Self {
        if let NodeKind::Button { focused, .. } = &mut self.kind {
            *focused = focus;
        }
        self
    }

    /// Append a child.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child if present.
    #[must_use]
    pub fn with_optional_child(self, child: Option<Self>) -> Self {
        match child {
            Some(child) => self.with_child(child),
            None => self,
        }
    }

    /// The node's kind.
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The node's test hook.
    pub fn test_id(&self) -> Option<&str> {
        self.test_id.as_deref()
    }

    /// The node's tone.
    pub fn tone(&self) -> Tone {
        self.tone
    }

    /// The node's children.
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Whether this node is a button.
    pub fn is_button(&self) -> bool {
        matches!(self.kind, NodeKind::Button { .. })
    }

    /// The message this node emits on activation.
    pub fn activation(&self) -> Option<fn() -> Message> {
        self.on_activate
    }

    /// Activate the node, producing its message if it is a control.
    pub fn activate(&self) -> Option<Message> {
        self.on_activate.map(|f| f())
    }

    /// Concatenated text of this subtree, including button labels.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.kind {
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Button { label, .. } => out.push_str(label),
            NodeKind::Container => {}
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// All nodes in this subtree, including `self`, whose test hook is `id`.
    ///
    /// Matches are returned in depth-first order.
    pub fn find_by_test_attr(&self, id: &str) -> Vec<&Self> {
        let mut found = Vec::new();
        self.collect_matches(id, &mut found);
        found
    }

    fn collect_matches<'a>(&'a self, id: &str, found: &mut Vec<&'a Self>) {
        if self.test_id() == Some(id) {
            found.push(self);
        }
        for child in &self.children {
            child.collect_matches(id, found);
        }
    }

    /// The first node whose test hook is `id`.
    pub fn find_first(&self, id: &str) -> Option<&Self> {
        if self.test_id() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_first(id))
    }
}
