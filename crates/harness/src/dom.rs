//! Synthetic element tree mirroring the frontend's rendered DOM shape.
//!
//! The harness does not drive a real browser; it renders the widget state
//! into this tree and resolves queries against it. A node is effectively
//! visible only when it and every ancestor are displayed, matching how a
//! `display: none` list hides its items.

use crate::selector::{Selector, Step};

/// Interaction a click on a node (or one of its descendants) triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleDropdown(usize),
    SelectOption { dropdown: usize, option: usize },
    RowAdd(usize),
    RowReset(usize),
}

/// Preorder position of a node in the tree: child indices from the root.
pub type Path = Vec<usize>;

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub tag: String,
    pub classes: Vec<String>,
    /// The node's own text, excluding descendants.
    pub text: String,
    /// Own display state; effective visibility also requires all ancestors.
    pub displayed: bool,
    /// Click handler, if any. Clicks bubble to the nearest handling ancestor.
    pub action: Option<Action>,
    /// For input elements: the row index whose draft this field edits.
    pub input_slot: Option<usize>,
    /// For input elements: the current field content (not part of text).
    pub value: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: Vec::new(),
            text: String::new(),
            displayed: true,
            action: None,
            input_slot: None,
            value: None,
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn displayed(mut self, displayed: bool) -> Self {
        self.displayed = displayed;
        self
    }

    pub fn on_click(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn input(mut self, slot: usize, value: impl Into<String>) -> Self {
        self.input_slot = Some(slot);
        self.value = Some(value.into());
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Concatenated text of the node and its descendants. Input values are
    /// not text content, same as in a real DOM.
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    /// Look a node up by its path.
    pub fn at(&self, path: &[usize]) -> Option<&Node> {
        let mut node = self;
        for &index in path {
            node = node.children.get(index)?;
        }
        Some(node)
    }

    /// Nodes along a path from the root to the target, inclusive.
    pub fn chain(&self, path: &[usize]) -> Vec<&Node> {
        let mut nodes = vec![self];
        let mut node = self;
        for &index in path {
            match node.children.get(index) {
                Some(child) => {
                    nodes.push(child);
                    node = child;
                }
                None => break,
            }
        }
        nodes
    }
}

/// One resolved element.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub path: Path,
    pub visible: bool,
}

/// Resolves a selector against a tree, in document order.
pub fn query(root: &Node, selector: &Selector) -> Vec<Match> {
    let mut matches = Vec::new();
    let mut path = Vec::new();
    let mut ancestors = Vec::new();
    walk(
        root,
        true,
        &mut path,
        &mut ancestors,
        &selector.steps,
        &mut matches,
    );

    match selector.nth {
        Some(n) => matches.into_iter().nth(n).into_iter().collect(),
        None => matches,
    }
}

fn walk<'a>(
    node: &'a Node,
    parent_visible: bool,
    path: &mut Path,
    ancestors: &mut Vec<(&'a Node, bool)>,
    steps: &[Step],
    matches: &mut Vec<Match>,
) {
    let visible = parent_visible && node.displayed;

    if let Some((last, rest)) = steps.split_last() {
        if step_matches(node, visible, last) && ancestors_match(ancestors, rest) {
            matches.push(Match {
                path: path.clone(),
                visible,
            });
        }
    }

    ancestors.push((node, visible));
    for (index, child) in node.children.iter().enumerate() {
        path.push(index);
        walk(child, visible, path, ancestors, steps, matches);
        path.pop();
    }
    ancestors.pop();
}

/// Descendant steps are a subsequence of the ancestor chain; matching
/// greedily from the closest ancestor upward is sufficient.
fn ancestors_match(ancestors: &[(&Node, bool)], steps: &[Step]) -> bool {
    let mut remaining = steps.len();
    for (node, visible) in ancestors.iter().rev() {
        if remaining == 0 {
            break;
        }
        if step_matches(node, *visible, &steps[remaining - 1]) {
            remaining -= 1;
        }
    }
    remaining == 0
}

fn step_matches(node: &Node, visible: bool, step: &Step) -> bool {
    if let Some(tag) = &step.tag {
        if node.tag != *tag {
            return false;
        }
    }
    if !step.classes.iter().all(|c| node.has_class(c)) {
        return false;
    }
    if let Some(needle) = &step.has_text {
        if !node.text_content().contains(needle.as_str()) {
            return false;
        }
    }
    if step.visible_only && !visible {
        return false;
    }
    true
}
