//! The in-memory action model: an ordered tree of branches, actions and
//! separators keyed by localized path-segment text.

use crate::action_path::{ActionPath, PathSegment};
use crate::descriptor::ActionDescriptor;
use crate::error::{ModelError, Result};
use serde::Serialize;
use std::fmt::Write as _;

// ---------------------------------------------------------------------------
// Nodes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionModelNode {
    Branch(BranchNode),
    Action(ActionLeaf),
    Separator(SeparatorLeaf),
}

impl ActionModelNode {
    pub fn segment(&self) -> Option<&PathSegment> {
        match self {
            ActionModelNode::Branch(b) => b.segment.as_ref(),
            ActionModelNode::Action(a) => Some(&a.segment),
            ActionModelNode::Separator(s) => Some(&s.segment),
        }
    }

    pub fn text(&self) -> &str {
        self.segment().map(PathSegment::text).unwrap_or_default()
    }

    pub fn as_branch(&self) -> Option<&BranchNode> {
        match self {
            ActionModelNode::Branch(b) => Some(b),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BranchNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    segment: Option<PathSegment>,
    children: Vec<ActionModelNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionLeaf {
    segment: PathSegment,
    action: ActionDescriptor,
}

impl ActionLeaf {
    pub fn action(&self) -> &ActionDescriptor {
        &self.action
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeparatorLeaf {
    segment: PathSegment,
    path: ActionPath,
}

impl SeparatorLeaf {
    pub fn path(&self) -> &ActionPath {
        &self.path
    }
}

impl BranchNode {
    fn new(segment: PathSegment) -> Self {
        Self {
            segment: Some(segment),
            children: Vec::new(),
        }
    }

    pub fn segment(&self) -> Option<&PathSegment> {
        self.segment.as_ref()
    }

    pub fn children(&self) -> &[ActionModelNode] {
        &self.children
    }

    /// First child with the given display text.
    pub fn child(&self, text: &str) -> Option<&ActionModelNode> {
        self.children.iter().find(|c| c.text() == text)
    }

    /// Walk `segments[depth..]`, creating branches for every segment but the
    /// last, and append `leaf` under the final branch.
    fn insert(&mut self, segments: &[PathSegment], leaf: ActionModelNode) {
        let mut node = self;
        for segment in segments {
            let pos = node.children.iter().position(|c| {
                matches!(c, ActionModelNode::Branch(b) if b.segment.as_ref().map(PathSegment::text) == Some(segment.text()))
            });
            let pos = match pos {
                Some(p) => p,
                None => {
                    node.children
                        .push(ActionModelNode::Branch(BranchNode::new(segment.clone())));
                    node.children.len() - 1
                }
            };
            node = match &mut node.children[pos] {
                ActionModelNode::Branch(b) => b,
                _ => unreachable!("position only matches branches"),
            };
        }
        node.children.push(leaf);
    }

    /// Layer `other` under `self`: children with matching text recurse,
    /// everything else is cloned and appended.
    pub fn merge(&mut self, other: &BranchNode) {
        for theirs in &other.children {
            let existing = self
                .children
                .iter()
                .position(|mine| mine.text() == theirs.text());
            match existing {
                Some(pos) => {
                    if let (ActionModelNode::Branch(mine), ActionModelNode::Branch(theirs)) =
                        (&mut self.children[pos], theirs)
                    {
                        mine.merge(theirs);
                    }
                }
                None => self.children.push(theirs.clone()),
            }
        }
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a ActionModelNode>) {
        for child in &self.children {
            match child {
                ActionModelNode::Branch(b) => b.collect_leaves(out),
                leaf => out.push(leaf),
            }
        }
    }

    fn render_into(&self, depth: usize, out: &mut String) {
        for child in &self.children {
            let indent = "  ".repeat(depth);
            match child {
                ActionModelNode::Branch(b) => {
                    let _ = writeln!(out, "{indent}{}/", child.text());
                    b.render_into(depth + 1, out);
                }
                ActionModelNode::Action(a) => {
                    let mut line = format!("{indent}{} [{}]", child.text(), a.action.id());
                    if !a.action.available() {
                        line.push_str(" (unavailable)");
                    }
                    if let Some(k) = a.action.keystroke() {
                        let _ = write!(line, " <{k}>");
                    }
                    let _ = writeln!(out, "{line}");
                }
                ActionModelNode::Separator(_) => {
                    let _ = writeln!(out, "{indent}----");
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// ActionModelRoot
// ---------------------------------------------------------------------------

/// The root branch of one site's action model. The site segment of every
/// inserted path is implied by the root and skipped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionModelRoot {
    site: String,
    #[serde(flatten)]
    root: BranchNode,
}

impl ActionModelRoot {
    pub fn new(site: impl Into<String>) -> Self {
        Self {
            site: site.into(),
            root: BranchNode::default(),
        }
    }

    pub fn site(&self) -> &str {
        &self.site
    }

    pub fn children(&self) -> &[ActionModelNode] {
        self.root.children()
    }

    pub fn insert_action(&mut self, action: ActionDescriptor) -> Result<()> {
        let path = action.path().clone();
        let (last, branches) = split_path(&path, action.id())?;
        let leaf = ActionModelNode::Action(ActionLeaf {
            segment: last.clone(),
            action,
        });
        self.root.insert(branches, leaf);
        Ok(())
    }

    pub fn insert_separator(&mut self, path: ActionPath) -> Result<()> {
        let (last, branches) = split_path(&path, "separator")?;
        let leaf = ActionModelNode::Separator(SeparatorLeaf {
            segment: last.clone(),
            path: path.clone(),
        });
        self.root.insert(branches, leaf);
        Ok(())
    }

    pub fn merge(&mut self, other: &ActionModelRoot) {
        self.root.merge(&other.root);
    }

    /// Follow display texts from the root.
    pub fn find(&self, texts: &[&str]) -> Option<&ActionModelNode> {
        let (first, rest) = texts.split_first()?;
        let mut node = self.root.child(first)?;
        for text in rest {
            node = node.as_branch()?.child(text)?;
        }
        Some(node)
    }

    /// Action and separator leaves, depth first, in tree order.
    pub fn leaf_nodes_in_order(&self) -> Vec<&ActionModelNode> {
        let mut out = Vec::new();
        self.root.collect_leaves(&mut out);
        out
    }

    /// An indented text outline for terminal output.
    pub fn render(&self) -> String {
        let mut out = format!("{}\n", self.site);
        self.root.render_into(1, &mut out);
        out
    }
}

/// Split off the final segment; everything between the site and it becomes
/// branches.
fn split_path<'p>(path: &'p ActionPath, id: &str) -> Result<(&'p PathSegment, &'p [PathSegment])> {
    match path.segments() {
        [_site, inner @ .., last] => Ok((last, inner)),
        _ => Err(ModelError::InvalidActionPath {
            id: id.to_string(),
            path: path.to_string(),
        }),
    }
}
