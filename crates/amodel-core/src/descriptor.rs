use crate::action_path::{ActionPath, IdentityResolver, ResourceResolver};
use crate::error::{ModelError, Result};
use crate::group_hint::GroupHint;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// ActionDescriptor
// ---------------------------------------------------------------------------

/// A declared UI action as seen by the synchronization engine.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ActionDescriptor {
    id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    former_ids: Vec<String>,
    path: ActionPath,
    group_hint: GroupHint,
    persistent: bool,
    available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    keystroke: Option<String>,
    #[serde(skip)]
    resolver: Arc<dyn ResourceResolver>,
}

impl ActionDescriptor {
    pub fn builder(id: impl Into<String>, path: impl Into<String>) -> ActionDescriptorBuilder {
        ActionDescriptorBuilder::new(id, path)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Previous ids, searched in order when the current id is not stored.
    pub fn former_ids(&self) -> &[String] {
        &self.former_ids
    }

    pub fn path(&self) -> &ActionPath {
        &self.path
    }

    pub fn group_hint(&self) -> &GroupHint {
        &self.group_hint
    }

    pub fn persistent(&self) -> bool {
        self.persistent
    }

    pub fn available(&self) -> bool {
        self.available
    }

    pub fn keystroke(&self) -> Option<&str> {
        self.keystroke.as_deref()
    }

    /// Parse `raw` with this action's resolver.
    pub fn localize_path(&self, raw: &str) -> ActionPath {
        ActionPath::parse(raw, self.resolver.as_ref())
    }

    /// A copy of this action as the store places it: the persisted path,
    /// availability and keystroke win over the declared ones. A persisted path
    /// too short to place is ignored in favour of the declared path.
    pub(crate) fn placed(&self, raw_path: &str, available: bool, keystroke: Option<&str>) -> Self {
        let mut placed = self.clone();
        let path = self.localize_path(raw_path);
        if path.len() >= 2 {
            placed.path = path;
        } else {
            tracing::debug!(
                action = %self.id,
                path = raw_path,
                "persisted path unusable, keeping declared path"
            );
        }
        placed.available = available;
        placed.keystroke = keystroke.map(str::to_string);
        placed
    }
}

/// Equality ignores the resolver.
impl PartialEq for ActionDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.former_ids == other.former_ids
            && self.path == other.path
            && self.group_hint == other.group_hint
            && self.persistent == other.persistent
            && self.available == other.available
            && self.keystroke == other.keystroke
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

pub struct ActionDescriptorBuilder {
    id: String,
    path: String,
    former_ids: Vec<String>,
    group_hint: GroupHint,
    persistent: bool,
    available: bool,
    keystroke: Option<String>,
    resolver: Arc<dyn ResourceResolver>,
}

impl ActionDescriptorBuilder {
    fn new(id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            former_ids: Vec::new(),
            group_hint: GroupHint::default(),
            persistent: true,
            available: true,
            keystroke: None,
            resolver: Arc::new(IdentityResolver),
        }
    }

    pub fn former_id(mut self, id: impl Into<String>) -> Self {
        self.former_ids.push(id.into());
        self
    }

    pub fn former_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.former_ids.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn group_hint(mut self, hint: impl Into<GroupHint>) -> Self {
        self.group_hint = hint.into();
        self
    }

    pub fn persistent(mut self, persistent: bool) -> Self {
        self.persistent = persistent;
        self
    }

    pub fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    pub fn keystroke(mut self, keystroke: Option<String>) -> Self {
        self.keystroke = keystroke;
        self
    }

    pub fn resolver(mut self, resolver: Arc<dyn ResourceResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn build(self) -> Result<ActionDescriptor> {
        let path = ActionPath::parse(&self.path, self.resolver.as_ref());
        if path.len() < 2 {
            return Err(ModelError::InvalidActionPath {
                id: self.id,
                path: self.path,
            });
        }
        Ok(ActionDescriptor {
            id: self.id,
            former_ids: self.former_ids,
            path,
            group_hint: self.group_hint,
            persistent: self.persistent,
            available: self.available,
            keystroke: self.keystroke,
            resolver: self.resolver,
        })
    }
}

// ---------------------------------------------------------------------------
// ActionMap
// ---------------------------------------------------------------------------

/// Looks actions up by current id or any former id.
///
/// When ids collide the later declaration wins. Iteration yields each
/// reachable action once, in declaration order.
pub struct ActionMap<'a> {
    lookup: HashMap<&'a str, &'a ActionDescriptor>,
    ordered: Vec<&'a ActionDescriptor>,
}

impl<'a> ActionMap<'a> {
    pub fn new(actions: &'a [ActionDescriptor]) -> Self {
        let mut lookup = HashMap::new();
        for action in actions {
            lookup.insert(action.id(), action);
            for former in action.former_ids() {
                lookup.insert(former.as_str(), action);
            }
        }
        let ordered = actions
            .iter()
            .filter(|a| lookup.get(a.id()).is_some_and(|found| std::ptr::eq(*found, *a)))
            .collect();
        Self { lookup, ordered }
    }

    pub fn get(&self, id: &str) -> Option<&'a ActionDescriptor> {
        self.lookup.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lookup.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a ActionDescriptor> + '_ {
        self.ordered.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}
