//! Reconciles the declared actions with the persisted document and builds the
//! tree that gets rendered.
//!
//! The persisted order is authoritative: existing entries never move. Actions
//! the store has not seen yet are slotted in next to their closest relative by
//! group hint, or appended when nothing relates. Only persistent actions are
//! written to the store; the rest are merged into a throwaway copy so they
//! cannot shift the positions of the durable entries.

use crate::descriptor::{ActionDescriptor, ActionMap};
use crate::error::Result;
use crate::group_hint::GroupHint;
use crate::paths;
use crate::separator::separator_path;
use crate::store::{ActionEntry, ActionModelStore, PersistedEntry, PersistedModel};
use crate::tree::{ActionModelNode, ActionModelRoot};

/// Result of [`build_and_synchronize`].
#[derive(Debug, Clone)]
pub struct Synchronized {
    /// The tree to render, including non-persistent actions.
    pub root: ActionModelRoot,
    /// The durable model as it now stands in the store.
    pub model: PersistedModel,
    /// Whether the store document was modified; the caller decides whether
    /// to save.
    pub changed: bool,
}

/// Result of [`synchronize`].
#[derive(Debug, Clone)]
pub struct SyncOutcome {
    /// The durable model plus the transient entries of non-persistent actions.
    pub working: PersistedModel,
    pub changed: bool,
}

/// How an action ended up in a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Already present under its current id.
    Existing,
    /// Present under a former id, which was rewritten to the current one.
    Renamed,
    /// Newly inserted.
    Inserted,
}

// ---------------------------------------------------------------------------
// Public operations
// ---------------------------------------------------------------------------

/// Synchronize `actions` into the model for `namespace:site` and build its
/// tree. `actions` should already be filtered to `site`.
pub fn build_and_synchronize(
    store: &mut ActionModelStore,
    namespace: &str,
    site: &str,
    actions: &[ActionDescriptor],
) -> Result<Synchronized> {
    let model_id = paths::model_id(namespace, site)?;
    let map = ActionMap::new(actions);

    let outcome = synchronize(store, &model_id, &map);
    let root = build(site, &outcome.working.entries, &map)?;
    let model = store
        .find_model(&model_id)
        .cloned()
        .unwrap_or_else(|| PersistedModel::new(&model_id));

    Ok(Synchronized {
        root,
        model,
        changed: outcome.changed,
    })
}

/// Bring the durable model `model_id` up to date with `actions`.
///
/// Group hints are refreshed from the declarations, renamed entries are
/// re-keyed and missing persistent actions are inserted. A model that does not
/// exist yet is only added to the store once it has something in it.
pub fn synchronize(
    store: &mut ActionModelStore,
    model_id: &str,
    actions: &ActionMap<'_>,
) -> SyncOutcome {
    let existing = store.find_model(model_id).cloned();
    let model_exists = existing.is_some();
    let mut model = existing.unwrap_or_else(|| PersistedModel::new(model_id));

    let mut changed = update_group_hints(&mut model, actions);
    for action in actions.iter().filter(|a| a.persistent()) {
        if place_action(&mut model, action) != Placement::Existing {
            changed = true;
        }
    }

    if changed {
        if !model_exists {
            tracing::debug!(model = model_id, "adding new action model");
        }
        store.add_model(model.clone());
    }

    let mut working = model;
    for action in actions.iter().filter(|a| !a.persistent()) {
        place_action(&mut working, action);
    }

    SyncOutcome { working, changed }
}

/// Build a tree for configuration tooling. When the model already exists the
/// store is left untouched: hints are refreshed and new persistent actions
/// inserted on a copy, and only actions that have an entry are included.
pub fn build_abstract_action_model(
    store: &mut ActionModelStore,
    namespace: &str,
    site: &str,
    actions: &[ActionDescriptor],
) -> Result<ActionModelRoot> {
    let model_id = paths::model_id(namespace, site)?;
    let map = ActionMap::new(actions);

    let Some(existing) = store.find_model(&model_id) else {
        let outcome = synchronize(store, &model_id, &map);
        return build(site, &outcome.working.entries, &map);
    };

    let mut working = existing.clone();
    update_group_hints(&mut working, &map);
    for action in map.iter().filter(|a| a.persistent()) {
        if place_action(&mut working, action) == Placement::Inserted {
            tracing::debug!(action = action.id(), "inserted into abstract model");
        }
    }

    let listed: Vec<ActionDescriptor> = working
        .actions()
        .filter_map(|entry| map.get(&entry.id))
        .cloned()
        .collect();
    build(site, &working.entries, &ActionMap::new(&listed))
}

/// Replace the model for `namespace:site` with the leaves of `root`, in tree
/// order. Saving stays with the caller.
pub fn persist_abstract_action_model(
    store: &mut ActionModelStore,
    namespace: &str,
    site: &str,
    root: &ActionModelRoot,
) -> Result<()> {
    let model_id = paths::model_id(namespace, site)?;
    let mut model = PersistedModel::new(model_id);
    for leaf in root.leaf_nodes_in_order() {
        match leaf {
            ActionModelNode::Action(a) => model
                .entries
                .push(PersistedEntry::Action(ActionEntry::from_action(a.action()))),
            ActionModelNode::Separator(_) => model.entries.push(PersistedEntry::Separator),
            ActionModelNode::Branch(_) => {}
        }
    }
    store.add_model(model);
    Ok(())
}

// ---------------------------------------------------------------------------
// Model maintenance
// ---------------------------------------------------------------------------

/// Overwrite stored group hints with the declared ones. Hints always come
/// from the declarations, never from the store.
fn update_group_hints(model: &mut PersistedModel, actions: &ActionMap<'_>) -> bool {
    let mut changed = false;
    for entry in model.entries.iter_mut().filter_map(PersistedEntry::as_action_mut) {
        let Some(action) = actions.get(&entry.id) else {
            continue;
        };
        let hint = action.group_hint().hint();
        if entry.group_hint.as_deref() != Some(hint) {
            entry.group_hint = Some(hint.to_string());
            changed = true;
        }
    }
    changed
}

/// Index of the entry for `action`, trying its current id and then each
/// former id in order. A hit on a former id re-keys the entry in place.
fn find_entry(model: &mut PersistedModel, action: &ActionDescriptor) -> Option<(usize, Placement)> {
    if let Some(pos) = model.position_of(action.id()) {
        return Some((pos, Placement::Existing));
    }
    for former in action.former_ids() {
        let Some(pos) = model.position_of(former) else {
            continue;
        };
        if let Some(entry) = model.entries[pos].as_action_mut() {
            tracing::debug!(from = %former, to = action.id(), "re-keyed renamed action");
            entry.id = action.id().to_string();
        }
        return Some((pos, Placement::Renamed));
    }
    None
}

/// Make sure `action` has an entry in `model`.
fn place_action(model: &mut PersistedModel, action: &ActionDescriptor) -> Placement {
    if let Some((_, placement)) = find_entry(model, action) {
        return placement;
    }

    let entry = PersistedEntry::Action(ActionEntry::from_action(action));
    match insertion_point(model, action.group_hint()) {
        Some(InsertAt::Before(pos)) => model.entries.insert(pos, entry),
        Some(InsertAt::After(pos)) => model.entries.insert(pos + 1, entry),
        None => model.entries.push(entry),
    }
    tracing::debug!(model = %model.id, action = action.id(), "inserted action");
    Placement::Inserted
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InsertAt {
    Before(usize),
    After(usize),
}

/// Scan every action entry and keep the strongest match. Positive scores win
/// ties on later entries, negative scores only on strictly stronger ones.
fn insertion_point(model: &PersistedModel, hint: &GroupHint) -> Option<InsertAt> {
    let mut best = None;
    let mut current: i32 = 0;
    for (pos, entry) in model.entries.iter().enumerate() {
        let Some(existing) = entry.as_action() else {
            continue;
        };
        let score = hint.match_score(&GroupHint::new(existing.group_hint()));
        if score > 0 && score >= current.abs() {
            best = Some(InsertAt::After(pos));
            current = score;
        } else if score < 0 && score.abs() > current.abs() {
            best = Some(InsertAt::Before(pos));
            current = score;
        }
    }
    best
}

// ---------------------------------------------------------------------------
// Tree build
// ---------------------------------------------------------------------------

/// Walk the ordered entries and insert every resolvable action and every
/// separator that sits between related actions. Unknown ids are skipped.
fn build(site: &str, entries: &[PersistedEntry], actions: &ActionMap<'_>) -> Result<ActionModelRoot> {
    let mut root = ActionModelRoot::new(site);
    for (i, entry) in entries.iter().enumerate() {
        match entry {
            PersistedEntry::Action(a) => match actions.get(&a.id) {
                Some(action) => root.insert_action(action.placed(
                    &a.path,
                    a.available,
                    a.keystroke.as_deref(),
                ))?,
                None => tracing::debug!(action = %a.id, "no declared action; skipping entry"),
            },
            PersistedEntry::Separator => match separator_path(entries, i, actions) {
                Some(path) => root.insert_separator(path)?,
                None => tracing::debug!(index = i, "dropping separator"),
            },
        }
    }
    Ok(root)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;

    const NS: &str = "app";
    const SITE: &str = "global-menus";
    const MODEL: &str = "app:global-menus";

    fn action(id: &str, path: &str, hint: &str) -> ActionDescriptor {
        ActionDescriptor::builder(id, path)
            .group_hint(hint)
            .build()
            .unwrap()
    }

    fn entry(id: &str, path: &str, hint: &str) -> PersistedEntry {
        PersistedEntry::Action(ActionEntry {
            id: id.to_string(),
            path: path.to_string(),
            group_hint: Some(hint.to_string()),
            available: true,
            keystroke: None,
        })
    }

    fn store_with(entries: Vec<PersistedEntry>) -> ActionModelStore {
        let mut store = ActionModelStore::in_memory();
        store.add_model(PersistedModel {
            id: MODEL.to_string(),
            entries,
        });
        store
    }

    fn ids(model: &PersistedModel) -> Vec<String> {
        model
            .entries
            .iter()
            .map(|e| match e {
                PersistedEntry::Action(a) => a.id.clone(),
                PersistedEntry::Separator => "-".to_string(),
            })
            .collect()
    }

    fn leaf_ids(root: &ActionModelRoot) -> Vec<String> {
        root.leaf_nodes_in_order()
            .into_iter()
            .map(|n| match n {
                ActionModelNode::Action(a) => a.action().id().to_string(),
                _ => "-".to_string(),
            })
            .collect()
    }

    #[test]
    fn new_model_is_created_in_declaration_order() {
        let mut store = ActionModelStore::in_memory();
        let actions = vec![
            action("open", "global-menus/File/Open", "File"),
            action("exit", "global-menus/File/Exit", "File"),
        ];
        let synced = build_and_synchronize(&mut store, NS, SITE, &actions).unwrap();
        assert!(synced.changed);
        assert_eq!(ids(&synced.model), vec!["open", "exit"]);
        assert_eq!(store.find_model(MODEL).unwrap(), &synced.model);
        assert_eq!(leaf_ids(&synced.root), vec!["open", "exit"]);
    }

    #[test]
    fn second_run_is_idempotent() {
        let mut store = ActionModelStore::in_memory();
        let actions = vec![
            action("a", "global-menus/F/A", "F.A"),
            action("b", "global-menus/F/B", "F.B"),
            action("c", "global-menus/G/C", ""),
        ];
        let first = build_and_synchronize(&mut store, NS, SITE, &actions).unwrap();
        let second = build_and_synchronize(&mut store, NS, SITE, &actions).unwrap();
        assert!(first.changed);
        assert!(!second.changed);
        assert_eq!(first.root, second.root);
        assert_eq!(first.model, second.model);
    }

    #[test]
    fn nothing_persistent_adds_no_model() {
        let mut store = ActionModelStore::in_memory();
        let actions = vec![ActionDescriptor::builder("gen", "global-menus/Gen")
            .persistent(false)
            .build()
            .unwrap()];
        let synced = build_and_synchronize(&mut store, NS, SITE, &actions).unwrap();
        assert!(!synced.changed);
        assert!(store.models().is_empty());
        assert_eq!(leaf_ids(&synced.root), vec!["gen"]);
    }

    #[test]
    fn rename_keeps_position() {
        let mut store = store_with(vec![
            entry("first", "global-menus/F/First", "F"),
            entry("old.id", "global-menus/F/Mid", "F"),
            entry("last", "global-menus/F/Last", "F"),
        ]);
        let actions = vec![
            action("first", "global-menus/F/First", "F"),
            ActionDescriptor::builder("new.id", "global-menus/F/Mid")
                .former_ids(["older.id", "old.id"])
                .group_hint("F")
                .build()
                .unwrap(),
            action("last", "global-menus/F/Last", "F"),
        ];
        let synced = build_and_synchronize(&mut store, NS, SITE, &actions).unwrap();
        assert!(synced.changed);
        assert_eq!(ids(&synced.model), vec!["first", "new.id", "last"]);
        assert_eq!(leaf_ids(&synced.root), vec!["first", "new.id", "last"]);

        let again = build_and_synchronize(&mut store, NS, SITE, &actions).unwrap();
        assert!(!again.changed);
    }

    #[test]
    fn renamed_entry_takes_the_declared_hint() {
        let mut store = store_with(vec![
            entry("first", "global-menus/F/First", "F"),
            entry("old.id", "global-menus/F/Mid", "Stale"),
        ]);
        let actions = vec![
            action("first", "global-menus/F/First", "F"),
            ActionDescriptor::builder("new.id", "global-menus/F/Mid")
                .former_id("old.id")
                .group_hint("F.Mid")
                .build()
                .unwrap(),
        ];
        let synced = build_and_synchronize(&mut store, NS, SITE, &actions).unwrap();
        assert!(synced.changed);
        assert_eq!(ids(&synced.model), vec!["first", "new.id"]);
        let renamed = synced.model.entries[1].as_action().unwrap();
        assert_eq!(renamed.group_hint.as_deref(), Some("F.Mid"));

        let again = build_and_synchronize(&mut store, NS, SITE, &actions).unwrap();
        assert!(!again.changed);
        assert_eq!(again.model, synced.model);
    }

    #[test]
    fn group_hints_are_refreshed_from_declarations() {
        let mut store = store_with(vec![
            entry("a", "global-menus/A", "Old.Hint"),
            PersistedEntry::Action(ActionEntry {
                id: "b".to_string(),
                path: "global-menus/B".to_string(),
                group_hint: None,
                available: true,
                keystroke: None,
            }),
        ]);
        let actions = vec![
            action("a", "global-menus/A", "New.Hint"),
            action("b", "global-menus/B", ""),
        ];
        let synced = build_and_synchronize(&mut store, NS, SITE, &actions).unwrap();
        assert!(synced.changed);
        let hints: Vec<_> = synced.model.actions().map(|a| a.group_hint.clone()).collect();
        assert_eq!(hints, vec![Some("New.Hint".to_string()), Some(String::new())]);
    }

    #[test]
    fn new_action_goes_after_best_positive_match() {
        let mut store = store_with(vec![
            entry("copy", "global-menus/Edit/Copy", "Edit.Clipboard.Copy"),
            entry("paste", "global-menus/Edit/Paste", "Edit.Clipboard.Paste"),
            entry("find", "global-menus/Edit/Find", "Edit.Search.Find"),
        ]);
        let actions = vec![
            action("copy", "global-menus/Edit/Copy", "Edit.Clipboard.Copy"),
            action("paste", "global-menus/Edit/Paste", "Edit.Clipboard.Paste"),
            action("find", "global-menus/Edit/Find", "Edit.Search.Find"),
            action("replace", "global-menus/Edit/Replace", "Edit.Search.Replace"),
        ];
        let synced = build_and_synchronize(&mut store, NS, SITE, &actions).unwrap();
        assert_eq!(ids(&synced.model), vec!["copy", "paste", "find", "replace"]);
    }

    #[test]
    fn new_action_goes_before_when_it_sorts_first() {
        let mut store = store_with(vec![
            entry("zoom", "global-menus/View/Zoom", "View.Zoom"),
            entry("pan", "global-menus/View/Pan", "View.Pan"),
            entry("help", "global-menus/Help/About", "Help"),
        ]);
        // "View.Pan.A" is stronger against "View.Pan" (+3) than against
        // "View.Zoom" (-2), so it lands after pan
        let after = action("pan.a", "global-menus/View/PanA", "View.Pan.A");
        // "View" is a prefix of both view hints (-2 each); the first wins
        let before = action("view", "global-menus/View/All", "View");
        let actions = vec![after, before];
        let synced = build_and_synchronize(&mut store, NS, SITE, &actions).unwrap();
        assert_eq!(ids(&synced.model), vec!["view", "zoom", "pan", "pan.a", "help"]);
    }

    #[test]
    fn equal_positive_scores_prefer_the_last_entry() {
        let mut model = PersistedModel::new(MODEL);
        model.entries = vec![
            entry("x1", "m/X1", "X.One"),
            entry("y", "m/Y", "Y"),
            entry("x2", "m/X2", "X.Two"),
        ];
        // "X.Z" vs "X.One" and "X.Two": both +2
        assert_eq!(
            insertion_point(&model, &GroupHint::new("X.Z")),
            Some(InsertAt::After(2))
        );
        // "X.A" vs both: -2; the first reaching it wins
        assert_eq!(
            insertion_point(&model, &GroupHint::new("X.A")),
            Some(InsertAt::Before(0))
        );
    }

    #[test]
    fn unrelated_action_is_appended() {
        let mut store = store_with(vec![
            entry("a", "global-menus/A", "A"),
            entry("b", "global-menus/B", "B"),
        ]);
        let actions = vec![
            action("a", "global-menus/A", "A"),
            action("b", "global-menus/B", "B"),
            action("z", "global-menus/Z", "Z"),
        ];
        let synced = build_and_synchronize(&mut store, NS, SITE, &actions).unwrap();
        assert_eq!(ids(&synced.model), vec!["a", "b", "z"]);
    }

    #[test]
    fn default_hint_entries_attract_weakly() {
        let mut store = store_with(vec![
            entry("legacy1", "global-menus/L1", ""),
            entry("legacy2", "global-menus/L2", ""),
            entry("other", "global-menus/O", "Other"),
        ]);
        let actions = vec![
            action("legacy1", "global-menus/L1", ""),
            action("legacy2", "global-menus/L2", ""),
            action("other", "global-menus/O", "Other"),
            action("new", "global-menus/N", "Brand.New"),
        ];
        let synced = build_and_synchronize(&mut store, NS, SITE, &actions).unwrap();
        assert_eq!(ids(&synced.model), vec!["legacy1", "legacy2", "new", "other"]);
    }

    #[test]
    fn transient_actions_render_but_are_not_stored() {
        let mut store = store_with(vec![entry("a", "global-menus/F/A", "F.A")]);
        let actions = vec![
            action("a", "global-menus/F/A", "F.A"),
            ActionDescriptor::builder("recent1", "global-menus/F/Recent1")
                .group_hint("F.A.Recent")
                .persistent(false)
                .build()
                .unwrap(),
        ];
        let synced = build_and_synchronize(&mut store, NS, SITE, &actions).unwrap();
        assert!(!synced.changed);
        assert_eq!(ids(&synced.model), vec!["a"]);
        assert_eq!(ids(store.find_model(MODEL).unwrap()), vec!["a"]);
        assert_eq!(leaf_ids(&synced.root), vec!["a", "recent1"]);
    }

    #[test]
    fn stale_entries_are_skipped_in_tree() {
        let mut store = store_with(vec![
            entry("gone", "global-menus/F/Gone", "F"),
            entry("a", "global-menus/F/A", "F"),
        ]);
        let actions = vec![action("a", "global-menus/F/A", "F")];
        let synced = build_and_synchronize(&mut store, NS, SITE, &actions).unwrap();
        assert_eq!(leaf_ids(&synced.root), vec!["a"]);
        // stale entries stay in the store for a later version
        assert_eq!(ids(&synced.model), vec!["gone", "a"]);
    }

    #[test]
    fn persisted_path_and_flags_override_declaration() {
        let mut store = store_with(vec![PersistedEntry::Action(ActionEntry {
            id: "zoom".to_string(),
            path: "global-menus/Tools/Zoom".to_string(),
            group_hint: Some("View.Zoom".to_string()),
            available: false,
            keystroke: Some("Ctrl+Z".to_string()),
        })]);
        let actions = vec![action("zoom", "global-menus/View/Zoom", "View.Zoom")];
        let synced = build_and_synchronize(&mut store, NS, SITE, &actions).unwrap();
        let Some(ActionModelNode::Action(leaf)) = synced.root.find(&["Tools", "Zoom"]) else {
            panic!("zoom not placed under Tools: {}", synced.root.render());
        };
        assert!(!leaf.action().available());
        assert_eq!(leaf.action().keystroke(), Some("Ctrl+Z"));
        assert!(synced.root.find(&["View"]).is_none());
    }

    #[test]
    fn separators_are_rebuilt_between_related_actions() {
        let mut store = store_with(vec![
            PersistedEntry::Separator,
            entry("x", "global-menus/A/B/X", "A"),
            PersistedEntry::Separator,
            entry("y", "global-menus/A/B/Y", "A"),
            PersistedEntry::Separator,
            entry("z", "global-menus/Other/Z", "Other"),
            PersistedEntry::Separator,
        ]);
        let actions = vec![
            action("x", "global-menus/A/B/X", "A"),
            action("y", "global-menus/A/B/Y", "A"),
            action("z", "global-menus/Other/Z", "Other"),
        ];
        let synced = build_and_synchronize(&mut store, NS, SITE, &actions).unwrap();
        assert_eq!(leaf_ids(&synced.root), vec!["x", "-", "y", "-", "z"]);
        let b = synced.root.find(&["A", "B"]).unwrap().as_branch().unwrap();
        let texts: Vec<_> = b.children().iter().map(|c| c.text()).collect();
        assert_eq!(texts, vec!["X", "_s2", "Y"]);
        // the separator between y and z shares only the site: placed at top level
        assert!(matches!(
            synced.root.find(&["_s4"]),
            Some(ActionModelNode::Separator(_))
        ));
    }

    #[test]
    fn invalid_model_id_is_rejected() {
        let mut store = ActionModelStore::in_memory();
        let err = build_and_synchronize(&mut store, "bad:ns", SITE, &[]).unwrap_err();
        assert!(matches!(err, ModelError::InvalidModelPart(_)));
    }

    #[test]
    fn abstract_model_leaves_existing_store_untouched() {
        let mut store = store_with(vec![
            entry("a", "global-menus/F/A", "Old"),
            PersistedEntry::Separator,
            entry("b", "global-menus/F/B", "F"),
        ]);
        let before = store.document().clone();
        let actions = vec![
            action("a", "global-menus/F/A", "F"),
            action("b", "global-menus/F/B", "F"),
            action("c", "global-menus/F/C", "F"),
            ActionDescriptor::builder("gen", "global-menus/F/Gen")
                .persistent(false)
                .build()
                .unwrap(),
        ];
        let root = build_abstract_action_model(&mut store, NS, SITE, &actions).unwrap();
        assert_eq!(store.document(), &before);
        assert_eq!(leaf_ids(&root), vec!["a", "-", "b", "c"]);
    }

    #[test]
    fn abstract_model_creates_missing_model() {
        let mut store = ActionModelStore::in_memory();
        let actions = vec![action("a", "global-menus/F/A", "F")];
        let root = build_abstract_action_model(&mut store, NS, SITE, &actions).unwrap();
        assert_eq!(leaf_ids(&root), vec!["a"]);
        assert!(store.find_model(MODEL).is_some());
    }

    #[test]
    fn persist_abstract_model_flattens_tree() {
        let mut store = store_with(vec![
            entry("a", "global-menus/F/A", "F"),
            PersistedEntry::Separator,
            entry("b", "global-menus/F/B", "F"),
            entry("gone", "global-menus/F/Gone", "F"),
        ]);
        let actions = vec![
            action("a", "global-menus/F/A", "F"),
            action("b", "global-menus/F/B", "F"),
        ];
        let root = build_abstract_action_model(&mut store, NS, SITE, &actions).unwrap();
        persist_abstract_action_model(&mut store, NS, SITE, &root).unwrap();
        assert_eq!(ids(store.find_model(MODEL).unwrap()), vec!["a", "-", "b"]);

        let rebuilt = build_and_synchronize(&mut store, NS, SITE, &actions).unwrap();
        assert!(!rebuilt.changed);
        assert_eq!(rebuilt.root, root);
    }

    #[test]
    fn merge_default_tree_under_persisted() {
        let mut store = ActionModelStore::in_memory();
        let actions = vec![
            action("a", "global-menus/F/A", "F"),
            action("b", "global-menus/G/B", "G"),
        ];
        let defaults = build_and_synchronize(&mut store, NS, SITE, &actions)
            .unwrap()
            .root;
        let mut persisted = ActionModelRoot::new(SITE);
        persisted.merge(&defaults);
        assert_eq!(persisted, defaults);
    }
}
