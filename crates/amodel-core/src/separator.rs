//! Separators are stored without a path; their place in the tree is inferred
//! from the actions around them at build time.

use crate::action_path::{ActionPath, IdentityResolver, PathSegment};
use crate::descriptor::ActionMap;
use crate::store::{ActionEntry, PersistedEntry};

/// The synthetic path for the separator at `index`, or `None` when it would
/// not sit between two related, resolvable actions.
pub(crate) fn separator_path(
    entries: &[PersistedEntry],
    index: usize,
    actions: &ActionMap<'_>,
) -> Option<ActionPath> {
    if index == 0 || index + 1 >= entries.len() {
        return None;
    }

    let pre = adjacent_action(entries, index, false, |_| true)?;
    let post = adjacent_action(entries, index, true, |_| true)?;
    let common = ActionPath::parse(&pre.path, &IdentityResolver)
        .common_path(&ActionPath::parse(&post.path, &IdentityResolver));
    if common.is_empty() {
        return None;
    }

    // stale ids are skipped here; the neighbours found above may not render
    let pre = adjacent_action(entries, index, false, |a| actions.contains(&a.id))?;
    let post = adjacent_action(entries, index, true, |a| actions.contains(&a.id))?;
    let pre_action = actions.get(&pre.id)?;
    let post_action = actions.get(&post.id)?;

    let common_raw = common.to_string();
    for (entry, action) in [(pre, pre_action), (post, post_action)] {
        if !action
            .localize_path(&entry.path)
            .starts_with(&action.localize_path(&common_raw))
        {
            return None;
        }
    }

    let marker = PathSegment::new(format!("_s{index}"), &IdentityResolver);
    Some(pre_action.localize_path(&common_raw).append(marker))
}

/// Nearest action entry before (or after) `start` accepted by `accept`,
/// skipping separators.
fn adjacent_action<'e>(
    entries: &'e [PersistedEntry],
    start: usize,
    forward: bool,
    accept: impl Fn(&ActionEntry) -> bool,
) -> Option<&'e ActionEntry> {
    let pick = |e: &'e PersistedEntry| e.as_action().filter(|a| accept(*a));
    if forward {
        entries[start + 1..].iter().find_map(pick)
    } else {
        entries[..start].iter().rev().find_map(pick)
    }
}
