use serde::{Deserialize, Serialize};
use std::fmt;

/// A dotted classification tag (e.g. `"Tools.Image.Manipulation.Zoom"`) used
/// only to guess a position for an action the store has never seen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct GroupHint {
    hint: String,
    components: Vec<String>,
}

impl GroupHint {
    pub fn new(hint: impl Into<String>) -> Self {
        let hint = hint.into();
        let components = hint.split('.').map(str::to_string).collect();
        Self { hint, components }
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Never empty: the default hint has a single empty component.
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Scores how closely `self` (the action being placed) relates to `other`
    /// (the hint of an entry already in the store).
    ///
    /// A positive score means the action belongs immediately after `other`, a
    /// negative score immediately before it; a larger magnitude is a stronger
    /// match. Zero means the two are unrelated.
    ///
    /// An entry with the default (empty) hint scores `1` against anything, so
    /// entries that predate group hints still attract new actions weakly. Any
    /// real match is bumped by one so that it outranks that default.
    pub fn match_score(&self, other: &GroupHint) -> i32 {
        if other.components[0].is_empty() {
            return 1;
        }

        let mut i: i32 = 0;
        for (n, theirs) in other.components.iter().enumerate() {
            let Some(mine) = self.components.get(n) else {
                // our hint is a prefix of theirs: sort before
                i = -i;
                break;
            };
            if mine == theirs {
                i += 1;
                continue;
            }
            if i > 0 && mine.to_lowercase() < theirs.to_lowercase() {
                i = -i;
            }
            break;
        }

        match i.signum() {
            1 => i + 1,
            -1 => i - 1,
            _ => 0,
        }
    }
}

impl Default for GroupHint {
    fn default() -> Self {
        GroupHint::new("")
    }
}

impl From<String> for GroupHint {
    fn from(hint: String) -> Self {
        GroupHint::new(hint)
    }
}

impl From<&str> for GroupHint {
    fn from(hint: &str) -> Self {
        GroupHint::new(hint)
    }
}

impl From<Option<&str>> for GroupHint {
    fn from(hint: Option<&str>) -> Self {
        GroupHint::new(hint.unwrap_or_default())
    }
}

impl From<GroupHint> for String {
    fn from(hint: GroupHint) -> Self {
        hint.hint
    }
}

impl fmt::Display for GroupHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hint)
    }
}
