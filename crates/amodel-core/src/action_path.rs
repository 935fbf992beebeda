use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Localization
// ---------------------------------------------------------------------------

/// Turns a raw path-segment key into the display text shown in a menu.
pub trait ResourceResolver: fmt::Debug + Send + Sync {
    fn localize(&self, key: &str) -> String;
}

/// Displays every key as itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityResolver;

impl ResourceResolver for IdentityResolver {
    fn localize(&self, key: &str) -> String {
        key.to_string()
    }
}

/// A string table; keys without an entry display as themselves.
#[derive(Debug, Clone, Default)]
pub struct TableResolver {
    strings: HashMap<String, String>,
}

impl TableResolver {
    pub fn new(strings: HashMap<String, String>) -> Self {
        Self { strings }
    }
}

impl ResourceResolver for TableResolver {
    fn localize(&self, key: &str) -> String {
        self.strings
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

// ---------------------------------------------------------------------------
// PathSegment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PathSegment {
    key: String,
    text: String,
}

impl PathSegment {
    pub fn new(key: impl Into<String>, resolver: &dyn ResourceResolver) -> Self {
        let key = key.into();
        let text = resolver.localize(&key);
        Self { key, text }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The localized text; siblings in a tree are keyed by this.
    pub fn text(&self) -> &str {
        &self.text
    }
}

// ---------------------------------------------------------------------------
// ActionPath
// ---------------------------------------------------------------------------

/// An ordered, `/`-separated path. Segment 0 is the site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ActionPath {
    segments: Vec<PathSegment>,
}

impl ActionPath {
    /// Parse a raw path. `\` escapes a literal `/` or `\` inside a segment.
    /// Empty segments are dropped, so `""` parses to the empty path.
    pub fn parse(raw: &str, resolver: &dyn ResourceResolver) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut chars = raw.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        current.push(escaped);
                    }
                }
                '/' => {
                    if !current.is_empty() {
                        segments.push(PathSegment::new(std::mem::take(&mut current), resolver));
                    }
                }
                _ => current.push(c),
            }
        }
        if !current.is_empty() {
            segments.push(PathSegment::new(current, resolver));
        }
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn site(&self) -> Option<&str> {
        self.segments.first().map(PathSegment::key)
    }

    pub fn last_segment(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Segment-wise prefix test on keys.
    pub fn starts_with(&self, prefix: &ActionPath) -> bool {
        prefix.len() <= self.len()
            && self
                .segments
                .iter()
                .zip(&prefix.segments)
                .all(|(a, b)| a.key == b.key)
    }

    /// Longest shared leading path, compared by key. Segments are taken from
    /// `self`.
    pub fn common_path(&self, other: &ActionPath) -> ActionPath {
        let shared = self
            .segments
            .iter()
            .zip(&other.segments)
            .take_while(|(a, b)| a.key == b.key)
            .count();
        ActionPath {
            segments: self.segments[..shared].to_vec(),
        }
    }

    pub fn append(&self, segment: PathSegment) -> ActionPath {
        let mut segments = self.segments.clone();
        segments.push(segment);
        ActionPath { segments }
    }

    /// Localized texts, for display and tree lookup.
    pub fn texts(&self) -> Vec<&str> {
        self.segments.iter().map(PathSegment::text).collect()
    }
}

impl fmt::Display for ActionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            for c in segment.key.chars() {
                if c == '/' || c == '\\' {
                    f.write_str("\\")?;
                }
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl Serialize for ActionPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
