//! The persisted action-model document and the store object that owns it.

use crate::descriptor::ActionDescriptor;
use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ActionEntry {
    pub id: String,
    #[serde(default)]
    pub path: String,
    /// Absent in documents written before group hints existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_hint: Option<String>,
    #[serde(default = "default_available", skip_serializing_if = "is_true")]
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keystroke: Option<String>,
}

fn default_available() -> bool {
    true
}

fn is_true(b: &bool) -> bool {
    *b
}

impl ActionEntry {
    pub fn from_action(action: &ActionDescriptor) -> Self {
        Self {
            id: action.id().to_string(),
            path: action.path().to_string(),
            group_hint: Some(action.group_hint().hint().to_string()),
            available: action.available(),
            keystroke: action.keystroke().map(str::to_string),
        }
    }

    pub fn group_hint(&self) -> &str {
        self.group_hint.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PersistedEntry {
    Action(ActionEntry),
    Separator,
}

impl PersistedEntry {
    pub fn as_action(&self) -> Option<&ActionEntry> {
        match self {
            PersistedEntry::Action(a) => Some(a),
            PersistedEntry::Separator => None,
        }
    }

    pub fn as_action_mut(&mut self) -> Option<&mut ActionEntry> {
        match self {
            PersistedEntry::Action(a) => Some(a),
            PersistedEntry::Separator => None,
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, PersistedEntry::Separator)
    }
}

// ---------------------------------------------------------------------------
// PersistedModel / StoreDocument
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedModel {
    pub id: String,
    #[serde(default)]
    pub entries: Vec<PersistedEntry>,
}

impl PersistedModel {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entries: Vec::new(),
        }
    }

    pub fn actions(&self) -> impl Iterator<Item = &ActionEntry> {
        self.entries.iter().filter_map(PersistedEntry::as_action)
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.as_action().is_some_and(|a| a.id == id))
    }

    pub fn separator_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_separator()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub models: Vec<PersistedModel>,
}

fn default_version() -> u32 {
    1
}

impl Default for StoreDocument {
    fn default() -> Self {
        Self {
            version: default_version(),
            models: Vec::new(),
        }
    }
}

impl StoreDocument {
    pub fn find(&self, id: &str) -> Option<&PersistedModel> {
        self.models.iter().find(|m| m.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut PersistedModel> {
        self.models.iter_mut().find(|m| m.id == id)
    }

    /// Replace models with matching ids and append the rest. Returns the
    /// number of models taken from `other`.
    pub fn merge_document(&mut self, other: StoreDocument) -> usize {
        let count = other.models.len();
        for model in other.models {
            match self.find_mut(&model.id) {
                Some(existing) => *existing = model,
                None => self.models.push(model),
            }
        }
        count
    }
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Yaml,
    Json,
    Xml,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "yaml" => Ok(ExportFormat::Yaml),
            "json" => Ok(ExportFormat::Json),
            "xml" => Ok(ExportFormat::Xml),
            other => Err(format!("unknown export format '{other}'; valid: yaml, json, xml")),
        }
    }
}

// ---------------------------------------------------------------------------
// ActionModelStore
// ---------------------------------------------------------------------------

/// Owns the parsed store document for the lifetime of the host.
///
/// Mutation needs `&mut self`, so a store has a single writer at a time.
#[derive(Debug)]
pub struct ActionModelStore {
    document: StoreDocument,
    location: Option<PathBuf>,
    temporary: bool,
}

impl ActionModelStore {
    /// Load the store at `path`. A missing file starts an empty document that
    /// will be created on the first save. A file that cannot be read or parsed
    /// is logged and replaced by an empty temporary document that is never
    /// written back.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::read(&path) {
            Ok(document) => Self {
                document,
                location: Some(path),
                temporary: false,
            },
            Err(e) => {
                tracing::error!(
                    path = %path.display(),
                    error = %e,
                    "failed to load action model store; using a temporary document"
                );
                Self {
                    document: StoreDocument::default(),
                    location: Some(path),
                    temporary: true,
                }
            }
        }
    }

    /// A store with no backing file.
    pub fn in_memory() -> Self {
        Self::from_document(StoreDocument::default())
    }

    pub fn from_document(document: StoreDocument) -> Self {
        Self {
            document,
            location: None,
            temporary: true,
        }
    }

    fn read(path: &Path) -> Result<StoreDocument> {
        if !path.exists() {
            return Ok(StoreDocument::default());
        }
        let data = std::fs::read_to_string(path)?;
        if data.trim().is_empty() {
            return Ok(StoreDocument::default());
        }
        Ok(serde_yaml::from_str(&data)?)
    }

    /// Drop the cached document and read the file again.
    pub fn reload(&mut self) {
        if let Some(path) = self.location.take() {
            *self = Self::open(path);
        }
    }

    pub fn is_temporary(&self) -> bool {
        self.temporary
    }

    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    pub fn document(&self) -> &StoreDocument {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut StoreDocument {
        &mut self.document
    }

    pub fn find_model(&self, id: &str) -> Option<&PersistedModel> {
        self.document.find(id)
    }

    pub fn add_model(&mut self, model: PersistedModel) {
        match self.document.find_mut(&model.id) {
            Some(existing) => *existing = model,
            None => self.document.models.push(model),
        }
    }

    pub fn models(&self) -> &[PersistedModel] {
        &self.document.models
    }

    /// Write the document back. Returns `false` without writing when the
    /// store is temporary.
    pub fn save(&self) -> Result<bool> {
        let Some(path) = self.location.as_deref().filter(|_| !self.temporary) else {
            tracing::debug!("action model store is temporary; not saving");
            return Ok(false);
        };
        let data = serde_yaml::to_string(&self.document)?;
        crate::io::atomic_write(path, data.as_bytes())?;
        tracing::debug!(path = %path.display(), "saved action model store");
        Ok(true)
    }

    /// A read-only dump of every model, for diagnostics.
    pub fn export(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Yaml => Ok(serde_yaml::to_string(&self.document)?),
            ExportFormat::Json => Ok(serde_json::to_string_pretty(&self.document)?),
            ExportFormat::Xml => Ok(to_xml(&self.document)),
        }
    }
}

// ---------------------------------------------------------------------------
// Legacy XML layout
// ---------------------------------------------------------------------------

/// Parse a `<action-models>` document with `<action-model id="..">` children
/// holding `<action>` and `<separator>` elements.
pub fn import_xml(text: &str) -> Result<StoreDocument> {
    let xml = roxmltree::Document::parse(text)?;
    let root = xml.root_element();
    if root.tag_name().name() != "action-models" {
        return Err(ModelError::Xml(format!(
            "expected root <action-models>, found <{}>",
            root.tag_name().name()
        )));
    }

    let mut document = StoreDocument::default();
    for node in root.children().filter(|n| is_element_named(*n, "action-model")) {
        let Some(id) = node.attribute("id") else {
            tracing::debug!("skipping <action-model> without id");
            continue;
        };
        let mut model = PersistedModel::new(id);
        for child in node.children().filter(|n| n.is_element()) {
            match child.tag_name().name() {
                "action" => {
                    let Some(action_id) = child.attribute("id").filter(|s| !s.is_empty()) else {
                        tracing::debug!(model = id, "skipping <action> without id");
                        continue;
                    };
                    model.entries.push(PersistedEntry::Action(ActionEntry {
                        id: action_id.to_string(),
                        path: child.attribute("path").unwrap_or_default().to_string(),
                        group_hint: child.attribute("group-hint").map(str::to_string),
                        available: child
                            .attribute("available")
                            .and_then(|v| v.to_ascii_lowercase().parse().ok())
                            .unwrap_or(true),
                        keystroke: child
                            .attribute("keystroke")
                            .filter(|k| !k.is_empty())
                            .map(str::to_string),
                    }));
                }
                "separator" => model.entries.push(PersistedEntry::Separator),
                other => tracing::debug!(model = id, element = other, "ignoring unknown element"),
            }
        }
        document.models.push(model);
    }
    Ok(document)
}

fn is_element_named(node: roxmltree::Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

fn to_xml(document: &StoreDocument) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<action-models>\n");
    for model in &document.models {
        let _ = writeln!(out, "  <action-model id=\"{}\">", escape_attr(&model.id));
        for entry in &model.entries {
            match entry {
                PersistedEntry::Action(a) => {
                    let _ = write!(
                        out,
                        "    <action id=\"{}\" path=\"{}\"",
                        escape_attr(&a.id),
                        escape_attr(&a.path)
                    );
                    if let Some(hint) = &a.group_hint {
                        let _ = write!(out, " group-hint=\"{}\"", escape_attr(hint));
                    }
                    if !a.available {
                        out.push_str(" available=\"False\"");
                    }
                    if let Some(k) = &a.keystroke {
                        let _ = write!(out, " keystroke=\"{}\"", escape_attr(k));
                    }
                    out.push_str(" />\n");
                }
                PersistedEntry::Separator => out.push_str("    <separator />\n"),
            }
        }
        out.push_str("  </action-model>\n");
    }
    out.push_str("</action-models>\n");
    out
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
