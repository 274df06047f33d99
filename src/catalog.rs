//! Read-only methods catalog served by the backend.
//!
//! Groups are keyed by block kind (`method`, `weights`, `ranking`,
//! `correlation`); each lists the variants available for that kind. All
//! lookups are case-insensitive on both key and variant name.

use serde::{Deserialize, Serialize};

use crate::parse::types::BlockKind;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MethodsCatalog {
    pub groups: Vec<CatalogGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogGroup {
    pub key: String,
    #[serde(default)]
    pub data: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogEntry {
    pub name: String,
    /// Sort direction of the method's preference values (`"asc"` / `"desc"`).
    pub order: Option<String>,
    /// Block kinds this variant accepts as input connections.
    pub input_connections: Vec<String>,
    pub extensions: Vec<String>,
    /// The method cannot run when every criterion has the same direction.
    pub requires_mixed_criteria: bool,
}

impl MethodsCatalog {
    pub fn new(groups: Vec<CatalogGroup>) -> Self {
        MethodsCatalog { groups }
    }

    pub fn group(&self, kind: BlockKind) -> Option<&CatalogGroup> {
        self.groups
            .iter()
            .find(|g| g.key.eq_ignore_ascii_case(kind.as_str()))
    }

    pub fn entry(&self, kind: BlockKind, name: &str) -> Option<&CatalogEntry> {
        self.group(kind)?
            .data
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// Whether variant `name` of `kind` accepts `input` connections.
    /// `None` when the catalog does not describe the variant.
    pub fn accepts_input(&self, kind: BlockKind, name: &str, input: BlockKind) -> Option<bool> {
        self.entry(kind, name).map(|e| {
            e.input_connections
                .iter()
                .any(|c| c.eq_ignore_ascii_case(input.as_str()))
        })
    }

    /// Declared sort order of an MCDA method, if any.
    pub fn method_order(&self, method: &str) -> Option<&str> {
        self.entry(BlockKind::Method, method)?
            .order
            .as_deref()
            .filter(|o| !o.is_empty())
    }

    pub fn requires_mixed_criteria(&self, method: &str) -> bool {
        self.entry(BlockKind::Method, method)
            .map(|e| e.requires_mixed_criteria)
            .unwrap_or(false)
    }
}

impl CatalogGroup {
    pub fn new(key: impl Into<String>, data: Vec<CatalogEntry>) -> Self {
        CatalogGroup {
            key: key.into(),
            data,
        }
    }
}

impl CatalogEntry {
    pub fn named(name: impl Into<String>) -> Self {
        CatalogEntry {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_order(mut self, order: &str) -> Self {
        self.order = Some(order.to_string());
        self
    }

    pub fn with_inputs(mut self, inputs: &[BlockKind]) -> Self {
        self.input_connections = inputs.iter().map(|k| k.as_str().to_string()).collect();
        self
    }

    pub fn mixed_criteria(mut self) -> Self {
        self.requires_mixed_criteria = true;
        self
    }
}
