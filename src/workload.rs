//! Metadata-only view of the workload under admission

use serde::Deserialize;

/// The decoded target object, reduced to the identity fields
///
/// Only `metadata.name` and `metadata.generateName` feed the rename
/// decision, so nothing else is modeled: unknown fields can never fail the
/// decode, which keeps the webhook forward-compatible with whatever else the
/// workload carries. A missing `metadata` section decodes as empty.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Workload {
    #[serde(default)]
    pub metadata: Metadata,
}

/// Identity subset of the object metadata
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub name: Option<String>,
    pub generate_name: Option<String>,
}
