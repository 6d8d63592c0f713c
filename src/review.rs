//! Serde model of the `AdmissionReview` envelope
//!
//! One shape serves both directions: requests arrive with `request` set,
//! responses leave with `response` filled in and the request section echoed
//! back untouched. Only the fields this webhook cares about are typed; the
//! rest of the request passes through a flattened map so nothing is lost on
//! the round trip.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// AdmissionReview envelope as sent and returned by the API server
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionReview {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    pub request: AdmissionRequest,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<AdmissionResponse>,
}

/// The request half of a review
///
/// `uid` is an opaque token that must be echoed back unchanged; a missing
/// uid decodes as the empty string rather than failing. Request fields not
/// modeled here (name, namespace, operation, userInfo, ...) are carried in
/// `rest` so the encoder reproduces them verbatim.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionRequest {
    #[serde(default)]
    pub uid: String,

    pub object: RawObject,

    #[serde(flatten)]
    pub rest: serde_json::Map<String, Value>,
}

/// Embedded workload payload, uninterpreted at the envelope layer
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawObject {
    pub raw: Value,
}

/// The response half of a review
///
/// Absent optionals are omitted from the output entirely; the API server
/// treats omission and null differently.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionResponse {
    pub uid: String,

    pub allowed: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_type: Option<PatchType>,

    #[serde(default, with = "base64_patch", skip_serializing_if = "Option::is_none")]
    pub patch: Option<Vec<u8>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_annotations: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Status>,
}

impl AdmissionResponse {
    /// Creates a response that allows the request, with nothing else set
    pub fn allowed(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            allowed: true,
            patch_type: None,
            patch: None,
            audit_annotations: None,
            result: None,
        }
    }
}

/// Patch encodings understood by the API server
///
/// Presence of the tag is what matters: it must accompany a patch and must
/// be absent otherwise.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchType {
    #[serde(rename = "JSONPatch")]
    JsonPatch,
}

/// Outcome marker attached alongside a patch
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Status {
    pub status: String,
}

/// Patch bytes travel base64-encoded on the wire
mod base64_patch {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(patch: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match patch {
            Some(bytes) => STANDARD.encode(bytes).serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = Option::<String>::deserialize(deserializer)?;
        encoded
            .map(|s| STANDARD.decode(s).map_err(serde::de::Error::custom))
            .transpose()
    }
}
