//! The admission decision core
//!
//! Takes raw `AdmissionReview` request bytes and returns the finished
//! response bytes, so an HTTP handler can pass them through without any
//! further conversion. Decode of the envelope and the embedded workload, the
//! patch decision, and the re-encode all happen here, strictly in that
//! order; any decode or encode failure aborts the invocation with no
//! response bytes produced.

use json_patch::jsonptr::PointerBuf;
use json_patch::{AddOperation, Patch, PatchOperation};
use serde_json::json;
use tracing::debug;

use crate::error::{Error, Result};
use crate::review::{AdmissionResponse, AdmissionReview, PatchType, Status};
use crate::workload::Workload;

/// Audit annotation recorded on every response this webhook produces
pub const AUDIT_ANNOTATION_KEY: &str = "mutateme";
/// Value of the audit marker; diagnostic only
pub const AUDIT_ANNOTATION_VALUE: &str = "yup it did it";

/// Decides how the workload in `body` should be admitted
///
/// Always allows the request. When the workload carries an explicit
/// `metadata.name` but no `metadata.generateName`, the response includes a
/// one-operation JSON patch copying the name into `generateName`; in every
/// other shape the object passes through unpatched and naming is left to the
/// API server.
///
/// `verbose` only toggles logging of the raw payloads, never the decision.
pub fn mutate(body: &[u8], verbose: bool) -> Result<Vec<u8>> {
    if verbose {
        debug!(body = %String::from_utf8_lossy(body), "recv");
    }

    let mut review: AdmissionReview = serde_json::from_slice(body).map_err(Error::Decode)?;

    let workload: Workload =
        serde_json::from_value(review.request.object.raw.clone()).map_err(Error::Decode)?;

    review.response = Some(plan(&workload, &review.request.uid)?);

    let response_body = serde_json::to_vec(&review).map_err(Error::Encode)?;

    if verbose {
        debug!(body = %String::from_utf8_lossy(&response_body), "resp");
    }

    Ok(response_body)
}

/// Builds the response for an already-decoded workload
///
/// One decision, taken once: an existing `generateName` always wins, and a
/// workload with neither field is deliberately left for the API server to
/// handle. The patch only ever adds `generateName`; the explicit name stays.
fn plan(workload: &Workload, uid: &str) -> Result<AdmissionResponse> {
    let mut response = AdmissionResponse::allowed(uid);
    response.audit_annotations = Some(
        [(AUDIT_ANNOTATION_KEY.to_owned(), AUDIT_ANNOTATION_VALUE.to_owned())].into(),
    );

    if workload.metadata.generate_name.is_none()
        && let Some(name) = &workload.metadata.name
    {
        let patch = Patch(vec![PatchOperation::Add(AddOperation {
            path: PointerBuf::from_tokens(["metadata", "generateName"]),
            value: json!(name),
        })]);

        response.patch = Some(serde_json::to_vec(&patch).map_err(Error::Encode)?);
        response.patch_type = Some(PatchType::JsonPatch);
        response.result = Some(Status {
            status: "Success".to_owned(),
        });
    }

    Ok(response)
}
