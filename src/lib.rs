//! Admission webhook core for server-side name generation
//!
//! Implements the decision half of a Kubernetes mutating admission webhook:
//! [`mutate`] takes raw `AdmissionReview` request bytes and returns raw
//! response bytes, ready to be sent back from an HTTP handler without any
//! further conversion. When the workload under admission carries an explicit
//! `metadata.name` but no `metadata.generateName`, the response includes a
//! JSON patch copying the name into `generateName`, so the API server derives
//! a unique name instead of reusing the explicit one. Every other shape is
//! allowed through unchanged.
//!
//! Transport, TLS, and certificate handling live with the caller; this crate
//! is a pure request/response transform.

pub mod error;
pub mod mutate;
pub mod review;
pub mod workload;

pub use error::{Error, Result};
pub use mutate::{AUDIT_ANNOTATION_KEY, AUDIT_ANNOTATION_VALUE, mutate};
pub use review::{AdmissionRequest, AdmissionResponse, AdmissionReview, PatchType, RawObject, Status};
pub use workload::Workload;
