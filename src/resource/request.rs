//! Planned-request values handed to the network layer.
//!
//! DESIGN
//! ======
//! The workflow logic builds these plain values; only `net::api` turns them
//! into actual HTTP traffic. That keeps every "which call would this action
//! make, if any" decision natively testable.

use super::form::AttachedFile;

/// HTTP method of a planned request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// One part of a multipart body.
#[derive(Clone, Debug, PartialEq)]
pub struct FormPart {
    pub name: String,
    pub value: PartValue,
}

/// Part payload: ordinary field text, or a freshly attached file.
#[derive(Clone, Debug, PartialEq)]
pub enum PartValue {
    Text(String),
    File(AttachedFile),
}

/// Request body in either of the encodings the API accepts.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Json(serde_json::Value),
    Multipart(Vec<FormPart>),
}

/// A fully planned API request.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestSpec {
    pub method: Method,
    /// Path relative to the API base, e.g. `/events/4`.
    pub path: String,
    pub body: Option<RequestBody>,
}
