//! Submission pipeline: serialize a form session into a planned request and
//! settle its outcome.
//!
//! SEQUENCING
//! ==========
//! The screen validates the session first, then builds exactly one request
//! from it. The outcome is settled against the modal's visibility at
//! response time: a submission the user abandoned mid-flight must still
//! refresh the list on success, and has nowhere to report a failure into.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use super::descriptor::{Encoding, FieldKind, ResourceDescriptor, UpdateMethod};
use super::form::{FieldValue, FileSelection, FormMode, FormSession};
use super::request::{FormPart, Method, PartValue, RequestBody, RequestSpec};

/// Operation names surfaced in notices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Create,
    Update,
    Delete,
}

impl Operation {
    fn verb(self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    fn past_tense(self) -> &'static str {
        match self {
            Self::Fetch => "fetched",
            Self::Create => "created",
            Self::Update => "updated",
            Self::Delete => "deleted",
        }
    }
}

/// The list request for a resource.
pub fn list_request(descriptor: &ResourceDescriptor) -> RequestSpec {
    RequestSpec {
        method: Method::Get,
        path: descriptor.endpoint.to_owned(),
        body: None,
    }
}

/// Build the single create or update request for a validated session.
///
/// Returns `None` only for an edit session whose target id is missing, which
/// the constructors rule out; callers treat it as a no-op.
pub fn build_submit_request(
    session: &FormSession,
    descriptor: &ResourceDescriptor,
) -> Option<RequestSpec> {
    let body = match descriptor.encoding {
        Encoding::Json => RequestBody::Json(json_body(session, descriptor)),
        Encoding::Multipart => RequestBody::Multipart(multipart_body(session, descriptor)),
    };
    let (method, path) = match session.mode {
        FormMode::Create => (Method::Post, descriptor.endpoint.to_owned()),
        FormMode::Edit => {
            let id = session.target_id()?;
            let method = match descriptor.update_method {
                UpdateMethod::Put => Method::Put,
                UpdateMethod::Patch => Method::Patch,
            };
            (method, format!("{}/{id}", descriptor.endpoint))
        }
    };
    Some(RequestSpec {
        method,
        path,
        body: Some(body),
    })
}

/// JSON object of the domain fields, excluding id and timestamps.
fn json_body(session: &FormSession, descriptor: &ResourceDescriptor) -> serde_json::Value {
    let mut object = serde_json::Map::new();
    for field in descriptor.fields {
        if field.kind == FieldKind::File {
            continue;
        }
        object.insert(
            field.name.to_owned(),
            serde_json::Value::String(session.text(field.name)),
        );
    }
    serde_json::Value::Object(object)
}

/// One part per field, in descriptor order. An unchanged remote file yields
/// no part at all, so the server keeps what it has.
fn multipart_body(session: &FormSession, descriptor: &ResourceDescriptor) -> Vec<FormPart> {
    let mut parts = Vec::new();
    for field in descriptor.fields {
        match session.values.get(field.name) {
            Some(FieldValue::File(FileSelection::Attached(file))) => parts.push(FormPart {
                name: field.name.to_owned(),
                value: PartValue::File(file.clone()),
            }),
            Some(FieldValue::File(_)) | None => {}
            Some(FieldValue::Text(value)) => parts.push(FormPart {
                name: field.name.to_owned(),
                value: PartValue::Text(value.clone()),
            }),
        }
    }
    parts
}

/// How to react once a submission's response arrives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitSettlement {
    /// Close the modal, notify success, refresh the list.
    CloseAndRefresh,
    /// Modal already closed by the user; still refresh so the list catches up.
    RefreshOnly,
    /// Keep the modal open with its values and report the failure.
    ReportFailure,
    /// Late failure with no modal to report into.
    Drop,
}

/// Settle a submission outcome against the modal's visibility at response
/// time.
pub fn settle_submit(succeeded: bool, still_visible: bool) -> SubmitSettlement {
    match (succeeded, still_visible) {
        (true, true) => SubmitSettlement::CloseAndRefresh,
        (true, false) => SubmitSettlement::RefreshOnly,
        (false, true) => SubmitSettlement::ReportFailure,
        (false, false) => SubmitSettlement::Drop,
    }
}

/// Notice text for a successful operation, e.g.
/// "Announcement created successfully".
pub fn success_message(operation: Operation, descriptor: &ResourceDescriptor) -> String {
    format!(
        "{} {} successfully",
        descriptor.noun_title,
        operation.past_tense()
    )
}

/// Notice text for a failed operation, e.g. "Failed to create announcement".
/// Fetch failures name the collection instead of one record.
pub fn failure_message(operation: Operation, descriptor: &ResourceDescriptor) -> String {
    let noun = match operation {
        Operation::Fetch => descriptor.noun_plural,
        _ => descriptor.noun,
    };
    format!("Failed to {} {noun}", operation.verb())
}
