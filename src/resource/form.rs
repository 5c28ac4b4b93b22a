//! Mutable state of one open create/edit modal.
//!
//! DESIGN
//! ======
//! A session is created per operation: `open_for_create` starts blank,
//! `open_for_edit` seeds every descriptor field from the record, including a
//! *remote reference* for an existing upload so an unchanged file is never
//! re-sent. Closing hides the modal without clearing values, which is what
//! lets a failed submission be retried without re-entering data.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use super::descriptor::{FieldKind, ResourceDescriptor};
use super::record::ResourceRecord;

/// Whether the modal creates a new record or edits an existing one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit,
}

/// A newly picked file from the browser's file input.
///
/// The `web_sys` handle only exists in the browser; native builds (and
/// tests) carry the name alone, which is all the planning logic needs.
#[derive(Clone, Debug, Default)]
pub struct AttachedFile {
    pub name: String,
    #[cfg(feature = "hydrate")]
    pub handle: Option<web_sys::File>,
}

impl PartialEq for AttachedFile {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl AttachedFile {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            #[cfg(feature = "hydrate")]
            handle: None,
        }
    }
}

/// Current value of a file field.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FileSelection {
    #[default]
    None,
    /// An already-uploaded file, referenced by its stored filename.
    /// Submitting with this value omits the part; the server keeps the file.
    Remote { filename: String },
    /// A replacement picked in this session; its bytes are uploaded.
    Attached(AttachedFile),
}

/// Current value of any form field.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    File(FileSelection),
}

impl FieldValue {
    fn empty_for(kind: FieldKind) -> Self {
        match kind {
            FieldKind::File => Self::File(FileSelection::None),
            FieldKind::Text | FieldKind::LongText | FieldKind::Date => {
                Self::Text(String::new())
            }
        }
    }
}

/// State of one modal lifecycle.
///
/// Invariant: `target` is `Some` exactly when `mode` is `Edit`; both are set
/// only by the two constructors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormSession {
    pub mode: FormMode,
    pub target: Option<ResourceRecord>,
    pub values: BTreeMap<String, FieldValue>,
    pub errors: BTreeMap<String, String>,
    pub visible: bool,
    pub submitting: bool,
}

impl FormSession {
    /// Open the modal in create mode with every field blank.
    pub fn open_for_create(descriptor: &ResourceDescriptor) -> Self {
        let values = descriptor
            .fields
            .iter()
            .map(|f| (f.name.to_owned(), FieldValue::empty_for(f.kind)))
            .collect();
        Self {
            mode: FormMode::Create,
            target: None,
            values,
            errors: BTreeMap::new(),
            visible: true,
            submitting: false,
        }
    }

    /// Open the modal in edit mode, seeded from the record's current values.
    pub fn open_for_edit(descriptor: &ResourceDescriptor, record: ResourceRecord) -> Self {
        let values = descriptor
            .fields
            .iter()
            .map(|f| {
                let value = match f.kind {
                    FieldKind::File => {
                        let selection = match record.text(f.name) {
                            Some(filename) if !filename.is_empty() => FileSelection::Remote {
                                filename: filename.to_owned(),
                            },
                            _ => FileSelection::None,
                        };
                        FieldValue::File(selection)
                    }
                    FieldKind::Text | FieldKind::LongText | FieldKind::Date => {
                        FieldValue::Text(record.text(f.name).unwrap_or_default().to_owned())
                    }
                };
                (f.name.to_owned(), value)
            })
            .collect();
        Self {
            mode: FormMode::Edit,
            target: Some(record),
            values,
            errors: BTreeMap::new(),
            visible: true,
            submitting: false,
        }
    }

    /// Hide the modal. Values are kept; each open re-seeds anyway.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Update one field and drop any stale validation error for it.
    pub fn set_field(&mut self, name: &str, value: FieldValue) {
        self.values.insert(name.to_owned(), value);
        self.errors.remove(name);
    }

    /// Text value of a field, empty when unset.
    pub fn text(&self, name: &str) -> String {
        match self.values.get(name) {
            Some(FieldValue::Text(v)) => v.clone(),
            _ => String::new(),
        }
    }

    /// File selection of a field, `None` when unset.
    pub fn file(&self, name: &str) -> FileSelection {
        match self.values.get(name) {
            Some(FieldValue::File(v)) => v.clone(),
            _ => FileSelection::None,
        }
    }

    /// Id of the record under edit.
    pub fn target_id(&self) -> Option<i64> {
        self.target.as_ref().and_then(ResourceRecord::id)
    }

    /// Check required fields, recording a message per violation.
    ///
    /// Returns `true` when submission may proceed. Validation is purely
    /// local; nothing is sent while any required field is empty.
    pub fn validate(&mut self, descriptor: &ResourceDescriptor) -> bool {
        self.errors.clear();
        for field in descriptor.fields {
            if !field.required {
                continue;
            }
            let missing = match self.values.get(field.name) {
                Some(FieldValue::Text(v)) => v.trim().is_empty(),
                Some(FieldValue::File(selection)) => *selection == FileSelection::None,
                None => true,
            };
            if missing {
                self.errors
                    .insert(field.name.to_owned(), field.required_message());
            }
        }
        self.errors.is_empty()
    }
}
