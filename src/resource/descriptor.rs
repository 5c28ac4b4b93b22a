//! Static metadata describing each managed resource type.
//!
//! DESIGN
//! ======
//! The admin console repeats one workflow (list, create/edit modal, delete
//! confirmation) across several resource types. Everything that actually
//! differs between them lives here as plain data so a single screen
//! implementation can serve all of them.

#[cfg(test)]
#[path = "descriptor_test.rs"]
mod descriptor_test;

/// How a form field is entered and rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    LongText,
    Date,
    File,
}

/// One form field of a resource type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire name, also the key in records and request bodies.
    pub name: &'static str,
    /// Human label shown in the form and table header.
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    /// Validation message shown when a required field is left empty.
    pub fn required_message(&self) -> String {
        match self.kind {
            FieldKind::Date => "Please choose a date".to_owned(),
            FieldKind::File => format!("Please attach a {}", self.label.to_lowercase()),
            FieldKind::Text | FieldKind::LongText => {
                format!("Please enter the {}", self.label.to_lowercase())
            }
        }
    }
}

/// Request body encoding for create and update calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    Json,
    Multipart,
}

/// HTTP method used for updates; the API is not uniform across resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateMethod {
    Put,
    Patch,
}

/// Static configuration for one resource type.
///
/// Invariant: `encoding` is `Multipart` exactly when a `File` field is
/// present, and `upload_dir` is set exactly for those resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Collection path, e.g. `/announcements`.
    pub endpoint: &'static str,
    /// Singular noun used in notices, e.g. "announcement".
    pub noun: &'static str,
    /// Capitalized singular noun for buttons and modal titles, e.g.
    /// "Announcement".
    pub noun_title: &'static str,
    /// Plural noun used in fetch notices, e.g. "announcements".
    pub noun_plural: &'static str,
    /// Screen heading, e.g. "Manage Announcements".
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
    pub encoding: Encoding,
    pub update_method: UpdateMethod,
    /// Directory under `/public/uploads` holding this resource's files.
    pub upload_dir: Option<&'static str>,
}

impl ResourceDescriptor {
    /// The file field, if this resource has one.
    pub fn file_field(&self) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.kind == FieldKind::File)
    }

    pub fn has_file_field(&self) -> bool {
        self.file_field().is_some()
    }

    pub fn has_date_field(&self) -> bool {
        self.fields.iter().any(|f| f.kind == FieldKind::Date)
    }
}

pub const ANNOUNCEMENTS: ResourceDescriptor = ResourceDescriptor {
    endpoint: "/announcements",
    noun: "announcement",
    noun_title: "Announcement",
    noun_plural: "announcements",
    title: "Manage Announcements",
    fields: &[
        FieldSpec {
            name: "headline",
            label: "Headline",
            kind: FieldKind::Text,
            required: true,
        },
        FieldSpec {
            name: "body",
            label: "Body",
            kind: FieldKind::LongText,
            required: true,
        },
    ],
    encoding: Encoding::Json,
    update_method: UpdateMethod::Patch,
    upload_dir: None,
};

pub const EVENTS: ResourceDescriptor = ResourceDescriptor {
    endpoint: "/events",
    noun: "event",
    noun_title: "Event",
    noun_plural: "events",
    title: "Manage Events",
    fields: &[
        FieldSpec {
            name: "title",
            label: "Title",
            kind: FieldKind::Text,
            required: true,
        },
        FieldSpec {
            name: "image",
            label: "Image",
            kind: FieldKind::File,
            required: false,
        },
        FieldSpec {
            name: "body",
            label: "Body",
            kind: FieldKind::LongText,
            required: true,
        },
        FieldSpec {
            name: "eventAt",
            label: "Event At",
            kind: FieldKind::Date,
            required: true,
        },
    ],
    encoding: Encoding::Multipart,
    update_method: UpdateMethod::Put,
    upload_dir: Some("events"),
};

pub const FORUMS: ResourceDescriptor = ResourceDescriptor {
    endpoint: "/forums",
    noun: "forum",
    noun_title: "Forum",
    noun_plural: "forums",
    title: "Manage Forums",
    fields: &[
        FieldSpec {
            name: "name",
            label: "Name",
            kind: FieldKind::Text,
            required: true,
        },
        FieldSpec {
            name: "logo",
            label: "Logo",
            kind: FieldKind::File,
            required: false,
        },
    ],
    encoding: Encoding::Multipart,
    update_method: UpdateMethod::Put,
    upload_dir: Some("forums"),
};

/// Every descriptor the console manages, in sidebar order.
pub const ALL: [&ResourceDescriptor; 3] = [&ANNOUNCEMENTS, &EVENTS, &FORUMS];
