//! Generic resource-management workflow.
//!
//! DESIGN
//! ======
//! One engine serves every managed resource type. `descriptor` carries the
//! per-resource differences as data; `list`, `form`, `delete`, and `notify`
//! are the pure state models; `submit` plans the single network call an
//! action makes and `request` is the value type handed to `net::api`.
//! Nothing in this module touches the browser, so all of it tests natively.

pub mod delete;
pub mod descriptor;
pub mod form;
pub mod list;
pub mod notify;
pub mod record;
pub mod request;
pub mod submit;
