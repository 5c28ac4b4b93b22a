//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the console chrome and the generic resource workflow
//! while reading/writing shared state from Leptos context providers.

pub mod confirm_dialog;
pub mod layout;
pub mod resource_form;
pub mod resource_screen;
pub mod toast;
