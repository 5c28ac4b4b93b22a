//! Modal create/edit form rendered from a resource descriptor.
//!
//! Each field kind maps to one input element; validation errors from the
//! session render under the offending field. The file input shows the
//! current remote upload (edit mode) or the freshly picked filename.

use leptos::prelude::*;

use crate::net::api;
use crate::resource::descriptor::{FieldKind, FieldSpec, ResourceDescriptor};
use crate::resource::form::{FieldValue, FileSelection, FormMode, FormSession};

/// Descriptor-driven modal form. Submission and closing are owned by the
/// parent screen; this component only edits the session's field values.
#[component]
pub fn ResourceFormModal(
    descriptor: &'static ResourceDescriptor,
    session: RwSignal<FormSession>,
    on_cancel: Callback<()>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let title = move || {
        let verb = match session.get().mode {
            FormMode::Create => "Create",
            FormMode::Edit => "Edit",
        };
        format!("{verb} {}", descriptor.noun_title)
    };
    let submit_label = move || {
        let state = session.get();
        if state.submitting {
            "Saving...".to_owned()
        } else {
            match state.mode {
                FormMode::Create => "Create".to_owned(),
                FormMode::Edit => "Update".to_owned(),
            }
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--form" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.run(());
                }>
                    {descriptor
                        .fields
                        .iter()
                        .map(|field| field_input(descriptor, field, session))
                        .collect::<Vec<_>>()}
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="btn btn--primary"
                            disabled=move || session.get().submitting
                        >
                            {submit_label}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn field_input(
    descriptor: &'static ResourceDescriptor,
    field: &'static FieldSpec,
    session: RwSignal<FormSession>,
) -> impl IntoView {
    let name = field.name;
    let error = move || session.get().errors.get(name).cloned();

    let input = match field.kind {
        FieldKind::Text => view! {
            <input
                class="dialog__input"
                type="text"
                prop:value=move || session.get().text(name)
                on:input=move |ev| {
                    session.update(|s| s.set_field(name, FieldValue::Text(event_target_value(&ev))));
                }
            />
        }
        .into_any(),
        FieldKind::LongText => view! {
            <textarea
                class="dialog__input"
                rows="4"
                prop:value=move || session.get().text(name)
                on:input=move |ev| {
                    session.update(|s| s.set_field(name, FieldValue::Text(event_target_value(&ev))));
                }
            ></textarea>
        }
        .into_any(),
        FieldKind::Date => view! {
            <input
                class="dialog__input"
                type="date"
                prop:value=move || session.get().text(name)
                on:input=move |ev| {
                    session.update(|s| s.set_field(name, FieldValue::Text(event_target_value(&ev))));
                }
            />
        }
        .into_any(),
        FieldKind::File => file_input(descriptor, field, session).into_any(),
    };

    view! {
        <label class="dialog__label">
            {field.label}
            {input}
            <Show when=move || error().is_some()>
                <span class="dialog__error">{move || error().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}

fn file_input(
    descriptor: &'static ResourceDescriptor,
    field: &'static FieldSpec,
    session: RwSignal<FormSession>,
) -> impl IntoView {
    let name = field.name;
    let selection = move || session.get().file(name);
    let preview = move || match selection() {
        FileSelection::Remote { filename } => descriptor.upload_dir.map(|dir| {
            view! {
                <img
                    class="dialog__preview"
                    src=api::public_asset_url(dir, &filename)
                    alt=field.label
                />
            }
            .into_any()
        }),
        FileSelection::Attached(file) => Some(
            view! { <span class="dialog__filename">{file.name}</span> }.into_any(),
        ),
        FileSelection::None => None,
    };

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            use crate::resource::form::AttachedFile;

            if let Some(target) = ev.target() {
                let input: web_sys::HtmlInputElement = target.unchecked_into();
                if let Some(file) = input.files().and_then(|files| files.get(0)) {
                    session.update(|s| {
                        s.set_field(
                            name,
                            FieldValue::File(FileSelection::Attached(AttachedFile {
                                name: file.name(),
                                handle: Some(file),
                            })),
                        );
                    });
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    view! {
        <div class="dialog__upload">
            {preview}
            <input type="file" accept="image/*" on:change=on_change/>
        </div>
    }
}
