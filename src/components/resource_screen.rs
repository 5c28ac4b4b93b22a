//! Generic resource management screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! One component instance serves announcements, events, and forums alike:
//! the descriptor parameterizes the endpoint, the table columns, the form
//! fields, and the request encoding. The screen owns the list state (its
//! single writer), the form session, and the delete flow, and routes every
//! outcome through the shared notice queue.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDeleteDialog;
use crate::components::resource_form::ResourceFormModal;
use crate::net::api;
use crate::resource::delete::{DeleteFlow, delete_request};
use crate::resource::descriptor::{FieldKind, FieldSpec, ResourceDescriptor};
use crate::resource::form::{FormMode, FormSession};
use crate::resource::list::ListState;
use crate::resource::notify::NoticeState;
use crate::resource::record::{ResourceRecord, display_date};
use crate::resource::submit::{Operation, build_submit_request};

/// Fetch the collection, replacing `items` wholesale on success and keeping
/// the stale items (plus an error notice) on failure.
fn load(
    descriptor: &'static ResourceDescriptor,
    list: RwSignal<ListState>,
    notices: RwSignal<NoticeState>,
) {
    list.update(ListState::begin_load);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::resource::submit::failure_message;

        match api::fetch_list(descriptor).await {
            Ok(items) => list.update(|l| l.finish_load(items)),
            Err(err) => {
                log::warn!("{} fetch failed: {err}", descriptor.noun_plural);
                list.update(ListState::fail_load);
                notices.update(|n| {
                    n.error(failure_message(Operation::Fetch, descriptor));
                });
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        list.update(ListState::fail_load);
        let _ = (descriptor, notices);
    }
}

/// List-plus-modal workflow for one resource type.
#[component]
pub fn ResourceScreen(descriptor: &'static ResourceDescriptor) -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let list = RwSignal::new(ListState::default());
    let session = RwSignal::new(FormSession::default());
    let delete = RwSignal::new(DeleteFlow::default());

    // Initial load, once per mount.
    let loaded = RwSignal::new(false);
    Effect::new(move || {
        if loaded.get() {
            return;
        }
        loaded.set(true);
        load(descriptor, list, notices);
    });

    let on_create = move |_| session.set(FormSession::open_for_create(descriptor));
    let on_edit = Callback::new(move |record: ResourceRecord| {
        session.set(FormSession::open_for_edit(descriptor, record));
    });
    let on_cancel = Callback::new(move |()| session.update(FormSession::close));

    let on_submit = Callback::new(move |()| {
        if session.get_untracked().submitting {
            return;
        }
        // Validation is local; nothing is sent while a required field is
        // empty.
        let valid = session
            .try_update(|s| s.validate(descriptor))
            .unwrap_or(false);
        if !valid {
            return;
        }
        let snapshot = session.get_untracked();
        let operation = match snapshot.mode {
            FormMode::Create => Operation::Create,
            FormMode::Edit => Operation::Update,
        };
        let Some(spec) = build_submit_request(&snapshot, descriptor) else {
            return;
        };
        session.update(|s| s.submitting = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::resource::submit::{
                SubmitSettlement, failure_message, settle_submit, success_message,
            };

            let outcome = api::send(&spec).await;
            session.update(|s| s.submitting = false);
            let visible = session.get_untracked().visible;
            match settle_submit(outcome.is_ok(), visible) {
                SubmitSettlement::CloseAndRefresh => {
                    session.update(FormSession::close);
                    notices.update(|n| {
                        n.success(success_message(operation, descriptor));
                    });
                    load(descriptor, list, notices);
                }
                SubmitSettlement::RefreshOnly => {
                    notices.update(|n| {
                        n.success(success_message(operation, descriptor));
                    });
                    load(descriptor, list, notices);
                }
                SubmitSettlement::ReportFailure => {
                    if let Err(err) = &outcome {
                        log::warn!("{} submit failed: {err}", descriptor.noun);
                    }
                    notices.update(|n| {
                        n.error(failure_message(operation, descriptor));
                    });
                }
                SubmitSettlement::Drop => {
                    if let Err(err) = &outcome {
                        log::warn!("late {} submit failure ignored: {err}", descriptor.noun);
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            session.update(|s| s.submitting = false);
            let _ = (spec, operation);
        }
    });

    let on_delete_request = Callback::new(move |id: i64| delete.update(|f| f.request(id)));
    let on_delete_cancel = Callback::new(move |()| delete.update(DeleteFlow::cancel));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = delete.try_update(DeleteFlow::confirm).flatten() else {
            return;
        };
        let spec = delete_request(descriptor, id);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::resource::submit::{failure_message, success_message};

            let outcome = api::send(&spec).await;
            delete.update(DeleteFlow::settle);
            match outcome {
                Ok(()) => {
                    notices.update(|n| {
                        n.success(success_message(Operation::Delete, descriptor));
                    });
                    load(descriptor, list, notices);
                }
                Err(err) => {
                    log::warn!("{} delete failed: {err}", descriptor.noun);
                    notices.update(|n| {
                        n.error(failure_message(Operation::Delete, descriptor));
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            delete.update(DeleteFlow::settle);
            let _ = spec;
        }
    });

    view! {
        <div class="resource-page">
            <h1 class="resource-page__heading">{descriptor.title}</h1>
            <div class="resource-page__actions">
                <button class="btn btn--primary" on:click=on_create>
                    {format!("New {}", descriptor.noun_title)}
                </button>
            </div>

            <Show when=move || list.get().loading>
                <p class="resource-table__loading">"Loading..."</p>
            </Show>
            <table class="resource-table">
                <thead>
                    <tr>
                        {descriptor
                            .fields
                            .iter()
                            .map(|f| view! { <th>{f.label}</th> })
                            .collect::<Vec<_>>()}
                        <th>"Created At"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        list.get()
                            .items
                            .into_iter()
                            .map(|record| {
                                view! {
                                    <ResourceRow
                                        descriptor=descriptor
                                        record=record
                                        on_edit=on_edit
                                        on_delete=on_delete_request
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>

            <Show when=move || session.get().visible>
                <ResourceFormModal
                    descriptor=descriptor
                    session=session
                    on_cancel=on_cancel
                    on_submit=on_submit
                />
            </Show>
            <Show when=move || !matches!(delete.get(), DeleteFlow::Idle)>
                <ConfirmDeleteDialog
                    noun=descriptor.noun
                    busy=Signal::derive(move || delete.get().is_deleting())
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirm
                />
            </Show>
        </div>
    }
}

/// One table row: a cell per descriptor field, the creation date, and the
/// edit/delete actions.
#[component]
fn ResourceRow(
    descriptor: &'static ResourceDescriptor,
    record: ResourceRecord,
    on_edit: Callback<ResourceRecord>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let id = record.id();
    let edit_record = record.clone();
    let cells = descriptor
        .fields
        .iter()
        .map(|field| field_cell(descriptor, field, &record))
        .collect::<Vec<_>>();
    let created = record
        .created_at()
        .map(|d| display_date(d).to_owned())
        .unwrap_or_default();

    view! {
        <tr>
            {cells}
            <td>{created}</td>
            <td class="resource-table__actions">
                <button class="btn btn--link" on:click=move |_| on_edit.run(edit_record.clone())>
                    "Edit"
                </button>
                <button
                    class="btn btn--link btn--danger"
                    on:click=move |_| {
                        if let Some(id) = id {
                            on_delete.run(id);
                        }
                    }
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

fn field_cell(
    descriptor: &'static ResourceDescriptor,
    field: &'static FieldSpec,
    record: &ResourceRecord,
) -> AnyView {
    match field.kind {
        FieldKind::File => match (descriptor.upload_dir, record.text(field.name)) {
            (Some(dir), Some(filename)) if !filename.is_empty() => view! {
                <td>
                    <img
                        class="resource-table__thumb"
                        src=api::public_asset_url(dir, filename)
                        alt=field.label
                    />
                </td>
            }
            .into_any(),
            _ => view! { <td>{format!("No {}", field.label.to_lowercase())}</td> }.into_any(),
        },
        FieldKind::Date => view! {
            <td>
                {record.text(field.name).map(|d| display_date(d).to_owned()).unwrap_or_default()}
            </td>
        }
        .into_any(),
        FieldKind::Text | FieldKind::LongText => view! {
            <td class="resource-table__text">
                {record.text(field.name).unwrap_or_default().to_owned()}
            </td>
        }
        .into_any(),
    }
}
