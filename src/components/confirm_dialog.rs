//! Irreversible-action confirmation dialog for deletes.

use leptos::prelude::*;

/// Warning dialog shown before a delete is sent. The buttons lock while the
/// request is in flight so a confirm cannot be issued twice.
#[component]
pub fn ConfirmDeleteDialog(
    noun: &'static str,
    #[prop(into)] busy: Signal<bool>,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--confirm" on:click=move |ev| ev.stop_propagation()>
                <h2>{format!("Are you sure you want to delete this {noun}?")}</h2>
                <p class="dialog__danger">"This action cannot be undone."</p>
                <div class="dialog__actions">
                    <button class="btn" disabled=move || busy.get() on:click=move |_| on_cancel.run(())>
                        "No"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || busy.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        {move || if busy.get() { "Deleting..." } else { "Yes" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
