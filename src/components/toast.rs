//! Transient toast stack for the shared notice queue.

use leptos::prelude::*;

use crate::resource::notify::{NoticeLevel, NoticeState};

/// Renders every queued notice; each dismisses itself after a few seconds
/// or on click.
#[component]
pub fn ToastStack() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    #[cfg(feature = "hydrate")]
    {
        // Schedule one dismiss task per notice, keyed by id so re-renders
        // don't double-schedule.
        let scheduled = StoredValue::new(std::collections::HashSet::<u64>::new());
        Effect::new(move || {
            for notice in notices.get().items {
                let fresh = scheduled
                    .try_update_value(|s| s.insert(notice.id))
                    .unwrap_or(false);
                if !fresh {
                    continue;
                }
                let id = notice.id;
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_secs(3)).await;
                    notices.update(|n| n.dismiss(id));
                });
            }
        });
    }

    view! {
        <div class="toast-stack">
            {move || {
                notices
                    .get()
                    .items
                    .into_iter()
                    .map(|notice| {
                        let class = match notice.level {
                            NoticeLevel::Success => "toast toast--success",
                            NoticeLevel::Error => "toast toast--error",
                        };
                        let id = notice.id;
                        view! {
                            <div class=class on:click=move |_| notices.update(|n| n.dismiss(id))>
                                {notice.text}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
