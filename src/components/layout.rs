//! Admin shell: fixed sidebar navigation, header, and routed content.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::use_navigate;

/// Layout wrapping every `/admin` route with the sidebar and header.
#[component]
pub fn AdminLayout() -> impl IntoView {
    let collapsed = RwSignal::new(false);
    let navigate = use_navigate();

    let on_sign_out = move |_| {
        crate::util::token::clear();
        navigate("/signin", NavigateOptions::default());
    };

    view! {
        <div
            class="admin-shell"
            class=("admin-shell--collapsed", move || collapsed.get())
        >
            <aside class="admin-sidebar">
                <div class="admin-sidebar__brand">"Uni-pulse"</div>
                <nav class="admin-sidebar__nav">
                    <A href="/admin/home">"Dashboard Overview"</A>
                    <A href="/admin/announcements">"Announcements"</A>
                    <A href="/admin/events">"Events"</A>
                    <A href="/admin/forums">"Forums"</A>
                </nav>
            </aside>
            <div class="admin-main">
                <header class="admin-header">
                    <button
                        class="btn admin-header__collapse"
                        on:click=move |_| collapsed.update(|c| *c = !*c)
                        title="Toggle sidebar"
                    >
                        {move || if collapsed.get() { "»" } else { "«" }}
                    </button>
                    <span class="admin-header__spacer"></span>
                    <button class="btn admin-header__signout" on:click=on_sign_out>
                        "Sign Out"
                    </button>
                </header>
                <main class="admin-content">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
