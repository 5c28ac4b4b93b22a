//! Landing page for the admin area.

use leptos::prelude::*;

/// Static overview shown after sign-in.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Dashboard Overview"</h1>
            <p>
                "Manage the engagement platform's announcements, events, and "
                "forums from the sidebar."
            </p>
        </div>
    }
}
