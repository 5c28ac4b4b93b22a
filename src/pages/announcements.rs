//! Announcements management route.

use leptos::prelude::*;

use crate::components::resource_screen::ResourceScreen;
use crate::resource::descriptor;

/// Announcement list/create/edit/delete screen.
#[component]
pub fn AnnouncementsPage() -> impl IntoView {
    view! { <ResourceScreen descriptor=&descriptor::ANNOUNCEMENTS/> }
}
