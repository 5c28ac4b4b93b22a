//! Events management route.

use leptos::prelude::*;

use crate::components::resource_screen::ResourceScreen;
use crate::resource::descriptor;

/// Event list/create/edit/delete screen, with image upload and date.
#[component]
pub fn EventsPage() -> impl IntoView {
    view! { <ResourceScreen descriptor=&descriptor::EVENTS/> }
}
