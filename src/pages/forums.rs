//! Forums management route.

use leptos::prelude::*;

use crate::components::resource_screen::ResourceScreen;
use crate::resource::descriptor;

/// Forum list/create/edit/delete screen, with logo upload.
#[component]
pub fn ForumsPage() -> impl IntoView {
    view! { <ResourceScreen descriptor=&descriptor::FORUMS/> }
}
