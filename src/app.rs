//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::layout::AdminLayout;
use crate::components::toast::ToastStack;
use crate::pages::{
    announcements::AnnouncementsPage, events::EventsPage, forums::ForumsPage, home::HomePage,
    signin::SigninPage,
};
use crate::resource::notify::NoticeState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared notice queue and sets up client-side routing:
/// `/` redirects to the sign-in screen; everything else lives under the
/// `/admin` shell.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let notices = RwSignal::new(NoticeState::default());
    provide_context(notices);

    view! {
        <Stylesheet id="leptos" href="/pkg/unipulse-admin.css"/>
        <Title text="Uni-pulse Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/signin"/> }/>
                <Route path=StaticSegment("signin") view=SigninPage/>
                <ParentRoute path=StaticSegment("admin") view=AdminLayout>
                    <Route path=StaticSegment("home") view=HomePage/>
                    <Route path=StaticSegment("announcements") view=AnnouncementsPage/>
                    <Route path=StaticSegment("events") view=EventsPage/>
                    <Route path=StaticSegment("forums") view=ForumsPage/>
                </ParentRoute>
            </Routes>
            <ToastStack/>
        </Router>
    }
}
