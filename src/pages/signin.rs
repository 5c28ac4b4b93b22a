//! Admin sign-in page.
//!
//! Exchanges email + password for an auth token, persists it, and moves to
//! the admin home route. Input checks run locally before any call is made.

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

use leptos::prelude::*;

use crate::resource::notify::NoticeState;

/// Local validation of the sign-in form.
///
/// Mirrors the form rules: both fields required, email must look like an
/// email address.
fn validate_signin_input(email: &str, password: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Please input your email!");
    }
    if !looks_like_email(email) {
        return Err("Please enter a valid email!");
    }
    if password.is_empty() {
        return Err("Please input your password!");
    }
    Ok(email.to_owned())
}

/// Cheap structural check; the server is the real authority.
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Sign-in page with the brand header and credential form.
#[component]
pub fn SigninPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let notices = expect_context::<RwSignal<NoticeState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let password_value = password.get();
        let email_value = match validate_signin_input(&email.get(), &password_value) {
            Ok(value) => value,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::admin_signin(&email_value, &password_value).await {
                Ok(token) => {
                    crate::util::token::store(&token);
                    notices.update(|n| {
                        n.success("Successfully signed in!");
                    });
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/admin/home");
                    }
                }
                Err(err) => {
                    log::warn!("sign-in failed: {err}");
                    info.set("Invalid credentials. Please try again.".to_owned());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            busy.set(false);
            let _ = (email_value, password_value, notices);
        }
    };

    view! {
        <div class="signin-page">
            <div class="signin-card">
                <img class="signin-card__logo" src="/assets/brand-logo.png" alt="brand-logo"/>
                <h1>"Uni-pulse Admin Dashboard"</h1>
                <form class="signin-form" on:submit=on_submit>
                    <input
                        class="signin-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="signin-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary signin-submit" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="signin-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
