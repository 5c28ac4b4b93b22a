//! REST API executor for the admin endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! auth token attached as a bearer header and multipart bodies built from
//! `web_sys::FormData`.
//! Server-side (SSR) and native tests: stubs returning `Unavailable`, since
//! these endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result` so screens can convert failures into notices
//! without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use crate::resource::descriptor::ResourceDescriptor;
use crate::resource::record::ResourceRecord;
use crate::resource::request::RequestSpec;
#[cfg(feature = "hydrate")]
use crate::resource::request::{Method, PartValue, RequestBody};
#[cfg(feature = "hydrate")]
use crate::resource::submit::list_request;

/// Same-origin prefix the admin API is mounted under.
pub const API_BASE: &str = "/api";

/// Sign-in endpoint; the one call made without a stored token.
pub const SIGNIN_PATH: &str = "/auth/admin-signin";

#[cfg(any(test, feature = "hydrate"))]
fn request_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Path of an uploaded file under the public asset tree.
pub fn asset_path(dir: &str, filename: &str) -> String {
    format!("/public/uploads/{dir}/{filename}")
}

/// Absolute URL for an uploaded file, for previews in edit mode.
pub fn public_asset_url(dir: &str, filename: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return format!("{origin}{}", asset_path(dir, filename));
        }
    }
    asset_path(dir, filename)
}

/// Exchange admin credentials for an auth token.
///
/// # Errors
///
/// `Status` for rejected credentials, `Transport`/`Decode` for everything
/// else that can go wrong on the wire.
pub async fn admin_signin(email: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct SigninRequest<'a> {
            email: &'a str,
            password: &'a str,
        }
        #[derive(serde::Deserialize)]
        struct SigninResponse {
            #[serde(rename = "authToken")]
            auth_token: String,
        }

        let request = gloo_net::http::Request::post(&request_url(SIGNIN_PATH))
            .json(&SigninRequest { email, password })
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        let body: SigninResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.auth_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a resource's full collection.
///
/// # Errors
///
/// `Status` on a non-2xx answer, `Decode` when the body is not a record
/// list.
pub async fn fetch_list(
    descriptor: &ResourceDescriptor,
) -> Result<Vec<ResourceRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = execute(&list_request(descriptor)).await?;
        response
            .json::<Vec<ResourceRecord>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = descriptor;
        Err(ApiError::Unavailable)
    }
}

/// Execute a planned mutation, discarding any response body.
///
/// # Errors
///
/// `Status` on a non-2xx answer, `Transport` when the call never completes.
pub async fn send(spec: &RequestSpec) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        execute(spec).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = spec;
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
fn authorize(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::token::read() {
        Some(token) => builder.header("Authorization", &bearer_value(&token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
fn multipart_form(parts: &[crate::resource::request::FormPart]) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Transport("FormData construction failed".to_owned()))?;
    for part in parts {
        match &part.value {
            PartValue::Text(value) => form
                .append_with_str(&part.name, value)
                .map_err(|_| ApiError::Transport("FormData append failed".to_owned()))?,
            PartValue::File(file) => {
                // A part without a browser handle has nothing to upload.
                if let Some(handle) = &file.handle {
                    form.append_with_blob_and_filename(&part.name, handle, &file.name)
                        .map_err(|_| ApiError::Transport("FormData append failed".to_owned()))?;
                }
            }
        }
    }
    Ok(form)
}

#[cfg(feature = "hydrate")]
async fn execute(spec: &RequestSpec) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::Request;

    let url = request_url(&spec.path);
    let builder = match spec.method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Patch => Request::patch(&url),
        Method::Delete => Request::delete(&url),
    };
    let builder = authorize(builder);
    let request = match &spec.body {
        None => builder
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?,
        Some(RequestBody::Json(value)) => builder
            .json(value)
            .map_err(|e| ApiError::Transport(e.to_string()))?,
        Some(RequestBody::Multipart(parts)) => builder
            // The browser sets the multipart content type and boundary.
            .body(multipart_form(parts)?)
            .map_err(|e| ApiError::Transport(e.to_string()))?,
    };
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}
