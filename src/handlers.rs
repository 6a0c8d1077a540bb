use axum::{
    async_trait,
    extract::{rejection::FormRejection, FromRequestParts, State},
    http::{request::Parts, Uri},
    response::{Html, IntoResponse, Response},
    Form,
};
use log::{info, warn};
use serde::Deserialize;

use crate::errors::WikiError;
use crate::services::{extract_title, Action, Title};
use crate::types::{AppState, Page};
use crate::utils::found;

/// Title of the page addressed by the request path.
///
/// Every `/data/<action>/` route takes its title through this extractor, so
/// the full path is checked against the route pattern before a handler runs.
/// A path that does not match is rejected with 404.
#[derive(Debug)]
pub struct PageTitle(pub Title);

#[async_trait]
impl<S> FromRequestParts<S> for PageTitle
where
    S: Send + Sync,
{
    type Rejection = WikiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let path = parts.uri.path();
        extract_title(path).map(PageTitle).map_err(|e| {
            warn!("Rejected page path: '{}'", path);
            e
        })
    }
}

/// Form submitted by the edit page
#[derive(Debug, Default, Deserialize)]
pub struct SaveForm {
    #[serde(default)]
    pub body: String,
}

/// Handle root path requests
pub async fn handle_root() -> Response {
    found(&Action::View.path_for(&Title::front_page()))
}

/// Show a page, or send the client to its editor if it cannot be loaded
pub async fn handle_view(
    State(state): State<AppState>,
    PageTitle(title): PageTitle,
) -> Result<Response, WikiError> {
    info!("View request received: '{}'", title);
    match state.store.load(&title) {
        Ok(page) => render_page(&state, "view", &page),
        Err(e) => {
            info!("Page '{}' unavailable ({}), redirecting to editor", title, e);
            Ok(found(&Action::Edit.path_for(&title)))
        }
    }
}

/// Show the editor for a page, blank if it cannot be loaded
pub async fn handle_edit(
    State(state): State<AppState>,
    PageTitle(title): PageTitle,
) -> Result<Response, WikiError> {
    info!("Edit request received: '{}'", title);
    let page = state.store.load(&title).unwrap_or_else(|e| {
        info!("Page '{}' unavailable ({}), starting blank", title, e);
        Page::blank(title)
    });
    render_page(&state, "edit", &page)
}

/// Store the submitted body and redirect to the page view.
///
/// A request that carries no usable form saves an empty page.
pub async fn handle_save(
    State(state): State<AppState>,
    PageTitle(title): PageTitle,
    form: Result<Form<SaveForm>, FormRejection>,
) -> Result<Response, WikiError> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            warn!("Save for '{}' has no usable form ({}), saving empty body", title, rejection);
            SaveForm::default()
        }
    };
    info!("Save request received: '{}' ({} bytes)", title, form.body.len());
    let page = Page { title, body: form.body.into_bytes() };
    state.store.save(&page)?;
    Ok(found(&Action::View.path_for(&page.title)))
}

/// Anything the router does not know about
pub async fn handle_not_found(uri: Uri) -> WikiError {
    warn!("Path not found: '{}'", uri.path());
    WikiError::NotFound
}

fn render_page(state: &AppState, view: &str, page: &Page) -> Result<Response, WikiError> {
    let html = state.renderer.render(view, page)?;
    Ok(Html(html).into_response())
}
