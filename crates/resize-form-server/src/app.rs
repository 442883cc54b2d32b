// File: src/app.rs
// Purpose: Router and handlers for the demo form

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};
use resize_form::render::{self, ACTION_INPUT, COLLAPSED_INPUT, WIDTH_INPUT};
use resize_form::{ContentBox, FormError, FormOptions, SubmitOutcome, Values};
use tokio::sync::mpsc;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

use crate::demo::{self, DemoForm};
use crate::page::{self, FRAGMENT_HEADER};

const TITLE: &str = "Resize Form";

/// Application state shared across handlers.
///
/// Only the immutable options and the submission channel are shared; every
/// request builds its own form from what the browser posted.
#[derive(Clone)]
pub struct AppState {
    options: Arc<FormOptions>,
    submissions: mpsc::UnboundedSender<Values>,
}

impl AppState {
    fn form(&self) -> Result<DemoForm, FormError> {
        let tx = self.submissions.clone();
        demo::build((*self.options).clone(), move |values| {
            if tx.send(values).is_err() {
                warn!("submission receiver dropped");
            }
        })
    }
}

/// Build the router; validated submissions are sent to the returned receiver.
pub fn build(options: FormOptions) -> Result<(Router, mpsc::UnboundedReceiver<Values>)> {
    let (tx, rx) = mpsc::unbounded_channel();
    let state = AppState { options: Arc::new(options), submissions: tx };
    // Surface bad options at startup rather than on the first request
    state.form()?;

    let router = Router::new()
        .route("/", get(index_handler).post(form_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok((router, rx))
}

fn build_failed(e: FormError) -> Response {
    error!(error = %e, "failed to build form");
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
}

async fn index_handler(State(state): State<AppState>) -> Response {
    match state.form() {
        Ok(form) => Html(page::layout(TITLE, form.render(), None).into_string()).into_response(),
        Err(e) => build_failed(e),
    }
}

/// Every form interaction posts here: submit, reset, toggle and resize.
///
/// Width, collapsed flag and values are restored from the post before the
/// action runs.
async fn form_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(posted): Form<HashMap<String, String>>,
) -> Response {
    let mut form = match state.form() {
        Ok(form) => form,
        Err(e) => return build_failed(e),
    };

    if let Some(width) = posted.get(WIDTH_INPUT).and_then(|w| w.parse::<f64>().ok()) {
        form.on_resize(ContentBox::new(width, 0.0));
    }
    if let Some(collapsed) = posted.get(COLLAPSED_INPUT).and_then(|c| c.parse::<bool>().ok()) {
        form.set_collapsed(collapsed);
    }

    for (name, raw) in posted.iter().filter(|(name, _)| !render::is_reserved_input(name)) {
        if let Err(e) = form.set_raw_value(name, raw) {
            debug!(error = %e, "ignoring posted value");
        }
    }

    let notice = match posted.get(ACTION_INPUT).map(String::as_str).unwrap_or("submit") {
        "submit" => match form.submit().await {
            SubmitOutcome::Submitted => Some("Search submitted"),
            SubmitOutcome::Rejected(_) => None,
        },
        "reset" => {
            form.reset();
            None
        }
        "toggle" => {
            form.toggle_collapse();
            None
        }
        "resize" => None,
        other => {
            warn!(action = other, "unknown form action");
            None
        }
    };

    let markup = if headers.contains_key(FRAGMENT_HEADER) {
        form.render()
    } else {
        page::layout(TITLE, form.render(), notice)
    };
    Html(markup.into_string()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tower::ServiceExt;

    fn post(body: &str, fragment: bool) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/x-www-form-urlencoded");
        if fragment {
            builder = builder.header(FRAGMENT_HEADER, "fragment");
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_index_renders_collapsed_form() {
        let (app, _rx) = build(FormOptions::default()).unwrap();
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains(r#"id="resize-form-host""#));
        assert!(html.contains(r#"hidden data-field="key3""#));
        assert!(html.contains(r#"value="toggle""#));
    }

    #[tokio::test]
    async fn test_resize_returns_fragment() {
        let (app, _rx) = build(FormOptions::default()).unwrap();
        let response = app.oneshot(post("_width=1300&_action=resize", true)).await.unwrap();

        let html = body_text(response).await;
        assert!(html.starts_with("<form"));
        assert!(!html.contains(r#"value="toggle""#));
        assert_eq!(html.matches(r#"class="rf-col rf-col-6""#).count(), 3);
    }

    #[tokio::test]
    async fn test_toggle_expands() {
        let (app, _rx) = build(FormOptions::default()).unwrap();
        let response = app.oneshot(post("_action=toggle", true)).await.unwrap();

        let html = body_text(response).await;
        assert!(html.contains(r#"data-collapsed="false""#));
        assert!(!html.contains(r#"hidden data-field="key3""#));
    }

    #[tokio::test]
    async fn test_rejected_submit_shows_errors() {
        let (app, mut rx) = build(FormOptions::default()).unwrap();
        let response = app.oneshot(post("key1=&key2=b&_action=submit", false)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("必填"));
        assert!(!html.contains("Search submitted"));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_valid_submit_reaches_receiver() {
        let (app, mut rx) = build(FormOptions::default()).unwrap();
        let response = app.oneshot(post("key1=a&key2=b&_action=submit", false)).await.unwrap();

        let html = body_text(response).await;
        assert!(html.contains("Search submitted"));

        let values = rx.try_recv().unwrap();
        assert_eq!(values.get("key1"), Some(&json!("a")));
        assert_eq!(values.get("key2"), Some(&json!("b")));
        assert_eq!(values.get("key3"), Some(&json!(null)));
    }

    #[tokio::test]
    async fn test_state_is_restored_from_the_post() {
        let (app, _rx) = build(FormOptions::default()).unwrap();
        let response = app
            .oneshot(post("key2=typed&_width=1300&_collapsed=false&_action=resize", true))
            .await
            .unwrap();

        let html = body_text(response).await;
        assert!(html.contains(r#"data-width="1300""#));
        assert!(html.contains(r#"data-collapsed="false""#));
        assert!(html.contains(r#"value="typed""#));
    }

    #[tokio::test]
    async fn test_visitors_do_not_share_form_state() {
        let (app, _rx) = build(FormOptions::default()).unwrap();
        let first = app
            .clone()
            .oneshot(post("key2=alice-secret&_width=600&_action=toggle", true))
            .await
            .unwrap();
        let html = body_text(first).await;
        assert!(html.contains("alice-secret"));
        assert!(html.contains(r#"data-collapsed="false""#));

        let second = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let html = body_text(second).await;
        assert!(!html.contains("alice-secret"));
        assert!(html.contains(r#"data-collapsed="true""#));
        assert!(html.contains(r#"data-width="1024""#));
    }

    #[tokio::test]
    async fn test_reset_clears_values() {
        let (app, _rx) = build(FormOptions::default()).unwrap();
        let response = app.oneshot(post("key2=typed&_action=reset", true)).await.unwrap();

        let html = body_text(response).await;
        assert!(!html.contains(r#"value="typed""#));
    }
}
