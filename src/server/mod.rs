//! HTTP front end
//!
//! Serves the htmx pages, the form-based `/analyze` endpoint and a JSON
//! review API. Every request is reviewed against the shared default pool.

pub mod config;

use crate::core::{ReviewRequest, Reviewer, WORD_LEN};
use crate::output::{HtmlPresenter, ReportPresenter};
use crate::wordlists::default_reviewer;
use anyhow::{Context, Result};
use config::ServerConfig;
use std::collections::HashMap;
use tokio::signal;
use tracing::{debug, error, info};
use warp::Filter;
use warp::http::StatusCode;

const HOME_PAGE: &str = include_str!("../../assets/index.html");
const SOLVE_PAGE: &str = include_str!("../../assets/solve.html");

/// Form fields `guess_1` through `guess_6`
const MAX_GUESSES: usize = 6;

/// Largest request body accepted by the form and JSON endpoints
const MAX_BODY_BYTES: u64 = 16 * 1024;

pub fn create_routes(
    reviewer: Reviewer<'static>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let reviewer_filter = warp::any().map(move || reviewer);

    let home = warp::get()
        .and(warp::path::end().or(warp::path!("index.html")).unify())
        .map(|| warp::reply::html(HOME_PAGE));

    let start = warp::path!("start")
        .and(warp::get())
        .map(|| warp::reply::html(SOLVE_PAGE));

    let analyze = warp::path!("analyze")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::form::<HashMap<String, String>>())
        .and(reviewer_filter)
        .map(|form: HashMap<String, String>, reviewer: Reviewer<'static>| {
            handle_analyze(&form, reviewer)
        });

    let api_review = warp::path!("api" / "review")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json::<ReviewRequest>())
        .and(reviewer_filter)
        .map(|request: ReviewRequest, reviewer: Reviewer<'static>| {
            handle_api_review(&request, reviewer)
        });

    let health = warp::path!("health")
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", StatusCode::OK));

    home.or(start)
        .or(analyze)
        .or(api_review)
        .or(health)
        .with(warp::trace::request())
}

/// Turn the analysis form into a request: `answer` plus any five-letter guesses
fn request_from_form(form: &HashMap<String, String>) -> Option<ReviewRequest> {
    let target = form
        .get("answer")
        .map(|answer| answer.trim().to_lowercase())
        .filter(|answer| !answer.is_empty())?;

    let path = (1..=MAX_GUESSES)
        .filter_map(|i| form.get(&format!("guess_{i}")))
        .map(|guess| guess.trim().to_lowercase())
        .filter(|guess| guess.chars().count() == WORD_LEN)
        .collect();

    Some(ReviewRequest::new(target, path))
}

fn handle_analyze(
    form: &HashMap<String, String>,
    reviewer: Reviewer<'static>,
) -> warp::reply::WithStatus<warp::reply::Html<String>> {
    debug!(fields = form.len(), "analyze request received");

    let Some(request) = request_from_form(form) else {
        error!("invalid request message: request must have answer value");
        return warp::reply::with_status(
            warp::reply::html("bad request".to_string()),
            StatusCode::BAD_REQUEST,
        );
    };

    match reviewer.review(&request) {
        Ok(report) => {
            info!(target_word = %request.target, guesses = request.path.len(), records = report.len(), "path analyzed");
            warp::reply::with_status(
                warp::reply::html(HtmlPresenter.render(&request.target, &report)),
                StatusCode::OK,
            )
        }
        Err(err) => {
            error!(error = %err, "failed to review path");
            warp::reply::with_status(
                warp::reply::html(format!("bad request: {err}")),
                StatusCode::BAD_REQUEST,
            )
        }
    }
}

fn handle_api_review(
    request: &ReviewRequest,
    reviewer: Reviewer<'static>,
) -> warp::reply::WithStatus<warp::reply::Json> {
    match reviewer.review(request) {
        Ok(report) => {
            info!(target_word = %request.target, records = report.len(), "api review completed");
            warp::reply::with_status(warp::reply::json(&report), StatusCode::OK)
        }
        Err(err) => {
            error!(error = %err, "failed to review path");
            warp::reply::with_status(
                warp::reply::json(&serde_json::json!({ "error": err.to_string() })),
                StatusCode::BAD_REQUEST,
            )
        }
    }
}

/// Run the HTTP server until Ctrl+C
///
/// # Errors
///
/// Returns an error if the listen address cannot be bound.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let reviewer = default_reviewer();
    info!(pool = reviewer.pool_size(), "loaded default word list");

    let routes = create_routes(reviewer);
    let (addr, server) = warp::serve(routes)
        .try_bind_with_graceful_shutdown(config.listen, async {
            if let Err(e) = signal::ctrl_c().await {
                error!(error = %e, "failed to listen for ctrl+c");
                return;
            }
            info!("Received Ctrl+C, shutting down gracefully...");
        })
        .with_context(|| format!("Failed to bind {}", config.listen))?;

    info!(listen_address = %addr, "server started");
    server.await;
    info!("Server shutdown complete.");
    Ok(())
}
