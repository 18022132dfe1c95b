use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    http::{
        HeaderValue, Method,
        header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE},
    },
    routing::get,
};
use fitcoach_core::{application::create_service, domain::common::FitcoachConfig};
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span};
use url::Url;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use super::config::get_config;
use crate::{
    application::http::{
        coaching::router::coaching_routes,
        diet_plan::router::diet_plan_routes,
        exercise::router::exercise_routes,
        health::health_routes,
        server::{app_state::AppState, openapi::ApiDoc},
        video_suggestion::router::video_suggestion_routes,
    },
    args::Args,
};

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = FitcoachConfig::from(args.as_ref().clone());
    let limits = config.limits;
    let service = create_service(config)?;

    Ok(AppState::new(args, service, limits))
}

/// Origins are compared byte for byte by the CORS layer, so normalise them first.
fn parse_origins(origins: &[String]) -> Result<Vec<HeaderValue>, anyhow::Error> {
    origins
        .iter()
        .filter(|origin| !origin.trim().is_empty())
        .map(|origin| {
            let url = Url::parse(origin.trim())
                .with_context(|| format!("Invalid allowed origin: {origin}"))?;
            let value = HeaderValue::from_str(&url.origin().ascii_serialization())?;
            Ok::<_, anyhow::Error>(value)
        })
        .collect()
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = parse_origins(&state.args.server.allowed_origins)?;
    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT])
        .allow_credentials(true);

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(
            SwaggerUi::new(format!("{}/swagger-ui", root_path))
                .url(api_docs_url.clone(), openapi.clone()),
        )
        .merge(Redoc::with_url(format!("{}/redoc", root_path), openapi))
        .merge(RapiDoc::new(api_docs_url).path(format!("{}/rapidoc", root_path)))
        .route(&format!("{}/config", root_path), get(get_config))
        .merge(exercise_routes(state.clone()))
        .merge(diet_plan_routes(state.clone()))
        .merge(coaching_routes(state.clone()))
        .merge(video_suggestion_routes(state.clone()))
        .merge(health_routes(&root_path))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);
    Ok(router)
}
