use actix_web::http::{Method, StatusCode};
use actix_web::web::{self, Data};
use actix_web::{HttpRequest, HttpResponse};
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::PageError;
use crate::storage::LookupGateway;
use crate::view::error_page::render_error_template;
use crate::view::profile::render_profile_template;

const CORS_ALLOW_ORIGIN: (&str, &str) = ("Access-Control-Allow-Origin", "*");
const CORS_ALLOW_HEADERS: (&str, &str) = (
    "Access-Control-Allow-Headers",
    "authorization, x-client-info, apikey, content-type",
);

fn html_response(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header(CORS_ALLOW_ORIGIN)
        .insert_header(CORS_ALLOW_HEADERS)
        .content_type("text/html; charset=utf-8")
        .body(body)
}

fn error_response(err: &PageError) -> HttpResponse {
    html_response(err.status(), render_error_template(&err.to_string()).into_string())
}

/// Single endpoint of the service: validate the `id` query parameter,
/// fetch the joined record, render profile or error document. Pre-flight
/// OPTIONS short-circuits before the lookup stage.
pub async fn pilgrim_page(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
    gateway: Data<Arc<dyn LookupGateway>>,
) -> HttpResponse {
    if req.method() == Method::OPTIONS {
        return HttpResponse::Ok()
            .insert_header(CORS_ALLOW_ORIGIN)
            .insert_header(CORS_ALLOW_HEADERS)
            .finish();
    }

    let pilgrim_id = query.get("id").map(|s| s.trim()).unwrap_or("");
    if pilgrim_id.is_empty() {
        return error_response(&PageError::MissingId);
    }

    match gateway.fetch_profile(pilgrim_id).await {
        Ok(profile) => html_response(
            StatusCode::OK,
            render_profile_template(&profile).into_string(),
        ),
        Err(lookup_err) => {
            let err = PageError::from(lookup_err);
            eprintln!("Error: {err}");
            error_response(&err)
        }
    }
}
