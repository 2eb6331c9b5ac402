//! Route configuration and API documentation.
//!
//! Each resource group declares the payload field lists its mutating routes
//! expect; the payload validator runs ahead of those handlers only, so reads
//! are never asked to carry a body. Unmatched routes fall through to a JSON
//! 404 envelope rather than a framework default page.

use axum::{
    http::StatusCode,
    middleware::from_fn,
    response::IntoResponse,
    routing::{delete, get, patch, post},
    Json, Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{auth, bug_report, entry, logbook, overview, purchase, user},
    dto::api::ErrorDto,
    middleware::payload::{validate_client_payload, ExpectedPayload},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(
    auth::register,
    auth::login,
    auth::verify_registration,
    auth::verify_login,
    auth::send_new_verification_code,
    user::get_users,
    user::get_user,
    user::update_user,
    user::update_password,
    user::delete_user,
    overview::get_overviews,
    overview::get_overview,
    overview::create_overview,
    overview::update_overview,
    overview::delete_overview,
    logbook::get_logbooks,
    logbook::get_logbook,
    logbook::get_user_logbooks,
    logbook::create_logbook,
    logbook::update_logbook,
    logbook::delete_logbook,
    entry::get_entries,
    entry::get_entry,
    entry::get_overview_entries,
    entry::get_logbook_entries,
    entry::create_entry,
    entry::update_entry,
    entry::delete_entry,
    purchase::get_purchases,
    purchase::get_purchase,
    purchase::get_entry_purchases,
    purchase::create_purchase,
    purchase::update_purchase,
    purchase::delete_purchase,
    purchase::bulk_delete_purchases,
    bug_report::get_bug_reports,
    bug_report::get_bug_report,
    bug_report::create_bug_report,
    bug_report::update_bug_report,
    bug_report::delete_bug_report,
))]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1/auth", auth_router())
        .nest("/api/v1/users", users_router())
        .nest("/api/v1/overviews", overviews_router())
        .nest("/api/v1/logbooks", logbooks_router())
        .nest("/api/v1/entries", entries_router())
        .nest("/api/v1/purchases", purchases_router())
        .nest("/api/v1/bug-reports", bug_reports_router())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
}

fn auth_router() -> Router<AppState> {
    const REGISTER_PAYLOAD: ExpectedPayload =
        ExpectedPayload::required(&["email", "username", "password"]);
    const LOGIN_PAYLOAD: ExpectedPayload = ExpectedPayload::required(&["email", "password"]);
    const VERIFY_REGISTRATION_PAYLOAD: ExpectedPayload =
        ExpectedPayload::required(&["email", "verificationCode"]);
    const VERIFY_LOGIN_PAYLOAD: ExpectedPayload =
        ExpectedPayload::with_optional(&["email", "verificationCode"], &["thirtyDays"]);
    const NEW_CODE_PAYLOAD: ExpectedPayload = ExpectedPayload::required(&["email"]);

    Router::new()
        .route(
            "/register",
            post(auth::register).route_layer(from_fn(|request, next| {
                validate_client_payload(REGISTER_PAYLOAD, request, next)
            })),
        )
        .route(
            "/login",
            post(auth::login).route_layer(from_fn(|request, next| {
                validate_client_payload(LOGIN_PAYLOAD, request, next)
            })),
        )
        .route(
            "/verify-registration",
            post(auth::verify_registration).route_layer(from_fn(|request, next| {
                validate_client_payload(VERIFY_REGISTRATION_PAYLOAD, request, next)
            })),
        )
        .route(
            "/verify-login",
            post(auth::verify_login).route_layer(from_fn(|request, next| {
                validate_client_payload(VERIFY_LOGIN_PAYLOAD, request, next)
            })),
        )
        .route(
            "/send-new-verification-code",
            post(auth::send_new_verification_code).route_layer(from_fn(|request, next| {
                validate_client_payload(NEW_CODE_PAYLOAD, request, next)
            })),
        )
}

fn users_router() -> Router<AppState> {
    const UPDATE_PASSWORD_PAYLOAD: ExpectedPayload =
        ExpectedPayload::required(&["newPassword"]);

    Router::new()
        .route("/", get(user::get_users))
        .route("/{id}", get(user::get_user))
        .route("/{id}", patch(user::update_user))
        .route(
            "/{id}/update-password",
            patch(user::update_password).route_layer(from_fn(|request, next| {
                validate_client_payload(UPDATE_PASSWORD_PAYLOAD, request, next)
            })),
        )
        .route("/{id}", delete(user::delete_user))
}

fn overviews_router() -> Router<AppState> {
    const CREATE_OVERVIEW_PAYLOAD: ExpectedPayload =
        ExpectedPayload::with_optional(&["income", "ownerId"], &["savings"]);

    Router::new()
        .route("/", get(overview::get_overviews))
        .route(
            "/",
            post(overview::create_overview).route_layer(from_fn(|request, next| {
                validate_client_payload(CREATE_OVERVIEW_PAYLOAD, request, next)
            })),
        )
        .route("/{id}", get(overview::get_overview))
        .route("/{id}", patch(overview::update_overview))
        .route("/{id}", delete(overview::delete_overview))
}

fn logbooks_router() -> Router<AppState> {
    const CREATE_LOGBOOK_PAYLOAD: ExpectedPayload =
        ExpectedPayload::required(&["name", "ownerId"]);

    Router::new()
        .route("/", get(logbook::get_logbooks))
        .route(
            "/",
            post(logbook::create_logbook).route_layer(from_fn(|request, next| {
                validate_client_payload(CREATE_LOGBOOK_PAYLOAD, request, next)
            })),
        )
        .route("/user/{user_id}", get(logbook::get_user_logbooks))
        .route("/{id}", get(logbook::get_logbook))
        .route("/{id}", patch(logbook::update_logbook))
        .route("/{id}", delete(logbook::delete_logbook))
}

fn entries_router() -> Router<AppState> {
    const CREATE_ENTRY_PAYLOAD: ExpectedPayload = ExpectedPayload::required(&["name"]);

    Router::new()
        .route("/", get(entry::get_entries))
        .route(
            "/",
            post(entry::create_entry).route_layer(from_fn(|request, next| {
                validate_client_payload(CREATE_ENTRY_PAYLOAD, request, next)
            })),
        )
        .route("/overview/{overview_id}", get(entry::get_overview_entries))
        .route("/logbook/{logbook_id}", get(entry::get_logbook_entries))
        .route("/{id}", get(entry::get_entry))
        .route("/{id}", patch(entry::update_entry))
        .route("/{id}", delete(entry::delete_entry))
}

fn purchases_router() -> Router<AppState> {
    const CREATE_PURCHASE_PAYLOAD: ExpectedPayload = ExpectedPayload::required(&["entryId"]);
    const BULK_DELETE_PAYLOAD: ExpectedPayload = ExpectedPayload::required(&["purchaseIds"]);

    Router::new()
        .route("/", get(purchase::get_purchases))
        .route(
            "/",
            post(purchase::create_purchase).route_layer(from_fn(|request, next| {
                validate_client_payload(CREATE_PURCHASE_PAYLOAD, request, next)
            })),
        )
        .route(
            "/bulk-delete",
            post(purchase::bulk_delete_purchases).route_layer(from_fn(|request, next| {
                validate_client_payload(BULK_DELETE_PAYLOAD, request, next)
            })),
        )
        .route("/entry/{entry_id}", get(purchase::get_entry_purchases))
        .route("/{id}", get(purchase::get_purchase))
        .route("/{id}", patch(purchase::update_purchase))
        .route("/{id}", delete(purchase::delete_purchase))
}

fn bug_reports_router() -> Router<AppState> {
    const CREATE_BUG_REPORT_PAYLOAD: ExpectedPayload =
        ExpectedPayload::required(&["issue", "ownerId"]);

    Router::new()
        .route("/", get(bug_report::get_bug_reports))
        .route(
            "/",
            post(bug_report::create_bug_report).route_layer(from_fn(|request, next| {
                validate_client_payload(CREATE_BUG_REPORT_PAYLOAD, request, next)
            })),
        )
        .route("/{id}", get(bug_report::get_bug_report))
        .route("/{id}", patch(bug_report::update_bug_report))
        .route("/{id}", delete(bug_report::delete_bug_report))
}

/// JSON 404 envelope for unmatched routes.
async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorDto::new("Record not found")))
}
