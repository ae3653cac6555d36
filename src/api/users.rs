use actix_web::{web, HttpResponse, Responder};

use crate::{
    database::MongoDB,
    models::{UpsertUserRequest, UpsertUserResponse, UserResponse},
    services::user_service,
    utils::AppError,
};

/// GET /api/users - Lists every stored user
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All stored users as a bare JSON array", body = [UserResponse]),
        (status = 500, description = "Store failure")
    )
)]
pub async fn get_users(db: web::Data<MongoDB>) -> impl Responder {
    log::info!("📋 GET /api/users");

    match user_service::list_users(&db).await {
        Ok(users) => {
            log::info!("✅ Listed {} users", users.len());
            HttpResponse::Ok().json(users)
        }
        Err(e) => error_response(e),
    }
}

/// POST /api/user - Upserts a user keyed by email
#[utoipa::path(
    post,
    path = "/api/user",
    tag = "Users",
    request_body = UpsertUserRequest,
    responses(
        (status = 200, description = "User created or updated", body = UpsertUserResponse),
        (status = 400, description = "Payload failed validation"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn upsert_user(
    db: web::Data<MongoDB>,
    request: web::Json<UpsertUserRequest>,
) -> impl Responder {
    log::info!("📝 POST /api/user - {}", request.email);

    match user_service::upsert_user(&db, request.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => error_response(e),
    }
}

fn error_response(e: AppError) -> HttpResponse {
    log::error!("❌ {}", e);

    let body = serde_json::json!({
        "success": false,
        "error": e.to_string(),
        "code": e.code(),
    });

    match e {
        AppError::InvalidRequest(_) => HttpResponse::BadRequest().json(body),
        AppError::DatabaseError(_) => HttpResponse::InternalServerError().json(body),
    }
}
