// ==================== USER REGISTRY ====================
// List and upsert operations over the users collection. Identity is the
// email natural key; `_id` stays store-assigned.

use crate::{
    database::MongoDB,
    models::{UpsertUserRequest, UpsertUserResponse, UserResponse},
    utils::AppError,
};
use futures::stream::StreamExt;
use mongodb::bson::doc;

/// Returns every stored user, in natural store order. Documents that predate
/// the current shape decode with field defaults rather than being dropped.
pub async fn list_users(db: &MongoDB) -> Result<Vec<UserResponse>, AppError> {
    let collection = db.users();

    let mut users: Vec<UserResponse> = Vec::new();

    let mut cursor = collection.find(doc! {}).await?;
    while let Some(result) = cursor.next().await {
        match result {
            Ok(user) => users.push(UserResponse::from(user)),
            Err(e) => log::warn!("⚠️ Skipping undecodable user document: {}", e),
        }
    }

    Ok(users)
}

/// Find-by-email upsert. Existing documents get the payload fields applied
/// with `$set` (fields outside the payload are left untouched); a missing
/// document is created.
pub async fn upsert_user(
    db: &MongoDB,
    request: UpsertUserRequest,
) -> Result<UpsertUserResponse, AppError> {
    validate(&request)?;

    let collection = db.users();

    let update = doc! { "$set": update_fields(&request)? };

    let options = mongodb::options::UpdateOptions::builder()
        .upsert(true)
        .build();

    let result = collection
        .update_one(doc! { "email": &request.email }, update)
        .with_options(options)
        .await?;

    log::info!(
        "✅ Upserted user {}: matched={}, modified={}",
        request.email,
        result.matched_count,
        result.modified_count
    );

    Ok(UpsertUserResponse {
        success: true,
        matched_count: result.matched_count,
        modified_count: result.modified_count,
        upserted_id: result
            .upserted_id
            .and_then(|id| id.as_object_id())
            .map(|oid| oid.to_hex()),
    })
}

/// Builds the `$set` document from the typed request only, so a
/// client-supplied `_id` can never reach the write.
fn update_fields(request: &UpsertUserRequest) -> Result<mongodb::bson::Document, AppError> {
    mongodb::bson::to_document(request)
        .map_err(|e| AppError::InvalidRequest(format!("Unserializable payload: {}", e)))
}

fn validate(request: &UpsertUserRequest) -> Result<(), AppError> {
    if request.email.trim().is_empty() {
        return Err(AppError::InvalidRequest("email is required".to_string()));
    }
    if !request.email.contains('@') {
        return Err(AppError::InvalidRequest(format!(
            "'{}' is not a valid email",
            request.email
        )));
    }
    Ok(())
}
