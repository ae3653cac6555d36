use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User document as stored in MongoDB. Field names stay camelCase on the wire
/// and in the collection; `email` is the natural key the upsert matches on.
/// Stored documents may predate the current shape, so every field decodes
/// with a default when missing and a listing never drops a document.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub age: i32,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub courses: Vec<String>,
}

/// Upsert payload. Carries no identifier field: a client-supplied `_id` is
/// dropped at deserialization and never reaches the write.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertUserRequest {
    pub email: String,
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub country: String,
    pub courses: Vec<String>,
}

/// API-facing user document; `id` is the store-assigned ObjectId as hex.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub country: String,
    pub courses: Vec<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            email: user.email,
            phone: user.phone,
            first_name: user.first_name,
            last_name: user.last_name,
            age: user.age,
            country: user.country,
            courses: user.courses,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertUserResponse {
    pub success: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upserted_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_camel_case_wire_names() {
        let json = r#"{
            "email": "a@x.com",
            "phone": "1",
            "firstName": "A",
            "lastName": "B",
            "age": 30,
            "country": "US",
            "courses": ["c1", "c2"]
        }"#;

        let req: UpsertUserRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.email, "a@x.com");
        assert_eq!(req.first_name, "A");
        assert_eq!(req.last_name, "B");
        assert_eq!(req.age, 30);
        assert_eq!(req.courses, vec!["c1", "c2"]);
    }

    #[test]
    fn test_request_ignores_client_supplied_id() {
        let json = r#"{
            "_id": "656f1f77bcf86cd799439011",
            "email": "a@x.com",
            "phone": "1",
            "firstName": "A",
            "lastName": "B",
            "age": 30,
            "country": "US",
            "courses": []
        }"#;

        let req: UpsertUserRequest = serde_json::from_str(json).unwrap();
        let doc = mongodb::bson::to_document(&req).unwrap();
        assert!(!doc.contains_key("_id"));
    }

    #[test]
    fn test_request_rejects_missing_fields() {
        let json = r#"{"email": "a@x.com"}"#;
        assert!(serde_json::from_str::<UpsertUserRequest>(json).is_err());
    }

    #[test]
    fn test_request_rejects_ill_typed_age() {
        let json = r#"{
            "email": "a@x.com",
            "phone": "1",
            "firstName": "A",
            "lastName": "B",
            "age": "thirty",
            "country": "US",
            "courses": []
        }"#;
        assert!(serde_json::from_str::<UpsertUserRequest>(json).is_err());
    }

    #[test]
    fn test_stored_document_missing_fields_still_decodes() {
        let doc = mongodb::bson::doc! {
            "email": "legacy@x.com",
            "nickname": "Lex",
        };

        let user: User = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(user.email, "legacy@x.com");
        assert_eq!(user.first_name, "");
        assert_eq!(user.age, 0);
        assert!(user.courses.is_empty());
    }

    #[test]
    fn test_response_exposes_hex_id() {
        let oid = ObjectId::new();
        let user = User {
            id: Some(oid),
            email: "a@x.com".to_string(),
            phone: "1".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            age: 30,
            country: "US".to_string(),
            courses: vec!["c1".to_string()],
        };

        let resp = UserResponse::from(user);
        assert_eq!(resp.id, oid.to_hex());

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["firstName"], "A");
        assert_eq!(json["lastName"], "B");
    }
}
