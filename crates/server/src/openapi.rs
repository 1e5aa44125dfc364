use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

#[derive(ToSchema, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudentDoc {
    #[schema(example = "Alice")]
    pub first_name: String,
    #[schema(example = "Smith")]
    pub last_name: String,
    #[schema(example = "2000-01-01")]
    pub date_of_birth: String,
    #[schema(example = "10")]
    pub class_name: String,
    #[schema(example = "2023-2024")]
    pub session: String,
}

#[derive(ToSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDoc {
    #[schema(example = "0191a5c4-7d2e-7cc0-9a1e-2f6b8f0c1d2e")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub class_name: String,
    pub session: String,
    #[schema(example = "2024-09-01")]
    pub created_date: String,
}

#[derive(ToSchema, Serialize)]
pub struct MessageDoc {
    #[schema(example = "Student deleted successfully")]
    pub message: String,
}

#[derive(ToSchema, Serialize)]
pub struct ErrorDoc {
    #[schema(example = "Student not found")]
    pub error: String,
    pub message: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::students::create_student,
        crate::routes::students::list_students,
        crate::routes::students::get_student,
        crate::routes::students::delete_student,
        crate::routes::students::search_students,
    ),
    components(schemas(HealthResponse, NewStudentDoc, StudentDoc, MessageDoc, ErrorDoc)),
    tags(
        (name = "health"),
        (name = "students")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_student_paths() {
        let doc = ApiDoc::openapi();
        for path in ["/health", "/api/students", "/api/students/{id}", "/api/students/name/{name}"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
