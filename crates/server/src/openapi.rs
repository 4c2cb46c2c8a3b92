use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct StudentDoc {
    pub id: i32,
    pub name: String,
    /// 0..=100
    pub marks: i32,
}

#[derive(ToSchema)]
pub struct StudentInputDoc {
    /// Non-blank, at most 100 characters
    pub name: String,
    /// 0..=100; any other integer is a VALIDATION_ERROR
    pub marks: i64,
}

#[derive(ToSchema)]
pub struct ErrorBodyDoc {
    /// VALIDATION_ERROR, BAD_REQUEST, NOT_FOUND or INTERNAL_ERROR
    pub code: String,
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::students::list,
        crate::routes::students::create,
        crate::routes::students::get,
        crate::routes::students::update,
        crate::routes::students::delete,
    ),
    components(
        schemas(
            HealthResponse,
            StudentDoc,
            StudentInputDoc,
            ErrorBodyDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "students")
    )
)]
pub struct ApiDoc;
