use serde::Serialize;

/// Image URLs for one event, newest first.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ImageListResponse {
    #[schema(example = json!(["https://res.cloudinary.com/demo/image/upload/v1/wedding/private/ceremony/photo1.jpg"]))]
    pub images: Vec<String>,
}

