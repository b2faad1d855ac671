use utoipa_axum::{router::OpenApiRouter, routes};

use crate::config::AppConfig;
use crate::handlers;
use crate::state::AppState;

pub fn api_routes(config: &AppConfig) -> OpenApiRouter<AppState> {
    let upload = OpenApiRouter::new()
        .routes(routes!(handlers::image::upload_image))
        .layer(handlers::image::upload_body_limit(
            config.media.max_upload_size,
        ));

    OpenApiRouter::new()
        .routes(routes!(handlers::image::list_images))
        .routes(routes!(
            handlers::blessing::create_blessing,
            handlers::blessing::list_blessings
        ))
        .routes(routes!(handlers::health::health))
        .merge(upload)
}
