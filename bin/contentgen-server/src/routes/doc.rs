use utoipa::OpenApi;

use crate::routes::{content, health};

#[derive(OpenApi)]
#[openapi(info(
    title = "contentgen-server",
    description = "AI content generator API",
    version = "0.1.0",
    contact(name = "contentgen", url = "https://github.com/Cyberhan123/contentgen.rs")
))]
pub struct ApiDoc;

pub fn get_docs() -> utoipa::openapi::OpenApi {
    let mut root = ApiDoc::openapi();
    root.merge(health::HealthApi::openapi());
    root.merge(content::ContentApi::openapi());
    root
}
