use actix_web::{HttpResponse, Responder, get, post, web};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::emoji::{
    AppConfig, CustomEmoji, EmojiContext, EmojiPipeline, ProfileEmojiMap, build_custom_emojis,
    custom_emoji_map,
};

/// Both pipeline assemblies, built once at start-up and shared by all workers.
pub struct Pipelines {
    pub status: EmojiPipeline,
    pub full: EmojiPipeline,
}

impl Pipelines {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            status: EmojiPipeline::status(config),
            full: EmojiPipeline::full(config),
        }
    }
}

pub fn config(conf: &mut web::ServiceConfig) {
    let api_scope = web::scope("/api")
        .service(healthcheck_handler)
        .service(emojify_handler)
        .service(custom_emojis_handler);

    conf.service(api_scope);
}

#[derive(Debug, Deserialize)]
pub struct EmojifyRequest {
    pub text: String,
    #[serde(default)]
    pub custom_emojis: Vec<CustomEmoji>,
    #[serde(default)]
    pub profile_emojis: ProfileEmojiMap,
    /// Also resolve `:@name:` profile emoji.
    #[serde(default = "default_true")]
    pub profile: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Serialize)]
pub struct EmojifyResponse {
    pub html: String,
}

#[get("/health")]
pub async fn healthcheck_handler() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "pong" }))
}

#[post("/emojify")]
pub async fn emojify_handler(
    pipelines: web::Data<Pipelines>,
    body: web::Json<EmojifyRequest>,
) -> impl Responder {
    let request = body.into_inner();
    let custom = custom_emoji_map(&request.custom_emojis);
    let ctx = EmojiContext::new(&custom, &request.profile_emojis);

    let pipeline = if request.profile {
        &pipelines.full
    } else {
        &pipelines.status
    };
    let html = pipeline.render(&request.text, &ctx);
    debug!(
        "emojified {} bytes into {} bytes ({} custom, {} profile emoji)",
        request.text.len(),
        html.len(),
        custom.len(),
        request.profile_emojis.len()
    );

    HttpResponse::Ok().json(EmojifyResponse { html })
}

#[post("/custom_emojis")]
pub async fn custom_emojis_handler(body: web::Json<Vec<CustomEmoji>>) -> impl Responder {
    HttpResponse::Ok().json(build_custom_emojis(&body))
}
