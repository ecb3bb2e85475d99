//! HTTP inbound adapter exposing REST endpoints.

pub mod admin;
pub mod contents;
pub mod envelope;
pub mod error;
pub mod foods;
pub mod health;
pub mod schemas;
pub mod sensitivities;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register the `/api` scope together with its extractor error handlers.
///
/// The caller provides [`state::HttpState`] as app data.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .service(
            web::scope("/api")
                .service(users::register)
                .service(users::login)
                .service(foods::get_food)
                .service(foods::confirm_food)
                .service(contents::list_contents)
                .service(sensitivities::list_sensitivities)
                .service(sensitivities::add_sensitivities)
                .service(admin::create_content)
                .service(admin::create_food),
        );
}
