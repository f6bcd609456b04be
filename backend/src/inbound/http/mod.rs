//! HTTP inbound adapter exposing the personnel REST endpoints.

pub mod error;
pub mod functions;
pub mod health;
pub mod index;
pub mod procedures;
pub mod schemas;
pub mod state;
pub mod views;

use actix_web::{error::JsonPayloadError, web};

use crate::domain::Error;

pub use error::ApiResult;

fn json_error(err: JsonPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("Некорректное тело запроса: {err}")).into()
}

/// Mount every `/api` route. Handlers expect [`state::HttpState`] as app
/// data.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use personnel::inbound::http::configure_api;
///
/// let _app = App::new().service(web::scope("/api").configure(configure_api));
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .service(index::api_index)
        .service(web::scope("/functions").configure(functions::configure))
        .service(web::scope("/procedures").configure(procedures::configure))
        .service(web::scope("/views").configure(views::configure));
}
