//! HTTP mapping for domain errors.
//!
//! The domain error stays transport agnostic; this module picks the status
//! code and writes the JSON envelope. Internal failures are already reduced
//! to operator-safe messages by the error classifier, so nothing is
//! rewritten here.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::InvalidRequest | ErrorCode::ConfirmationRequired => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(code = ?self.code(), message = self.message(), "request failed");
        } else if !matches!(self.code(), ErrorCode::ValidationFailed) {
            warn!(code = ?self.code(), message = self.message(), "request rejected");
        }

        let mut builder = HttpResponse::build(status);
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(self)
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Self::internal("Внутренняя ошибка сервера")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::{Value, json};

    const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

    async fn render(error: &Error) -> (StatusCode, Option<String>, Value) {
        let response = ResponseError::error_response(error);
        let status = response.status();
        let header = response
            .headers()
            .get(TRACE_ID_HEADER)
            .map(|value| value.to_str().expect("ascii header").to_owned());
        let bytes = to_bytes(response.into_body()).await.expect("body");
        let body = serde_json::from_slice(&bytes).expect("json body");
        (status, header, body)
    }

    #[rstest]
    #[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
    #[case(Error::confirmation_required("confirm"), StatusCode::BAD_REQUEST)]
    #[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
    #[case(Error::conflict("taken"), StatusCode::CONFLICT)]
    #[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
        assert_eq!(ResponseError::status_code(&error), status);
    }

    #[rstest]
    #[actix_web::test]
    async fn trace_id_is_echoed_in_header_and_body() {
        let error = Error::not_found("Отдел не найден").with_trace_id(TRACE_ID);
        let (status, header, body) = render(&error).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(header.as_deref(), Some(TRACE_ID));
        assert_eq!(body["trace_id"], TRACE_ID);
        assert_eq!(body["status"], "error");
    }

    #[rstest]
    #[actix_web::test]
    async fn missing_trace_id_omits_header() {
        let (_, header, body) = render(&Error::conflict("taken")).await;
        assert!(header.is_none());
        assert!(body.get("trace_id").is_none());
    }

    #[rstest]
    #[actix_web::test]
    async fn confirmation_prompt_is_a_warning() {
        let error = Error::confirmation_required("Подтвердите операцию")
            .with_details(json!({ "required": { "confirm": true } }));
        let (status, _, body) = render(&error).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "warning");
        assert_eq!(body["details"]["required"]["confirm"], true);
    }

    #[rstest]
    #[actix_web::test]
    async fn internal_errors_keep_their_classified_message() {
        let error = Error::internal("Сотрудник с таким табельным номером уже существует");
        let (status, _, body) = render(&error).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["message"],
            "Сотрудник с таким табельным номером уже существует"
        );
    }
}
