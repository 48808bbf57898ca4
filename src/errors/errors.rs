//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 모든 실패 응답은 `{ "errors": ... }` 형태로 직렬화됩니다.
//! 검증 실패는 `{message, path}` 객체 목록을, 나머지는 단일 메시지 문자열을 담습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn get_contact(owner: &str, id: i32) -> Result<Contact, AppError> {
//!     contact_repo
//!         .find_by_owner(owner, id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))
//! }
//! ```

use serde::Serialize;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// 검증 실패 항목 하나
///
/// 필드 경로는 중첩 시 점(.)으로 연결됩니다 (예: `addresses.0.city`).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldError {
    pub message: String,
    pub path: String,
}

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error")]
    ValidationError(Vec<FieldError>),

    /// 요청 형식 에러 (400 Bad Request — JSON 본문/쿼리스트링/경로 파싱 실패)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 충돌/중복 에러 (400 Bad Request — 예: 이미 등록된 이메일)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            // 중복 이메일 등은 API 계약상 409가 아닌 400으로 내려간다
            AppError::ConflictError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 `{ "errors": ... }` JSON 응답으로 변환합니다.
    /// 스택 트레이스나 내부 필드명은 절대 노출하지 않습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let body = match self {
            AppError::ValidationError(errors) => serde_json::json!({ "errors": errors }),
            AppError::BadRequest(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::NotFound(msg)
            | AppError::DatabaseError(msg)
            | AppError::InternalError(msg) => serde_json::json!({ "errors": msg }),
        };

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            // 존재 확인과 실행 사이에 행이 사라진 경합도 404로 수렴
            sqlx::Error::RowNotFound => AppError::NotFound("Resource not found".to_string()),
            other => AppError::DatabaseError(other.to_string()),
        }
    }
}

/// JSON 본문 파싱 실패를 `{ "errors": ... }` 봉투의 400 응답으로 변환합니다.
///
/// `web::JsonConfig::error_handler`에 등록되어, 역직렬화에 실패한 요청도
/// actix 기본 평문 응답 대신 일관된 에러 봉투를 받습니다.
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

/// 쿼리스트링 역직렬화 실패를 에러 봉투의 400 응답으로 변환합니다.
pub fn query_error_handler(
    err: actix_web::error::QueryPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

/// 경로 파라미터 역직렬화 실패를 에러 봉투의 400 응답으로 변환합니다.
pub fn path_error_handler(
    err: actix_web::error::PathError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

impl From<ValidationErrors> for AppError {
    /// `validator`의 중첩 에러 트리를 `{message, path}` 목록으로 평탄화합니다.
    fn from(errors: ValidationErrors) -> Self {
        let mut flattened = Vec::new();
        flatten_validation_errors("", &errors, &mut flattened);
        AppError::ValidationError(flattened)
    }
}

/// 필드/구조체/리스트 에러를 재귀적으로 순회하며 경로를 점(.)으로 연결합니다.
fn flatten_validation_errors(prefix: &str, errors: &ValidationErrors, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for err in field_errors {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());

                    out.push(FieldError {
                        message,
                        path: path.clone(),
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                flatten_validation_errors(&path, nested, out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    flatten_validation_errors(&format!("{path}.{index}"), nested, out);
                }
            }
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use validator::Validate;

    #[derive(Validate)]
    struct SampleRequest {
        #[validate(length(min = 1, message = "first_name should not be empty"))]
        first_name: String,
        #[validate(email(message = "email format is invalid"))]
        email: String,
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError(vec![FieldError {
            message: "first_name should not be empty".to_string(),
            path: "first_name".to_string(),
        }]);
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_conflict_error_maps_to_400() {
        let error = AppError::ConflictError("This email is already registered.".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Contact not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Unauthorized".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_bad_request_error_response() {
        let error = AppError::BadRequest("Json deserialize error".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_row_not_found_maps_to_404() {
        let error = AppError::from(sqlx::Error::RowNotFound);

        assert!(matches!(error, AppError::NotFound(_)));
        assert_eq!(
            error.error_response().status(),
            actix_web::http::StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_flatten_produces_dot_joined_paths() {
        let request = SampleRequest {
            first_name: "".to_string(),
            email: "not-an-email".to_string(),
        };

        let app_error = AppError::from(request.validate().unwrap_err());

        let AppError::ValidationError(mut errors) = app_error else {
            panic!("Expected ValidationError");
        };
        errors.sort_by(|a, b| a.path.cmp(&b.path));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].path, "email");
        assert_eq!(errors[0].message, "email format is invalid");
        assert_eq!(errors[1].path, "first_name");
        assert_eq!(errors[1].message, "first_name should not be empty");
    }

    #[test]
    fn test_field_error_serializes_message_and_path() {
        let error = FieldError {
            message: "phone should not be empty".to_string(),
            path: "phone".to_string(),
        };

        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["message"], "phone should not be empty");
        assert_eq!(json["path"], "phone");
    }
}
