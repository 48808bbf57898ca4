//! 사용자 요청/응답 DTO
//!
//! 회원가입, 로그인, 프로필 수정 요청의 스키마와
//! 민감 정보를 제거한 공개 프로필 응답을 정의합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::User;

/// 회원가입 요청 DTO
///
/// 세 필드 모두 필수이며 1-100자 제한을 가집니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(length(min = 1, max = 100, message = "username must be 1-100 characters"))]
    pub username: String,

    #[validate(
        email(message = "email format is invalid"),
        length(min = 1, max = 100, message = "email must be 1-100 characters")
    )]
    pub email: String,

    #[validate(length(min = 1, max = 100, message = "password must be 1-100 characters"))]
    pub password: String,
}

/// 로그인 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginUserRequest {
    #[validate(
        email(message = "email format is invalid"),
        length(min = 1, max = 100, message = "email must be 1-100 characters")
    )]
    pub email: String,

    #[validate(length(min = 1, max = 100, message = "password must be 1-100 characters"))]
    pub password: String,
}

/// 프로필 수정 요청 DTO
///
/// 두 필드 모두 선택이며, 존재하는 필드만 변경됩니다.
/// 키가 있는데 빈 문자열이면 검증 위반입니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100, message = "username must be 1-100 characters"))]
    pub username: Option<String>,

    #[validate(length(min = 1, max = 100, message = "password must be 1-100 characters"))]
    pub password: Option<String>,
}

/// 공개 사용자 프로필 응답 DTO
///
/// 비밀번호 해시는 구조적으로 포함될 수 없으며,
/// 토큰은 로그인 응답에서만 한 번 내려갑니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl UserResponse {
    /// 로그인 성공 시 새로 발급된 토큰을 포함한 응답을 만듭니다.
    pub fn with_token(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            token: user.token.clone(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            email: user.email,
            token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_rejects_empty_username() {
        let request = RegisterUserRequest {
            username: "".to_string(),
            email: "test@example.com".to_string(),
            password: "secret".to_string(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.errors().contains_key("username"));
    }

    #[test]
    fn test_register_request_rejects_invalid_email() {
        let request = RegisterUserRequest {
            username: "test".to_string(),
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.errors().contains_key("email"));
    }

    #[test]
    fn test_update_request_allows_absent_fields() {
        let request = UpdateUserRequest {
            username: None,
            password: None,
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_request_rejects_present_empty_password() {
        let request = UpdateUserRequest {
            username: None,
            password: Some("".to_string()),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_user_response_never_exposes_password() {
        let user = User::new(
            "test@example.com".to_string(),
            "test".to_string(),
            "$2b$04$hash".to_string(),
        );

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert!(json.get("password").is_none());
        assert!(json.get("token").is_none());
        assert_eq!(json["username"], "test");
    }

    #[test]
    fn test_login_response_carries_token_once() {
        let mut user = User::new(
            "test@example.com".to_string(),
            "test".to_string(),
            "$2b$04$hash".to_string(),
        );
        user.token = Some("session-token".to_string());

        let json = serde_json::to_value(UserResponse::with_token(&user)).unwrap();
        assert_eq!(json["token"], "session-token");
    }
}
