//! # User Management HTTP Handlers
//!
//! 사용자 계정과 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 회원가입/로그인은 공개 라우트이고, 나머지는 인증 미들웨어 뒤에 있습니다.
//!
//! | 메서드 | 경로 | 인증 | 설명 |
//! |--------|------|------|------|
//! | `POST` | `/api/users/register` | 불필요 | 회원가입 |
//! | `POST` | `/api/users/login` | 불필요 | 로그인 (토큰 발급) |
//! | `GET` | `/api/users/current` | 필요 | 내 프로필 조회 |
//! | `PATCH` | `/api/users/current` | 필요 | 내 프로필 수정 |
//! | `DELETE` | `/api/users/current` | 필요 | 로그아웃 (토큰 무효화) |

use actix_web::{HttpResponse, delete, get, patch, post, web};
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::WebResponse;
use crate::domain::dto::users::{LoginUserRequest, RegisterUserRequest, UpdateUserRequest};
use crate::errors::AppError;
use crate::services::users::UserService;

/// 회원가입 핸들러
///
/// # 엔드포인트
///
/// `POST /api/users/register`
///
/// # 요청 본문
///
/// ```json
/// {
///   "username": "john",
///   "email": "john@example.com",
///   "password": "rahasia"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// { "data": { "username": "john", "email": "john@example.com" } }
/// ```
///
/// ## 중복 이메일 (400 Bad Request)
/// ```json
/// { "errors": "This email is already registered." }
/// ```
///
/// 비밀번호는 어떤 응답에도 포함되지 않습니다.
#[post("/register")]
pub async fn register(
    payload: web::Json<RegisterUserRequest>,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(WebResponse::new(response)))
}

/// 로그인 핸들러
///
/// # 엔드포인트
///
/// `POST /api/users/login`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "data": {
///     "username": "john",
///     "email": "john@example.com",
///     "token": "8f14e45f-..."
///   }
/// }
/// ```
///
/// ## 실패 (401 Unauthorized)
///
/// 미등록 이메일과 잘못된 비밀번호 모두 동일한 메시지로 실패합니다:
/// ```json
/// { "errors": "Username or password is invalid" }
/// ```
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginUserRequest>,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(WebResponse::new(response)))
}

/// 현재 사용자 프로필 조회 핸들러
///
/// `GET /api/users/current` — 인증 미들웨어가 확인한 사용자의 공개 프로필을 반환합니다.
#[get("")]
pub async fn get_current_user(
    user: AuthenticatedUser,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let response = service.get(user.into_inner()).await?;

    Ok(HttpResponse::Ok().json(WebResponse::new(response)))
}

/// 현재 사용자 프로필 수정 핸들러
///
/// `PATCH /api/users/current` — username/password 중 요청에 존재하는 필드만 수정합니다.
#[patch("")]
pub async fn update_current_user(
    user: AuthenticatedUser,
    payload: web::Json<UpdateUserRequest>,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = service
        .update(user.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(WebResponse::new(response)))
}

/// 로그아웃 핸들러
///
/// `DELETE /api/users/current` — 세션 토큰을 무효화합니다.
/// 이후 같은 토큰을 사용한 요청은 401로 거부됩니다.
///
/// # 응답 (200 OK)
/// ```json
/// { "data": true }
/// ```
#[delete("")]
pub async fn logout(
    user: AuthenticatedUser,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    service.logout(user.into_inner()).await?;

    Ok(HttpResponse::Ok().json(WebResponse::new(true)))
}
