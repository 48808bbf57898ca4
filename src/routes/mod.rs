//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 사용자, 연락처, 주소 관련 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Features
//!
//! - 사용자 계정 API (회원가입/로그인은 공개, 나머지는 인증 필요)
//! - 연락처 CRUD + 검색 API (인증 필요)
//! - 주소 CRUD + 목록 API (인증 필요, 연락처 하위 리소스)
//! - 헬스체크 엔드포인트
//!
//! # Auth Middleware Usage
//!
//! 인증이 필요한 스코프에만 미들웨어를 적용합니다:
//!
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/api/contacts")
//!         .wrap(AuthMiddleware::required())
//!         .service(handlers::contacts::create_contact)
//! );
//! ```
//!
//! Authorization 헤더는 `Bearer` 접두사 없이 로그인 때 발급된
//! 불투명 토큰을 그대로 담습니다.

use actix_web::web;
use serde_json::json;

use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{App, web};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_user_routes(cfg);
    configure_contact_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// # Route Groups
///
/// ## Protected 라우트 (인증 필요)
/// - `GET /api/users/current` - 내 프로필 조회
/// - `PATCH /api/users/current` - 내 프로필 수정
/// - `DELETE /api/users/current` - 로그아웃
///
/// ## Public 라우트 (인증 불필요)
/// - `POST /api/users/register` - 회원가입
/// - `POST /api/users/login` - 로그인
///
/// 더 구체적인 `/api/users/current` 스코프를 먼저 등록합니다.
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    // Protected routes
    cfg.service(
        web::scope("/api/users/current")
            .wrap(AuthMiddleware::required())
            .service(handlers::users::get_current_user)
            .service(handlers::users::update_current_user)
            .service(handlers::users::logout),
    );

    // Public routes
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::register)
            .service(handlers::users::login),
    );
}

/// 연락처/주소 관련 라우트를 설정합니다
///
/// 주소는 연락처의 하위 리소스이므로 같은 스코프에 등록되며,
/// 스코프 전체가 인증 미들웨어로 보호됩니다.
///
/// # Available Routes
///
/// ## 연락처
/// - `POST /api/contacts` - 생성
/// - `GET /api/contacts` - 검색 (`?name=&phone=&email=&page=&size=`)
/// - `GET /api/contacts/{contactId}` - 조회
/// - `PUT /api/contacts/{contactId}` - 수정
/// - `DELETE /api/contacts/{contactId}` - 삭제
///
/// ## 주소
/// - `POST /api/contacts/{contactId}/addresses` - 생성
/// - `GET /api/contacts/{contactId}/addresses` - 목록
/// - `GET /api/contacts/{contactId}/addresses/{addressId}` - 조회
/// - `PUT /api/contacts/{contactId}/addresses/{addressId}` - 수정
/// - `DELETE /api/contacts/{contactId}/addresses/{addressId}` - 삭제
fn configure_contact_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/contacts")
            .wrap(AuthMiddleware::required())
            // 연락처
            .service(handlers::contacts::create_contact)
            .service(handlers::contacts::search_contacts)
            .service(handlers::contacts::get_contact)
            .service(handlers::contacts::update_contact)
            .service(handlers::contacts::delete_contact)
            // 주소
            .service(handlers::addresses::create_address)
            .service(handlers::addresses::list_addresses)
            .service(handlers::addresses::get_address)
            .service(handlers::addresses::update_address)
            .service(handlers::addresses::delete_address),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Returns
///
/// * `HttpResponse` - 서비스 상태 정보를 포함한 JSON 응답
///   - `status`: 서비스 상태 ("healthy")
///   - `service`: 서비스 이름
///   - `version`: 현재 버전
///   - `timestamp`: 응답 시각
///   - `features`: 사용 중인 기술 스택
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "contact_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "PostgreSQL",
            "authentication": "Opaque Token",
            "validation": "validator"
        }
    }))
}
