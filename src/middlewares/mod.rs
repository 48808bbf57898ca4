//! 미들웨어 모듈
//!
//! 요청 파이프라인에서 불투명 토큰 인증을 수행하는 미들웨어를 제공합니다.

pub mod auth_inner;
pub mod auth_middleware;

pub use auth_middleware::AuthMiddleware;
