//! 인증 모델 모듈
//!
//! 인증 미들웨어와 핸들러 사이에서 사용자를 전달하는 타입을 제공합니다.

pub mod authenticated_user;

pub use authenticated_user::AuthenticatedUser;
