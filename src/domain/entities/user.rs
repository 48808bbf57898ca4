//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 이메일을 식별자로 사용하는 로컬 인증 전용 사용자 모델을 제공합니다.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// `users` 테이블의 한 행과 1:1로 대응하며, 이메일이 기본키입니다.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// 사용자 이메일 (기본키, unique)
    pub email: String,
    /// 사용자 이름
    pub username: String,
    /// bcrypt로 해시된 비밀번호
    pub password: String,
    /// 불투명 세션 토큰
    ///
    /// 로그인 시 새 UUID로 재발급되고 로그아웃 시 NULL로 초기화됩니다.
    /// 인증 미들웨어는 이 값과 Authorization 헤더를 동등 비교합니다.
    pub token: Option<String>,
}

impl User {
    /// 새 로컬 사용자를 생성합니다.
    ///
    /// 회원가입 직후의 사용자는 아직 세션 토큰이 없습니다.
    pub fn new(email: String, username: String, password_hash: String) -> Self {
        Self {
            email,
            username,
            password: password_hash,
            token: None,
        }
    }
}
