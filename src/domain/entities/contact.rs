//! Contact Entity Implementation
//!
//! 연락처 엔티티의 핵심 구현체입니다.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 연락처 엔티티
///
/// `contacts` 테이블의 한 행과 1:1로 대응합니다.
/// 모든 연락처는 정확히 한 명의 사용자(`user_email`)에게 귀속되며,
/// 소유자 이메일 스코프를 벗어난 조회/수정은 리포지토리 쿼리 조건으로 차단됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Contact {
    /// 연락처 고유 ID (SERIAL)
    pub id: i32,
    /// 이름 (필수)
    pub first_name: String,
    /// 성 (선택)
    pub last_name: Option<String>,
    /// 전화번호 (필수)
    pub phone: String,
    /// 이메일 (선택)
    pub email: Option<String>,
    /// 소유자 이메일 (users.email 외래키)
    pub user_email: String,
}
