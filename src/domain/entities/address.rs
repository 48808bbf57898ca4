//! Address Entity Implementation
//!
//! 주소 엔티티의 핵심 구현체입니다.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 주소 엔티티
///
/// `addresses` 테이블의 한 행과 1:1로 대응합니다.
/// 주소는 항상 하나의 연락처(`contact_id`)에 귀속되며,
/// 모든 주소 작업은 연락처 소유권 검증을 통과한 뒤에만 수행됩니다.
/// 연락처 삭제 시 외래키 CASCADE로 함께 제거됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Address {
    /// 주소 고유 ID (SERIAL)
    pub id: i32,
    /// 도로명 (선택)
    pub street: Option<String>,
    /// 도시 (선택)
    pub city: Option<String>,
    /// 주/도 (선택)
    pub province: Option<String>,
    /// 국가 (선택)
    pub country: Option<String>,
    /// 우편번호 (선택)
    pub postal_code: Option<String>,
    /// 소유 연락처 ID (contacts.id 외래키)
    pub contact_id: i32,
}
