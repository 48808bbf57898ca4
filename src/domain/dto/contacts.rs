//! 연락처 요청/응답 DTO
//!
//! 연락처 생성/수정/검색 요청의 스키마와 공개 응답 형태를 정의합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Contact;

/// 연락처 생성 요청 DTO
///
/// `first_name`과 `phone`은 필수, 나머지는 선택입니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateContactRequest {
    #[validate(length(min = 1, max = 100, message = "first_name must be 1-100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "last_name must be 1-100 characters"))]
    pub last_name: Option<String>,

    #[validate(length(min = 1, max = 20, message = "phone must be 1-20 characters"))]
    pub phone: String,

    #[validate(
        email(message = "email format is invalid"),
        length(min = 1, max = 100, message = "email must be 1-100 characters")
    )]
    pub email: Option<String>,
}

/// 연락처 수정 요청 DTO
///
/// 생성과 동일한 스키마를 사용합니다. 필수 필드는 항상 교체되고,
/// 선택 필드는 페이로드에 존재할 때만 갱신됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateContactRequest {
    #[validate(length(min = 1, max = 100, message = "first_name must be 1-100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "last_name must be 1-100 characters"))]
    pub last_name: Option<String>,

    #[validate(length(min = 1, max = 20, message = "phone must be 1-20 characters"))]
    pub phone: String,

    #[validate(
        email(message = "email format is invalid"),
        length(min = 1, max = 100, message = "email must be 1-100 characters")
    )]
    pub email: Option<String>,
}

/// 검색 쿼리 스트링 (`?name=&phone=&email=&page=&size=`)
///
/// page/size가 생략되면 핸들러에서 기본값(1, 10)을 채워
/// [`SearchContactRequest`]로 변환합니다.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchContactQuery {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub page: Option<i64>,
    pub size: Option<i64>,
}

/// 검증이 적용된 검색 요청 DTO
///
/// 필터가 없는 필드는 해당 조건 자체를 생략합니다 (match-all).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchContactRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,

    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: i64,

    #[validate(range(min = 1, max = 100, message = "size must be 1-100"))]
    pub size: i64,
}

impl SearchContactRequest {
    /// 쿼리 스트링에 기본값(page=1, size=10)을 적용합니다.
    pub fn from_query(query: SearchContactQuery) -> Self {
        Self {
            name: query.name,
            phone: query.phone,
            email: query.email,
            page: query.page.unwrap_or(1),
            size: query.size.unwrap_or(10),
        }
    }

    /// OFFSET 절에 들어갈 건너뛸 행 수를 계산합니다.
    ///
    /// 검증을 통과하는 극단적인 page 값에서도 오버플로 없이
    /// 포화 연산으로 계산됩니다.
    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.size)
    }
}

/// 공개 연락처 응답 DTO
///
/// 소유자 이메일(`user_email`)은 내부 스코프 전용이라 노출하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone: String,
    pub email: Option<String>,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            first_name: contact.first_name,
            last_name: contact.last_name,
            phone: contact.phone,
            email: contact.email,
        }
    }
}
