//! 데이터 전송 객체 (DTO) 모듈
//!
//! HTTP 요청/응답의 JSON 구조를 정의합니다.
//!
//! ## 응답 봉투 (Envelope)
//!
//! 모든 성공 응답은 `{ "data": ... }` 형태로 감싸지며,
//! 검색처럼 페이징되는 응답은 `{ "data": [...], "paging": {...} }`를 사용합니다.
//! 실패 응답의 `{ "errors": ... }` 형태는 [`crate::errors`]가 담당합니다.
//!
//! ## 요청 검증
//!
//! 요청 DTO는 `validator::Validate`를 derive하여 작업별 스키마 규칙
//! (필수/선택 여부, 길이 제한, 이메일 형식)을 선언적으로 표현합니다.
//! 선택 필드는 키가 없으면 통과하지만, 값이 존재하면 규칙을 만족해야 합니다
//! (빈 문자열이 실려 오면 위반).

pub mod addresses;
pub mod contacts;
pub mod users;

use serde::Serialize;

/// 단일 결과 응답 봉투
///
/// ```json
/// { "data": { ... } }
/// ```
#[derive(Debug, Serialize)]
pub struct WebResponse<T> {
    pub data: T,
}

impl<T> WebResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// 페이징 메타데이터
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Paging {
    pub current_page: i64,
    pub size: i64,
    pub total_page: i64,
}

impl Paging {
    /// 전체 일치 행 수에서 페이징 메타데이터를 계산합니다.
    ///
    /// `total_page`는 `ceil(total / size)`이며, 결과가 없으면 0입니다.
    pub fn new(current_page: i64, size: i64, total: i64) -> Self {
        Self {
            current_page,
            size,
            total_page: (total + size - 1) / size,
        }
    }
}

/// 페이징된 목록 응답 봉투
///
/// ```json
/// { "data": [ ... ], "paging": { "current_page": 1, "size": 10, "total_page": 3 } }
/// ```
#[derive(Debug, Serialize)]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    pub paging: Paging,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paging_rounds_up_partial_pages() {
        assert_eq!(Paging::new(1, 10, 25).total_page, 3);
        assert_eq!(Paging::new(1, 10, 30).total_page, 3);
        assert_eq!(Paging::new(1, 10, 31).total_page, 4);
    }

    #[test]
    fn test_paging_single_row_dataset() {
        // size=1&page=2, 데이터 1건: 빈 페이지지만 total_page는 1
        let paging = Paging::new(2, 1, 1);

        assert_eq!(paging.current_page, 2);
        assert_eq!(paging.size, 1);
        assert_eq!(paging.total_page, 1);
    }

    #[test]
    fn test_paging_empty_result() {
        assert_eq!(Paging::new(1, 10, 0).total_page, 0);
    }

    #[test]
    fn test_web_response_envelope_shape() {
        let response = WebResponse::new(true);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({ "data": true }));
    }
}
