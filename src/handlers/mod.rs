//! # HTTP Handlers Module
//!
//! HTTP 요청을 받아 검증하고 서비스 계층에 위임한 뒤,
//! 결과를 `{ "data": ... }` 봉투로 감싸 반환하는 핸들러들입니다.
//!
//! ## 공통 처리 흐름
//!
//! 1. `payload.validate()?` - 작업별 스키마 검증 (실패 시 400 + errors 목록)
//! 2. `AuthenticatedUser` 추출 - 인증 미들웨어가 저장한 사용자 (공개 라우트 제외)
//! 3. 서비스 호출 - 비즈니스 로직 및 소유권 검증
//! 4. 봉투 래핑 - 성공은 항상 HTTP 200 (삭제 포함)
//!
//! ## 에러 처리
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! 모든 실패는 [`crate::errors::AppError`]의 `ResponseError` 구현이
//! 일관된 상태 코드와 `{ "errors": ... }` 본문으로 변환합니다.

pub mod addresses;
pub mod contacts;
pub mod users;
