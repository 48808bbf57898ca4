//! 비즈니스 로직 서비스 계층
//!
//! 검증 → 소유권 확인 → 영속화 → 공개 응답 변환의 순서로
//! 각 도메인의 작업을 오케스트레이션합니다.
//!
//! ## 모듈 구성
//!
//! - [`users`] - 회원가입, 로그인/로그아웃, 프로필 관리
//! - [`contacts`] - 연락처 CRUD와 검색, 소유권 게이트(`existing_contact`)
//! - [`addresses`] - 주소 CRUD, 연락처 소유권 재검증
//!
//! ## 소유권 체인
//!
//! 어떤 엔티티도 호출자의 소유권 체인(User → Contact → Address)을
//! 증명하기 전에는 반환되거나 변경되지 않습니다. 연락처 작업은
//! `existing_contact`를, 주소 작업은 연락처 소유권 확인 후
//! `existing_address`를 거칩니다.

pub mod addresses;
pub mod contacts;
pub mod users;
