//! 연락처 관리 서비스 백엔드
//!
//! Rust 기반의 연락처 관리 REST 백엔드입니다.
//! 사용자 계정, 연락처, 주소 세 가지 엔티티에 대한 CRUD를 제공하며,
//! 모든 데이터는 소유권 체인(User → Contact → Address)으로 보호됩니다.
//!
//! # Features
//!
//! - **사용자 관리**: 회원가입, 로그인/로그아웃, 프로필 수정
//! - **불투명 토큰 인증**: 로그인 시 발급되는 랜덤 토큰을 동등 비교로 조회
//! - **연락처 CRUD**: 소유자 스코프가 적용된 생성/조회/수정/삭제
//! - **연락처 검색**: 이름/전화/이메일 부분 일치 필터 + 오프셋 페이징
//! - **주소 CRUD**: 연락처 소유권을 매번 재검증하는 하위 리소스
//! - **PostgreSQL**: sqlx 커넥션 풀 기반 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리 + 입력 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 + 소유권 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   PostgreSQL    │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use contact_service_backend::db::Database;
//! use contact_service_backend::services::users::UserService;
//!
//! let database = Database::new().await?;
//! let user_service = UserService::new(database.pool().clone());
//!
//! // 사용자 등록 및 로그인
//! let profile = user_service.register(request).await?;
//! let session = user_service.login(login_request).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
