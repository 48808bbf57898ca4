//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 엔티티와 API 계약을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 데이터베이스 행과 1:1 대응하는 핵심 객체
//! ├── DTOs      - 데이터 전송 객체 (Request/Response/Envelope)
//! └── Auth      - 인증된 사용자 추출자
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! PostgreSQL 테이블 행을 그대로 표현하는 영속 객체들입니다.
//! `sqlx::FromRow`를 derive하여 쿼리 결과에서 직접 매핑됩니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! HTTP 요청/응답의 JSON 구조를 정의합니다.
//! 요청 DTO는 `validator::Validate`를 derive하여 스키마 검증을 수행하고,
//! 응답 DTO는 비밀번호 해시 같은 민감 정보를 구조적으로 제외합니다.
//!
//! ### [`auth`] - 인증 모델
//!
//! 인증 미들웨어가 Request Extensions에 저장한 사용자를
//! 핸들러 시그니처에서 꺼내 쓰는 `AuthenticatedUser` 추출자를 제공합니다.

pub mod auth;
pub mod dto;
pub mod entities;
