//! 데이터 액세스 계층 모듈
//!
//! sqlx 런타임 쿼리 API로 PostgreSQL에 접근하는 리포지토리들입니다.
//! 모든 읽기/쓰기는 소유권 키(소유자 이메일, 연락처 ID)를 쿼리 조건에
//! 포함시켜 스코프를 벗어난 행에 절대 닿지 않습니다.

pub mod address_repo;
pub mod contact_repo;
pub mod user_repo;

pub use address_repo::AddressRepository;
pub use contact_repo::ContactRepository;
pub use user_repo::UserRepository;
