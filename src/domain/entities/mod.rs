//! 핵심 도메인 엔티티 모듈
//!
//! 데이터베이스 테이블 행을 표현하는 영속 객체들입니다.
//! 소유권 체인은 `User.email ← Contact.user_email`,
//! `Contact.id ← Address.contact_id` 외래키로 표현됩니다.

pub mod address;
pub mod contact;
pub mod user;

pub use address::Address;
pub use contact::Contact;
pub use user::User;
