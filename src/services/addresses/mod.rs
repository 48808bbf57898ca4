//! 주소 서비스 모듈

pub mod address_service;

pub use address_service::AddressService;
