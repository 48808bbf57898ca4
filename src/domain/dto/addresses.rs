//! 주소 요청/응답 DTO
//!
//! 주소는 모든 필드가 선택 문자열이며, 소속 연락처는
//! 요청 본문이 아닌 라우트 경로에서 결정됩니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Address;

/// 주소 생성 요청 DTO
///
/// `contact_id`는 본문이 아닌 라우트(`/contacts/{id}/addresses`)에서 가져옵니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAddressRequest {
    #[validate(length(min = 1, max = 255, message = "street must be 1-255 characters"))]
    pub street: Option<String>,

    #[validate(length(min = 1, max = 100, message = "city must be 1-100 characters"))]
    pub city: Option<String>,

    #[validate(length(min = 1, max = 100, message = "province must be 1-100 characters"))]
    pub province: Option<String>,

    #[validate(length(min = 1, max = 100, message = "country must be 1-100 characters"))]
    pub country: Option<String>,

    #[validate(length(min = 1, max = 10, message = "postal_code must be 1-10 characters"))]
    pub postal_code: Option<String>,
}

/// 주소 수정 요청 DTO
///
/// 페이로드에 존재하는 필드만 갱신됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateAddressRequest {
    #[validate(length(min = 1, max = 255, message = "street must be 1-255 characters"))]
    pub street: Option<String>,

    #[validate(length(min = 1, max = 100, message = "city must be 1-100 characters"))]
    pub city: Option<String>,

    #[validate(length(min = 1, max = 100, message = "province must be 1-100 characters"))]
    pub province: Option<String>,

    #[validate(length(min = 1, max = 100, message = "country must be 1-100 characters"))]
    pub country: Option<String>,

    #[validate(length(min = 1, max = 10, message = "postal_code must be 1-10 characters"))]
    pub postal_code: Option<String>,
}

/// 공개 주소 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressResponse {
    pub id: i32,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            id: address.id,
            street: address.street,
            city: address.city,
            province: address.province,
            country: address.country,
            postal_code: address.postal_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_allows_all_fields_absent() {
        let request = CreateAddressRequest {
            street: None,
            city: None,
            province: None,
            country: None,
            postal_code: None,
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_oversized_postal_code() {
        let request = CreateAddressRequest {
            street: None,
            city: None,
            province: None,
            country: None,
            postal_code: Some("12345678901".to_string()),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_address_response_hides_contact_linkage() {
        let address = Address {
            id: 7,
            street: Some("Jalan Sudirman".to_string()),
            city: None,
            province: None,
            country: Some("Indonesia".to_string()),
            postal_code: None,
            contact_id: 3,
        };

        let json = serde_json::to_value(AddressResponse::from(address)).unwrap();
        assert!(json.get("contact_id").is_none());
        assert_eq!(json["id"], 7);
    }
}
