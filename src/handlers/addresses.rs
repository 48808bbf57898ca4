//! # Address Management HTTP Handlers
//!
//! 연락처 하위 리소스인 주소의 엔드포인트를 처리하는 핸들러 함수들입니다.
//! `contact_id`는 항상 라우트 경로에서 오며, 모든 작업은
//! 연락처 소유권 재검증을 거칩니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/api/contacts/{contactId}/addresses` | 주소 생성 |
//! | `GET` | `/api/contacts/{contactId}/addresses` | 주소 목록 |
//! | `GET` | `/api/contacts/{contactId}/addresses/{addressId}` | 주소 조회 |
//! | `PUT` | `/api/contacts/{contactId}/addresses/{addressId}` | 주소 수정 |
//! | `DELETE` | `/api/contacts/{contactId}/addresses/{addressId}` | 주소 삭제 |

use actix_web::{HttpResponse, delete, get, post, put, web};
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::WebResponse;
use crate::domain::dto::addresses::{CreateAddressRequest, UpdateAddressRequest};
use crate::errors::AppError;
use crate::services::addresses::AddressService;

/// 주소 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /api/contacts/{contactId}/addresses`
///
/// # 요청 본문
///
/// ```json
/// {
///   "street": "Jalan Sudirman",
///   "city": "Jakarta",
///   "province": "DKI Jakarta",
///   "country": "Indonesia",
///   "postal_code": "12190"
/// }
/// ```
///
/// 모든 필드는 선택입니다. 연락처가 호출자 소유가 아니면 404입니다.
#[post("/{contact_id}/addresses")]
pub async fn create_address(
    user: AuthenticatedUser,
    contact_id: web::Path<i32>,
    payload: web::Json<CreateAddressRequest>,
    service: web::Data<AddressService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = service
        .create(&user.0, contact_id.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(WebResponse::new(response)))
}

/// 주소 목록 핸들러
///
/// `GET /api/contacts/{contactId}/addresses` — 연락처의 모든 주소를
/// 페이징 없이 반환합니다.
#[get("/{contact_id}/addresses")]
pub async fn list_addresses(
    user: AuthenticatedUser,
    contact_id: web::Path<i32>,
    service: web::Data<AddressService>,
) -> Result<HttpResponse, AppError> {
    let response = service.list(&user.0, contact_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(WebResponse::new(response)))
}

/// 주소 조회 핸들러
///
/// `GET /api/contacts/{contactId}/addresses/{addressId}` —
/// 다른 연락처에 속한 주소 ID는 404이며, 해당 주소 데이터는 절대 노출되지 않습니다.
#[get("/{contact_id}/addresses/{address_id}")]
pub async fn get_address(
    user: AuthenticatedUser,
    path: web::Path<(i32, i32)>,
    service: web::Data<AddressService>,
) -> Result<HttpResponse, AppError> {
    let (contact_id, address_id) = path.into_inner();

    let response = service.get(&user.0, contact_id, address_id).await?;

    Ok(HttpResponse::Ok().json(WebResponse::new(response)))
}

/// 주소 수정 핸들러
///
/// `PUT /api/contacts/{contactId}/addresses/{addressId}` —
/// 페이로드에 존재하는 필드만 갱신됩니다.
#[put("/{contact_id}/addresses/{address_id}")]
pub async fn update_address(
    user: AuthenticatedUser,
    path: web::Path<(i32, i32)>,
    payload: web::Json<UpdateAddressRequest>,
    service: web::Data<AddressService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let (contact_id, address_id) = path.into_inner();

    let response = service
        .update(&user.0, contact_id, address_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(WebResponse::new(response)))
}

/// 주소 삭제 핸들러
///
/// `DELETE /api/contacts/{contactId}/addresses/{addressId}`
///
/// # 응답 (200 OK)
/// ```json
/// { "data": true }
/// ```
#[delete("/{contact_id}/addresses/{address_id}")]
pub async fn delete_address(
    user: AuthenticatedUser,
    path: web::Path<(i32, i32)>,
    service: web::Data<AddressService>,
) -> Result<HttpResponse, AppError> {
    let (contact_id, address_id) = path.into_inner();

    service.delete(&user.0, contact_id, address_id).await?;

    Ok(HttpResponse::Ok().json(WebResponse::new(true)))
}
