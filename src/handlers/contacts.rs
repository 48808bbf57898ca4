//! # Contact Management HTTP Handlers
//!
//! 연락처 CRUD와 검색 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 전부 인증 미들웨어 뒤에 있으며, 호출자가 소유한 연락처에만 접근할 수 있습니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/api/contacts` | 연락처 생성 |
//! | `GET` | `/api/contacts` | 연락처 검색 (필터 + 페이징) |
//! | `GET` | `/api/contacts/{contactId}` | 연락처 조회 |
//! | `PUT` | `/api/contacts/{contactId}` | 연락처 수정 |
//! | `DELETE` | `/api/contacts/{contactId}` | 연락처 삭제 |

use actix_web::{HttpResponse, delete, get, post, put, web};
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::contacts::{
    CreateContactRequest, SearchContactQuery, SearchContactRequest, UpdateContactRequest,
};
use crate::domain::dto::{PagedResponse, WebResponse};
use crate::errors::AppError;
use crate::services::contacts::ContactService;

/// 연락처 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /api/contacts`
///
/// # 요청 본문
///
/// ```json
/// {
///   "first_name": "John",
///   "last_name": "Doe",
///   "phone": "081234567890",
///   "email": "john.doe@example.com"
/// }
/// ```
///
/// 소유자는 본문이 아니라 인증된 호출자의 이메일로 기록됩니다.
#[post("")]
pub async fn create_contact(
    user: AuthenticatedUser,
    payload: web::Json<CreateContactRequest>,
    service: web::Data<ContactService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = service.create(&user.0, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(WebResponse::new(response)))
}

/// 연락처 검색 핸들러
///
/// # 엔드포인트
///
/// `GET /api/contacts?name=&phone=&email=&page=&size=`
///
/// 생략된 필터는 조건에서 제외되고(필터 없음 = 전체 일치),
/// page/size 기본값은 1/10입니다.
///
/// # 응답 (200 OK)
///
/// ```json
/// {
///   "data": [ { "id": 1, "first_name": "John", ... } ],
///   "paging": { "current_page": 1, "size": 10, "total_page": 1 }
/// }
/// ```
///
/// 결과가 없어도 404가 아닌 200과 빈 `data` 배열이 내려갑니다.
#[get("")]
pub async fn search_contacts(
    user: AuthenticatedUser,
    query: web::Query<SearchContactQuery>,
    service: web::Data<ContactService>,
) -> Result<HttpResponse, AppError> {
    let request = SearchContactRequest::from_query(query.into_inner());
    request.validate()?;

    let (contacts, paging) = service.search(&user.0, request).await?;

    Ok(HttpResponse::Ok().json(PagedResponse {
        data: contacts,
        paging,
    }))
}

/// 연락처 조회 핸들러
///
/// `GET /api/contacts/{contactId}` — 호출자 소유가 아니면 404입니다.
#[get("/{contact_id}")]
pub async fn get_contact(
    user: AuthenticatedUser,
    contact_id: web::Path<i32>,
    service: web::Data<ContactService>,
) -> Result<HttpResponse, AppError> {
    let response = service.get(&user.0, contact_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(WebResponse::new(response)))
}

/// 연락처 수정 핸들러
///
/// `PUT /api/contacts/{contactId}` — 수정 대상은 `(소유자 이메일, id)` 복합 키로
/// 결정되므로 다른 사용자의 연락처는 ID를 알아도 수정할 수 없습니다.
#[put("/{contact_id}")]
pub async fn update_contact(
    user: AuthenticatedUser,
    contact_id: web::Path<i32>,
    payload: web::Json<UpdateContactRequest>,
    service: web::Data<ContactService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = service
        .update(&user.0, contact_id.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(WebResponse::new(response)))
}

/// 연락처 삭제 핸들러
///
/// `DELETE /api/contacts/{contactId}` — 소속 주소들은 CASCADE로 함께 삭제됩니다.
///
/// # 응답 (200 OK)
/// ```json
/// { "data": true }
/// ```
#[delete("/{contact_id}")]
pub async fn delete_contact(
    user: AuthenticatedUser,
    contact_id: web::Path<i32>,
    service: web::Data<ContactService>,
) -> Result<HttpResponse, AppError> {
    service.delete(&user.0, contact_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(WebResponse::new(true)))
}
