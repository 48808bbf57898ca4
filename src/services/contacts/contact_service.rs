//! # 연락처 관리 서비스 구현
//!
//! 연락처 CRUD와 검색의 비즈니스 로직을 구현합니다.
//! 모든 작업은 호출자의 이메일로 스코프가 제한되며,
//! 소유권 게이트인 [`ContactService::existing_contact`]를 통과해야 합니다.

use crate::domain::dto::Paging;
use crate::domain::dto::contacts::{
    ContactResponse, CreateContactRequest, SearchContactRequest, UpdateContactRequest,
};
use crate::domain::entities::{Contact, User};
use crate::errors::AppError;
use crate::repositories::ContactRepository;

/// 연락처 관리 비즈니스 로직 서비스
#[derive(Clone)]
pub struct ContactService {
    /// 연락처 데이터 액세스 리포지토리
    contact_repo: ContactRepository,
}

impl ContactService {
    /// 새 연락처 서비스를 생성합니다.
    pub fn new(contact_repo: ContactRepository) -> Self {
        Self { contact_repo }
    }

    /// 새 연락처 생성
    ///
    /// 소유자는 항상 인증된 호출자의 이메일로 기록됩니다.
    pub async fn create(
        &self,
        user: &User,
        request: CreateContactRequest,
    ) -> Result<ContactResponse, AppError> {
        log::debug!(
            "ContactService.CREATE : {{ user: {}, first_name: {} }}",
            user.email,
            request.first_name
        );

        let contact = self
            .contact_repo
            .insert(
                &user.email,
                &request.first_name,
                request.last_name.as_deref(),
                &request.phone,
                request.email.as_deref(),
            )
            .await?;

        Ok(ContactResponse::from(contact))
    }

    /// 공유 소유권 게이트
    ///
    /// `(owner_email, contact_id)`로 연락처를 조회하며, 없으면 404로 실패합니다.
    /// 다른 사용자의 연락처는 ID를 알아도 여기서 걸러지므로,
    /// 모든 연락처/주소 작업이 이 메서드를 인가 관문으로 사용합니다.
    pub async fn existing_contact(
        &self,
        owner_email: &str,
        contact_id: i32,
    ) -> Result<Contact, AppError> {
        self.contact_repo
            .find_by_owner(owner_email, contact_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))
    }

    /// 연락처 단건 조회
    pub async fn get(&self, user: &User, contact_id: i32) -> Result<ContactResponse, AppError> {
        log::debug!(
            "ContactService.GET : {{ user: {}, contact_id: {} }}",
            user.email,
            contact_id
        );

        let contact = self.existing_contact(&user.email, contact_id).await?;

        Ok(ContactResponse::from(contact))
    }

    /// 연락처 수정
    ///
    /// 필수 필드(first_name, phone)는 항상 교체되고, 선택 필드는
    /// 페이로드에 존재할 때만 갱신됩니다. 갱신 쿼리도 `(user_email, id)`
    /// 복합 키를 사용하므로 소유자 교차 수정은 구조적으로 불가능합니다.
    pub async fn update(
        &self,
        user: &User,
        contact_id: i32,
        request: UpdateContactRequest,
    ) -> Result<ContactResponse, AppError> {
        log::debug!(
            "ContactService.UPDATE : {{ user: {}, contact_id: {} }}",
            user.email,
            contact_id
        );

        let mut contact = self.existing_contact(&user.email, contact_id).await?;

        contact.first_name = request.first_name;
        contact.phone = request.phone;
        if let Some(last_name) = request.last_name {
            contact.last_name = Some(last_name);
        }
        if let Some(email) = request.email {
            contact.email = Some(email);
        }

        let updated = self.contact_repo.update(&contact).await?;

        Ok(ContactResponse::from(updated))
    }

    /// 연락처 삭제
    ///
    /// 주소는 외래키 CASCADE로 함께 제거됩니다.
    pub async fn delete(&self, user: &User, contact_id: i32) -> Result<(), AppError> {
        log::debug!(
            "ContactService.DELETE : {{ user: {}, contact_id: {} }}",
            user.email,
            contact_id
        );

        self.existing_contact(&user.email, contact_id).await?;
        self.contact_repo.delete(&user.email, contact_id).await?;

        Ok(())
    }

    /// 연락처 검색
    ///
    /// 독립 필터들의 논리곱으로 조회하며, `offset = (page-1)*size`,
    /// `limit = size`의 오프셋 페이징을 적용합니다.
    /// 결과가 없어도 200과 빈 목록을 반환합니다 (404 아님).
    pub async fn search(
        &self,
        user: &User,
        request: SearchContactRequest,
    ) -> Result<(Vec<ContactResponse>, Paging), AppError> {
        log::debug!(
            "ContactService.SEARCH : {{ user: {}, page: {}, size: {} }}",
            user.email,
            request.page,
            request.size
        );

        let contacts = self.contact_repo.search(&user.email, &request).await?;
        let total = self.contact_repo.count(&user.email, &request).await?;

        let responses = contacts.into_iter().map(ContactResponse::from).collect();
        let paging = Paging::new(request.page, request.size, total);

        Ok((responses, paging))
    }
}
