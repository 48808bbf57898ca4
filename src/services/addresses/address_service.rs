//! # 주소 관리 서비스 구현
//!
//! 연락처 하위 리소스인 주소의 CRUD 비즈니스 로직을 구현합니다.
//!
//! 모든 작업은 두 단계의 소유권 검증을 거칩니다:
//!
//! 1. 연락처 소유권 — [`ContactService::existing_contact`]를 매 호출마다 재검증
//! 2. 주소 존재 — `(contact_id, address_id)` 복합 키 조회
//!
//! 따라서 주소 ID만으로는 다른 연락처의 주소에 접근할 수 없고,
//! 다른 사용자의 연락처 ID는 1단계에서 404로 걸러집니다.

use crate::domain::dto::addresses::{
    AddressResponse, CreateAddressRequest, UpdateAddressRequest,
};
use crate::domain::entities::{Address, User};
use crate::errors::AppError;
use crate::repositories::AddressRepository;
use crate::services::contacts::ContactService;

/// 주소 관리 비즈니스 로직 서비스
#[derive(Clone)]
pub struct AddressService {
    /// 주소 데이터 액세스 리포지토리
    address_repo: AddressRepository,
    /// 연락처 소유권 검증에 사용하는 연락처 서비스
    contact_service: ContactService,
}

impl AddressService {
    /// 새 주소 서비스를 생성합니다.
    pub fn new(address_repo: AddressRepository, contact_service: ContactService) -> Self {
        Self {
            address_repo,
            contact_service,
        }
    }

    /// 새 주소 생성
    ///
    /// `contact_id`는 요청 본문이 아닌 라우트 경로에서 받습니다.
    pub async fn create(
        &self,
        user: &User,
        contact_id: i32,
        request: CreateAddressRequest,
    ) -> Result<AddressResponse, AppError> {
        log::debug!(
            "AddressService.CREATE : {{ user: {}, contact_id: {} }}",
            user.email,
            contact_id
        );

        self.contact_service
            .existing_contact(&user.email, contact_id)
            .await?;

        let address = self
            .address_repo
            .insert(
                contact_id,
                request.street.as_deref(),
                request.city.as_deref(),
                request.province.as_deref(),
                request.country.as_deref(),
                request.postal_code.as_deref(),
            )
            .await?;

        Ok(AddressResponse::from(address))
    }

    /// 주소 존재 게이트
    ///
    /// `(contact_id, address_id)`로 조회하며, 없으면 404로 실패합니다.
    pub async fn existing_address(
        &self,
        contact_id: i32,
        address_id: i32,
    ) -> Result<Address, AppError> {
        self.address_repo
            .find(contact_id, address_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Address not found".to_string()))
    }

    /// 주소 단건 조회
    pub async fn get(
        &self,
        user: &User,
        contact_id: i32,
        address_id: i32,
    ) -> Result<AddressResponse, AppError> {
        self.contact_service
            .existing_contact(&user.email, contact_id)
            .await?;

        let address = self.existing_address(contact_id, address_id).await?;

        Ok(AddressResponse::from(address))
    }

    /// 주소 수정
    ///
    /// 페이로드에 존재하는 필드만 갱신됩니다.
    pub async fn update(
        &self,
        user: &User,
        contact_id: i32,
        address_id: i32,
        request: UpdateAddressRequest,
    ) -> Result<AddressResponse, AppError> {
        log::debug!(
            "AddressService.UPDATE : {{ user: {}, contact_id: {}, address_id: {} }}",
            user.email,
            contact_id,
            address_id
        );

        self.contact_service
            .existing_contact(&user.email, contact_id)
            .await?;

        let mut address = self.existing_address(contact_id, address_id).await?;

        if let Some(street) = request.street {
            address.street = Some(street);
        }
        if let Some(city) = request.city {
            address.city = Some(city);
        }
        if let Some(province) = request.province {
            address.province = Some(province);
        }
        if let Some(country) = request.country {
            address.country = Some(country);
        }
        if let Some(postal_code) = request.postal_code {
            address.postal_code = Some(postal_code);
        }

        let updated = self.address_repo.update(&address).await?;

        Ok(AddressResponse::from(updated))
    }

    /// 주소 삭제
    pub async fn delete(
        &self,
        user: &User,
        contact_id: i32,
        address_id: i32,
    ) -> Result<(), AppError> {
        log::debug!(
            "AddressService.DELETE : {{ user: {}, contact_id: {}, address_id: {} }}",
            user.email,
            contact_id,
            address_id
        );

        self.contact_service
            .existing_contact(&user.email, contact_id)
            .await?;
        self.existing_address(contact_id, address_id).await?;

        self.address_repo.delete(contact_id, address_id).await?;

        Ok(())
    }

    /// 연락처의 전체 주소 목록 조회 (페이징 없음)
    pub async fn list(
        &self,
        user: &User,
        contact_id: i32,
    ) -> Result<Vec<AddressResponse>, AppError> {
        self.contact_service
            .existing_contact(&user.email, contact_id)
            .await?;

        let addresses = self.address_repo.list(contact_id).await?;

        Ok(addresses.into_iter().map(AddressResponse::from).collect())
    }
}
