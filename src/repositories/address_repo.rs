//! 주소 리포지토리
//!
//! `addresses` 테이블에 대한 CRUD 작업을 담당합니다.
//! 단건 조회/수정/삭제는 `(contact_id, id)` 복합 조건으로 수행되어
//! 주소 ID만으로는 다른 연락처의 주소를 지정할 수 없습니다.

use sqlx::PgPool;

use crate::domain::entities::Address;
use crate::errors::AppError;

/// 주소 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct AddressRepository {
    pool: PgPool,
}

impl AddressRepository {
    /// 새 주소 리포지토리를 생성합니다.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 새 주소를 연락처에 귀속시켜 저장합니다.
    #[allow(clippy::too_many_arguments)]
    pub async fn insert(
        &self,
        contact_id: i32,
        street: Option<&str>,
        city: Option<&str>,
        province: Option<&str>,
        country: Option<&str>,
        postal_code: Option<&str>,
    ) -> Result<Address, AppError> {
        let address = sqlx::query_as::<_, Address>(
            r#"
            INSERT INTO addresses (street, city, province, country, postal_code, contact_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, street, city, province, country, postal_code, contact_id
            "#,
        )
        .bind(street)
        .bind(city)
        .bind(province)
        .bind(country)
        .bind(postal_code)
        .bind(contact_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(address)
    }

    /// 연락처 스코프 안에서 주소 한 건을 조회합니다.
    pub async fn find(
        &self,
        contact_id: i32,
        address_id: i32,
    ) -> Result<Option<Address>, AppError> {
        let address = sqlx::query_as::<_, Address>(
            r#"
            SELECT id, street, city, province, country, postal_code, contact_id
            FROM addresses
            WHERE contact_id = $1 AND id = $2
            "#,
        )
        .bind(contact_id)
        .bind(address_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(address)
    }

    /// 연락처의 모든 주소를 조회합니다. 페이징은 없습니다.
    pub async fn list(&self, contact_id: i32) -> Result<Vec<Address>, AppError> {
        let addresses = sqlx::query_as::<_, Address>(
            r#"
            SELECT id, street, city, province, country, postal_code, contact_id
            FROM addresses
            WHERE contact_id = $1
            ORDER BY id
            "#,
        )
        .bind(contact_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(addresses)
    }

    /// 주소를 `(contact_id, id)` 키로 갱신합니다.
    pub async fn update(&self, address: &Address) -> Result<Address, AppError> {
        let updated = sqlx::query_as::<_, Address>(
            r#"
            UPDATE addresses
            SET street = $3, city = $4, province = $5, country = $6, postal_code = $7
            WHERE contact_id = $1 AND id = $2
            RETURNING id, street, city, province, country, postal_code, contact_id
            "#,
        )
        .bind(address.contact_id)
        .bind(address.id)
        .bind(&address.street)
        .bind(&address.city)
        .bind(&address.province)
        .bind(&address.country)
        .bind(&address.postal_code)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    /// 주소를 `(contact_id, id)` 키로 삭제합니다.
    pub async fn delete(&self, contact_id: i32, address_id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM addresses WHERE contact_id = $1 AND id = $2")
            .bind(contact_id)
            .bind(address_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
