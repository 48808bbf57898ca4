//! 연락처 리포지토리
//!
//! `contacts` 테이블에 대한 소유자 스코프 CRUD와 검색 쿼리를 담당합니다.
//! 단건 조회/수정/삭제는 모두 `(user_email, id)` 복합 조건으로 수행되어
//! 다른 사용자의 연락처는 구조적으로 접근이 불가능합니다.

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::domain::dto::contacts::SearchContactRequest;
use crate::domain::entities::Contact;
use crate::errors::AppError;

const CONTACT_COLUMNS: &str = "id, first_name, last_name, phone, email, user_email";

/// 연락처 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    /// 새 연락처 리포지토리를 생성합니다.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 새 연락처를 소유자 이메일과 함께 저장합니다.
    pub async fn insert(
        &self,
        owner_email: &str,
        first_name: &str,
        last_name: Option<&str>,
        phone: &str,
        email: Option<&str>,
    ) -> Result<Contact, AppError> {
        let contact = sqlx::query_as::<_, Contact>(
            r#"
            INSERT INTO contacts (first_name, last_name, phone, email, user_email)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, first_name, last_name, phone, email, user_email
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(phone)
        .bind(email)
        .bind(owner_email)
        .fetch_one(&self.pool)
        .await?;

        Ok(contact)
    }

    /// 소유자 스코프 안에서 연락처 한 건을 조회합니다.
    ///
    /// 소유자가 다르면 행이 존재해도 None이 반환됩니다.
    pub async fn find_by_owner(
        &self,
        owner_email: &str,
        contact_id: i32,
    ) -> Result<Option<Contact>, AppError> {
        let contact = sqlx::query_as::<_, Contact>(
            r#"
            SELECT id, first_name, last_name, phone, email, user_email
            FROM contacts
            WHERE user_email = $1 AND id = $2
            "#,
        )
        .bind(owner_email)
        .bind(contact_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(contact)
    }

    /// 연락처를 `(user_email, id)` 키로 갱신합니다.
    pub async fn update(&self, contact: &Contact) -> Result<Contact, AppError> {
        let updated = sqlx::query_as::<_, Contact>(
            r#"
            UPDATE contacts
            SET first_name = $3, last_name = $4, phone = $5, email = $6
            WHERE user_email = $1 AND id = $2
            RETURNING id, first_name, last_name, phone, email, user_email
            "#,
        )
        .bind(&contact.user_email)
        .bind(contact.id)
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(&contact.phone)
        .bind(&contact.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    /// 연락처를 삭제합니다. 주소는 외래키 CASCADE로 함께 제거됩니다.
    pub async fn delete(&self, owner_email: &str, contact_id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM contacts WHERE user_email = $1 AND id = $2")
            .bind(owner_email)
            .bind(contact_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// 검색 필터와 페이징을 적용해 연락처 페이지를 조회합니다.
    ///
    /// 필터는 독립 조건의 논리곱(AND)이며, 부분 일치(`LIKE '%term%'`)로
    /// 평가됩니다. `name`은 first_name OR last_name에 매칭됩니다.
    pub async fn search(
        &self,
        owner_email: &str,
        request: &SearchContactRequest,
    ) -> Result<Vec<Contact>, AppError> {
        let mut builder =
            QueryBuilder::<Postgres>::new(format!("SELECT {CONTACT_COLUMNS} FROM contacts"));
        push_search_filters(&mut builder, owner_email, request);

        builder.push(" ORDER BY id");
        builder.push(" LIMIT ");
        builder.push_bind(request.size);
        builder.push(" OFFSET ");
        builder.push_bind(request.offset());

        let contacts = builder
            .build_query_as::<Contact>()
            .fetch_all(&self.pool)
            .await?;

        Ok(contacts)
    }

    /// 동일한 필터로 전체 일치 행 수를 계산합니다.
    ///
    /// 페이징 메타데이터의 `total_page` 계산에 사용됩니다.
    pub async fn count(
        &self,
        owner_email: &str,
        request: &SearchContactRequest,
    ) -> Result<i64, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM contacts");
        push_search_filters(&mut builder, owner_email, request);

        let total: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }
}

/// 검색/카운트 쿼리가 공유하는 WHERE 절을 구성합니다.
///
/// 생략된 필터는 조건 자체가 추가되지 않습니다 (match-all).
fn push_search_filters(
    builder: &mut QueryBuilder<'_, Postgres>,
    owner_email: &str,
    request: &SearchContactRequest,
) {
    builder.push(" WHERE user_email = ");
    builder.push_bind(owner_email.to_string());

    if let Some(name) = &request.name {
        let pattern = format!("%{name}%");
        builder.push(" AND (first_name LIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR last_name LIKE ");
        builder.push_bind(pattern);
        builder.push(")");
    }

    if let Some(phone) = &request.phone {
        builder.push(" AND phone LIKE ");
        builder.push_bind(format!("%{phone}%"));
    }

    if let Some(email) = &request.email {
        builder.push(" AND email LIKE ");
        builder.push_bind(format!("%{email}%"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request(
        name: Option<&str>,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> SearchContactRequest {
        SearchContactRequest {
            name: name.map(str::to_string),
            phone: phone.map(str::to_string),
            email: email.map(str::to_string),
            page: 1,
            size: 10,
        }
    }

    #[test]
    fn test_filters_omitted_when_absent() {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM contacts");
        push_search_filters(&mut builder, "owner@example.com", &sample_request(None, None, None));

        let sql = builder.sql();
        assert!(sql.contains("WHERE user_email ="));
        assert!(!sql.contains("first_name"));
        assert!(!sql.contains("phone LIKE"));
        assert!(!sql.contains("email LIKE"));
    }

    #[test]
    fn test_name_filter_matches_first_or_last_name() {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM contacts");
        push_search_filters(
            &mut builder,
            "owner@example.com",
            &sample_request(Some("john"), None, None),
        );

        let sql = builder.sql();
        assert!(sql.contains("first_name LIKE"));
        assert!(sql.contains("OR last_name LIKE"));
    }

    #[test]
    fn test_combined_filters_are_conjunctive() {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM contacts");
        push_search_filters(
            &mut builder,
            "owner@example.com",
            &sample_request(Some("john"), Some("0812"), None),
        );

        let sql = builder.sql();
        assert!(sql.contains("AND (first_name LIKE"));
        assert!(sql.contains("AND phone LIKE"));
    }
}
