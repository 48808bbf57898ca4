//! 사용자 리포지토리
//!
//! `users` 테이블에 대한 CRUD 작업을 담당합니다.
//! 이메일이 기본키이므로 모든 단건 조회/갱신은 이메일 동등 비교로 수행됩니다.

use sqlx::PgPool;

use crate::domain::entities::User;
use crate::errors::AppError;

/// 사용자 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// 새 사용자 리포지토리를 생성합니다.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 해당 이메일로 등록된 사용자 수를 반환합니다.
    ///
    /// 회원가입 시 중복 이메일 검사에 사용됩니다.
    pub async fn count_by_email(&self, email: &str) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// 이메일로 사용자를 조회합니다.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT email, username, password, token FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// 세션 토큰으로 사용자를 조회합니다.
    ///
    /// 인증 미들웨어가 Authorization 헤더 값을 그대로 넘겨
    /// 토큰 동등 비교로 사용자를 찾습니다. 토큰은 해석되지 않는
    /// 불투명 문자열이므로 이 조회가 인증의 전부입니다.
    pub async fn find_by_token(&self, token: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT email, username, password, token FROM users WHERE token = $1",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// 새 사용자를 저장합니다.
    pub async fn insert(&self, user: &User) -> Result<User, AppError> {
        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, username, password, token)
            VALUES ($1, $2, $3, $4)
            RETURNING email, username, password, token
            "#,
        )
        .bind(&user.email)
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.token)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// 사용자명과 비밀번호 해시를 갱신합니다.
    pub async fn update(&self, user: &User) -> Result<User, AppError> {
        let updated = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET username = $2, password = $3
            WHERE email = $1
            RETURNING email, username, password, token
            "#,
        )
        .bind(&user.email)
        .bind(&user.username)
        .bind(&user.password)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    /// 세션 토큰을 설정하거나(로그인) 제거합니다(로그아웃).
    pub async fn set_token(&self, email: &str, token: Option<&str>) -> Result<User, AppError> {
        let updated = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET token = $2
            WHERE email = $1
            RETURNING email, username, password, token
            "#,
        )
        .bind(email)
        .bind(token)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }
}
