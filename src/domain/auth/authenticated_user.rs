//! 인증된 사용자 추출자
//!
//! 인증 미들웨어가 토큰 조회에 성공하면 User 엔티티를
//! Request Extensions에 저장합니다. 핸들러는 이 추출자를 시그니처에
//! 선언하는 것만으로 현재 사용자를 받아옵니다.

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::domain::entities::User;
use crate::errors::AppError;

/// 현재 요청의 인증된 사용자
///
/// 인증 미들웨어가 걸린 스코프 안에서만 추출에 성공합니다.
/// 미들웨어 없이 사용되면 401로 실패합니다.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

impl AuthenticatedUser {
    /// 내부 User 엔티티를 꺼냅니다.
    pub fn into_inner(self) -> User {
        self.0
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<User>() {
            Some(user) => ready(Ok(AuthenticatedUser(user.clone()))),
            None => ready(Err(AppError::AuthenticationError(
                "Unauthorized".to_string(),
            ))),
        }
    }
}
