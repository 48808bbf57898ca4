//! 불투명 토큰 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 `Authorization` 헤더의 토큰을 확인하고
//! 사용자 정보를 Request Extensions에 저장합니다.
//!
//! 헤더 값은 `Bearer` 접두사 없는 불투명 토큰 그 자체이며,
//! users 테이블의 token 컬럼과 동등 비교로 조회됩니다.

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error, Result,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 토큰 인증 미들웨어
///
/// 이 미들웨어가 감싼 스코프의 모든 요청은 유효한 토큰 없이는
/// 핸들러에 도달하지 못하고 401로 거부됩니다.
pub struct AuthMiddleware;

impl AuthMiddleware {
    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
