//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, forward_ready};
use actix_web::{Error, HttpMessage, HttpResponse, web};
use futures_util::future::LocalBoxFuture;

use crate::domain::entities::User;
use crate::errors::AppError;
use crate::services::users::UserService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            match resolve_user_from_request(&req).await {
                // 인증 실패: 핸들러에 도달하기 전에 401로 종료
                Err(err) => {
                    log::warn!("인증 실패: {}", err);
                    let response = HttpResponse::Unauthorized()
                        .json(serde_json::json!({ "errors": "Unauthorized" }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    Ok(res)
                }
                // 인증 성공: 사용자 정보를 Request Extensions에 저장
                Ok(user) => {
                    log::debug!("인증 성공: {}", user.email);
                    req.extensions_mut().insert(user);

                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
            }
        })
    }
}

/// 요청의 Authorization 헤더 값으로 사용자를 조회합니다.
///
/// 헤더 값은 스킴 접두사 없는 불투명 토큰이며, 저장된 토큰과
/// 동등 비교로만 확인됩니다. 읽기 전용 조회이므로 부수 효과가 없습니다.
async fn resolve_user_from_request(req: &ServiceRequest) -> Result<User, AppError> {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    let user_service = req
        .app_data::<web::Data<UserService>>()
        .ok_or_else(|| AppError::InternalError("UserService가 등록되지 않았습니다".to_string()))?;

    user_service
        .find_by_token(token)
        .await?
        .ok_or_else(|| AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()))
}
