//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 전체 생명주기를 관리하는 핵심 비즈니스 로직을 구현합니다.
//! 회원가입, 로그인/로그아웃, 프로필 조회와 수정을 제공합니다.
//!
//! ## 보안 설계 원칙
//!
//! ### 1. 비밀번호 보안 (Password Security)
//!
//! - **bcrypt 해싱**: 레코드별 솔트가 포함된 단방향 해시로 저장
//! - **환경별 Cost**: 개발/테스트(4) vs 운영(12) 환경별 보안 강도
//! - **해시 시간 측정**: 느린 해싱 단계의 소요 시간을 로깅
//!
//! ### 2. 인증 보안 (Authentication Security)
//!
//! - **정보 누출 방지**: 미등록 이메일과 잘못된 비밀번호에 동일한 401 메시지
//! - **불투명 토큰**: 로그인마다 새 UUIDv4 토큰 발급, 로그아웃 시 무효화
//!
//! ### 3. 데이터 보안 (Data Security)
//!
//! - **민감 정보 제거**: 응답 DTO에는 비밀번호 해시가 구조적으로 없음
//! - **토큰 단회 노출**: 토큰은 로그인 응답에서만 내려감

use bcrypt::{hash, verify};
use uuid::Uuid;

use crate::config::PasswordConfig;
use crate::domain::dto::users::{
    LoginUserRequest, RegisterUserRequest, UpdateUserRequest, UserResponse,
};
use crate::domain::entities::User;
use crate::errors::AppError;
use crate::repositories::UserRepository;

/// 사용자 관리 비즈니스 로직 서비스
///
/// 사용자 계정의 등록, 인증, 조회, 수정, 세션 관리를 담당합니다.
/// 모든 메서드는 `Result<T, AppError>`를 반환하며 실패는 HTTP 계층에서
/// 일관된 `{ "errors": ... }` 응답으로 변환됩니다.
#[derive(Clone)]
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리
    user_repo: UserRepository,
}

impl UserService {
    /// 새 사용자 서비스를 생성합니다.
    pub fn new(user_repo: UserRepository) -> Self {
        Self { user_repo }
    }

    /// 새 사용자 계정 등록
    ///
    /// # 인자
    ///
    /// * `request` - 회원가입 요청 (username, email, password)
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 공개 프로필 (비밀번호/해시 미포함)
    /// * `Err(AppError::ConflictError)` - 이미 등록된 이메일 (400)
    /// * `Err(AppError::InternalError)` - 비밀번호 해싱 실패
    ///
    /// # 처리 과정
    ///
    /// 1. 동일 이메일 사용자 수 조회 (중복 검사)
    /// 2. bcrypt 해싱 (환경별 cost, 소요 시간 로깅)
    /// 3. 엔티티 생성 및 저장
    /// 4. 민감 정보가 제거된 프로필 응답 생성
    pub async fn register(&self, request: RegisterUserRequest) -> Result<UserResponse, AppError> {
        log::info!("UserService.REGISTER : {{ email: {} }}", request.email);

        let existing = self.user_repo.count_by_email(&request.email).await?;
        if existing != 0 {
            return Err(AppError::ConflictError(
                "This email is already registered.".to_string(),
            ));
        }

        let password_hash = self.hash_password(&request.password)?;

        let user = User::new(request.email, request.username, password_hash);
        let created = self.user_repo.insert(&user).await?;

        Ok(UserResponse::from(created))
    }

    /// 이메일/비밀번호 로그인
    ///
    /// 성공 시 새 불투명 토큰(UUIDv4)을 발급해 저장하고,
    /// 토큰이 포함된 프로필을 반환합니다.
    ///
    /// # 보안
    ///
    /// 미등록 이메일과 잘못된 비밀번호는 어느 쪽이 틀렸는지 구분할 수 없도록
    /// 동일한 401 메시지 `"Username or password is invalid"`로 실패합니다.
    pub async fn login(&self, request: LoginUserRequest) -> Result<UserResponse, AppError> {
        log::debug!("UserService.LOGIN : {{ email: {} }}", request.email);

        let user = self
            .user_repo
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                AppError::AuthenticationError("Username or password is invalid".to_string())
            })?;

        let is_password_valid = verify(&request.password, &user.password)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {e}")))?;

        if !is_password_valid {
            return Err(AppError::AuthenticationError(
                "Username or password is invalid".to_string(),
            ));
        }

        let token = Uuid::new_v4().to_string();
        let updated = self
            .user_repo
            .set_token(&user.email, Some(&token))
            .await?;

        Ok(UserResponse::with_token(&updated))
    }

    /// 현재 사용자의 공개 프로필 조회
    ///
    /// 인증 미들웨어가 이미 사용자를 확인했으므로 추가 조회는 없습니다.
    pub async fn get(&self, user: User) -> Result<UserResponse, AppError> {
        log::debug!("UserService.GET : {{ email: {} }}", user.email);

        Ok(UserResponse::from(user))
    }

    /// 현재 사용자의 프로필 수정
    ///
    /// 요청에 존재하는 필드만 변경되며, 비밀번호는 다시 해싱됩니다.
    ///
    /// # 반환값
    ///
    /// * `Err(AppError::NotFound)` - 인증과 수정 사이에 사용자 행이 사라진 경우
    ///   (트랜잭션 없이 최선 노력으로만 보장되는 경합 안전성)
    pub async fn update(
        &self,
        user: User,
        request: UpdateUserRequest,
    ) -> Result<UserResponse, AppError> {
        log::debug!("UserService.UPDATE : {{ email: {} }}", user.email);

        let mut existing = self
            .user_repo
            .find_by_email(&user.email)
            .await?
            .ok_or_else(|| {
                log::error!("User with email {} not found", user.email);
                AppError::NotFound(format!("User with email {} not found", user.email))
            })?;

        if let Some(username) = request.username {
            existing.username = username;
        }

        if let Some(password) = request.password {
            existing.password = self.hash_password(&password)?;
        }

        let updated = self.user_repo.update(&existing).await?;

        Ok(UserResponse::from(updated))
    }

    /// 로그아웃: 세션 토큰을 NULL로 초기화합니다.
    ///
    /// 이후 동일 토큰을 가진 요청은 인증 미들웨어에서 401로 거부됩니다.
    pub async fn logout(&self, user: User) -> Result<UserResponse, AppError> {
        log::debug!("UserService.LOGOUT : {{ email: {} }}", user.email);

        let updated = self.user_repo.set_token(&user.email, None).await?;

        Ok(UserResponse::from(updated))
    }

    /// 세션 토큰으로 사용자를 조회합니다.
    ///
    /// 인증 미들웨어가 Authorization 헤더 값을 그대로 넘겨 호출합니다.
    pub async fn find_by_token(&self, token: &str) -> Result<Option<User>, AppError> {
        self.user_repo.find_by_token(token).await
    }

    /// 환경별 cost로 비밀번호를 해싱하고 소요 시간을 로깅합니다.
    fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let bcrypt_cost = PasswordConfig::bcrypt_cost();

        let hash_start = std::time::Instant::now();
        let password_hash = hash(password, bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {e}")))?;
        log::info!("Password hashing took: {:?}", hash_start.elapsed());

        Ok(password_hash)
    }
}
