//! Account lifecycle service
//!
//! Signup, lookup, and the soft-delete path. Deletion never removes rows;
//! it rewrites PII in place and stamps `deleted_at`, after which every
//! active-only lookup misses the account.

use garden_core::entities::{User, UserProfile, UserRole, UserWithProfile};
use garden_core::error::DomainError;
use garden_core::traits::{AnonymizeUser, NewUser};
use garden_core::value_objects::UserId;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CurrentUserResponse, SignUpRequest, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Account lifecycle service
pub struct AccountService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccountService<'a> {
    /// Create a new AccountService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account with the signup point grant
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn sign_up(&self, request: SignUpRequest) -> ServiceResult<CurrentUserResponse> {
        request.validate()?;

        if self.ctx.user_repo().username_exists(&request.username).await? {
            return Err(DomainError::UsernameAlreadyExists.into());
        }
        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash = self.ctx.password_service().hash(&request.password)?;
        let new_user = NewUser {
            username: request.username,
            email: request.email,
            password_hash,
            role: UserRole::User,
        };

        let created = self
            .ctx
            .user_repo()
            .create(new_user, UserProfile::new_signup(UserId::default()))
            .await?;

        info!(user_id = %created.id(), "User signed up");
        Ok(CurrentUserResponse::from(&created))
    }

    /// Get the public profile of an active user
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: UserId) -> ServiceResult<UserResponse> {
        let uwp = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        Ok(UserResponse::from(&uwp))
    }

    /// Soft delete the caller's own account
    ///
    /// Admin accounts may not remove themselves; another admin must do it.
    #[instrument(skip(self))]
    pub async fn delete_own_account(&self, username: &str) -> ServiceResult<()> {
        let uwp = self
            .ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::UserNotFoundByName(username.to_string()))?;

        if uwp.user.is_admin() {
            return Err(DomainError::AdminSelfDeletion.into());
        }

        self.anonymize_and_soft_delete(&uwp).await
    }

    /// Soft delete a target account on behalf of an admin
    #[instrument(skip(self))]
    pub async fn delete_user_by_admin(
        &self,
        admin_username: &str,
        target_id: UserId,
    ) -> ServiceResult<()> {
        let admin = self
            .ctx
            .user_repo()
            .find_by_username(admin_username)
            .await?
            .ok_or_else(|| DomainError::UserNotFoundByName(admin_username.to_string()))?;

        if !admin.user.is_admin() {
            return Err(DomainError::MissingPermission("ADMIN".to_string()).into());
        }
        if admin.id() == target_id {
            return Err(DomainError::SelfDeletionByAdmin.into());
        }

        let target = self
            .ctx
            .user_repo()
            .find_by_id(target_id)
            .await?
            .ok_or(DomainError::UserNotFound(target_id))?;

        self.anonymize_and_soft_delete(&target).await
    }

    /// Rewrite PII and stamp the deletion in one repository transaction
    async fn anonymize_and_soft_delete(&self, uwp: &UserWithProfile) -> ServiceResult<()> {
        let id = uwp.id();
        let scrambled = self.ctx.password_service().scrambled_hash()?;

        self.ctx
            .user_repo()
            .anonymize(AnonymizeUser {
                id,
                username: User::anonymized_username(id),
                email: User::anonymized_email(id),
                password_hash: scrambled,
            })
            .await?;

        info!(user_id = %id, "Account anonymized and soft deleted");
        Ok(())
    }
}
