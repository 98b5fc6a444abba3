//! Update Profile Use Case
//!
//! Lets the caller change their own email and bio.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Profile patch; absent fields are left untouched
#[derive(Default)]
pub struct UpdateProfileInput {
    pub email: Option<String>,
    pub bio: Option<String>,
}

/// Update profile use case
pub struct UpdateProfileUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> UpdateProfileUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, current: User, input: UpdateProfileInput) -> AuthResult<User> {
        let mut user = current;

        if let Some(email) = input.email {
            user.set_email(Email::new(email)?);
        }
        if let Some(bio) = input.bio {
            user.set_bio(bio);
        }

        self.user_repo.update(&user).await?;

        tracing::info!(user_id = %user.id, "Profile updated");

        Ok(user)
    }
}
