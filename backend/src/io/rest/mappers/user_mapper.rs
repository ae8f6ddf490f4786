use shared::UserProfile;

use crate::domain::models::user::User;

pub struct UserMapper;

impl UserMapper {
    /// Public profile of a user; the password hash never leaves the backend
    pub fn to_profile(user: User) -> UserProfile {
        UserProfile {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}
