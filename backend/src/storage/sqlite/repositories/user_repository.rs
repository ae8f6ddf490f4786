use anyhow::Result;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::models::user::User;
use crate::storage::sqlite::connection::DbConnection;
use crate::storage::traits::UserStorage;

/// Repository for user accounts
#[derive(Clone)]
pub struct UserRepository {
    db: DbConnection,
}

impl UserRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &SqliteRow) -> User {
        User {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
            password_hash: row.get("password_hash"),
            created_at: row.get("created_at"),
        }
    }
}

#[async_trait]
impl UserStorage for UserRepository {
    async fn store_user(&self, user: &User) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password_hash, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.created_at)
        .execute(self.db.pool())
        .await;

        match result {
            Ok(_) => Ok(true),
            // A concurrent registration won the race for this email
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.as_ref().map(Self::from_row))
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.as_ref().map(Self::from_row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test() -> UserRepository {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        UserRepository::new(db)
    }

    fn user(email: &str) -> User {
        User {
            id: User::generate_id(),
            name: "Kamal".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[tokio::test]
    async fn test_store_and_lookup_user() {
        let repo = setup_test().await;
        let stored = user("kamal@example.com");
        assert!(repo.store_user(&stored).await.expect("Failed to store user"));

        let by_email = repo
            .get_user_by_email("kamal@example.com")
            .await
            .expect("Lookup failed")
            .expect("User should exist");
        assert_eq!(by_email, stored);

        let by_id = repo.get_user(&stored.id).await.expect("Lookup failed");
        assert_eq!(by_id, Some(stored));

        let missing = repo.get_user_by_email("nobody@example.com").await.expect("Lookup failed");
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_reported_as_taken() {
        let repo = setup_test().await;
        assert!(repo.store_user(&user("dup@example.com")).await.expect("Failed to store user"));

        let second = repo.store_user(&user("dup@example.com")).await.expect("Duplicate should not error");
        assert!(!second);

        let other = repo.store_user(&user("other@example.com")).await.expect("Failed to store user");
        assert!(other);
    }
}
