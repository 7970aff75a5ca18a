//! User persistence.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::entities::User;
use crate::types::{UserError, UserId, UserResult};

/// Storage boundary for user accounts.
///
/// The service layer only depends on this trait, so tests run against the
/// in-memory implementation and production against SQLite.
pub trait UserStore {
    async fn find_by_id(&self, id: UserId) -> UserResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>>;
    async fn email_exists(&self, email: &str) -> UserResult<bool>;
    async fn create(&self, user: &User) -> UserResult<User>;
    async fn save(&self, user: &User) -> UserResult<()>;
    async fn delete(&self, id: UserId) -> UserResult<()>;
}

const USER_COLUMNS: &str = "id, name, email, password_hash, avatar, google2fa_secret, email_token, remember_token, created_at, updated_at";

/// SQLite-backed user repository
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &SqliteRow) -> User {
        User {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
            password_hash: row.get("password_hash"),
            avatar: row.get("avatar"),
            google2fa_secret: row.get("google2fa_secret"),
            email_token: row.get("email_token"),
            remember_token: row.get("remember_token"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }
}

impl UserStore for SqliteUserRepository {
    async fn find_by_id(&self, id: UserId) -> UserResult<Option<User>> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(Self::row_to_user))
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?"))
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(Self::row_to_user))
    }

    async fn email_exists(&self, email: &str) -> UserResult<bool> {
        let row = sqlx::query("SELECT COUNT(1) AS count FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;

        let count: i64 = row.get("count");
        Ok(count > 0)
    }

    async fn create(&self, user: &User) -> UserResult<User> {
        let result = sqlx::query(
            "INSERT INTO users (name, email, password_hash, avatar, google2fa_secret, email_token, remember_token, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.avatar)
        .bind(&user.google2fa_secret)
        .bind(&user.email_token)
        .bind(&user.remember_token)
        .bind(&user.created_at)
        .bind(&user.updated_at)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.find_by_id(id).await?.ok_or(UserError::UserNotFound)
    }

    async fn save(&self, user: &User) -> UserResult<()> {
        let result = sqlx::query(
            "UPDATE users SET name = ?, email = ?, password_hash = ?, avatar = ?, google2fa_secret = ?, email_token = ?, remember_token = ?, updated_at = ? \
             WHERE id = ?",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.avatar)
        .bind(&user.google2fa_secret)
        .bind(&user.email_token)
        .bind(&user.remember_token)
        .bind(&user.updated_at)
        .bind(user.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(UserError::UserNotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: UserId) -> UserResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(UserError::UserNotFound);
        }
        Ok(())
    }
}
