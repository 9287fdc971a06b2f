use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::auth::repo_types::Account;
use crate::policy::Role;

const ACCOUNT_COLUMNS: &str =
    "id, email, password_hash, first_name, last_name, role, is_verified, created_at, updated_at";

impl Account {
    /// Find an account by email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<Account>, sqlx::Error> {
        let sql = format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE email = $1");
        sqlx::query_as::<_, Account>(&sql)
            .bind(email)
            .fetch_optional(db)
            .await
    }

    /// Find an account by id.
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<Account>, sqlx::Error> {
        let sql = format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = $1");
        sqlx::query_as::<_, Account>(&sql)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    /// Create an account. Runs on a transaction connection so registration
    /// can create the role profile atomically alongside it.
    pub async fn create(
        conn: &mut PgConnection,
        email: &str,
        password_hash: &str,
        first_name: &str,
        last_name: &str,
        role: Role,
    ) -> Result<Account, sqlx::Error> {
        let sql = format!(
            r#"
            INSERT INTO accounts (email, password_hash, first_name, last_name, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {ACCOUNT_COLUMNS}
            "#
        );
        sqlx::query_as::<_, Account>(&sql)
            .bind(email)
            .bind(password_hash)
            .bind(first_name)
            .bind(last_name)
            .bind(role)
            .fetch_one(conn)
            .await
    }
}
