//! SQLite-backed credential store

use acctcore::password::hash_password;
use acctcore::{Account, CredentialStore, StoreError};
use chrono::Utc;

use super::Database;

/// Credential store over the `accounts` table
#[derive(Clone)]
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

/// Escape `%`, `_` and the escape character itself for a LIKE pattern
fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for ch in keyword.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

impl CredentialStore for SqliteStore {
    async fn create_account(&self, username: &str, password: &str) -> Result<(), StoreError> {
        let password_hash = hash_password(password)?;
        let now = Utc::now().timestamp();

        sqlx::query(
            "INSERT INTO accounts (username, password_hash, hidden, created_at, modified_at)
             VALUES (?, ?, 0, ?, ?)"
        )
        .bind(username)
        .bind(&password_hash)
        .bind(now)
        .bind(now)
        .execute(self.db.pool())
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                StoreError::AlreadyExists(username.to_string())
            }
            other => StoreError::backend(other),
        })?;

        Ok(())
    }

    async fn get_accounts(
        &self,
        keyword: &str,
        include_hidden: bool,
    ) -> Result<Vec<Account>, StoreError> {
        let pattern = format!("%{}%", escape_like(keyword));

        let rows = sqlx::query_as::<_, (String,)>(
            "SELECT username FROM accounts
             WHERE (?1 = '' OR username LIKE ?2 ESCAPE '\\')
               AND (?3 OR hidden = 0)
             ORDER BY username"
        )
        .bind(keyword)
        .bind(&pattern)
        .bind(include_hidden)
        .fetch_all(self.db.pool())
        .await
        .map_err(StoreError::backend)?;

        Ok(rows.into_iter().map(|(username,)| Account::new(username)).collect())
    }

    async fn delete_accounts(&self, usernames: &[String]) -> Result<(), StoreError> {
        let mut tx = self.db.pool().begin().await.map_err(StoreError::backend)?;

        if usernames.is_empty() {
            let result = sqlx::query("DELETE FROM accounts")
                .execute(&mut *tx)
                .await
                .map_err(StoreError::backend)?;
            tracing::debug!(rows = result.rows_affected(), "deleted all accounts");
        } else {
            for username in usernames {
                let result = sqlx::query("DELETE FROM accounts WHERE username = ?")
                    .bind(username)
                    .execute(&mut *tx)
                    .await
                    .map_err(StoreError::backend)?;

                // Dropping the transaction rolls back earlier deletions
                if result.rows_affected() == 0 {
                    return Err(StoreError::NotFound(username.clone()));
                }
            }
        }

        tx.commit().await.map_err(StoreError::backend)?;
        Ok(())
    }
}
