//! Repository functions for reading rows in the `users` table.
use sqlx::{PgPool, Row};

use crate::error::DataError;
use crate::models::User;

/// Fetch a user, password hash included, by login email.
pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, DataError> {
    let row = sqlx::query(
        r#"
        SELECT
            id,
            name,
            email,
            password
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(db)
    .await
    .map_err(|e| DataError::User.caused_by(&e))?;

    let Some(row) = row else {
        return Ok(None);
    };

    Ok(Some(User {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        password_hash: row.get("password"),
    }))
}
