/*
 * Responsibility
 * - SQLx operations for the clients table
 * - Takes a PgPool, returns rows convertible into API DTOs
 * - Clients are list/create only on the current surface
 */
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;

#[derive(Debug, FromRow)]
pub struct ClientRow {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub contact: String,
}

/// List all clients, name descending. Ties fall back to id descending
/// (newest first), the only ordering the store guarantees.
pub async fn list(db: &PgPool) -> Result<Vec<ClientRow>, RepoError> {
    let rows = sqlx::query_as::<_, ClientRow>(
        r#"
        SELECT id, name, address, contact
        FROM clients
        ORDER BY name DESC, id DESC
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn create(
    db: &PgPool,
    name: &str,
    address: Option<&str>,
    contact: &str,
) -> Result<ClientRow, RepoError> {
    let row = sqlx::query_as::<_, ClientRow>(
        r#"
        INSERT INTO clients (name, address, contact)
        VALUES ($1, $2, $3)
        RETURNING id, name, address, contact
        "#,
    )
    .bind(name)
    .bind(address)
    .bind(contact)
    .fetch_one(db)
    .await?;

    Ok(row)
}
