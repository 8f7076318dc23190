/*
 * Responsibility
 * - SQLx operations for the staffs table (full CRUD)
 * - Takes a PgPool, returns rows convertible into API DTOs
 * - DB errors surface as RepoError for the handler layer to map
 */
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;

#[derive(Debug, FromRow)]
pub struct StaffRow {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub contact: String,
    pub nip: String,
}

/// List all staff, name descending. Ties fall back to id descending.
pub async fn list(db: &PgPool) -> Result<Vec<StaffRow>, RepoError> {
    let rows = sqlx::query_as::<_, StaffRow>(
        r#"
        SELECT id, name, address, contact, nip
        FROM staffs
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
    nip: &str,
) -> Result<StaffRow, RepoError> {
    let row = sqlx::query_as::<_, StaffRow>(
        r#"
        INSERT INTO staffs (name, address, contact, nip)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, address, contact, nip
        "#,
    )
    .bind(name)
    .bind(address)
    .bind(contact)
    .bind(nip)
    .fetch_one(db)
    .await?;

    Ok(row)
}

pub async fn get(db: &PgPool, staff_id: i64) -> Result<Option<StaffRow>, RepoError> {
    let row = sqlx::query_as::<_, StaffRow>(
        r#"
        SELECT id, name, address, contact, nip
        FROM staffs
        WHERE id = $1
        "#,
    )
    .bind(staff_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

/// Full replace (PUT). Every writable column is overwritten.
pub async fn replace(
    db: &PgPool,
    staff_id: i64,
    name: &str,
    address: Option<&str>,
    contact: &str,
    nip: &str,
) -> Result<Option<StaffRow>, RepoError> {
    let row = sqlx::query_as::<_, StaffRow>(
        r#"
        UPDATE staffs
        SET name = $2, address = $3, contact = $4, nip = $5
        WHERE id = $1
        RETURNING id, name, address, contact, nip
        "#,
    )
    .bind(staff_id)
    .bind(name)
    .bind(address)
    .bind(contact)
    .bind(nip)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

/// Partial update (PATCH).
///
/// address tri-state:
/// - address: Some(Some(v)) -> set to v
/// - address: Some(None)    -> set to NULL
/// - address: None          -> do not update
pub async fn update(
    db: &PgPool,
    staff_id: i64,
    name: Option<&str>,
    address: Option<Option<&str>>,
    contact: Option<&str>,
    nip: Option<&str>,
) -> Result<Option<StaffRow>, RepoError> {
    let row = sqlx::query_as::<_, StaffRow>(
        r#"
        UPDATE staffs
        SET
            name = COALESCE($2, name),
            address = CASE
                WHEN $3 = false THEN address
                ELSE $4
            END,
            contact = COALESCE($5, contact),
            nip = COALESCE($6, nip)
        WHERE id = $1
        RETURNING id, name, address, contact, nip
        "#,
    )
    .bind(staff_id)
    .bind(name)
    .bind(address.is_some()) // $3: flag to set address
    .bind(address.flatten()) // $4: new address value
    .bind(contact)
    .bind(nip)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn delete(db: &PgPool, staff_id: i64) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        DELETE FROM staffs
        WHERE id = $1
        "#,
    )
    .bind(staff_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}
