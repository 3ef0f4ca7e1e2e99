//! Create the dashboard tables and load placeholder rows.
//!
//! Every step runs on the connection of a single transaction, so a failure
//! anywhere leaves neither tables nor rows behind. Inserts use `ON CONFLICT`
//! and can be repeated without changing row counts.
pub mod placeholder;

use anyhow::Context;
use sqlx::{PgConnection, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::auth::hash_password;
use placeholder::{CUSTOMERS, INVOICES, REVENUE, USERS};

pub async fn run(db: &PgPool) -> anyhow::Result<()> {
    info!("Starting database seeding...");

    let mut tx = db.begin().await.context("failed to open seed transaction")?;

    seed_users(&mut tx).await.context("failed to seed users")?;
    seed_customers(&mut tx)
        .await
        .context("failed to seed customers")?;
    seed_invoices(&mut tx)
        .await
        .context("failed to seed invoices")?;
    seed_revenue(&mut tx).await.context("failed to seed revenue")?;

    tx.commit().await.context("failed to commit seed transaction")?;

    info!("Database seeding completed.");
    Ok(())
}

/// Returns the number of rows inserted or updated.
pub async fn seed_users(conn: &mut PgConnection) -> anyhow::Result<u64> {
    info!("Seeding users...");
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    let mut affected = 0;
    for user in USERS {
        let hash = hash_password(user.password)?;
        affected += sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO UPDATE SET name = EXCLUDED.name
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user.name)
        .bind(user.email)
        .bind(hash)
        .execute(&mut *conn)
        .await?
        .rows_affected();
    }

    info!(rows = affected, "Users seeded.");
    Ok(affected)
}

pub async fn seed_customers(conn: &mut PgConnection) -> anyhow::Result<u64> {
    info!("Seeding customers...");
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            id UUID PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL UNIQUE,
            image_url VARCHAR(255) NOT NULL
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    let mut affected = 0;
    for customer in CUSTOMERS {
        affected += sqlx::query(
            r#"
            INSERT INTO customers (id, name, email, image_url)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO UPDATE SET name = EXCLUDED.name
            "#,
        )
        .bind(customer.id)
        .bind(customer.name)
        .bind(customer.email)
        .bind(customer.image_url)
        .execute(&mut *conn)
        .await?
        .rows_affected();
    }

    info!(rows = affected, "Customers seeded.");
    Ok(affected)
}

/// Invoices whose customer is missing are skipped rather than failing.
pub async fn seed_invoices(conn: &mut PgConnection) -> anyhow::Result<u64> {
    info!("Seeding invoices...");
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS invoices (
            id UUID PRIMARY KEY,
            customer_id UUID NOT NULL,
            amount INT NOT NULL,
            status VARCHAR(255) NOT NULL,
            date DATE NOT NULL,
            FOREIGN KEY (customer_id) REFERENCES customers(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    let mut affected = 0;
    for invoice in INVOICES {
        let date = invoice
            .date()
            .with_context(|| format!("invalid placeholder date '{}'", invoice.date))?;
        affected += sqlx::query(
            r#"
            INSERT INTO invoices (id, customer_id, amount, status, date)
            SELECT $1, $2, $3, $4, $5
            WHERE EXISTS (SELECT 1 FROM customers WHERE id = $2)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(invoice.id())
        .bind(invoice.customer_id)
        .bind(invoice.amount)
        .bind(invoice.status.as_str())
        .bind(date)
        .execute(&mut *conn)
        .await?
        .rows_affected();
    }

    info!(rows = affected, "Invoices seeded.");
    Ok(affected)
}

pub async fn seed_revenue(conn: &mut PgConnection) -> anyhow::Result<u64> {
    info!("Seeding revenue...");
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS revenue (
            month VARCHAR(4) PRIMARY KEY,
            revenue INT NOT NULL
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    let mut affected = 0;
    for rev in REVENUE {
        affected += sqlx::query(
            r#"
            INSERT INTO revenue (month, revenue)
            VALUES ($1, $2)
            ON CONFLICT (month) DO UPDATE SET revenue = EXCLUDED.revenue
            "#,
        )
        .bind(rev.month)
        .bind(rev.revenue)
        .execute(&mut *conn)
        .await?
        .rows_affected();
    }

    info!(rows = affected, "Revenue seeded.");
    Ok(affected)
}
