//! Dashboard queries over the seeded placeholder data. Run with
//! `DATABASE_URL` set and `cargo test -- --ignored`.
use invoice_dashboard::db::{customer_repo, dashboard, invoice_repo, user_repo};
use invoice_dashboard::seed::{self, placeholder};
use invoice_dashboard::{auth, pagination::ITEMS_PER_PAGE};
use sqlx::PgPool;

async fn seeded(pool: &PgPool) {
    seed::run(pool).await.unwrap();
}

#[sqlx::test(migrations = false)]
#[ignore = "needs a Postgres DATABASE_URL"]
async fn card_data_totals(pool: PgPool) {
    seeded(&pool).await;

    let cards = dashboard::fetch_card_data(&pool).await.unwrap();
    assert_eq!(cards.number_of_invoices, 13);
    assert_eq!(cards.number_of_customers, 6);
    assert_eq!(cards.total_paid_invoices, "$1,006.26");
    assert_eq!(cards.total_pending_invoices, "$1,256.32");
}

#[sqlx::test(migrations = false)]
#[ignore = "needs a Postgres DATABASE_URL"]
async fn revenue_keeps_every_month(pool: PgPool) {
    seeded(&pool).await;

    let revenue = dashboard::fetch_revenue(&pool).await.unwrap();
    assert_eq!(revenue.len(), 12);
    assert!(revenue.iter().any(|r| r.month == "Dec" && r.revenue == 4800));
}

#[sqlx::test(migrations = false)]
#[ignore = "needs a Postgres DATABASE_URL"]
async fn latest_invoices_newest_first(pool: PgPool) {
    seeded(&pool).await;

    let latest = dashboard::fetch_latest_invoices(&pool, 5).await.unwrap();
    assert_eq!(latest.len(), 5);
    assert_eq!(latest[0].name, "Michael Novotny");
    assert_eq!(latest[0].amount, "$448.00");
}

#[sqlx::test(migrations = false)]
#[ignore = "needs a Postgres DATABASE_URL"]
async fn search_is_case_insensitive_across_columns(pool: PgPool) {
    seeded(&pool).await;

    let by_name = invoice_repo::fetch_filtered_invoices(&pool, "LEE", 1, ITEMS_PER_PAGE)
        .await
        .unwrap();
    assert_eq!(by_name.len(), 2);
    assert!(by_name.iter().all(|i| i.name == "Lee Robinson"));

    let by_date = invoice_repo::fetch_filtered_invoices(&pool, "2023-06", 1, ITEMS_PER_PAGE)
        .await
        .unwrap();
    assert_eq!(by_date.len(), 5);

    let by_amount = invoice_repo::fetch_filtered_invoices(&pool, "44800", 1, ITEMS_PER_PAGE)
        .await
        .unwrap();
    assert_eq!(by_amount.len(), 1);

    let by_status = invoice_repo::fetch_filtered_invoices(&pool, "PeNdInG", 1, 20)
        .await
        .unwrap();
    assert_eq!(by_status.len(), 5);
}

#[sqlx::test(migrations = false)]
#[ignore = "needs a Postgres DATABASE_URL"]
async fn wildcards_in_the_query_match_literally(pool: PgPool) {
    seeded(&pool).await;

    let pages = invoice_repo::fetch_invoices_pages(&pool, "%", ITEMS_PER_PAGE)
        .await
        .unwrap();
    assert_eq!(pages, 0);
}

#[sqlx::test(migrations = false)]
#[ignore = "needs a Postgres DATABASE_URL"]
async fn pages_and_offsets(pool: PgPool) {
    seeded(&pool).await;

    let pages = invoice_repo::fetch_invoices_pages(&pool, "", ITEMS_PER_PAGE)
        .await
        .unwrap();
    assert_eq!(pages, 3);

    let last = invoice_repo::fetch_filtered_invoices(&pool, "", 3, ITEMS_PER_PAGE)
        .await
        .unwrap();
    assert_eq!(last.len(), 1);
}

#[sqlx::test(migrations = false)]
#[ignore = "needs a Postgres DATABASE_URL"]
async fn invoice_by_id_in_dollars(pool: PgPool) {
    seeded(&pool).await;

    let wanted = &placeholder::INVOICES[3];
    let form = invoice_repo::fetch_invoice_by_id(&pool, wanted.id())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(form.amount, 448.0);
    assert_eq!(form.customer_id, wanted.customer_id);

    let missing = invoice_repo::fetch_invoice_by_id(&pool, uuid::Uuid::nil())
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = false)]
#[ignore = "needs a Postgres DATABASE_URL"]
async fn customers_sorted_and_totalled(pool: PgPool) {
    seeded(&pool).await;

    let customers = customer_repo::fetch_customers(&pool).await.unwrap();
    assert_eq!(customers.len(), 6);
    assert_eq!(customers[0].name, "Amy Burns");

    let table = customer_repo::fetch_filtered_customers(&pool, "oliveira")
        .await
        .unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table[0].total_invoices, 2);
    assert_eq!(table[0].total_pending, "$203.48");
    assert_eq!(table[0].total_paid, "$5.00");
}

#[sqlx::test(migrations = false)]
#[ignore = "needs a Postgres DATABASE_URL"]
async fn seeded_user_can_sign_in(pool: PgPool) {
    seeded(&pool).await;

    let user = user_repo::find_by_email(&pool, "user@nextmail.com")
        .await
        .unwrap()
        .unwrap();
    assert!(auth::verify_password(&user.password_hash, "123456").unwrap());
}
