use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub async fn connect_pg(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// The store assigns `id`, `status` and `created_at`; clients supply the
/// remaining eight columns.
pub async fn init_schema(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
          id               uuid PRIMARY KEY DEFAULT gen_random_uuid(),
          patient_name     text NOT NULL,
          patient_email    text NOT NULL,
          patient_phone    text NOT NULL,
          appointment_date date NOT NULL,
          appointment_time text NOT NULL,
          department       text NOT NULL,
          doctor_name      text NOT NULL,
          symptoms         text NOT NULL,
          status           text NOT NULL DEFAULT 'pending',
          created_at       timestamptz NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}
