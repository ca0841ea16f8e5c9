//! SeaORM migration CLI for the products schema (`up`, `down`, `status`, `fresh`).
//!
//! Reads `DATABASE_URL`. The API also applies pending migrations at startup.

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
