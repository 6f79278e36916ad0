//! Demo promotional message seed script
//!
//! Inserts a small set of banners around the current date:
//! - one running info banner (shown right now)
//! - one newer running warning banner (wins over the info banner)
//! - one upcoming holiday banner (starts in 60 days)
//! - one expired success banner
//! - one switched-off error banner inside its window
//!
//! Usage:
//!   DATABASE_URL=... ./seed-demo [--reset] [--days 14]

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use std::env;

use storefront_banner::{
    db,
    models::promotional_message::UpsertPromotionalMessageRequest,
    services::{promotional_messages::PromotionalMessageService, store::PgMessageStore},
};

#[derive(Parser)]
#[command(name = "seed-demo", about = "Seed demo promotional messages")]
struct Args {
    /// Delete every existing promotional message first
    #[arg(long)]
    reset: bool,

    /// Width in days of the currently running windows
    #[arg(long, default_value_t = 14, value_parser = clap::value_parser!(i64).range(1..=3650))]
    days: i64,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();
    let database_url = env::var("DATABASE_URL").context("DATABASE_URL required")?;

    println!("=== Seed Promotional Messages ===");

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .context("Failed to connect to database")?;
    db::run_migrations(&pool).await?;

    if args.reset {
        println!("Clearing existing promotional messages...");
        sqlx::query("DELETE FROM promotional_messages")
            .execute(&pool)
            .await
            .context("Failed to clear promotional_messages")?;
    }

    let store = PgMessageStore::new(pool);
    let now = Utc::now();
    let half = Duration::try_days(args.days).context("--days out of range")? / 2;

    let demo = [
        (
            "Free shipping",
            "Free standard shipping on orders over <strong>$50</strong>.",
            now - half,
            now + half,
            "info",
            true,
        ),
        (
            "Weekend flash sale",
            "Up to <strong>40% off</strong> selected jackets. \
             <a href=\"/products?sale=1\">Shop the sale</a>",
            now - Duration::hours(1),
            now + half,
            "warning",
            true,
        ),
        (
            "Holiday gift guide",
            "Our <a href=\"/gifts\">holiday gift guide</a> is live.",
            now + Duration::days(60),
            now + Duration::days(65),
            "success",
            true,
        ),
        (
            "Spring clearance ended",
            "Thanks for shopping our spring clearance!",
            now - Duration::days(30),
            now - Duration::days(20),
            "success",
            true,
        ),
        (
            "Checkout maintenance",
            "Checkout may be unavailable tonight between 01:00 and 02:00 UTC.",
            now - Duration::days(1),
            now + Duration::days(2),
            "error",
            false,
        ),
    ];

    for (title, content, start_date, end_date, kind, is_active) in demo {
        let req = UpsertPromotionalMessageRequest {
            title: title.to_string(),
            content: content.to_string(),
            start_date,
            end_date,
            message_type: Some(kind.to_string()),
            is_active: Some(is_active),
        };
        let created = PromotionalMessageService::create(&store, &req)
            .await
            .with_context(|| format!("Failed to insert {title:?}"))?;
        println!("  #{} {} [{}]", created.id, created.title, created.message_type);
    }

    match PromotionalMessageService::active_now(&store).await? {
        Some(active) => println!("Active banner now: {}", active.title),
        None => println!("No banner active now"),
    }

    println!("=== Done ===");
    Ok(())
}
