use chrono::{Duration, NaiveTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

struct DemoEvent {
    title: &'static str,
    description: &'static str,
    days_from_today: i64,
    hour: u32,
    location: &'static str,
}

const DEMO_EVENTS: &[DemoEvent] = &[
    DemoEvent {
        title: "Hack Night",
        description: "Bring a laptop and an idea. Pizza at nine.",
        days_from_today: 1,
        hour: 18,
        location: "Engineering Lab 2",
    },
    DemoEvent {
        title: "Career Fair",
        description: "Meet recruiters from local companies.",
        days_from_today: 7,
        hour: 10,
        location: "Main Hall",
    },
    DemoEvent {
        title: "Open Mic",
        description: "",
        days_from_today: 14,
        hour: 20,
        location: "Student Union",
    },
];

/// Populate an empty `events` table with a few upcoming events, dated relative to today.
pub async fn seed_demo_events(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        tracing::info!("Events table already has data, skipping seed");
        return Ok(());
    }

    let today = Utc::now().date_naive();
    for demo in DEMO_EVENTS {
        let event_time = NaiveTime::from_hms_opt(demo.hour, 0, 0)
            .ok_or_else(|| anyhow::anyhow!("invalid seed hour {}", demo.hour))?;
        sqlx::query(
            r#"
            INSERT INTO events (id, title, description, event_date, event_time, location)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(demo.title)
        .bind(demo.description)
        .bind(today + Duration::days(demo.days_from_today))
        .bind(event_time)
        .bind(demo.location)
        .execute(pool)
        .await?;
    }

    tracing::info!("Seeded {} demo events", DEMO_EVENTS.len());
    Ok(())
}
