//! In-memory `results` databases for tests.

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// `results` schema with every weight column declared as `weight_type`.
fn create_results(weight_type: &str) -> String {
    format!(
        r#"
        CREATE TABLE results (
            date TEXT,
            meet_name TEXT,
            lifter TEXT,
            weight_class TEXT,
            competition_weight {weight_type},
            hometown TEXT,
            cj1 {weight_type},
            cj2 {weight_type},
            cj3 {weight_type},
            sn1 {weight_type},
            sn2 {weight_type},
            sn3 {weight_type},
            total {weight_type},
            best_snatch {weight_type},
            best_cleanjerk {weight_type},
            url TEXT
        )
        "#
    )
}

/// A `results` row. Weights are written as text and left to the column's
/// affinity, like the real data.
#[derive(Debug, Clone)]
pub struct ResultFixture {
    pub date: &'static str,
    pub meet_name: &'static str,
    pub lifter: String,
    pub hometown: String,
    pub weight_class: &'static str,
    pub competition_weight: &'static str,
    pub snatches: [&'static str; 3],
    pub clean_jerks: [&'static str; 3],
    pub best_snatch: &'static str,
    pub best_cleanjerk: &'static str,
    pub total: &'static str,
    pub url: &'static str,
}

impl ResultFixture {
    pub fn new(lifter: impl Into<String>, hometown: impl Into<String>) -> Self {
        Self {
            date: "2019-06-01",
            meet_name: "Summer Open",
            lifter: lifter.into(),
            hometown: hometown.into(),
            weight_class: "81",
            competition_weight: "80.4",
            snatches: ["100", "105", "110"],
            clean_jerks: ["125", "130", "135"],
            best_snatch: "110",
            best_cleanjerk: "135",
            total: "245",
            url: "https://results.example/meet?id=1",
        }
    }

    pub fn on(mut self, date: &'static str, meet_name: &'static str) -> Self {
        self.date = date;
        self.meet_name = meet_name;
        self
    }

    pub fn weighing(mut self, competition_weight: &'static str) -> Self {
        self.competition_weight = competition_weight;
        self
    }

    pub fn snatches(mut self, attempts: [&'static str; 3], best: &'static str) -> Self {
        self.snatches = attempts;
        self.best_snatch = best;
        self
    }

    pub fn clean_jerks(mut self, attempts: [&'static str; 3], best: &'static str) -> Self {
        self.clean_jerks = attempts;
        self.best_cleanjerk = best;
        self
    }

    pub fn total(mut self, total: &'static str) -> Self {
        self.total = total;
        self
    }
}

async fn pool_with_weight_type(weight_type: &str) -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database");

    sqlx::query(&create_results(weight_type))
        .execute(&pool)
        .await
        .expect("create results table");

    pool
}

pub async fn empty_pool() -> SqlitePool {
    pool_with_weight_type("NUMERIC").await
}

pub async fn pool_with(rows: &[ResultFixture]) -> SqlitePool {
    let pool = empty_pool().await;
    insert(&pool, rows).await;
    pool
}

/// Weights stay TEXT cells, so SQL comparisons on them are lexical.
pub async fn pool_with_text_weights(rows: &[ResultFixture]) -> SqlitePool {
    let pool = pool_with_weight_type("TEXT").await;
    insert(&pool, rows).await;
    pool
}

pub async fn insert(pool: &SqlitePool, rows: &[ResultFixture]) {
    for row in rows {
        sqlx::query(
            r#"
            INSERT INTO results (
                date, meet_name, lifter, weight_class, competition_weight, hometown,
                cj1, cj2, cj3, sn1, sn2, sn3, total, best_snatch, best_cleanjerk, url
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)
            "#,
        )
        .bind(row.date)
        .bind(row.meet_name)
        .bind(&row.lifter)
        .bind(row.weight_class)
        .bind(row.competition_weight)
        .bind(&row.hometown)
        .bind(row.clean_jerks[0])
        .bind(row.clean_jerks[1])
        .bind(row.clean_jerks[2])
        .bind(row.snatches[0])
        .bind(row.snatches[1])
        .bind(row.snatches[2])
        .bind(row.total)
        .bind(row.best_snatch)
        .bind(row.best_cleanjerk)
        .bind(row.url)
        .execute(pool)
        .await
        .expect("insert result");
    }
}
