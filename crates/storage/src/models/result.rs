use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};
use utoipa::ToSchema;

use super::attempt::made_count;
use super::decimal::SqliteDecimal;

/// One competition entry for one athlete, exactly as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompetitionResult {
    pub date: String,
    pub meet_name: String,
    pub lifter: String,
    pub weight_class: String,
    pub competition_weight: Decimal,
    pub hometown: String,
    pub cj1: Decimal,
    pub cj2: Decimal,
    pub cj3: Decimal,
    pub sn1: Decimal,
    pub sn2: Decimal,
    pub sn3: Decimal,
    pub total: Decimal,
    pub best_snatch: Decimal,
    pub best_cleanjerk: Decimal,
    pub url: String,
}

impl CompetitionResult {
    pub fn snatches_made(&self) -> u8 {
        made_count([self.sn1, self.sn2, self.sn3])
    }

    pub fn clean_jerks_made(&self) -> u8 {
        made_count([self.cj1, self.cj2, self.cj3])
    }
}

fn decimal(row: &SqliteRow, column: &str) -> Result<Decimal, sqlx::Error> {
    row.try_get::<SqliteDecimal, _>(column).map(Decimal::from)
}

impl<'r> FromRow<'r, SqliteRow> for CompetitionResult {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            date: row.try_get("date")?,
            meet_name: row.try_get("meet_name")?,
            lifter: row.try_get("lifter")?,
            weight_class: row.try_get("weight_class")?,
            competition_weight: decimal(row, "competition_weight")?,
            hometown: row.try_get("hometown")?,
            cj1: decimal(row, "cj1")?,
            cj2: decimal(row, "cj2")?,
            cj3: decimal(row, "cj3")?,
            sn1: decimal(row, "sn1")?,
            sn2: decimal(row, "sn2")?,
            sn3: decimal(row, "sn3")?,
            total: decimal(row, "total")?,
            best_snatch: decimal(row, "best_snatch")?,
            best_cleanjerk: decimal(row, "best_cleanjerk")?,
            url: row.try_get("url")?,
        })
    }
}
