use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::decode::Decode;
use sqlx::error::BoxDynError;
use sqlx::sqlite::{Sqlite, SqliteTypeInfo, SqliteValueRef};
use sqlx::{Type, TypeInfo};

/// Decodes a SQLite column holding a decimal into [`Decimal`].
///
/// The results table stores weights with numeric affinity, so a single column
/// can hold TEXT, REAL or INTEGER values. Decoding always goes through the
/// value's textual rendering so no binary floating point is involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqliteDecimal(pub Decimal);

impl From<SqliteDecimal> for Decimal {
    fn from(value: SqliteDecimal) -> Self {
        value.0
    }
}

impl Type<Sqlite> for SqliteDecimal {
    fn type_info() -> SqliteTypeInfo {
        <str as Type<Sqlite>>::type_info()
    }

    fn compatible(ty: &SqliteTypeInfo) -> bool {
        matches!(ty.name(), "TEXT" | "REAL" | "INTEGER" | "NUMERIC")
    }
}

impl<'r> Decode<'r, Sqlite> for SqliteDecimal {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        let text = <&str as Decode<Sqlite>>::decode(value)?;
        Ok(Self(parse_decimal(text)?))
    }
}

pub(crate) fn parse_decimal(text: &str) -> Result<Decimal, rust_decimal::Error> {
    let text = text.trim();
    Decimal::from_str(text).or_else(|_| Decimal::from_scientific(text))
}
