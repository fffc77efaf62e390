use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One athlete identity. Names alone are not unique, the hometown
/// disambiguates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Lifter {
    #[sqlx(rename = "lifter")]
    pub name: String,
    pub hometown: String,
}
