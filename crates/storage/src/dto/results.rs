use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::CompetitionResult;

const RESULT_URL_SUFFIX: &str = "&isPopup=&Tab=Results";
const IWF_SEARCH_URL: &str = "https://www.iwf.net/new_bw/results_by_events/";

/// Exact identity to aggregate.
#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ResultsQuery {
    pub name: String,
    pub hometown: String,
}

/// A stored result annotated with its derived per-row statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResultEntry {
    #[serde(flatten)]
    pub result: CompetitionResult,
    pub snatches_made: u8,
    pub clean_jerks_made: u8,
    /// Set when this row holds one of the athlete's all-time bests.
    pub best_result: bool,
    /// Link to the result on the federation's site, opened on its results tab.
    pub result_url: String,
}

impl ResultEntry {
    pub fn new(result: CompetitionResult) -> Self {
        let result_url = format!("{}{}", result.url, RESULT_URL_SUFFIX);
        Self {
            snatches_made: result.snatches_made(),
            clean_jerks_made: result.clean_jerks_made(),
            best_result: false,
            result_url,
            result,
        }
    }
}

/// Performance summary of one athlete identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResultsSummary {
    pub lifter: String,
    pub hometown: String,
    pub iwf_first_name: String,
    pub iwf_last_name: String,
    pub iwf_results_url: String,
    pub best_cj: Decimal,
    pub best_sn: Decimal,
    pub best_total: Decimal,
    /// Percentage of clean & jerk attempts made.
    pub avg_cj_makes: Decimal,
    /// Percentage of snatch attempts made.
    pub avg_sn_makes: Decimal,
    /// Body weight at the most recent competition.
    pub recent_weight: Decimal,
    /// Newest first.
    pub results: Vec<ResultEntry>,
}

pub fn iwf_results_url(first: &str, last: &str) -> String {
    format!("{IWF_SEARCH_URL}?athlete_name={last}+{first}&athlete_gender=all&athlete_nation=USA")
}
