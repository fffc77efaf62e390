use rust_decimal::{Decimal, RoundingStrategy};
use sqlx::SqlitePool;

use crate::dto::results::{ResultEntry, ResultsSummary, iwf_results_url};
use crate::error::{Result, StorageError};
use crate::models::{CompetitionResult, IwfName};
use crate::repository::results::ResultsRepository;

const ATTEMPTS_PER_LIFT: u64 = 3;

/// Fractional digits kept on a make-rate percentage.
///
/// Equal to rounding the fraction of ten times the attempt count to 5 places
/// and scaling back, which is how the published make rates are computed.
const MAKE_RATE_DP: u32 = 2;

/// All-time maxima of one identity, each taken over its own column.
///
/// Taken over decoded decimals rather than in SQL: a weight stored as TEXT
/// would otherwise compare as a string, putting "98" above "235".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllTimeBests {
    pub total: Decimal,
    pub snatch: Decimal,
    pub clean_jerk: Decimal,
}

impl AllTimeBests {
    /// Column maxima of `rows`, `None` when there are no rows.
    pub fn from_rows(rows: &[CompetitionResult]) -> Option<Self> {
        let total = rows.iter().map(|r| r.total).max()?;
        let snatch = rows.iter().map(|r| r.best_snatch).max()?;
        let clean_jerk = rows.iter().map(|r| r.best_cleanjerk).max()?;

        Some(Self {
            total,
            snatch,
            clean_jerk,
        })
    }

    /// A row is a best row when any of its recorded bests equals the
    /// corresponding all-time best. Exact decimal equality.
    pub fn is_best(&self, result: &CompetitionResult) -> bool {
        result.best_cleanjerk == self.clean_jerk
            || result.best_snatch == self.snatch
            || result.total == self.total
    }
}

/// Percentage of `made` attempts out of three per result row.
pub fn make_rate(made: u32, rows: usize) -> Decimal {
    if rows == 0 {
        return Decimal::ZERO;
    }

    let attempts = Decimal::from(rows as u64 * ATTEMPTS_PER_LIFT);
    (Decimal::from(made) * Decimal::ONE_HUNDRED / attempts)
        .round_dp_with_strategy(MAKE_RATE_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Build the summary of one identity from its rows (newest first) and its
/// all-time bests.
pub fn summarize(rows: Vec<CompetitionResult>, bests: AllTimeBests) -> Result<ResultsSummary> {
    let row_count = rows.len();
    let mut entries: Vec<ResultEntry> = rows.into_iter().map(ResultEntry::new).collect();

    let mut snatches_made = 0u32;
    let mut clean_jerks_made = 0u32;
    for entry in &mut entries {
        snatches_made += u32::from(entry.snatches_made);
        clean_jerks_made += u32::from(entry.clean_jerks_made);
        entry.best_result = bests.is_best(&entry.result);
    }

    let newest = &entries.first().ok_or(StorageError::NotFound)?.result;
    let (iwf_first_name, iwf_last_name) = IwfName::from_display_name(&newest.lifter).into_parts();

    Ok(ResultsSummary {
        lifter: newest.lifter.clone(),
        hometown: newest.hometown.clone(),
        iwf_results_url: iwf_results_url(&iwf_first_name, &iwf_last_name),
        iwf_first_name,
        iwf_last_name,
        best_cj: bests.clean_jerk,
        best_sn: bests.snatch,
        best_total: bests.total,
        avg_cj_makes: make_rate(clean_jerks_made, row_count),
        avg_sn_makes: make_rate(snatches_made, row_count),
        recent_weight: newest.competition_weight,
        results: entries,
    })
}

/// Aggregate the full history of the exact (`name`, `hometown`) identity.
///
/// Fails with [`StorageError::NotFound`] when the identity has no rows. A
/// failing query or an undecodable weight aborts the whole aggregation.
pub async fn aggregate(pool: &SqlitePool, name: &str, hometown: &str) -> Result<ResultsSummary> {
    tracing::debug!(name, hometown, "Aggregating results");

    let rows = ResultsRepository::new(pool)
        .list_for_identity(name, hometown)
        .await?;
    let bests = AllTimeBests::from_rows(&rows).ok_or(StorageError::NotFound)?;

    let summary = summarize(rows, bests)?;

    tracing::info!(
        name,
        hometown,
        results = summary.results.len(),
        "Aggregated results"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ResultFixture, empty_pool, pool_with, pool_with_text_weights};

    fn kg(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    fn result(total: &str, best_snatch: &str, best_cleanjerk: &str) -> CompetitionResult {
        CompetitionResult {
            date: "2020-01-01".to_string(),
            meet_name: "Open".to_string(),
            lifter: "Chris Wolfe".to_string(),
            weight_class: "89".to_string(),
            competition_weight: kg("88.2"),
            hometown: "Austin, TX".to_string(),
            cj1: kg("120"),
            cj2: kg("-125"),
            cj3: kg("125"),
            sn1: kg("95"),
            sn2: kg("100"),
            sn3: kg("0"),
            total: kg(total),
            best_snatch: kg(best_snatch),
            best_cleanjerk: kg(best_cleanjerk),
            url: "https://results.example/meet?id=7".to_string(),
        }
    }

    #[test]
    fn test_make_rate() {
        assert_eq!(make_rate(3, 1), kg("100"));
        assert_eq!(make_rate(0, 4), Decimal::ZERO);
        assert_eq!(make_rate(2, 1), kg("66.67"));
        assert_eq!(make_rate(1, 2), kg("16.67"));
        assert_eq!(make_rate(5, 2), kg("83.33"));
        assert_eq!(make_rate(0, 0), Decimal::ZERO);
    }

    #[test]
    fn test_make_rate_rounds_half_away_from_zero() {
        // 3 of 2400 attempts is exactly 0.125%.
        assert_eq!(make_rate(3, 800), kg("0.13"));
    }

    #[test]
    fn test_make_rate_stays_within_percentage_bounds() {
        for rows in 1..=20usize {
            for made in 0..=(rows as u32 * 3) {
                let rate = make_rate(made, rows);
                assert!(rate >= Decimal::ZERO && rate <= Decimal::ONE_HUNDRED);

                let exact = Decimal::from(made) * Decimal::ONE_HUNDRED / Decimal::from(rows * 3);
                assert!((rate - exact).abs() <= kg("0.005"), "made={made} rows={rows}");
            }
        }
    }

    #[test]
    fn test_best_row_flagging_uses_any_category() {
        let bests = AllTimeBests {
            total: kg("230"),
            snatch: kg("105"),
            clean_jerk: kg("130"),
        };

        assert!(bests.is_best(&result("230", "100", "125")));
        assert!(bests.is_best(&result("220", "105", "115")));
        assert!(bests.is_best(&result("220", "95", "130.0")));
        assert!(!bests.is_best(&result("229.5", "104", "129")));
    }

    #[test]
    fn test_from_rows_takes_each_column_maximum() {
        let rows = vec![
            result("230", "100", "130"),
            result("225", "105", "120"),
        ];

        let bests = AllTimeBests::from_rows(&rows).unwrap();

        assert_eq!(bests.total, kg("230"));
        assert_eq!(bests.snatch, kg("105"));
        assert_eq!(bests.clean_jerk, kg("130"));
        assert!(AllTimeBests::from_rows(&[]).is_none());
    }

    #[test]
    fn test_summarize_empty_rows_is_not_found() {
        let bests = AllTimeBests {
            total: Decimal::ZERO,
            snatch: Decimal::ZERO,
            clean_jerk: Decimal::ZERO,
        };

        assert!(summarize(Vec::new(), bests).unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_single_perfect_meet() {
        let pool = pool_with(&[ResultFixture::new("Chris Wolfe", "Austin, TX")
            .snatches(["90", "95", "100"], "100")
            .clean_jerks(["115", "120", "125"], "125")
            .total("225")])
        .await;

        let summary = aggregate(&pool, "Chris Wolfe", "Austin, TX").await.unwrap();

        assert_eq!(summary.results.len(), 1);
        let entry = &summary.results[0];
        assert_eq!(entry.snatches_made, 3);
        assert_eq!(entry.clean_jerks_made, 3);
        assert!(entry.best_result);
        assert_eq!(summary.avg_sn_makes, kg("100"));
        assert_eq!(summary.avg_cj_makes, kg("100"));
        assert_eq!(summary.best_total, kg("225"));
        assert_eq!(summary.best_sn, kg("100"));
        assert_eq!(summary.best_cj, kg("125"));
    }

    #[tokio::test]
    async fn test_history_summary() {
        let pool = pool_with(&[
            ResultFixture::new("D'Angelo Osorio", "Vallejo, CA")
                .on("2018-03-10", "Spring Classic")
                .weighing("72.9")
                .snatches(["100", "-105", "105"], "105")
                .clean_jerks(["130", "-135", "-135"], "130")
                .total("235"),
            ResultFixture::new("D'Angelo Osorio", "Vallejo, CA")
                .on("2019-11-02", "American Open")
                .weighing("73.1")
                .snatches(["-108", "108", "-112"], "108")
                .clean_jerks(["135", "140", "0"], "140")
                .total("248"),
            ResultFixture::new("D'Angelo Osorio", "Vallejo, CA")
                .on("2019-05-20", "Nationals")
                .weighing("72.4")
                .snatches(["103", "-107", "-107"], "103")
                .clean_jerks(["132", "-137", "-137"], "132")
                .total("235"),
            ResultFixture::new("D'Angelo Osorio", "Fresno, CA")
                .snatches(["150", "155", "160"], "160")
                .clean_jerks(["180", "185", "190"], "190")
                .total("350"),
        ])
        .await;

        let summary = aggregate(&pool, "D'Angelo Osorio", "Vallejo, CA").await.unwrap();

        let dates: Vec<&str> = summary.results.iter().map(|r| r.result.date.as_str()).collect();
        assert_eq!(dates, vec!["2019-11-02", "2019-05-20", "2018-03-10"]);

        assert_eq!(summary.lifter, "D'Angelo Osorio");
        assert_eq!(summary.hometown, "Vallejo, CA");
        assert_eq!(summary.iwf_first_name, "dangelo");
        assert_eq!(summary.iwf_last_name, "osorio");
        assert!(summary.iwf_results_url.contains("athlete_name=osorio+dangelo"));
        assert_eq!(summary.recent_weight, kg("73.1"));

        assert_eq!(summary.best_total, kg("248"));
        assert_eq!(summary.best_sn, kg("108"));
        assert_eq!(summary.best_cj, kg("140"));

        let flags: Vec<bool> = summary.results.iter().map(|r| r.best_result).collect();
        assert_eq!(flags, vec![true, false, false]);

        let made: Vec<(u8, u8)> = summary
            .results
            .iter()
            .map(|r| (r.snatches_made, r.clean_jerks_made))
            .collect();
        assert_eq!(made, vec![(1, 2), (1, 1), (2, 1)]);

        // 4 of 9 snatches, 4 of 9 clean & jerks.
        assert_eq!(summary.avg_sn_makes, kg("44.44"));
        assert_eq!(summary.avg_cj_makes, kg("44.44"));

        assert_eq!(
            summary.results[0].result_url,
            "https://results.example/meet?id=1&isPopup=&Tab=Results"
        );
    }

    #[tokio::test]
    async fn test_bests_from_different_meets_flag_each_meet() {
        let pool = pool_with(&[
            ResultFixture::new("Kyle Brown", "Austin, TX")
                .on("2019-01-01", "Winter Open")
                .snatches(["100", "105", "-110"], "105")
                .clean_jerks(["120", "-125", "-125"], "120")
                .total("225"),
            ResultFixture::new("Kyle Brown", "Austin, TX")
                .on("2019-06-01", "Summer Open")
                .snatches(["95", "100", "-105"], "100")
                .clean_jerks(["125", "130", "-135"], "130")
                .total("230"),
            ResultFixture::new("Kyle Brown", "Austin, TX")
                .on("2019-09-01", "Fall Open")
                .snatches(["95", "-100", "-100"], "95")
                .clean_jerks(["120", "-125", "-125"], "120")
                .total("215"),
        ])
        .await;

        let summary = aggregate(&pool, "Kyle Brown", "Austin, TX").await.unwrap();
        let flags: Vec<(&str, bool)> = summary
            .results
            .iter()
            .map(|r| (r.result.date.as_str(), r.best_result))
            .collect();

        assert_eq!(
            flags,
            vec![("2019-09-01", false), ("2019-06-01", true), ("2019-01-01", true)]
        );
        assert!(summary.results.iter().any(|r| r.best_result));
    }

    #[tokio::test]
    async fn test_bests_compare_text_weights_numerically() {
        let pool = pool_with_text_weights(&[
            ResultFixture::new("Mattie Rogers", "Orlando, FL")
                .on("2020-01-01", "Virtual Open")
                .snatches(["40", "45", "-48"], "45")
                .clean_jerks(["50", "53", "-56"], "53")
                .total("98"),
            ResultFixture::new("Mattie Rogers", "Orlando, FL")
                .on("2019-01-01", "Worlds")
                .snatches(["100", "104", "105.5"], "105.5")
                .clean_jerks(["125", "130", "-133"], "130")
                .total("235.5"),
            ResultFixture::new("Mattie Rogers", "Orlando, FL")
                .on("2018-01-01", "Nationals")
                .snatches(["95", "99", "-102"], "99")
                .clean_jerks(["120", "-126", "-126"], "120")
                .total("219"),
        ])
        .await;

        let summary = aggregate(&pool, "Mattie Rogers", "Orlando, FL").await.unwrap();

        assert_eq!(summary.best_total, kg("235.5"));
        assert_eq!(summary.best_sn, kg("105.5"));
        assert_eq!(summary.best_cj, kg("130"));

        let flags: Vec<(&str, bool)> = summary
            .results
            .iter()
            .map(|r| (r.result.date.as_str(), r.best_result))
            .collect();
        assert_eq!(
            flags,
            vec![("2020-01-01", false), ("2019-01-01", true), ("2018-01-01", false)]
        );
        assert_eq!(summary.recent_weight, kg("80.4"));
    }

    #[tokio::test]
    async fn test_unknown_identity_is_not_found() {
        let pool = pool_with(&[ResultFixture::new("Chris Wolfe", "Austin, TX")]).await;

        let err = aggregate(&pool, "Chris Wolfe", "Dallas, TX").await.unwrap_err();
        assert!(err.is_not_found());

        let err = aggregate(&pool, "chris wolfe", "Austin, TX").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_query_failure_is_not_a_not_found() {
        let pool = empty_pool().await;
        sqlx::query("DROP TABLE results").execute(&pool).await.unwrap();

        let err = aggregate(&pool, "Chris Wolfe", "Austin, TX").await.unwrap_err();

        assert!(matches!(err, StorageError::Query(_)));
    }

    #[tokio::test]
    async fn test_undecodable_weight_fails_the_aggregation() {
        let pool = pool_with(&[ResultFixture::new("Chris Wolfe", "Austin, TX")]).await;
        sqlx::query("UPDATE results SET total = 'DNF'")
            .execute(&pool)
            .await
            .unwrap();

        let err = aggregate(&pool, "Chris Wolfe", "Austin, TX").await.unwrap_err();

        assert!(matches!(err, StorageError::Query(_)));
    }
}
