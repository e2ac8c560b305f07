#[cfg(test)]
mod tests {
    use crate::config::AnalysisConfig;
    use crate::models::metrics::{DayMetrics, ExposureStats, Qualification, SECONDS_PER_DAY};
    use crate::services::qualification::clean_air_medal;
    use chrono::{Duration, NaiveDate};

    /// A day bucket with hand-built statistics. A negative excess score
    /// cannot occur in computed metrics; tests use it to reach the rules
    /// behind the literal `excess_score >= 0` count of rule 4.
    fn day(index: u32, valid: bool, max_co2_ppm: f64, excess_score: f64) -> DayMetrics {
        DayMetrics {
            day: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap() + Duration::days(i64::from(index)),
            duration_s: SECONDS_PER_DAY,
            gap_duration_s: if valid { 0 } else { 7200 },
            stats: Some(ExposureStats {
                max_co2_ppm,
                mean_co2_ppm: max_co2_ppm / 2.0,
                excess_duration_s: 0,
                mean_excess_co2_ppm: 0.0,
                excess_rate: 0.0,
                excess_score,
            }),
        }
    }

    fn quiet_month(count: u32) -> Vec<DayMetrics> {
        (0..count).map(|i| day(i, true, 600.0, -1.0)).collect()
    }

    #[test]
    fn test_empty_month_is_indeterminate() {
        let config = AnalysisConfig::default();
        assert_eq!(clean_air_medal(&[], &config), Qualification::Indeterminate);
    }

    #[test]
    fn test_rule1_too_few_valid_days() {
        let config = AnalysisConfig::default();
        // 3 valid days out of 30: rule 1 fires regardless of anything else.
        let mut days = quiet_month(3);
        days.extend((3..30).map(|i| day(i, false, 600.0, -1.0)));

        assert_eq!(clean_air_medal(&days, &config), Qualification::NotAwarded);
    }

    #[test]
    fn test_rule2_bad_air_threshold_reached_once() {
        let config = AnalysisConfig::default();
        let mut days = quiet_month(30);
        days[17] = day(17, true, 2500.0, -1.0);

        assert_eq!(clean_air_medal(&days, &config), Qualification::NotAwarded);
    }

    #[test]
    fn test_rule2_ignores_invalid_days() {
        let config = AnalysisConfig::default();
        // The spike sits on an invalid day; with 29 of 30 days valid the
        // month still passes.
        let mut days = quiet_month(30);
        days[17] = day(17, false, 3000.0, -1.0);

        assert_eq!(clean_air_medal(&days, &config), Qualification::Awarded);
    }

    #[test]
    fn test_rule3_severe_excess_score() {
        let config = AnalysisConfig::default();
        let mut days = quiet_month(30);
        days[5] = day(5, true, 1500.0, 150.0); // threshold is inclusive

        assert_eq!(clean_air_medal(&days, &config), Qualification::NotAwarded);
    }

    #[test]
    fn test_rule4_counts_every_nonnegative_score() {
        let config = AnalysisConfig::default();
        // A realistic quiet month: every valid day carries a score of
        // exactly 0. The literal `>= 0` comparison counts them all, so the
        // admissible-rate rule fires.
        let days: Vec<DayMetrics> = (0..30).map(|i| day(i, true, 600.0, 0.0)).collect();

        assert_eq!(clean_air_medal(&days, &config), Qualification::NotAwarded);
    }

    #[test]
    fn test_rule4_threshold_is_inclusive() {
        let config = AnalysisConfig::default();
        // 3 of 10 valid days at score zero is exactly the admissible rate.
        let mut days = quiet_month(10);
        for i in 0..3 {
            days[i as usize] = day(i, true, 600.0, 0.0);
        }
        assert_eq!(clean_air_medal(&days, &config), Qualification::NotAwarded);

        // 2 of 10 stays below it.
        let mut days = quiet_month(10);
        for i in 0..2 {
            days[i as usize] = day(i, true, 600.0, 0.0);
        }
        assert_eq!(clean_air_medal(&days, &config), Qualification::Awarded);
    }

    #[test]
    fn test_awarded_month_flips_on_single_spike() {
        let config = AnalysisConfig::default();
        let days = quiet_month(30);
        assert_eq!(clean_air_medal(&days, &config), Qualification::Awarded);

        let mut flipped = days;
        flipped[10] = day(10, true, 2500.0, -1.0);
        assert_eq!(clean_air_medal(&flipped, &config), Qualification::NotAwarded);
    }

    #[test]
    fn test_rules_apply_in_order() {
        let config = AnalysisConfig::default();
        // With too few valid days the verdict comes from rule 1 even though
        // rules 2 and 3 would also fire; the outcome must still be a plain
        // NotAwarded, never indeterminate.
        let mut days: Vec<DayMetrics> = (0..30).map(|i| day(i, false, 2500.0, 200.0)).collect();
        days[0] = day(0, true, 2500.0, 200.0);

        assert_eq!(clean_air_medal(&days, &config), Qualification::NotAwarded);
    }

    #[test]
    fn test_days_without_stats_never_count_as_excess() {
        let config = AnalysisConfig::default();
        let mut days = quiet_month(10);
        // A valid day without statistics cannot exist in computed output,
        // but the gate must not misread absent stats as zero excess.
        days[0] = DayMetrics {
            day: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            duration_s: SECONDS_PER_DAY,
            gap_duration_s: 0,
            stats: None,
        };

        assert_eq!(clean_air_medal(&days, &config), Qualification::Awarded);
    }
}
