#[cfg(test)]
mod tests {
    use crate::error::EngineError;
    use crate::models::series::{Gap, GridPoint, RawSeries, Sample, UniformSeries};
    use crate::models::time::resolve_local;
    use chrono::{NaiveDate, TimeZone, Utc};
    use chrono_tz::Tz;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    fn berlin_local(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> chrono::DateTime<Tz> {
        resolve_local(
            chrono_tz::Europe::Berlin,
            NaiveDate::from_ymd_opt(y, mo, d)
                .unwrap()
                .and_hms_opt(h, mi, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_raw_series_accepts_increasing_timestamps() {
        let series = RawSeries::new(vec![
            Sample::new(utc(2025, 1, 1, 0, 0), 420),
            Sample::new(utc(2025, 1, 1, 0, 5), 440),
            Sample::new(utc(2025, 1, 1, 0, 10), 460),
        ])
        .unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.first().unwrap().co2_ppm, 420);
        assert_eq!(series.last().unwrap().co2_ppm, 460);
    }

    #[test]
    fn test_raw_series_rejects_duplicate_timestamps() {
        let result = RawSeries::new(vec![
            Sample::new(utc(2025, 1, 1, 0, 0), 420),
            Sample::new(utc(2025, 1, 1, 0, 0), 440),
        ]);
        assert!(matches!(result, Err(EngineError::InvalidSeries(_))));
    }

    #[test]
    fn test_raw_series_rejects_out_of_order_timestamps() {
        let result = RawSeries::new(vec![
            Sample::new(utc(2025, 1, 1, 0, 5), 420),
            Sample::new(utc(2025, 1, 1, 0, 0), 440),
        ]);
        assert!(matches!(result, Err(EngineError::InvalidSeries(_))));
    }

    #[test]
    fn test_empty_raw_series_is_constructible() {
        // Emptiness is rejected by the preprocessor, not the constructor.
        let series = RawSeries::new(vec![]).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_gap_contains_is_inclusive() {
        let gap = Gap {
            start: berlin_local(2025, 1, 1, 10, 0),
            end: berlin_local(2025, 1, 1, 12, 0),
        };
        assert!(gap.contains(&berlin_local(2025, 1, 1, 10, 0)));
        assert!(gap.contains(&berlin_local(2025, 1, 1, 11, 0)));
        assert!(gap.contains(&berlin_local(2025, 1, 1, 12, 0)));
        assert!(!gap.contains(&berlin_local(2025, 1, 1, 12, 10)));
        assert_eq!(gap.duration().num_hours(), 2);
    }

    #[test]
    fn test_uniform_series_counts() {
        let points = vec![
            GridPoint {
                bucket_start: berlin_local(2025, 1, 1, 0, 0),
                co2_ppm: Some(500.0),
            },
            GridPoint {
                bucket_start: berlin_local(2025, 1, 1, 0, 10),
                co2_ppm: None,
            },
            GridPoint {
                bucket_start: berlin_local(2025, 1, 1, 0, 20),
                co2_ppm: Some(520.0),
            },
        ];
        let series = UniformSeries::new(600, points);
        assert_eq!(series.len(), 3);
        assert_eq!(series.present_count(), 2);
        assert_eq!(series.missing_count(), 1);
        assert_eq!(series.rate_s(), 600);
    }

    #[test]
    fn test_slice_month_selects_local_month() {
        let points = vec![
            GridPoint {
                bucket_start: berlin_local(2025, 1, 31, 23, 50),
                co2_ppm: Some(400.0),
            },
            GridPoint {
                bucket_start: berlin_local(2025, 2, 1, 0, 0),
                co2_ppm: Some(410.0),
            },
            GridPoint {
                bucket_start: berlin_local(2025, 2, 15, 12, 0),
                co2_ppm: Some(420.0),
            },
        ];
        let series = UniformSeries::new(600, points);

        let january = series.slice_month(2025, 1);
        assert_eq!(january.len(), 1);
        let february = series.slice_month(2025, 2);
        assert_eq!(february.len(), 2);
        assert_eq!(february.rate_s(), 600);
        assert!(series.slice_month(2025, 3).is_empty());
    }
}
