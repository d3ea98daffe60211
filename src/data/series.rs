//! Metric series storage, aggregation, and sample data generation.
//!
//! Real deployments ingest indicator estimates from an upstream API;
//! this build ships a deterministic generator so the explorer is
//! self-contained.

use crate::config::IndicatorDef;
use crate::data::places::Place;
use crate::state::AggregationType;
use chrono::{Days, NaiveDate};
use std::collections::HashMap;

/// Time series for a single place: indicator id -> date -> raw value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceSeries {
    pub values: HashMap<String, HashMap<NaiveDate, f64>>,
}

impl PlaceSeries {
    /// Raw value for an indicator on a specific date, if present.
    pub fn value(&self, indicator: &str, date: NaiveDate) -> Option<f64> {
        self.values
            .get(indicator)
            .and_then(|series| series.get(&date))
            .copied()
    }
}

/// Metric data keyed by place id. Opaque to the visualization layer;
/// only the map view interprets it.
pub type MetricTable = HashMap<String, PlaceSeries>;

/// Window for the rolling average aggregation, in days.
const ROLLING_WINDOW_DAYS: u64 = 7;

/// Combines a place's raw series into the single value displayed for
/// `date` under the given aggregation mode.
///
/// Returns `None` when the place has no series for the indicator, or
/// (for the point modes) no value at the requested date.
pub fn aggregate(
    series: &PlaceSeries,
    indicator: &str,
    agg_type: AggregationType,
    date: NaiveDate,
) -> Option<f64> {
    let by_date = series.values.get(indicator)?;

    match agg_type {
        AggregationType::Daily => by_date.get(&date).copied(),
        AggregationType::RollingAverage => {
            let window_start = date.checked_sub_days(Days::new(ROLLING_WINDOW_DAYS - 1))?;
            let mut sum = 0.0;
            let mut count = 0;
            for (d, v) in by_date {
                if *d >= window_start && *d <= date {
                    sum += v;
                    count += 1;
                }
            }
            if count == 0 {
                None
            } else {
                Some(sum / count as f64)
            }
        }
        AggregationType::Cumulative => {
            Some(by_date.iter().filter(|(d, _)| **d <= date).map(|(_, v)| v).sum())
        }
    }
}

/// Scales a raw value to a per-100k-population rate.
pub fn per_capita(value: f64, population: u64) -> f64 {
    if population == 0 {
        return 0.0;
    }
    value / population as f64 * 100_000.0
}

/// Generates a deterministic sample table covering every place,
/// indicator, and date. Values follow an epidemic-style wave whose phase
/// and amplitude are seeded from the place and indicator ids, so repeated
/// runs (and both boundary levels) produce stable, comparable data.
pub fn generate_sample_table(
    places: &[Place],
    indicators: &[IndicatorDef],
    dates: &[NaiveDate],
) -> MetricTable {
    let mut table = MetricTable::with_capacity(places.len());

    for place in places {
        let mut series = PlaceSeries::default();

        for indicator in indicators {
            let seed = mix_seed(place.id, &indicator.id);
            let phase = (seed % 6283) as f64 / 1000.0;
            let amplitude = 0.6 + ((seed >> 16) & 0xff) as f64 / 640.0;
            let base = place.population as f64 * 2.0e-5 * indicator.scale;

            let mut by_date = HashMap::with_capacity(dates.len());
            for (day, date) in dates.iter().enumerate() {
                let t = day as f64 * 0.045 + phase;
                let wave = 1.0 + amplitude * t.sin() + 0.25 * (t * 3.1).sin();
                let value = (base * wave.max(0.0)).round();
                by_date.insert(*date, value);
            }

            series.values.insert(indicator.id.clone(), by_date);
        }

        table.insert(place.id.to_string(), series);
    }

    table
}

/// FNV-1a over the place and indicator ids.
fn mix_seed(place_id: &str, indicator_id: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in place_id.bytes().chain(indicator_id.bytes()) {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 3, day).unwrap()
    }

    fn sample_series() -> PlaceSeries {
        let mut series = PlaceSeries::default();
        let by_date: HashMap<NaiveDate, f64> =
            [(date(1), 10.0), (date(2), 20.0), (date(3), 30.0)].into();
        series.values.insert("cases".to_string(), by_date);
        series
    }

    #[test]
    fn test_aggregate_daily() {
        let series = sample_series();
        assert_eq!(
            aggregate(&series, "cases", AggregationType::Daily, date(2)),
            Some(20.0)
        );
        // No value recorded for this date
        assert_eq!(
            aggregate(&series, "cases", AggregationType::Daily, date(9)),
            None
        );
        // Unknown indicator
        assert_eq!(
            aggregate(&series, "deaths", AggregationType::Daily, date(2)),
            None
        );
    }

    #[test]
    fn test_aggregate_rolling_average() {
        let series = sample_series();
        // Window ending on day 3 covers all three values
        assert_eq!(
            aggregate(&series, "cases", AggregationType::RollingAverage, date(3)),
            Some(20.0)
        );
        // Window ending on day 2 covers the first two
        assert_eq!(
            aggregate(&series, "cases", AggregationType::RollingAverage, date(2)),
            Some(15.0)
        );
        // Window ending before any data
        assert_eq!(
            aggregate(
                &series,
                "cases",
                AggregationType::RollingAverage,
                NaiveDate::from_ymd_opt(2020, 2, 20).unwrap()
            ),
            None
        );
    }

    #[test]
    fn test_aggregate_cumulative() {
        let series = sample_series();
        assert_eq!(
            aggregate(&series, "cases", AggregationType::Cumulative, date(2)),
            Some(30.0)
        );
        assert_eq!(
            aggregate(&series, "cases", AggregationType::Cumulative, date(31)),
            Some(60.0)
        );
        // Before any data the running total is zero
        assert_eq!(
            aggregate(
                &series,
                "cases",
                AggregationType::Cumulative,
                NaiveDate::from_ymd_opt(2020, 2, 20).unwrap()
            ),
            Some(0.0)
        );
    }

    #[test]
    fn test_per_capita() {
        assert_eq!(per_capita(50.0, 100_000), 50.0);
        assert_eq!(per_capita(50.0, 1_000_000), 5.0);
        assert_eq!(per_capita(50.0, 0), 0.0);
    }

    #[test]
    fn test_generate_covers_all_places_and_dates() {
        let places = &crate::data::places::COUNTRIES[..3];
        let indicators = vec![
            IndicatorDef {
                id: "cases".to_string(),
                label: "Daily cases".to_string(),
                unit: "cases".to_string(),
                scale: 1.0,
            },
            IndicatorDef {
                id: "deaths".to_string(),
                label: "Daily deaths".to_string(),
                unit: "deaths".to_string(),
                scale: 0.02,
            },
        ];
        let dates: Vec<NaiveDate> = (1..=10).map(date).collect();

        let table = generate_sample_table(places, &indicators, &dates);

        assert_eq!(table.len(), 3);
        for place in places {
            let series = &table[place.id];
            for indicator in &indicators {
                for d in &dates {
                    assert!(
                        series.value(&indicator.id, *d).is_some(),
                        "missing {}/{}/{}",
                        place.id,
                        indicator.id,
                        d
                    );
                }
            }
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let places = &crate::data::places::COUNTRIES[..2];
        let indicators = vec![IndicatorDef {
            id: "cases".to_string(),
            label: "Daily cases".to_string(),
            unit: "cases".to_string(),
            scale: 1.0,
        }];
        let dates: Vec<NaiveDate> = (1..=5).map(date).collect();

        let a = generate_sample_table(places, &indicators, &dates);
        let b = generate_sample_table(places, &indicators, &dates);
        assert_eq!(a, b);
    }
}
