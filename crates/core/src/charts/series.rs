//! Chart-library-neutral series model.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::quotes::{AggregatedRecord, BucketLabel};

pub const OPEN: &str = "Open";
pub const HIGH: &str = "High";
pub const LOW: &str = "Low";
pub const CLOSE: &str = "Close";

/// One named value sequence, aligned with [`ChartSeriesModel::x_labels`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NamedSeries {
    pub name: String,
    pub values: Vec<Decimal>,
}

/// X-axis labels plus the four OHLC series, ready for any renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeriesModel {
    pub x_labels: Vec<BucketLabel>,
    pub series: Vec<NamedSeries>,
}

impl ChartSeriesModel {
    pub fn len(&self) -> usize {
        self.x_labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_labels.is_empty()
    }

    pub fn series(&self, name: &str) -> Option<&NamedSeries> {
        self.series.iter().find(|s| s.name == name)
    }
}

/// Builds the series model, keeping the input order as is.
pub fn assemble(records: &[AggregatedRecord]) -> ChartSeriesModel {
    let column = |name: &str, pick: fn(&AggregatedRecord) -> Decimal| NamedSeries {
        name: name.to_string(),
        values: records.iter().map(pick).collect(),
    };

    ChartSeriesModel {
        x_labels: records.iter().map(|r| r.label.clone()).collect(),
        series: vec![
            column(OPEN, |r| r.open),
            column(HIGH, |r| r.high),
            column(LOW, |r| r.low),
            column(CLOSE, |r| r.close),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::aggregate;
    use rust_decimal_macros::dec;
    use stockviz_market_data::{PriceRecord, RecordDate, Resolution};

    fn aggregated(dates: &[&str]) -> Vec<AggregatedRecord> {
        let records = dates
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let v = Decimal::from(i as i64 + 1);
                PriceRecord::new(RecordDate::parse(d).unwrap(), v, v + dec!(1), v - dec!(1), v)
            })
            .collect();
        aggregate(records, Resolution::Daily)
    }

    #[test]
    fn test_lengths_match_labels() {
        let model = assemble(&aggregated(&["2024-01-02", "2024-01-03", "2024-01-04"]));
        assert_eq!(model.len(), 3);
        assert_eq!(model.series.len(), 4);
        for series in &model.series {
            assert_eq!(series.values.len(), 3);
        }
    }

    #[test]
    fn test_series_names_and_values() {
        let model = assemble(&aggregated(&["2024-01-02", "2024-01-03"]));
        let names: Vec<&str> = model.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Open", "High", "Low", "Close"]);
        assert_eq!(model.series(HIGH).unwrap().values, vec![dec!(2), dec!(3)]);
        assert_eq!(model.series(LOW).unwrap().values, vec![dec!(0), dec!(1)]);
    }

    #[test]
    fn test_input_order_is_kept() {
        let mut records = aggregated(&["2024-01-02", "2024-01-03"]);
        records.reverse();
        let model = assemble(&records);
        assert_eq!(model.x_labels[0].as_str(), "2024-01-03");
        assert_eq!(model.series(OPEN).unwrap().values, vec![dec!(2), dec!(1)]);
    }

    #[test]
    fn test_empty_input() {
        let model = assemble(&[]);
        assert!(model.is_empty());
        assert!(model.series.iter().all(|s| s.values.is_empty()));
    }

    #[test]
    fn test_json_shape() {
        let model = assemble(&aggregated(&["2024-01-02"]));
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["xLabels"][0], "2024-01-02");
        assert_eq!(json["series"][3]["name"], "Close");
        assert_eq!(json["series"][3]["values"][0], 1.0);
    }
}
