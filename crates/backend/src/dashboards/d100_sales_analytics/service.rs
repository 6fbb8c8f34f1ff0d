use chrono::NaiveDate;
use contracts::dashboards::d100_sales_analytics::{
    AggregationTotals, AnalyticsOp, AnalyticsOutcome, AnalyticsRequest, AnalyticsResponse,
    DashboardTab, DimensionFilter, PeriodGranularity, PeriodSeries, RawModelReport,
};

use super::{aggregator, filter, normalizer, periods};

/// Выполнить операцию движка: нормализация -> фильтр -> свертка.
///
/// Синхронно и без побочных эффектов; каждая операция работает только
/// со своим снимком записей. Вызывается диспетчером и тестами напрямую.
pub fn execute(request: AnalyticsRequest) -> AnalyticsResponse {
    let request_id = request.request_id.clone();

    let outcome = match request.op {
        AnalyticsOp::Aggregate {
            reports,
            region,
            model,
            tab,
        } => AnalyticsOutcome::Totals(aggregate_reports(&reports, &region, &model, tab)),

        AnalyticsOp::PartitionYear {
            reports,
            region,
            model,
            year,
            granularity,
        } => AnalyticsOutcome::Series(year_series(&reports, &region, &model, year, granularity)),

        AnalyticsOp::PartitionRange {
            reports,
            region,
            model,
            date_from,
            date_to,
        } => AnalyticsOutcome::Series(range_series(&reports, &region, &model, date_from, date_to)),
    };

    AnalyticsResponse {
        request_id,
        outcome: Ok(outcome),
    }
}

/// Итоги за период по сырым отчетам источника
pub fn aggregate_reports(
    reports: &[RawModelReport],
    region: &DimensionFilter,
    model: &DimensionFilter,
    tab: DashboardTab,
) -> AggregationTotals {
    let records = normalizer::normalize(reports);
    let filtered = filter::apply(&records, region, model);
    aggregator::aggregate(&filtered, tab)
}

/// Годовой ряд по сырым отчетам источника
pub fn year_series(
    reports: &[RawModelReport],
    region: &DimensionFilter,
    model: &DimensionFilter,
    year: i32,
    granularity: PeriodGranularity,
) -> PeriodSeries {
    let records = normalizer::normalize(reports);
    let filtered = filter::apply(&records, region, model);
    periods::partition_year(&filtered, year, granularity)
}

/// Помесячный ряд за произвольный диапазон
pub fn range_series(
    reports: &[RawModelReport],
    region: &DimensionFilter,
    model: &DimensionFilter,
    date_from: NaiveDate,
    date_to: NaiveDate,
) -> PeriodSeries {
    let records = normalizer::normalize(reports);
    let filtered = filter::apply(&records, region, model);
    periods::partition_range(&filtered, date_from, date_to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_sales_analytics::RawRegionBreakdown;
    use serde_json::json;

    fn sample_reports() -> Vec<RawModelReport> {
        vec![RawModelReport {
            model_id: Some("m1".to_string()),
            regions: vec![
                RawRegionBreakdown {
                    region_id: Some("r1".to_string()),
                    total_contracts: Some(json!("10")),
                    total_price: Some(json!("1000")),
                    period: None,
                },
                RawRegionBreakdown {
                    region_id: Some("r2".to_string()),
                    total_contracts: Some(json!(null)),
                    total_price: Some(json!(5000)),
                    period: None,
                },
            ],
        }]
    }

    #[test]
    fn test_end_to_end_aggregate_for_model() {
        let totals = aggregate_reports(
            &sample_reports(),
            &DimensionFilter::All,
            &DimensionFilter::only("m1"),
            DashboardTab::Sales,
        );

        assert_eq!(totals.count, 10);
        assert_eq!(totals.amount, 6000.0);
        assert_eq!(totals.average, 600);
    }

    #[test]
    fn test_end_to_end_aggregate_no_matching_model() {
        let totals = aggregate_reports(
            &sample_reports(),
            &DimensionFilter::All,
            &DimensionFilter::only("m999"),
            DashboardTab::Sales,
        );

        assert_eq!(totals, AggregationTotals::zero());
    }

    #[test]
    fn test_wildcard_aggregate_counts_everything() {
        let totals = aggregate_reports(
            &sample_reports(),
            &DimensionFilter::All,
            &DimensionFilter::All,
            DashboardTab::Sales,
        );
        assert_eq!(totals.count, 10);
        assert_eq!(totals.amount, 6000.0);
    }

    #[test]
    fn test_execute_echoes_request_id() {
        let request = AnalyticsRequest::new(AnalyticsOp::Aggregate {
            reports: sample_reports(),
            region: DimensionFilter::All,
            model: DimensionFilter::All,
            tab: DashboardTab::Sales,
        });
        let request_id = request.request_id.clone();

        let response = execute(request);
        assert_eq!(response.request_id, request_id);
        match response.outcome {
            Ok(AnalyticsOutcome::Totals(totals)) => assert_eq!(totals.count, 10),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
