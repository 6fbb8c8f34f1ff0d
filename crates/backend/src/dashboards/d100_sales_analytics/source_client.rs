use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use contracts::dashboards::d100_sales_analytics::RawModelReport;

/// Внешний источник сырых отчетов (REST-бэкенд со статистикой контрактов)
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Пачка отчетов за период; `model_id` сужает выборку на стороне API
    async fn fetch_reports(
        &self,
        date_from: NaiveDate,
        date_to: NaiveDate,
        model_id: Option<&str>,
    ) -> Result<Vec<RawModelReport>>;
}

/// HTTP-клиент источника.
///
/// Без ретраев и обновления токенов: сбой запроса сразу уходит
/// вызывающему, состояние между запросами не хранится.
pub struct SalesApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl SalesApiClient {
    pub fn new(base_url: impl Into<String>, timeout_seconds: u64) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(timeout_seconds))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl RecordSource for SalesApiClient {
    async fn fetch_reports(
        &self,
        date_from: NaiveDate,
        date_to: NaiveDate,
        model_id: Option<&str>,
    ) -> Result<Vec<RawModelReport>> {
        let url = format!(
            "{}/api/v1/analytics/contracts",
            self.base_url.trim_end_matches('/')
        );

        let mut query: Vec<(&str, String)> = vec![
            ("begin_date", date_from.format("%Y-%m-%d").to_string()),
            ("end_date", date_to.format("%Y-%m-%d").to_string()),
        ];
        if let Some(model_id) = model_id {
            query.push(("model_id", model_id.to_string()));
        }

        tracing::debug!("Fetching contract reports: {} ({} items in query)", url, query.len());

        let response = self.client.get(&url).query(&query).send().await?;
        if !response.status().is_success() {
            anyhow::bail!(
                "Source API returned status {} for {}",
                response.status(),
                url
            );
        }

        let reports: Vec<RawModelReport> = response.json().await?;
        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d100_sales_analytics::AnalyticsDispatcher;
    use contracts::dashboards::d100_sales_analytics::{
        AnalyticsOp, AnalyticsOutcome, AnalyticsRequest, DashboardTab, DimensionFilter,
        RawRegionBreakdown,
    };
    use serde_json::json;

    /// Источник на фиксированном наборе отчетов, без сети
    struct FixedReports(Vec<RawModelReport>);

    #[async_trait]
    impl RecordSource for FixedReports {
        async fn fetch_reports(
            &self,
            _date_from: NaiveDate,
            _date_to: NaiveDate,
            model_id: Option<&str>,
        ) -> Result<Vec<RawModelReport>> {
            Ok(self
                .0
                .iter()
                .filter(|r| model_id.is_none() || r.model_id.as_deref() == model_id)
                .cloned()
                .collect())
        }
    }

    fn sample_report(model_id: &str, contracts: u64, price: f64) -> RawModelReport {
        RawModelReport {
            model_id: Some(model_id.to_string()),
            regions: vec![RawRegionBreakdown {
                region_id: Some("tashkent".to_string()),
                total_contracts: Some(json!(contracts)),
                total_price: Some(json!(price)),
                period: None,
            }],
        }
    }

    #[tokio::test]
    async fn test_fetched_reports_flow_through_the_dispatcher() {
        let source: Box<dyn RecordSource> = Box::new(FixedReports(vec![
            sample_report("cobalt", 4, 2000.0),
            sample_report("nexia", 9, 9000.0),
        ]));

        let reports = source
            .fetch_reports(
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
                Some("cobalt"),
            )
            .await
            .unwrap();

        let dispatcher = AnalyticsDispatcher::spawn();
        let response = dispatcher
            .submit(AnalyticsRequest::new(AnalyticsOp::Aggregate {
                reports,
                region: DimensionFilter::All,
                model: DimensionFilter::All,
                tab: DashboardTab::Sales,
            }))
            .await
            .unwrap();

        match response.outcome.unwrap() {
            AnalyticsOutcome::Totals(totals) => {
                assert_eq!(totals.count, 4);
                assert_eq!(totals.amount, 2000.0);
                assert_eq!(totals.average, 500);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unknown_model_yields_empty_batch_not_error() {
        let source = FixedReports(vec![sample_report("cobalt", 4, 2000.0)]);

        let reports = source
            .fetch_reports(
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
                Some("matiz"),
            )
            .await
            .unwrap();

        assert!(reports.is_empty());
    }
}
