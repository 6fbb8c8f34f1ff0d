use axum::{http::StatusCode, Json};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use std::sync::Arc;

use contracts::dashboards::d100_sales_analytics::{
    AggregateParams, AggregationTotals, AnalyticsError, AnalyticsOp, AnalyticsOutcome,
    AnalyticsRequest, DimensionFilter, PeriodSeries, SeriesParams,
};

use crate::dashboards::d100_sales_analytics::{AnalyticsDispatcher, RecordSource, SalesApiClient};
use crate::shared::config;

static DISPATCHER: Lazy<AnalyticsDispatcher> = Lazy::new(AnalyticsDispatcher::spawn);

static SOURCE: Lazy<Arc<dyn RecordSource>> = Lazy::new(|| {
    let config = config::load_config().expect("Failed to load configuration");
    Arc::new(SalesApiClient::new(
        config.source.base_url,
        config.source.timeout_seconds,
    ))
});

fn model_narrowing(model: &DimensionFilter) -> Option<&str> {
    match model {
        DimensionFilter::All => None,
        DimensionFilter::Only(id) => Some(id.as_str()),
    }
}

/// Сбой внешнего источника: отдельный код, чтобы в логах он не
/// смешивался с внутренними ошибками движка
fn source_failure(err: anyhow::Error) -> AnalyticsError {
    AnalyticsError::external("Source API request failed").with_details(err.to_string())
}

/// POST /api/d100/analytics/aggregate
pub async fn aggregate(
    Json(params): Json<AggregateParams>,
) -> Result<Json<AggregationTotals>, StatusCode> {
    tracing::info!(
        "D100 Analytics: aggregate for {}..{}",
        params.begin_date,
        params.end_date
    );

    let reports = match SOURCE
        .fetch_reports(
            params.begin_date,
            params.end_date,
            model_narrowing(&params.model),
        )
        .await
    {
        Ok(reports) => reports,
        Err(e) => {
            tracing::error!("D100 Analytics: {}", source_failure(e));
            return Err(StatusCode::BAD_GATEWAY);
        }
    };

    let request = AnalyticsRequest::new(AnalyticsOp::Aggregate {
        reports,
        region: params.region,
        model: params.model,
        tab: params.tab,
    });

    match DISPATCHER.submit(request).await {
        Ok(response) => match response.outcome {
            Ok(AnalyticsOutcome::Totals(totals)) => Ok(Json(totals)),
            Ok(other) => {
                tracing::error!("D100 Analytics: mismatched outcome: {:?}", other);
                Err(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Err(e) => {
                tracing::error!("D100 Analytics: aggregation failed: {}", e);
                Err(StatusCode::INTERNAL_SERVER_ERROR)
            }
        },
        Err(e) => {
            tracing::error!("D100 Analytics: dispatch failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/d100/analytics/series
pub async fn series(Json(params): Json<SeriesParams>) -> Result<Json<PeriodSeries>, StatusCode> {
    tracing::info!(
        "D100 Analytics: {:?} series for year {}",
        params.granularity,
        params.year
    );

    let (Some(date_from), Some(date_to)) = (
        NaiveDate::from_ymd_opt(params.year, 1, 1),
        NaiveDate::from_ymd_opt(params.year, 12, 31),
    ) else {
        let err = AnalyticsError::validation(format!("Year {} is out of range", params.year));
        tracing::warn!("D100 Analytics: {}", err);
        return Err(StatusCode::BAD_REQUEST);
    };

    let reports = match SOURCE
        .fetch_reports(date_from, date_to, model_narrowing(&params.model))
        .await
    {
        Ok(reports) => reports,
        Err(e) => {
            tracing::error!("D100 Analytics: {}", source_failure(e));
            return Err(StatusCode::BAD_GATEWAY);
        }
    };

    let request = AnalyticsRequest::new(AnalyticsOp::PartitionYear {
        reports,
        region: params.region,
        model: params.model,
        year: params.year,
        granularity: params.granularity,
    });

    match DISPATCHER.submit(request).await {
        Ok(response) => match response.outcome {
            Ok(AnalyticsOutcome::Series(series)) => Ok(Json(series)),
            Ok(other) => {
                tracing::error!("D100 Analytics: mismatched outcome: {:?}", other);
                Err(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Err(e) => {
                tracing::error!("D100 Analytics: partitioning failed: {}", e);
                Err(StatusCode::INTERNAL_SERVER_ERROR)
            }
        },
        Err(e) => {
            tracing::error!("D100 Analytics: dispatch failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
