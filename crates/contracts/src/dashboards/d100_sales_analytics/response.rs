use serde::{Deserialize, Serialize};

use super::error::AnalyticsResult;

/// Итоги агрегации
///
/// `average` всегда выводится из `count` и `amount` и никогда не хранится
/// независимо, чтобы исключить расхождение.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationTotals {
    pub count: u64,
    pub amount: f64,
    /// round(amount / count); 0 при count == 0
    pub average: u64,
}

impl AggregationTotals {
    pub fn zero() -> Self {
        Self {
            count: 0,
            amount: 0.0,
            average: 0,
        }
    }
}

/// Одна корзина временного ряда
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodBucket {
    /// Метка периода: "YYYY-MM", "YYYY-Qn" или "YYYY"
    pub period: String,
    pub count: u64,
    pub amount: f64,
}

impl PeriodBucket {
    pub fn zero(period: impl Into<String>) -> Self {
        Self {
            period: period.into(),
            count: 0,
            amount: 0.0,
        }
    }
}

/// Временной ряд фиксированной длины.
/// Длина определяется запросом, а не данными — пустые периоды
/// представлены нулевыми корзинами (стабильность осей графиков).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSeries {
    pub buckets: Vec<PeriodBucket>,
}

/// Результат операции движка
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyticsOutcome {
    Totals(AggregationTotals),
    Series(PeriodSeries),
}

/// Ответ движка; `request_id` повторяет идентификатор запроса
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsResponse {
    pub request_id: String,
    pub outcome: AnalyticsResult<AnalyticsOutcome>,
}
