use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::record::RawModelReport;

/// Фильтр по измерению (регион или модель): "all" либо конкретный id
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DimensionFilter {
    #[default]
    All,
    Only(String),
}

impl DimensionFilter {
    pub fn only(id: impl Into<String>) -> Self {
        Self::Only(id.into())
    }

    /// Совпадает ли идентификатор с фильтром ("all" пропускает всё)
    pub fn matches(&self, id: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == id,
        }
    }
}

impl From<String> for DimensionFilter {
    fn from(value: String) -> Self {
        if value.is_empty() || value == "all" {
            Self::All
        } else {
            Self::Only(value)
        }
    }
}

impl From<DimensionFilter> for String {
    fn from(value: DimensionFilter) -> Self {
        match value {
            DimensionFilter::All => "all".to_string(),
            DimensionFilter::Only(id) => id,
        }
    }
}

/// Вкладка дашборда; задает множитель (count, amount) агрегата
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardTab {
    #[default]
    Sales,
    Warehouse,
    Finance,
    Production,
    /// Нераспознанная вкладка с фронтенда
    #[serde(other)]
    Unknown,
}

impl DashboardTab {
    /// Множитель (count, amount) для вкладки.
    ///
    /// TODO: подставить реальные коэффициенты, когда бизнес определит
    /// правила по вкладкам; пока таблица единичная для всех значений.
    pub fn multiplier(&self) -> (u64, f64) {
        match self {
            DashboardTab::Sales
            | DashboardTab::Warehouse
            | DashboardTab::Finance
            | DashboardTab::Production
            | DashboardTab::Unknown => (1, 1.0),
        }
    }
}

/// Гранулярность годового временного ряда
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodGranularity {
    #[default]
    Month,
    Quarter,
    Year,
}

impl PeriodGranularity {
    /// Число корзин в годовом ряду; не зависит от данных
    pub fn buckets_per_year(&self) -> usize {
        match self {
            PeriodGranularity::Month => 12,
            PeriodGranularity::Quarter => 4,
            PeriodGranularity::Year => 1,
        }
    }
}

/// Запрос к аналитическому движку.
///
/// `request_id` — корреляционный идентификатор: при параллельной отправке
/// ответы приходят в порядке завершения, сопоставление — только по id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsRequest {
    pub request_id: String,
    #[serde(flatten)]
    pub op: AnalyticsOp,
}

impl AnalyticsRequest {
    pub fn new(op: AnalyticsOp) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            op,
        }
    }
}

/// Операция движка — tagged-вариант с собственным payload
/// (вместо строкового `type` + switch у исходного воркера)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnalyticsOp {
    /// Итоги по отфильтрованному набору записей
    Aggregate {
        reports: Vec<RawModelReport>,
        #[serde(default)]
        region: DimensionFilter,
        #[serde(default)]
        model: DimensionFilter,
        #[serde(default)]
        tab: DashboardTab,
    },

    /// Временной ряд за календарный год
    PartitionYear {
        reports: Vec<RawModelReport>,
        #[serde(default)]
        region: DimensionFilter,
        #[serde(default)]
        model: DimensionFilter,
        year: i32,
        #[serde(default)]
        granularity: PeriodGranularity,
    },

    /// Помесячный ряд за произвольный диапазон дат (включительно)
    PartitionRange {
        reports: Vec<RawModelReport>,
        #[serde(default)]
        region: DimensionFilter,
        #[serde(default)]
        model: DimensionFilter,
        date_from: NaiveDate,
        date_to: NaiveDate,
    },
}

/// Параметры HTTP-запроса итогов за период
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateParams {
    pub begin_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub region: DimensionFilter,
    #[serde(default)]
    pub model: DimensionFilter,
    #[serde(default)]
    pub tab: DashboardTab,
}

/// Параметры HTTP-запроса годового временного ряда
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesParams {
    pub year: i32,
    #[serde(default)]
    pub granularity: PeriodGranularity,
    #[serde(default)]
    pub region: DimensionFilter,
    #[serde(default)]
    pub model: DimensionFilter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_filter_wire_format() {
        let all: DimensionFilter = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(all, DimensionFilter::All);

        let only: DimensionFilter = serde_json::from_str("\"cobalt\"").unwrap();
        assert_eq!(only, DimensionFilter::only("cobalt"));

        assert_eq!(serde_json::to_string(&DimensionFilter::All).unwrap(), "\"all\"");
    }

    #[test]
    fn test_unknown_tab_falls_back_to_identity() {
        let tab: DashboardTab = serde_json::from_str("\"logistics\"").unwrap();
        assert_eq!(tab, DashboardTab::Unknown);
        assert_eq!(tab.multiplier(), (1, 1.0));
    }
}
