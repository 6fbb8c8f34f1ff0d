use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Идентификатор-заглушка для записей без model_id / region_id
pub const UNKNOWN_ID: &str = "unknown";

/// Сырой отчет по одной модели из внешнего REST-источника.
///
/// Имена полей (`model_id`, `region_id`, `total_contracts`, `total_price`)
/// сохранены как в API источника. Числовые поля могут прийти числом,
/// строкой или null — нормализатор приводит их к каноническому виду.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawModelReport {
    #[serde(default)]
    pub model_id: Option<String>,

    /// Разбивка по регионам
    #[serde(default)]
    pub regions: Vec<RawRegionBreakdown>,
}

/// Строка разбивки по региону внутри отчета модели
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRegionBreakdown {
    #[serde(default)]
    pub region_id: Option<String>,

    /// Количество контрактов (число, строка или null)
    #[serde(default)]
    pub total_contracts: Option<Value>,

    /// Сумма по контрактам (число, строка или null)
    #[serde(default)]
    pub total_price: Option<Value>,

    /// Ключ периода "YYYY-MM" или "YYYY-MM-DD"
    #[serde(default)]
    pub period: Option<String>,
}

/// Каноническая запись (модель, регион) после нормализации.
///
/// Инвариант: числовые поля всегда заданы и неотрицательны,
/// идентификаторы не пустые (fallback — [`UNKNOWN_ID`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub model_id: String,
    pub region_id: String,
    pub contract_count: u64,
    pub total_amount: f64,
    /// Ключ периода для партиционирования временных рядов
    pub period: Option<String>,
}
