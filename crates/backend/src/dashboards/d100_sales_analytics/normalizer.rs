use contracts::dashboards::d100_sales_analytics::{RawModelReport, SalesRecord, UNKNOWN_ID};
use serde_json::Value;

/// Нормализация сырых отчетов в канонические записи.
///
/// На выходе одна запись на каждую пару (модель, регион) из входа.
/// Никогда не возвращает ошибку: битое поле дает нулевой вклад,
/// а не срыв всей пачки.
pub fn normalize(reports: &[RawModelReport]) -> Vec<SalesRecord> {
    let mut records = Vec::new();

    for report in reports {
        let model_id = normalize_id(report.model_id.as_deref());

        for region in &report.regions {
            records.push(SalesRecord {
                model_id: model_id.clone(),
                region_id: normalize_id(region.region_id.as_deref()),
                contract_count: parse_count(region.total_contracts.as_ref()),
                total_amount: parse_amount(region.total_price.as_ref()),
                period: region.period.clone().filter(|p| !p.trim().is_empty()),
            });
        }
    }

    records
}

/// Пустой или отсутствующий идентификатор заменяется на "unknown"
fn normalize_id(id: Option<&str>) -> String {
    match id {
        Some(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => UNKNOWN_ID.to_string(),
    }
}

/// Количество контрактов: неотрицательное целое, иначе 0
fn parse_count(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::Number(n)) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|v| v.is_finite() && *v > 0.0)
                .map(|v| v as u64)
        }),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<u64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite() && *v > 0.0)
                    .map(|v| v as u64)
            })
        }
        _ => None,
    }
    .unwrap_or(0)
}

/// Сумма: неотрицательное число, иначе 0
fn parse_amount(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed.filter(|v| v.is_finite() && *v >= 0.0).unwrap_or(0.0)
}
