use contracts::dashboards::d100_sales_analytics::{DimensionFilter, SalesRecord};

/// Отбор записей по региону и модели.
///
/// Вход не изменяется, результат — новый вектор. Пустой результат —
/// штатная ситуация (нулевые итоги), не ошибка. Порядок применения
/// измерений не влияет на результат.
pub fn apply(
    records: &[SalesRecord],
    region: &DimensionFilter,
    model: &DimensionFilter,
) -> Vec<SalesRecord> {
    records
        .iter()
        .filter(|r| region.matches(&r.region_id) && model.matches(&r.model_id))
        .cloned()
        .collect()
}
