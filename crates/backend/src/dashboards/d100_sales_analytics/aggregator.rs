use contracts::dashboards::d100_sales_analytics::{AggregationTotals, DashboardTab, SalesRecord};

/// Свертка записей в итоги по вкладке дашборда.
///
/// Множитель вкладки применяется до вычисления среднего; для всех
/// известных вкладок (и любой нераспознанной) он единичный.
pub fn aggregate(records: &[SalesRecord], tab: DashboardTab) -> AggregationTotals {
    let count: u64 = records.iter().map(|r| r.contract_count).sum();
    let amount: f64 = records.iter().map(|r| r.total_amount).sum();

    let (count_mult, amount_mult) = tab.multiplier();
    let count = count * count_mult;
    let amount = amount * amount_mult;

    AggregationTotals {
        count,
        amount,
        average: average_of(amount, count),
    }
}

/// Средний чек: арифметическое округление half-up, не банковское.
/// amount=5, count=2 дает 3 (а не 2).
fn average_of(amount: f64, count: u64) -> u64 {
    if count == 0 {
        0
    } else {
        (amount / count as f64).round() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(count: u64, amount: f64) -> SalesRecord {
        SalesRecord {
            model_id: "m1".to_string(),
            region_id: "r1".to_string(),
            contract_count: count,
            total_amount: amount,
            period: None,
        }
    }

    #[test]
    fn test_totals_are_sums_over_input() {
        let records = vec![record(3, 300.0), record(7, 1400.0)];
        let totals = aggregate(&records, DashboardTab::Sales);

        assert_eq!(totals.count, 10);
        assert_eq!(totals.amount, 1700.0);
        assert_eq!(totals.average, 170);
    }

    #[test]
    fn test_empty_input_yields_zero_totals() {
        let totals = aggregate(&[], DashboardTab::Sales);
        assert_eq!(totals, AggregationTotals::zero());
    }

    #[test]
    fn test_average_is_zero_when_count_is_zero() {
        // Записи без контрактов, но с суммой — среднее не делится на 0
        let records = vec![record(0, 500.0)];
        let totals = aggregate(&records, DashboardTab::Finance);
        assert_eq!(totals.count, 0);
        assert_eq!(totals.average, 0);
    }

    #[test]
    fn test_average_rounds_half_up_at_boundary() {
        // 5 / 2 = 2.5 -> 3 при арифметическом округлении
        let records = vec![record(2, 5.0)];
        let totals = aggregate(&records, DashboardTab::Sales);
        assert_eq!(totals.average, 3);

        // 7 / 2 = 3.5 -> 4, банковское округление дало бы 4 тоже,
        // а 2.5 выше отличает half-up от half-to-even
        let records = vec![record(2, 7.0)];
        let totals = aggregate(&records, DashboardTab::Sales);
        assert_eq!(totals.average, 4);
    }

    #[test]
    fn test_every_tab_uses_identity_multiplier() {
        let records = vec![record(4, 1000.0)];
        for tab in [
            DashboardTab::Sales,
            DashboardTab::Warehouse,
            DashboardTab::Finance,
            DashboardTab::Production,
            DashboardTab::Unknown,
        ] {
            let totals = aggregate(&records, tab);
            assert_eq!(totals.count, 4);
            assert_eq!(totals.amount, 1000.0);
            assert_eq!(totals.average, 250);
        }
    }
}
