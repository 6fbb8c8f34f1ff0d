use chrono::{Datelike, NaiveDate};
use contracts::dashboards::d100_sales_analytics::{
    PeriodBucket, PeriodGranularity, PeriodSeries, SalesRecord,
};

/// Годовой временной ряд: ровно 12 корзин для месяцев, 4 для кварталов,
/// 1 для года — всегда, независимо от разреженности данных.
/// Корзины идут хронологически вне зависимости от порядка записей.
pub fn partition_year(
    records: &[SalesRecord],
    year: i32,
    granularity: PeriodGranularity,
) -> PeriodSeries {
    let slots = granularity.buckets_per_year();
    let mut buckets: Vec<PeriodBucket> = (0..slots)
        .map(|i| PeriodBucket::zero(slot_label(year, i, granularity)))
        .collect();

    for record in records {
        let Some((record_year, month)) = parse_period_key(record.period.as_deref()) else {
            continue;
        };
        if record_year != year {
            continue;
        }

        let idx = match granularity {
            PeriodGranularity::Month => (month - 1) as usize,
            PeriodGranularity::Quarter => ((month - 1) / 3) as usize,
            PeriodGranularity::Year => 0,
        };
        buckets[idx].count += record.contract_count;
        buckets[idx].amount += record.total_amount;
    }

    PeriodSeries { buckets }
}

/// Помесячный ряд за диапазон дат (включительно).
/// Длина ряда определяется диапазоном; месяцы без данных — нулевые корзины.
pub fn partition_range(
    records: &[SalesRecord],
    date_from: NaiveDate,
    date_to: NaiveDate,
) -> PeriodSeries {
    let mut slots: Vec<(i32, u32)> = Vec::new();
    let (mut year, mut month) = (date_from.year(), date_from.month());
    while (year, month) <= (date_to.year(), date_to.month()) {
        slots.push((year, month));
        if month == 12 {
            year += 1;
            month = 1;
        } else {
            month += 1;
        }
    }

    let mut buckets: Vec<PeriodBucket> = slots
        .iter()
        .map(|(y, m)| PeriodBucket::zero(format!("{:04}-{:02}", y, m)))
        .collect();

    for record in records {
        let Some(key) = parse_period_key(record.period.as_deref()) else {
            continue;
        };
        if let Some(idx) = slots.iter().position(|slot| *slot == key) {
            buckets[idx].count += record.contract_count;
            buckets[idx].amount += record.total_amount;
        }
    }

    PeriodSeries { buckets }
}

fn slot_label(year: i32, index: usize, granularity: PeriodGranularity) -> String {
    match granularity {
        PeriodGranularity::Month => format!("{:04}-{:02}", year, index + 1),
        PeriodGranularity::Quarter => format!("{:04}-Q{}", year, index + 1),
        PeriodGranularity::Year => format!("{:04}", year),
    }
}

/// Ключ периода "YYYY-MM" или "YYYY-MM-DD" -> (год, месяц)
fn parse_period_key(period: Option<&str>) -> Option<(i32, u32)> {
    let mut parts = period?.trim().splitn(3, '-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = parts.next()?.parse::<u32>().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}
