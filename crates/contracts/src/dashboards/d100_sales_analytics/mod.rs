pub mod error;
pub mod record;
pub mod request;
pub mod response;

pub use error::{AnalyticsError, AnalyticsResult};
pub use record::{RawModelReport, RawRegionBreakdown, SalesRecord, UNKNOWN_ID};
pub use request::{
    AggregateParams, AnalyticsOp, AnalyticsRequest, DashboardTab, DimensionFilter,
    PeriodGranularity, SeriesParams,
};
pub use response::{
    AggregationTotals, AnalyticsOutcome, AnalyticsResponse, PeriodBucket, PeriodSeries,
};
