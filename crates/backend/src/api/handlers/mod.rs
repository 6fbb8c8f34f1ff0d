// Dashboard handlers
pub mod d100_sales_analytics;
