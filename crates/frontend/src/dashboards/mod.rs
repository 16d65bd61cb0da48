pub mod d100_sales_summary;

pub use d100_sales_summary::ui::SalesDashboardPage;
