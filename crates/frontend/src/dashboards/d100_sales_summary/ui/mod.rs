pub mod dashboard;
pub mod upload;

pub use dashboard::SalesDashboardPage;
