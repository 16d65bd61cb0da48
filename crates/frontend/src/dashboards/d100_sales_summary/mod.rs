pub mod api;
pub mod controller;
pub mod projection;
pub mod ui;
