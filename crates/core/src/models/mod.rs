pub mod fluctuation;
pub mod stock;
pub mod timeline;
