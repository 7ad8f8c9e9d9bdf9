pub mod price_evolver;
pub mod timeline_service;
