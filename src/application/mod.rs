pub mod browse;
pub mod dto;
pub mod error;
pub mod navigation;
pub mod ports;
pub mod queries;
pub mod render;
pub mod services;

pub use error::ApplicationResult;
