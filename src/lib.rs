//! Browsing engine for a static article site: category filtering, free-text
//! search, pagination and view-model rendering over an in-memory store.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
