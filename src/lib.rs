//! A hello world greeting service, and a display component that fetches and renders its greeting.

pub mod api;
pub mod app;
pub mod core;
pub mod display;
pub mod infra;
