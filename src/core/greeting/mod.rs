//! The greeting domain.

pub mod greeting_model;
pub mod greeting_service;
