//! Data Service - schemaless JSON records over HTTP, backed by MongoDB.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
