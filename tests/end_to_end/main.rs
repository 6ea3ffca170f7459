//! End-to-end tests
//!
//! Drive the public facade the way an embedding application would:
//! - document pipeline (normalization, tokenization, hooks, n-grams)
//! - search strategies and ranking
//! - snapshots across instances and backends
//! - shared access from several threads
//! - config loaded from TOML

mod common;

mod concurrency;
mod configuration;
mod persistence;
mod pipeline;
mod strategies;
