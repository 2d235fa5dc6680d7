//! Spendwise - personal finance tracking core
//!
//! Records income and expense transactions against categories, evaluates
//! per-category spending budgets over weekly, monthly or yearly periods, and
//! raises alerts when a budget reaches its threshold.
//!
//! # Architecture
//!
//! - `models`: records and value types (transactions, categories, budgets, money)
//! - `storage`: in-memory collections persisted through a `DocumentStore`
//! - `services`: budget evaluation, filtering/aggregation and CRUD services
//! - `alert`: threshold policy and alert fan-out
//! - `reports` / `export`: read-only views and data export
//! - `cli` / `display`: terminal front end
//! - `config` / `logging` / `error`: ambient plumbing
//!
//! # Example
//!
//! ```rust,ignore
//! use spendwise::config::{Settings, SpendwisePaths};
//! use spendwise::storage::Storage;
//!
//! let paths = SpendwisePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(&paths, &settings)?;
//! let alerts = storage.subscribe();
//! ```

pub mod alert;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SpendwiseError, SpendwiseResult, ValidationError};
