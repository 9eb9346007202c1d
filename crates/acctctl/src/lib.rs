//! acctctl library interface

pub mod cli;
pub mod config;
pub mod db;

pub use config::Config;
pub use db::{Database, SqliteStore};
