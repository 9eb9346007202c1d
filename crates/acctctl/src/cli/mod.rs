//! Command handlers

pub mod account;
