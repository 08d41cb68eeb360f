//! Work-hour synchronisation with BambooHR.
//!
//! This crate fetches the hours an employee logged in BambooHR, reports them
//! per day, fills unlogged workdays with generated clock entries and computes
//! the yearly required-hours baseline against a public holiday calendar.
//!
//! The calculation engine in [`calculation`] is pure; [`api`], [`holidays`]
//! and [`config`] handle I/O, and [`commands`] ties them together for the
//! `hours-sync` binary.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod commands;
pub mod config;
pub mod error;
pub mod holidays;
pub mod logging;
pub mod models;
pub mod render;
