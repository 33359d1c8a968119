//! Monthly Attendance Engine
//!
//! This crate resolves a single attendance status for every employee-day of a
//! calendar month from swipe-based attendance records, holiday calendars,
//! leave approvals and employment date bounds, and folds the result into
//! present/leave/absent totals for a tabular monthly report.
//!
//! The engine is pure: it works on already-loaded snapshots and takes the
//! current date and time as an explicit argument. The [`api`] module exposes
//! it over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
