//! Core domain modules for AuthSleuth.
//!
//! Contains the event data model, timestamp extraction, line
//! classification, the in-memory event store, report rendering, and the
//! directory scanner that ties them together.

pub mod classifier;
pub mod event_record;
pub mod event_store;
pub mod report;
pub mod scanner;
pub mod timestamp;
