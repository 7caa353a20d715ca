//! Scoring and localisation core for the evaluation-proctoring console.
//!
//! The console itself is CRUD-over-REST; the pieces that carry real logic live here:
//! the penalty scorer that turns a behaviour report into a weighted score card, and the
//! localiser that renders backend UTC timestamps in a viewer's time zone.

pub mod analysis;
pub mod config;
pub mod error;
pub mod schedule;
pub mod telemetry;
