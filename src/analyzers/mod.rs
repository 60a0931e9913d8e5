//! Ticket aggregation.
//!
//! This module folds route-filtered tickets into per-carrier minimum flight
//! times and a price summary, and wires the load → filter → aggregate steps
//! into a single run.

pub mod aggregate;
pub mod analyzer;
pub mod types;
pub mod utility;
