//! In-memory ticket records and the document shape they are loaded from.

use serde::{Deserialize, Serialize};

/// One flight offer as it appears in the input document.
///
/// Date and time fields are kept as text; they are only interpreted when a
/// duration is computed (see [`crate::duration`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub origin_name: String,
    pub destination_name: String,
    pub departure_date: String,
    pub departure_time: String,
    pub arrival_date: String,
    pub arrival_time: String,
    pub carrier: String,
    pub price: u64,
}

/// Top-level document: `{"tickets": [...]}`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TicketDocument {
    pub tickets: Vec<Ticket>,
}
