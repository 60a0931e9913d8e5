use std::path::Path;

use tracing::info;

use crate::analyzers::aggregate::min_duration_by_carrier;
use crate::analyzers::types::{PriceSummary, Report};
use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::filter::filter_route;
use crate::parser::load_tickets;
use crate::ticket::Ticket;

/// Loads the document at `path` and analyzes it. Nothing is returned unless
/// every stage succeeds.
pub fn analyze_file(path: &Path, config: &AnalyzerConfig) -> Result<Report> {
    let tickets = load_tickets(path)?;
    analyze(tickets, config)
}

/// Filters `tickets` to the configured route and builds the report.
#[tracing::instrument(
    skip_all,
    fields(origin = %config.route.origin, destination = %config.route.destination)
)]
pub fn analyze(tickets: Vec<Ticket>, config: &AnalyzerConfig) -> Result<Report> {
    let total = tickets.len();
    let matching = filter_route(tickets, &config.route);
    info!(total, matching = matching.len(), "Tickets filtered by route");

    let durations = min_duration_by_carrier(&matching, config.duration_policy)?;
    let prices = PriceSummary::from_tickets(&matching);

    Ok(Report::new(&config.route, &durations, prices))
}
