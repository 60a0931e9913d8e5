//! Route filter.

use crate::config::Route;
use crate::ticket::Ticket;

impl Route {
    /// Exact, case-sensitive match on both city names.
    pub fn matches(&self, ticket: &Ticket) -> bool {
        ticket.origin_name == self.origin && ticket.destination_name == self.destination
    }
}

/// Keeps only the tickets flying `route`, in their original order.
pub fn filter_route(tickets: Vec<Ticket>, route: &Route) -> Vec<Ticket> {
    tickets.into_iter().filter(|t| route.matches(t)).collect()
}
