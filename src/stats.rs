use crate::analyzers::types::PriceSummary;
use crate::analyzers::utility::{mean, median};
use crate::ticket::Ticket;

impl PriceSummary {
    /// Summarises `prices`, or `None` when there is nothing to summarise.
    pub fn from_prices(prices: &[u64]) -> Option<Self> {
        if prices.is_empty() {
            return None;
        }
        let mean = mean(prices);
        let median = median(prices);
        Some(PriceSummary {
            mean,
            median,
            difference: (mean - median).abs(),
        })
    }

    pub fn from_tickets(tickets: &[Ticket]) -> Option<Self> {
        let prices: Vec<u64> = tickets.iter().map(|t| t.price).collect();
        Self::from_prices(&prices)
    }
}
