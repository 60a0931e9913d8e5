use tracing::debug;

use crate::analyzers::types::CarrierDurations;
use crate::config::DurationPolicy;
use crate::duration::flight_minutes;
use crate::error::{AnalyzerError, Result};
use crate::ticket::Ticket;

/// Folds tickets into the minimum flight time per carrier.
///
/// The first ticket whose schedule cannot be parsed aborts the fold. Under
/// [`DurationPolicy::RejectNegative`] a negative duration aborts it too.
pub fn min_duration_by_carrier(
    tickets: &[Ticket],
    policy: DurationPolicy,
) -> Result<CarrierDurations> {
    let mut durations = CarrierDurations::default();

    for ticket in tickets {
        let minutes = flight_minutes(ticket)?;

        if minutes < 0 && policy == DurationPolicy::RejectNegative {
            return Err(AnalyzerError::NegativeDuration {
                carrier: ticket.carrier.clone(),
                minutes,
            });
        }

        durations.record(&ticket.carrier, minutes);
    }

    debug!(carriers = durations.len(), "Carrier minimums computed");
    Ok(durations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(carrier: &str, dep_time: &str, arr_time: &str) -> Ticket {
        Ticket {
            origin_name: "A".to_string(),
            destination_name: "B".to_string(),
            departure_date: "12.05.18".to_string(),
            departure_time: dep_time.to_string(),
            arrival_date: "12.05.18".to_string(),
            arrival_time: arr_time.to_string(),
            carrier: carrier.to_string(),
            price: 100,
        }
    }

    fn sample() -> Vec<Ticket> {
        vec![
            ticket("TK", "10:00", "12:30"),
            ticket("S7", "6:00", "9:00"),
            ticket("TK", "11:00", "12:40"),
            ticket("SU", "8:15", "8:45"),
            ticket("S7", "7:00", "12:00"),
        ]
    }

    #[test]
    fn test_keeps_minimum_per_carrier() {
        let d = min_duration_by_carrier(&sample(), DurationPolicy::PassThrough).unwrap();

        assert_eq!(d.len(), 3);
        assert_eq!(d.get("TK"), Some(100));
        assert_eq!(d.get("S7"), Some(180));
        assert_eq!(d.get("SU"), Some(30));
    }

    #[test]
    fn test_minimum_bounds_every_duration() {
        let tickets = sample();
        let d = min_duration_by_carrier(&tickets, DurationPolicy::PassThrough).unwrap();

        for t in &tickets {
            let minutes = flight_minutes(t).unwrap();
            assert!(d.get(&t.carrier).unwrap() <= minutes);
        }
    }

    #[test]
    fn test_order_does_not_matter() {
        let mut reversed = sample();
        reversed.reverse();

        assert_eq!(
            min_duration_by_carrier(&sample(), DurationPolicy::PassThrough).unwrap(),
            min_duration_by_carrier(&reversed, DurationPolicy::PassThrough).unwrap(),
        );
    }

    #[test]
    fn test_merge_of_partial_folds_matches_full_fold() {
        let tickets = sample();
        let (left, right) = tickets.split_at(2);

        let merged = min_duration_by_carrier(right, DurationPolicy::PassThrough)
            .unwrap()
            .merge(min_duration_by_carrier(left, DurationPolicy::PassThrough).unwrap());

        assert_eq!(
            merged,
            min_duration_by_carrier(&tickets, DurationPolicy::PassThrough).unwrap()
        );
    }

    #[test]
    fn test_empty_input() {
        let d = min_duration_by_carrier(&[], DurationPolicy::PassThrough).unwrap();
        assert!(d.is_empty());
    }

    #[test]
    fn test_bad_schedule_aborts() {
        let mut tickets = sample();
        tickets[3].departure_time = "25:99".to_string();

        let err = min_duration_by_carrier(&tickets, DurationPolicy::PassThrough).unwrap_err();
        assert!(matches!(err, AnalyzerError::Format { .. }));
    }

    #[test]
    fn test_negative_duration_policy() {
        let tickets = vec![ticket("TK", "12:00", "10:00")];

        let d = min_duration_by_carrier(&tickets, DurationPolicy::PassThrough).unwrap();
        assert_eq!(d.get("TK"), Some(-120));

        let err = min_duration_by_carrier(&tickets, DurationPolicy::RejectNegative).unwrap_err();
        assert!(matches!(
            err,
            AnalyzerError::NegativeDuration { minutes: -120, .. }
        ));
    }
}
