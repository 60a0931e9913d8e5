//! JSON loader for ticket documents.
//!
//! Every record is read field by field so a failure names the offending
//! ticket index and key. Loading is all-or-nothing: the first bad record
//! aborts the whole load.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{AnalyzerError, Result};
use crate::ticket::{Ticket, TicketDocument};

/// Reads and parses the ticket document at `path`.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_tickets(path: &Path) -> Result<Vec<Ticket>> {
    let content = fs::read_to_string(path).map_err(|source| AnalyzerError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(bytes = content.len(), "Ticket document read");
    parse_tickets(&content)
}

/// Parses a ticket document from text, preserving input order.
pub fn parse_tickets(content: &str) -> Result<Vec<Ticket>> {
    // Files exported from some editors start with a byte order mark.
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let root: Value = serde_json::from_str(content)?;

    let entries = root
        .get("tickets")
        .and_then(Value::as_array)
        .ok_or(AnalyzerError::MissingTickets)?;

    let tickets = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_ticket(index, entry))
        .collect::<Result<Vec<_>>>()?;

    debug!(count = tickets.len(), "Tickets parsed");
    Ok(tickets)
}

/// Serializes tickets into the same document shape [`parse_tickets`] accepts.
pub fn encode_tickets(tickets: &[Ticket]) -> Result<String> {
    let document = TicketDocument {
        tickets: tickets.to_vec(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

fn parse_ticket(index: usize, entry: &Value) -> Result<Ticket> {
    let object = entry.as_object().ok_or_else(|| AnalyzerError::Parse {
        index,
        field: "<record>",
        reason: "is not an object".to_string(),
    })?;

    Ok(Ticket {
        origin_name: text_field(object, index, "origin_name")?,
        destination_name: text_field(object, index, "destination_name")?,
        departure_date: text_field(object, index, "departure_date")?,
        departure_time: text_field(object, index, "departure_time")?,
        arrival_date: text_field(object, index, "arrival_date")?,
        arrival_time: text_field(object, index, "arrival_time")?,
        carrier: text_field(object, index, "carrier")?,
        price: price_field(object, index, "price")?,
    })
}

fn required<'a>(
    object: &'a Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<&'a Value> {
    object.get(field).ok_or_else(|| AnalyzerError::Parse {
        index,
        field,
        reason: "is missing".to_string(),
    })
}

fn text_field(object: &Map<String, Value>, index: usize, field: &'static str) -> Result<String> {
    match required(object, index, field)? {
        Value::String(s) => Ok(s.clone()),
        other => Err(AnalyzerError::Parse {
            index,
            field,
            reason: format!("must be a string, found {}", kind(other)),
        }),
    }
}

fn price_field(object: &Map<String, Value>, index: usize, field: &'static str) -> Result<u64> {
    let value = required(object, index, field)?;
    value.as_u64().ok_or_else(|| AnalyzerError::Parse {
        index,
        field,
        reason: format!("must be a non-negative integer, found {}", describe(value)),
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Number(n) => n.to_string(),
        other => kind(other).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "tickets": [
                {
                    "origin": "VVO",
                    "origin_name": "Владивосток",
                    "destination": "TLV",
                    "destination_name": "Тель-Авив",
                    "departure_date": "12.05.18",
                    "departure_time": "16:20",
                    "arrival_date": "12.05.18",
                    "arrival_time": "22:10",
                    "carrier": "TK",
                    "stops": 3,
                    "price": 12400
                },
                {
                    "origin_name": "Уфа",
                    "destination_name": "Ларнака",
                    "departure_date": "12.05.18",
                    "departure_time": "9:40",
                    "arrival_date": "12.05.18",
                    "arrival_time": "11:50",
                    "carrier": "S7",
                    "price": 13100
                }
            ]
        }"#
    }

    #[test]
    fn test_parse_preserves_order_and_ignores_extra_keys() {
        let tickets = parse_tickets(sample_json()).unwrap();

        assert_eq!(tickets.len(), 2);
        assert_eq!(tickets[0].carrier, "TK");
        assert_eq!(tickets[0].price, 12400);
        assert_eq!(tickets[1].origin_name, "Уфа");
        assert_eq!(tickets[1].departure_time, "9:40");
    }

    #[test]
    fn test_parse_strips_byte_order_mark() {
        let with_bom = format!("\u{feff}{}", sample_json());
        let tickets = parse_tickets(&with_bom).unwrap();
        assert_eq!(tickets.len(), 2);
    }

    #[test]
    fn test_parse_empty_list() {
        let tickets = parse_tickets(r#"{"tickets": []}"#).unwrap();
        assert!(tickets.is_empty());
    }

    #[test]
    fn test_missing_tickets_key() {
        let err = parse_tickets(r#"{"flights": []}"#).unwrap_err();
        assert!(matches!(err, AnalyzerError::MissingTickets));
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_tickets(r#"{"tickets": [}"#).unwrap_err();
        assert!(matches!(err, AnalyzerError::Document(_)));
    }

    #[test]
    fn test_missing_field_names_index_and_field() {
        let json = sample_json().replace(r#""carrier": "S7","#, "");
        let err = parse_tickets(&json).unwrap_err();

        match err {
            AnalyzerError::Parse { index, field, .. } => {
                assert_eq!(index, 1);
                assert_eq!(field, "carrier");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let json = sample_json().replace(r#""price": 12400"#, r#""price": "12400""#);
        let err = parse_tickets(&json).unwrap_err();

        match err {
            AnalyzerError::Parse { index, field, reason } => {
                assert_eq!(index, 0);
                assert_eq!(field, "price");
                assert!(reason.contains("a string"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let json = sample_json().replace("13100", "-1");
        let err = parse_tickets(&json).unwrap_err();
        assert!(matches!(err, AnalyzerError::Parse { index: 1, field: "price", .. }));
    }

    #[test]
    fn test_encode_then_parse_yields_equal_tickets() {
        let tickets = parse_tickets(sample_json()).unwrap();
        let encoded = encode_tickets(&tickets).unwrap();
        assert_eq!(parse_tickets(&encoded).unwrap(), tickets);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_tickets(Path::new("/definitely/not/here/tickets.json")).unwrap_err();
        assert!(matches!(err, AnalyzerError::Io { .. }));
    }
}
