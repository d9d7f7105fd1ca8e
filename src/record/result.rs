//! Result records and their tabular form.

use crate::session::Session;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Column headers of a results table, in order.
pub const COLUMNS: [&str; 3] = ["Name", "Attempts", "Date"];

/// Persisted summary of a solved game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Player name, `None` when the player stayed anonymous
    pub player_name: Option<String>,
    pub attempt_count: u32,
    pub timestamp: DateTime<Utc>,
}

impl ResultRecord {
    /// Summarize a session. Blank names are treated as anonymous.
    pub fn from_session(session: &Session, player_name: Option<&str>, now: DateTime<Utc>) -> Self {
        let player_name = player_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        Self {
            player_name,
            attempt_count: session.attempt_count(),
            timestamp: now,
        }
    }

    pub fn to_row(&self) -> ResultRow {
        ResultRow {
            name: self.player_name.clone().unwrap_or_default(),
            attempts: self.attempt_count,
            date: self.timestamp,
        }
    }
}

/// One row of the results table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Attempts")]
    pub attempts: u32,
    #[serde(rename = "Date")]
    pub date: DateTime<Utc>,
}

impl From<ResultRow> for ResultRecord {
    fn from(row: ResultRow) -> Self {
        Self {
            player_name: (!row.name.is_empty()).then_some(row.name),
            attempt_count: row.attempts,
            timestamp: row.date,
        }
    }
}

/// Best results first: fewest attempts, then earliest.
pub fn rank(mut records: Vec<ResultRecord>) -> Vec<ResultRecord> {
    records.sort_by(|a, b| {
        a.attempt_count
            .cmp(&b.attempt_count)
            .then(a.timestamp.cmp(&b.timestamp))
    });
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Secret, ALPHABET};
    use chrono::Duration;

    fn solved_session() -> Session {
        let mut session = Session::with_secret(Secret::from_symbols(ALPHABET).unwrap());
        session.submit_guess("dcba").unwrap();
        session.submit_guess("abcd").unwrap();
        session
    }

    #[test]
    fn record_captures_attempts_and_name() {
        let now = Utc::now();
        let record = ResultRecord::from_session(&solved_session(), Some("  Ada "), now);

        assert_eq!(record.player_name.as_deref(), Some("Ada"));
        assert_eq!(record.attempt_count, 2);
        assert_eq!(record.timestamp, now);
    }

    #[test]
    fn blank_name_is_anonymous() {
        let record = ResultRecord::from_session(&solved_session(), Some("   "), Utc::now());
        assert!(record.player_name.is_none());
        assert_eq!(record.to_row().name, "");
    }

    #[test]
    fn row_converts_back_to_record() {
        let record = ResultRecord {
            player_name: Some("Grace".to_string()),
            attempt_count: 5,
            timestamp: Utc::now(),
        };
        assert_eq!(ResultRecord::from(record.to_row()), record);
    }

    #[test]
    fn rank_orders_by_attempts_then_time() {
        let t0 = Utc::now();
        let make = |name: &str, attempts, offset| ResultRecord {
            player_name: Some(name.to_string()),
            attempt_count: attempts,
            timestamp: t0 + Duration::seconds(offset),
        };

        let ranked = rank(vec![make("late", 2, 10), make("slow", 6, 0), make("early", 2, 0)]);
        let names: Vec<_> = ranked
            .iter()
            .map(|r| r.player_name.clone().unwrap())
            .collect();
        assert_eq!(names, vec!["early", "late", "slow"]);
    }
}
