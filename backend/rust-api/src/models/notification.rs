use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Tables that publish change notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Table {
    Events,
    Registrations,
}

impl Table {
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Events => "events",
            Table::Registrations => "registrations",
        }
    }
}

impl FromStr for Table {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "events" => Ok(Table::Events),
            "registrations" => Ok(Table::Registrations),
            other => Err(format!("unknown table {:?}", other)),
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Insert,
    Update,
    Delete,
}

/// Row-level change signal sent over `/realtime`. Subscribers reload the table; `id` is informational.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeNotification {
    pub table: Table,
    pub kind: ChangeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
}

impl ChangeNotification {
    pub fn new(table: Table, kind: ChangeKind, id: Option<Uuid>) -> Self {
        Self { table, kind, id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_wire_shape() {
        let id = Uuid::nil();
        let json = serde_json::to_value(ChangeNotification::new(Table::Events, ChangeKind::Delete, Some(id))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "table": "events", "kind": "delete", "id": id.to_string() })
        );

        let json = serde_json::to_value(ChangeNotification::new(Table::Registrations, ChangeKind::Update, None)).unwrap();
        assert_eq!(json, serde_json::json!({ "table": "registrations", "kind": "update" }));
    }

    #[test]
    fn table_names_round_trip() {
        assert_eq!("events".parse::<Table>(), Ok(Table::Events));
        assert_eq!(Table::Registrations.to_string(), "registrations");
        assert!("profiles".parse::<Table>().is_err());
    }
}
