//! Overview metric cards.

use serde::{Deserialize, Serialize};

wire_enum! {
    pub enum StatChangeType ("stat change type") {
        Positive => "positive",
        Negative => "negative",
        Neutral => "neutral",
    }
}

/// One pre-formatted metric card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatMetric {
    pub id: String,
    pub label: String,
    pub value: String,
    pub change: String,
    pub change_type: StatChangeType,
    pub icon_name: String,
    pub color: String,
}
