//! Timestamp capture and the fixed text formats embedded in generated
//! units.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime};

/// Format of the zone-less timestamp text (extended ISO-8601). The zoned
/// text uses RFC 3339. Generated units parse their constants back with
/// these same formats, so both must round-trip exactly.
pub const LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Two views of the instant a generation run started: a zone-less local
/// date-time and a zone-aware one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampPair {
    pub local: NaiveDateTime,
    pub zoned: DateTime<FixedOffset>,
}

impl TimestampPair {
    /// Captures both views from a single clock reading, before any text
    /// is emitted, so every timestamp constant in one run is
    /// self-consistent.
    pub fn capture() -> Self {
        let zoned = Local::now().fixed_offset();
        Self {
            local: zoned.naive_local(),
            zoned,
        }
    }

    pub fn local_text(&self) -> String {
        self.local.format(LOCAL_FORMAT).to_string()
    }

    pub fn zoned_text(&self) -> String {
        self.zoned.to_rfc3339()
    }
}
