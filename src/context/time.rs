use chrono::{DateTime, SecondsFormat, Utc};

pub trait TimeContext {
    fn current_time(&self) -> DateTime<Utc>;

    /// Millisecond-precision UTC timestamp, e.g. `2024-03-01T12:30:05.000Z`.
    fn timestamp(&self) -> String {
        self.current_time().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
