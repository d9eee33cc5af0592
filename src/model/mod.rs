//! CloudFormation resource models for the CustomerProfiles resource types.

pub mod domain;
pub mod integration;
pub mod tag;

pub use domain::*;
pub use integration::*;
pub use tag::*;

use chrono::{DateTime, SecondsFormat, Utc};

/// Renders a service timestamp the way the resource schema exposes it (ISO-8601, UTC).
pub fn render_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_render_timestamp_uses_zulu_suffix() {
        let timestamp = Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap();
        assert_eq!(render_timestamp(timestamp), "2021-03-04T05:06:07Z");
    }
}
