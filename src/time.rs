use chrono::{DateTime, Utc};

pub type ServerTime = DateTime<Utc>;

/// Converts a unix timestamp from a response into a [`ServerTime`]. Returns `None` for
/// timestamps out of chrono's representable range.
pub fn timestamp_to_server_time(timestamp: u64) -> Option<ServerTime> {
    DateTime::from_timestamp(timestamp as i64, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_timestamps() {
        let time = timestamp_to_server_time(1063407589).unwrap();

        assert_eq!(time.timestamp(), 1063407589);
        assert_eq!(time.to_rfc3339(), "2003-09-12T22:59:49+00:00");
    }
}
