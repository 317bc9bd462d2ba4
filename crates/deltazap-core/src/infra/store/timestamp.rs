// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, TimeZone, Utc};

pub(crate) fn to_millis(date: &DateTime<Utc>) -> i64 {
    date.timestamp_millis()
}

pub(crate) fn from_millis(millis: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis() {
        let date = Utc.with_ymd_and_hms(2024, 2, 29, 8, 30, 15).unwrap();
        assert_eq!(from_millis(to_millis(&date)), date);
    }
}
