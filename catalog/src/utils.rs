use crate::error::EnrichmentError;
use crate::record::Hms;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // `P0D` for live streams, `P1DT2H3M` for videos longer than a day.
    static ref ISO8601_DURATION: Regex =
        Regex::new(r"^P(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?)?$")
            .expect("duration pattern is valid");
}

/// Parse an ISO8601 duration string (PT1H2M3S) into hours, minutes and seconds.
///
/// Omitted units count as zero and days fold into hours.
pub fn parse_iso8601_duration(duration_str: &str) -> Result<Hms, EnrichmentError> {
    let malformed = || EnrichmentError::MalformedDuration(duration_str.to_string());

    let captures = ISO8601_DURATION
        .captures(duration_str.trim())
        .ok_or_else(malformed)?;

    let unit = |index: usize| -> Result<u32, EnrichmentError> {
        match captures.get(index) {
            Some(m) => m.as_str().parse::<u32>().map_err(|_| malformed()),
            None => Ok(0),
        }
    };

    let days = unit(1)?;
    let hours = days
        .checked_mul(24)
        .and_then(|h| h.checked_add(unit(2).ok()?))
        .ok_or_else(malformed)?;

    Ok(Hms {
        hours,
        minutes: unit(3)?,
        seconds: unit(4)?,
    })
}

// Formats each x1000 step
pub fn format_number(number: u64) -> String {
    let num_str = number.to_string();
    let mut result = String::new();
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}
