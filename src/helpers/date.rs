//! Date helper functions

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use super::html::html_escape;

/// Format an API date string using a date-fns format string
///
/// Returns `None` for empty or unparsable input.
///
/// # Examples
/// ```ignore
/// format_date("2024-01-05T10:30:00Z", "MMM dd, yyyy", chrono_tz::UTC) // -> Some("Jan 05, 2024")
/// ```
pub fn format_date(date_string: &str, format: &str, tz: Tz) -> Option<String> {
    let date = parse_date(date_string)?.with_timezone(&tz);
    let chrono_format = date_fns_to_chrono_format(format);
    Some(date.format(&chrono_format).to_string())
}

/// Render a `<time>` element, or nothing when the date is missing or invalid
pub fn date_tag(date_string: &str, format: &str, tz: Tz) -> String {
    match format_date(date_string, format, tz) {
        Some(display) => format!(
            r#"<time datetime="{}">{}</time>"#,
            html_escape(date_string),
            html_escape(&display)
        ),
        None => String::new(),
    }
}

/// Year used by the footer copyright line
pub fn current_year(tz: Tz) -> i32 {
    Utc::now().with_timezone(&tz).year()
}

/// Parse RFC 3339, a naive timestamp (as UTC) or a bare date
pub fn parse_date(date_string: &str) -> Option<DateTime<Utc>> {
    let s = date_string.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(s) {
        return Some(date.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Convert date-fns tokens to chrono specifiers
///
/// Runs of the same letter form one token; text in single quotes is literal.
fn date_fns_to_chrono_format(format: &str) -> String {
    let chars: Vec<char> = format.chars().collect();
    let mut result = String::with_capacity(format.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\'' {
            i += 1;
            while i < chars.len() && chars[i] != '\'' {
                push_literal(&mut result, chars[i]);
                i += 1;
            }
            i += 1;
            continue;
        }

        let mut run = 1;
        while i + run < chars.len() && chars[i + run] == c {
            run += 1;
        }

        let spec = match (c, run) {
            ('y', 2) => Some("%y"),
            ('y', _) => Some("%Y"),
            ('M', 1) => Some("%-m"),
            ('M', 2) => Some("%m"),
            ('M', 3) => Some("%b"),
            ('M', _) => Some("%B"),
            ('d', 1) => Some("%-d"),
            ('d', _) => Some("%d"),
            ('E', 4) => Some("%A"),
            ('E', _) => Some("%a"),
            ('H', 1) => Some("%-H"),
            ('H', _) => Some("%H"),
            ('h', 1) => Some("%-I"),
            ('h', _) => Some("%I"),
            ('m', 1) => Some("%-M"),
            ('m', _) => Some("%M"),
            ('s', 1) => Some("%-S"),
            ('s', _) => Some("%S"),
            ('a', _) => Some("%p"),
            _ => None,
        };

        match spec {
            Some(spec) => result.push_str(spec),
            None => {
                for _ in 0..run {
                    push_literal(&mut result, c);
                }
            }
        }
        i += run;
    }

    result
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let tz = chrono_tz::UTC;
        assert_eq!(
            format_date("2024-01-05T10:30:00.000Z", "MMM dd, yyyy", tz).as_deref(),
            Some("Jan 05, 2024")
        );
        assert_eq!(
            format_date("2024-01-05", "yyyy/MM/dd", tz).as_deref(),
            Some("2024/01/05")
        );
    }

    #[test]
    fn test_format_date_in_timezone() {
        let tz: Tz = "America/New_York".parse().unwrap();
        assert_eq!(
            format_date("2024-01-05T02:00:00Z", "MMM d, yyyy", tz).as_deref(),
            Some("Jan 4, 2024")
        );
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(format_date("", "yyyy", chrono_tz::UTC), None);
        assert_eq!(format_date("yesterday", "yyyy", chrono_tz::UTC), None);
        assert_eq!(date_tag("  ", "yyyy", chrono_tz::UTC), "");
    }

    #[test]
    fn test_date_tag() {
        let html = date_tag("2024-03-09T08:00:00Z", "MMM dd, yyyy", chrono_tz::UTC);
        assert_eq!(
            html,
            r#"<time datetime="2024-03-09T08:00:00Z">Mar 09, 2024</time>"#
        );

        let padded = date_tag(" 2024-03-09T08:00:00Z ", "yyyy", chrono_tz::UTC);
        assert_eq!(padded, r#"<time datetime=" 2024-03-09T08:00:00Z ">2024</time>"#);
    }

    #[test]
    fn test_date_fns_to_chrono() {
        assert_eq!(date_fns_to_chrono_format("MMM dd, yyyy"), "%b %d, %Y");
        assert_eq!(date_fns_to_chrono_format("HH:mm:ss"), "%H:%M:%S");
        assert_eq!(date_fns_to_chrono_format("EEEE 'at' h a"), "%A at %-I %p");
        assert_eq!(date_fns_to_chrono_format("d%"), "%-d%%");
    }
}
