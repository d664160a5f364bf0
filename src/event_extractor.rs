//! # Event Text Extractor
//!
//! Extracts event fields (name, date, time, venue, address, guest count,
//! website, description) from unstructured flyer or invitation text. Every
//! field is independently optional; absence means "not found in the source
//! text", never an error.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Month-name alternation shared by the date patterns
const MONTH_PATTERN: &str = r"jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?";

/// Upper bound (exclusive) for a believable guest count
const MAX_GUEST_COUNT: u32 = 10_000;

/// Longest description kept, in characters
const MAX_DESCRIPTION_LEN: usize = 500;

lazy_static! {
    /// A line that starts with a field label rather than a name
    static ref FIELD_LABEL_RE: Regex = Regex::new(
        r"(?i)^(?:date|time|when|where|venue|location|address|rsvp|guests?|capacity|contact|phone|email|website|cost|price|tickets?|hosted)\b"
    )
    .expect("field label pattern should be valid");

    /// Numeric dates: "08/15/2025", "8-15-25"
    static ref NUMERIC_DATE_RE: Regex =
        Regex::new(r"\b(\d{1,2})[/\-.](\d{1,2})[/\-.](\d{2,4})\b")
            .expect("numeric date pattern should be valid");

    /// "March 3, 2026" / "Mar 3 2026"
    static ref MONTH_DD_YYYY_RE: Regex = Regex::new(&format!(
        r"(?i)\b({MONTH_PATTERN})\.?\s+(\d{{1,2}})(?:st|nd|rd|th)?\s*,?\s+(\d{{4}})\b"
    ))
    .expect("month-day-year pattern should be valid");

    /// "3 March 2026" / "3rd March 2026"
    static ref DD_MONTH_YYYY_RE: Regex = Regex::new(&format!(
        r"(?i)\b(\d{{1,2}})(?:st|nd|rd|th)?\s+({MONTH_PATTERN})\.?\s*,?\s+(\d{{4}})\b"
    ))
    .expect("day-month-year pattern should be valid");

    /// "Saturday, March 3, 2026"
    static ref WEEKDAY_DATE_RE: Regex = Regex::new(&format!(
        r"(?i)\b(?:mon|tues?|wednes|thurs?|fri|satur|sun)day\s*,?\s+({MONTH_PATTERN})\.?\s+(\d{{1,2}})(?:st|nd|rd|th)?\s*,?\s+(\d{{4}})\b"
    ))
    .expect("weekday date pattern should be valid");

    /// "6:00 PM", "6:00pm"
    static ref TIME_HHMM_RE: Regex = Regex::new(r"(?i)\b\d{1,2}:\d{2}\s*(?:a\.?m\.?|p\.?m\.?)")
        .expect("hh:mm time pattern should be valid");

    /// "6 PM"
    static ref TIME_HH_RE: Regex =
        Regex::new(r"(?i)\b\d{1,2}\s*(?:am|pm)\b").expect("hour time pattern should be valid");

    /// "18:00-21:00"; only the leading component is kept
    static ref TIME_RANGE_RE: Regex =
        Regex::new(r"\b(\d{1,2}:\d{2})\s*[-–—]\s*\d{1,2}:\d{2}\b")
            .expect("time range pattern should be valid");

    /// Labeled venue line: "Venue: Mountain Lodge"
    static ref VENUE_LABEL_RE: Regex = Regex::new(
        r"(?im)^[ \t]*(?:venue|location|where|held at)\s*[:\-–]\s*(\S[^\n]*)$"
    )
    .expect("venue label pattern should be valid");

    /// A line that is nothing but "at <place>"
    static ref AT_LINE_RE: Regex = Regex::new(r"(?im)^[ \t]*at\s+(\S[^\n]*)$")
        .expect("at-line pattern should be valid");

    /// Inline "at <Capitalized Place>" phrase
    static ref AT_PLACE_RE: Regex = Regex::new(
        r"\bat\s+([A-Z][A-Za-z0-9'&.-]*(?:\s+(?:[A-Z][A-Za-z0-9'&.-]*|of|the|and))*)"
    )
    .expect("at-place pattern should be valid");

    /// "123 Main Street ... 80302" street addresses
    static ref STREET_ADDRESS_RE: Regex = Regex::new(
        r"(?i)\b\d{1,6}\s+(?:[a-z'.-]+\s+){1,5}(?:street|st|avenue|ave|road|rd|boulevard|blvd|lane|ln|drive|dr|way|court|ct|place|pl|terrace|parkway|pkwy|highway|hwy)\b[^\n]{0,60}\b\d{5}(?:-\d{4})?\b"
    )
    .expect("street address pattern should be valid");

    /// "123 Anything, Boulder, CO 80302" addresses
    static ref CITY_STATE_ZIP_RE: Regex = Regex::new(
        r"\b\d{1,6}\s+[^,\n]{3,40},\s*[A-Za-z .]{2,30},\s*[A-Z]{2}\s+\d{5}(?:-\d{4})?\b"
    )
    .expect("city-state-zip pattern should be valid");

    /// "<N> guests/people/attendees/seats"
    static ref GUEST_COUNT_RE: Regex =
        Regex::new(r"(?i)\b(\d{1,5})\s*(?:guests?|people|persons?|attendees?|seats?)\b")
            .expect("guest count pattern should be valid");

    /// "guests: <N>" / "guest count: <N>" / "capacity of <N>"
    static ref GUEST_LABEL_RE: Regex = Regex::new(
        r"(?i)\b(?:guest count|guests?|capacity|attendance|headcount)\s*(?:of|:)?\s*(\d{1,5})\b"
    )
    .expect("guest label pattern should be valid");

    /// Labeled website: "Website: example.com"
    static ref WEBSITE_LABEL_RE: Regex = Regex::new(
        r"(?i)\b(?:website|site|web|rsvp at|register at)\s*:?\s*((?:https?://)?[\w.-]+\.[a-z]{2,}(?:/\S*)?)"
    )
    .expect("website label pattern should be valid");

    /// Bare domain-like token
    static ref BARE_URL_RE: Regex = Regex::new(
        r"(?i)\b((?:https?://\S+)|(?:www\.[\w.-]+(?:/\S*)?)|(?:[\w-]+\.(?:com|org|net|io|co|us|events|info)(?:/\S*)?))\b"
    )
    .expect("bare url pattern should be valid");
}

/// An event extracted from flyer or invitation text.
///
/// All fields are optional; `None` means "not found in the source text".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParsedEvent {
    /// Event display name
    pub name: Option<String>,
    /// Event date as an ISO `YYYY-MM-DD` string
    pub event_date: Option<String>,
    /// Start time kept verbatim as written (e.g., "6:00 PM")
    pub start_time: Option<String>,
    /// Venue name
    pub venue: Option<String>,
    /// Street address of the venue
    pub venue_address: Option<String>,
    /// Expected number of guests; always strictly between 0 and 10000
    pub guest_count: Option<u32>,
    /// Event website, normalized to an `https://` prefix
    pub website: Option<String>,
    /// Up to three descriptive lines, space-joined and truncated
    pub description: Option<String>,
}

/// Extract event fields from free-form flyer or invitation text.
///
/// Each field is extracted independently; a field that cannot be found is
/// `None` and never affects the others. The function never fails on any
/// string input.
///
/// # Examples
///
/// ```rust
/// use catering_import::event_extractor::extract_event_from_text;
///
/// let event = extract_event_from_text("Event on 08/15/2025 at 6:00 PM at Mountain Lodge");
/// assert_eq!(event.event_date.as_deref(), Some("2025-08-15"));
/// assert_eq!(event.start_time.as_deref(), Some("6:00 PM"));
/// assert_eq!(event.venue.as_deref(), Some("Mountain Lodge"));
/// ```
pub fn extract_event_from_text(text: &str) -> ParsedEvent {
    if text.trim().is_empty() {
        return ParsedEvent::default();
    }

    let event = ParsedEvent {
        name: extract_name(text),
        event_date: extract_date(text),
        start_time: extract_time(text),
        venue: extract_venue(text),
        venue_address: extract_address(text),
        guest_count: extract_guest_count(text),
        website: extract_website(text),
        description: extract_description(text),
    };
    debug!(
        "extracted event '{}' on {:?}",
        event.name.as_deref().unwrap_or("<unnamed>"),
        event.event_date
    );
    event
}

/// The first early line that looks like a title rather than a field
fn extract_name(text: &str) -> Option<String> {
    for line in text.lines().filter(|line| !line.trim().is_empty()).take(5) {
        let t = line.trim();
        let count = t.chars().count();
        if count <= 5 || count >= 100 {
            continue;
        }
        if t.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            continue;
        }
        if FIELD_LABEL_RE.is_match(t) {
            continue;
        }
        return Some(t.to_string());
    }
    None
}

/// Try the four date shapes in priority order; the first match that survives
/// calendar validation wins.
fn extract_date(text: &str) -> Option<String> {
    for caps in NUMERIC_DATE_RE.captures_iter(text) {
        let (Ok(month), Ok(day), Ok(mut year)) = (
            caps[1].parse::<u32>(),
            caps[2].parse::<u32>(),
            caps[3].parse::<i32>(),
        ) else {
            continue;
        };
        if year < 100 {
            year += 2000;
        }
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date.format("%Y-%m-%d").to_string());
        }
    }

    for caps in MONTH_DD_YYYY_RE.captures_iter(text) {
        if let (Some(month), Ok(day), Ok(year)) = (
            month_number(&caps[1]),
            caps[2].parse::<u32>(),
            caps[3].parse::<i32>(),
        ) {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                return Some(date.format("%Y-%m-%d").to_string());
            }
        }
    }

    for caps in DD_MONTH_YYYY_RE.captures_iter(text) {
        if let (Ok(day), Some(month), Ok(year)) = (
            caps[1].parse::<u32>(),
            month_number(&caps[2]),
            caps[3].parse::<i32>(),
        ) {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                return Some(date.format("%Y-%m-%d").to_string());
            }
        }
    }

    for caps in WEEKDAY_DATE_RE.captures_iter(text) {
        if let (Some(month), Ok(day), Ok(year)) = (
            month_number(&caps[1]),
            caps[2].parse::<u32>(),
            caps[3].parse::<i32>(),
        ) {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                return Some(date.format("%Y-%m-%d").to_string());
            }
        }
    }

    None
}

/// First time-like token; for ranges only the leading component is kept
fn extract_time(text: &str) -> Option<String> {
    if let Some(m) = TIME_HHMM_RE.find(text) {
        return Some(m.as_str().trim().to_string());
    }
    if let Some(m) = TIME_HH_RE.find(text) {
        return Some(m.as_str().trim().to_string());
    }
    TIME_RANGE_RE
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
}

/// Labeled venue line, a bare "at ..." line, or an inline "at <Place>" phrase
fn extract_venue(text: &str) -> Option<String> {
    if let Some(caps) = VENUE_LABEL_RE.captures(text) {
        let venue = clean_venue(&caps[1]);
        if !venue.is_empty() && venue.chars().count() < 100 {
            return Some(venue);
        }
    }
    if let Some(caps) = AT_LINE_RE.captures(text) {
        let venue = clean_venue(&caps[1]);
        if !venue.is_empty() && venue.chars().count() < 100 {
            return Some(venue);
        }
    }
    if let Some(caps) = AT_PLACE_RE.captures(text) {
        let venue = clean_venue(&caps[1]);
        if venue.chars().count() >= 3 && venue.chars().count() < 100 {
            return Some(venue);
        }
    }
    None
}

fn clean_venue(raw: &str) -> String {
    raw.trim().trim_end_matches(&['.', ',', ';'][..]).trim().to_string()
}

/// First street-style or city-state-zip address
fn extract_address(text: &str) -> Option<String> {
    if let Some(m) = STREET_ADDRESS_RE.find(text) {
        return Some(m.as_str().trim().to_string());
    }
    CITY_STATE_ZIP_RE
        .find(text)
        .map(|m| m.as_str().trim().to_string())
}

/// First plausible guest count; values outside (0, 10000) are discarded, not
/// clamped.
fn extract_guest_count(text: &str) -> Option<u32> {
    for pattern in [&*GUEST_COUNT_RE, &*GUEST_LABEL_RE] {
        for caps in pattern.captures_iter(text) {
            if let Ok(count) = caps[1].parse::<u32>() {
                if count > 0 && count < MAX_GUEST_COUNT {
                    return Some(count);
                }
            }
        }
    }
    None
}

/// Labeled or bare website token, normalized to an https:// prefix
fn extract_website(text: &str) -> Option<String> {
    let raw = WEBSITE_LABEL_RE
        .captures(text)
        .map(|caps| caps[1].to_string())
        .or_else(|| BARE_URL_RE.captures(text).map(|caps| caps[1].to_string()))?;

    let trimmed = raw.trim().trim_end_matches(&['.', ',', ';', ')'][..]);
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.to_lowercase().starts_with("http") {
        Some(trimmed.to_string())
    } else {
        Some(format!("https://{}", trimmed))
    }
}

/// Up to three substantial non-field lines, space-joined and truncated
fn extract_description(text: &str) -> Option<String> {
    let mut picked: Vec<&str> = Vec::new();
    for line in text.lines() {
        let t = line.trim();
        if t.is_empty() || FIELD_LABEL_RE.is_match(t) {
            continue;
        }
        if STREET_ADDRESS_RE.is_match(t) || CITY_STATE_ZIP_RE.is_match(t) {
            continue;
        }
        if t.chars().count() <= 30 {
            continue;
        }
        picked.push(t);
        if picked.len() == 3 {
            break;
        }
    }
    if picked.is_empty() {
        return None;
    }
    Some(picked.join(" ").chars().take(MAX_DESCRIPTION_LEN).collect())
}

/// Map a month name or abbreviation to its number
fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    match lower.get(..3)? {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_name_from_title_line() {
        let event = extract_event_from_text("Autumn Harvest Gala\nDate: 10/02/2026\nVenue: The Orchard");
        assert_eq!(event.name.as_deref(), Some("Autumn Harvest Gala"));
    }

    #[test]
    fn test_name_skips_field_labels_and_numbers() {
        let event = extract_event_from_text("Date: 10/02/2026\n250 Main St\nMidsummer Dinner Party");
        assert_eq!(event.name.as_deref(), Some("Midsummer Dinner Party"));
    }

    #[test]
    fn test_numeric_date() {
        let event = extract_event_from_text("Join us on 08/15/2025 for dinner");
        assert_eq!(event.event_date.as_deref(), Some("2025-08-15"));
    }

    #[test]
    fn test_month_name_dates() {
        let event = extract_event_from_text("Dinner Gala\nMarch 3, 2026");
        assert_eq!(event.event_date.as_deref(), Some("2026-03-03"));

        let event = extract_event_from_text("3rd March 2026, evening");
        assert_eq!(event.event_date.as_deref(), Some("2026-03-03"));

        let event = extract_event_from_text("Saturday, June 20, 2026");
        assert_eq!(event.event_date.as_deref(), Some("2026-06-20"));
    }

    #[test]
    fn test_invalid_calendar_date_skipped() {
        let event = extract_event_from_text("Reference 13/45/2025 is not a date");
        assert_eq!(event.event_date, None);

        // An invalid numeric match must not shadow a later valid month form.
        let event = extract_event_from_text("Code 13/45/2025, happening April 9, 2026");
        assert_eq!(event.event_date.as_deref(), Some("2026-04-09"));
    }

    #[test]
    fn test_two_digit_year() {
        let event = extract_event_from_text("Party on 6/5/26!");
        assert_eq!(event.event_date.as_deref(), Some("2026-06-05"));
    }

    #[test]
    fn test_time_formats() {
        let event = extract_event_from_text("Doors at 6:30 PM sharp");
        assert_eq!(event.start_time.as_deref(), Some("6:30 PM"));

        let event = extract_event_from_text("Starts around 7 pm");
        assert_eq!(event.start_time.as_deref(), Some("7 pm"));

        let event = extract_event_from_text("Dinner service 18:00-21:00");
        assert_eq!(event.start_time.as_deref(), Some("18:00"));
    }

    #[test]
    fn test_venue_label() {
        let event = extract_event_from_text("Venue: Mountain Lodge\nTime: 6 PM");
        assert_eq!(event.venue.as_deref(), Some("Mountain Lodge"));

        let event = extract_event_from_text("Where: The Glass House");
        assert_eq!(event.venue.as_deref(), Some("The Glass House"));
    }

    #[test]
    fn test_venue_inline_at_phrase() {
        let event = extract_event_from_text("Event on 08/15/2025 at 6:00 PM at Mountain Lodge");
        assert_eq!(event.venue.as_deref(), Some("Mountain Lodge"));
        assert_eq!(event.event_date.as_deref(), Some("2025-08-15"));
        assert!(event.start_time.as_deref().unwrap_or_default().contains("6:00"));
    }

    #[test]
    fn test_street_address() {
        let event = extract_event_from_text("Find us at 1420 Juniper Avenue, Boulder, CO 80302");
        assert_eq!(
            event.venue_address.as_deref(),
            Some("1420 Juniper Avenue, Boulder, CO 80302")
        );
    }

    #[test]
    fn test_guest_count_bounds() {
        let event = extract_event_from_text("Expecting 150 guests for the reception");
        assert_eq!(event.guest_count, Some(150));

        let event = extract_event_from_text("Capacity: 25000");
        assert_eq!(event.guest_count, None);

        let event = extract_event_from_text("0 guests have confirmed");
        assert_eq!(event.guest_count, None);
    }

    #[test]
    fn test_website_normalization() {
        let event = extract_event_from_text("Website: harvestgala.com/tickets");
        assert_eq!(
            event.website.as_deref(),
            Some("https://harvestgala.com/tickets")
        );

        let event = extract_event_from_text("Details at https://example.org/gala");
        assert_eq!(event.website.as_deref(), Some("https://example.org/gala"));
    }

    #[test]
    fn test_description_picks_substantial_lines() {
        let text = "Gala Night\nDate: 10/02/2026\nAn evening of seasonal food and live music under the lights.\nBlack tie optional, dancing encouraged until late.\nRSVP: 555-0100";
        let event = extract_event_from_text(text);
        let description = event.description.unwrap();
        assert!(description.contains("seasonal food"));
        assert!(description.contains("Black tie"));
        assert!(!description.contains("RSVP"));
    }

    #[test]
    fn test_empty_input() {
        let event = extract_event_from_text("");
        assert_eq!(event, ParsedEvent::default());
    }

    #[test]
    fn test_fields_extracted_independently() {
        // A date alone must not produce any other field.
        let event = extract_event_from_text("04/01/2026");
        assert_eq!(event.event_date.as_deref(), Some("2026-04-01"));
        assert_eq!(event.name, None);
        assert_eq!(event.venue, None);
        assert_eq!(event.guest_count, None);
    }
}
