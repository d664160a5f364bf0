//! # Event Import Example
//!
//! This example demonstrates how to use the `event_extractor` module to pull
//! structured event fields out of pasted flyer text, including partial
//! flyers where only some fields are present.

use catering_import::event_extractor::extract_event_from_text;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("📅 Event Flyer Import Example");
    println!("=============================\n");

    // Example 1: A complete flyer
    println!("📋 Example 1: Full Flyer");
    println!("------------------------");

    let flyer = r#"Autumn Harvest Gala
Saturday, October 3, 2026
Doors at 6:30 PM
Venue: The Orchard House
1420 Juniper Avenue, Boulder, CO 80302
Expecting 180 guests for a night of seasonal food and music.
Website: harvestgala.com"#;

    let event = extract_event_from_text(flyer);
    println!("{}\n", serde_json::to_string_pretty(&event)?);

    // Example 2: A terse one-line invitation
    println!("📋 Example 2: One-Line Invitation");
    println!("---------------------------------");

    let invitation = "Team dinner on 08/15/2025 at 6:00 PM at Mountain Lodge";
    let event = extract_event_from_text(invitation);
    println!("{}\n", serde_json::to_string_pretty(&event)?);

    // Example 3: Prose with hardly any structure
    println!("📋 Example 3: Unstructured Prose");
    println!("--------------------------------");

    let prose = "An evening you will not want to miss, with friends old and new.";
    let event = extract_event_from_text(prose);
    println!("{}", serde_json::to_string_pretty(&event)?);

    Ok(())
}
