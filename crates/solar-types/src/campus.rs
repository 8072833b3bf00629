//! Built-in content for the UW Seattle solar arrays.

use crate::card::{CardContent, Entry};

pub const ABOUT_TITLE: &str = "About Solar Arrays Located on UW Campus";

pub const ABOUT_DESCRIPTION: &str = "There are four solar arrays located on UW Seattle Campus \
     being monitored by UW Solar Monitor project.";

pub const BUILDINGS_LABEL: &str = "Buildings";

/// Monitored buildings, in display order.
pub const SOLAR_BUILDINGS: [&str; 4] = ["Alder Hall", "Elm Hall", "Maple Hall", "Mercer Court A"];

/// Card describing the monitored buildings. No building carries a detail line yet.
pub fn solar_buildings() -> CardContent {
    CardContent::new(ABOUT_TITLE, ABOUT_DESCRIPTION, BUILDINGS_LABEL)
        .with_entries(SOLAR_BUILDINGS.into_iter().map(Entry::new))
}
