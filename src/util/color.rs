//! Target audience and status display colors.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use crate::net::types::NoticeStatus;

/// Neutral gray used for unmapped or absent labels.
pub const DEFAULT_AUDIENCE_COLOR: &str = "#6B7280";

const AUDIENCE_COLORS: &[(&str, &str)] = &[
    ("All Departments", "#FF5733"),
    ("Individual", "#008000"),
    ("Finance", "#3357FF"),
    ("Sales Team", "#FF33A1"),
    ("Web Team", "#B8860B"),
    ("Database Team", "#A133FF"),
    ("Admin", "#008B8B"),
    ("HR", "#FF9633"),
];

/// Hex color for a target department/individual label.
pub fn audience_color(label: Option<&str>) -> &'static str {
    let Some(label) = label else {
        return DEFAULT_AUDIENCE_COLOR;
    };
    AUDIENCE_COLORS
        .iter()
        .find(|(name, _)| *name == label)
        .map_or(DEFAULT_AUDIENCE_COLOR, |(_, color)| *color)
}

/// Badge color for a notice status.
pub fn status_badge_color(status: NoticeStatus) -> &'static str {
    match status {
        NoticeStatus::Published => "#16A34A",
        NoticeStatus::Draft => "#EAB308",
        NoticeStatus::Unpublished => DEFAULT_AUDIENCE_COLOR,
    }
}

/// Parse `#RRGGBB` into RGB channels.
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some((r, g, b))
}
