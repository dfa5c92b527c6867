//! Particle colors
//!
//! Colors are identified by `#rrggbb` strings (what the UI shows and what
//! gets persisted). The renderer needs packed ABGR instead, so the engine
//! converts once per configuration change.

/// Colors the UI can add, in order.
pub const COLOR_LIST: [&str; 9] = [
    "#EB3B5A", "#05C46B", "#0FBCF9", "#FBC531", "#7158e2", "#fff200", "#ffb8b8", "#ADFF2F",
    "#D6A2E8",
];

/// Upper bound on simultaneously active colors (force matrix size).
pub const MAX_COLORS: usize = COLOR_LIST.len();

/// Colors a fresh engine starts with.
pub const DEFAULT_COLORS: [&str; 3] = ["#EB3B5A", "#05C46B", "#0FBCF9"];

// Background color in ABGR format (little-endian: 0xAABBGGRR -> bytes [RR,GG,BB,AA])
// RGB(17,17,17) with alpha=255
pub const BG_COLOR: u32 = 0xFF11_1111;

/// Parse `#rgb` or `#rrggbb` (case-insensitive) into opaque ABGR.
pub fn parse_hex_color(color: &str) -> Option<u32> {
    let hex = color.strip_prefix('#')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let (r, g, b) = match hex.len() {
        3 => {
            let digit = |i: usize| u32::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            (digit(0)?, digit(1)?, digit(2)?)
        }
        6 => {
            let byte = |i: usize| u32::from_str_radix(&hex[i..i + 2], 16).ok();
            (byte(0)?, byte(2)?, byte(4)?)
        }
        _ => return None,
    };

    Some(0xFF00_0000 | (b << 16) | (g << 8) | r)
}

/// First palette color not already in `in_use` (compared case-insensitively).
pub fn next_unused(in_use: &[String]) -> Option<&'static str> {
    COLOR_LIST
        .iter()
        .copied()
        .find(|candidate| !in_use.iter().any(|c| c.eq_ignore_ascii_case(candidate)))
}
