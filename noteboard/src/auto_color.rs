//! Default card colors.
//!
//! A card created without a color gets one derived from its title, so the
//! same title always renders the same way.

/// Card background palette (6-char hex without `#`), light enough for dark text.
const PALETTE: &[&str] = &[
    "fff59d", // yellow
    "ffcc80", // orange
    "ef9a9a", // red
    "f48fb1", // pink
    "ce93d8", // purple
    "b39ddb", // violet
    "9fa8da", // indigo
    "90caf9", // blue
    "81d4fa", // sky
    "80deea", // cyan
    "80cbc4", // teal
    "a5d6a7", // green
    "c5e1a5", // light green
    "e6ee9c", // lime
    "ffe082", // amber
    "bcaaa4", // brown
];

/// Return a deterministic color for a card title.
pub fn auto_color(title: &str) -> &'static str {
    let hash = fnv1a(title.trim());
    PALETTE[(hash as usize) % PALETTE.len()]
}

/// FNV-1a hash (32-bit) for short strings.
fn fnv1a(s: &str) -> u32 {
    let mut hash: u32 = 0x811c_9dc5;
    for byte in s.bytes() {
        hash ^= byte as u32;
        hash = hash.wrapping_mul(0x0100_0193);
    }
    hash
}
