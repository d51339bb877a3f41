/// Fixed accent palette, indexed by [`accent_index`].
pub const ACCENT_PALETTE: [&str; 8] = [
    "#00e5ff", "#00ff88", "#ff6b35", "#c77dff", "#ffb300", "#ff4d8d", "#4fc3f7", "#a5d6a7",
];

/// Derives a stable accent index in `0..8` from a filename.
///
/// Sums the UTF-16 code units at positions 0 and 5 (position 5 counts as 0
/// for names shorter than six units). Not a hash in any cryptographic sense:
/// collisions are expected.
pub fn accent_index(filename: &str) -> usize {
    let mut units = filename.encode_utf16();
    let Some(first) = units.next() else {
        return 0;
    };
    let sixth = units.nth(4).unwrap_or(0);
    (u32::from(first) + u32::from(sixth)) as usize % ACCENT_PALETTE.len()
}
