//! Fixed series palette. Colors are picked by series position, never by metric identity.

pub const PALETTE: [&str; 5] = ["#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6"];

pub fn series_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}
