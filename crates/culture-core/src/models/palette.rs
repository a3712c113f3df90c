//! Display colours assigned to profiles by position.

use serde::Serialize;

/// One palette entry. Colours are hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfileColor {
    pub name: &'static str,
    pub fill: &'static str,
    pub stroke: &'static str,
}

/// Five fixed colours, cycled by profile position.
pub static PROFILE_PALETTE: [ProfileColor; 5] = [
    ProfileColor {
        name: "blue",
        fill: "#2c72db",
        stroke: "#1e5bb8",
    },
    ProfileColor {
        name: "slate",
        fill: "#475569",
        stroke: "#334155",
    },
    ProfileColor {
        name: "teal",
        fill: "#0d9488",
        stroke: "#0f766e",
    },
    ProfileColor {
        name: "indigo",
        fill: "#4f46e5",
        stroke: "#4338ca",
    },
    ProfileColor {
        name: "stone",
        fill: "#57534e",
        stroke: "#44403c",
    },
];

/// Colour for the profile at `index` in a working set. Wraps after the last entry.
pub fn profile_color(index: usize) -> &'static ProfileColor {
    &PROFILE_PALETTE[index % PROFILE_PALETTE.len()]
}
