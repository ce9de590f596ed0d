use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Layout and rendering preferences.
///
/// One immutable value, threaded explicitly through every stage of the pipeline.
/// Field names deserialize from camelCase (`removeKinks`, `doubleVertices`, ...);
/// missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct LayoutPrefs {
    /// Straighten Z-shaped jogs in edges where nothing is in the way.
    pub remove_kinks: bool,
    /// Drop rows and columns that carry nothing but straight line segments.
    pub compactify: bool,
    /// Layers stack top-to-bottom (true) or left-to-right (false).
    pub vertical: bool,
    /// Unicode box-drawing glyphs (true) or plain ASCII (false).
    pub unicode: bool,
    /// Draw vertex boxes with a double border and one column of padding.
    pub double_vertices: bool,
    /// Rounded corners on boxes and edge bends (Unicode only).
    pub rounded: bool,
    /// In ASCII mode, mark every bend with `+`.
    pub explicit_ascii_bends: bool,
    /// Move horizontal edge segments as close to their source as possible.
    pub elevate_edges: bool,
}

impl Default for LayoutPrefs {
    fn default() -> Self {
        Self {
            remove_kinks: true,
            compactify: true,
            vertical: true,
            unicode: true,
            double_vertices: false,
            rounded: false,
            explicit_ascii_bends: false,
            elevate_edges: false,
        }
    }
}

impl LayoutPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse preferences from a JSON object, e.g. `{"unicode": false}`.
    pub fn from_json(src: &str) -> Result<Self> {
        serde_json::from_str(src).map_err(|e| Error::Prefs {
            message: e.to_string(),
        })
    }
}
