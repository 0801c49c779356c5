//! Shared color constants for the UI.

use egui::Color32;

/// Red used for the fetch error message.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Translucent gray behind the name header while a sort is active.
pub const COLOR_SORT_ACTIVE: Color32 = Color32::from_rgba_premultiplied(60, 60, 60, 60);
