//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und den Oberflächen geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod format;
pub mod options;
pub mod overlay;

pub use format::{format_area, format_distance};
pub use options::ViewerOptions;
pub use overlay::{
    CursorStyle, InputKind, LabelAnchor, OverlayId, OverlayPrimitive, SessionOwner, StrokeStyle,
};
