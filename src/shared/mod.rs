//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Optionen, Textkataloge und die Textaufbereitung werden von `app` und `ui`
//! gemeinsam genutzt.

pub mod formatting;
pub mod locale;
pub mod options;

pub use formatting::{describe_error, direction_lines, format_distances, format_position};
pub use locale::{texts, Language, Texts};
pub use options::AppOptions;
