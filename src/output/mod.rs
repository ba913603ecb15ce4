//! Pluggable output rendering.
//!
//! This module provides:
//! - The output contract ([`Outputter`]) and the [`Session`] that implements
//!   it for any [`Render`] format
//! - Built-in formats: `table`, `tabular`, `csv`, `json`, `jsonshort`
//! - The [`OutputRegistry`] mapping format names to factories
//! - Color detection and status styling for color-capable formats
//!
//! # Example
//!
//! ```rust
//! use outputter::output::{OutputRegistry, OutputterExt};
//! use outputter::test_utils::SharedBuffer;
//!
//! let registry = OutputRegistry::with_builtins();
//! let out = registry.new_outputter("csv")?;
//! let buf = SharedBuffer::new();
//! out.set_writer(Box::new(buf.clone()))?;
//!
//! out.set_headers_from(["key1", "key2"]);
//! out.add_row_from(["value1", "value2"])?;
//! out.draw()?;
//!
//! assert_eq!(buf.contents(), "key1,key2\nvalue1,value2\n");
//! # Ok::<(), outputter::OutputError>(())
//! ```

pub mod borders;
pub mod csv;
pub mod dataset;
pub mod detection;
pub mod format;
pub mod json;
pub mod registry;
pub mod session;
pub mod status;
pub mod table;
pub mod tabular;

pub use borders::{BorderChars, BorderStyle};
pub use csv::CsvRender;
pub use dataset::Dataset;
pub use detection::{
    ColorDecision, ColorDecisionReason, ColorDetector, ColorEnvironment, ColorMode,
    detect_color_system,
};
pub use format::BuiltinFormat;
pub use json::{JsonRender, JsonShortRender};
pub use registry::{DEFAULT_OUTPUTTER, OutputRegistry, OutputterFactory};
pub use session::{Outputter, OutputterExt, Render, Session, Sink};
pub use status::{status_color, style_status};
pub use table::TableRender;
pub use tabular::TabularRender;
