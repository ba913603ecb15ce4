//! Visual regression tests for rendered layouts.

mod layout_visual;
