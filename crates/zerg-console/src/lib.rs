//! zerg-console — the stock console sink for zerg.
//!
//! [`ConsoleSink`] prints each event as one line with the module name
//! painted in the level's colour (see [`Palette`]).

pub mod sink;
pub mod style;

pub use sink::ConsoleSink;
pub use style::{Palette, Style};
