//! Core services - the absorb pass and its building blocks.
//!
//! Services here only talk to records and diagnostics through ports; they
//! don't know about concrete record types or log backends.

mod absorb_plugin;
mod absorber;
mod linker;

pub use absorb_plugin::AbsorbPlugin;
pub use absorber::absorb;
pub use linker::link;
