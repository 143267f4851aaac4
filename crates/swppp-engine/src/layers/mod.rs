//! Layered compliance architecture.
//!
//! Layers are checked in order (bottom to top):
//! 1. Federal - Construction General Permit baseline, applies everywhere
//! 2. State - construction stormwater general permit overlays, additive only
//!
//! A state overlay can add violations and warnings on top of the federal
//! verdict but never removes or downgrades a federal finding.

pub mod federal;

pub use federal::check_federal_compliance;
