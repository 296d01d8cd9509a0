//! Domain types shared across the probe, resolver and report layers

pub mod component;

pub use component::{ComponentKind, InstallCandidate, Location};
