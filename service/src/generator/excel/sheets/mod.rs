//! Worksheet rendering, split into per-column work and sheet finalization.

mod columns;
mod finalize;
