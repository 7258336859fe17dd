//! Menu input processing
//!
//! Pointer snapshots consumed by the widget layer, plus a small tracker
//! that adapts host device events into per-frame snapshots. The widget
//! layer itself never polls a device.

pub mod pointer;

pub use pointer::{PointerSnapshot, PointerTracker, PrimaryButton};
