//! TCP listener and connection fan-out.

pub mod listener;
