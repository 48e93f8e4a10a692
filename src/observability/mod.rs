//! Observability subsystem.
//!
//! Only structured logging: the console forwards failures rather than
//! measuring them, so there is no metrics surface here.

pub mod logging;
