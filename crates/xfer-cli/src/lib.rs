//! Library side of the `xfer` import checker.

pub mod config;
pub mod logging;
pub mod pipeline;
