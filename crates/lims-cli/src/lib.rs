//! Library side of the `lims` command-line tool.

#![allow(missing_docs)]

pub mod commands;
pub mod logging;
pub mod summary;
