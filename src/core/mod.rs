//! Core modules for drafting a motion to vacate.
//!
//! Date arithmetic, the grounds knowledge base, the assembler, and the
//! sinks that turn an assembled draft into files.

pub mod assembler;
pub mod assets;
pub mod calendar;
pub mod catalog;
pub mod config;
pub mod document;
pub mod docx;
pub mod error;
pub mod logging;
pub mod markdown;
pub mod preview;
pub mod time;
