//! Unit tests for the board module.
//!
//! Tests are organised by domain concept, covering the event filter mapping
//! table, the timeline state machine, and configuration validation.
