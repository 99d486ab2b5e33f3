//! Type Assertion Integration Tests
//!
//! Tests for `assert_type` and textual designators resolved through a
//! `TypeRegistry`.

#[path = "../common/mod.rs"]
mod common;

mod designators;
mod scenarios;
