//! Argument parser tests
//!
//! Tests for:
//! - Range bookkeeping and the tokenizer
//! - Resource locations and numbers
//! - Block states
//! - Chat colours
//! - Entity selectors

mod tests_blockstate;
mod tests_color;
mod tests_entity;
mod tests_resource;
mod tests_tokenizer;
