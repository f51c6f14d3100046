//! Integration Tests Module
//!
//! End-to-end tests for the analysis pipeline against canned completion
//! backends. No network calls are made.

// Shared mock backends
mod common;

// Single-flight, timeout, and busy-release tests
mod orchestrator_test;
