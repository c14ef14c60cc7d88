//! Tests for value objects
