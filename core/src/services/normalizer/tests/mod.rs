//! Tests for the error normalizer

mod classifier_tests;
