//! Settings tests
