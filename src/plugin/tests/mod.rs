//! Plugin Metadata Tests
//! 
//! Tests for plugin info assembly with mock and recorded extensions.



#[cfg(test)]
pub mod fixture_tests;
