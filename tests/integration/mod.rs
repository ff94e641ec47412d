//! Integration tests for evalview.

pub mod display_test;
pub mod multipart_test;
pub mod scale_test;
