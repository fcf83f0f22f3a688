//! Unit test module
//!
//! Handler unit tests live here, separate from source files.
//! Tests interact with handlers via public and pub(crate) APIs.

mod logging_handler_test;
