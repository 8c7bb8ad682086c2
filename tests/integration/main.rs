//! Integration tests for vidctl

mod cli_test;
mod helpers;
mod playback_test;
mod store_test;
