//! Integration tests for phrasesync.

mod helpers;

mod cli_test;
mod sync_test;
mod timeline_test;
mod tracker_test;
