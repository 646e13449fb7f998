//! Integration test modules.

mod load_file_test;
