//! Unit test modules.

mod codec_test;
mod notification_test;
