mod client_tests;
mod command_tests;
mod config_tests;
mod error_tests;
mod format_tests;
