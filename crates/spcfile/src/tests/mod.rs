mod format_tests;
mod header_tests;
