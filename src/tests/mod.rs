// Test modules for Chatshell
// Each module tests the corresponding source module

mod helpers;
mod tui_tests;
