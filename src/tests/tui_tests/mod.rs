// TUI Tests Module - Testing the public tui module
// Tests organized by TUI module structure:
// - app_tests: App construction and route handling
// - list_view_tests: Windowed list layout, keys and selection
// - navigation_tests: Stack and tab navigators
// - types_tests: ScreenOptions
// - ui_tests: Rendering through TestBackend and UI helpers

mod list_view_tests;
mod navigation_tests;
mod types_tests;
