// Navigation Tests - Testing stack and tab navigators

use crate::tui::navigation::{
    resolve_screen, ActiveRoute, Navigator, RouteRegistry, StackNavigator, TabNavigator,
};
use crate::tui::{ScreenKind, ScreenOptions};
use crate::{Error, Result};

fn tabs() -> TabNavigator {
    let mut tabs = TabNavigator::new();
    for name in ["Camera", "Chats", "Status", "Calls"] {
        tabs.register(name, ScreenOptions::new(name, ScreenKind::Placeholder))
            .expect("Failed to register tab");
    }
    tabs
}

fn stack() -> StackNavigator {
    let mut stack = StackNavigator::new();
    stack
        .register("Root", ScreenOptions::new("WhatsApp", ScreenKind::Tabs))
        .expect("Failed to register root");
    stack
        .register("NotFound", ScreenOptions::new("Oops!", ScreenKind::NotFound))
        .expect("Failed to register not found");
    stack.navigate("Root").expect("Failed to navigate");
    stack
}

#[test]
fn test_registry_keeps_registration_order() {
    let tabs = tabs();
    assert_eq!(tabs.routes(), vec!["Camera", "Chats", "Status", "Calls"]);
    assert!(tabs.is_registered("Status"));
    assert!(!tabs.is_registered("Settings"));
    assert_eq!(tabs.options("Calls").map(|o| o.title.as_str()), Some("Calls"));
}

#[test]
fn test_registry_rejects_duplicates() {
    let mut tabs = tabs();
    let result = tabs.register("Chats", ScreenOptions::new("Again", ScreenKind::Chats));

    assert!(matches!(result, Err(Error::DuplicateRoute(name)) if name == "Chats"));
    assert_eq!(tabs.len(), 4);
}

#[test]
fn test_tab_navigator_first_tab_active() {
    let mut tabs = TabNavigator::new();
    assert!(tabs.is_empty());
    assert!(tabs.active().is_none());

    tabs.register("Camera", ScreenOptions::new("camera", ScreenKind::Placeholder))
        .expect("Failed to register");
    assert_eq!(tabs.active(), Some("Camera"));
}

#[test]
fn test_tab_navigator_navigate() {
    let mut tabs = tabs();

    tabs.navigate("Status").expect("Failed to navigate");
    assert_eq!(tabs.active(), Some("Status"));
    assert_eq!(tabs.active_index(), Some(2));

    let result = tabs.navigate("Settings");
    assert!(matches!(result, Err(Error::UnknownRoute(_))));
    assert_eq!(tabs.active(), Some("Status"), "Failed navigation keeps active tab");
}

#[test]
fn test_tab_navigator_wraps_around() {
    let mut tabs = tabs();
    tabs.navigate("Calls").expect("Failed to navigate");

    tabs.next_tab();
    assert_eq!(tabs.active(), Some("Camera"), "Should wrap to beginning");

    tabs.previous_tab();
    assert_eq!(tabs.active(), Some("Calls"), "Should wrap to end");

    tabs.previous_tab();
    assert_eq!(tabs.active(), Some("Status"));
}

#[test]
fn test_tab_navigator_select_index() {
    let mut tabs = tabs();

    tabs.select_index(1).expect("Failed to select");
    assert_eq!(tabs.active(), Some("Chats"));

    assert!(tabs.select_index(4).is_err());
    assert_eq!(tabs.active(), Some("Chats"));
}

#[test]
fn test_stack_navigator_push_and_back() {
    let mut stack = stack();
    assert_eq!(stack.active(), Some("Root"));
    assert_eq!(stack.depth(), 1);

    stack.navigate("NotFound").expect("Failed to navigate");
    assert_eq!(stack.active(), Some("NotFound"));
    assert_eq!(stack.depth(), 2);

    // Navigating to the active route doesn't push it again
    stack.navigate("NotFound").expect("Failed to navigate");
    assert_eq!(stack.depth(), 2);

    assert!(stack.go_back());
    assert_eq!(stack.active(), Some("Root"));
    assert!(!stack.go_back(), "Should not pop the root");
    assert_eq!(stack.active(), Some("Root"));
}

#[test]
fn test_stack_navigator_unknown_route() {
    let mut stack = stack();
    let result = stack.navigate("Modal");

    assert!(matches!(result, Err(Error::UnknownRoute(name)) if name == "Modal"));
    assert_eq!(stack.depth(), 1);
}

#[test]
fn test_stack_navigator_pop_to_root() {
    let mut stack = stack();
    stack.navigate("NotFound").expect("Failed to navigate");
    stack.navigate("Root").expect("Failed to navigate");
    assert_eq!(stack.depth(), 3);

    stack.pop_to_root();
    assert_eq!(stack.depth(), 1);
    assert_eq!(stack.active(), Some("Root"));
}

#[test]
fn test_resolve_screen_descends_into_tabs() {
    let mut stack = stack();
    let mut tabs = tabs();
    tabs.navigate("Calls").expect("Failed to navigate");

    let screen = resolve_screen(&stack, &tabs).expect("Should resolve");
    assert_eq!(screen.title, "Calls");

    stack.navigate("NotFound").expect("Failed to navigate");
    let screen = resolve_screen(&stack, &tabs).expect("Should resolve");
    assert_eq!(screen.kind, ScreenKind::NotFound);
}

/// Navigator with a fixed route, standing in for a real one
struct FixedNavigator {
    options: ScreenOptions,
}

impl RouteRegistry for FixedNavigator {
    fn register(&mut self, name: &str, _options: ScreenOptions) -> Result<()> {
        Err(Error::DuplicateRoute(name.to_string()))
    }

    fn is_registered(&self, name: &str) -> bool {
        name == "Only"
    }

    fn routes(&self) -> Vec<&str> {
        vec!["Only"]
    }

    fn options(&self, name: &str) -> Option<&ScreenOptions> {
        self.is_registered(name).then_some(&self.options)
    }
}

impl ActiveRoute for FixedNavigator {
    fn active(&self) -> Option<&str> {
        Some("Only")
    }

    fn navigate(&mut self, name: &str) -> Result<()> {
        if self.is_registered(name) {
            Ok(())
        } else {
            Err(Error::UnknownRoute(name.to_string()))
        }
    }
}

#[test]
fn test_resolve_screen_with_stub_navigators() {
    let stack = FixedNavigator {
        options: ScreenOptions::new("Root", ScreenKind::Tabs),
    };
    let tabs = FixedNavigator {
        options: ScreenOptions::new("Chats", ScreenKind::Chats),
    };

    assert_eq!(stack.active_options().map(|o| o.kind), Some(ScreenKind::Tabs));
    let screen = resolve_screen(&stack, &tabs).expect("Should resolve");
    assert_eq!(screen.kind, ScreenKind::Chats);
}

#[test]
fn test_resolve_screen_empty_stack() {
    let stack = StackNavigator::new();
    let tabs = tabs();
    assert!(resolve_screen(&stack, &tabs).is_none());
}
