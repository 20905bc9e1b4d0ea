//! Navigation shell - named routes inside stack and tab navigators
//!
//! A navigator is two capabilities: a registry mapping route names to screen
//! options, and an active-route signal. The UI only talks to the traits, so a
//! navigator can be swapped for a stub in tests.

use crate::tui::types::{ScreenKind, ScreenOptions};
use crate::{Error, Result};

/// Route name to screen registration
pub trait RouteRegistry {
    /// Register `name`; names must be unique
    fn register(&mut self, name: &str, options: ScreenOptions) -> Result<()>;
    /// Whether `name` is registered
    fn is_registered(&self, name: &str) -> bool;
    /// Registered names in registration order
    fn routes(&self) -> Vec<&str>;
    /// Options registered for `name`
    fn options(&self, name: &str) -> Option<&ScreenOptions>;
}

/// Which registered route is mounted
pub trait ActiveRoute {
    /// Name of the active route, if any
    fn active(&self) -> Option<&str>;
    /// Make `name` the active route
    fn navigate(&mut self, name: &str) -> Result<()>;
}

/// Both navigator capabilities
pub trait Navigator: RouteRegistry + ActiveRoute {
    /// Options of the active route
    fn active_options(&self) -> Option<&ScreenOptions> {
        self.active().and_then(|name| self.options(name))
    }
}

impl<T: RouteRegistry + ActiveRoute> Navigator for T {}

/// Ordered route table shared by the navigators
#[derive(Debug, Clone, Default)]
struct RouteTable {
    entries: Vec<(String, ScreenOptions)>,
}

impl RouteTable {
    fn register(&mut self, name: &str, options: ScreenOptions) -> Result<()> {
        if self.position(name).is_some() {
            return Err(Error::DuplicateRoute(name.to_string()));
        }
        self.entries.push((name.to_string(), options));
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n == name)
    }

    fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    fn options(&self, name: &str) -> Option<&ScreenOptions> {
        self.position(name).map(|i| &self.entries[i].1)
    }
}

/// Stack navigator: navigating pushes, going back pops down to the root
#[derive(Debug, Clone, Default)]
pub struct StackNavigator {
    routes: RouteTable,
    stack: Vec<String>,
}

impl StackNavigator {
    /// Create an empty stack navigator
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the top route; returns false when already at the root
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() > 1 {
            if let Some(route) = self.stack.pop() {
                tracing::debug!("Stack pop {}", route);
            }
            true
        } else {
            false
        }
    }

    /// Pop back to the root route
    pub fn pop_to_root(&mut self) {
        self.stack.truncate(1);
    }

    /// Number of routes on the stack
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl RouteRegistry for StackNavigator {
    fn register(&mut self, name: &str, options: ScreenOptions) -> Result<()> {
        self.routes.register(name, options)
    }

    fn is_registered(&self, name: &str) -> bool {
        self.routes.position(name).is_some()
    }

    fn routes(&self) -> Vec<&str> {
        self.routes.names()
    }

    fn options(&self, name: &str) -> Option<&ScreenOptions> {
        self.routes.options(name)
    }
}

impl ActiveRoute for StackNavigator {
    fn active(&self) -> Option<&str> {
        self.stack.last().map(|s| s.as_str())
    }

    fn navigate(&mut self, name: &str) -> Result<()> {
        if !self.is_registered(name) {
            return Err(Error::UnknownRoute(name.to_string()));
        }
        if self.active() != Some(name) {
            tracing::debug!("Stack push {}", name);
            self.stack.push(name.to_string());
        }
        Ok(())
    }
}

/// Tab navigator: exactly one active tab once any tab is registered
#[derive(Debug, Clone, Default)]
pub struct TabNavigator {
    routes: RouteTable,
    active: Option<usize>,
}

impl TabNavigator {
    /// Create an empty tab navigator
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the active tab
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Number of tabs
    pub fn len(&self) -> usize {
        self.routes.entries.len()
    }

    /// Whether no tab is registered
    pub fn is_empty(&self) -> bool {
        self.routes.entries.is_empty()
    }

    /// Activate the tab at `index`
    pub fn select_index(&mut self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(Error::UnknownRoute(format!("tab #{}", index + 1)));
        }
        self.active = Some(index);
        Ok(())
    }

    /// Move to the next tab, wrapping around
    pub fn next_tab(&mut self) {
        if let Some(i) = self.active {
            self.active = Some((i + 1) % self.len());
        }
    }

    /// Move to the previous tab, wrapping around
    pub fn previous_tab(&mut self) {
        if let Some(i) = self.active {
            self.active = Some(if i > 0 { i - 1 } else { self.len() - 1 });
        }
    }
}

impl RouteRegistry for TabNavigator {
    fn register(&mut self, name: &str, options: ScreenOptions) -> Result<()> {
        self.routes.register(name, options)?;
        if self.active.is_none() {
            self.active = Some(0);
        }
        Ok(())
    }

    fn is_registered(&self, name: &str) -> bool {
        self.routes.position(name).is_some()
    }

    fn routes(&self) -> Vec<&str> {
        self.routes.names()
    }

    fn options(&self, name: &str) -> Option<&ScreenOptions> {
        self.routes.options(name)
    }
}

impl ActiveRoute for TabNavigator {
    fn active(&self) -> Option<&str> {
        self.active.map(|i| self.routes.entries[i].0.as_str())
    }

    fn navigate(&mut self, name: &str) -> Result<()> {
        let index = self
            .routes
            .position(name)
            .ok_or_else(|| Error::UnknownRoute(name.to_string()))?;
        self.active = Some(index);
        Ok(())
    }
}

/// Options of the screen that is actually mounted
///
/// Follows the stack's active route, descending into the tab group when the
/// stack route hosts one.
pub fn resolve_screen<'a, S, T>(stack: &'a S, tabs: &'a T) -> Option<&'a ScreenOptions>
where
    S: Navigator,
    T: Navigator,
{
    let options = stack.active_options()?;
    match options.kind {
        ScreenKind::Tabs => tabs.active_options(),
        _ => Some(options),
    }
}
