//! Centralized shortcut and action system.
//!
//! Maps keyboard input to page actions so the help overlay, status bar
//! hints, and the event handler all agree on one set of bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// All possible actions on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    NavigateUp,
    NavigateDown,
    JumpToFirst,
    JumpToLast,

    // === ACTIVATION ===
    Activate,

    // === TOGGLES ===
    ToggleTheme,
    ToggleMusic,

    // === PAGE ACTIONS ===
    SharePage,
    ViewBrochart,
    ExportBrochart,

    // === HELP ===
    ToggleHelp,

    // === GENERAL ===
    Cancel,
    Quit,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Held modifiers
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a `KeyEvent`.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Shortcut registry mapping key events to actions for a given context.
pub struct ShortcutRegistry {
    /// Maps (context, `key_binding`) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_main_shortcuts();
        registry
    }

    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = "main";

        // === NAVIGATION ===
        self.register(ctx, K::Up, M::NONE, Action::NavigateUp);
        self.register(ctx, K::Down, M::NONE, Action::NavigateDown);
        self.register(ctx, K::Char('k'), M::NONE, Action::NavigateUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::NavigateDown);
        self.register(ctx, K::Home, M::NONE, Action::JumpToFirst);
        self.register(ctx, K::End, M::NONE, Action::JumpToLast);

        // === ACTIVATION ===
        self.register(ctx, K::Enter, M::NONE, Action::Activate);
        self.register(ctx, K::Char(' '), M::NONE, Action::Activate);

        // === TOGGLES ===
        self.register(ctx, K::Char('t'), M::NONE, Action::ToggleTheme);
        self.register(ctx, K::Char('m'), M::NONE, Action::ToggleMusic);

        // === PAGE ACTIONS ===
        self.register(ctx, K::Char('s'), M::NONE, Action::SharePage);
        self.register(ctx, K::Char('b'), M::NONE, Action::ViewBrochart);
        self.register(ctx, K::Char('e'), M::NONE, Action::ExportBrochart);

        // === HELP ===
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);

        // === GENERAL ===
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
    }

    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }

    /// Check if a key event matches a specific action in the given context.
    #[must_use]
    pub fn matches(&self, context: &str, event: KeyEvent, action: Action) -> bool {
        self.lookup(context, event) == Some(action)
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
