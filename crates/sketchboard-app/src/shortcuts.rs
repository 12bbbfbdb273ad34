//! Input bindings reference, printed by `--help`.

use sketchboard_core::ToolKind;
use sketchboard_core::input::DELETE_KEY;

/// A user-facing input binding.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub input: &'static str,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(input: &'static str, description: &'static str) -> Self {
        Self { input, description }
    }
}

/// Registry of all input bindings.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered bindings.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Click", "Select the topmost shape under the pointer"),
            Shortcut::new("Drag on shape", "Move the shape"),
            Shortcut::new("Drag on empty space", "Draw with the active tool"),
            Shortcut::new(DELETE_KEY, "Delete the selected shape"),
        ]
    }

    /// Print bindings and the toolbar to stdout.
    pub fn print_all() {
        println!("\n=== Input ===");
        for shortcut in Self::all() {
            println!("  {:20} {}", shortcut.input, shortcut.description);
        }
        let tools: Vec<_> = ToolKind::ALL.iter().map(|tool| tool.label()).collect();
        println!("\n=== Tools ===\n  {}", tools.join(" | "));
        println!();
    }
}
