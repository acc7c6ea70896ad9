//! Keybinding definitions
//!
//! Every keyboard shortcut of the form, grouped by where it applies. The help
//! dialog is rendered from this table.

use crossterm::event::{KeyCode, KeyModifiers};

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// The key code
    pub key: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere on the form
    Global,
    /// Active on any account row
    Row,
    /// Active on a row's type selector
    TypeSelector,
    /// Active while account suggestions are shown
    Autocomplete,
    /// Active while a dialog or toast is open
    Dialog,
}

impl KeyContext {
    /// Heading used in the help dialog
    pub fn title(&self) -> &'static str {
        match self {
            Self::Global => "Form",
            Self::Row => "Account Rows",
            Self::TypeSelector => "Debit / Credit Selector",
            Self::Autocomplete => "Account Suggestions",
            Self::Dialog => "Dialogs and Notifications",
        }
    }

    /// All contexts in help order
    pub fn all() -> &'static [KeyContext] {
        &[
            Self::Global,
            Self::Row,
            Self::TypeSelector,
            Self::Autocomplete,
            Self::Dialog,
        ]
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    Keybinding {
        key: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        description: "Next field (submit on the last one)",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Tab,
        modifiers: KeyModifiers::NONE,
        description: "Next field",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::BackTab,
        modifiers: KeyModifiers::SHIFT,
        description: "Previous field",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Char('n'),
        modifiers: KeyModifiers::CONTROL,
        description: "Add account row",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Char('s'),
        modifiers: KeyModifiers::CONTROL,
        description: "Submit entry",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Char('l'),
        modifiers: KeyModifiers::CONTROL,
        description: "Clear form",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::F(1),
        modifiers: KeyModifiers::NONE,
        description: "Help",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Char('q'),
        modifiers: KeyModifiers::CONTROL,
        description: "Quit",
        context: KeyContext::Global,
    },
    // Row
    Keybinding {
        key: KeyCode::Char('d'),
        modifiers: KeyModifiers::CONTROL,
        description: "Remove row",
        context: KeyContext::Row,
    },
    // Type selector
    Keybinding {
        key: KeyCode::Right,
        modifiers: KeyModifiers::NONE,
        description: "Next type",
        context: KeyContext::TypeSelector,
    },
    Keybinding {
        key: KeyCode::Left,
        modifiers: KeyModifiers::NONE,
        description: "Previous type",
        context: KeyContext::TypeSelector,
    },
    Keybinding {
        key: KeyCode::Char(' '),
        modifiers: KeyModifiers::NONE,
        description: "Next type",
        context: KeyContext::TypeSelector,
    },
    Keybinding {
        key: KeyCode::Char('d'),
        modifiers: KeyModifiers::NONE,
        description: "Debit",
        context: KeyContext::TypeSelector,
    },
    Keybinding {
        key: KeyCode::Char('c'),
        modifiers: KeyModifiers::NONE,
        description: "Credit",
        context: KeyContext::TypeSelector,
    },
    // Autocomplete
    Keybinding {
        key: KeyCode::Down,
        modifiers: KeyModifiers::NONE,
        description: "Next suggestion",
        context: KeyContext::Autocomplete,
    },
    Keybinding {
        key: KeyCode::Up,
        modifiers: KeyModifiers::NONE,
        description: "Previous suggestion",
        context: KeyContext::Autocomplete,
    },
    Keybinding {
        key: KeyCode::Tab,
        modifiers: KeyModifiers::NONE,
        description: "Accept suggestion",
        context: KeyContext::Autocomplete,
    },
    // Dialog
    Keybinding {
        key: KeyCode::Esc,
        modifiers: KeyModifiers::NONE,
        description: "Close notification or dialog",
        context: KeyContext::Dialog,
    },
];

/// Get keybindings for a specific context
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context)
        .collect()
}

/// Format a keybinding for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    let mut parts = Vec::new();

    if kb.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if kb.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }
    if kb.modifiers.contains(KeyModifiers::SHIFT) {
        // Only show Shift for non-character keys
        if !matches!(kb.key, KeyCode::Char(_)) {
            parts.push("Shift");
        }
    }

    let key_str = match kb.key {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab | KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        _ => format!("{:?}", kb.key),
    };

    parts.push(&key_str);
    parts.join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_keybinding() {
        let submit = KEYBINDINGS
            .iter()
            .find(|kb| kb.description == "Submit entry")
            .unwrap();
        assert_eq!(format_keybinding(submit), "Ctrl+s");

        let back = KEYBINDINGS
            .iter()
            .find(|kb| kb.key == KeyCode::BackTab)
            .unwrap();
        assert_eq!(format_keybinding(back), "Shift+Tab");

        let space = get_keybindings(KeyContext::TypeSelector)
            .into_iter()
            .find(|kb| kb.key == KeyCode::Char(' '))
            .unwrap();
        assert_eq!(format_keybinding(space), "Space");
    }

    #[test]
    fn test_every_context_has_bindings() {
        for context in KeyContext::all() {
            assert!(!get_keybindings(*context).is_empty(), "{:?}", context);
        }
    }
}
