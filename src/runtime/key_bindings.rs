use crate::runtime::intent::Intent;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use crate::widgets::traits::TextAction;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

#[derive(Default)]
pub struct KeyBindings {
    bindings: HashMap<KeyBinding, Intent>,
}

impl KeyBindings {
    pub fn new() -> Self {
        let mut manager = Self::default();
        manager.install_defaults();
        manager
    }

    pub fn bind(&mut self, key: KeyBinding, intent: Intent) {
        self.bindings.insert(key, intent);
    }

    pub fn resolve(&self, event: KeyEvent) -> Option<Intent> {
        self.bindings.get(&KeyBinding::from_event(event)).cloned()
    }

    fn install_defaults(&mut self) {
        self.bind(KeyBinding::ctrl(KeyCode::Char('c')), Intent::Exit);
        self.bind(KeyBinding::key(KeyCode::Esc), Intent::Exit);
        self.bind(KeyBinding::ctrl(KeyCode::Char('s')), Intent::Submit);
        self.bind(KeyBinding::key(KeyCode::Tab), Intent::NextFocus);
        self.bind(KeyBinding::key(KeyCode::Down), Intent::NextFocus);
        self.bind(KeyBinding::key(KeyCode::Up), Intent::PrevFocus);
        self.bind(
            KeyBinding::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            Intent::PrevFocus,
        );
        self.bind(KeyBinding::key(KeyCode::BackTab), Intent::PrevFocus);
        self.bind(
            KeyBinding::ctrl(KeyCode::Backspace),
            Intent::TextAction(TextAction::DeleteWordLeft),
        );
        self.bind(
            KeyBinding::ctrl(KeyCode::Char('w')),
            Intent::TextAction(TextAction::DeleteWordLeft),
        );
        self.bind(
            KeyBinding::ctrl(KeyCode::Delete),
            Intent::TextAction(TextAction::DeleteWordRight),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::KeyBindings;
    use crate::runtime::intent::Intent;
    use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn defaults_cover_navigation_and_submit() {
        let bindings = KeyBindings::new();
        assert_eq!(
            bindings.resolve(KeyEvent::plain(KeyCode::Tab)),
            Some(Intent::NextFocus)
        );
        assert_eq!(
            bindings.resolve(KeyEvent {
                code: KeyCode::Char('s'),
                modifiers: KeyModifiers::CONTROL,
            }),
            Some(Intent::Submit)
        );
        assert_eq!(bindings.resolve(KeyEvent::plain(KeyCode::Esc)), Some(Intent::Exit));
    }

    #[test]
    fn plain_chars_are_unbound() {
        let bindings = KeyBindings::new();
        assert_eq!(bindings.resolve(KeyEvent::plain(KeyCode::Char('s'))), None);
        assert_eq!(bindings.resolve(KeyEvent::plain(KeyCode::Enter)), None);
    }
}
