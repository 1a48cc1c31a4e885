pub mod backend;

pub use backend::{
    CursorPos, KeyCode, KeyEvent, KeyModifiers, RenderMode, Terminal, TerminalEvent, TerminalSize,
};
