use crate::ui::renderer::RenderFrame;
use crate::ui::span::SpanLine;
use crate::ui::style::Color;
use crossterm::cursor::{Hide, MoveTo, Show, position};
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode as CrosstermKeyCode, KeyEvent as CrosstermKeyEvent,
    KeyEventKind, KeyModifiers as CrosstermKeyModifiers,
};
use crossterm::style::{
    Attribute, Color as CrosstermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use crossterm::terminal::{
    self, BeginSynchronizedUpdate, Clear, ClearType, DisableLineWrap, EnableLineWrap,
    EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen, ScrollUp,
};
use crossterm::{execute, queue};
use serde::Deserialize;
use std::io::{self, Stdout, Write};
use std::time::Duration;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    #[default]
    AltScreen,

    Inline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Unknown,
    Char(char),
    Enter,
    Tab,
    BackTab,
    Esc,
    Backspace,
    Delete,
    Home,
    End,
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyModifiers(u8);

impl KeyModifiers {
    pub const NONE: Self = Self(0);
    pub const SHIFT: Self = Self(1 << 0);
    pub const CONTROL: Self = Self(1 << 1);
    pub const ALT: Self = Self(1 << 2);

    pub fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalEvent {
    Key(KeyEvent),
    Resize(TerminalSize),
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPos {
    pub col: u16,
    pub row: u16,
}

struct InlineState {
    block_start_row: u16,

    last_drawn_count: usize,
}

pub struct Terminal {
    stdout: Stdout,
    size: TerminalSize,
    mode: RenderMode,
    last_frame: Vec<SpanLine>,
    inline: InlineState,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout: io::stdout(),
            size: TerminalSize { width, height },
            mode: RenderMode::default(),
            last_frame: Vec::new(),
            inline: InlineState {
                block_start_row: 0,
                last_drawn_count: 0,
            },
        })
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn set_size(&mut self, size: TerminalSize) {
        self.size = size;
    }

    pub fn refresh_size(&mut self) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        self.size = TerminalSize { width, height };
        Ok(())
    }

    pub fn enter(&mut self) -> io::Result<()> {
        self.refresh_size()?;
        if self.mode == RenderMode::Inline {
            let (_, row) = position()?;
            self.inline.block_start_row = row.min(self.size.height.saturating_sub(1));
            self.inline.last_drawn_count = 0;
        }
        terminal::enable_raw_mode()?;
        let mode = self.mode;
        let stdout = &mut self.stdout;
        undo_raw_mode_on_error(
            || match mode {
                RenderMode::AltScreen => execute!(stdout, EnterAlternateScreen, Hide),
                RenderMode::Inline => execute!(stdout, DisableLineWrap, Hide),
            },
            terminal::disable_raw_mode,
        )
    }

    pub fn exit(&mut self) -> io::Result<()> {
        let mode = self.mode;
        let last_row = self.inline_last_row();
        let stdout = &mut self.stdout;
        restore_then_leave_raw_mode(
            || match mode {
                RenderMode::AltScreen => execute!(stdout, LeaveAlternateScreen, EnableLineWrap, Show),
                RenderMode::Inline => {
                    queue!(stdout, MoveTo(0, last_row))?;
                    execute!(stdout, EnableLineWrap, Show)
                }
            },
            terminal::disable_raw_mode,
        )?;

        match self.mode {
            RenderMode::AltScreen => {
                // Leave the final form on the primary screen.
                let last_frame = std::mem::take(&mut self.last_frame);
                let width = self.size.width;
                for line in &last_frame {
                    self.write_span_line(line, width)?;
                    self.stdout.write_all(b"\n")?;
                }
            }
            RenderMode::Inline => self.stdout.write_all(b"\r\n")?,
        }
        self.stdout.flush()
    }

    fn inline_last_row(&self) -> u16 {
        let max_row = self.size.height.saturating_sub(1);
        self.inline
            .block_start_row
            .saturating_add(self.inline.last_drawn_count.saturating_sub(1) as u16)
            .min(max_row)
    }

    pub fn poll_event(&mut self, timeout: Duration) -> io::Result<TerminalEvent> {
        if !event::poll(timeout)? {
            return Ok(TerminalEvent::Tick);
        }
        match event::read()? {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(TerminalEvent::Key(map_key_event(key)))
            }
            CrosstermEvent::Resize(width, height) => {
                Ok(TerminalEvent::Resize(TerminalSize { width, height }))
            }
            _ => Ok(TerminalEvent::Tick),
        }
    }

    pub fn render_frame(&mut self, frame: &RenderFrame) -> io::Result<()> {
        self.refresh_size()?;
        if self.size.height == 0 || self.size.width == 0 {
            return Ok(());
        }
        self.last_frame.clone_from(&frame.lines);
        match self.mode {
            RenderMode::AltScreen => self.render_altscreen(frame),
            RenderMode::Inline => self.render_inline(frame),
        }
    }

    fn render_altscreen(&mut self, frame: &RenderFrame) -> io::Result<()> {
        let height = self.size.height as usize;
        let width = self.size.width;

        let scroll_offset = match frame.cursor {
            Some(cur) => (cur.row as usize).saturating_sub(height.saturating_sub(1)),
            None => frame.lines.len().saturating_sub(height),
        };

        queue!(self.stdout, MoveTo(0, 0), Clear(ClearType::All))?;
        for (row_idx, line) in frame.lines.iter().skip(scroll_offset).take(height).enumerate() {
            queue!(self.stdout, MoveTo(0, row_idx as u16))?;
            self.write_span_line(line, width)?;
        }
        self.place_cursor(frame.cursor, 0, scroll_offset)?;
        self.stdout.flush()
    }

    fn render_inline(&mut self, frame: &RenderFrame) -> io::Result<()> {
        let height = self.size.height as usize;
        let width = self.size.width;

        let draw_count = frame.lines.len().min(height);
        let available = height.saturating_sub(self.inline.block_start_row as usize);
        let scroll_up = draw_count.saturating_sub(available) as u16;
        let skip = frame.lines.len() - draw_count;

        queue!(self.stdout, BeginSynchronizedUpdate, Hide)?;
        if scroll_up > 0 {
            queue!(
                self.stdout,
                MoveTo(0, self.size.height.saturating_sub(1)),
                ScrollUp(scroll_up)
            )?;
            self.inline.block_start_row = self.inline.block_start_row.saturating_sub(scroll_up);
        }
        let block_start = self.inline.block_start_row;
        queue!(
            self.stdout,
            MoveTo(0, block_start),
            Clear(ClearType::FromCursorDown)
        )?;
        for (idx, line) in frame.lines.iter().skip(skip).enumerate() {
            queue!(self.stdout, MoveTo(0, block_start.saturating_add(idx as u16)))?;
            self.write_span_line(line, width)?;
        }
        self.inline.last_drawn_count = draw_count;
        self.place_cursor(frame.cursor, block_start, skip)?;
        queue!(self.stdout, EndSynchronizedUpdate)?;
        self.stdout.flush()
    }

    fn place_cursor(
        &mut self,
        cursor: Option<CursorPos>,
        origin_row: u16,
        skipped: usize,
    ) -> io::Result<()> {
        let visible_rows = self.size.height.saturating_sub(origin_row) as usize;
        let target = cursor.and_then(|cur| {
            let row = (cur.row as usize).checked_sub(skipped)?;
            (row < visible_rows).then_some((cur.col, row as u16))
        });
        match target {
            Some((col, row)) => {
                let col = col.min(self.size.width.saturating_sub(1));
                queue!(self.stdout, MoveTo(col, origin_row.saturating_add(row)), Show)
            }
            None => queue!(self.stdout, Hide),
        }
    }

    fn write_span_line(&mut self, line: &SpanLine, width: u16) -> io::Result<()> {
        let render_width = if width > 1 { width - 1 } else { width };
        let mut used = 0usize;
        for span in line {
            if used >= render_width as usize {
                break;
            }
            let available_cols = (render_width as usize).saturating_sub(used);
            let clipped = clip_to_width(&span.text, available_cols);
            if clipped.is_empty() {
                continue;
            }
            if let Some(color) = span.style.color {
                queue!(self.stdout, SetForegroundColor(map_color(color)))?;
            }
            if let Some(background) = span.style.background {
                queue!(self.stdout, SetBackgroundColor(map_color(background)))?;
            }
            if span.style.bold {
                queue!(self.stdout, SetAttribute(Attribute::Bold))?;
            }
            queue!(self.stdout, Print(clipped.as_str()), ResetColor)?;
            if span.style.bold {
                queue!(self.stdout, SetAttribute(Attribute::NormalIntensity))?;
            }
            used = used.saturating_add(UnicodeWidthStr::width(clipped.as_str()));
        }
        Ok(())
    }
}

fn map_color(color: Color) -> CrosstermColor {
    match color {
        Color::DarkGrey => CrosstermColor::DarkGrey,
        Color::Red => CrosstermColor::Red,
        Color::Green => CrosstermColor::Green,
        Color::Yellow => CrosstermColor::DarkYellow,
        Color::Blue => CrosstermColor::DarkBlue,
        Color::Cyan => CrosstermColor::DarkCyan,
        Color::White => CrosstermColor::White,
    }
}

fn map_key_event(key: CrosstermKeyEvent) -> KeyEvent {
    KeyEvent {
        code: map_key_code(key.code),
        modifiers: map_key_modifiers(key.modifiers),
    }
}

fn map_key_code(code: CrosstermKeyCode) -> KeyCode {
    match code {
        CrosstermKeyCode::Char(ch) => KeyCode::Char(ch),
        CrosstermKeyCode::Enter => KeyCode::Enter,
        CrosstermKeyCode::Tab => KeyCode::Tab,
        CrosstermKeyCode::BackTab => KeyCode::BackTab,
        CrosstermKeyCode::Esc => KeyCode::Esc,
        CrosstermKeyCode::Backspace => KeyCode::Backspace,
        CrosstermKeyCode::Delete => KeyCode::Delete,
        CrosstermKeyCode::Home => KeyCode::Home,
        CrosstermKeyCode::End => KeyCode::End,
        CrosstermKeyCode::Left => KeyCode::Left,
        CrosstermKeyCode::Right => KeyCode::Right,
        CrosstermKeyCode::Up => KeyCode::Up,
        CrosstermKeyCode::Down => KeyCode::Down,
        _ => KeyCode::Unknown,
    }
}

fn map_key_modifiers(modifiers: CrosstermKeyModifiers) -> KeyModifiers {
    let mut out = KeyModifiers::NONE;
    if modifiers.contains(CrosstermKeyModifiers::SHIFT) {
        out.0 |= KeyModifiers::SHIFT.0;
    }
    if modifiers.contains(CrosstermKeyModifiers::CONTROL) {
        out.0 |= KeyModifiers::CONTROL.0;
    }
    if modifiers.contains(CrosstermKeyModifiers::ALT) {
        out.0 |= KeyModifiers::ALT.0;
    }
    out
}

/// Runs terminal setup after raw mode is on; a failed setup turns raw mode back off.
fn undo_raw_mode_on_error(
    setup: impl FnOnce() -> io::Result<()>,
    disable_raw: impl FnOnce() -> io::Result<()>,
) -> io::Result<()> {
    setup().inspect_err(|_| {
        let _ = disable_raw();
    })
}

/// Restores the screen before leaving raw mode. Both steps always run and the
/// first error wins.
fn restore_then_leave_raw_mode(
    restore_screen: impl FnOnce() -> io::Result<()>,
    disable_raw: impl FnOnce() -> io::Result<()>,
) -> io::Result<()> {
    let restored = restore_screen();
    let raw_off = disable_raw();
    restored.and(raw_off)
}

fn clip_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let mut used = 0usize;
    let mut out = String::new();
    for ch in text.chars().filter(|ch| !matches!(ch, '\n' | '\r')) {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(ch_width) > max_width {
            break;
        }
        out.push(ch);
        used = used.saturating_add(ch_width);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{
        CrosstermKeyCode, CrosstermKeyEvent, CrosstermKeyModifiers, KeyCode, KeyModifiers,
        clip_to_width, map_key_event, restore_then_leave_raw_mode, undo_raw_mode_on_error,
    };
    use crate::widgets::inputs::text::TextInput;
    use crate::widgets::traits::Interactive;
    use std::cell::RefCell;
    use std::io;

    #[test]
    fn screen_is_restored_before_raw_mode_is_left() {
        let steps = RefCell::new(Vec::new());
        let result = restore_then_leave_raw_mode(
            || {
                steps.borrow_mut().push("screen");
                Err(io::Error::other("leave alternate screen"))
            },
            || {
                steps.borrow_mut().push("raw");
                Ok(())
            },
        );

        assert!(result.is_err());
        assert_eq!(*steps.borrow(), vec!["screen", "raw"]);
    }

    #[test]
    fn failed_setup_leaves_raw_mode() {
        let mut raw_disabled = false;
        let result = undo_raw_mode_on_error(
            || Err(io::Error::other("enter alternate screen")),
            || {
                raw_disabled = true;
                Ok(())
            },
        );

        assert!(result.is_err());
        assert!(raw_disabled);
    }

    #[test]
    fn successful_setup_keeps_raw_mode() {
        let mut raw_disabled = false;
        let result = undo_raw_mode_on_error(
            || Ok(()),
            || {
                raw_disabled = true;
                Ok(())
            },
        );

        assert!(result.is_ok());
        assert!(!raw_disabled);
    }

    #[test]
    fn altgr_at_sign_reaches_the_email_field() {
        let mut input = TextInput::new("email", "Email");
        input.set_value("chavion");
        let key = map_key_event(CrosstermKeyEvent::new(
            CrosstermKeyCode::Char('@'),
            CrosstermKeyModifiers::CONTROL | CrosstermKeyModifiers::ALT,
        ));

        let result = input.on_key(key);

        assert!(result.handled);
        assert_eq!(input.value(), "chavion@");
    }

    #[test]
    fn clip_respects_wide_chars() {
        assert_eq!(clip_to_width("Chavion", 4), "Chav");
        assert_eq!(clip_to_width("日本語", 5), "日本");
        assert_eq!(clip_to_width("abc", 0), "");
    }

    #[test]
    fn clip_drops_line_breaks() {
        assert_eq!(clip_to_width("a\r\nb", 10), "ab");
    }

    #[test]
    fn ctrl_chars_keep_their_modifier() {
        let key = map_key_event(CrosstermKeyEvent::new(
            CrosstermKeyCode::Char('s'),
            CrosstermKeyModifiers::CONTROL,
        ));
        assert_eq!(key.code, KeyCode::Char('s'));
        assert!(key.modifiers.contains(KeyModifiers::CONTROL));
        assert!(!key.modifiers.contains(KeyModifiers::ALT));
    }
}
