use crate::runtime::effect::Effect;
use crate::runtime::intent::Intent;
use crate::runtime::key_bindings::KeyBindings;
use crate::runtime::reducer::Reducer;
use crate::state::form::FormState;
use crate::terminal::{Terminal, TerminalEvent};
use crate::ui::renderer::Renderer;
use std::io;
use std::time::Duration;
use tracing::debug;

const POLL_TIMEOUT: Duration = Duration::from_millis(120);

pub struct Runtime {
    state: FormState,
    terminal: Terminal,
    key_bindings: KeyBindings,
    renderer: Renderer,
}

impl Runtime {
    pub fn new(state: FormState, terminal: Terminal) -> Self {
        Self {
            state,
            terminal,
            key_bindings: KeyBindings::new(),
            renderer: Renderer::default(),
        }
    }

    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn into_state(self) -> FormState {
        self.state
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.terminal.enter()?;
        debug!(mode = ?self.terminal.mode(), "terminal entered");

        let run_result = (|| -> io::Result<()> {
            self.render()?;
            while !self.state.should_exit() {
                let event = self.terminal.poll_event(POLL_TIMEOUT)?;
                self.dispatch(event)?;
            }
            Ok(())
        })();

        let exit_result = self.terminal.exit();
        run_result.and(exit_result)
    }

    fn dispatch(&mut self, event: TerminalEvent) -> io::Result<()> {
        let intent = match event {
            TerminalEvent::Resize(size) => {
                self.terminal.set_size(size);
                return self.render();
            }
            TerminalEvent::Key(key) => self
                .key_bindings
                .resolve(key)
                .unwrap_or(Intent::InputKey(key)),
            TerminalEvent::Tick => Intent::Tick,
        };
        let effects = Reducer::reduce(&mut self.state, intent);
        self.apply_effects(effects)
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) -> io::Result<()> {
        let render_requested = effects
            .iter()
            .any(|effect| matches!(effect, Effect::RequestRender));
        if render_requested {
            self.render()?;
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = self.renderer.render(&self.state);
        self.terminal.render_frame(&frame)
    }
}
