use crate::core::Field;
use crate::state::form::FormState;
use crate::terminal::CursorPos;
use crate::ui::span::{Span, SpanLine};
use crate::ui::theme::Theme;
use crate::ui::view::{Role, ViewNode, render_view};
use crate::widgets::base::focus_marker;
use crate::widgets::traits::{Drawable, Interactive, RenderContext};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Default, Clone)]
pub struct RenderFrame {
    pub lines: Vec<SpanLine>,
    pub cursor: Option<CursorPos>,
}

#[derive(Debug, Default, Clone)]
pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn render(&self, form: &FormState) -> RenderFrame {
        let view = render_view(form);
        let ctx = RenderContext {
            focused_id: form.focused_id().map(ToOwned::to_owned),
        };
        let mut frame = RenderFrame::default();

        for node in &view.nodes {
            match node.role {
                Role::Heading => {
                    if !frame.lines.is_empty() {
                        frame.lines.push(Vec::new());
                    }
                    frame
                        .lines
                        .push(vec![Span::styled(node.text.clone(), self.theme.heading)]);
                }
                Role::Note => {
                    frame
                        .lines
                        .push(vec![Span::styled(node.text.clone(), self.theme.hint)]);
                }
                Role::Textbox => self.render_textbox(form, node, &ctx, &mut frame),
                Role::Alert => {
                    frame.lines.push(vec![Span::styled(
                        format!("    {}", node.text),
                        self.theme.error,
                    )]);
                }
                Role::Button => {
                    let button = form.button();
                    let marker = focus_marker(ctx.focused_id.as_deref() == Some(button.id()));
                    let mut line = vec![Span::new(format!("{marker} "))];
                    if let Some(first) = button.draw(&ctx).lines.into_iter().next() {
                        line.extend(first);
                    }
                    frame.lines.push(line);
                }
                Role::Text => {
                    let label = node.label.as_deref().unwrap_or_default();
                    frame.lines.push(vec![
                        Span::styled(format!("  {label}: "), self.theme.label),
                        Span::styled(node.text.clone(), self.theme.submitted),
                    ]);
                }
            }
        }

        frame
    }

    fn render_textbox(
        &self,
        form: &FormState,
        node: &ViewNode,
        ctx: &RenderContext,
        frame: &mut RenderFrame,
    ) {
        let Some(field) = node.field() else {
            return;
        };
        let input = form.input(field);
        let focused = ctx.focused_id.as_deref() == Some(input.id());
        let marker = focus_marker(focused);
        let prefix = format!("{marker} {}: ", input.label());
        let prefix_width = UnicodeWidthStr::width(prefix.as_str());

        if focused {
            if let Some(local) = input.cursor_pos() {
                frame.cursor = Some(CursorPos {
                    col: (prefix_width as u16).saturating_add(local.col),
                    row: frame.lines.len() as u16,
                });
            }
        }

        let mut line = vec![Span::styled(prefix, self.theme.label)];
        if let Some(first) = input.draw(ctx).lines.into_iter().next() {
            line.extend(first);
        }
        if field == Field::Message {
            line.push(Span::styled(" (optional)", self.theme.placeholder));
        }
        frame.lines.push(line);
    }
}
