use crate::ui::results::StatusLine;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " ↑/↓: Select │ Enter/c: Copy │ q: Quit";

pub struct Footer<'a> {
    status: Option<&'a StatusLine>,
}

impl<'a> Footer<'a> {
    pub fn new(status: Option<&'a StatusLine>) -> Self {
        Self { status }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let (status, status_style) = match self.status {
            Some(StatusLine::Copied(label)) => (
                format!(" │ Copied {label}"),
                Style::default().fg(STATUS_OK),
            ),
            Some(StatusLine::Error(message)) => (
                format!(" │ {message}"),
                Style::default().fg(STATUS_ERROR),
            ),
            None => (String::new(), text_style),
        };
        let version = format!("v{} ", VERSION);

        // Pad by char count, not byte count (for Unicode)
        let used = HINTS.chars().count() + status.chars().count() + version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width.saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(HINTS, text_style),
            Span::styled(status, status_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
