use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use std::time::Duration;

pub struct Header {
    poll_interval: Duration,
    changes: u64,
}

impl Header {
    pub fn new(poll_interval: Duration, changes: u64) -> Self {
        Self {
            poll_interval,
            changes,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("clipmorph", title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("polling every {}ms", self.poll_interval.as_millis()),
                text_style,
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} changes", self.changes), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
