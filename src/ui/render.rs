use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());
    let results = app.results();

    frame.render_widget(Header::new(app.poll_interval(), results.changes).widget(), header);
    frame.render_widget(Clear, body);
    draw_results(frame, app, body);
    frame.render_widget(Footer::new(results.status.as_ref()).widget(footer), footer);
}

fn draw_results(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let results = app.results();
    let block = Block::default()
        .borders(Borders::NONE)
        .style(Style::default().fg(HEADER_TEXT));

    if results.is_empty() {
        let waiting = Paragraph::new(Line::from(Span::styled(
            "  Waiting for clipboard text…",
            Style::default().fg(HEADER_SEPARATOR),
        )))
        .block(block);
        frame.render_widget(waiting, area);
        return;
    }

    let label_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let items: Vec<ListItem> = results
        .rows
        .iter()
        .map(|row| {
            let mut lines = vec![Line::from(Span::styled(row.label.clone(), label_style))];
            lines.extend(row.text.lines().map(|line| Line::from(format!("  {line}"))));
            lines.push(Line::from(""));
            ListItem::new(Text::from(lines))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("▶ ");
    let mut state = ListState::default().with_selected(Some(results.selected));
    frame.render_stateful_widget(list, area, &mut state);
}
