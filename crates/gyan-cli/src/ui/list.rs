//! List views: home, subjects, chapters, topics and search results.

use gyan_core::nav::View;
use ratatui::{
  Frame,
  layout::Rect,
  style::{Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::Palette;
use crate::app::App;

/// Render the entries of the current view into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
  let entries = app.entries();

  let title = match app.nav.view() {
    View::Search { query, .. } => format!(" {} matches for \"{query}\" ", entries.len()),
    _ => format!(" {} ", app.title()),
  };
  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(palette.muted));

  if entries.is_empty() {
    let hint = match app.nav.view() {
      View::Search { .. } => "No topics match.",
      _ => "Nothing here yet.",
    };
    f.render_widget(
      Paragraph::new(hint).style(Style::default().fg(palette.muted)).block(block),
      area,
    );
    return;
  }

  let items: Vec<ListItem> = entries
    .iter()
    .map(|entry| {
      let label_style = if entry.done {
        Style::default().fg(palette.done)
      } else {
        Style::default().fg(palette.fg)
      };
      ListItem::new(Line::from(vec![
        Span::raw(format!("{} ", entry.icon)),
        Span::styled(entry.label.clone(), label_style),
        Span::styled(format!("  {}", entry.detail), Style::default().fg(palette.muted)),
      ]))
    })
    .collect();

  let mut state = ListState::default();
  state.select(Some(app.cursor.min(entries.len() - 1)));

  f.render_stateful_widget(
    List::new(items).block(block).highlight_style(
      Style::default()
        .bg(palette.selection)
        .add_modifier(Modifier::BOLD),
    ),
    area,
    &mut state,
  );
}
