//! Topic content view.

use gyan_core::catalog::{LabelContext, TopicKind};
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Wrap},
};

use super::Palette;
use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
  let Some(topic) = app.current_topic() else {
    return;
  };

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Length(3), Constraint::Min(0)])
    .split(area);

  // Badges: completion, artifact availability, offline marker.
  let mut badges = vec![if topic.is_completed {
    Span::styled(" ✓ complete ", Style::default().fg(palette.done).add_modifier(Modifier::BOLD))
  } else {
    Span::styled(" ○ in progress ", Style::default().fg(palette.muted))
  }];
  if let Some(artifact) = &app.artifact {
    badges.push(Span::styled(
      format!(" PDF: {} ", artifact.suggested_file_name()),
      Style::default().fg(palette.accent),
    ));
    if app.is_offline() {
      badges.push(Span::styled(" ⬇ downloaded ", Style::default().fg(palette.done)));
    }
  } else if topic.kind == TopicKind::Artifact {
    badges.push(Span::styled(" PDF unavailable ", Style::default().fg(palette.muted)));
  }

  let header = Block::default()
    .title(format!(" {} ", topic.label(LabelContext::Display)))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(palette.muted));
  f.render_widget(Paragraph::new(Line::from(badges)).block(header), rows[0]);

  let body = Block::default()
    .borders(Borders::ALL)
    .border_style(Style::default().fg(palette.muted));
  f.render_widget(
    Paragraph::new(topic.body_text.as_str())
      .style(Style::default().fg(palette.fg))
      .wrap(Wrap { trim: false })
      .scroll((app.scroll, 0))
      .block(body),
    rows[1],
  );
}
