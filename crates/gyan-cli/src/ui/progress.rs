//! Progress dashboard: overall and per-subject completion plus recent reads.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Gauge, Paragraph},
};

use super::{Palette, list};
use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
  let summary = app.summary();

  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
    .split(area);

  let block = Block::default()
    .title(" Overview ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(palette.muted));
  let inner = block.inner(cols[0]);
  f.render_widget(block, cols[0]);

  let mut constraints = vec![Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)];
  constraints.extend(summary.subjects.iter().map(|_| Constraint::Length(1)));
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints(constraints)
    .split(inner);

  f.render_widget(
    Paragraph::new(Line::from(vec![
      Span::styled(
        format!("{}/{} complete", summary.completed_topics, summary.total_topics),
        Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
      ),
      Span::styled(
        format!("   {} read today", summary.read_today),
        Style::default().fg(palette.muted),
      ),
    ])),
    rows[0],
  );
  f.render_widget(
    Gauge::default()
      .gauge_style(Style::default().fg(palette.done))
      .percent(summary.percent().into()),
    rows[1],
  );

  for (subject, row) in summary.subjects.iter().zip(rows.iter().skip(3)) {
    f.render_widget(
      Gauge::default()
        .gauge_style(Style::default().fg(palette.accent))
        .label(format!(
          "{} {}  {}/{}",
          subject.icon, subject.display_name, subject.completed, subject.total
        ))
        .percent(subject.percent().into()),
      *row,
    );
  }

  list::draw(f, cols[1], app, palette);
}
