//! TUI rendering; orchestrates all panes.

pub mod content;
pub mod list;
pub mod progress;

use chrono::Local;
use gyan_core::{nav::View, preferences::Theme};
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};

use crate::app::App;

// ─── Palette ─────────────────────────────────────────────────────────────────

/// Colours for the active theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
  pub fg:        Color,
  pub bg:        Color,
  pub bar:       Color,
  pub accent:    Color,
  pub muted:     Color,
  pub done:      Color,
  pub selection: Color,
}

impl Palette {
  pub fn for_theme(theme: Theme) -> Self {
    match theme {
      Theme::Light => Self {
        fg:        Color::Black,
        bg:        Color::White,
        bar:       Color::Gray,
        accent:    Color::Blue,
        muted:     Color::DarkGray,
        done:      Color::Green,
        selection: Color::LightBlue,
      },
      Theme::Dark => Self {
        fg:        Color::White,
        bg:        Color::Black,
        bar:       Color::DarkGray,
        accent:    Color::Cyan,
        muted:     Color::Gray,
        done:      Color::LightGreen,
        selection: Color::Blue,
      },
    }
  }

  pub fn base(&self) -> Style { Style::default().fg(self.fg).bg(self.bg) }
}

// ─── Root draw ───────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let palette = Palette::for_theme(app.theme());
  let area = f.area();
  f.render_widget(Block::default().style(palette.base()), area);

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0], app, &palette);
  match app.nav.view() {
    View::Content { .. } => content::draw(f, rows[1], app, &palette),
    View::Progress => progress::draw(f, rows[1], app, &palette),
    _ => list::draw(f, rows[1], app, &palette),
  }
  draw_status(f, rows[2], app, &palette);
}

// ─── Header ──────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let left = Span::styled(
    format!(" {}", app.title()),
    Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(format!("{date} "), Style::default().fg(palette.muted));

  let pad = area
    .width
    .saturating_sub(left.width() as u16)
    .saturating_sub(right.width() as u16);

  let line = Line::from(vec![left, Span::raw(" ".repeat(pad as usize)), right]);
  f.render_widget(Paragraph::new(line).style(Style::default().bg(palette.bar)), area);
}

// ─── Status bar ──────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
  let (mode_label, hints) = match app.nav.view() {
    _ if app.search.is_some() => ("SEARCH", "Type to search  Enter go  Esc cancel"),
    View::Content { .. } => (
      "READ",
      "c complete  o open  d download  s share  x forget  jk scroll  Esc back",
    ),
    _ => ("BROWSE", "jk move  Enter open  Esc back  / search  1 home  2 subjects  3 progress  t theme  q quit"),
  };

  let status = match &app.search {
    Some(query) => format!("/{query}_"),
    None if app.status_msg.is_empty() => hints.to_owned(),
    None => app.status_msg.clone(),
  };

  let line = Line::from(vec![
    Span::styled(
      format!(" {mode_label} "),
      Style::default()
        .fg(palette.bg)
        .bg(palette.accent)
        .add_modifier(Modifier::BOLD),
    ),
    Span::styled(format!("  {status}"), Style::default().fg(palette.muted)),
  ]);
  f.render_widget(Paragraph::new(line).style(Style::default().bg(palette.bar)), area);
}
