//! `gyan`: terminal study browser.
//!
//! # Usage
//!
//! ```
//! gyan
//! gyan --metadata-url https://project.example --api-key <anon key>
//! gyan --config ~/.config/gyan/config.toml --catalog ./catalog.json
//! ```

mod app;
mod clipboard;
mod settings;
mod ui;

#[cfg(test)]
mod tests;

use std::{
  fs::{self, OpenOptions},
  io,
  path::PathBuf,
  sync::{Arc, Mutex},
  time::Duration,
};

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use crossterm::{
  event::{self, Event},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use gyan_artifacts::{
  ArtifactCache, HttpFetcher, Platform, RemoteMetadata, StorageLocation,
  metadata::MetadataConfig,
  share::SystemOpener,
  writer::{DownloadsFolder, Strategies},
};
use gyan_core::{
  artifact::ArtifactLocator,
  catalog::ContentCatalog,
  download::DownloadTracker,
  seed::seed_catalog,
};
use gyan_store_sqlite::SqliteStore;
use ratatui::{Terminal, backend::CrosstermBackend};
use settings::{Overrides, Settings};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "gyan", version, about = "Terminal browser for Gyan study notes")]
struct Args {
  /// Path to a TOML config file.
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Directory holding the local database and log file.
  #[arg(long, env = "GYAN_DATA_DIR")]
  data_dir: Option<PathBuf>,

  /// JSON catalog to use instead of the built-in one.
  #[arg(long = "catalog", env = "GYAN_CATALOG_PATH")]
  catalog_path: Option<PathBuf>,

  /// Base URL of the artifact metadata service.
  #[arg(long, env = "GYAN_METADATA_URL")]
  metadata_url: Option<String>,

  /// API key for the metadata and storage services.
  #[arg(long, env = "GYAN_API_KEY", hide_env_values = true)]
  api_key: Option<String>,

  /// Base URL of the object storage server (default: the metadata URL).
  #[arg(long, env = "GYAN_STORAGE_URL")]
  storage_url: Option<String>,

  /// Storage bucket holding the PDFs.
  #[arg(long, env = "GYAN_BUCKET")]
  bucket: Option<String>,

  /// Where downloaded PDFs are saved.
  #[arg(long, env = "GYAN_DOWNLOADS_DIR")]
  downloads_dir: Option<PathBuf>,
}

impl Args {
  fn overrides(&self) -> Overrides {
    Overrides {
      data_dir:      self.data_dir.clone(),
      catalog_path:  self.catalog_path.clone(),
      metadata_url:  self.metadata_url.clone(),
      api_key:       self.api_key.clone(),
      storage_url:   self.storage_url.clone(),
      bucket:        self.bucket.clone(),
      downloads_dir: self.downloads_dir.clone(),
    }
  }
}

// ─── Entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();
  let config_path = args.config.clone().unwrap_or_else(settings::default_config_path);
  let settings = Settings::load(&config_path, args.overrides())?;

  let data_dir = settings.data_dir();
  fs::create_dir_all(&data_dir)
    .with_context(|| format!("creating data directory {}", data_dir.display()))?;
  init_tracing(&data_dir)?;
  tracing::info!(config = %config_path.display(), data_dir = %data_dir.display(), "starting gyan");

  let catalog = load_catalog(&settings)?;
  let db_path = data_dir.join("gyan.db");
  let store = SqliteStore::open(&db_path)
    .with_context(|| format!("failed to open store at {}", db_path.display()))?;

  let platform = Platform {
    strategies:  Strategies::detect(
      None,
      Arc::new(DownloadsFolder::new(settings.downloads_dir())),
    ),
    opener:      Arc::new(SystemOpener),
    share_sheet: None,
    clipboard:   Arc::new(clipboard::Osc52Clipboard),
  };
  let location = StorageLocation::new(
    settings.storage_url().unwrap_or_default(),
    settings.bucket.clone(),
  );
  let cache = ArtifactCache::new(
    HttpFetcher::new(),
    location,
    DownloadTracker::load(store.clone()),
    platform,
  );
  let locator = settings
    .metadata_url
    .clone()
    .map(|base_url| {
      RemoteMetadata::new(MetadataConfig::new(base_url, settings.api_key.clone()))
        .map(ArtifactLocator::new)
    })
    .transpose()
    .context("failed to build metadata client")?;
  if locator.is_none() {
    tracing::info!("no metadata_url configured; only seeded artifact paths resolve");
  }

  let mut app = App::new(catalog, store, cache, locator);

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  let run_result = run_event_loop(&mut terminal, &mut app).await;

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

/// Log to `<data_dir>/gyan.log`; the terminal belongs to the UI.
fn init_tracing(data_dir: &std::path::Path) -> Result<()> {
  let log_path = data_dir.join("gyan.log");
  let file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(&log_path)
    .with_context(|| format!("opening log file {}", log_path.display()))?;

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_ansi(false)
    .with_writer(Mutex::new(file))
    .init();
  Ok(())
}

fn load_catalog(settings: &Settings) -> Result<ContentCatalog> {
  match settings.catalog_path() {
    Some(path) => {
      let raw = fs::read_to_string(&path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
      ContentCatalog::from_json(&raw)
        .with_context(|| format!("parsing catalog {}", path.display()))
    }
    None => seed_catalog().context("building the built-in catalog"),
  }
}

// ─── Event loop ──────────────────────────────────────────────────────────────

async fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App,
) -> Result<()> {
  loop {
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    // Poll for an event, yielding control to tokio while waiting.
    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(Duration::from_millis(50))? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    if let Some(Event::Key(key)) = maybe_event
      && !app.handle_key(key).await
    {
      break;
    }
  }

  Ok(())
}
