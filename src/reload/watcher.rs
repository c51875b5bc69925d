//! Source-tree watcher feeding the reload supervisor.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::ReloadConfig;

/// A single observed source change.
#[derive(Debug, Clone)]
pub struct ReloadEvent {
    /// First non-ignored path in the filesystem event.
    pub path: PathBuf,
}

/// Watches the configured paths and emits [`ReloadEvent`]s on change.
pub struct SourceWatcher {
    paths: Vec<PathBuf>,
    debounce: Duration,
    update_tx: mpsc::UnboundedSender<ReloadEvent>,
}

impl SourceWatcher {
    /// Create a new SourceWatcher.
    ///
    /// Returns the watcher and the receiver the supervisor listens on.
    pub fn new(config: &ReloadConfig) -> (Self, mpsc::UnboundedReceiver<ReloadEvent>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                paths: config.paths.clone(),
                debounce: Duration::from_millis(config.debounce_ms),
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching in a background thread.
    ///
    /// The returned watcher must stay alive for events to keep flowing.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx;
        let debounce = self.debounce;
        let mut last_emit: Option<Instant> = None;

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if !is_relevant(&event) {
                        return;
                    }
                    let Some(path) = event.paths.iter().find(|p| !is_ignored(p)) else {
                        return;
                    };
                    if let Some(t) = last_emit {
                        if t.elapsed() < debounce {
                            return;
                        }
                    }
                    last_emit = Some(Instant::now());

                    tracing::info!(path = %path.display(), "Source change detected");
                    let _ = tx.send(ReloadEvent { path: path.clone() });
                }
                Err(e) => tracing::error!(error = %e, "Watch error"),
            },
            Config::default(),
        )?;

        for path in &self.paths {
            watcher.watch(path, RecursiveMode::Recursive)?;
        }

        tracing::info!(paths = ?self.paths, "Source watcher started");
        Ok(watcher)
    }
}

fn is_relevant(event: &Event) -> bool {
    event.kind.is_modify() || event.kind.is_create() || event.kind.is_remove()
}

/// Build artifacts, VCS metadata, and editor droppings never trigger a
/// restart.
fn is_ignored(path: &Path) -> bool {
    let in_ignored_dir = path.components().any(|c| {
        matches!(
            c.as_os_str().to_str(),
            Some("target") | Some(".git") | Some(".hg")
        )
    });
    if in_ignored_dir {
        return true;
    }

    match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => {
            name.ends_with('~')
                || name.ends_with(".swp")
                || name.ends_with(".swx")
                || name.ends_with(".tmp")
                || name.starts_with(".#")
        }
        None => false,
    }
}
