//! Route file watcher for hot reload.
//!
//! Each change is re-read and validated before it is forwarded. A file
//! that fails to load, or that loads to the configuration already in
//! effect, produces no update.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::AppConfig;

/// Watches the route file and forwards validated updates.
pub struct ConfigWatcher {
    path: PathBuf,
    current: AppConfig,
    update_tx: mpsc::UnboundedSender<AppConfig>,
}

/// Handler addresses that differ between two route files.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct HandlerChanges {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

impl HandlerChanges {
    pub fn between(old: &AppConfig, new: &AppConfig) -> Self {
        let old_addresses = addresses(old);
        let new_addresses = addresses(new);
        Self {
            added: new_addresses.difference(&old_addresses).map(|a| a.to_string()).collect(),
            removed: old_addresses.difference(&new_addresses).map(|a| a.to_string()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

fn addresses(config: &AppConfig) -> BTreeSet<&str> {
    config.handlers.iter().map(|h| h.address.as_str()).collect()
}

impl ConfigWatcher {
    /// `current` is the configuration the router was built from.
    ///
    /// Returns the watcher and a receiver for validated configuration updates.
    pub fn new(path: &Path, current: AppConfig) -> (Self, mpsc::UnboundedReceiver<AppConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                current,
                update_tx,
            },
            update_rx,
        )
    }

    /// Re-read the route file and forward it if it changed anything.
    ///
    /// Returns whether an update was sent.
    pub fn reload(&mut self) -> bool {
        let new_config = match load_config(&self.path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Failed to reload routes: {}. Keeping current router.", e);
                return false;
            }
        };

        if new_config == self.current {
            tracing::debug!(path = ?self.path, "Route file unchanged");
            return false;
        }

        let changes = HandlerChanges::between(&self.current, &new_config);
        for address in &changes.added {
            tracing::info!(handler = %address, "Handler added");
        }
        for address in &changes.removed {
            tracing::info!(handler = %address, "Handler removed");
        }
        if changes.is_empty() {
            tracing::info!("Route settings changed, handler set unchanged");
        }

        self.current = new_config.clone();
        self.update_tx.send(new_config).is_ok()
    }

    /// Start watching the file in a background thread.
    ///
    /// The returned watcher must be kept alive for events to keep flowing.
    pub fn run(mut self) -> Result<RecommendedWatcher, notify::Error> {
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!("Route file change detected, reloading...");
                        self.reload();
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?path, "Config watcher started");
        Ok(watcher)
    }
}
