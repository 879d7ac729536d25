// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, RwLock};

use crate::domain::activities::models::ActivityName;
use crate::domain::view::models::ViewState;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// How long a status message stays visible before it is hidden again.
    pub status_display_duration: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            status_display_duration: Duration::from_millis(5000),
        }
    }
}

pub struct AppContext {
    pub config: AppConfig,
    pub view_state: RwLock<ViewState>,
    catalog_request_seq: AtomicU64,
    status_generation: AtomicU64,
    mutation_locks: Mutex<HashMap<ActivityName, Arc<tokio::sync::Mutex<()>>>>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            view_state: Default::default(),
            catalog_request_seq: Default::default(),
            status_generation: Default::default(),
            mutation_locks: Default::default(),
        }
    }
}

impl AppContext {
    /// Hands out the ticket for a new catalog request. Only the response to the most recently
    /// issued request gets rendered.
    pub fn next_catalog_request(&self) -> u64 {
        self.catalog_request_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_latest_catalog_request(&self, ticket: u64) -> bool {
        self.catalog_request_seq.load(Ordering::SeqCst) == ticket
    }

    /// Called whenever a status message is shown. Hide timers of older messages compare their
    /// generation against the current one and become no-ops.
    pub fn next_status_generation(&self) -> u64 {
        self.status_generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current_status(&self, generation: u64) -> bool {
        self.status_generation.load(Ordering::SeqCst) == generation
    }

    /// The lock serializing signups and unregistrations for `activity`.
    pub fn mutation_lock(&self, activity: &ActivityName) -> Arc<tokio::sync::Mutex<()>> {
        self.mutation_locks
            .lock()
            .entry(activity.clone())
            .or_default()
            .clone()
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
