//! Data Sync
//!
//! Every mutation is followed by a full refetch; nothing is patched locally.

use leptos::prelude::*;

use crate::commands;
use crate::store::{AppStateStoreFields, AppStore};

/// Page lifecycle: `Loading` until the first refresh settles, then `Ready`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageState {
    #[default]
    Loading,
    Ready,
}

/// Gates the loading indicator to the first refresh of the page lifetime,
/// and orders overlapping refreshes: only the newest one started may apply
/// its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadGate {
    state: PageState,
    issued: u64,
}

impl LoadGate {
    pub fn is_first_load(&self) -> bool {
        self.state == PageState::Loading
    }

    pub fn show_loader(&self) -> bool {
        self.is_first_load()
    }

    pub fn page_state(&self) -> PageState {
        self.state
    }

    /// Start a refresh and take its ticket
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        ticket == self.issued
    }

    /// Settle the refresh holding `ticket`, successful or not.
    ///
    /// Returns false when a newer refresh was started meanwhile; its result
    /// must be dropped, and the loader stays up until the newer one settles.
    pub fn settle(&mut self, ticket: u64) -> bool {
        if !self.is_latest(ticket) {
            return false;
        }
        self.state = PageState::Ready;
        true
    }
}

/// Fetch the full collection and hand it to the store
pub async fn refresh(store: AppStore) {
    let ticket = store.gate().write().begin();
    let result = commands::list_todos().await;

    let applies = store.gate().write().settle(ticket);
    if !applies {
        web_sys::console::log_1(&format!("[SYNC] Dropping superseded refresh #{}", ticket).into());
        return;
    }

    match result {
        Ok(items) => {
            web_sys::console::log_1(&format!("[SYNC] Loaded {} todos", items.len()).into());
            store.items().set(items);
            store.error().set(None);
        }
        Err(e) => {
            web_sys::console::error_1(&format!("[SYNC] Failed to load todos: {}", e).into());
            store.error().set(Some(format!("Could not load todos: {}", e)));
        }
    }
}

/// Fetch backend connectivity once
pub async fn load_status(store: AppStore) {
    match commands::get_status().await {
        Ok(status) => store.status().set(Some(status)),
        Err(e) => {
            web_sys::console::error_1(&format!("[SYNC] Failed to load status: {}", e).into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_only_before_first_refresh() {
        let mut gate = LoadGate::default();
        assert!(gate.show_loader());
        assert_eq!(gate.page_state(), PageState::Loading);

        let first = gate.begin();
        assert!(gate.settle(first));
        assert!(!gate.show_loader());
        assert_eq!(gate.page_state(), PageState::Ready);

        // Later refreshes stay in Ready
        let second = gate.begin();
        assert!(gate.settle(second));
        assert!(!gate.is_first_load());
        assert_eq!(gate.page_state(), PageState::Ready);
    }

    #[test]
    fn test_older_refresh_finishing_last_is_dropped() {
        let mut gate = LoadGate::default();
        let older = gate.begin();
        let newer = gate.begin();

        assert!(gate.settle(newer));
        assert!(!gate.settle(older));
        assert!(gate.is_latest(newer));
    }

    #[test]
    fn test_superseded_first_refresh_keeps_loader_up() {
        let mut gate = LoadGate::default();
        let older = gate.begin();
        let newer = gate.begin();

        assert!(!gate.settle(older));
        assert!(gate.show_loader());

        assert!(gate.settle(newer));
        assert!(!gate.show_loader());
    }
}
