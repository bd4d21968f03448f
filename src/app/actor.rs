//! Store actor - message loop applying UI events to the store one at a time

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};

use crate::app::debounce::SearchDebouncer;
use crate::app::state::ViewStateStore;
use crate::error::StoreResult;
use crate::messages::{RenderState, UiEvent};

/// Actor owning the store; the only writer for the whole session
pub struct StoreActor {
    store: ViewStateStore,
    search: SearchDebouncer,
    render_tx: mpsc::UnboundedSender<RenderState>,
    last_error: Option<String>,
}

impl StoreActor {
    pub fn new(
        store: ViewStateStore,
        search_debounce: Duration,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        StoreActor {
            store,
            search: SearchDebouncer::new(search_debounce),
            render_tx,
            last_error: None,
        }
    }

    /// Run the actor message loop. Returns the store when the loop ends.
    pub async fn run(mut self, mut ui_rx: mpsc::UnboundedReceiver<UiEvent>) -> ViewStateStore {
        // Send initial render state
        self.publish();

        loop {
            let deadline = self.search.deadline();
            // Unused placeholder when nothing is pending; the branch is disabled
            let wake_at = deadline.unwrap_or_else(Instant::now);

            tokio::select! {
                event = ui_rx.recv() => {
                    let Some(event) = event else { break };
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        break;
                    }
                    self.publish();
                }
                _ = sleep_until(wake_at), if deadline.is_some() => {
                    if let Some(query) = self.search.take_due(Instant::now()) {
                        tracing::debug!(query = %query, "Applying debounced search");
                        self.store.set_search(&query);
                        self.last_error = None;
                        self.publish();
                    }
                }
            }
        }

        tracing::info!("Store actor stopped");
        self.store
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        if event.is_mutation() {
            tracing::info!(event = ?event, "Applying mutation");
        } else {
            tracing::trace!(event = ?event, "Applying event");
        }

        let result: StoreResult<()> = match event {
            // Navigation
            UiEvent::SetView(view) => {
                self.store.set_view(view);
                Ok(())
            }
            UiEvent::NavigateInto(name) => {
                self.store.navigate_into_folder(&name);
                Ok(())
            }
            UiEvent::NavigateUp => {
                self.store.navigate_up();
                Ok(())
            }
            UiEvent::NavigateToIndex(index) => {
                self.store.navigate_to_path_index(index);
                Ok(())
            }

            // Toolbar
            UiEvent::SetViewMode(mode) => {
                self.store.set_view_mode(mode);
                Ok(())
            }
            UiEvent::SetSort(field) => {
                self.store.set_sort(field);
                Ok(())
            }
            UiEvent::SetFilter(filter) => {
                self.store.set_filter(filter);
                Ok(())
            }
            UiEvent::SearchInput(query) => {
                self.search.push(query, Instant::now());
                Ok(())
            }
            UiEvent::SetSearch(query) => {
                self.search.cancel();
                self.store.set_search(&query);
                Ok(())
            }

            // Modals
            UiEvent::CreateFolder(name) => self.store.create_folder(&name).map(|_| ()),
            UiEvent::AddFile { name, size, extension } => {
                self.store.add_file(&name, &size, &extension).map(|_| ())
            }
            UiEvent::Rename { id, new_name, kind } => self.store.rename_item(&id, &new_name, kind),
            UiEvent::Delete { id, kind } => self.store.delete_item(&id, kind),
            UiEvent::DeleteMany(items) => {
                let deleted = self.store.delete_items(&items);
                tracing::info!(requested = items.len(), deleted, "Batch delete finished");
                Ok(())
            }
            UiEvent::DeleteSelected => {
                let deleted = self.store.delete_selected();
                tracing::info!(deleted, "Deleted selection");
                Ok(())
            }

            // Drag and drop
            UiEvent::FilesDropped(files) => {
                let added = self.store.add_dropped_files(&files);
                tracing::info!(dropped = files.len(), added = added.len(), "Dropped files added");
                Ok(())
            }

            // Selection
            UiEvent::ToggleSelection(id) => {
                self.store.toggle_selection(&id);
                Ok(())
            }
            UiEvent::SelectAll => {
                self.store.select_all();
                Ok(())
            }
            UiEvent::ClearSelection => {
                self.store.clear_selection();
                Ok(())
            }

            // System
            UiEvent::Quit => return true,
        };

        self.last_error = match result {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Rejected mutation");
                Some(e.to_string())
            }
        };
        false
    }

    fn publish(&self) {
        let mut state = self.store.to_render_state();
        state.pending_search = self.search.pending_query().map(str::to_string);
        state.last_error = self.last_error.clone();
        let _ = self.render_tx.send(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemKind, SortField, SortOrder, ViewTag};
    use crate::seed::Seed;

    fn spawn_actor() -> (
        mpsc::UnboundedSender<UiEvent>,
        mpsc::UnboundedReceiver<RenderState>,
        tokio::task::JoinHandle<ViewStateStore>,
    ) {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();
        let store = ViewStateStore::new(Seed::builtin().unwrap());
        let actor = StoreActor::new(store, Duration::from_millis(300), render_tx);
        let handle = tokio::spawn(actor.run(ui_rx));
        (ui_tx, render_rx, handle)
    }

    #[tokio::test(start_paused = true)]
    async fn test_publishes_initial_and_per_event_state() {
        let (ui_tx, mut render_rx, handle) = spawn_actor();

        let initial = render_rx.recv().await.unwrap();
        assert_eq!(initial.folders.len(), 6);

        ui_tx.send(UiEvent::SetSort(SortField::Name)).unwrap();
        let sorted = render_rx.recv().await.unwrap();
        assert_eq!(sorted.sort.order, SortOrder::Desc);

        ui_tx.send(UiEvent::SetView(ViewTag::Recent)).unwrap();
        let recent = render_rx.recv().await.unwrap();
        assert_eq!(recent.path, vec!["Recent"]);
        assert!(recent.folders.is_empty());

        ui_tx.send(UiEvent::Quit).unwrap();
        let store = handle.await.unwrap();
        assert_eq!(store.view(), ViewTag::Recent);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_input_is_debounced() {
        let (ui_tx, mut render_rx, handle) = spawn_actor();
        render_rx.recv().await.unwrap();

        for query in ["b", "bu", "bud"] {
            ui_tx.send(UiEvent::SearchInput(query.to_string())).unwrap();
            let state = render_rx.recv().await.unwrap();
            assert_eq!(state.search, "");
            assert_eq!(state.pending_search.as_deref(), Some(query));
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        let applied = render_rx.recv().await.unwrap();
        assert_eq!(applied.search, "bud");
        assert_eq!(applied.pending_search, None);
        assert_eq!(applied.files.len(), 1);
        assert_eq!(applied.files[0].id, "file-6");

        ui_tx.send(UiEvent::Quit).unwrap();
        let store = handle.await.unwrap();
        assert_eq!(store.search(), "bud");
    }

    #[tokio::test(start_paused = true)]
    async fn test_immediate_search_cancels_pending_input() {
        let (ui_tx, mut render_rx, handle) = spawn_actor();
        render_rx.recv().await.unwrap();

        ui_tx.send(UiEvent::SearchInput(String::from("draft"))).unwrap();
        render_rx.recv().await.unwrap();
        ui_tx.send(UiEvent::SetSearch(String::new())).unwrap();
        let cleared = render_rx.recv().await.unwrap();
        assert_eq!(cleared.pending_search, None);

        tokio::time::sleep(Duration::from_secs(1)).await;
        ui_tx.send(UiEvent::Quit).unwrap();
        let store = handle.await.unwrap();
        assert_eq!(store.search(), "");
        assert!(render_rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejected_mutation_is_reported() {
        let (ui_tx, mut render_rx, handle) = spawn_actor();
        render_rx.recv().await.unwrap();

        ui_tx.send(UiEvent::CreateFolder(String::from("   "))).unwrap();
        let rejected = render_rx.recv().await.unwrap();
        assert!(rejected.last_error.is_some());
        assert_eq!(rejected.folders.len(), 6);

        ui_tx
            .send(UiEvent::Delete {
                id: String::from("folder-1"),
                kind: ItemKind::Folder,
            })
            .unwrap();
        let deleted = render_rx.recv().await.unwrap();
        assert!(deleted.last_error.is_none());
        assert_eq!(deleted.folders.len(), 5);

        drop(ui_tx);
        let store = handle.await.unwrap();
        assert_eq!(store.folders().len(), 5);
    }
}
