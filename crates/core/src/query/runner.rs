//! Fetch lifecycle shared by every query hook.
//!
//! State lives in a `watch` channel next to the generation of the fetch that
//! is allowed to write it. A fetch task commits only when its token is still
//! live and its generation is still current, checked under the channel's
//! write lock, so a superseded fetch can never overwrite a newer result.

use std::future::Future;
use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use super::model::QueryState;
use crate::errors::Result;

#[derive(Debug)]
struct Slot<T> {
    state: QueryState<T>,
    generation: u64,
}

pub(crate) struct QueryRunner<T> {
    label: &'static str,
    tx: Arc<watch::Sender<Slot<T>>>,
    generation: u64,
    token: Option<CancellationToken>,
}

impl<T> QueryRunner<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub(crate) fn new(label: &'static str, initial: Option<T>) -> Self {
        let (tx, _rx) = watch::channel(Slot {
            state: QueryState::new(initial),
            generation: 0,
        });
        Self {
            label,
            tx: Arc::new(tx),
            generation: 0,
            token: None,
        }
    }

    pub(crate) fn state(&self) -> QueryState<T> {
        self.tx.borrow().state.clone()
    }

    /// Cancel the in-flight fetch, if any, and retire its generation.
    fn supersede(&mut self) -> u64 {
        if let Some(token) = self.token.take() {
            token.cancel();
        }
        self.generation += 1;
        self.generation
    }

    /// Run `fetch` as the new active fetch, cancelling the previous one.
    ///
    /// Must be called from within a Tokio runtime.
    pub(crate) fn start<F>(&mut self, fetch: F)
    where
        F: Future<Output = Result<T>> + Send + 'static,
    {
        let generation = self.supersede();
        let token = CancellationToken::new();
        self.token = Some(token.clone());

        self.tx.send_modify(|slot| {
            slot.generation = generation;
            slot.state.is_loading = true;
            slot.state.error = None;
        });

        let tx = Arc::clone(&self.tx);
        let label = self.label;
        tokio::spawn(async move {
            let outcome = tokio::select! {
                _ = token.cancelled() => {
                    debug!("{} fetch #{} cancelled", label, generation);
                    return;
                }
                outcome = fetch => outcome,
            };

            let committed = tx.send_if_modified(|slot| {
                if token.is_cancelled() || slot.generation != generation {
                    return false;
                }
                match outcome {
                    Ok(data) => slot.state.data = Some(data),
                    Err(err) => {
                        warn!("{} fetch #{} failed: {}", label, generation, err);
                        slot.state.error = Some(err);
                    }
                }
                slot.state.is_loading = false;
                true
            });

            if !committed {
                debug!("{} fetch #{} superseded, result dropped", label, generation);
            }
        });
    }

    /// Cancel any in-flight fetch and apply `reset` to the state.
    pub(crate) fn stop<F>(&mut self, reset: F)
    where
        F: FnOnce(&mut QueryState<T>),
    {
        let generation = self.supersede();
        self.tx.send_modify(|slot| {
            slot.generation = generation;
            reset(&mut slot.state);
        });
    }

    pub(crate) fn record_refetch(&self) {
        self.tx.send_modify(|slot| slot.state.refetch_count += 1);
    }

    /// Wait until no fetch is loading and return the resulting state.
    ///
    /// A fetch that never resolves keeps this pending.
    pub(crate) async fn settled(&self) -> QueryState<T> {
        let mut rx = self.tx.subscribe();
        loop {
            {
                let slot = rx.borrow_and_update();
                if !slot.state.is_loading {
                    return slot.state.clone();
                }
            }
            if rx.changed().await.is_err() {
                return self.state();
            }
        }
    }
}

impl<T> Drop for QueryRunner<T> {
    fn drop(&mut self) {
        if let Some(token) = self.token.take() {
            token.cancel();
        }
    }
}
