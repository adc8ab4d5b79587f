//! Ephemeral notification queue with auto-expiry.
//!
//! Each toast with a non-zero duration gets its own scheduled removal task.
//! Timer handles are tracked per toast id together with a sequence number,
//! so manual removal cancels the pending expiry and a stale timer can never
//! remove a record created later under a reused id.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::task::AbortHandle;
use tracing::debug;

use cartwheel_core::{ToastId, ToastKind};

/// Application default display time for a toast.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(4);

/// A queued notification.
///
/// A zero duration means the toast persists until manually dismissed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastRecord {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub created_at: DateTime<Utc>,
    pub duration: Duration,
}

/// Options for [`ToastStore::show`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ToastOptions {
    /// Display time; `None` uses [`DEFAULT_DURATION`].
    pub duration: Option<Duration>,
    /// Explicit id; `None` assigns the next id from the store's counter.
    pub id: Option<ToastId>,
}

impl ToastOptions {
    /// Options with an explicit display time.
    #[must_use]
    pub const fn lasting(duration: Duration) -> Self {
        Self {
            duration: Some(duration),
            id: None,
        }
    }

    /// Options for a toast that persists until manually dismissed.
    #[must_use]
    pub const fn sticky() -> Self {
        Self::lasting(Duration::ZERO)
    }

    /// Set an explicit id.
    #[must_use]
    pub const fn with_id(mut self, id: ToastId) -> Self {
        self.id = Some(id);
        self
    }
}

/// Partial update for [`ToastStore::update`]. `None` fields are left as-is.
#[derive(Debug, Clone, Default)]
pub struct ToastUpdate {
    pub message: Option<String>,
    pub kind: Option<ToastKind>,
    pub duration: Option<Duration>,
}

struct ExpiryTimer {
    seq: u64,
    handle: AbortHandle,
}

struct ToastInner {
    toasts: Vec<ToastRecord>,
    timers: HashMap<ToastId, ExpiryTimer>,
    next_id: u64,
    next_timer_seq: u64,
}

/// Toast notification store.
///
/// Cheaply cloneable handle over shared state; expiry tasks hold their own
/// clone.
#[derive(Clone, Default)]
pub struct ToastStore {
    inner: Arc<Mutex<ToastInner>>,
}

impl Default for ToastInner {
    fn default() -> Self {
        Self {
            toasts: Vec::new(),
            timers: HashMap::new(),
            next_id: 1,
            next_timer_seq: 0,
        }
    }
}

impl ToastStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast and schedule its removal.
    ///
    /// With a non-zero duration the removal is scheduled on the current
    /// tokio runtime. Showing again under an existing id replaces the record
    /// in place but leaves any pending expiry untouched - only explicit
    /// removal cancels a scheduled expiry.
    pub fn show(
        &self,
        message: impl Into<String>,
        kind: ToastKind,
        options: ToastOptions,
    ) -> ToastId {
        let mut inner = self.inner.lock();

        let id = options.id.unwrap_or(ToastId::new(inner.next_id));
        if id.as_u64() >= inner.next_id {
            inner.next_id = id.as_u64() + 1;
        }

        let duration = options.duration.unwrap_or(DEFAULT_DURATION);
        let record = ToastRecord {
            id,
            message: message.into(),
            kind,
            created_at: Utc::now(),
            duration,
        };

        if let Some(existing) = inner.toasts.iter_mut().find(|t| t.id == id) {
            *existing = record;
        } else {
            inner.toasts.push(record);
        }

        if !duration.is_zero() && !inner.timers.contains_key(&id) {
            let seq = inner.next_timer_seq;
            inner.next_timer_seq += 1;
            let handle = self.spawn_expiry(id, seq, duration);
            inner.timers.insert(id, ExpiryTimer { seq, handle });
        }

        id
    }

    /// Remove a toast, cancelling its pending expiry. No-op if absent.
    pub fn remove(&self, id: ToastId) {
        let mut inner = self.inner.lock();
        if let Some(timer) = inner.timers.remove(&id) {
            timer.handle.abort();
        }
        inner.toasts.retain(|t| t.id != id);
    }

    /// Empty the queue immediately, cancelling every pending expiry.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        for timer in inner.timers.values() {
            timer.handle.abort();
        }
        inner.timers.clear();
        inner.toasts.clear();
    }

    /// Merge fields into an existing record in place. No-op if absent;
    /// never touches timers.
    pub fn update(&self, id: ToastId, update: ToastUpdate) {
        let mut inner = self.inner.lock();
        let Some(record) = inner.toasts.iter_mut().find(|t| t.id == id) else {
            debug!(toast = %id, "update for unknown toast ignored");
            return;
        };
        if let Some(message) = update.message {
            record.message = message;
        }
        if let Some(kind) = update.kind {
            record.kind = kind;
        }
        if let Some(duration) = update.duration {
            record.duration = duration;
        }
    }

    /// Snapshot of the queue, oldest first.
    #[must_use]
    pub fn toasts(&self) -> Vec<ToastRecord> {
        self.inner.lock().toasts.clone()
    }

    /// Look up a toast by id.
    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<ToastRecord> {
        self.inner.lock().toasts.iter().find(|t| t.id == id).cloned()
    }

    /// Number of queued toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().toasts.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().toasts.is_empty()
    }

    fn spawn_expiry(&self, id: ToastId, seq: u64, duration: Duration) -> AbortHandle {
        let store = self.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            store.expire(id, seq);
        });
        task.abort_handle()
    }

    /// Apply a fired expiry timer, unless it has gone stale.
    fn expire(&self, id: ToastId, seq: u64) {
        let mut inner = self.inner.lock();
        match inner.timers.get(&id) {
            Some(timer) if timer.seq == seq => {}
            // Removed or superseded since scheduling: the timer is stale.
            _ => return,
        }
        inner.timers.remove(&id);
        inner.toasts.retain(|t| t.id != id);
        debug!(toast = %id, "toast expired");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    async fn settle(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_expires_after_duration() {
        let store = ToastStore::new();
        store.show(
            "saved",
            ToastKind::Success,
            ToastOptions::lasting(Duration::from_millis(100)),
        );
        assert_eq!(store.len(), 1);

        settle(150).await;
        assert!(store.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_remove_before_expiry_cancels_timer() {
        let store = ToastStore::new();
        let id = store.show(
            "saved",
            ToastKind::Success,
            ToastOptions::lasting(Duration::from_millis(100)),
        );
        store.remove(id);
        assert!(store.is_empty());

        // A new toast reusing the id must survive the original deadline.
        store.show(
            "again",
            ToastKind::Info,
            ToastOptions::sticky().with_id(id),
        );
        settle(200).await;
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(id).unwrap().message, "again");
    }

    #[tokio::test(start_paused = true)]
    async fn test_sticky_toast_persists() {
        let store = ToastStore::new();
        let id = store.show("pinned", ToastKind::Warning, ToastOptions::sticky());

        settle(60_000).await;
        assert_eq!(store.len(), 1);

        store.remove(id);
        assert!(store.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reshow_does_not_cancel_pending_expiry() {
        let store = ToastStore::new();
        let id = store.show(
            "first",
            ToastKind::Info,
            ToastOptions::lasting(Duration::from_millis(100)),
        );

        // Re-show under the same id with a much longer duration; the
        // original deadline still applies.
        store.show(
            "second",
            ToastKind::Info,
            ToastOptions::lasting(Duration::from_secs(60)).with_id(id),
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(id).unwrap().message, "second");

        settle(150).await;
        assert!(store.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_cancels_all_timers() {
        let store = ToastStore::new();
        store.show("a", ToastKind::Info, ToastOptions::lasting(Duration::from_millis(50)));
        store.show("b", ToastKind::Info, ToastOptions::lasting(Duration::from_millis(80)));
        store.clear();
        assert!(store.is_empty());

        settle(200).await;
        assert!(store.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_update_merges_fields() {
        let store = ToastStore::new();
        let id = store.show("working...", ToastKind::Info, ToastOptions::sticky());

        store.update(
            id,
            ToastUpdate {
                message: Some("done".into()),
                kind: Some(ToastKind::Success),
                duration: None,
            },
        );

        let record = store.get(id).unwrap();
        assert_eq!(record.message, "done");
        assert_eq!(record.kind, ToastKind::Success);
        assert_eq!(record.duration, Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_update_unknown_id_is_noop() {
        let store = ToastStore::new();
        store.update(ToastId::new(99), ToastUpdate::default());
        assert!(store.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ids_are_unique_and_monotonic() {
        let store = ToastStore::new();
        let a = store.show("a", ToastKind::Info, ToastOptions::sticky());
        let b = store.show("b", ToastKind::Info, ToastOptions::sticky());
        assert_ne!(a, b);

        // An explicit id moves the counter past itself.
        let explicit = ToastId::new(10);
        store.show("c", ToastKind::Info, ToastOptions::sticky().with_id(explicit));
        let d = store.show("d", ToastKind::Info, ToastOptions::sticky());
        assert_eq!(d, ToastId::new(11));
    }

    #[tokio::test(start_paused = true)]
    async fn test_queue_order_is_oldest_first() {
        let store = ToastStore::new();
        store.show("first", ToastKind::Info, ToastOptions::sticky());
        store.show("second", ToastKind::Info, ToastOptions::sticky());

        let messages: Vec<String> = store.toasts().into_iter().map(|t| t.message).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }
}
