use crate::domain::DomainEvent;
use crate::ports::event_log::{EventLog as EventLogTrait, Result};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::{Mutex, MutexGuard};

/// ログに保存された1件のイベント
///
/// イベント本体はJSONとして保存し、読み込み時にデシリアライズする。
#[derive(Debug, Clone)]
pub struct StoredEvent {
    pub sequence: u64,
    pub event_type: &'static str,
    pub payload: Value,
    pub occurred_at: DateTime<Utc>,
}

/// EventLogのインメモリ実装
///
/// 追記専用。連番は1から始まり追記順に振られる。
pub struct EventLog {
    events: Mutex<Vec<StoredEvent>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    /// 保存形式のままイベントを取得する
    pub fn stored_events(&self) -> Result<Vec<StoredEvent>> {
        Ok(self.events()?.clone())
    }

    fn events(&self) -> Result<MutexGuard<'_, Vec<StoredEvent>>> {
        Ok(self.events.lock().map_err(|_| "event log lock poisoned")?)
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLogTrait for EventLog {
    fn append(&self, event: DomainEvent) -> Result<()> {
        let payload = serde_json::to_value(&event)?;
        let mut events = self.events()?;
        let sequence = events.len() as u64 + 1;

        events.push(StoredEvent {
            sequence,
            event_type: event.event_type(),
            payload,
            occurred_at: event.occurred_at(),
        });
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<DomainEvent>> {
        let events = self.events()?;
        let mut loaded = Vec::with_capacity(events.len());
        for stored in events.iter() {
            loaded.push(serde_json::from_value(stored.payload.clone())?);
        }
        Ok(loaded)
    }
}
