//! Application Context
//!
//! Shared state provided via Leptos Context API. All UI events go through
//! `AppContext::dispatch`, which applies the action to the session and then
//! runs the returned effects.

use leptos::prelude::*;
use task_core::{Action, Effect, Persistence, Session, WriteOutcome};

use crate::storage::BrowserStorage;

pub type BrowserPersistence = Persistence<BrowserStorage>;

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Session state; read it through `with`/memos
    pub session: RwSignal<Session>,
    persistence: StoredValue<BrowserPersistence>,
}

impl AppContext {
    /// Build from an already hydrated session and adapter
    pub fn new(session: Session, persistence: BrowserPersistence) -> Self {
        Self {
            session: RwSignal::new(session),
            persistence: StoredValue::new(persistence),
        }
    }

    pub fn dispatch(&self, action: Action) {
        let effects = self
            .session
            .try_update(|session| session.apply(action))
            .unwrap_or_default();
        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(&self, effect: Effect) {
        let result = match effect {
            Effect::PersistTasks => {
                let tasks = self.session.with_untracked(|s| s.tasks().to_vec());
                self.persistence.try_update_value(|p| p.save_tasks(&tasks))
            }
            Effect::PersistTheme => {
                let dark_mode = self.session.with_untracked(|s| s.dark_mode());
                self.persistence.try_update_value(|p| p.save_theme(dark_mode))
            }
            Effect::DraftCleared => {
                log::trace!("[APP] Draft cleared");
                return;
            }
        };

        match result {
            Some(Ok(WriteOutcome::Written)) => {}
            Some(Ok(WriteOutcome::Skipped)) => log::warn!("[APP] {:?} skipped before hydration", effect),
            Some(Err(e)) => log::error!("[APP] {:?} failed: {}", effect, e),
            None => log::warn!("[APP] {:?} dropped: persistence disposed", effect),
        }
    }
}
