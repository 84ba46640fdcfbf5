use std::sync::{Arc, Mutex, PoisonError};

use eframe::egui;
use snake_common::session::{GameSnapshot, SessionCommand};
use snake_common::warn;
use tokio::sync::mpsc;

/// Latest session snapshot shared between the session thread and the UI.
#[derive(Clone)]
pub struct SharedState {
    snapshot: Arc<Mutex<GameSnapshot>>,
    ctx: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new(snapshot: GameSnapshot) -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(snapshot)),
            ctx: Arc::new(Mutex::new(None)),
        }
    }

    pub fn has_context(&self) -> bool {
        self.ctx.lock().unwrap_or_else(PoisonError::into_inner).is_some()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *self.ctx.lock().unwrap_or_else(PoisonError::into_inner) = Some(ctx);
    }

    pub fn get_snapshot(&self) -> GameSnapshot {
        self.snapshot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_snapshot(&self, snapshot: GameSnapshot) {
        *self.snapshot.lock().unwrap_or_else(PoisonError::into_inner) = snapshot;
        self.request_repaint();
    }

    fn request_repaint(&self) {
        if let Some(ctx) = self.ctx.lock().unwrap_or_else(PoisonError::into_inner).as_ref() {
            ctx.request_repaint();
        }
    }
}

#[derive(Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<SessionCommand>,
}

impl CommandSender {
    pub fn new(tx: mpsc::UnboundedSender<SessionCommand>) -> Self {
        Self { tx }
    }

    pub fn send(&self, command: SessionCommand) {
        if self.tx.send(command).is_err() {
            warn!("Session is gone, dropping command {:?}", command);
        }
    }
}
