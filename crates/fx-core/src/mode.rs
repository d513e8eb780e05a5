//! Shared mode state passed explicitly to every consumer.
//!
//! Focus mode swaps the ambient grid for the particle visualizer while the
//! pointer hovers the page title. The state here is written by the input
//! handlers only; the grid and the visualizer read it and never mutate each
//! other's internals.

use glam::Vec2;

/// Last measured bounding rectangle of the title element, in viewport px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TitleRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl TitleRect {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }
}

/// Monotonic counter modelling the "re-roll frame assignments" event.
///
/// Producers call [`ReassignSignal::trigger`]; each consumer keeps its own
/// last-seen value and polls with [`ReassignSignal::observe`], so a single
/// trigger is seen exactly once per consumer.
#[derive(Debug, Default)]
pub struct ReassignSignal {
    counter: u64,
}

impl ReassignSignal {
    pub fn trigger(&mut self) {
        self.counter += 1;
    }

    pub fn count(&self) -> u64 {
        self.counter
    }

    /// Returns true once per trigger for the consumer owning `last_seen`.
    pub fn observe(&self, last_seen: &mut u64) -> bool {
        if *last_seen != self.counter {
            *last_seen = self.counter;
            true
        } else {
            false
        }
    }
}

/// Lifecycle of the focus-mode visualizer across its async GPU setup.
///
/// Hover can enter and leave faster than the adapter request resolves, so
/// the in-flight init is tracked explicitly: at most one init runs at a
/// time, a leave during init marks the result unwanted, and a re-enter
/// during init re-arms the same init instead of starting a second one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum ActivationPhase {
    #[default]
    Idle,
    Pending {
        wanted: bool,
    },
    Active,
}

#[derive(Debug, Default)]
pub struct ActivationState {
    phase: ActivationPhase,
}

impl ActivationState {
    /// Focus entered. True means the caller must start an init.
    pub fn request(&mut self) -> bool {
        match self.phase {
            ActivationPhase::Idle => {
                self.phase = ActivationPhase::Pending { wanted: true };
                true
            }
            ActivationPhase::Pending { .. } => {
                self.phase = ActivationPhase::Pending { wanted: true };
                false
            }
            ActivationPhase::Active => false,
        }
    }

    /// Focus left. True means the caller must drop the running instance.
    pub fn release(&mut self) -> bool {
        match self.phase {
            ActivationPhase::Idle => false,
            ActivationPhase::Pending { .. } => {
                self.phase = ActivationPhase::Pending { wanted: false };
                false
            }
            ActivationPhase::Active => {
                self.phase = ActivationPhase::Idle;
                true
            }
        }
    }

    /// Init finished. True means install the result, false means discard it.
    pub fn complete(&mut self) -> bool {
        match self.phase {
            ActivationPhase::Pending { wanted: true } => {
                self.phase = ActivationPhase::Active;
                true
            }
            ActivationPhase::Pending { wanted: false } => {
                self.phase = ActivationPhase::Idle;
                false
            }
            _ => false,
        }
    }

    /// Init failed; the next focus enter may try again.
    pub fn fail(&mut self) {
        self.phase = ActivationPhase::Idle;
    }
}

/// The only cross-component shared state besides the pointer and ripples.
#[derive(Debug, Default)]
pub struct SceneContext {
    pub focus_active: bool,
    pub title_rect: Option<TitleRect>,
    pub reassign: ReassignSignal,
}

impl SceneContext {
    pub fn set_focus(&mut self, active: bool) {
        if self.focus_active != active {
            log::info!("[mode] focus {}", if active { "on" } else { "off" });
        }
        self.focus_active = active;
    }

    pub fn set_title_rect(&mut self, rect: TitleRect) {
        self.title_rect = Some(rect);
    }
}
