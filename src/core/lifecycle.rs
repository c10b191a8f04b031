use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::window::{AbilityContext, WindowStage};

/// Opaque launch context handed over by the host on creation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LaunchParams {
    pub bundle_name: String,
    pub ability_name: String,
    /// Free-form launch parameters forwarded by the host
    pub parameters: serde_json::Map<String, serde_json::Value>,
}

/// Lifecycle contract of a single-window ability.
///
/// The host runtime (or a driver standing in for it) invokes each handler
/// exactly once per corresponding transition. Handlers never return errors
/// to the host - every failure is handled at its call site.
pub trait Ability {
    fn on_create(&self, ctx: Rc<dyn AbilityContext>, launch: &LaunchParams);

    fn on_window_stage_create(&self, stage: Rc<dyn WindowStage>);

    fn on_window_stage_destroy(&self);

    fn on_foreground(&self);

    fn on_background(&self);

    fn on_destroy(&self);
}

/// Per-instance lifecycle state as driven by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Uninitialized,
    Created,
    StageCreated,
    Foreground,
    Background,
    StageDestroyed,
    Destroyed,
}

impl Default for LifecycleState {
    fn default() -> Self {
        Self::Uninitialized
    }
}

/// Rejected lifecycle transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionError {
    pub from: LifecycleState,
    pub to: LifecycleState,
}

impl std::fmt::Display for TransitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "illegal lifecycle transition {:?} -> {:?}",
            self.from, self.to
        )
    }
}

impl std::error::Error for TransitionError {}

impl LifecycleState {
    /// Validate a host-driven transition and return the new state.
    ///
    /// Foreground and background may alternate arbitrarily many times;
    /// nothing is reachable after Destroyed.
    pub fn advance(self, to: LifecycleState) -> Result<LifecycleState, TransitionError> {
        use LifecycleState::*;

        let legal = matches!(
            (self, to),
            (Uninitialized, Created)
                | (Created, StageCreated)
                | (StageCreated, Foreground)
                | (Foreground, Background)
                | (Background, Foreground)
                | (StageCreated, StageDestroyed)
                | (Foreground, StageDestroyed)
                | (Background, StageDestroyed)
                | (StageDestroyed, Destroyed)
                | (Created, Destroyed)
        );

        if legal {
            Ok(to)
        } else {
            Err(TransitionError { from: self, to })
        }
    }
}
