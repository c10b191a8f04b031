//! In-process stand-in for the host ability runtime.
//!
//! Completes every window call synchronously on the calling thread, which
//! matches the host's single-threaded cooperative scheduling with the
//! simplest possible settle order. The demo binary and integration tests
//! drive abilities through [`HostDriver`], which enforces the lifecycle
//! state machine the way the real runtime does.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::core::{
    Ability, AbilityContext, AvoidArea, AvoidAreaKind, AvoidAreaListener, DoneCallback, HostError,
    HostResult, LaunchParams, LifecycleState, SubscriptionId, SystemBar, TransitionError, Window,
    WindowCallback, WindowStage,
};
use crate::device::{DeviceField, DeviceProfile};

/// Canned device information with one unreadable field
pub struct SimDeviceProfile {
    emulator: bool,
}

impl SimDeviceProfile {
    pub fn new(emulator: bool) -> Self {
        Self { emulator }
    }
}

impl DeviceProfile for SimDeviceProfile {
    fn read(&self, field: DeviceField) -> HostResult<String> {
        match field {
            DeviceField::Brand => Ok("keyper".to_owned()),
            DeviceField::Model => Ok(if self.emulator {
                "emulator".to_owned()
            } else {
                "keyper-one".to_owned()
            }),
            DeviceField::OsFullName => Ok("sim-os 4.0".to_owned()),
            DeviceField::SdkApiVersion => Ok("10".to_owned()),
            // Serial numbers need a permission the shell does not hold
            DeviceField::SerialNumber => Err(HostError::new(201, "permission denied")),
        }
    }

    fn is_emulator(&self) -> bool {
        self.emulator
    }
}

/// Simulated main window; every request succeeds immediately
pub struct SimWindow {
    privacy: Cell<bool>,
    full_screen: Cell<bool>,
    bars: RefCell<Vec<SystemBar>>,
    avoid: Cell<AvoidArea>,
    listeners: RefCell<Vec<(SubscriptionId, AvoidAreaKind, AvoidAreaListener)>>,
    next_sub: Cell<u64>,
}

impl SimWindow {
    pub fn new(avoid: AvoidArea) -> Rc<Self> {
        Rc::new(Self {
            privacy: Cell::new(false),
            full_screen: Cell::new(false),
            bars: RefCell::new(Vec::new()),
            avoid: Cell::new(avoid),
            listeners: RefCell::new(Vec::new()),
            next_sub: Cell::new(0),
        })
    }

    /// Update the avoid area and notify system-inset listeners, as the
    /// host does on rotation or bar visibility changes
    pub fn report_avoid_area(&self, area: AvoidArea) {
        self.avoid.set(area);
        let listeners: Vec<AvoidAreaListener> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(_, kind, _)| *kind == AvoidAreaKind::System)
            .map(|(_, _, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(area);
        }
    }

    pub fn privacy_mode(&self) -> bool {
        self.privacy.get()
    }

    pub fn full_screen(&self) -> bool {
        self.full_screen.get()
    }

    /// Bars most recently requested visible
    pub fn requested_bars(&self) -> Vec<SystemBar> {
        self.bars.borrow().clone()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl Window for SimWindow {
    fn set_privacy_mode(&self, enabled: bool, done: DoneCallback) {
        self.privacy.set(enabled);
        done(Ok(()));
    }

    fn set_layout_full_screen(&self, enabled: bool, done: DoneCallback) {
        self.full_screen.set(enabled);
        done(Ok(()));
    }

    fn set_system_bars(&self, bars: &[SystemBar], done: DoneCallback) {
        *self.bars.borrow_mut() = bars.to_vec();
        done(Ok(()));
    }

    fn avoid_area(&self, _kind: AvoidAreaKind) -> AvoidArea {
        self.avoid.get()
    }

    fn subscribe_avoid_area(
        &self,
        kind: AvoidAreaKind,
        listener: AvoidAreaListener,
    ) -> SubscriptionId {
        self.next_sub.set(self.next_sub.get() + 1);
        let id = SubscriptionId(self.next_sub.get());
        self.listeners.borrow_mut().push((id, kind, listener));
        id
    }

    fn unsubscribe_avoid_area(&self, id: SubscriptionId) {
        self.listeners
            .borrow_mut()
            .retain(|(sub_id, _, _)| *sub_id != id);
    }
}

/// Simulated window stage wrapping a [`SimWindow`]
pub struct SimWindowStage {
    window: Rc<SimWindow>,
    routes: RefCell<Vec<String>>,
}

impl SimWindowStage {
    pub fn new(window: Rc<SimWindow>) -> Rc<Self> {
        Rc::new(Self {
            window,
            routes: RefCell::new(Vec::new()),
        })
    }

    /// Routes loaded into the stage, in load order
    pub fn loaded_routes(&self) -> Vec<String> {
        self.routes.borrow().clone()
    }
}

impl WindowStage for SimWindowStage {
    fn main_window(&self, done: WindowCallback) {
        done(Ok(self.window.clone()));
    }

    fn load_content(&self, route: &str, done: DoneCallback) {
        self.routes.borrow_mut().push(route.to_owned());
        done(Ok(()));
    }
}

/// Simulated ability context resolving to the same window
pub struct SimContext {
    window: Rc<SimWindow>,
}

impl SimContext {
    pub fn new(window: Rc<SimWindow>) -> Rc<Self> {
        Rc::new(Self { window })
    }
}

impl AbilityContext for SimContext {
    fn last_window(&self, done: WindowCallback) {
        done(Ok(self.window.clone()));
    }
}

/// Drives an ability through its lifecycle the way the host runtime does,
/// invoking each hook exactly once per validated transition
pub struct HostDriver<A: Ability> {
    ability: A,
    ctx: Rc<SimContext>,
    stage: Rc<SimWindowStage>,
    launch: LaunchParams,
    state: Cell<LifecycleState>,
}

impl<A: Ability> HostDriver<A> {
    pub fn new(ability: A, window: Rc<SimWindow>, launch: LaunchParams) -> Self {
        Self {
            ability,
            ctx: SimContext::new(window.clone()),
            stage: SimWindowStage::new(window),
            launch,
            state: Cell::new(LifecycleState::Uninitialized),
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state.get()
    }

    pub fn stage(&self) -> &Rc<SimWindowStage> {
        &self.stage
    }

    fn advance(&self, to: LifecycleState) -> Result<(), TransitionError> {
        self.state.set(self.state.get().advance(to)?);
        Ok(())
    }

    pub fn create(&self) -> Result<(), TransitionError> {
        self.advance(LifecycleState::Created)?;
        self.ability.on_create(self.ctx.clone(), &self.launch);
        Ok(())
    }

    pub fn stage_create(&self) -> Result<(), TransitionError> {
        self.advance(LifecycleState::StageCreated)?;
        self.ability.on_window_stage_create(self.stage.clone());
        Ok(())
    }

    pub fn foreground(&self) -> Result<(), TransitionError> {
        self.advance(LifecycleState::Foreground)?;
        self.ability.on_foreground();
        Ok(())
    }

    pub fn background(&self) -> Result<(), TransitionError> {
        self.advance(LifecycleState::Background)?;
        self.ability.on_background();
        Ok(())
    }

    pub fn stage_destroy(&self) -> Result<(), TransitionError> {
        self.advance(LifecycleState::StageDestroyed)?;
        self.ability.on_window_stage_destroy();
        Ok(())
    }

    pub fn destroy(&self) -> Result<(), TransitionError> {
        self.advance(LifecycleState::Destroyed)?;
        self.ability.on_destroy();
        Ok(())
    }
}
