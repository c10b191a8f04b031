use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{error, info};

use crate::bus::{EventBus, LifecycleEvent};
use crate::core::{
    Ability, AbilityContext, AvoidArea, AvoidAreaKind, LaunchParams, SubscriptionId, SystemBar,
    Window, WindowStage,
};
use crate::device::{self, DeviceProfile};
use crate::insets::{SafeAreaInset, VpScale};
use crate::ui_state::SharedUiState;

/// Component tag used on every diagnostic log line
pub const PREFIX: &str = "KeyperEntryAbility";

/// Named route of the root screen
pub const ROOT_ROUTE: &str = "pages/Lock";

struct Inner {
    ui_state: SharedUiState,
    bus: EventBus,
    scale: VpScale,
    device: Rc<dyn DeviceProfile>,
    /// Main window handle, held from stage creation to stage destruction
    window: RefCell<Option<Rc<dyn Window>>>,
    /// Avoid-area listener handle, released on stage destroy
    avoid_sub: Cell<Option<SubscriptionId>>,
    /// Avoid-area pixels captured after full-screen layout succeeds.
    /// Stays zero until then; published once content load succeeds.
    pending_area: Cell<AvoidArea>,
}

/// Startup/lifecycle controller for the single-window shell.
///
/// Receives lifecycle calls from the host-driven `Ability` contract,
/// sequences the asynchronous window configuration, republishes safe-area
/// geometry into shared UI state and rebroadcasts foreground/background
/// transitions on the event bus. No error is ever propagated back to the
/// host - each failure is logged and reduced at its call site.
pub struct EntryAbility {
    inner: Rc<Inner>,
}

impl EntryAbility {
    pub fn new(
        ui_state: SharedUiState,
        bus: EventBus,
        scale: VpScale,
        device: Rc<dyn DeviceProfile>,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                ui_state,
                bus,
                scale,
                device,
                window: RefCell::new(None),
                avoid_sub: Cell::new(None),
                pending_area: Cell::new(AvoidArea::default()),
            }),
        }
    }

    /// Load the root screen. On success, publish the captured avoid-area
    /// pixels as vp; on failure, log and stop - no fallback, no retry.
    fn load_content(inner: &Rc<Inner>, stage: &Rc<dyn WindowStage>) {
        let inner = inner.clone();
        stage.load_content(
            ROOT_ROUTE,
            Box::new(move |result| match result {
                Ok(()) => {
                    let inset = SafeAreaInset::from_avoid_area(inner.pending_area.get(), inner.scale);
                    inner.ui_state.publish_insets(inset);
                    info!(
                        target: PREFIX,
                        "loaded content {}; avoid insets top={}vp bottom={}vp",
                        ROOT_ROUTE, inset.top, inset.bottom
                    );
                }
                Err(err) => {
                    error!(target: PREFIX, "failed to load content {}: {}", ROOT_ROUTE, err);
                }
            }),
        );
    }

    /// Chrome configuration once the main window is available: avoid-area
    /// listener, full-screen layout, system bars, then content load.
    fn configure_window(inner: &Rc<Inner>, stage: &Rc<dyn WindowStage>, window: Rc<dyn Window>) {
        inner.window.replace(Some(window.clone()));

        // Persistent listener: every notification republishes both inset
        // heights from the same report.
        let listener_inner = inner.clone();
        let sub = window.subscribe_avoid_area(
            AvoidAreaKind::System,
            Rc::new(move |area| {
                let inset = SafeAreaInset::from_avoid_area(area, listener_inner.scale);
                listener_inner.ui_state.publish_insets(inset);
                info!(
                    target: PREFIX,
                    "avoid area changed: top={}vp bottom={}vp", inset.top, inset.bottom
                );
            }),
        );
        inner.avoid_sub.set(Some(sub));

        // Full-screen layout; on success snapshot the current avoid area
        // for the post-load publish.
        let layout_inner = inner.clone();
        let layout_window = window.clone();
        window.set_layout_full_screen(
            true,
            Box::new(move |result| match result {
                Ok(()) => {
                    let area = layout_window.avoid_area(AvoidAreaKind::System);
                    layout_inner.pending_area.set(area);
                    info!(
                        target: PREFIX,
                        "full-screen layout set; avoid area top={}px bottom={}px",
                        area.top_height_px, area.bottom_height_px
                    );
                }
                Err(err) => {
                    error!(target: PREFIX, "failed to set full-screen layout: {}", err);
                }
            }),
        );

        // System bars are requested without waiting for the layout call to
        // settle; the two branches may resolve in either order. Content
        // load follows whether the bar request succeeds or fails.
        let bars: Vec<SystemBar> = if inner.device.is_emulator() {
            vec![SystemBar::Status]
        } else {
            vec![SystemBar::Status, SystemBar::Navigation]
        };
        let bars_inner = inner.clone();
        let bars_stage = stage.clone();
        window.set_system_bars(
            &bars,
            Box::new(move |result| {
                match result {
                    Ok(()) => info!(target: PREFIX, "system bars set to visible"),
                    Err(err) => error!(target: PREFIX, "failed to set system bars: {}", err),
                }
                Self::load_content(&bars_inner, &bars_stage);
            }),
        );
    }
}

impl Ability for EntryAbility {
    fn on_create(&self, ctx: Rc<dyn AbilityContext>, launch: &LaunchParams) {
        info!(
            target: PREFIX,
            "ability on_create: bundle={} ability={}",
            launch.bundle_name, launch.ability_name
        );
        device::log_diagnostics(self.inner.device.as_ref());

        // Privacy mode keeps the lock screen out of screenshots and
        // recordings. Failure to resolve the window or to set the flag is
        // non-fatal and not retried.
        ctx.last_window(Box::new(|result| match result {
            Ok(window) => {
                window.set_privacy_mode(
                    true,
                    Box::new(|result| match result {
                        Ok(()) => info!(target: PREFIX, "set_privacy_mode=true succeeded"),
                        Err(err) => {
                            error!(target: PREFIX, "failed to set privacy mode: {}", err)
                        }
                    }),
                );
            }
            Err(err) => error!(target: PREFIX, "failed to obtain current window: {}", err),
        }));
    }

    fn on_window_stage_create(&self, stage: Rc<dyn WindowStage>) {
        info!(target: PREFIX, "ability on_window_stage_create");

        let inner = self.inner.clone();
        let stage_for_callback = stage.clone();
        stage.main_window(Box::new(move |result| match result {
            Ok(window) => Self::configure_window(&inner, &stage_for_callback, window),
            Err(err) => {
                // Chrome configuration is skipped entirely; content still
                // loads exactly once.
                error!(target: PREFIX, "failed to obtain main window: {}", err);
                Self::load_content(&inner, &stage_for_callback);
            }
        }));
    }

    fn on_window_stage_destroy(&self) {
        info!(target: PREFIX, "ability on_window_stage_destroy");

        // The window reverts to the host; release our listener so no
        // callback stays bound to a destroyed window.
        let window = self.inner.window.borrow_mut().take();
        if let (Some(sub), Some(window)) = (self.inner.avoid_sub.take(), window) {
            window.unsubscribe_avoid_area(sub);
        }
    }

    fn on_foreground(&self) {
        info!(target: PREFIX, "ability on_foreground");
        self.inner.bus.publish(LifecycleEvent::Foreground);
    }

    fn on_background(&self) {
        info!(target: PREFIX, "ability on_background");
        self.inner.bus.publish(LifecycleEvent::Background);
    }

    fn on_destroy(&self) {
        info!(target: PREFIX, "ability on_destroy");
    }
}
