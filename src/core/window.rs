use std::rc::Rc;

/// Error carried by a failed host call, tagged with the host-defined code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostError {
    pub code: i32,
    pub message: String,
}

impl HostError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "host error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for HostError {}

pub type HostResult<T> = Result<T, HostError>;

/// Completion callback for a fire-once asynchronous host call
pub type DoneCallback = Box<dyn FnOnce(HostResult<()>)>;

/// Completion callback for asynchronous window-handle acquisition
pub type WindowCallback = Box<dyn FnOnce(HostResult<Rc<dyn Window>>)>;

/// Listener invoked on every avoid-area change notification
pub type AvoidAreaListener = Rc<dyn Fn(AvoidArea)>;

/// Avoid-area heights reported by the host, in device pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AvoidArea {
    pub top_height_px: u32,
    pub bottom_height_px: u32,
}

/// Category of screen region that obstructs window content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvoidAreaKind {
    /// Status bar and navigation bar
    System,
    /// Display cutout (notch, punch hole)
    Cutout,
    /// System gesture region
    SystemGesture,
    /// Soft keyboard
    Keyboard,
}

/// System bars whose visibility the shell can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemBar {
    Status,
    Navigation,
}

/// Handle for a registered avoid-area listener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(pub u64);

/// Host-owned window handle.
///
/// Configuration calls are asynchronous requests to the host; each completes
/// through its callback with either success or a host error code. The handle
/// is never owned by the shell - the host runtime keeps ownership.
pub trait Window {
    /// Hide window content from screenshots and screen recording
    fn set_privacy_mode(&self, enabled: bool, done: DoneCallback);

    /// Switch the window to full-screen layout
    fn set_layout_full_screen(&self, enabled: bool, done: DoneCallback);

    /// Request visibility for exactly the given system bars
    fn set_system_bars(&self, bars: &[SystemBar], done: DoneCallback);

    /// Read the current avoid area of the given kind
    fn avoid_area(&self, kind: AvoidAreaKind) -> AvoidArea;

    /// Register a persistent avoid-area-change listener
    fn subscribe_avoid_area(
        &self,
        kind: AvoidAreaKind,
        listener: AvoidAreaListener,
    ) -> SubscriptionId;

    /// Release a previously registered listener
    fn unsubscribe_avoid_area(&self, id: SubscriptionId);
}

/// Host object representing the top-level window and its content surface
pub trait WindowStage {
    /// Acquire the stage's main window handle
    fn main_window(&self, done: WindowCallback);

    /// Load a named route into the stage's content surface
    fn load_content(&self, route: &str, done: DoneCallback);
}

/// Ability-scoped context supplied by the host on creation
pub trait AbilityContext {
    /// Resolve the topmost window of the current ability
    fn last_window(&self, done: WindowCallback);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn host_error_display_includes_code() {
        let err = HostError::new(1300002, "window state is abnormal");
        let text = format!("{}", err);
        assert!(text.contains("1300002"));
        assert!(text.contains("window state is abnormal"));
    }

    #[test]
    fn avoid_area_defaults_to_zero() {
        let area = AvoidArea::default();
        assert_eq!(area.top_height_px, 0);
        assert_eq!(area.bottom_height_px, 0);
    }

    // Mock window for testing the callback contract
    struct OneShotWindow {
        privacy: Cell<bool>,
    }

    impl Window for OneShotWindow {
        fn set_privacy_mode(&self, enabled: bool, done: DoneCallback) {
            self.privacy.set(enabled);
            done(Ok(()));
        }

        fn set_layout_full_screen(&self, _enabled: bool, done: DoneCallback) {
            done(Err(HostError::new(1300003, "unsupported")));
        }

        fn set_system_bars(&self, _bars: &[SystemBar], done: DoneCallback) {
            done(Ok(()));
        }

        fn avoid_area(&self, _kind: AvoidAreaKind) -> AvoidArea {
            AvoidArea::default()
        }

        fn subscribe_avoid_area(
            &self,
            _kind: AvoidAreaKind,
            _listener: AvoidAreaListener,
        ) -> SubscriptionId {
            SubscriptionId(1)
        }

        fn unsubscribe_avoid_area(&self, _id: SubscriptionId) {}
    }

    #[test]
    fn window_call_completes_through_callback() {
        let window = OneShotWindow {
            privacy: Cell::new(false),
        };

        window.set_privacy_mode(true, Box::new(|result| assert!(result.is_ok())));
        window.set_layout_full_screen(true, Box::new(|result| assert!(result.is_err())));

        assert!(window.privacy.get());
    }
}
