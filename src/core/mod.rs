pub mod lifecycle;
pub mod window;

pub use lifecycle::{Ability, LaunchParams, LifecycleState, TransitionError};
pub use window::{
    AbilityContext, AvoidArea, AvoidAreaKind, AvoidAreaListener, DoneCallback, HostError,
    HostResult, SubscriptionId, SystemBar, Window, WindowCallback, WindowStage,
};
