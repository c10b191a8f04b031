pub mod bus;
pub mod cli;
pub mod core;
pub mod device;
pub mod entry_ability;
pub mod insets;
pub mod sim;
pub mod ui_state;

pub use bus::{EventBus, LifecycleEvent};
pub use entry_ability::{EntryAbility, PREFIX, ROOT_ROUTE};
pub use insets::{SafeAreaInset, VpScale};
pub use ui_state::SharedUiState;
