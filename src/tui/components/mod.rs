// Components module - UI building blocks
//
// - Roster panel: loading / error / mentor + mentee sections
// - Loading indicator: spinner used while the fetch is in flight
// - Status bar: endpoint, roster summary, hints, last log line
// - Toast: copy confirmations

pub mod loading;
pub mod roster_panel;
pub mod status_bar;
pub mod toast;

pub use roster_panel::RosterPanel;
pub use status_bar::StatusBar;
pub use toast::ToastSlot;
