//! Component trait system for the TUI
//!
//! Instead of `App` knowing how every piece of the screen draws itself or
//! reacts to keys, components declare those capabilities through traits.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                     App                      │
//! │  (owns view model, routes keys, holds toast) │
//! └──────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┼───────────────┐
//!        ▼               ▼               ▼
//!  ┌───────────┐   ┌───────────┐   ┌───────────┐
//!  │  Roster   │   │  Loading  │   │  Status   │
//!  │  Panel    │   │ Indicator │   │   Bar     │
//!  └───────────┘   └───────────┘   └───────────┘
//! ```
//!
//! - [`Component`] - render from a [`RenderContext`]
//! - [`Interactive`] - keyboard handling for the focused component

mod component;
mod interactive;

pub use component::{Component, RenderContext};
pub use interactive::{Handled, Interactive};
