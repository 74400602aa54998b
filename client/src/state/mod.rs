//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain state structs held in `RwSignal`s. The session is provided through
//! context by the app shell; panel and checkout state are owned by the
//! component that renders them.

pub mod checkout;
pub mod panel;
pub mod session;
pub mod ui;
