//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the tool panels and pricing surfaces, reading the
//! session from Leptos context and owning their own request state.

pub mod audit_panel;
pub mod checkout_dialog;
pub mod domain_panel;
pub mod history_panel;
pub mod keyword_panel;
pub mod panel_status;
pub mod plan_card;
pub mod query_bar;
pub mod score_badge;
pub mod toolbar;
