//! Pricing-page checkout dialog state.
//!
//! Selecting a plan opens a confirmation dialog that collects an email. The
//! email must contain `@`; nothing else is checked client-side. A successful
//! checkout yields the payment URL the browser navigates to.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use reports::{ApiError, CheckoutRequest, CheckoutSession, Plan, find_plan, plausible_email};

pub const INVALID_EMAIL: &str = "Enter a valid email address.";
pub const REDIRECT_FAILED: &str = "Could not open the payment page. Please try again.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckoutState {
    /// Plan whose dialog is open; `None` when closed.
    pub plan: Option<&'static Plan>,
    pub email: String,
    pub submitting: bool,
    pub error: Option<String>,
    /// Set once the backend returned a payment URL.
    pub redirect_to: Option<String>,
}

impl CheckoutState {
    /// Open the dialog for `plan_id`. Unknown ids leave the dialog closed.
    pub fn open(&mut self, plan_id: &str) -> bool {
        let Some(plan) = find_plan(plan_id) else {
            return false;
        };
        self.plan = Some(plan);
        self.submitting = false;
        self.error = None;
        self.redirect_to = None;
        true
    }

    /// Close the dialog. The typed email is kept for the next open.
    pub fn close(&mut self) {
        if self.submitting {
            return;
        }
        self.plan = None;
        self.error = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.plan.is_some()
    }

    /// Validate and start the checkout request.
    ///
    /// # Errors
    ///
    /// Returns [`INVALID_EMAIL`] when the email lacks `@`; the message is also
    /// stored for display. Returns `Ok(None)` when no plan is selected or a
    /// request is already running.
    pub fn begin(&mut self) -> Result<Option<CheckoutRequest>, &'static str> {
        let Some(plan) = self.plan else {
            return Ok(None);
        };
        if self.submitting {
            return Ok(None);
        }
        let email = self.email.trim().to_owned();
        if !plausible_email(&email) {
            self.error = Some(INVALID_EMAIL.to_owned());
            return Err(INVALID_EMAIL);
        }
        self.error = None;
        self.submitting = true;
        Ok(Some(CheckoutRequest { plan: plan.id.to_owned(), email }))
    }

    /// Apply the checkout response; returns the navigation target on success.
    pub fn resolve(&mut self, result: Result<CheckoutSession, ApiError>) -> Option<String> {
        self.submitting = false;
        match result {
            Ok(session) => {
                self.redirect_to = Some(session.checkout_url.clone());
                Some(session.checkout_url)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }

    /// The browser refused to navigate to the payment URL; keep the dialog
    /// open with an error so the user can retry.
    pub fn redirect_failed(&mut self) {
        self.submitting = false;
        self.redirect_to = None;
        self.error = Some(REDIRECT_FAILED.to_owned());
    }
}
