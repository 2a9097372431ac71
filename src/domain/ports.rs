use super::checkout::{CheckoutError, CheckoutResponse, Order, PaymentInstrument, PaymentReference};
use super::form::{DynamicForm, Field, Tab};
use async_trait::async_trait;
use std::collections::HashMap;

/// Tab and field lookup capability of a bound form.
pub trait FormLookup {
    fn find_tab_for_field(&self, field_name: &str) -> Option<&Tab>;
    fn find_field(&self, field_name: &str) -> Option<&Field>;
}

/// Lookup of named dynamic sub-forms embedded in a parent form.
pub trait DynamicFormLookup {
    fn dynamic_form(&self, id: &str) -> Option<&DynamicForm>;
}

/// Non-fatal diagnostic sink for fallback paths.
#[cfg_attr(test, mockall::automock)]
pub trait Diagnostics: Send + Sync {
    fn warn(&self, message: &str);
}

pub type DiagnosticsBox = Box<dyn Diagnostics>;

/// Emits diagnostics through `tracing`.
#[derive(Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

/// Something that can attempt to check out an order, optionally given an
/// explicit mapping from payment instrument to payment reference.
///
/// Returns a response describing the checkout outcome, or fails with a
/// checkout-specific error. No retry or recovery policy is implied.
#[async_trait]
pub trait CheckoutService: Send + Sync {
    async fn perform_checkout(&self, order: Order) -> Result<CheckoutResponse, CheckoutError>;

    async fn perform_checkout_with_payments(
        &self,
        order: Order,
        payments: HashMap<PaymentInstrument, PaymentReference>,
    ) -> Result<CheckoutResponse, CheckoutError>;
}

pub type CheckoutServiceBox = Box<dyn CheckoutService>;
