use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Workflow-level failure raised by a checkout attempt.
#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("checkout workflow failed for order {order_id}: {message}")]
    Workflow { order_id: u64, message: String },
    #[error("payment declined for order {order_id}: {reason}")]
    PaymentDeclined { order_id: u64, reason: String },
    #[error("order {order_id} is not in a submittable state")]
    NotSubmittable { order_id: u64 },
}

/// An order submitted for checkout.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Order {
    pub id: u64,
    pub customer_email: String,
    pub total: Decimal,
}

impl Order {
    pub fn new(id: u64, customer_email: impl Into<String>, total: Decimal) -> Self {
        Self {
            id,
            customer_email: customer_email.into(),
            total,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    CreditCard,
    GiftCard,
    AccountCredit,
}

/// A payment instrument attached to an order, covering some portion of its
/// total.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone)]
pub struct PaymentInstrument {
    pub method: PaymentMethod,
    pub amount: Decimal,
}

/// An opaque reference to a secured payment, as returned by a payment
/// gateway.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct PaymentReference {
    pub reference_number: String,
}

/// The outcome of a successful checkout attempt.
#[derive(Debug, PartialEq, Clone)]
pub struct CheckoutResponse {
    pub order: Order,
    pub payments: HashMap<PaymentInstrument, PaymentReference>,
}
