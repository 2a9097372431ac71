pub mod checkout;
pub mod field_name;
pub mod form;
pub mod ports;
pub mod validation;
