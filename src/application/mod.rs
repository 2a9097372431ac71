//! Application layer containing the error-grouping logic.
//!
//! This module defines the `ErrorsProcessor`, which walks the field errors of
//! a bound form and organizes them by tab for display. Lookups go through the
//! form ports so the processor stays independent of any concrete form-binding
//! framework.

pub mod grouper;
