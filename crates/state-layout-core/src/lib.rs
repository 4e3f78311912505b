//! State Layout Core Types
//!
//! This crate provides the foundational types shared by the state layout
//! calculator and its command-line front end. It includes:
//!
//! - **Fanout**: The closed set of supported tree arities ([`fanout::Fanout`])
//! - **Styles**: Named commitment profiles and their lookup table ([`style`] module)
//! - **Errors**: The input-validation error type ([`error::LayoutError`])

pub mod error;
pub mod fanout;
pub mod style;
