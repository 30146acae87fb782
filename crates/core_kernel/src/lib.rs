//! Core Kernel - Foundational types for the investment quote engine
//!
//! This crate provides the fundamental building blocks used across the
//! domain modules:
//! - Money types with precise decimal arithmetic
//! - Fractional rates with percentage conversions

pub mod money;

pub use money::{Currency, Money, MoneyError, Rate};
