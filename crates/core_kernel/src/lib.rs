//! Core Kernel - Foundational types for the bill splitting engine
//!
//! This crate provides the fundamental building blocks used across the
//! workspace: a Money type with precise decimal arithmetic and a Rate type
//! for percentage calculations.

pub mod money;

pub use money::{Money, MoneyError, Rate};
