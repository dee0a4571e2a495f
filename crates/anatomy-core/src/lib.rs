//! # anatomy-core
//!
//! Core types shared by every Anatomy Explorer crate:
//! - `Identity` and `Subscription` entities
//! - Closed enums for role, subscription status, and plan
//! - Derived subscription flags (`is_subscribed`, `is_trial_active`, ...)
//! - Display normalisation of subscription data
//! - Form validation for login, signup, and profile edits
//! - Prefixed ID generation
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod subscription;
pub mod validation;
