//! Tfbridge Core
//!
//! Core library for mapping a Terraform provider's resource and data-source
//! schema onto a bridged SDK's type system: token types, the naming
//! convention that derives them, the provider descriptor consumed by the
//! generation pipeline, and table validation.

pub mod naming;
pub mod provider;
pub mod token;
pub mod validate;
