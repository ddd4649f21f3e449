//! Tfbridge Yandex
//!
//! Yandex Cloud provider mapping: the static tables pairing every Terraform
//! resource and data-source name with its bridged token, plus the assembled
//! provider descriptor handed to the SDK generation pipeline.

pub mod provider;
pub mod tables;

pub use provider::provider_info;
