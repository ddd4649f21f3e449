//! Validate - Build-time completeness checks for the mapping tables
//!
//! The naming functions themselves never fail; a bad table entry is a
//! configuration defect that must stop the build before any SDK is
//! generated. A silent token collision would make two distinct cloud
//! resources share one generated type.

use std::collections::HashMap;

use thiserror::Error;

use crate::provider::ProviderInfo;

#[derive(Debug, Clone, Error)]
pub enum TableError {
    #[error("duplicate token '{token}': produced by both '{first}' and '{second}'")]
    DuplicateToken {
        token: String,
        first: String,
        second: String,
    },

    #[error("Terraform name '{name}' appears twice in the {table} table")]
    DuplicateName { name: String, table: &'static str },

    #[error("empty Terraform name in the {table} table")]
    EmptyName { table: &'static str },

    #[error("malformed token '{token}' for '{name}': expected non-empty package:module:name")]
    MalformedToken { name: String, token: String },
}

/// Check both mapping tables: every Terraform name is non-empty, every token
/// is well-formed, and no two entries share a token. Tokens are compared
/// across the union of the resource and data-source tables.
pub fn validate(info: &ProviderInfo) -> Result<(), TableError> {
    let mut seen: HashMap<&str, &str> = HashMap::new();

    let resources = info
        .resources
        .iter()
        .map(|(name, entry)| (name.as_str(), entry.tok.as_str(), "resource"));
    let data_sources = info
        .data_sources
        .iter()
        .map(|(name, entry)| (name.as_str(), entry.tok.as_str(), "data-source"));

    for (name, token, table) in resources.chain(data_sources) {
        if name.is_empty() {
            return Err(TableError::EmptyName { table });
        }
        if !is_well_formed(token) {
            return Err(TableError::MalformedToken {
                name: name.to_string(),
                token: token.to_string(),
            });
        }
        if let Some(first) = seen.insert(token, name) {
            return Err(TableError::DuplicateToken {
                token: token.to_string(),
                first: first.to_string(),
                second: name.to_string(),
            });
        }
    }

    Ok(())
}

/// A token is `package:module:name` with all three segments non-empty.
/// The module segment may itself contain `/` path separators.
fn is_well_formed(token: &str) -> bool {
    let parts: Vec<&str> = token.split(':').collect();
    parts.len() == 3 && parts.iter().all(|part| !part.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::NamingConvention;
    use crate::provider::{DataSourceInfo, ResourceInfo};

    fn info_with_resource(tf_name: &str, raw_name: &str) -> ProviderInfo {
        let convention = NamingConvention::new("yandex");
        let mut info = ProviderInfo::new("yandex");
        info.resources.insert(
            tf_name.to_string(),
            ResourceInfo::new(convention.resource_token("index", raw_name)),
        );
        info
    }

    #[test]
    fn accepts_distinct_tokens() {
        let convention = NamingConvention::new("yandex");
        let mut info = info_with_resource("yandex_vpc_network", "VpcNetwork");
        info.data_sources.insert(
            "yandex_vpc_network".to_string(),
            DataSourceInfo::new(convention.data_source_token("index", "getVpcNetwork")),
        );
        assert!(validate(&info).is_ok());
    }

    #[test]
    fn rejects_duplicate_tokens_across_tables() {
        let convention = NamingConvention::new("yandex");
        let mut info = info_with_resource("yandex_vpc_network", "VpcNetwork");
        info.data_sources.insert(
            "yandex_vpc_network_clone".to_string(),
            DataSourceInfo::new(convention.module_member_token(
                "index/vpcNetwork",
                "VpcNetwork",
            )),
        );

        let err = validate(&info).unwrap_err();
        match err {
            TableError::DuplicateToken { token, first, second } => {
                assert_eq!(token, "yandex:index/vpcNetwork:VpcNetwork");
                assert_eq!(first, "yandex_vpc_network");
                assert_eq!(second, "yandex_vpc_network_clone");
            }
            other => panic!("expected DuplicateToken, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_terraform_name() {
        let info = info_with_resource("", "VpcNetwork");
        assert!(matches!(
            validate(&info).unwrap_err(),
            TableError::EmptyName { table: "resource" }
        ));
    }

    #[test]
    fn rejects_malformed_token() {
        let mut info = ProviderInfo::new("yandex");
        info.resources.insert(
            "yandex_vpc_network".to_string(),
            ResourceInfo::new(crate::token::Type::new("yandex::VpcNetwork")),
        );
        assert!(matches!(
            validate(&info).unwrap_err(),
            TableError::MalformedToken { .. }
        ));
    }
}
