//! Naming - Token construction convention for bridged providers
//!
//! Tokens follow the form `package:module:name`. Resources and data sources
//! additionally get a per-entry module path segment derived from the raw name
//! by lower-casing its first character; that segment names the generated
//! source file, while the name itself keeps its original case for the
//! exported type or function.

use crate::token::{ModuleMember, Type};

/// Token construction for one provider package.
///
/// The package identifier is fixed at construction and reused for every
/// token, so all tokens for a provider share one namespace.
#[derive(Debug, Clone)]
pub struct NamingConvention {
    package: String,
}

impl NamingConvention {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Manufactures a member token for the given module and member.
    pub fn module_member_token(&self, module: &str, member: &str) -> ModuleMember {
        ModuleMember::new(format!("{}:{}:{}", self.package, module, member))
    }

    /// Manufactures a type token for the given module and type name.
    pub fn type_token(&self, module: &str, type_name: &str) -> Type {
        Type::from(self.module_member_token(module, type_name))
    }

    /// Manufactures a standard resource token given a module and resource
    /// name. The generated file is named by lower-casing the resource name's
    /// first character; the type name keeps its original case.
    pub fn resource_token(&self, module: &str, raw_name: &str) -> Type {
        self.type_token(&format!("{}/{}", module, lower_first(raw_name)), raw_name)
    }

    /// Manufactures a standard data-source token given a module and data
    /// source name. Same file-name derivation as resources, but the result
    /// names a callable member rather than a type.
    pub fn data_source_token(&self, module: &str, raw_name: &str) -> ModuleMember {
        self.module_member_token(&format!("{}/{}", module, lower_first(raw_name)), raw_name)
    }
}

/// Lower-case the first character of a string, leaving the rest untouched.
/// No-op when the first character has no distinct lowercase form.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yandex() -> NamingConvention {
        NamingConvention::new("yandex")
    }

    #[test]
    fn resource_token_lowers_only_the_file_segment() {
        let tok = yandex().resource_token("index", "AlbTargetGroup");
        assert_eq!(tok.as_str(), "yandex:index/albTargetGroup:AlbTargetGroup");
    }

    #[test]
    fn data_source_token_is_noop_on_lowercase_first_char() {
        let tok = yandex().data_source_token("index", "getComputeDisk");
        assert_eq!(tok.as_str(), "yandex:index/getComputeDisk:getComputeDisk");
    }

    #[test]
    fn resource_token_is_member_token_composed_with_lower_first() {
        let convention = yandex();
        let composed =
            convention.module_member_token("index/albTargetGroup", "AlbTargetGroup");
        let derived = convention.resource_token("index", "AlbTargetGroup");
        assert_eq!(derived.as_str(), composed.as_str());
    }

    #[test]
    fn tokens_are_deterministic() {
        let convention = yandex();
        assert_eq!(
            convention.resource_token("index", "VpcNetwork"),
            convention.resource_token("index", "VpcNetwork"),
        );
        assert_eq!(
            convention.data_source_token("index", "getVpcNetwork"),
            convention.data_source_token("index", "getVpcNetwork"),
        );
    }

    #[test]
    fn lower_first_touches_only_the_first_character() {
        assert_eq!(lower_first("AlbTargetGroup"), "albTargetGroup");
        assert_eq!(lower_first("DnsRecordSet"), "dnsRecordSet");
        assert_eq!(lower_first("getIamUser"), "getIamUser");
    }

    #[test]
    fn lower_first_is_noop_for_digits() {
        assert_eq!(lower_first("4thGen"), "4thGen");
    }

    #[test]
    fn lower_first_of_empty_is_empty() {
        assert_eq!(lower_first(""), "");
    }
}
