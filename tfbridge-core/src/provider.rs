//! Provider - Descriptor handed to the SDK generation pipeline
//!
//! A `ProviderInfo` pairs every Terraform resource and data-source name with
//! its bridged token, plus the provider metadata and per-language packaging
//! blocks the generation pipeline needs. It is built once at startup and
//! never mutated afterwards; everything serializes to camelCase JSON.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::token::{ModuleMember, Type};

/// Documentation source-file override for a mapped entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocInfo {
    /// Upstream documentation file (e.g., "datasource_vpc_subnet.html.markdown")
    pub source: String,
}

impl DocInfo {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// Mapping entry for a Terraform resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceInfo {
    pub tok: Type,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<DocInfo>,
}

impl ResourceInfo {
    pub fn new(tok: Type) -> Self {
        Self { tok, docs: None }
    }

    pub fn with_docs(mut self, docs: DocInfo) -> Self {
        self.docs = Some(docs);
        self
    }
}

/// Mapping entry for a Terraform data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceInfo {
    pub tok: ModuleMember,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<DocInfo>,
}

impl DataSourceInfo {
    pub fn new(tok: ModuleMember) -> Self {
        Self { tok, docs: None }
    }

    pub fn with_docs(mut self, docs: DocInfo) -> Self {
        self.docs = Some(docs);
        self
    }
}

/// Node.js packaging metadata for the generated SDK.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JavaScriptInfo {
    pub package_name: String,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
}

/// Python packaging metadata for the generated SDK.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PythonInfo {
    pub requires: BTreeMap<String, String>,
}

/// Go packaging metadata for the generated SDK.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GolangInfo {
    pub import_base_path: String,
    pub generate_resource_container_types: bool,
}

/// .NET packaging metadata for the generated SDK.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CSharpInfo {
    pub package_references: BTreeMap<String, String>,
}

/// Autonaming policy: how the provider decorates auto-generated resource
/// names before appending a random suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Autonaming {
    pub max_length: usize,
    pub separator: String,
}

/// Full provider descriptor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderInfo {
    pub name: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub license: String,
    pub homepage: String,
    pub repository: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_org: Option<String>,
    pub resources: BTreeMap<String, ResourceInfo>,
    pub data_sources: BTreeMap<String, DataSourceInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub javascript: Option<JavaScriptInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python: Option<PythonInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub golang: Option<GolangInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csharp: Option<CSharpInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autonaming: Option<Autonaming>,
}

impl ProviderInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            keywords: Vec::new(),
            license: String::new(),
            homepage: String::new(),
            repository: String::new(),
            github_org: None,
            resources: BTreeMap::new(),
            data_sources: BTreeMap::new(),
            javascript: None,
            python: None,
            golang: None,
            csharp: None,
            autonaming: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_keywords(mut self, keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = license.into();
        self
    }

    pub fn with_homepage(mut self, homepage: impl Into<String>) -> Self {
        self.homepage = homepage.into();
        self
    }

    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = repository.into();
        self
    }

    pub fn with_github_org(mut self, org: impl Into<String>) -> Self {
        self.github_org = Some(org.into());
        self
    }

    pub fn with_javascript(mut self, info: JavaScriptInfo) -> Self {
        self.javascript = Some(info);
        self
    }

    pub fn with_python(mut self, info: PythonInfo) -> Self {
        self.python = Some(info);
        self
    }

    pub fn with_golang(mut self, info: GolangInfo) -> Self {
        self.golang = Some(info);
        self
    }

    pub fn with_csharp(mut self, info: CSharpInfo) -> Self {
        self.csharp = Some(info);
        self
    }

    /// Truncate auto-generated names to `max_length` and join them to their
    /// random suffix with `separator`.
    pub fn set_autonaming(&mut self, max_length: usize, separator: impl Into<String>) {
        self.autonaming = Some(Autonaming {
            max_length,
            separator: separator.into(),
        });
    }
}

/// Major-version suffix for the Go SDK import path. Versions below 2 have no
/// suffix; v2 and later import as `.../v<major>` per Go module convention.
pub fn module_major_version(version: &str) -> Option<String> {
    let major: u64 = version
        .trim_start_matches('v')
        .split('.')
        .next()?
        .parse()
        .ok()?;
    if major >= 2 { Some(format!("v{}", major)) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::NamingConvention;

    #[test]
    fn builder_fills_metadata() {
        let mut info = ProviderInfo::new("yandex")
            .with_description("A package for creating and managing yandex cloud resources.")
            .with_keywords(["yandex"])
            .with_license("Apache-2.0");
        info.set_autonaming(255, "-");

        assert_eq!(info.name, "yandex");
        assert_eq!(info.keywords, vec!["yandex".to_string()]);
        assert_eq!(
            info.autonaming,
            Some(Autonaming {
                max_length: 255,
                separator: "-".to_string(),
            })
        );
    }

    #[test]
    fn descriptor_serializes_to_camel_case() {
        let convention = NamingConvention::new("yandex");
        let mut info = ProviderInfo::new("yandex");
        info.resources.insert(
            "yandex_vpc_network".to_string(),
            ResourceInfo::new(convention.resource_token("index", "VpcNetwork")),
        );
        info.data_sources.insert(
            "yandex_vpc_network".to_string(),
            DataSourceInfo::new(convention.data_source_token("index", "getVpcNetwork"))
                .with_docs(DocInfo::new("datasource_vpc_network.html.markdown")),
        );

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(
            json["resources"]["yandex_vpc_network"]["tok"],
            "yandex:index/vpcNetwork:VpcNetwork"
        );
        assert_eq!(
            json["dataSources"]["yandex_vpc_network"]["docs"]["source"],
            "datasource_vpc_network.html.markdown"
        );
        // Unset language blocks are omitted entirely
        assert!(json.get("javascript").is_none());
    }

    #[test]
    fn module_major_version_has_no_suffix_below_v2() {
        assert_eq!(module_major_version("0.1.0"), None);
        assert_eq!(module_major_version("1.42.7"), None);
    }

    #[test]
    fn module_major_version_suffixes_v2_and_later() {
        assert_eq!(module_major_version("2.0.0"), Some("v2".to_string()));
        assert_eq!(module_major_version("v3.142.0"), Some("v3".to_string()));
    }

    #[test]
    fn module_major_version_rejects_garbage() {
        assert_eq!(module_major_version("abc"), None);
        assert_eq!(module_major_version(""), None);
    }
}
