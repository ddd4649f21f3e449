//! Provider - Assembles the Yandex Cloud provider descriptor
//!
//! Runs the static mapping tables through the token naming convention and
//! attaches the provider metadata, per-language packaging blocks, and the
//! autonaming policy. Construction fails hard on any table defect.

use std::collections::BTreeMap;

use tfbridge_core::naming::NamingConvention;
use tfbridge_core::provider::{
    CSharpInfo, DataSourceInfo, DocInfo, GolangInfo, JavaScriptInfo, ProviderInfo, PythonInfo,
    ResourceInfo, module_major_version,
};
use tfbridge_core::validate::{TableError, validate};

use crate::tables;

/// Token package shared by every resource and data source.
pub const PROVIDER_PACKAGE: &str = "yandex";

/// The single flat module all entries live under.
pub const MAIN_MODULE: &str = "index";

/// Crate version, used to derive the Go SDK import path.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build the full, validated provider descriptor.
pub fn provider_info() -> Result<ProviderInfo, TableError> {
    let convention = NamingConvention::new(PROVIDER_PACKAGE);

    let mut info = ProviderInfo::new(PROVIDER_PACKAGE)
        .with_description("A package for creating and managing yandex cloud resources.")
        .with_keywords(["yandex"])
        .with_license("Apache-2.0")
        .with_homepage("https://pulumi.io")
        .with_repository("https://github.com/airoh-io/pulumi-yandex")
        .with_github_org("yandex-cloud")
        .with_javascript(JavaScriptInfo {
            package_name: "@airoh/pulumi-yandex".to_string(),
            dependencies: string_map(&[("@pulumi/pulumi", "^3.142.0")]),
            dev_dependencies: string_map(&[
                ("@types/node", "^10.0.0"),
                ("@types/mime", "^2.0.0"),
            ]),
        })
        .with_python(PythonInfo {
            requires: string_map(&[("pulumi", ">=3.0.0,<4.0.0")]),
        })
        .with_golang(GolangInfo {
            import_base_path: golang_import_base_path(VERSION),
            generate_resource_container_types: true,
        })
        .with_csharp(CSharpInfo {
            package_references: string_map(&[("Pulumi", "3.*")]),
        });

    for &(terraform_name, token_name) in tables::RESOURCES {
        let entry = ResourceInfo::new(convention.resource_token(MAIN_MODULE, token_name));
        if info.resources.insert(terraform_name.to_string(), entry).is_some() {
            return Err(TableError::DuplicateName {
                name: terraform_name.to_string(),
                table: "resource",
            });
        }
    }

    for &(terraform_name, token_name, doc_source) in tables::DATA_SOURCES {
        let mut entry =
            DataSourceInfo::new(convention.data_source_token(MAIN_MODULE, token_name));
        if let Some(source) = doc_source {
            entry = entry.with_docs(DocInfo::new(source));
        }
        if info.data_sources.insert(terraform_name.to_string(), entry).is_some() {
            return Err(TableError::DuplicateName {
                name: terraform_name.to_string(),
                table: "data-source",
            });
        }
    }

    info.set_autonaming(255, "-");

    validate(&info)?;
    Ok(info)
}

/// Go SDK import base path, with the `/vN` module suffix for majors >= 2.
fn golang_import_base_path(version: &str) -> String {
    let mut path = format!("github.com/airoh-io/pulumi-{}/sdk", PROVIDER_PACKAGE);
    if let Some(major) = module_major_version(version) {
        path.push('/');
        path.push_str(&major);
    }
    format!("{}/go/{}", path, PROVIDER_PACKAGE)
}

fn string_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|&(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_tables_pass_validation() {
        let info = provider_info().unwrap();
        assert_eq!(info.resources.len(), tables::RESOURCES.len());
        assert_eq!(info.data_sources.len(), tables::DATA_SOURCES.len());
    }

    #[test]
    fn resource_tokens_match_convention() {
        let info = provider_info().unwrap();
        assert_eq!(
            info.resources["yandex_alb_target_group"].tok.as_str(),
            "yandex:index/albTargetGroup:AlbTargetGroup"
        );
        assert_eq!(
            info.resources["yandex_dns_recordset"].tok.as_str(),
            "yandex:index/dnsRecordSet:DnsRecordSet"
        );
    }

    #[test]
    fn data_source_tokens_keep_lowercase_prefix() {
        let info = provider_info().unwrap();
        let entry = &info.data_sources["yandex_compute_disk"];
        assert_eq!(
            entry.tok.as_str(),
            "yandex:index/getComputeDisk:getComputeDisk"
        );
        assert_eq!(
            entry.docs.as_ref().unwrap().source,
            "datasource_compute_disk.html.markdown"
        );
    }

    #[test]
    fn sqlserver_casing_differs_between_tables() {
        let info = provider_info().unwrap();
        assert_eq!(
            info.resources["yandex_mdb_sqlserver_cluster"].tok.as_str(),
            "yandex:index/mdbSqlServerCluster:MdbSqlServerCluster"
        );
        assert_eq!(
            info.data_sources["yandex_mdb_sqlserver_cluster"].tok.as_str(),
            "yandex:index/getMdbSqlserverCluster:getMdbSqlserverCluster"
        );
    }

    #[test]
    fn read_only_entries_have_no_resource_counterpart() {
        let info = provider_info().unwrap();
        for name in [
            "yandex_client_config",
            "yandex_iam_policy",
            "yandex_iam_role",
            "yandex_iam_user",
            "yandex_resourcemanager_cloud",
            "yandex_resourcemanager_folder",
        ] {
            assert!(info.data_sources.contains_key(name), "{name} missing");
            assert!(!info.resources.contains_key(name), "{name} grew a resource");
        }
    }

    #[test]
    fn policy_bindings_has_no_data_source_counterpart() {
        let info = provider_info().unwrap();
        assert!(info.resources.contains_key("yandex_backup_policy_bindings"));
        assert!(!info.data_sources.contains_key("yandex_backup_policy_bindings"));
    }

    #[test]
    fn autonaming_policy_is_set() {
        let info = provider_info().unwrap();
        let autonaming = info.autonaming.unwrap();
        assert_eq!(autonaming.max_length, 255);
        assert_eq!(autonaming.separator, "-");
    }

    #[test]
    fn golang_import_path_tracks_module_major() {
        assert_eq!(
            golang_import_base_path("0.1.0"),
            "github.com/airoh-io/pulumi-yandex/sdk/go/yandex"
        );
        assert_eq!(
            golang_import_base_path("3.142.0"),
            "github.com/airoh-io/pulumi-yandex/sdk/v3/go/yandex"
        );
    }

    #[test]
    fn descriptor_serializes_with_camel_case_tables() {
        let info = provider_info().unwrap();
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["name"], "yandex");
        assert_eq!(
            json["javascript"]["packageName"],
            "@airoh/pulumi-yandex"
        );
        assert_eq!(
            json["dataSources"]["yandex_vpc_subnet"]["docs"]["source"],
            "datasource_vpc_subnet.html.markdown"
        );
        assert_eq!(json["autonaming"]["maxLength"], 255);
    }
}
