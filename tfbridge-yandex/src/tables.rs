//! Mapping tables for the Yandex Cloud Terraform provider
//!
//! Declarative data only: each entry pairs a Terraform schema name with the
//! PascalCase (resources) or lowerCamelCase (data sources) name used to
//! derive its bridged token, plus an optional upstream documentation file.
//! The naming convention itself lives in `tfbridge_core::naming`; keeping
//! the data separate lets the completeness checks run against plain slices.
//!
//! The tables are intentionally asymmetric: some entries are read-only and
//! exist only as data sources (e.g., `yandex_iam_policy`), and
//! `yandex_backup_policy_bindings` has no data-source counterpart.

/// Resource mapping: (terraform_name, token_name)
pub type ResourceMapping = (&'static str, &'static str);

/// Data-source mapping: (terraform_name, token_name, doc_source)
pub type DataSourceMapping = (&'static str, &'static str, Option<&'static str>);

pub const RESOURCES: &[ResourceMapping] = &[
    // ALB
    ("yandex_alb_target_group", "AlbTargetGroup"),
    ("yandex_alb_backend_group", "AlbBackendGroup"),
    ("yandex_alb_http_router", "AlbHttpRouter"),
    ("yandex_alb_virtual_host", "AlbVirtualHost"),
    ("yandex_alb_load_balancer", "AlbLoadBalancer"),
    ("yandex_api_gateway", "ApiGateway"),
    ("yandex_audit_trails_trail", "AuditTrailsTrail"),
    ("yandex_backup_policy", "BackupPolicy"),
    ("yandex_backup_policy_bindings", "BackupPolicyBindings"),
    ("yandex_cdn_origin_group", "CdnOriginGroup"),
    ("yandex_cdn_resource", "CdnResource"),
    ("yandex_cm_certificate", "CmCertificate"),
    // Compute
    ("yandex_compute_disk", "ComputeDisk"),
    ("yandex_compute_disk_placement_group", "ComputeDiskPlacementGroup"),
    ("yandex_compute_filesystem", "ComputeFilesystem"),
    ("yandex_compute_gpu_cluster", "ComputeGpuCluster"),
    ("yandex_compute_image", "ComputeImage"),
    ("yandex_compute_instance", "ComputeInstance"),
    ("yandex_compute_instance_group", "ComputeInstanceGroup"),
    ("yandex_compute_placement_group", "ComputePlacementGroup"),
    ("yandex_compute_snapshot", "ComputeSnapshot"),
    ("yandex_compute_snapshot_schedule", "ComputeSnapshotSchedule"),
    // Container registry
    ("yandex_container_registry", "ContainerRegistry"),
    ("yandex_container_registry_ip_permission", "ContainerRegistryIpPermission"),
    ("yandex_container_repository", "ContainerRepository"),
    ("yandex_container_repository_lifecycle_policy", "ContainerRepositoryLifecyclePolicy"),
    ("yandex_dataproc_cluster", "DataprocCluster"),
    ("yandex_datatransfer_endpoint", "DatatransferEndpoint"),
    ("yandex_datatransfer_transfer", "DatatransferTransfer"),
    ("yandex_dns_recordset", "DnsRecordSet"),
    ("yandex_dns_zone", "DnsZone"),
    ("yandex_function", "Function"),
    ("yandex_function_trigger", "FunctionTrigger"),
    ("yandex_function_scaling_policy", "FunctionScalingPolicy"),
    // IAM
    ("yandex_iam_service_account", "IamServiceAccount"),
    ("yandex_iam_service_account_api_key", "IamServiceAccountApiKey"),
    ("yandex_iam_service_account_iam_policy", "IamServiceAccountIamPolicy"),
    ("yandex_iam_service_account_key", "IamServiceAccountKey"),
    ("yandex_iam_service_account_static_access_key", "IamServiceAccountStaticAccessKey"),
    ("yandex_iam_workload_identity_federated_credential", "IamWorkloadIdentityFederatedCredential"),
    ("yandex_iam_workload_identity_oidc_federation", "IamWorkloadIdentityOidcFederation"),
    // IoT
    ("yandex_iot_core_broker", "IotCoreBroker"),
    ("yandex_iot_core_device", "IotCoreDevice"),
    ("yandex_iot_core_registry", "IotCoreRegistry"),
    // KMS
    ("yandex_kms_asymmetric_encryption_key", "KmsAsymmetricEncryptionKey"),
    ("yandex_kms_asymmetric_signature_key", "KmsAsymmetricSignatureKey"),
    ("yandex_kms_secret_ciphertext", "KmsSecretCiphertext"),
    ("yandex_kms_symmetric_key", "KmsSymmetricKey"),
    // Kubernetes
    ("yandex_kubernetes_cluster", "KubernetesCluster"),
    ("yandex_kubernetes_node_group", "KubernetesNodeGroup"),
    // Load balancer
    ("yandex_lb_network_load_balancer", "LbNetworkLoadBalancer"),
    ("yandex_lb_target_group", "LbTargetGroup"),
    ("yandex_loadtesting_agent", "LoadtestingAgent"),
    // Lockbox
    ("yandex_lockbox_secret", "LockboxSecret"),
    ("yandex_lockbox_secret_version", "LockboxSecretVersion"),
    ("yandex_lockbox_secret_version_hashed", "LockboxSecretVersionHashed"),
    ("yandex_logging_group", "LoggingGroup"),
    // Managed databases
    ("yandex_mdb_clickhouse_cluster", "MdbClickhouseCluster"),
    ("yandex_mdb_greenplum_cluster", "MdbGreenplumCluster"),
    ("yandex_mdb_kafka_cluster", "MdbKafkaCluster"),
    ("yandex_mdb_kafka_connector", "MdbKafkaConnector"),
    ("yandex_mdb_kafka_topic", "MdbKafkaTopic"),
    ("yandex_mdb_kafka_user", "MdbKafkaUser"),
    ("yandex_mdb_mongodb_cluster", "MdbMongodbCluster"),
    ("yandex_mdb_mysql_cluster", "MdbMysqlCluster"),
    ("yandex_mdb_mysql_database", "MdbMysqlDatabase"),
    ("yandex_mdb_mysql_user", "MdbMysqlUser"),
    ("yandex_mdb_postgresql_cluster", "MdbPostgresqlCluster"),
    ("yandex_mdb_postgresql_database", "MdbPostgresqlDatabase"),
    ("yandex_mdb_postgresql_user", "MdbPostgresqlUser"),
    ("yandex_mdb_redis_cluster", "MdbRedisCluster"),
    ("yandex_mdb_sqlserver_cluster", "MdbSqlServerCluster"),
    ("yandex_message_queue", "MessageQueue"),
    ("yandex_monitoring_dashboard", "MonitoringDashboard"),
    // Organization manager
    ("yandex_organizationmanager_group", "OrganizationmanagerGroup"),
    ("yandex_organizationmanager_group_mapping", "OrganizationmanagerGroupMapping"),
    ("yandex_organizationmanager_group_mapping_item", "OrganizationmanagerGroupMappingItem"),
    ("yandex_organizationmanager_group_membership", "OrganizationmanagerGroupMembership"),
    ("yandex_organizationmanager_os_login_settings", "OrganizationmanagerOsLoginSettings"),
    ("yandex_organizationmanager_saml_federation", "OrganizationmanagerSamlFederation"),
    ("yandex_organizationmanager_saml_federation_user_account", "OrganizationmanagerSamlFederationUserAccount"),
    ("yandex_organizationmanager_user_ssh_key", "OrganizationmanagerUserSshKey"),
    // Resource manager
    ("yandex_resourcemanager_folder_iam_policy", "ResourcemanagerFolderIamPolicy"),
    // Serverless
    ("yandex_serverless_container", "ServerlessContainer"),
    ("yandex_serverless_eventrouter_bus", "ServerlessEventrouterBus"),
    ("yandex_serverless_eventrouter_connector", "ServerlessEventrouterConnector"),
    ("yandex_serverless_eventrouter_rule", "ServerlessEventrouterRule"),
    ("yandex_smartcaptcha_captcha", "SmartcaptchaCaptcha"),
    // Storage
    ("yandex_storage_bucket", "StorageBucket"),
    ("yandex_storage_object", "StorageObject"),
    // Smart web security
    ("yandex_sws_advanced_rate_limiter_profile", "SwsAdvancedRateLimiterProfile"),
    ("yandex_sws_security_profile", "SwsSecurityProfile"),
    ("yandex_sws_waf_profile", "SwsWafProfile"),
    // VPC
    ("yandex_vpc_address", "VpcAddress"),
    ("yandex_vpc_default_security_group", "VpcDefaultSecurityGroup"),
    ("yandex_vpc_gateway", "VpcGateway"),
    ("yandex_vpc_network", "VpcNetwork"),
    ("yandex_vpc_private_endpoint", "VpcPrivateEndpoint"),
    ("yandex_vpc_route_table", "VpcRouteTable"),
    ("yandex_vpc_security_group", "VpcSecurityGroup"),
    ("yandex_vpc_subnet", "VpcSubnet"),
    // YDB
    ("yandex_ydb_database_dedicated", "YdbDatabaseDedicated"),
    ("yandex_ydb_database_serverless", "YdbDatabaseServerless"),
    ("yandex_ydb_table", "YdbTable"),
    ("yandex_ydb_table_changefeed", "YdbTableChangefeed"),
    ("yandex_ydb_table_index", "YdbTableIndex"),
    ("yandex_ydb_topic", "YdbTopic"),
];

pub const DATA_SOURCES: &[DataSourceMapping] = &[
    (
        "yandex_alb_target_group",
        "getAlbTargetGroup",
        Some("datasource_alb_target_group.html.markdown"),
    ),
    (
        "yandex_alb_backend_group",
        "getAlbBackendGroup",
        Some("datasource_alb_backend_group.html.markdown"),
    ),
    (
        "yandex_alb_http_router",
        "getAlbHttpRouter",
        Some("datasource_alb_http_router.html.markdown"),
    ),
    (
        "yandex_alb_virtual_host",
        "getAlbVirtualHost",
        Some("datasource_alb_virtual_host.html.markdown"),
    ),
    ("yandex_alb_load_balancer", "getAlbLoadBalancer", None),
    ("yandex_api_gateway", "getApiGateway", None),
    (
        "yandex_client_config",
        "getClientConfig",
        Some("datasource_client_config.html.markdown"),
    ),
    (
        "yandex_compute_disk",
        "getComputeDisk",
        Some("datasource_compute_disk.html.markdown"),
    ),
    (
        "yandex_compute_disk_placement_group",
        "getComputeDiskPlacementGroup",
        Some("datasource_compute_disk_placement_group.html.markdown"),
    ),
    (
        "yandex_compute_image",
        "getComputeImage",
        Some("datasource_compute_image.html.markdown"),
    ),
    (
        "yandex_compute_instance",
        "getComputeInstance",
        Some("datasource_compute_instance.html.markdown"),
    ),
    (
        "yandex_compute_instance_group",
        "getComputeInstanceGroup",
        Some("datasource_compute_instance_group.html.markdown"),
    ),
    (
        "yandex_compute_placement_group",
        "getComputePlacementGroup",
        Some("datasource_compute_placement_group.html.markdown"),
    ),
    (
        "yandex_compute_snapshot",
        "getComputeSnapshot",
        Some("datasource_compute_snapshot.html.markdown"),
    ),
    (
        "yandex_container_registry",
        "getContainerRegistry",
        Some("datasource_container_registry.html.markdown"),
    ),
    (
        "yandex_container_repository",
        "getContainerRepository",
        Some("datasource_container_repository.html.markdown"),
    ),
    (
        "yandex_dataproc_cluster",
        "getDataprocCluster",
        Some("datasource_dataproc_cluster.html.markdown"),
    ),
    (
        "yandex_dns_zone",
        "getDnsZone",
        Some("datasource_dns_zone.html.markdown"),
    ),
    (
        "yandex_function",
        "getFunction",
        Some("datasource_function.html.markdown"),
    ),
    (
        "yandex_function_trigger",
        "getFunctionTrigger",
        Some("datasource_function_trigger.html.markdown"),
    ),
    ("yandex_function_scaling_policy", "getFunctionScalingPolicy", None),
    (
        "yandex_iam_policy",
        "getIamPolicy",
        Some("datasource_iam_policy.html.markdown"),
    ),
    (
        "yandex_iam_role",
        "getIamRole",
        Some("datasource_iam_role.html.markdown"),
    ),
    (
        "yandex_iam_service_account",
        "getIamServiceAccount",
        Some("datasource_iam_service_account.html.markdown"),
    ),
    (
        "yandex_iam_user",
        "getIamUser",
        Some("datasource_iam_user.html.markdown"),
    ),
    (
        "yandex_iot_core_device",
        "getIotCoreDevice",
        Some("datasource_iot_core_device.html.markdown"),
    ),
    (
        "yandex_iot_core_registry",
        "getIotCoreRegistry",
        Some("datasource_iot_core_registry.html.markdown"),
    ),
    (
        "yandex_kubernetes_cluster",
        "getKubernetesCluster",
        Some("datasource_kubernetes_cluster.html.markdown"),
    ),
    (
        "yandex_kubernetes_node_group",
        "getKubernetesNodeGroup",
        Some("datasource_kubernetes_node_group.html.markdown"),
    ),
    (
        "yandex_lb_network_load_balancer",
        "getLbNetworkLoadBalancer",
        Some("datasource_lb_network_load_balancer.html.markdown"),
    ),
    (
        "yandex_lb_target_group",
        "getLbTargetGroup",
        Some("datasource_lb_target_group.html.markdown"),
    ),
    ("yandex_logging_group", "getLoggingGroup", None),
    (
        "yandex_mdb_clickhouse_cluster",
        "getMdbClickhouseCluster",
        Some("datasource_mdb_clickhouse_cluster.html.markdown"),
    ),
    ("yandex_mdb_greenplum_cluster", "getMdbGreenplumCluster", None),
    (
        "yandex_mdb_kafka_cluster",
        "getMdbKafkaCluster",
        Some("datasource_mdb_kafka_cluster.html.markdown"),
    ),
    ("yandex_mdb_kafka_topic", "getMdbKafkaTopic", None),
    (
        "yandex_mdb_mongodb_cluster",
        "getMdbMongodbCluster",
        Some("datasource_mdb_mongodb_cluster.html.markdown"),
    ),
    (
        "yandex_mdb_mysql_cluster",
        "getMdbMysqlCluster",
        Some("datasource_mdb_mysql_cluster.html.markdown"),
    ),
    (
        "yandex_mdb_postgresql_cluster",
        "getMdbPostgresqlCluster",
        Some("datasource_mdb_postgresql_cluster.html.markdown"),
    ),
    (
        "yandex_mdb_redis_cluster",
        "getMdbRedisCluster",
        Some("datasource_mdb_redis_cluster.html.markdown"),
    ),
    // The data-source name casing (Sqlserver) intentionally differs from the
    // resource type (SqlServer); both come straight from upstream.
    (
        "yandex_mdb_sqlserver_cluster",
        "getMdbSqlserverCluster",
        Some("datasource_mdb_sqlserver_cluster.html.markdown"),
    ),
    (
        "yandex_message_queue",
        "getMessageQueue",
        Some("datasource_message_queue.html.markdown"),
    ),
    (
        "yandex_resourcemanager_cloud",
        "getResourcemanagerCloud",
        Some("datasource_resourcemanager_cloud.html.markdown"),
    ),
    (
        "yandex_resourcemanager_folder",
        "getResourcemanagerFolder",
        Some("datasource_resourcemanager_folder.html.markdown"),
    ),
    (
        "yandex_vpc_address",
        "getVpcAddress",
        Some("datasource_vpc_address.html.markdown"),
    ),
    (
        "yandex_vpc_network",
        "getVpcNetwork",
        Some("datasource_vpc_network.html.markdown"),
    ),
    (
        "yandex_vpc_route_table",
        "getVpcRouteTable",
        Some("datasource_vpc_route_table.html.markdown"),
    ),
    (
        "yandex_vpc_security_group",
        "getVpcSecurityGroup",
        Some("datasource_vpc_security_group.html.markdown"),
    ),
    (
        "yandex_vpc_subnet",
        "getVpcSubnet",
        Some("datasource_vpc_subnet.html.markdown"),
    ),
    (
        "yandex_ydb_database_dedicated",
        "getYdbDatabaseDedicated",
        Some("datasource_ydb_database_dedicated.html.markdown"),
    ),
    (
        "yandex_ydb_database_serverless",
        "getYdbDatabaseServerless",
        Some("datasource_ydb_database_serverless.html.markdown"),
    ),
    (
        "yandex_cdn_origin_group",
        "getCdnOriginGroup",
        Some("datasource_cdn_origin_group.html.markdown"),
    ),
    (
        "yandex_cdn_resource",
        "getCdnResource",
        Some("datasource_cdn_resource.html.markdown"),
    ),
    (
        "yandex_serverless_container",
        "getServerlessContainer",
        Some("datasource_serverless_container.html.markdown"),
    ),
    (
        "yandex_organizationmanager_saml_federation",
        "getOrganizationmanagerSamlFederation",
        Some("datasource_organizationmanager_saml_federation.html.markdown"),
    ),
    (
        "yandex_organizationmanager_saml_federation_user_account",
        "getOrganizationmanagerSamlFederationUserAccount",
        Some("datasource_organizationmanager_saml_federation_user_account.html.markdown"),
    ),
    // Entries below have no upstream doc page yet
    ("yandex_audit_trails_trail", "getAuditTrailsTrail", None),
    ("yandex_backup_policy", "getBackupPolicy", None),
    ("yandex_cm_certificate", "getCmCertificate", None),
    ("yandex_cm_certificate_content", "getCmCertificateContent", None),
    ("yandex_compute_filesystem", "getComputeFilesystem", None),
    ("yandex_compute_gpu_cluster", "getComputeGpuCluster", None),
    ("yandex_compute_snapshot_schedule", "getComputeSnapshotSchedule", None),
    ("yandex_container_registry_ip_permission", "getContainerRegistryIpPermission", None),
    ("yandex_container_repository_lifecycle_policy", "getContainerRepositoryLifecyclePolicy", None),
    ("yandex_iam_service_agent", "getIamServiceAgent", None),
    ("yandex_iam_workload_identity_federated_credential", "getIamWorkloadIdentityFederatedCredential", None),
    ("yandex_iam_workload_identity_oidc_federation", "getIamWorkloadIdentityOidcFederation", None),
    ("yandex_iot_core_broker", "getIotCoreBroker", None),
    ("yandex_kms_asymmetric_encryption_key", "getKmsAsymmetricEncryptionKey", None),
    ("yandex_kms_asymmetric_signature_key", "getKmsAsymmetricSignatureKey", None),
    ("yandex_kms_symmetric_key", "getKmsSymmetricKey", None),
    ("yandex_loadtesting_agent", "getLoadtestingAgent", None),
    ("yandex_lockbox_secret", "getLockboxSecret", None),
    ("yandex_lockbox_secret_version", "getLockboxSecretVersion", None),
    ("yandex_mdb_kafka_connector", "getMdbKafkaConnector", None),
    ("yandex_mdb_kafka_user", "getMdbKafkaUser", None),
    ("yandex_mdb_mysql_database", "getMdbMysqlDatabase", None),
    ("yandex_mdb_mysql_user", "getMdbMysqlUser", None),
    ("yandex_mdb_postgresql_database", "getMdbPostgresqlDatabase", None),
    ("yandex_mdb_postgresql_user", "getMdbPostgresqlUser", None),
    ("yandex_monitoring_dashboard", "getMonitoringDashboard", None),
    ("yandex_organizationmanager_group", "getOrganizationmanagerGroup", None),
    ("yandex_organizationmanager_os_login_settings", "getOrganizationmanagerOsLoginSettings", None),
    ("yandex_organizationmanager_user_ssh_key", "getOrganizationmanagerUserSshKey", None),
    ("yandex_serverless_eventrouter_bus", "getServerlessEventrouterBus", None),
    ("yandex_serverless_eventrouter_connector", "getServerlessEventrouterConnector", None),
    ("yandex_serverless_eventrouter_rule", "getServerlessEventrouterRule", None),
    ("yandex_smartcaptcha_captcha", "getSmartcaptchaCaptcha", None),
    ("yandex_sws_advanced_rate_limiter_profile", "getSwsAdvancedRateLimiterProfile", None),
    ("yandex_sws_security_profile", "getSwsSecurityProfile", None),
    ("yandex_sws_waf_profile", "getSwsWafProfile", None),
    ("yandex_sws_waf_rule_set_descriptor", "getSwsWafRuleSetDescriptor", None),
    ("yandex_vpc_gateway", "getVpcGateway", None),
    ("yandex_vpc_private_endpoint", "getVpcPrivateEndpoint", None),
];
