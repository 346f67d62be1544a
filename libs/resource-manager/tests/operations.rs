//! Request descriptors built by provider operations.

use arm_resource_manager::apimanagement::v2023_03_01_preview::{
    productgrouplink, tagapilink, tagoperationlink, tenantconfiguration, workspacepolicy,
};
use arm_resource_manager::datafactory::v2018_06_01::pipelines;
use arm_resource_manager::mixedreality::v2021_01_01::proxy;
use arm_resource_manager::sql::{v2021_11_01, v2023_02_01_preview};
use arm_resource_manager::systemcentervirtualmachinemanager::v2023_10_07::vmmservers;
use arm_resource_manager::vmware::v2023_03_01::workloadnetworks;
use arm_resource_manager::web::{v2022_09_01, v2023_01_01};
use arm_resource_manager::{HttpMethod, RequestOptions, CONTENT_TYPE_JSON};
use arm_resourceids::commonids::{
    AppServiceEnvironmentId, AppServiceId, SqlManagedInstanceDatabaseId, SqlManagedInstanceId,
    SqlServerId, SubscriptionId,
};
use rstest::rstest;

const SUB: &str = "12345678-1234-9876-4563-123456789012";
const RG: &str = "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/rg";

fn environment() -> AppServiceEnvironmentId {
    AppServiceEnvironmentId::new(SUB, "rg", "ase")
}

#[rstest]
#[case::ipv6_firewall_rules(
    v2021_11_01::ipv6firewallrules::list_by_server(&SqlServerId::new(SUB, "rg", "srv")),
    "/providers/Microsoft.Sql/servers/srv/ipv6FirewallRules"
)]
#[case::dns_aliases(
    v2021_11_01::managedserverdnsaliases::list_by_managed_instance(&SqlManagedInstanceId::new(SUB, "rg", "mi")),
    "/providers/Microsoft.Sql/managedInstances/mi/dnsAliases"
)]
#[case::target_groups(
    v2021_11_01::jobtargetgroups::list_by_agent(
        &v2021_11_01::jobtargetgroups::JobAgentId::new(SUB, "rg", "srv", "agent")
    ),
    "/providers/Microsoft.Sql/servers/srv/jobAgents/agent/targetGroups"
)]
#[case::managed_database_schemas(
    v2023_02_01_preview::manageddatabaseschemas::list_by_database(
        &SqlManagedInstanceDatabaseId::new(SUB, "rg", "mi", "db")
    ),
    "/providers/Microsoft.Sql/managedInstances/mi/databases/db/schemas"
)]
#[case::multi_role_pool_skus(
    v2022_09_01::appserviceenvironments::list_multi_role_pool_skus(&environment()),
    "/providers/Microsoft.Web/hostingEnvironments/ase/multiRolePools/default/skus"
)]
#[case::worker_pool_skus(
    v2022_09_01::appserviceenvironments::list_worker_pool_skus(
        &v2022_09_01::appserviceenvironments::WorkerPoolId::new(SUB, "rg", "ase", "pool")
    ),
    "/providers/Microsoft.Web/hostingEnvironments/ase/workerPools/pool/skus"
)]
#[case::private_endpoint_connections(
    v2023_01_01::appserviceenvironments::get_private_endpoint_connection_list(&environment()),
    "/providers/Microsoft.Web/hostingEnvironments/ase/privateEndpointConnections"
)]
#[case::web_apps(
    v2023_01_01::appserviceenvironments::list_web_apps(&environment()),
    "/providers/Microsoft.Web/hostingEnvironments/ase/sites"
)]
#[case::instance_identifiers(
    v2023_01_01::webapps::list_instance_identifiers(&AppServiceId::new(SUB, "rg", "site")),
    "/providers/Microsoft.Web/sites/site/instances"
)]
#[case::pipelines(
    pipelines::list_by_factory(&pipelines::FactoryId::new(SUB, "rg", "adf")),
    "/providers/Microsoft.DataFactory/factories/adf/pipelines"
)]
#[case::group_links(
    productgrouplink::list_by_product(&productgrouplink::ProductId::new(SUB, "rg", "apim", "starter")),
    "/providers/Microsoft.ApiManagement/service/apim/products/starter/groupLinks"
)]
#[case::api_links(
    tagapilink::list_by_product(&tagapilink::TagId::new(SUB, "rg", "apim", "tag")),
    "/providers/Microsoft.ApiManagement/service/apim/tags/tag/apiLinks"
)]
#[case::operation_links(
    tagoperationlink::list_by_product(&tagapilink::TagId::new(SUB, "rg", "apim", "tag")),
    "/providers/Microsoft.ApiManagement/service/apim/tags/tag/operationLinks"
)]
#[case::workspace_policies(
    workspacepolicy::list_by_api(&workspacepolicy::WorkspaceId::new(SUB, "rg", "apim", "ws")),
    "/providers/Microsoft.ApiManagement/service/apim/workspaces/ws/policies"
)]
#[case::triggered_web_job_history(
    v2022_09_01::webapps::list_triggered_web_job_history_slot(
        &v2022_09_01::webapps::SlotId::new(SUB, "rg", "site", "staging").triggered_web_job("cleanup")
    ),
    "/providers/Microsoft.Web/sites/site/slots/staging/triggeredWebJobs/cleanup/history"
)]
#[case::virtual_machines(
    workloadnetworks::list_virtual_machines(&workloadnetworks::PrivateCloudId::new(SUB, "rg", "cloud")),
    "/providers/Microsoft.AVS/privateClouds/cloud/workloadNetworks/default/virtualMachines"
)]
fn test_paged_list(#[case] options: RequestOptions, #[case] suffix: &str) {
    assert_eq!(options.path, format!("{RG}{suffix}"));
    assert_eq!(options.http_method, HttpMethod::Get);
    assert_eq!(options.content_type, CONTENT_TYPE_JSON);
    assert_eq!(options.expected_status_codes, vec![200]);
    assert!(options.is_paged());
}

#[rstest]
#[case::vmm_servers(
    vmmservers::list_by_subscription(&SubscriptionId::new(SUB)),
    "/providers/Microsoft.ScVmm/vmmServers"
)]
#[case::remote_rendering_accounts(
    proxy::remote_rendering_accounts_list_by_subscription(&SubscriptionId::new(SUB)),
    "/providers/Microsoft.MixedReality/remoteRenderingAccounts"
)]
fn test_subscription_scoped_list(#[case] options: RequestOptions, #[case] suffix: &str) {
    assert_eq!(options.path, format!("/subscriptions/{SUB}{suffix}"));
    assert_eq!(options.http_method, HttpMethod::Get);
    assert!(options.is_paged());
}

#[test]
fn test_create_ms_deploy_operation_slot() {
    let slot = v2022_09_01::webapps::SlotId::new(SUB, "rg", "site", "staging");
    let options = v2022_09_01::webapps::create_ms_deploy_operation_slot(&slot);
    assert_eq!(options.http_method, HttpMethod::Put);
    assert_eq!(
        options.path,
        format!("{RG}/providers/Microsoft.Web/sites/site/slots/staging/extensions/mSDeploy")
    );
    assert_eq!(options.expected_status_codes, vec![201]);
    assert!(options.is_long_running());
    assert_eq!(slot.site(), AppServiceId::new(SUB, "rg", "site"));
}

#[test]
fn test_tenant_configuration_deploy() {
    let id = tenantconfiguration::ServiceId::new(SUB, "rg", "apim");
    let options = tenantconfiguration::deploy(&id);
    assert_eq!(options.http_method, HttpMethod::Post);
    assert_eq!(
        options.path,
        format!("{RG}/providers/Microsoft.ApiManagement/service/apim/tenant/configuration/deploy")
    );
    assert!(options.accepts(200));
    assert!(options.accepts(202));
    assert!(options.is_long_running());
}

#[test]
fn test_update_dhcp() {
    let cloud = workloadnetworks::PrivateCloudId::new(SUB, "rg", "cloud");
    let id = cloud.dhcp_configuration("dhcp1");
    let options = workloadnetworks::update_dhcp(&id);
    assert_eq!(options.http_method, HttpMethod::Patch);
    assert_eq!(options.path, id.id());
    assert!(options.path.ends_with("/workloadNetworks/default/dhcpConfigurations/dhcp1"));
    assert_eq!(options.expected_status_codes, vec![200, 202]);
    assert!(options.is_long_running());
}
