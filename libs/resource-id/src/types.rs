//! Typed resource IDs for App Configuration resources.
//!
//! Each ID type is backed by a constant segment schema. The schemas are
//! shared read-only by the formatter and both parsers.

use crate::define_resource_id;
use crate::schema::Segment;

// =============================================================================
// Shared segments
// =============================================================================

const SUBSCRIPTIONS: Segment = Segment::Literal("subscriptions");
const SUBSCRIPTION_ID: Segment = Segment::Value {
    name: "subscriptionId",
    label: "subscription ID",
};
const RESOURCE_GROUPS: Segment = Segment::Literal("resourceGroups");
const RESOURCE_GROUP_NAME: Segment = Segment::Value {
    name: "resourceGroupName",
    label: "resource group",
};
const PROVIDERS: Segment = Segment::Literal("providers");

/// Provider namespace for App Configuration.
pub const PROVIDER_NAMESPACE: &str = "Microsoft.AppConfiguration";

const CONFIGURATION_STORES: Segment = Segment::Literal("configurationStores");
const CONFIG_STORE_NAME: Segment = Segment::Value {
    name: "configStoreName",
    label: "configuration store name",
};

// =============================================================================
// Configuration Stores
// =============================================================================

const CONFIGURATION_STORE_SEGMENTS: &[Segment] = &[
    SUBSCRIPTIONS,
    SUBSCRIPTION_ID,
    RESOURCE_GROUPS,
    RESOURCE_GROUP_NAME,
    PROVIDERS,
    Segment::Literal(PROVIDER_NAMESPACE),
    CONFIGURATION_STORES,
    CONFIG_STORE_NAME,
];

define_resource_id!(
    /// ID of an App Configuration store:
    /// `/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/Microsoft.AppConfiguration/configurationStores/{configStoreName}`.
    ConfigurationStoreId,
    "Configuration Store",
    CONFIGURATION_STORE_SEGMENTS,
    { subscription_id, resource_group, configuration_store_name }
);

impl ConfigurationStoreId {
    /// Returns the ID of a private link resource within this store.
    #[must_use]
    pub fn private_link_resource_id(&self, name: impl Into<String>) -> PrivateLinkResourceId {
        PrivateLinkResourceId::new(
            self.subscription_id.clone(),
            self.resource_group.clone(),
            self.configuration_store_name.clone(),
            name,
        )
    }
}

// =============================================================================
// Private Link Resources
// =============================================================================

const PRIVATE_LINK_RESOURCE_SEGMENTS: &[Segment] = &[
    SUBSCRIPTIONS,
    SUBSCRIPTION_ID,
    RESOURCE_GROUPS,
    RESOURCE_GROUP_NAME,
    PROVIDERS,
    Segment::Literal(PROVIDER_NAMESPACE),
    CONFIGURATION_STORES,
    CONFIG_STORE_NAME,
    Segment::Literal("privateLinkResources"),
    Segment::Value {
        name: "groupName",
        label: "private link resource name",
    },
];

define_resource_id!(
    /// ID of a private link resource (group) of an App Configuration store.
    PrivateLinkResourceId,
    "Private Link Resource",
    PRIVATE_LINK_RESOURCE_SEGMENTS,
    { subscription_id, resource_group, configuration_store_name, name }
);

impl PrivateLinkResourceId {
    /// Returns the ID of the configuration store this resource belongs to.
    #[must_use]
    pub fn configuration_store_id(&self) -> ConfigurationStoreId {
        ConfigurationStoreId::new(
            self.subscription_id.clone(),
            self.resource_group.clone(),
            self.configuration_store_name.clone(),
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
