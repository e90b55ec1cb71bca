/*
[INPUT]:  Top-level model types (objects with their own uuid and URL)
[OUTPUT]: Resource trait, object type registry and type-level dispatch
[POS]:    Data layer - binds models to their REST collection paths
[UPDATE]: When a top-level object is added to or removed from the model set
*/

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::admin::{Role, UserAccountProfile, UserActivity};
use super::alerts::{AlertEmailConfig, AlertObjectList, AlertSyslogConfig, SnmpTrapProfile};
use super::analytics::{AnalyticsProfile, ApplicationInsightsPolicy};
use super::application::Application;
use super::bot::{BotDetectionPolicy, BotIpReputationTypeMapping};
use super::cloud::{
    AlbServicesConfig, AlbServicesJob, CustomIpamDnsProfile, ViMgrHostRuntime, ViMgrSeVmRuntime,
};
use super::debug::{DebugController, DebugVirtualService};
use super::gslb::{
    ControllerSite, Gslb, GslbCrmRuntime, GslbHsmRuntime, GslbSmRuntime, LocalWorkerFdsVersion,
};
use super::journal::{JobEntry, StatediffOperation, StatediffSnapshot, TaskJournal};
use super::licensing::LicenseStatus;
use super::network::{Network, NetworkProfile, NetworkRuntime, NetworkService};
use super::policy::{ActionGroupConfig, ErrorPageBody, HttpPolicySet};
use super::pool::{MicroServiceGroup, Pool, ServerAutoScalePolicy};
use super::reports::{Report, ReportProfile, RetentionPolicy};
use super::security::{
    ApiRateLimitProfile, CsrfPolicy, HardwareSecurityModuleGroup, IpReputationDb,
    NetworkSecurityPolicy, RateLimitConfiguration, SecureChannelAvailableLocalIps,
    SecureChannelMapping, SecureChannelToken, TrustedHostProfile,
};
use super::service_engine::{
    MemoryBalancerRequest, SeProperties, ServiceEngine, ServiceEngineConfig,
};
use super::system::{BackupConfiguration, FileObject, SystemConfiguration};
use super::tech_support::{TechSupport, TechSupportMessage, TechSupportProfile};
use super::upgrade::{Image, UpgradeProfile};
use super::waf::{PositiveSecurityPolicy, WafCrs, WafPolicyPsmGroup, WafProfile};

/// A top-level object the controller serves under `api/<object type>`.
pub trait Resource:
    Serialize + DeserializeOwned + Default + Clone + PartialEq + fmt::Debug + Send + Sync + 'static
{
    /// Lowercase collection name, e.g. `pool` or `gslbcrmruntime`.
    const OBJECT_TYPE: &'static str;

    fn uuid(&self) -> Option<&str>;

    fn name(&self) -> Option<&str>;

    /// `api/<type>` or `api/<type>/<uuid>`.
    fn api_path(uuid: Option<&str>) -> String {
        match uuid {
            Some(uuid) if !uuid.is_empty() => format!("api/{}/{}", Self::OBJECT_TYPE, uuid),
            _ => format!("api/{}", Self::OBJECT_TYPE),
        }
    }
}

/// Runs generic code for a resource type chosen at runtime by name.
///
/// See [`visit_resource`].
pub trait ResourceVisitor {
    type Output;

    fn visit<T: Resource>(self) -> Self::Output;
}

#[doc(hidden)]
pub trait NameField {
    fn as_name(&self) -> Option<&str>;
}

impl NameField for String {
    fn as_name(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl NameField for Option<String> {
    fn as_name(&self) -> Option<&str> {
        self.as_deref()
    }
}

macro_rules! resources {
    (@impl $ty:ident, $object_type:literal) => {
        impl Resource for $ty {
            const OBJECT_TYPE: &'static str = $object_type;

            fn uuid(&self) -> Option<&str> {
                self.uuid.as_deref()
            }

            fn name(&self) -> Option<&str> {
                NameField::as_name(&self.name)
            }
        }
    };
    (@impl $ty:ident, $object_type:literal, unnamed) => {
        impl Resource for $ty {
            const OBJECT_TYPE: &'static str = $object_type;

            fn uuid(&self) -> Option<&str> {
                self.uuid.as_deref()
            }

            fn name(&self) -> Option<&str> {
                None
            }
        }
    };
    ($($ty:ident => $object_type:literal $(($flag:ident))?,)*) => {
        $(resources!(@impl $ty, $object_type $(, $flag)?);)*

        /// Every object type served by [`Resource`] implementations, sorted.
        pub const OBJECT_TYPES: &[&str] = &[$($object_type),*];

        /// Dispatches `visitor` on the model registered for `object_type`.
        ///
        /// Returns `None` for unknown object types.
        pub fn visit_resource<V: ResourceVisitor>(object_type: &str, visitor: V) -> Option<V::Output> {
            match object_type {
                $($object_type => Some(visitor.visit::<$ty>()),)*
                _ => None,
            }
        }
    };
}

resources! {
    ActionGroupConfig => "actiongroupconfig",
    AlbServicesConfig => "albservicesconfig" (unnamed),
    AlbServicesJob => "albservicesjob",
    AlertEmailConfig => "alertemailconfig",
    AlertObjectList => "alertobjectlist",
    AlertSyslogConfig => "alertsyslogconfig",
    AnalyticsProfile => "analyticsprofile",
    ApiRateLimitProfile => "apiratelimitprofile",
    Application => "application",
    ApplicationInsightsPolicy => "applicationinsightspolicy",
    BackupConfiguration => "backupconfiguration",
    BotDetectionPolicy => "botdetectionpolicy",
    BotIpReputationTypeMapping => "botipreputationtypemapping",
    ControllerSite => "controllersite",
    CsrfPolicy => "csrfpolicy",
    CustomIpamDnsProfile => "customipamdnsprofile",
    DebugController => "debugcontroller",
    DebugVirtualService => "debugvirtualservice",
    ErrorPageBody => "errorpagebody",
    FileObject => "fileobject",
    Gslb => "gslb",
    GslbCrmRuntime => "gslbcrmruntime",
    GslbHsmRuntime => "gslbhsmruntime",
    GslbSmRuntime => "gslbsmruntime",
    HardwareSecurityModuleGroup => "hardwaresecuritymodulegroup",
    HttpPolicySet => "httppolicyset",
    Image => "image",
    IpReputationDb => "ipreputationdb",
    JobEntry => "jobentry",
    LicenseStatus => "licensestatus" (unnamed),
    LocalWorkerFdsVersion => "localworkerfdsversion",
    MemoryBalancerRequest => "memorybalancerrequest",
    MicroServiceGroup => "microservicegroup",
    Network => "network",
    NetworkProfile => "networkprofile",
    NetworkRuntime => "networkruntime",
    NetworkSecurityPolicy => "networksecuritypolicy",
    NetworkService => "networkservice",
    Pool => "pool",
    PositiveSecurityPolicy => "positivesecuritypolicy",
    RateLimitConfiguration => "ratelimitconfiguration",
    Report => "report",
    ReportProfile => "reportprofile" (unnamed),
    RetentionPolicy => "retentionpolicy",
    Role => "role",
    SecureChannelAvailableLocalIps => "securechannelavailablelocalips",
    SecureChannelMapping => "securechannelmapping",
    SecureChannelToken => "securechanneltoken",
    SeProperties => "seproperties" (unnamed),
    ServerAutoScalePolicy => "serverautoscalepolicy",
    ServiceEngine => "serviceengine",
    ServiceEngineConfig => "serviceengineconfig",
    SnmpTrapProfile => "snmptrapprofile",
    StatediffOperation => "statediffoperation",
    StatediffSnapshot => "statediffsnapshot",
    SystemConfiguration => "systemconfiguration" (unnamed),
    TaskJournal => "taskjournal",
    TechSupport => "techsupport",
    TechSupportMessage => "techsupportmessage" (unnamed),
    TechSupportProfile => "techsupportprofile" (unnamed),
    TrustedHostProfile => "trustedhostprofile",
    UpgradeProfile => "upgradeprofile" (unnamed),
    UserAccountProfile => "useraccountprofile",
    UserActivity => "useractivity",
    ViMgrHostRuntime => "vimgrhostruntime",
    ViMgrSeVmRuntime => "vimgrsevmruntime",
    WafCrs => "wafcrs",
    WafPolicyPsmGroup => "wafpolicypsmgroup",
    WafProfile => "wafprofile",}

pub fn is_object_type(object_type: &str) -> bool {
    OBJECT_TYPES.binary_search(&object_type).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TypeName;

    impl ResourceVisitor for TypeName {
        type Output = &'static str;

        fn visit<T: Resource>(self) -> Self::Output {
            T::OBJECT_TYPE
        }
    }

    #[test]
    fn test_object_types_sorted_and_unique() {
        let mut sorted = OBJECT_TYPES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, OBJECT_TYPES);
    }

    #[test]
    fn test_visit_dispatches_by_name() {
        for object_type in OBJECT_TYPES {
            assert_eq!(visit_resource(object_type, TypeName), Some(*object_type));
        }
        assert_eq!(visit_resource("virtualservice-typo", TypeName), None);
    }

    #[test]
    fn test_api_path() {
        assert_eq!(Pool::api_path(None), "api/pool");
        assert_eq!(Pool::api_path(Some("")), "api/pool");
        assert_eq!(GslbCrmRuntime::api_path(Some("gslb-1")), "api/gslbcrmruntime/gslb-1");
    }

    #[test]
    fn test_name_and_uuid_accessors() {
        let pool = Pool {
            name: "web-pool".to_string(),
            uuid: Some("pool-1".to_string()),
            ..Default::default()
        };
        assert_eq!(pool.name(), Some("web-pool"));
        assert_eq!(pool.uuid(), Some("pool-1"));

        let profile = TechSupportProfile {
            uuid: Some("tsp-1".to_string()),
            ..Default::default()
        };
        assert_eq!(profile.name(), None);
        assert!(is_object_type("techsupportprofile"));
        assert!(!is_object_type("techsupport-profile"));
    }
}
