/*
[INPUT]:  Schema names referenced by modelled objects but not modelled here
[OUTPUT]: Raw JSON stand-ins that keep those sub-objects intact on the wire
[POS]:    Data layer - placeholders for nested records carried verbatim
[UPDATE]: When one of these shapes is modelled; move it to its domain module
*/

//! Nested records whose schema is carried as raw JSON.
//!
//! Each alias keeps the schema name so a field reads like its wire type. The
//! value round-trips losslessly through `serde_json::Value`; promote an
//! alias to a real struct by replacing it in place.

use serde_json::Value;

pub type ActionArgs = Value;
pub type AdminAuthConfiguration = Value;
pub type AlbServicesUser = Value;
pub type AlertFilter = Value;
pub type AlertMgrDebugFilter = Value;
pub type AlertRuleEvent = Value;
pub type AlertRuleMetric = Value;
pub type AlertSyslogServer = Value;
pub type AppLearningConfidenceOverride = Value;
pub type AppSignatureConfig = Value;
pub type ApplicationSamplingConfig = Value;
pub type ArchiveRules = Value;
pub type AuthnRuleMatch = Value;
pub type AuthorizationAction = Value;
pub type AuthorizationMatch = Value;
pub type AuthzRuleMatch = Value;
pub type AutoTuneSendInterval = Value;
pub type AzureInfo = Value;
pub type BotAllowList = Value;
pub type BotClassMatcher = Value;
pub type BotClassification = Value;
pub type BotConfigIpLocation = Value;
pub type BotConfigIpReputation = Value;
pub type BotConfigUserAgent = Value;
pub type BotDetectionMatch = Value;
pub type BotTypeMatcher = Value;
pub type CaptureIpc = Value;
pub type CdpLldpInfo = Value;
pub type CfgState = Value;
pub type ChildProcessInfo = Value;
pub type ClientLogConfiguration = Value;
pub type ClientLogStreamingConfig = Value;
pub type CloudConnectorDebugFilter = Value;
pub type ConfigVersionStatus = Value;
pub type ContentLibConfig = Value;
pub type ControllerAnalyticsPolicy = Value;
pub type ControllerInfo = Value;
pub type ControllerParams = Value;
pub type ControllerSizingCloudLimits = Value;
pub type CookieMatch = Value;
pub type CorfuTimestamp = Value;
pub type Crl = Value;
pub type CsrfRule = Value;
pub type CustomParams = Value;
pub type DataNetworkConfig = Value;
pub type DebugDnsOptions = Value;
pub type DebugIpAddr = Value;
pub type DebugVirtualServiceCapture = Value;
pub type DebugVirtualServiceObjSync = Value;
pub type DebugVirtualServiceSeParams = Value;
pub type DebugVsDataplane = Value;
pub type DiscoveredNetwork = Value;
pub type DnsClientIpMatch = Value;
pub type DnsClientPortMatch = Value;
pub type DnsConfig = Value;
pub type DnsConfiguration = Value;
pub type DnsGeoLocationMatch = Value;
pub type DnsQueryNameMatch = Value;
pub type DnsQueryTypeMatch = Value;
pub type DnsTransportProtocolMatch = Value;
pub type DsrProfile = Value;
pub type EmailConfiguration = Value;
pub type EventCache = Value;
pub type EventMap = Value;
pub type FailActionHttpLocalResponse = Value;
pub type FdsInfo = Value;
pub type FileObjectEventMap = Value;
pub type FtpProfile = Value;
pub type GeoLocation = Value;
pub type GeoMatch = Value;
pub type GslbClientIpAddrGroup = Value;
pub type GslbDnsGsStatus = Value;
pub type GslbObjInfo = Value;
pub type GslbPerDnsState = Value;
pub type GslbReplicationStats = Value;
pub type GslbSite = Value;
pub type GslbSiteRuntime = Value;
pub type GslbThirdPartySite = Value;
pub type GslbThirdPartySiteRuntime = Value;
pub type HeaderInfoInUri = Value;
pub type HealthMonitorSslAttributes = Value;
pub type HealthScoreEntity = Value;
pub type HorizonProfile = Value;
pub type HostAttributes = Value;
pub type HostHdrMatch = Value;
pub type HsmAwsCloudHsm = Value;
pub type HsmSafenetLuna = Value;
pub type HsmThalesNetHsm = Value;
pub type HsmThalesRfs = Value;
pub type Http2PoolProperties = Value;
pub type HttpCookiePersistenceKey = Value;
pub type HttpHdrAction = Value;
pub type HttpLocalFile = Value;
pub type HttpRedirectAction = Value;
pub type HttpRequestPolicy = Value;
pub type HttpReselectRespCode = Value;
pub type HttpResponsePolicy = Value;
pub type HttpsecurityAction = Value;
pub type HttpsecurityPolicy = Value;
pub type HttpstatusMatch = Value;
pub type HttpstatusRange = Value;
pub type ImageCloudData = Value;
pub type ImageEventMap = Value;
pub type ImageParams = Value;
pub type ImageUploadOpsStatus = Value;
pub type IpReputationServiceStatus = Value;
pub type IpReputationTypeMapping = Value;
pub type IpReputationTypeMatch = Value;
pub type JournalError = Value;
pub type JournalInfo = Value;
pub type L4RuleProtocolMatch = Value;
pub type LicenseServiceUpdate = Value;
pub type LinuxConfiguration = Value;
pub type LocalInfo = Value;
pub type LocationHdrMatch = Value;
pub type ManagementNetworkConfig = Value;
pub type MethodMatch = Value;
pub type MetricsApiSrvDebugFilter = Value;
pub type MetricsDataSeries = Value;
pub type MetricsMgrDebugFilter = Value;
pub type MgmtIpAccessControl = Value;
pub type MicroServiceMatch = Value;
pub type NetworkFilter = Value;
pub type NetworkSecurityPolicyActionRlParam = Value;
pub type NsxtTier1SegmentAutomaticMode = Value;
pub type NsxtTier1SegmentManualMode = Value;
pub type NtpConfiguration = Value;
pub type OAuthSettings = Value;
pub type OauthSubRequestLog = Value;
pub type OpsInfo = Value;
pub type PaaRequestLog = Value;
pub type PackageDetails = Value;
pub type ParamInfo = Value;
pub type ParamsInUri = Value;
pub type PathMatch = Value;
pub type Permission = Value;
pub type PgDeploymentRule = Value;
pub type PlacementNetwork = Value;
pub type PolicySpec = Value;
pub type PoolAnalyticsPolicy = Value;
pub type PortMatchGeneric = Value;
pub type PortalConfiguration = Value;
pub type Postsnapshot = Value;
pub type PreChecksParams = Value;
pub type Presnapshot = Value;
pub type ProtocolMatch = Value;
pub type QueryMatch = Value;
pub type QuotaConfig = Value;
pub type ReplicationPolicy = Value;
pub type ReportParameter = Value;
pub type ReportSection = Value;
pub type RmModifyVnic = Value;
pub type RoleFilter = Value;
pub type RoutingService = Value;
pub type RspContentRewriteRule = Value;
pub type RuleInfo = Value;
pub type SaasLicensingInfo = Value;
pub type SctpFastPathProfile = Value;
pub type SctpProxyProfile = Value;
pub type SeAgentProperties = Value;
pub type SeBootupProperties = Value;
pub type SeGroupOptions = Value;
pub type SeGroupResumeOptions = Value;
pub type SeGroupStatus = Value;
pub type SeHmEventGslbPoolMemberDetails = Value;
pub type SeImageStatus = Value;
pub type SeMgrDebugFilter = Value;
pub type SeRpcProxyDebugFilter = Value;
pub type SeRuntimeProperties = Value;
pub type SeUpgradeEvents = Value;
pub type SearchReplacePair = Value;
pub type SecureChannelConfiguration = Value;
pub type SecureChannelMetadata = Value;
pub type SensitiveLogProfile = Value;
pub type ServerConfig = Value;
pub type ShmSummary = Value;
pub type SiteInfo = Value;
pub type SnmpConfiguration = Value;
pub type SnmpTrapServer = Value;
pub type SpGslbServiceInfo = Value;
pub type SslCertificate = Value;
pub type SslKeyEcParams = Value;
pub type SslKeyMldsaParams = Value;
pub type SslKeyRsaParams = Value;
pub type StateCacheMgrDebugFilter = Value;
pub type SubJob = Value;
pub type Subnet = Value;
pub type SubnetRuntime = Value;
pub type SupportedMigrations = Value;
pub type TaskEventMap = Value;
pub type TcpOptions = Value;
pub type TcpProxyProfile = Value;
pub type TelemetryConfiguration = Value;
pub type TenantConfiguration = Value;
pub type TimeTrackerProperties = Value;
pub type TokenRefillRate = Value;
pub type TrustedHost = Value;
pub type UdpFastPathProfile = Value;
pub type UdpProxyProfile = Value;
pub type UpgradeEvent = Value;
pub type UpgradeOpsState = Value;
pub type UriParam = Value;
pub type UserAgentDbConfig = Value;
pub type ViMgrIpSubnetRuntime = Value;
pub type VirtualServicePerformanceScoreData = Value;
pub type VirtualServiceResource = Value;
pub type Vnic = Value;
pub type VnicNetwork = Value;
pub type VsDebugFilter = Value;
pub type VsGs = Value;
pub type WafConfig = Value;
pub type WafDataFile = Value;
pub type WafPsmLocation = Value;
pub type WafRuleGroup = Value;
