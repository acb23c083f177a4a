//! Records returned by some calls that have no class of their own.

use std::collections::HashMap;

use xenapi_core::xen_record;

use crate::enums::SrHealth;

xen_record! {
    /// Data sources for logging in RRDs.
    DataSourceRecord {
        /// A human-readable name.
        name_label: String => "name_label",
        /// A notes field containing human-readable description.
        name_description: String => "name_description",
        /// True if the data source is being logged.
        enabled: bool => "enabled",
        /// True if the data source is enabled by default. Non-default data sources cannot be disabled.
        standard: bool => "standard",
        /// The units of the value.
        units: String => "units",
        /// The minimum value of the data source.
        min: f64 => "min",
        /// The maximum value of the data source.
        max: f64 => "max",
        /// Current value of the data source.
        value: f64 => "value",
    }
}

xen_record! {
    /// A set of properties that describe one result element of SR.probe. Result elements and properties can change dynamically based on changes to the the SR.probe input-parameters or the target.
    ProbeResultRecord {
        /// Plugin-specific configuration which describes where and how to locate the storage repository. This may include the physical block device name, a remote NFS server and path or an RBD storage pool.
        configuration: HashMap<String, String> => "configuration",
        /// True if this configuration is complete and can be used to call SR.create. False if it requires further iterative calls to SR.probe, to potentially narrow down on a configuration that can be used.
        complete: bool => "complete",
        /// Existing SR found for this configuration.
        sr: Option<SrStatRecord> => "sr",
        /// Additional plugin-specific information about this configuration, that might be of use for an API user. This can for example include the LUN or the WWPN.
        extra_info: HashMap<String, String> => "extra_info",
    }
}

xen_record! {
    /// A set of high-level properties associated with an SR.
    SrStatRecord {
        /// Uuid that uniquely identifies this SR, if one is available.
        uuid: Option<String> => "uuid",
        /// Short, human-readable label for the SR.
        name_label: String => "name_label",
        /// Longer, human-readable description of the SR. Descriptions are generally only displayed by clients when the user is examining SRs in detail.
        name_description: String => "name_description",
        /// Number of bytes free on the backing storage (in bytes)
        free_space: i64 => "free_space",
        /// Total physical size of the backing storage (in bytes)
        total_space: i64 => "total_space",
        /// Indicates whether the SR uses clustered local storage.
        clustered: bool => "clustered",
        /// The health status of the SR.
        health: SrHealth => "health",
    }
}

xen_record! {
    /// Details for connecting to a VDI using the Network Block Device protocol.
    VdiNbdServerInfoRecord {
        /// The exportname to request over NBD. This holds details including an authentication token, so it must be protected appropriately. Clients should regard the exportname as an opaque string or token.
        exportname: String => "exportname",
        /// An address on which the server can be reached; this can be IPv4, IPv6, or a DNS name.
        address: String => "address",
        /// The TCP port.
        port: i64 => "port",
        /// The TLS certificate of the server.
        cert: String => "cert",
        /// For convenience, this redundant field holds a DNS (hostname) subject of the certificate. This can be a wildcard, but only for a certificate that has a wildcard subject and no concrete hostname subjects.
        subject: String => "subject",
    }
}
