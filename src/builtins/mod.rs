//! Static catalog of built-in Kubernetes API types
//!
//! Pure reference data used to recognize resource kinds that are defined by
//! the platform rather than by a CRD. Built-ins carry no YAML-embedded
//! OpenAPI schema, so they are kept structurally separate from the CRD
//! index and are never schema-resolved here.

/// One built-in type identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinType {
    pub group: &'static str,
    pub version: &'static str,
    pub kind: &'static str,
}

/// The catalog: (group, version, kinds). The core group is published under
/// the `k8s.io` label.
static BUILTINS: &[(&str, &str, &[&str])] = &[
    (
        "k8s.io",
        "v1",
        &[
            "Binding",
            "ComponentStatus",
            "ConfigMap",
            "Endpoints",
            "Event",
            "LimitRange",
            "Namespace",
            "Node",
            "PersistentVolumeClaim",
            "PersistentVolume",
            "Pod",
            "PodTemplate",
            "ReplicationController",
            "ResourceQuota",
            "Secret",
            "ServiceAccount",
            "Service",
        ],
    ),
    (
        "admissionregistration.k8s.io",
        "v1",
        &[
            "MutatingWebhookConfiguration",
            "ValidatingAdmissionPolicy",
            "ValidatingAdmissionPolicyBinding",
            "ValidatingWebhookConfiguration",
        ],
    ),
    ("apiextensions.k8s.io", "v1", &["CustomResourceDefinition"]),
    ("apiregistration.k8s.io", "v1", &["APIService"]),
    (
        "apps",
        "v1",
        &[
            "ControllerRevision",
            "DaemonSet",
            "Deployment",
            "ReplicaSet",
            "StatefulSet",
        ],
    ),
    (
        "authentication.k8s.io",
        "v1",
        &["SelfSubjectReview", "TokenReview"],
    ),
    (
        "authorization.k8s.io",
        "v1",
        &[
            "LocalSubjectAccessReview",
            "SelfSubjectAccessReview",
            "SelfSubjectRulesReview",
            "SubjectAccessReview",
        ],
    ),
    ("autoscaling", "v2", &["HorizontalPodAutoscaler"]),
    ("batch", "v1", &["CronJob", "Job"]),
    ("certificates.k8s.io", "v1", &["CertificateSigningRequest"]),
    ("coordinator.k8s.io", "v1", &["Lease"]),
    (
        "discovery.k8s.io",
        "v1",
        &["EndpointSlice", "EndpointSliceList"],
    ),
    ("events.k8s.io", "v1", &["Event"]),
    (
        "flowcontrol.apiserver.k8s.io",
        "v1",
        &["FlowSchema", "PriorityLevelConfiguration"],
    ),
    (
        "networking.k8s.io",
        "v1",
        &["Ingress", "IngressClass", "NetworkPolicy"],
    ),
    ("node.k8s.io", "v1", &["RuntimeClass"]),
    ("policy", "v1", &["PodDisruptionBudget"]),
    (
        "rbac.authorization.k8s.io",
        "v1",
        &["ClusterRole", "ClusterRoleBinding", "Role", "RoleBinding"],
    ),
    ("scheduling.k8s.io", "v1", &["PriorityClass"]),
    (
        "storage.k8s.io",
        "v1",
        &[
            "CSIDriver",
            "CSINode",
            "CSIStorageCapacity",
            "StorageClass",
            "VolumeAttachment",
        ],
    ),
];

/// Iterate over every built-in type identifier.
pub fn all() -> impl Iterator<Item = BuiltinType> {
    BUILTINS.iter().flat_map(|(group, version, kinds)| {
        kinds.iter().map(move |kind| BuiltinType {
            group,
            version,
            kind,
        })
    })
}

/// The built-in kinds of a (group, version) pair, if any.
pub fn kinds(group: &str, version: &str) -> Option<&'static [&'static str]> {
    BUILTINS
        .iter()
        .find(|(g, v, _)| *g == group && *v == version)
        .map(|(_, _, kinds)| *kinds)
}

/// Whether a (group, version, kind) triple names a built-in type.
pub fn is_builtin(group: &str, version: &str, kind: &str) -> bool {
    kinds(group, version).is_some_and(|kinds| kinds.contains(&kind))
}
