//! UGRID 2.0 compliance checking.
//!
//! [`UgridChecker`] discovers mesh topology variables in a [`Dataset`] and runs
//! every registered check against each of them, followed by a dataset-wide
//! result recording whether any mesh was found at all.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::netcdf::Dataset;

pub mod mesh;
pub mod result;
pub mod topology;

pub use mesh::{discover_meshes, Connectivity, DimOrder, MeshTopology};
pub use result::{CheckResult, Priority};

/// Checker identity, as shown in reports.
pub const CHECKER_NAME: &str = "ugrid";
pub const SPEC_VERSION: &str = "2.0";

/// `cf_role` value marking a mesh topology variable.
pub const DEFAULT_MESH_ROLE: &str = "mesh_topology";

const MESH_PRESENCE: &str = "mesh_presence";

type CheckFn = fn(&Dataset, &MeshTopology) -> Vec<CheckResult>;

/// Per-mesh checks, in the order they run.
const MESH_CHECKS: &[(&str, CheckFn)] = &[
    ("topology_dimension", topology::check_topology_dimension),
    ("connectivity", topology::check_connectivity),
    ("node_coordinates", topology::check_node_coordinates),
    ("edge_face_connectivity", topology::check_edge_face_connectivity),
    ("face_edge_connectivity", topology::check_face_edge_connectivity),
    ("face_face_connectivity", topology::check_face_face_connectivity),
];

/// Description of a result a run can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckInfo {
    pub name: &'static str,
    pub priority: Priority,
    pub description: &'static str,
    /// Check this result is reported by, when it is a sub-result.
    pub parent: Option<&'static str>,
}

const CHECK_INFO: &[CheckInfo] = &[
    CheckInfo {
        name: "topology_dimension",
        priority: Priority::High,
        description: "topology_dimension attribute exists and is 1, 2 or 3",
        parent: None,
    },
    CheckInfo {
        name: "connectivity",
        priority: Priority::High,
        description: "required node connectivity exists and every connectivity array has a valid shape",
        parent: None,
    },
    CheckInfo {
        name: "edge_dimension",
        priority: Priority::Medium,
        description: "edge_dimension names a dataset dimension when edge_node_connectivity is transposed",
        parent: Some("connectivity"),
    },
    CheckInfo {
        name: "face_dimension",
        priority: Priority::Medium,
        description: "face_dimension names a dataset dimension when face_node_connectivity is transposed",
        parent: Some("connectivity"),
    },
    CheckInfo {
        name: "volume_dimension",
        priority: Priority::Medium,
        description: "volume_dimension names a dataset dimension when volume_node_connectivity is transposed",
        parent: Some("connectivity"),
    },
    CheckInfo {
        name: "edge_coordinates",
        priority: Priority::Low,
        description: "edge coordinate variables exist and have one value per edge",
        parent: Some("connectivity"),
    },
    CheckInfo {
        name: "face_coordinates",
        priority: Priority::Low,
        description: "face coordinate variables exist and have one value per face",
        parent: Some("connectivity"),
    },
    CheckInfo {
        name: "node_coordinates",
        priority: Priority::High,
        description: "one existing node coordinate variable per topology dimension",
        parent: None,
    },
    CheckInfo {
        name: "edge_face_connectivity",
        priority: Priority::Low,
        description: "optional edge_face_connectivity is shaped (nEdges, 2)",
        parent: None,
    },
    CheckInfo {
        name: "face_edge_connectivity",
        priority: Priority::Low,
        description: "optional face_edge_connectivity is shaped (nFaces, MaxNumNodesPerFace)",
        parent: None,
    },
    CheckInfo {
        name: "face_face_connectivity",
        priority: Priority::Low,
        description: "optional face_face_connectivity is shaped (nFaces, MaxNumNodesPerFace)",
        parent: None,
    },
    CheckInfo {
        name: MESH_PRESENCE,
        priority: Priority::High,
        description: "the dataset contains at least one mesh topology variable",
        parent: None,
    },
];

/// Every result name a run can produce, with its priority.
pub fn available_checks() -> &'static [CheckInfo] {
    CHECK_INFO
}

pub fn is_known_check(name: &str) -> bool {
    CHECK_INFO.iter().any(|c| c.name == name)
}

/// Which meshes to look for and which results to leave out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSettings {
    pub mesh_roles: Vec<String>,
    pub skip: BTreeSet<String>,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            mesh_roles: vec![DEFAULT_MESH_ROLE.to_string()],
            skip: BTreeSet::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UgridChecker {
    settings: CheckSettings,
}

impl UgridChecker {
    pub fn new(settings: CheckSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &CheckSettings {
        &self.settings
    }

    /// Run all checks against every mesh in `dataset`.
    ///
    /// Results come mesh by mesh in check order, then the `mesh_presence`
    /// result. Skipped checks (and their sub-results) are left out.
    pub fn check(&self, dataset: &Dataset) -> Vec<CheckResult> {
        let meshes = discover_meshes(dataset, &self.settings.mesh_roles);
        tracing::debug!(meshes = meshes.len(), "running UGRID checks");

        let mut results = Vec::new();
        for mesh in &meshes {
            for (name, check) in MESH_CHECKS {
                if self.settings.skip.contains(*name) {
                    continue;
                }
                results.extend(
                    check(dataset, mesh)
                        .into_iter()
                        .filter(|r| !self.settings.skip.contains(&r.name)),
                );
            }
        }

        if !self.settings.skip.contains(MESH_PRESENCE) {
            let mut presence = CheckResult::new(
                MESH_PRESENCE,
                None,
                Priority::High,
                "Run UGRID checks if mesh variables are present in the data",
            );
            presence.point(!meshes.is_empty(), || {
                "No mesh variables are detected in the data; all checks fail.".to_string()
            });
            results.push(presence);
        }

        results
    }
}
