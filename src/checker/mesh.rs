//! Mesh topology discovery.
//!
//! A mesh topology is a dummy variable carrying `cf_role = "mesh_topology"`
//! whose attributes name the connectivity arrays of the mesh. Discovery
//! resolves those names against the dataset once, so the individual checks
//! only read facts.

use std::collections::BTreeMap;
use std::fmt;

use crate::netcdf::{AttrValue, Dataset, Dimension, Variable};

/// Dimension holding the maximum number of nodes per face.
pub const MAX_FACE_NODES_DIM: &str = "maxnumnodesperface";
/// Dimension holding the maximum number of nodes per volume.
pub const MAX_VOLUME_NODES_DIM: &str = "maxnumnodespervolume";

/// Node connectivity kinds, one per element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Connectivity {
    EdgeNode,
    FaceNode,
    VolumeNode,
}

impl Connectivity {
    pub const ALL: [Connectivity; 3] = [
        Connectivity::EdgeNode,
        Connectivity::FaceNode,
        Connectivity::VolumeNode,
    ];

    /// Mesh attribute naming the connectivity array.
    pub fn attribute(self) -> &'static str {
        match self {
            Connectivity::EdgeNode => "edge_node_connectivity",
            Connectivity::FaceNode => "face_node_connectivity",
            Connectivity::VolumeNode => "volume_node_connectivity",
        }
    }

    /// Topology dimension for which this connectivity is mandatory.
    pub fn required_for(self) -> i64 {
        match self {
            Connectivity::EdgeNode => 1,
            Connectivity::FaceNode => 2,
            Connectivity::VolumeNode => 3,
        }
    }

    /// Mesh attribute naming the element dimension (`edge_dimension`, ...).
    pub fn dimension_attribute(self) -> &'static str {
        match self {
            Connectivity::EdgeNode => "edge_dimension",
            Connectivity::FaceNode => "face_dimension",
            Connectivity::VolumeNode => "volume_dimension",
        }
    }

    /// Mesh attribute listing the element coordinate variables, where defined.
    pub fn coordinates_attribute(self) -> Option<&'static str> {
        match self {
            Connectivity::EdgeNode => Some("edge_coordinates"),
            Connectivity::FaceNode => Some("face_coordinates"),
            Connectivity::VolumeNode => None,
        }
    }

    pub fn element(self) -> &'static str {
        match self {
            Connectivity::EdgeNode => "edge",
            Connectivity::FaceNode => "face",
            Connectivity::VolumeNode => "volume",
        }
    }

    /// Whether `size` is an acceptable nodes-per-element extent.
    fn nodes_match(self, dataset: &Dataset, size: u64) -> bool {
        match self {
            Connectivity::EdgeNode => size == 2,
            Connectivity::FaceNode => {
                size == 3 || max_face_nodes(dataset).is_some_and(|d| d.length == size)
            }
            Connectivity::VolumeNode => match find_dimension(dataset, MAX_VOLUME_NODES_DIM) {
                Some(d) => d.length == size,
                None => size >= 4,
            },
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attribute())
    }
}

/// Order of the two axes of a node connectivity array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimOrder {
    /// (elements, nodes per element)
    Standard,
    /// (nodes per element, elements)
    NonStandard,
}

/// A connectivity array named by a mesh, with its resolved shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectivityArray {
    pub variable: String,
    /// Element dimension and axis order when the array's shape is valid.
    pub resolved: Option<(Dimension, DimOrder)>,
}

impl ConnectivityArray {
    pub fn is_valid(&self) -> bool {
        self.resolved.is_some()
    }

    pub fn order(&self) -> Option<DimOrder> {
        self.resolved.as_ref().map(|(_, order)| *order)
    }
}

/// Facts about one mesh topology variable.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshTopology {
    pub name: String,
    /// Raw `topology_dimension` attribute, if present.
    pub topology_dimension: Option<AttrValue>,
    pub connectivity: BTreeMap<Connectivity, ConnectivityArray>,
}

impl MeshTopology {
    /// `topology_dimension` as an integer, whatever its value.
    pub fn topology_dimension_value(&self) -> Option<i64> {
        self.topology_dimension.as_ref().and_then(AttrValue::as_integer)
    }

    /// `topology_dimension` when it is one of 1, 2 or 3.
    pub fn valid_topology_dimension(&self) -> Option<i64> {
        self.topology_dimension_value()
            .filter(|d| (1..=3).contains(d))
    }

    pub fn connectivity(&self, kind: Connectivity) -> Option<&ConnectivityArray> {
        self.connectivity.get(&kind)
    }

    /// Element dimension resolved from a valid connectivity array.
    pub fn element_dimension(&self, kind: Connectivity) -> Option<&Dimension> {
        self.connectivity(kind)
            .and_then(|c| c.resolved.as_ref())
            .map(|(dim, _)| dim)
    }

    pub fn nedges(&self) -> Option<&Dimension> {
        self.element_dimension(Connectivity::EdgeNode)
    }

    pub fn nfaces(&self) -> Option<&Dimension> {
        self.element_dimension(Connectivity::FaceNode)
    }
}

/// Find every mesh topology variable whose `cf_role` is one of `roles`.
pub fn discover_meshes(dataset: &Dataset, roles: &[String]) -> Vec<MeshTopology> {
    dataset
        .variables
        .iter()
        .filter(|v| {
            v.text_attribute("cf_role")
                .is_some_and(|role| roles.iter().any(|r| r == role.trim()))
        })
        .map(|v| resolve_mesh(dataset, v))
        .collect()
}

fn resolve_mesh(dataset: &Dataset, mesh: &Variable) -> MeshTopology {
    let mut connectivity = BTreeMap::new();
    for kind in Connectivity::ALL {
        if let Some(value) = mesh.attribute(kind.attribute()) {
            let variable = match value.as_text() {
                Some(name) => name.trim().to_string(),
                None => value.to_string(),
            };
            let resolved = resolve_shape(dataset, mesh, kind, &variable);
            connectivity.insert(kind, ConnectivityArray { variable, resolved });
        }
    }

    let topology = MeshTopology {
        name: mesh.name.clone(),
        topology_dimension: mesh.attribute("topology_dimension").cloned(),
        connectivity,
    };

    tracing::debug!(
        mesh = %topology.name,
        topology_dimension = ?topology.topology_dimension_value(),
        connectivities = topology.connectivity.len(),
        "resolved mesh topology"
    );

    topology
}

/// Work out which axis of a connectivity array is the element dimension.
///
/// When the mesh names the element dimension explicitly it must be one of
/// the two axes. Otherwise the axis whose partner has the expected
/// nodes-per-element extent is taken, preferring standard order.
fn resolve_shape(
    dataset: &Dataset,
    mesh: &Variable,
    kind: Connectivity,
    variable: &str,
) -> Option<(Dimension, DimOrder)> {
    let array = dataset.variable(variable)?;
    let [first, second] = array.dimensions.as_slice() else {
        return None;
    };
    let d1 = dataset.dimension(first)?;
    let d2 = dataset.dimension(second)?;

    match mesh.text_attribute(kind.dimension_attribute()) {
        Some(named) => {
            let named = named.trim();
            if d1.name == named && kind.nodes_match(dataset, d2.length) {
                Some((d1.clone(), DimOrder::Standard))
            } else if d2.name == named && kind.nodes_match(dataset, d1.length) {
                Some((d2.clone(), DimOrder::NonStandard))
            } else {
                None
            }
        }
        None => {
            if kind.nodes_match(dataset, d2.length) {
                Some((d1.clone(), DimOrder::Standard))
            } else if kind.nodes_match(dataset, d1.length) {
                Some((d2.clone(), DimOrder::NonStandard))
            } else {
                None
            }
        }
    }
}

fn find_dimension<'a>(dataset: &'a Dataset, name: &str) -> Option<&'a Dimension> {
    dataset
        .dimensions
        .iter()
        .find(|d| d.name.eq_ignore_ascii_case(name))
}

/// The `maxnumnodesperface` dimension, matched case-insensitively.
pub fn max_face_nodes(dataset: &Dataset) -> Option<&Dimension> {
    find_dimension(dataset, MAX_FACE_NODES_DIM)
}
