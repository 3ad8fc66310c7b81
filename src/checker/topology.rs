//! The UGRID mesh topology checks.
//!
//! Every check takes the dataset and one resolved [`MeshTopology`] and
//! returns its results; a check may report sub-results next to its own.

use crate::netcdf::Dataset;

use super::mesh::{max_face_nodes, Connectivity, DimOrder, MeshTopology};
use super::result::{CheckResult, Priority};

const TOPOLOGY_DIMENSION: &str = "topology_dimension";
const NODE_COORDINATES: &str = "node_coordinates";
const EDGE_FACE_CONNECTIVITY: &str = "edge_face_connectivity";
const FACE_EDGE_CONNECTIVITY: &str = "face_edge_connectivity";
const FACE_FACE_CONNECTIVITY: &str = "face_face_connectivity";

fn fmt_shape(shape: &[u64]) -> String {
    let parts: Vec<String> = shape.iter().map(u64::to_string).collect();
    format!("({})", parts.join(", "))
}

/// `topology_dimension` must exist and be 1, 2 or 3.
pub fn check_topology_dimension(_dataset: &Dataset, mesh: &MeshTopology) -> Vec<CheckResult> {
    let mut result = CheckResult::new(
        TOPOLOGY_DIMENSION,
        Some(&mesh.name),
        Priority::High,
        "The topology dimension is the highest dimension of the data",
    );

    match &mesh.topology_dimension {
        None => result.fail(format!(
            "Mesh does not contain the required attribute \"{}\"",
            TOPOLOGY_DIMENSION
        )),
        Some(value) => result.point(mesh.valid_topology_dimension().is_some(), || {
            format!(
                "Invalid topology_dimension \"{}\" of type \"{}\"",
                value,
                value.nc_type().cdl_name()
            )
        }),
    }

    vec![result]
}

/// Node connectivity arrays.
///
/// - 1D: `edge_node_connectivity` required
/// - 2D: `face_node_connectivity` required, `edge_node_connectivity` optional
/// - 3D: `volume_node_connectivity` required, edge and face optional
///
/// One point per connectivity present with a valid shape. Arrays stored in
/// non-standard order also need the matching `*_dimension` attribute, and
/// edge/face connectivities may carry `*_coordinates`; both are reported as
/// sub-results.
pub fn check_connectivity(dataset: &Dataset, mesh: &MeshTopology) -> Vec<CheckResult> {
    let mut result = CheckResult::new(
        "connectivity",
        Some(&mesh.name),
        Priority::High,
        "Interconnectivity: connection between elements in the mesh",
    );

    if mesh.topology_dimension.is_none() {
        result.fail(
            "Mesh does not contain the required attribute \"topology_dimension\", \
             therefore any defined connectivity cannot be verified.",
        );
        return vec![result];
    }

    let dimension = mesh.topology_dimension_value();
    for kind in Connectivity::ALL {
        if dimension == Some(kind.required_for()) && mesh.connectivity(kind).is_none() {
            result.fail(format!(
                "dataset is {}D, so must have \"{}\"",
                kind.required_for(),
                kind.attribute()
            ));
            return vec![result];
        }
    }

    let mut extra = Vec::new();
    for (kind, conn) in &mesh.connectivity {
        result.point(conn.is_valid(), || {
            format!("Dataset contains invalid \"{}\" array", kind.attribute())
        });

        if conn.order() == Some(DimOrder::NonStandard) {
            extra.push(check_element_dimension(dataset, mesh, *kind));
        }
        if kind.coordinates_attribute().is_some() {
            extra.push(check_element_coordinates(dataset, mesh, *kind));
        }
    }

    let mut results = vec![result];
    results.extend(extra);
    results
}

/// Non-standard ordering requires the mesh to name the element dimension.
fn check_element_dimension(
    dataset: &Dataset,
    mesh: &MeshTopology,
    kind: Connectivity,
) -> CheckResult {
    let attr = kind.dimension_attribute();
    let mut result = CheckResult::new(
        attr,
        Some(&mesh.name),
        Priority::Medium,
        &format!(
            "{} required when dimension ordering of {} is non-standard",
            attr,
            kind.attribute()
        ),
    );

    let named = dataset
        .variable(&mesh.name)
        .and_then(|v| v.text_attribute(attr))
        .map(str::trim);

    match named {
        None => result.fail(format!(
            "Mesh does not contain {}, required when connectivity in non-standard order.",
            attr
        )),
        Some(name) => result.point(dataset.dimension(name).is_some(), || {
            format!(
                "{} \"{}\" defined in mesh, not defined in dataset dimensions.",
                attr, name
            )
        }),
    }

    result
}

/// Optional `edge_coordinates`/`face_coordinates`: each listed variable must
/// exist and run along the element dimension.
fn check_element_coordinates(
    dataset: &Dataset,
    mesh: &MeshTopology,
    kind: Connectivity,
) -> CheckResult {
    let attr = kind.coordinates_attribute().unwrap_or("coordinates");
    let element = kind.element();
    let mut result = CheckResult::new(
        attr,
        Some(&mesh.name),
        Priority::Low,
        &format!(
            "{} point to aux coordinate variables representing locations of {}s (usually midpoint)",
            attr, element
        ),
    );

    let listed = dataset
        .variable(&mesh.name)
        .and_then(|v| v.text_attribute(attr))
        .map(|s| s.split_whitespace().map(str::to_string).collect::<Vec<_>>());

    let Some(coords) = listed else {
        result.note(format!("No {} (optional)", attr));
        return result;
    };

    let Some(element_dim) = mesh.element_dimension(kind) else {
        result.fail(format!(
            "{} cannot be verified because \"{}\" is invalid",
            attr,
            kind.attribute()
        ));
        return result;
    };

    for coord in coords {
        match dataset.variable(&coord) {
            None => result.fail(format!(
                "{} variable \"{}\" not found in dataset",
                attr, coord
            )),
            Some(var) => {
                let len = dataset.shape(var).first().copied();
                result.point(len == Some(element_dim.length), || {
                    format!("{} should have length of {}", attr, element_dim.name)
                });
            }
        }
    }

    result
}

/// `node_coordinates` must list one existing variable per topology dimension.
pub fn check_node_coordinates(dataset: &Dataset, mesh: &MeshTopology) -> Vec<CheckResult> {
    let mut result = CheckResult::new(
        NODE_COORDINATES,
        Some(&mesh.name),
        Priority::High,
        "Node coordinates point to aux coordinate variables representing locations of nodes",
    );

    if mesh.topology_dimension.is_none() {
        result.fail("Failed because no topology dimension exists");
        return vec![result];
    }

    let listed = dataset
        .variable(&mesh.name)
        .and_then(|v| v.text_attribute(NODE_COORDINATES))
        .map(|s| s.split_whitespace().collect::<Vec<_>>());

    let Some(coords) = listed else {
        result.fail("This mesh has no node coordinate variables");
        return vec![result];
    };

    let expected = mesh.topology_dimension_value();
    if i64::try_from(coords.len()).ok() != expected {
        let shown = mesh
            .topology_dimension
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        result.fail(format!(
            "The size of mesh's node coordinates does not match the topology dimension ({})",
            shown
        ));
        return vec![result];
    }

    for coord in coords {
        result.point(dataset.has_variable(coord), || {
            format!("Node coordinate \"{}\" in mesh but not in variables", coord)
        });
    }

    vec![result]
}

/// Optional `edge_face_connectivity`: faces sharing each edge, (nEdges, 2).
pub fn check_edge_face_connectivity(dataset: &Dataset, mesh: &MeshTopology) -> Vec<CheckResult> {
    let mut result = CheckResult::new(
        EDGE_FACE_CONNECTIVITY,
        Some(&mesh.name),
        Priority::Low,
        "array of faces sharing the same edge (optional)",
    );

    let (Some(nedges), Some(_)) = (mesh.nedges(), mesh.nfaces()) else {
        return vec![result];
    };

    let named = dataset
        .variable(&mesh.name)
        .and_then(|v| v.text_attribute(EDGE_FACE_CONNECTIVITY))
        .map(str::trim);
    let Some(name) = named else {
        result.note(format!("No {} (optional)", EDGE_FACE_CONNECTIVITY));
        return vec![result];
    };

    match dataset.variable(name) {
        None => result.fail(format!(
            "{} variable \"{}\" not found in dataset",
            EDGE_FACE_CONNECTIVITY, name
        )),
        Some(var) => {
            let shape = dataset.shape(var);
            result.point(shape == [nedges.length, 2], || {
                format!(
                    "Incorrect shape {} of {} array",
                    fmt_shape(&shape),
                    EDGE_FACE_CONNECTIVITY
                )
            });
        }
    }

    vec![result]
}

/// Optional `face_edge_connectivity`: edges of each face, (nFaces, MaxNumNodesPerFace).
pub fn check_face_edge_connectivity(dataset: &Dataset, mesh: &MeshTopology) -> Vec<CheckResult> {
    vec![check_face_array(
        dataset,
        mesh,
        FACE_EDGE_CONNECTIVITY,
        "array pointing to every index of each edge of each face (optional)",
    )]
}

/// Optional `face_face_connectivity`: neighbouring faces, (nFaces, MaxNumNodesPerFace).
pub fn check_face_face_connectivity(dataset: &Dataset, mesh: &MeshTopology) -> Vec<CheckResult> {
    vec![check_face_array(
        dataset,
        mesh,
        FACE_FACE_CONNECTIVITY,
        "array of every face sharing a face with any other face (optional)",
    )]
}

fn check_face_array(
    dataset: &Dataset,
    mesh: &MeshTopology,
    attr: &str,
    description: &str,
) -> CheckResult {
    let mut result = CheckResult::new(attr, Some(&mesh.name), Priority::Low, description);

    let Some(max_nodes) = max_face_nodes(dataset) else {
        result.note(format!(
            "No {} dimension, {} not checked",
            super::mesh::MAX_FACE_NODES_DIM,
            attr
        ));
        return result;
    };

    let Some(nfaces) = mesh.nfaces() else {
        result.note("Number of faces (nfaces) not defined");
        return result;
    };

    let named = dataset
        .variable(&mesh.name)
        .and_then(|v| v.text_attribute(attr))
        .map(str::trim);
    let Some(name) = named else {
        result.note(format!("No {} (optional)", attr));
        return result;
    };

    match dataset.variable(name) {
        None => result.fail(format!("{} variable \"{}\" not found in dataset", attr, name)),
        Some(var) => {
            let shape = dataset.shape(var);
            result.point(shape == [nfaces.length, max_nodes.length], || {
                format!("Incorrect shape {} of {} array", fmt_shape(&shape), attr)
            });
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::mesh::discover_meshes;
    use crate::netcdf::{AttrValue, Attribute, Dimension, NcType, Variable};

    fn mesh_var(topology_dimension: Option<i32>, attrs: &[(&str, &str)]) -> Variable {
        let mut v = Variable::new("mesh", NcType::Int, &[])
            .with_attribute(Attribute::text("cf_role", "mesh_topology"));
        if let Some(d) = topology_dimension {
            v = v.with_attribute(Attribute::new(
                "topology_dimension",
                AttrValue::Int(vec![d]),
            ));
        }
        for (name, value) in attrs {
            v = v.with_attribute(Attribute::text(*name, *value));
        }
        v
    }

    fn build(dims: &[(&str, u64)], vars: Vec<Variable>) -> (Dataset, MeshTopology) {
        let ds = Dataset {
            dimensions: dims.iter().map(|(n, l)| Dimension::new(*n, *l)).collect(),
            variables: vars,
            ..Default::default()
        };
        let mesh = discover_meshes(&ds, &["mesh_topology".to_string()])
            .into_iter()
            .next()
            .unwrap();
        (ds, mesh)
    }

    /// A small 2D triangular mesh with both edges and faces.
    fn triangle_mesh(extra: &[(&str, &str)], extra_vars: Vec<Variable>) -> (Dataset, MeshTopology) {
        let mut attrs = vec![
            ("node_coordinates", "node_x node_y"),
            ("edge_node_connectivity", "edges"),
            ("face_node_connectivity", "faces"),
        ];
        attrs.extend_from_slice(extra);
        let mut vars = vec![
            mesh_var(Some(2), &attrs),
            Variable::new("node_x", NcType::Double, &["nnodes"]),
            Variable::new("node_y", NcType::Double, &["nnodes"]),
            Variable::new("edges", NcType::Int, &["nedges", "two"]),
            Variable::new("faces", NcType::Int, &["nfaces", "three"]),
        ];
        vars.extend(extra_vars);
        build(
            &[
                ("nnodes", 4),
                ("nedges", 5),
                ("nfaces", 2),
                ("two", 2),
                ("three", 3),
            ],
            vars,
        )
    }

    #[test]
    fn test_topology_dimension_missing() {
        let (ds, mesh) = build(&[], vec![mesh_var(None, &[])]);
        let r = &check_topology_dimension(&ds, &mesh)[0];
        assert_eq!((r.score, r.out_of), (0, 1));
        assert!(r.messages[0].contains("required attribute"));
    }

    #[test]
    fn test_topology_dimension_invalid_value() {
        let (ds, mesh) = build(&[], vec![mesh_var(Some(4), &[])]);
        let r = &check_topology_dimension(&ds, &mesh)[0];
        assert_eq!((r.score, r.out_of), (0, 1));
        assert_eq!(r.messages, vec!["Invalid topology_dimension \"4\" of type \"int\""]);
    }

    #[test]
    fn test_topology_dimension_valid() {
        let (ds, mesh) = build(&[], vec![mesh_var(Some(2), &[])]);
        let r = &check_topology_dimension(&ds, &mesh)[0];
        assert!(r.passed());
        assert_eq!(r.out_of, 1);
    }

    #[test]
    fn test_connectivity_requires_topology_dimension() {
        let (ds, mesh) = build(&[], vec![mesh_var(None, &[])]);
        let results = check_connectivity(&ds, &mesh);
        assert_eq!(results.len(), 1);
        assert_eq!((results[0].score, results[0].out_of), (0, 1));
    }

    #[test]
    fn test_connectivity_missing_required_array() {
        let (ds, mesh) = build(&[], vec![mesh_var(Some(1), &[])]);
        let results = check_connectivity(&ds, &mesh);
        assert_eq!((results[0].score, results[0].out_of), (0, 1));
        assert_eq!(
            results[0].messages,
            vec!["dataset is 1D, so must have \"edge_node_connectivity\""]
        );
    }

    #[test]
    fn test_connectivity_3d_requires_volume_array() {
        let (ds, mesh) = build(
            &[("nfaces", 2), ("three", 3)],
            vec![
                mesh_var(Some(3), &[("face_node_connectivity", "faces")]),
                Variable::new("faces", NcType::Int, &["nfaces", "three"]),
            ],
        );
        let results = check_connectivity(&ds, &mesh);
        assert_eq!(results.len(), 1);
        assert_eq!((results[0].score, results[0].out_of), (0, 1));
        assert_eq!(
            results[0].messages,
            vec!["dataset is 3D, so must have \"volume_node_connectivity\""]
        );
    }

    /// A single-hexahedron style volume mesh.
    fn volume_mesh(extra: &[(&str, &str)], vols_dims: &[&str]) -> (Dataset, MeshTopology) {
        let mut attrs = vec![
            ("node_coordinates", "node_x node_y node_z"),
            ("volume_node_connectivity", "vols"),
        ];
        attrs.extend_from_slice(extra);
        build(
            &[("nnodes", 8), ("nvol", 3), ("eight", 8)],
            vec![
                mesh_var(Some(3), &attrs),
                Variable::new("node_x", NcType::Double, &["nnodes"]),
                Variable::new("node_y", NcType::Double, &["nnodes"]),
                Variable::new("node_z", NcType::Double, &["nnodes"]),
                Variable::new("vols", NcType::Int, vols_dims),
            ],
        )
    }

    #[test]
    fn test_volume_mesh_connectivity_and_nodes() {
        let (ds, mesh) = volume_mesh(&[], &["nvol", "eight"]);

        let results = check_connectivity(&ds, &mesh);
        // Volumes carry no coordinates sub-result
        assert_eq!(results.len(), 1);
        assert_eq!((results[0].score, results[0].out_of), (1, 1));

        let nodes = &check_node_coordinates(&ds, &mesh)[0];
        assert_eq!((nodes.score, nodes.out_of), (3, 3));
    }

    #[test]
    fn test_nonstandard_volume_order_needs_volume_dimension() {
        let (ds, mesh) = volume_mesh(&[], &["eight", "nvol"]);
        let results = check_connectivity(&ds, &mesh);
        assert_eq!((results[0].score, results[0].out_of), (1, 1));
        let dim = results.iter().find(|r| r.name == "volume_dimension").unwrap();
        assert_eq!(dim.priority, Priority::Medium);
        assert_eq!((dim.score, dim.out_of), (0, 1));
        assert_eq!(
            dim.messages,
            vec!["Mesh does not contain volume_dimension, required when connectivity in non-standard order."]
        );

        let (ds, mesh) = volume_mesh(&[("volume_dimension", "nvol")], &["eight", "nvol"]);
        let results = check_connectivity(&ds, &mesh);
        let dim = results.iter().find(|r| r.name == "volume_dimension").unwrap();
        assert!(dim.passed());
        assert_eq!(dim.out_of, 1);
    }

    #[test]
    fn test_connectivity_scores_each_array() {
        let (ds, mesh) = triangle_mesh(&[], vec![]);
        let results = check_connectivity(&ds, &mesh);
        let main = &results[0];
        assert_eq!((main.score, main.out_of), (2, 2));

        // edge_coordinates and face_coordinates, both absent
        assert_eq!(results.len(), 3);
        assert!(results[1..].iter().all(|r| r.is_informational()));
    }

    #[test]
    fn test_connectivity_invalid_array() {
        let (ds, mesh) = build(
            &[("nedges", 5), ("four", 4)],
            vec![
                mesh_var(Some(1), &[("edge_node_connectivity", "edges")]),
                Variable::new("edges", NcType::Int, &["nedges", "four"]),
            ],
        );
        let main = &check_connectivity(&ds, &mesh)[0];
        assert_eq!((main.score, main.out_of), (0, 1));
        assert_eq!(
            main.messages,
            vec!["Dataset contains invalid \"edge_node_connectivity\" array"]
        );
    }

    #[test]
    fn test_nonstandard_order_needs_dimension_attribute() {
        let (ds, mesh) = build(
            &[("two", 2), ("nedges", 5)],
            vec![
                mesh_var(Some(1), &[("edge_node_connectivity", "edges")]),
                Variable::new("edges", NcType::Int, &["two", "nedges"]),
            ],
        );
        let results = check_connectivity(&ds, &mesh);
        let dim = results.iter().find(|r| r.name == "edge_dimension").unwrap();
        assert_eq!(dim.priority, Priority::Medium);
        assert_eq!((dim.score, dim.out_of), (0, 1));

        let (ds, mesh) = build(
            &[("two", 2), ("nedges", 5)],
            vec![
                mesh_var(
                    Some(1),
                    &[("edge_node_connectivity", "edges"), ("edge_dimension", "nedges")],
                ),
                Variable::new("edges", NcType::Int, &["two", "nedges"]),
            ],
        );
        let results = check_connectivity(&ds, &mesh);
        let dim = results.iter().find(|r| r.name == "edge_dimension").unwrap();
        assert!(dim.passed());
        assert_eq!(dim.out_of, 1);
    }

    #[test]
    fn test_edge_coordinates_length() {
        let (ds, mesh) = triangle_mesh(
            &[("edge_coordinates", "edge_x edge_y")],
            vec![
                Variable::new("edge_x", NcType::Double, &["nedges"]),
                Variable::new("edge_y", NcType::Double, &["nfaces"]),
            ],
        );
        let results = check_connectivity(&ds, &mesh);
        let coords = results.iter().find(|r| r.name == "edge_coordinates").unwrap();
        assert_eq!((coords.score, coords.out_of), (1, 2));
        assert_eq!(coords.messages, vec!["edge_coordinates should have length of nedges"]);
    }

    #[test]
    fn test_node_coordinates_all_present() {
        let (ds, mesh) = triangle_mesh(&[], vec![]);
        let r = &check_node_coordinates(&ds, &mesh)[0];
        assert_eq!((r.score, r.out_of), (2, 2));
    }

    #[test]
    fn test_node_coordinates_missing_variable() {
        let (ds, mesh) = build(
            &[("nnodes", 3)],
            vec![
                mesh_var(Some(2), &[("node_coordinates", "node_x node_y")]),
                Variable::new("node_x", NcType::Double, &["nnodes"]),
            ],
        );
        let r = &check_node_coordinates(&ds, &mesh)[0];
        assert_eq!((r.score, r.out_of), (1, 2));
        assert_eq!(r.messages, vec!["Node coordinate \"node_y\" in mesh but not in variables"]);
    }

    #[test]
    fn test_node_coordinates_count_mismatch() {
        let (ds, mesh) = build(&[], vec![mesh_var(Some(1), &[("node_coordinates", "x y")])]);
        let r = &check_node_coordinates(&ds, &mesh)[0];
        assert_eq!((r.score, r.out_of), (0, 1));
        assert!(r.messages[0].contains("does not match the topology dimension (1)"));
    }

    #[test]
    fn test_node_coordinates_absent() {
        let (ds, mesh) = build(&[], vec![mesh_var(Some(2), &[])]);
        let r = &check_node_coordinates(&ds, &mesh)[0];
        assert_eq!(r.messages, vec!["This mesh has no node coordinate variables"]);
    }

    #[test]
    fn test_edge_face_connectivity_skipped_without_faces() {
        let (ds, mesh) = build(
            &[("nedges", 5), ("two", 2)],
            vec![
                mesh_var(
                    Some(1),
                    &[("edge_node_connectivity", "edges"), ("edge_face_connectivity", "efc")],
                ),
                Variable::new("edges", NcType::Int, &["nedges", "two"]),
            ],
        );
        let r = &check_edge_face_connectivity(&ds, &mesh)[0];
        assert!(r.is_informational());
        assert!(r.messages.is_empty());
    }

    #[test]
    fn test_edge_face_connectivity_shape() {
        let (ds, mesh) = triangle_mesh(
            &[("edge_face_connectivity", "efc")],
            vec![Variable::new("efc", NcType::Int, &["nedges", "two"])],
        );
        let r = &check_edge_face_connectivity(&ds, &mesh)[0];
        assert_eq!((r.score, r.out_of), (1, 1));

        let (ds, mesh) = triangle_mesh(
            &[("edge_face_connectivity", "efc")],
            vec![Variable::new("efc", NcType::Int, &["nfaces", "two"])],
        );
        let r = &check_edge_face_connectivity(&ds, &mesh)[0];
        assert_eq!((r.score, r.out_of), (0, 1));
        assert_eq!(r.messages, vec!["Incorrect shape (2, 2) of edge_face_connectivity array"]);
    }

    #[test]
    fn test_edge_face_connectivity_absent_is_optional() {
        let (ds, mesh) = triangle_mesh(&[], vec![]);
        let r = &check_edge_face_connectivity(&ds, &mesh)[0];
        assert!(r.is_informational());
        assert_eq!(r.messages, vec!["No edge_face_connectivity (optional)"]);
    }

    #[test]
    fn test_face_arrays_need_max_nodes_dimension() {
        let (ds, mesh) = triangle_mesh(
            &[("face_face_connectivity", "ffc")],
            vec![Variable::new("ffc", NcType::Int, &["nfaces", "three"])],
        );
        let r = &check_face_face_connectivity(&ds, &mesh)[0];
        assert!(r.is_informational());
    }

    #[test]
    fn test_face_edge_connectivity_shape() {
        let dims = vec![
            Dimension::new("nfaces", 2),
            Dimension::new("two", 2),
            Dimension::new("maxnumnodesperface", 3),
        ];
        let vars = vec![
            mesh_var(
                Some(2),
                &[
                    ("face_node_connectivity", "faces"),
                    ("face_edge_connectivity", "fec"),
                    ("face_face_connectivity", "ffc"),
                ],
            ),
            Variable::new("faces", NcType::Int, &["nfaces", "maxnumnodesperface"]),
            Variable::new("fec", NcType::Int, &["nfaces", "maxnumnodesperface"]),
            Variable::new("ffc", NcType::Int, &["nfaces", "two"]),
        ];
        let ds = Dataset {
            dimensions: dims,
            variables: vars,
            ..Default::default()
        };
        let mesh = discover_meshes(&ds, &["mesh_topology".to_string()])
            .pop()
            .unwrap();

        let fec = &check_face_edge_connectivity(&ds, &mesh)[0];
        assert_eq!((fec.score, fec.out_of), (1, 1));

        let ffc = &check_face_face_connectivity(&ds, &mesh)[0];
        assert_eq!((ffc.score, ffc.out_of), (0, 1));
        assert_eq!(ffc.messages, vec!["Incorrect shape (2, 2) of face_face_connectivity array"]);
    }
}
