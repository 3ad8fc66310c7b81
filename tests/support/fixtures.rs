//! Ready-made datasets for the integration tests.

use ugrid_check::netcdf::NcType;

use super::builders::DatasetBuilder;

/// Two triangles sharing an edge, with every optional UGRID array present
/// and correctly shaped.
pub fn triangle_mesh() -> DatasetBuilder {
    DatasetBuilder::new()
        .dim("nMesh2_node", 4)
        .dim("nMesh2_edge", 5)
        .dim("nMesh2_face", 2)
        .dim("Two", 2)
        .dim("MaxNumNodesPerFace", 3)
        .global("Conventions", "UGRID-1.0")
        .mesh(
            "Mesh2",
            2,
            &[
                ("node_coordinates", "Mesh2_node_x Mesh2_node_y"),
                ("edge_node_connectivity", "Mesh2_edge_nodes"),
                ("face_node_connectivity", "Mesh2_face_nodes"),
                ("face_coordinates", "Mesh2_face_x Mesh2_face_y"),
                ("edge_face_connectivity", "Mesh2_edge_faces"),
                ("face_edge_connectivity", "Mesh2_face_edges"),
                ("face_face_connectivity", "Mesh2_face_links"),
            ],
        )
        .var("Mesh2_node_x", NcType::Double, &["nMesh2_node"])
        .var("Mesh2_node_y", NcType::Double, &["nMesh2_node"])
        .var("Mesh2_face_x", NcType::Double, &["nMesh2_face"])
        .var("Mesh2_face_y", NcType::Double, &["nMesh2_face"])
        .var("Mesh2_edge_nodes", NcType::Int, &["nMesh2_edge", "Two"])
        .var("Mesh2_face_nodes", NcType::Int, &["nMesh2_face", "MaxNumNodesPerFace"])
        .var("Mesh2_edge_faces", NcType::Int, &["nMesh2_edge", "Two"])
        .var("Mesh2_face_edges", NcType::Int, &["nMesh2_face", "MaxNumNodesPerFace"])
        .var("Mesh2_face_links", NcType::Int, &["nMesh2_face", "MaxNumNodesPerFace"])
}

/// A 1D network of three nodes joined by two edges.
pub fn network_1d() -> DatasetBuilder {
    DatasetBuilder::new()
        .dim("nNodes", 3)
        .dim("nEdges", 2)
        .dim("Two", 2)
        .mesh(
            "Mesh1",
            1,
            &[
                ("node_coordinates", "Mesh1_node_x"),
                ("edge_node_connectivity", "Mesh1_edge_nodes"),
            ],
        )
        .var("Mesh1_node_x", NcType::Double, &["nNodes"])
        .var("Mesh1_edge_nodes", NcType::Int, &["nEdges", "Two"])
}

/// A plain gridded dataset with no mesh topology variable.
pub fn no_mesh() -> DatasetBuilder {
    DatasetBuilder::new()
        .dim("lat", 3)
        .dim("lon", 4)
        .record_dim("time", 2)
        .var("temperature", NcType::Float, &["time", "lat", "lon"])
}

/// A 2D mesh missing its face connectivity and one node coordinate variable.
pub fn broken_mesh() -> DatasetBuilder {
    triangle_mesh()
        .remove_attr("Mesh2", "face_node_connectivity")
        .remove_var("Mesh2_node_y")
}
