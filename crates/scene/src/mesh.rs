use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Indexed triangle list. Triangles wind counter-clockwise seen from the side
/// their normal points to.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

/// The shapes the scene is built from. Everything is a scaled unit primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MeshKind {
    Cuboid,
    Plane,
}

impl MeshKind {
    pub const ALL: [Self; 2] = [Self::Cuboid, Self::Plane];

    pub fn build(self) -> MeshData {
        match self {
            Self::Cuboid => MeshData::cuboid(),
            Self::Plane => MeshData::plane(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Cuboid => "cuboid",
            Self::Plane => "plane",
        }
    }
}

/// Corner UVs in face order bottom-left, bottom-right, top-right, top-left.
/// Texture rows start at the top, so v runs downward.
const FACE_UVS: [[f32; 2]; 4] = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

impl MeshData {
    /// Unit cube centred on the origin with one quad per face.
    pub fn cuboid() -> Self {
        let p = 0.5_f32;
        #[rustfmt::skip]
        let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
            ([0.0, 0.0, 1.0],  [[-p, -p,  p], [ p, -p,  p], [ p,  p,  p], [-p,  p,  p]]),
            ([0.0, 0.0, -1.0], [[ p, -p, -p], [-p, -p, -p], [-p,  p, -p], [ p,  p, -p]]),
            ([1.0, 0.0, 0.0],  [[ p, -p,  p], [ p, -p, -p], [ p,  p, -p], [ p,  p,  p]]),
            ([-1.0, 0.0, 0.0], [[-p, -p, -p], [-p, -p,  p], [-p,  p,  p], [-p,  p, -p]]),
            ([0.0, 1.0, 0.0],  [[-p,  p,  p], [ p,  p,  p], [ p,  p, -p], [-p,  p, -p]]),
            ([0.0, -1.0, 0.0], [[-p, -p, -p], [ p, -p, -p], [ p, -p,  p], [-p, -p,  p]]),
        ];

        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);
        for (normal, corners) in faces {
            let base = vertices.len() as u16;
            for (position, uv) in corners.into_iter().zip(FACE_UVS) {
                vertices.push(Vertex {
                    position,
                    normal,
                    uv,
                });
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
        }
        Self { vertices, indices }
    }

    /// Unit quad in the XY plane facing +Z.
    pub fn plane() -> Self {
        let p = 0.5_f32;
        let corners = [[-p, -p, 0.0], [p, -p, 0.0], [p, p, 0.0], [-p, p, 0.0]];
        let vertices = corners
            .into_iter()
            .zip(FACE_UVS)
            .map(|(position, uv)| Vertex {
                position,
                normal: [0.0, 0.0, 1.0],
                uv,
            })
            .collect();
        Self {
            vertices,
            indices: vec![0, 1, 2, 2, 3, 0],
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn assert_outward_ccw(mesh: &MeshData) {
        for tri in mesh.indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| mesh.vertices[i as usize]);
            let pa = Vec3::from(a.position);
            let face_normal = (Vec3::from(b.position) - pa).cross(Vec3::from(c.position) - pa);
            assert!(
                face_normal.dot(Vec3::from(a.normal)) > 0.0,
                "triangle {tri:?} winds against its normal"
            );
        }
    }

    #[test]
    fn cuboid_counts() {
        let mesh = MeshData::cuboid();
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn cuboid_winds_outward() {
        assert_outward_ccw(&MeshData::cuboid());
    }

    #[test]
    fn cuboid_normals_point_away_from_centre() {
        for v in MeshData::cuboid().vertices {
            let n = Vec3::from(v.normal);
            assert!((n.length() - 1.0).abs() < 1e-6);
            assert!(Vec3::from(v.position).dot(n) > 0.0);
        }
    }

    #[test]
    fn plane_faces_positive_z() {
        let mesh = MeshData::plane();
        assert_eq!(mesh.triangle_count(), 2);
        assert_outward_ccw(&mesh);
        assert!(mesh.vertices.iter().all(|v| v.position[2] == 0.0));
    }

    #[test]
    fn uvs_stay_in_unit_square() {
        for kind in MeshKind::ALL {
            for v in kind.build().vertices {
                assert!((0.0..=1.0).contains(&v.uv[0]));
                assert!((0.0..=1.0).contains(&v.uv[1]));
            }
        }
    }

    #[test]
    fn vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
    }
}
