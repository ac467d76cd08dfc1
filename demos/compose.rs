//! Composes union, intersection and difference of two axis-aligned cubes.
//!
//! Usage:
//! ```text
//! cargo run --example compose
//! RUST_LOG=polycsg=debug cargo run --example compose
//! ```
//!
//! The cubes are placed so that no faces cross, which lets the classifier
//! below skip splitting and label faces from their centroids alone.

use polycsg::math::{Color, Point3, Vector3};
use polycsg::topology::OperandMesh;
use polycsg::{BooleanModeller, BooleanOp, FaceStatus, Result, Solid, SplitClassifier};

fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let outer = cube(Point3::new(0.0, 0.0, 0.0), 2.0, Color::new(0.8, 0.2, 0.2))?;
    let inner = cube(Point3::new(0.5, 0.5, 0.5), 1.0, Color::new(0.2, 0.2, 0.8))?;
    let apart = cube(Point3::new(5.0, 0.0, 0.0), 1.0, Color::new(0.2, 0.8, 0.2))?;

    for (name, a, b) in [
        ("nested", &outer, &inner),
        ("disjoint", &outer, &apart),
        ("self", &outer, &outer),
    ] {
        let modeller = BooleanModeller::new(a, b, &BoxClassifier)?;
        for op in [BooleanOp::Union, BooleanOp::Intersection, BooleanOp::Difference] {
            let solid = modeller.apply(op);
            println!(
                "{name:>8} {:<12} vertices={:<3} triangles={:<3} empty={}",
                format!("{op:?}"),
                solid.vertex_count(),
                solid.triangle_count(),
                solid.is_empty()
            );
        }
    }
    Ok(())
}

/// Axis-aligned cube with outward-facing triangles.
fn cube(origin: Point3, size: f64, color: Color) -> Result<Solid> {
    let corners = [
        (0.0, 0.0, 0.0),
        (1.0, 0.0, 0.0),
        (1.0, 1.0, 0.0),
        (0.0, 1.0, 0.0),
        (0.0, 0.0, 1.0),
        (1.0, 0.0, 1.0),
        (1.0, 1.0, 1.0),
        (0.0, 1.0, 1.0),
    ];
    let vertices = corners
        .iter()
        .map(|&(x, y, z)| origin + Vector3::new(x, y, z) * size)
        .collect();
    let indices = vec![
        0, 2, 1, 0, 3, 2, // bottom
        4, 5, 6, 4, 6, 7, // top
        0, 1, 5, 0, 5, 4, // front
        3, 7, 6, 3, 6, 2, // back
        0, 4, 7, 0, 7, 3, // left
        1, 2, 6, 1, 6, 5, // right
    ];
    Ok(Solid::with_color(vertices, indices, color)?)
}

/// Classifies faces of boxes whose faces never cross.
struct BoxClassifier;

impl SplitClassifier for BoxClassifier {
    fn split(&self, _mesh: &mut OperandMesh, _other: &OperandMesh) -> Result<()> {
        Ok(())
    }

    fn classify(&self, mesh: &OperandMesh, other: &OperandMesh) -> Result<Vec<FaceStatus>> {
        let (min, max) = bounds(other)?;
        let mut statuses = Vec::with_capacity(mesh.face_count());
        for face in mesh.faces() {
            let [a, b, c] = mesh.face_vertices(face)?;
            let centroid = Point3::from((a.point.coords + b.point.coords + c.point.coords) / 3.0);
            let normal = (b.point - a.point).cross(&(c.point - a.point));
            statuses.push(classify_point(&centroid, &normal, &min, &max));
        }
        Ok(statuses)
    }
}

fn classify_point(p: &Point3, normal: &Vector3, min: &Point3, max: &Point3) -> FaceStatus {
    let within = (0..3).all(|i| p[i] >= min[i] && p[i] <= max[i]);
    if !within {
        return FaceStatus::Outside;
    }
    for axis in 0..3 {
        for (bound, outward) in [(min[axis], -1.0), (max[axis], 1.0)] {
            if p[axis] == bound {
                return if normal[axis] * outward > 0.0 {
                    FaceStatus::Same
                } else {
                    FaceStatus::Opposite
                };
            }
        }
    }
    FaceStatus::Inside
}

fn bounds(mesh: &OperandMesh) -> Result<(Point3, Point3)> {
    let mut min = Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
    let mut max = Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
    for face in mesh.faces() {
        for v in mesh.face_vertices(face)? {
            min = min.inf(&v.point);
            max = max.sup(&v.point);
        }
    }
    Ok((min, max))
}
