//! End-to-end properties of triangulation and Voronoi construction.

use approx::assert_relative_eq;
use voronum::bounds::BoundingBox;
use voronum::tolerance::orientation;
use voronum::triangulation::Mesh;
use voronum::voronoi::{build_voronoi, CellStrategy, VoronoiDiagram};
use voronum::{compute_voronoi, triangulate, Point2, VoronoiConfig, VoronoiError};

const EPS: f64 = 1e-10;

fn generate_random_points(count: usize, seed: u64) -> Vec<Point2<f64>> {
    let mut points = Vec::with_capacity(count);
    let mut state = seed;

    for _ in 0..count {
        // xorshift for deterministic random
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let x = (state as f64 / u64::MAX as f64) * 100.0;

        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let y = (state as f64 / u64::MAX as f64) * 100.0;

        points.push(Point2::new(x, y));
    }

    points
}

fn grid(n: usize) -> Vec<Point2<f64>> {
    let mut points = Vec::new();
    for i in 0..n {
        for j in 0..n {
            points.push(Point2::new(i as f64, j as f64));
        }
    }
    points
}

/// Maps points into a square of side `size` with its lower-left corner at
/// `origin`, assuming they start inside [0, 100].
fn shrunk(points: &[Point2<f64>], origin: (f64, f64), size: f64) -> Vec<Point2<f64>> {
    let k = size / 100.0;
    points
        .iter()
        .map(|p| Point2::new(origin.0 + p.x * k, origin.1 + p.y * k))
        .collect()
}

/// Sites with a supporting line through them: the convex hull, including
/// points in the middle of a hull edge.
fn hull_count(points: &[Point2<f64>]) -> usize {
    let extent = BoundingBox::from_points(points.iter().copied()).unwrap();
    let span = extent.width().max(extent.height());
    let tol = 1e-13 * span * span;
    points
        .iter()
        .enumerate()
        .filter(|&(i, &p)| {
            points.iter().enumerate().any(|(j, &q)| {
                if i == j {
                    return false;
                }
                let sides: Vec<f64> = points.iter().map(|&r| orientation(p, q, r)).collect();
                sides.iter().all(|&s| s >= -tol) || sides.iter().all(|&s| s <= tol)
            })
        })
        .count()
}

fn assert_empty_circumcircles(mesh: &Mesh<f64>) {
    for (t, tri) in mesh.triangles().iter().enumerate() {
        let center = tri.circumcenter();
        let radius = tri.circumradius();
        for (i, &p) in mesh.sites().iter().enumerate() {
            if tri.contains_vertex(i) {
                continue;
            }
            assert!(
                center.distance(p) >= radius * (1.0 - 1e-9),
                "site {} lies inside the circumcircle of triangle {}",
                i,
                t
            );
        }
    }
}

fn assert_cells_valid(diagram: &VoronoiDiagram<f64>) {
    let bbox = diagram.bounding_box();
    for cell in diagram.cells() {
        let polygon = &cell.polygon;
        assert!(polygon.len() >= 3, "cell {} is degenerate", cell.site);
        assert!(polygon.signed_area() > 0.0, "cell {} is not CCW", cell.site);
        assert!(polygon.is_convex(1e-9), "cell {} is not convex", cell.site);
        assert!(polygon.is_simple(1e-12), "cell {} self-intersects", cell.site);
        assert!(!polygon.has_repeated_vertex(EPS));
        for v in &polygon.vertices {
            assert!(bbox.contains_point(*v, 1e-9), "cell {} leaves the box", cell.site);
        }
    }
    assert_relative_eq!(diagram.total_area(), bbox.area(), max_relative = 1e-9);
}

#[test]
fn test_random_empty_circumcircle() {
    for seed in [12345, 67890, 424242] {
        let points = generate_random_points(80, seed);
        let mesh = triangulate(&points, EPS).unwrap();
        assert_empty_circumcircles(&mesh);
    }
}

#[test]
fn test_random_euler_count() {
    for seed in [12345, 67890, 424242] {
        let points = generate_random_points(60, seed);
        let mesh = triangulate(&points, EPS).unwrap();
        let n = mesh.sites().len();
        let h = hull_count(mesh.sites());
        assert_eq!(mesh.triangles().len(), 2 * n - h - 2);
        assert_eq!(mesh.hull_edges().len(), h);
    }
}

#[test]
fn test_grid_euler_count_with_collinear_hull() {
    let points = grid(4);
    let mesh = triangulate(&points, EPS).unwrap();
    // 16 points, 12 on the hull
    assert_eq!(hull_count(&points), 12);
    assert_eq!(mesh.triangles().len(), 2 * 16 - 12 - 2);
    assert_empty_circumcircles(&mesh);
}

#[test]
fn test_properties_hold_for_small_extents() {
    let placements = [((0.0, 0.0), 1e-3), ((45.0, 5.0), 3e-3), ((-7.0, 12.0), 5e-4)];
    for seed in [12345, 67890, 424242] {
        let reference = generate_random_points(20, seed);
        let reference_mesh = triangulate(&reference, EPS).unwrap();
        let mut reference_keys: Vec<[usize; 3]> =
            reference_mesh.triangles().iter().map(|t| t.key()).collect();
        reference_keys.sort_unstable();

        for (origin, size) in placements {
            let points = shrunk(&reference, origin, size);
            let mesh = triangulate(&points, EPS).unwrap();

            let n = mesh.sites().len();
            let h = hull_count(mesh.sites());
            assert_eq!(n, 20);
            assert_eq!(mesh.triangles().len(), 2 * n - h - 2, "size {}", size);
            assert_empty_circumcircles(&mesh);
            assert!(mesh.find_delaunay_violation(EPS).is_none());

            let mut keys: Vec<[usize; 3]> = mesh.triangles().iter().map(|t| t.key()).collect();
            keys.sort_unstable();
            assert_eq!(keys, reference_keys, "size {}", size);

            for strategy in [CellStrategy::HalfPlane, CellStrategy::CircumcenterDual] {
                let config = VoronoiConfig::default().with_strategy(strategy);
                let diagram = compute_voronoi(&points, &config).unwrap();
                assert_eq!(diagram.len(), n);
                assert_cells_valid(&diagram);
            }
        }
    }
}

#[test]
fn test_half_plane_cells_convex_and_in_box() {
    let points = generate_random_points(50, 98765);
    let diagram = compute_voronoi(&points, &VoronoiConfig::default()).unwrap();
    assert_eq!(diagram.strategy(), CellStrategy::HalfPlane);
    assert_cells_valid(&diagram);
}

#[test]
fn test_strategies_agree() {
    let points = generate_random_points(50, 13579);
    let mesh = triangulate(&points, EPS).unwrap();
    let bbox = BoundingBox::from_coords(-10.0, -10.0, 110.0, 110.0);

    let a = build_voronoi(&mesh, bbox, CellStrategy::CircumcenterDual, EPS).unwrap();
    let b = build_voronoi(&mesh, bbox, CellStrategy::HalfPlane, EPS).unwrap();

    assert_cells_valid(&a);
    assert_cells_valid(&b);
    for (ca, cb) in a.cells().iter().zip(b.cells()) {
        assert_eq!(ca.site, cb.site);
        assert_relative_eq!(ca.area(), cb.area(), max_relative = 1e-6);
        let (pa, pb) = (ca.polygon.centroid().unwrap(), cb.polygon.centroid().unwrap());
        assert!(pa.distance(pb) < 1e-6, "cell {} centroids differ", ca.site);
    }
}

#[test]
fn test_reflection_symmetry() {
    let points = generate_random_points(40, 24680);
    let mirrored: Vec<Point2<f64>> = points.iter().map(|p| Point2::new(-p.x, p.y)).collect();

    let config = VoronoiConfig::default();
    let original = compute_voronoi(&points, &config).unwrap();
    let reflected = compute_voronoi(&mirrored, &config).unwrap();

    assert_eq!(original.len(), reflected.len());
    for (co, cr) in original.cells().iter().zip(reflected.cells()) {
        assert_relative_eq!(co.area(), cr.area(), max_relative = 1e-9);
        assert_eq!(co.polygon.len(), cr.polygon.len());
        for v in &co.polygon.vertices {
            let image = Point2::new(-v.x, v.y);
            assert!(
                cr.polygon.vertices.iter().any(|w| w.distance(image) < 1e-7),
                "cell {} vertex ({}, {}) has no mirror image",
                co.site,
                v.x,
                v.y
            );
        }
    }
}

#[test]
fn test_triangulate_idempotent() {
    for points in [generate_random_points(70, 11111), grid(5)] {
        let first = triangulate(&points, EPS).unwrap();
        let second = triangulate(&points, EPS).unwrap();
        assert_eq!(first.triangles(), second.triangles());
        assert_eq!(first, second);
    }
}

#[test]
fn test_scenario_single_triangle() {
    let points = vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(0.0, 1.0),
    ];
    let mesh = triangulate(&points, EPS).unwrap();

    assert_eq!(mesh.triangles().len(), 1);
    let tri = mesh.triangles()[0];
    assert_eq!(tri.key(), [0, 1, 2]);
    for v in tri.vertices() {
        assert_eq!(mesh.sites()[v], points[v]);
    }
    let center = tri.circumcenter();
    assert_relative_eq!(center.x, 0.5, epsilon = 1e-12);
    assert_relative_eq!(center.y, 0.5, epsilon = 1e-12);
}

#[test]
fn test_scenario_grid_center_square() {
    let points = grid(3);
    let diagram = compute_voronoi(&points, &VoronoiConfig::default()).unwrap();

    // All points but the center lie on the hull
    assert_eq!(diagram.triangles().len(), 8);

    let center = diagram.cell(4).unwrap();
    assert_eq!(center.point, Point2::new(1.0, 1.0));
    assert_eq!(center.polygon.len(), 4);
    for corner in [(0.5, 0.5), (1.5, 0.5), (1.5, 1.5), (0.5, 1.5)] {
        let corner = Point2::new(corner.0, corner.1);
        assert!(center.polygon.vertices.iter().any(|v| v.distance(corner) < 1e-9));
    }
    let centroid = center.polygon.centroid().unwrap();
    assert_relative_eq!(centroid.x, 1.0, epsilon = 1e-9);
    assert_relative_eq!(centroid.y, 1.0, epsilon = 1e-9);
    assert_cells_valid(&diagram);
}

#[test]
fn test_scenario_duplicate_collapses() {
    let points = vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(0.0, 1.0),
        Point2::new(1.0 + 1e-12, 1.0),
    ];
    let mesh = triangulate(&points, EPS).unwrap();
    assert_eq!(mesh.sites().len(), 4);
    assert_eq!(mesh.site_of_input(4), Some(2));
    assert_eq!(mesh.triangles().len(), 2);

    let diagram = compute_voronoi(&points, &VoronoiConfig::default()).unwrap();
    assert_eq!(diagram.len(), 4);
    assert_eq!(diagram.cell_of_input(4).unwrap().site, 2);
}

#[test]
fn test_scenario_insufficient_points() {
    let points = vec![
        Point2::new(0.0, 0.0),
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 1.0),
    ];
    assert_eq!(
        triangulate(&points, EPS).unwrap_err(),
        VoronoiError::InsufficientPoints { found: 2 }
    );
    assert_eq!(
        compute_voronoi(&points, &VoronoiConfig::default()).unwrap_err(),
        VoronoiError::InsufficientPoints { found: 2 }
    );
}

#[test]
fn test_collinear_input_is_rejected() {
    let points: Vec<Point2<f64>> = (0..5)
        .map(|i| Point2::new(i as f64, 2.0 * i as f64))
        .collect();
    assert!(matches!(
        compute_voronoi(&points, &VoronoiConfig::default()),
        Err(VoronoiError::DegenerateInput { .. })
    ));
}

#[test]
fn test_explicit_box_not_containing_sites() {
    let points = grid(3);
    let bbox = BoundingBox::from_coords(0.5, 0.5, 5.0, 5.0);
    let config = VoronoiConfig::default().with_bounding_box(bbox);
    assert!(matches!(
        compute_voronoi(&points, &config),
        Err(VoronoiError::InvalidBoundingBox { .. })
    ));
}

#[test]
fn test_cocircular_input_still_tiles_box() {
    // Regular octagon plus its center: every triangle is cocircular with others
    let mut points: Vec<Point2<f64>> = (0..8)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::TAU / 8.0;
            Point2::new(10.0 * angle.cos(), 10.0 * angle.sin())
        })
        .collect();
    points.push(Point2::new(0.0, 0.0));

    for strategy in [CellStrategy::HalfPlane, CellStrategy::CircumcenterDual] {
        let config = VoronoiConfig::default().with_strategy(strategy);
        let diagram = compute_voronoi(&points, &config).unwrap();
        assert_cells_valid(&diagram);
        assert_eq!(diagram.cell(8).unwrap().polygon.len(), 8);
    }
}
