use nalgebra::Vector2;
use once_cell::sync::Lazy;

pub static POLYLINES: Lazy<Vec<Vec<Vector2<f64>>>> = Lazy::new(|| {
    vec![
        vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(10.0, 0.0),
            Vector2::new(10.0, 10.0),
            Vector2::new(0.0, 10.0),
        ],
        regular_polygon(16),
        zigzag(256),
    ]
});

fn regular_polygon(n: usize) -> Vec<Vector2<f64>> {
    (0..n)
        .map(|i| {
            let angle = i as f64 / n as f64 * std::f64::consts::TAU;
            Vector2::new(50.0 + 40.0 * angle.cos(), 50.0 + 40.0 * angle.sin())
        })
        .collect()
}

fn zigzag(n: usize) -> Vec<Vector2<f64>> {
    (0..n)
        .map(|i| Vector2::new(i as f64, if i % 2 == 0 { 0.0 } else { 10.0 }))
        .collect()
}
