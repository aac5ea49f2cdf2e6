use chaikin::{BoundingBox, CurveSession};
use nalgebra::Vector2;

mod svg;
use svg::SVG;

fn main() {
    let mut session = CurveSession::new();
    for &(x, y) in &[
        (10.0, 10.0),
        (90.0, 15.0),
        (80.0, 70.0),
        (45.0, 90.0),
        (12.0, 60.0),
    ] {
        session.push(Vector2::new(x, y));
    }
    session.toggle_closed();
    session.set_ratios(0.25, 0.25);

    let seed = session.points().to_vec();
    for _ in 0..4 {
        session.iterate().unwrap();
    }

    let frame = BoundingBox::from_slice(&seed).unwrap().grown(5.0);
    let mut svg = SVG {
        view_box: (
            frame.min[0],
            frame.min[1],
            frame.max[0] - frame.min[0],
            frame.max[1] - frame.min[1],
        ),
        elements: Vec::with_capacity(0),
    };

    svg.faint_polyline(&seed, session.is_closed(), "gray");
    if let Some(previous) = session.previous() {
        svg.faint_polyline(previous, session.is_closed(), "blue");
    }
    svg.debug_polyline(session.points(), session.is_closed(), "blue");

    eprintln!("{}", session.status());
    println!("{}", svg);
}
