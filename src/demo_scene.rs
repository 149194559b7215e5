// src/demo_scene.rs

use rand::Rng;

use crate::strobe_lib::geometry::Point;
use crate::strobe_lib::segment::Segment;

const BOX_STEP: f32 = 20.0;
const BOX_OFFSET: f32 = 100.0;
const SEGMENTS_PER_SIDE: usize = 4;

/// A 4x4-step box drawn right of the centre, as 16 short segments.
/// Coordinates are offsets from `center`; the box is unrotated.
pub fn box_segments(center: Point) -> Vec<Segment> {
    let side = SEGMENTS_PER_SIDE as f32 * BOX_STEP;
    let mut segments = Vec::with_capacity(SEGMENTS_PER_SIDE * 4);
    let mut push = |x1: f32, y1: f32, x2: f32, y2: f32| {
        segments.push(Segment::new(
            Point::new(x1, y1).to_polar(center),
            Point::new(x2, y2).to_polar(center),
        ));
    };

    for i in 0..SEGMENTS_PER_SIDE {
        let i = i as f32;
        // bottom
        push(BOX_OFFSET + BOX_STEP * i, 0.0, BOX_OFFSET + BOX_STEP * (i + 1.0), 0.0);
        // top
        push(BOX_OFFSET + BOX_STEP * i, -side, BOX_OFFSET + BOX_STEP * (i + 1.0), -side);
        // left
        push(BOX_OFFSET, -BOX_STEP * i, BOX_OFFSET, -BOX_STEP * (i + 1.0));
        // right
        push(BOX_OFFSET + side, -BOX_STEP * i, BOX_OFFSET + side, -BOX_STEP * (i + 1.0));
    }
    segments
}

/// The box fixture with every segment turned by a random whole multiple of
/// `theta`, so pieces land all around the rotation.
pub fn generate_box_shape<R: Rng + ?Sized>(rng: &mut R, center: Point, theta: f32) -> Vec<Segment> {
    let slots = ((360.0 / theta) as u32).max(1);
    let mut segments = box_segments(center);
    for seg in segments.iter_mut() {
        let n = rng.gen_range(0..slots);
        seg.rotate(n as f32 * theta);
    }
    log::debug!("Generated {} segments over {} rotation slots", segments.len(), slots);
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    const CENTER: Point = Point { x: 300.0, y: 300.0 };

    #[test]
    fn box_has_sixteen_unit_segments() {
        let segments = box_segments(CENTER);
        assert_eq!(segments.len(), 16);
        for seg in &segments {
            let (a, b) = seg.endpoints(0.0);
            let len = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
            assert!((len - BOX_STEP).abs() < 1e-2);
        }
    }

    #[test]
    fn randomised_rotation_is_a_multiple_of_theta() {
        let mut rng = SmallRng::seed_from_u64(7);
        let plain = box_segments(CENTER);
        let shuffled = generate_box_shape(&mut rng, CENTER, 60.0);
        for (a, b) in plain.iter().zip(&shuffled) {
            let turn = b.start().theta() - a.start().theta();
            let slot = turn / 60.0;
            assert!((slot - slot.round()).abs() < 1e-4);
            assert!((0.0..6.0).contains(&slot.round()));
            assert_eq!(a.start().radius(), b.start().radius());
        }
    }

    #[test]
    fn same_seed_same_scene() {
        let a = generate_box_shape(&mut SmallRng::seed_from_u64(42), CENTER, 60.0);
        let b = generate_box_shape(&mut SmallRng::seed_from_u64(42), CENTER, 60.0);
        assert_eq!(a, b);
    }
}
