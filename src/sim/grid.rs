//! Grid construction
//!
//! The grid is rebuilt wholesale at startup and on resize; it is never
//! structurally mutated in between. All per-line randomness (fall speed,
//! scroll phase, dash texture) flows through the injected RNG so a fixed
//! seed reproduces the exact same grid.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

/// A single grid point: fixed origin plus a mutable offset from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Fixed position in container-local pixel space
    pub origin: Vec2,
    /// Current displacement from the origin, clamped to [-100, 100] per axis
    pub disp: Vec2,
    /// Velocity accumulator shared by all forces acting on this point
    pub vel: Vec2,
}

impl Point {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            disp: Vec2::ZERO,
            vel: Vec2::ZERO,
        }
    }
}

/// A vertical column of points sharing one scroll offset and dash texture.
#[derive(Debug, Clone)]
pub struct Line {
    /// Points ordered top to bottom
    pub points: Vec<Point>,
    /// Scroll advance per tick (px)
    pub fall_speed: f32,
    /// Current dash offset; decreases every tick to scroll the texture down
    pub scroll_offset: f32,
    /// Alternating drawn-segment/gap lengths, generated once per rebuild
    pub dash: Vec<f32>,
}

/// Ordered left-to-right sequence of lines.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    pub lines: Vec<Line>,
}

impl Grid {
    /// Build a centered grid covering the container plus its buffers.
    ///
    /// Degenerate dimensions (zero or negative) yield an empty grid.
    pub fn build(width: f32, height: f32, rng: &mut impl Rng) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }

        let o_width = width + X_BUFFER;
        let o_height = height + Y_BUFFER;

        let cols = (o_width / X_GAP).ceil() as u32;
        let rows = (o_height / Y_GAP).ceil() as u32;

        let x_start = (width - X_GAP * cols as f32) / 2.0;
        let y_start = (height - Y_GAP * rows as f32) / 2.0;

        let mut lines = Vec::with_capacity(cols as usize + 1);
        for i in 0..=cols {
            let mut points = Vec::with_capacity(rows as usize + 1);
            for j in 0..=rows {
                points.push(Point::at(
                    x_start + X_GAP * i as f32,
                    y_start + Y_GAP * j as f32,
                ));
            }
            lines.push(Line {
                points,
                fall_speed: rng.random_range(FALL_SPEED_MIN..FALL_SPEED_MAX),
                scroll_offset: rng.random_range(0.0..PHASE_MAX),
                dash: dash_texture(o_height, rng),
            });
        }

        Self { lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Generate the randomized segment/gap pattern for one line.
///
/// Pairs accumulate until the total length exceeds `DASH_COVERAGE` times the
/// expanded height, leaving headroom for wave distortion of the stroke.
fn dash_texture(o_height: f32, rng: &mut impl Rng) -> Vec<f32> {
    let target = o_height * DASH_COVERAGE;
    let mut dash = Vec::new();
    let mut total = 0.0;
    while total < target {
        let segment = rng.random_range(DASH_SEGMENT_MIN..DASH_SEGMENT_MAX);
        let gap = rng.random_range(DASH_GAP_MIN..DASH_GAP_MAX);
        dash.push(segment);
        dash.push(gap);
        total += segment + gap;
    }
    dash
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_grid_dimensions_800x600() {
        let mut rng = Pcg32::seed_from_u64(42);
        let grid = Grid::build(800.0, 600.0, &mut rng);

        // ceil(1000 / 10) = 100 columns, inclusive loop gives 101 lines
        assert_eq!(grid.lines.len(), 101);
        // ceil(630 / 32) = 20 rows, inclusive loop gives 21 points
        for line in &grid.lines {
            assert_eq!(line.points.len(), 21);
        }

        // Centered: the grid overshoots the container equally on both sides
        let first_x = grid.lines.first().unwrap().points[0].origin.x;
        let last_x = grid.lines.last().unwrap().points[0].origin.x;
        assert!((first_x - (-100.0)).abs() < 1e-3);
        assert!((last_x - 900.0).abs() < 1e-3);
    }

    #[test]
    fn test_degenerate_bounds_give_empty_grid() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert!(Grid::build(0.0, 600.0, &mut rng).is_empty());
        assert!(Grid::build(800.0, 0.0, &mut rng).is_empty());
        assert!(Grid::build(-50.0, -10.0, &mut rng).is_empty());
    }

    #[test]
    fn test_per_line_randomness_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        let grid = Grid::build(400.0, 300.0, &mut rng);

        for line in &grid.lines {
            assert!(line.fall_speed >= FALL_SPEED_MIN && line.fall_speed < FALL_SPEED_MAX);
            assert!(line.scroll_offset >= 0.0 && line.scroll_offset < PHASE_MAX);
            for pair in line.dash.chunks_exact(2) {
                assert!(pair[0] >= DASH_SEGMENT_MIN && pair[0] < DASH_SEGMENT_MAX);
                assert!(pair[1] >= DASH_GAP_MIN && pair[1] < DASH_GAP_MAX);
            }
        }
    }

    #[test]
    fn test_dash_texture_covers_expanded_height() {
        let mut rng = Pcg32::seed_from_u64(9);
        let grid = Grid::build(400.0, 300.0, &mut rng);

        let target = (300.0 + Y_BUFFER) * DASH_COVERAGE;
        for line in &grid.lines {
            let total: f32 = line.dash.iter().sum();
            assert!(total > target);
            assert_eq!(line.dash.len() % 2, 0);
        }
    }

    #[test]
    fn test_same_seed_same_grid() {
        let mut a = Pcg32::seed_from_u64(1234);
        let mut b = Pcg32::seed_from_u64(1234);
        let ga = Grid::build(640.0, 480.0, &mut a);
        let gb = Grid::build(640.0, 480.0, &mut b);

        assert_eq!(ga.lines.len(), gb.lines.len());
        for (la, lb) in ga.lines.iter().zip(&gb.lines) {
            assert_eq!(la.fall_speed, lb.fall_speed);
            assert_eq!(la.scroll_offset, lb.scroll_offset);
            assert_eq!(la.dash, lb.dash);
        }
    }
}
