//! Path serialization
//!
//! One primitive per line, in left-to-right line order. The first and last
//! point of each line are pinned to their origins so strokes stay anchored
//! at the edges no matter how hard the fields push.

use std::fmt::Write;

use glam::Vec2;

use crate::sim::Grid;

/// A drawable polyline: final point positions plus the dash scroll offset.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    pub points: Vec<Vec2>,
    pub dash_offset: f32,
}

/// Serialize every line of the grid into a path primitive.
///
/// Interior points render at `origin + disp`; endpoints are pinned. Density
/// of the point sampling is what produces visual smoothness, so no curve
/// fitting happens here.
pub fn line_paths(grid: &Grid) -> Vec<PathPrimitive> {
    grid.lines
        .iter()
        .map(|line| {
            let last = line.points.len().saturating_sub(1);
            let points = line
                .points
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    if i == 0 || i == last {
                        p.origin
                    } else {
                        p.origin + p.disp
                    }
                })
                .collect();
            PathPrimitive {
                points,
                dash_offset: line.scroll_offset,
            }
        })
        .collect()
}

/// Format a primitive as an SVG path `d` string, one decimal per coordinate.
pub fn path_data(path: &PathPrimitive) -> String {
    let mut d = String::with_capacity(path.points.len() * 14);
    for (i, p) in path.points.iter().enumerate() {
        let cmd = if i == 0 { "M" } else { "L" };
        let _ = write!(d, "{cmd} {:.1} {:.1}", p.x, p.y);
    }
    d
}

/// Format a dash texture as an SVG `stroke-dasharray` value, rounded to
/// whole pixels.
pub fn dash_array(dash: &[f32]) -> String {
    let mut out = String::with_capacity(dash.len() * 4);
    for (i, len) in dash.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{}", len.round() as i64);
    }
    out
}
