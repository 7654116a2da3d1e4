//! Ground grid geometry
//!
//! A square grid of line segments on the XZ plane at y = 0. The two lines
//! through the origin are flagged so they can be drawn in a brighter color.

use crate::Vec3;

/// A single grid line segment
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub start: Vec3,
    pub end: Vec3,
    /// True for the lines passing through the origin
    pub is_center: bool,
}

/// A flat grid on the XZ plane
#[derive(Clone, Debug)]
pub struct GroundGrid {
    size: f32,
    divisions: u32,
    lines: Vec<GridLine>,
}

impl GroundGrid {
    /// Create a grid `size` units across with `divisions` cells per side
    pub fn new(size: f32, divisions: u32) -> Self {
        let divisions = divisions.max(1);
        let half = size * 0.5;
        let step = size / divisions as f32;
        let center = divisions / 2;
        let has_center = divisions % 2 == 0;

        let mut lines = Vec::with_capacity(((divisions + 1) * 2) as usize);
        for i in 0..=divisions {
            let k = -half + i as f32 * step;
            let is_center = has_center && i == center;
            lines.push(GridLine {
                start: Vec3::new(-half, 0.0, k),
                end: Vec3::new(half, 0.0, k),
                is_center,
            });
            lines.push(GridLine {
                start: Vec3::new(k, 0.0, -half),
                end: Vec3::new(k, 0.0, half),
                is_center,
            });
        }

        Self {
            size,
            divisions,
            lines,
        }
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[inline]
    pub fn divisions(&self) -> u32 {
        self.divisions
    }

    pub fn lines(&self) -> &[GridLine] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count() {
        let grid = GroundGrid::new(2000.0, 50);
        assert_eq!(grid.lines().len(), 51 * 2);
    }

    #[test]
    fn test_center_lines_flagged() {
        let grid = GroundGrid::new(100.0, 10);
        let centers: Vec<_> = grid.lines().iter().filter(|l| l.is_center).collect();
        assert_eq!(centers.len(), 2);
        for line in centers {
            // Both center lines pass through the origin
            let mid = (line.start + line.end) * 0.5;
            assert!(mid.length() < 1e-4);
        }
    }

    #[test]
    fn test_lines_lie_on_ground() {
        let grid = GroundGrid::new(10.0, 4);
        for line in grid.lines() {
            assert_eq!(line.start.y, 0.0);
            assert_eq!(line.end.y, 0.0);
            assert!(line.start.x.abs() <= 5.0 && line.end.z.abs() <= 5.0);
        }
    }
}
