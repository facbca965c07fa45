//! Lines: maximal fluid runs along one axis between two boundaries.

use super::cut_geometry::MeshObjectInfo;
use crate::types::{slow_fast, IndexExtents, Int3};

/// The object-surface side of a boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectBoundary {
    /// Index of the intersection within R(d); also the column into the
    /// direction's boundary-value array.
    pub object_coordinate: i64,
    pub object_id: i64,
    pub psi: f64,
}

/// One end of a line: a domain face (`object == None`) or an object
/// surface crossing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundary {
    pub mesh_coordinate: Int3,
    pub object: Option<ObjectBoundary>,
}

/// A contiguous run in one direction between two boundaries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    /// Global index stride of one step along the line's direction.
    pub stride: i64,
    pub start: Boundary,
    pub end: Boundary,
}

/// Enumerate the lines of direction `dir`.
///
/// Walks every (slow, fast) pair and splits the 1D slice at the object
/// intersections of `r`, pairing boundaries as (domain|object,
/// object|domain): an entry crossing (`ray_outside == false`) ends the
/// current fluid run, its paired exit starts the next. Lines fully
/// interior to a solid are not specially handled; an entry with no pending
/// start is skipped with a warning.
pub(crate) fn build_lines(dir: usize, extents: IndexExtents, r: &[MeshObjectInfo]) -> Vec<Line> {
    let mut lines = Vec::new();
    if extents.get(dir) == 1 {
        return lines;
    }

    let (s_ax, f_ax) = slow_fast(dir);
    let ns = extents.get(s_ax);
    let nf = extents.get(f_ax);
    let stride = extents.stride(dir);

    lines.reserve((ns * nf) as usize + r.len());
    let mut next = r.iter().enumerate().peekable();

    for s in 0..ns {
        for f in 0..nf {
            let mut left = Int3::default();
            left[s_ax] = s;
            left[f_ax] = f;
            left[dir] = 0;
            let mut right = left;
            right[dir] = extents.get(dir) - 1;

            let mut left_boundary = Some(Boundary {
                mesh_coordinate: left,
                object: None,
            });

            while let Some(&(index, info)) = next.peek() {
                if info.solid_coord[s_ax] != s || info.solid_coord[f_ax] != f {
                    break;
                }
                let object = Boundary {
                    mesh_coordinate: info.solid_coord,
                    object: Some(ObjectBoundary {
                        object_coordinate: index as i64,
                        object_id: info.shape_id,
                        psi: info.psi,
                    }),
                };
                if info.ray_outside {
                    // leaving the solid: the next fluid run starts here
                    left_boundary = Some(object);
                } else {
                    match left_boundary.take() {
                        Some(start) => lines.push(Line {
                            stride,
                            start,
                            end: object,
                        }),
                        None => log::warn!(
                            "skipping solid entry at {:?}: no fluid run precedes it",
                            info.solid_coord
                        ),
                    }
                }
                next.next();
            }

            if let Some(start) = left_boundary {
                lines.push(Line {
                    stride,
                    start,
                    end: Boundary {
                        mesh_coordinate: right,
                        object: None,
                    },
                });
            }
        }
    }

    lines
}
