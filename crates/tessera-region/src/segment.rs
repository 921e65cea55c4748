//! Full-image segmentation
//!
//! Splits every pixel whose opacity reaches a threshold into disjoint
//! 8-connected selections.

use crate::selection::Selection;
use tessera_core::{Canvas, Channel, Coord};

/// Find all 8-connected selections of pixels with opacity `>= threshold`
///
/// The canvas is scanned row-major; each unvisited qualifying pixel seeds a
/// new selection grown with [`Selection::add_all_connected`]. The result
/// covers every qualifying pixel exactly once, ordered by seed position.
pub fn find_all_selections(canvas: &Canvas, threshold: Channel) -> Vec<Selection> {
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    let mut visited = vec![false; canvas.area()];
    let mut selections = Vec::new();

    for y in 0..h {
        for x in 0..w {
            let idx = y as usize * w as usize + x as usize;
            if visited[idx] {
                continue;
            }
            visited[idx] = true;
            let Some(p) = canvas.try_get(x, y) else {
                continue;
            };
            if p.opacity < threshold {
                continue;
            }

            let mut sel = Selection::with_start(Coord::new(x, y));
            sel.add_all_connected(canvas, threshold);
            for c in sel.coords() {
                visited[c.y as usize * w as usize + c.x as usize] = true;
            }
            selections.push(sel);
        }
    }

    log::debug!(
        "find_all_selections: {} selections on {}x{} (threshold {})",
        selections.len(),
        w,
        h,
        threshold
    );
    selections
}
