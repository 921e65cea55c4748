//! Orthogonal rotations and mirrors
//!
//! Rotations by multiples of 90 degrees and left-right / top-bottom
//! mirrors. Empty slots stay empty at their new position.

use crate::TransformResult;
use tessera_core::{Canvas, CanvasMut};

/// Copy one slot, leaving the destination empty if the source is.
#[inline]
pub(crate) fn copy_slot(
    src: &Canvas,
    sx: i32,
    sy: i32,
    dst: &mut CanvasMut,
    dx: i32,
    dy: i32,
) -> TransformResult<()> {
    if src.is_set(sx, sy)? {
        dst.set(dx, dy, src.get(sx, sy)?)?;
    }
    Ok(())
}

/// Rotate by `quads` quarter turns clockwise
///
/// # Arguments
/// * `canvas` - Input canvas
/// * `quads` - Number of 90-degree clockwise rotations (taken modulo 4)
pub fn rotate_orth(canvas: &Canvas, quads: u32) -> TransformResult<Canvas> {
    match quads % 4 {
        0 => Ok(canvas.deep_clone()),
        1 => rotate_90(canvas, true),
        2 => rotate_180(canvas),
        _ => rotate_270(canvas),
    }
}

/// Rotate a canvas 90 degrees
///
/// # Arguments
/// * `canvas` - Input canvas
/// * `clockwise` - If true, rotate clockwise; otherwise counterclockwise
pub fn rotate_90(canvas: &Canvas, clockwise: bool) -> TransformResult<Canvas> {
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);

    // Output dimensions are swapped
    let mut out = Canvas::new(h as u32, w as u32)?.into_mut();

    for y in 0..h {
        for x in 0..w {
            let (nx, ny) = if clockwise {
                (h - 1 - y, x)
            } else {
                (y, w - 1 - x)
            };
            copy_slot(canvas, x, y, &mut out, nx, ny)?;
        }
    }

    Ok(out.into())
}

/// Rotate a canvas 180 degrees
pub fn rotate_180(canvas: &Canvas) -> TransformResult<Canvas> {
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    let mut out = Canvas::new(w as u32, h as u32)?.into_mut();

    for y in 0..h {
        for x in 0..w {
            copy_slot(canvas, x, y, &mut out, w - 1 - x, h - 1 - y)?;
        }
    }

    Ok(out.into())
}

/// Rotate a canvas 270 degrees clockwise (90 counterclockwise)
pub fn rotate_270(canvas: &Canvas) -> TransformResult<Canvas> {
    rotate_90(canvas, false)
}

/// Mirror left-right
pub fn mirror_horizontal(canvas: &Canvas) -> TransformResult<Canvas> {
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    let mut out = Canvas::new(w as u32, h as u32)?.into_mut();

    for y in 0..h {
        for x in 0..w {
            copy_slot(canvas, x, y, &mut out, w - 1 - x, y)?;
        }
    }

    Ok(out.into())
}

/// Mirror top-bottom
pub fn mirror_vertical(canvas: &Canvas) -> TransformResult<Canvas> {
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    let mut out = Canvas::new(w as u32, h as u32)?.into_mut();

    for y in 0..h {
        for x in 0..w {
            copy_slot(canvas, x, y, &mut out, x, h - 1 - y)?;
        }
    }

    Ok(out.into())
}
