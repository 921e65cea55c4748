//! Scaling
//!
//! Nearest-neighbor scaling by sampling and an aspect-preserving
//! resize-to-fill that scales until the target is covered and then crops
//! the center.

use crate::rotate::copy_slot;
use crate::{TransformError, TransformResult};
use tessera_core::{Bounds, Canvas};

/// Scale to exactly `width` × `height` by nearest-neighbor sampling
///
/// Each output pixel samples the source pixel under its center.
pub fn scale(canvas: &Canvas, width: u32, height: u32) -> TransformResult<Canvas> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidParameters(format!(
            "target size must be non-zero: {}x{}",
            width, height
        )));
    }
    let (sw, sh) = (canvas.width() as u64, canvas.height() as u64);
    let mut out = Canvas::new(width, height)?.into_mut();

    for y in 0..height as u64 {
        let sy = ((2 * y + 1) * sh / (2 * height as u64)) as i32;
        for x in 0..width as u64 {
            let sx = ((2 * x + 1) * sw / (2 * width as u64)) as i32;
            copy_slot(canvas, sx, sy, &mut out, x as i32, y as i32)?;
        }
    }

    Ok(out.into())
}

/// Scale preserving aspect ratio to cover `width` × `height`, then crop the center
pub fn resize_to_fill(canvas: &Canvas, width: u32, height: u32) -> TransformResult<Canvas> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidParameters(format!(
            "target size must be non-zero: {}x{}",
            width, height
        )));
    }
    let (sw, sh) = (canvas.width() as u64, canvas.height() as u64);
    let (tw, th) = (width as u64, height as u64);

    // Pick the axis that needs the larger factor; the other overshoots.
    let (scaled_w, scaled_h) = if tw * sh >= th * sw {
        (tw, (sh * tw).div_ceil(sw).max(th))
    } else {
        ((sw * th).div_ceil(sh).max(tw), th)
    };

    let scaled = scale(canvas, scaled_w as u32, scaled_h as u32)?;
    let x0 = ((scaled_w - tw) / 2) as i32;
    let y0 = ((scaled_h - th) / 2) as i32;
    let crop = Bounds::new(x0, x0 + width as i32 - 1, y0, y0 + height as i32 - 1);
    Ok(scaled.clip(&crop)?)
}
