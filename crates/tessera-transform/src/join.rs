//! Seam-blended joins
//!
//! Two canvases are placed side by side (or stacked) so that they overlap
//! by `margin` pixels. Inside the overlap the output fades linearly from
//! the first canvas to the second: the `i`-th overlap column (or row) takes
//! weight `(i + 1) / (margin + 1)` from the second canvas.
//!
//! ```text
//!  left:  [ L L L L L ]
//!  right:         [ R R R R ]
//!  out:   [ L L L m m R R ]     margin = 2
//! ```

use crate::{TransformError, TransformResult};
use tessera_core::{Canvas, CanvasMut, Channel, Error, Pixel};

/// Join two canvases left to right
///
/// # Arguments
/// * `left` - Canvas placed on the left
/// * `right` - Canvas placed on the right
/// * `margin` - Overlap width in pixels (0 for a plain concatenation)
///
/// # Errors
///
/// Returns a [`Error::DimensionMismatch`] core error if the heights differ
/// and [`TransformError::InvalidParameters`] if `margin` exceeds either width.
pub fn join_horizontal(left: &Canvas, right: &Canvas, margin: u32) -> TransformResult<Canvas> {
    if left.height() != right.height() {
        return Err(Error::DimensionMismatch {
            expected: (right.width(), left.height()),
            actual: right.dimensions(),
        }
        .into());
    }
    check_margin(margin, left.width(), right.width())?;

    let h = left.height() as i32;
    let lw = left.width() as i32;
    let seam = lw - margin as i32;
    let out_w = (left.width() + right.width() - margin) as i32;
    let mut out = Canvas::new(out_w as u32, h as u32)?.into_mut();

    for y in 0..h {
        for x in 0..out_w {
            let from_left = (x < lw).then_some((x, y));
            let from_right = (x >= seam).then_some((x - seam, y));
            write_joined(&mut out, x, y, left, from_left, right, from_right, x - seam, margin)?;
        }
    }

    Ok(out.into())
}

/// Join two canvases top to bottom
///
/// # Arguments
/// * `top` - Canvas placed on top
/// * `bottom` - Canvas placed below
/// * `margin` - Overlap height in pixels (0 for a plain concatenation)
///
/// # Errors
///
/// Returns a [`Error::DimensionMismatch`] core error if the widths differ
/// and [`TransformError::InvalidParameters`] if `margin` exceeds either height.
pub fn join_vertical(top: &Canvas, bottom: &Canvas, margin: u32) -> TransformResult<Canvas> {
    if top.width() != bottom.width() {
        return Err(Error::DimensionMismatch {
            expected: (top.width(), bottom.height()),
            actual: bottom.dimensions(),
        }
        .into());
    }
    check_margin(margin, top.height(), bottom.height())?;

    let w = top.width() as i32;
    let th = top.height() as i32;
    let seam = th - margin as i32;
    let out_h = (top.height() + bottom.height() - margin) as i32;
    let mut out = Canvas::new(w as u32, out_h as u32)?.into_mut();

    for y in 0..out_h {
        for x in 0..w {
            let from_top = (y < th).then_some((x, y));
            let from_bottom = (y >= seam).then_some((x, y - seam));
            write_joined(&mut out, x, y, top, from_top, bottom, from_bottom, y - seam, margin)?;
        }
    }

    Ok(out.into())
}

fn check_margin(margin: u32, a: u32, b: u32) -> TransformResult<()> {
    if margin > a.min(b) {
        return Err(TransformError::InvalidParameters(format!(
            "margin {} exceeds overlapped extent {}",
            margin,
            a.min(b)
        )));
    }
    Ok(())
}

/// Read a slot as `Some(pixel)` only if it holds one.
fn slot(canvas: &Canvas, at: Option<(i32, i32)>) -> TransformResult<Option<Pixel>> {
    match at {
        Some((x, y)) if canvas.is_set(x, y)? => Ok(Some(canvas.get(x, y)?)),
        _ => Ok(None),
    }
}

#[allow(clippy::too_many_arguments)]
fn write_joined(
    out: &mut CanvasMut,
    x: i32,
    y: i32,
    first: &Canvas,
    first_at: Option<(i32, i32)>,
    second: &Canvas,
    second_at: Option<(i32, i32)>,
    overlap_index: i32,
    margin: u32,
) -> TransformResult<()> {
    let a = slot(first, first_at)?;
    let b = slot(second, second_at)?;
    let pixel = match (first_at.is_some(), second_at.is_some()) {
        (true, true) => {
            if a.is_none() && b.is_none() {
                return Ok(());
            }
            let weight = seam_weight(overlap_index as u32, margin);
            blend_across_seam(
                a.unwrap_or(Pixel::TRANSPARENT),
                b.unwrap_or(Pixel::TRANSPARENT),
                weight,
            )
        }
        (true, false) => match a {
            Some(p) => p,
            None => return Ok(()),
        },
        _ => match b {
            Some(p) => p,
            None => return Ok(()),
        },
    };
    out.set(x, y, pixel)?;
    Ok(())
}

/// Weight of the second canvas at overlap position `i`, as a channel.
fn seam_weight(i: u32, margin: u32) -> Channel {
    let d = margin + 1;
    Channel::new((((i + 1) * 255 + d / 2) / d) as i32)
}

/// Linear mix of all four channels.
fn blend_across_seam(a: Pixel, b: Pixel, weight: Channel) -> Pixel {
    let w = weight.value() as u32;
    let opacity =
        (a.opacity.value() as u32 * (255 - w) + b.opacity.value() as u32 * w + 127) / 255;
    a.blended(&b.with_opacity(weight))
        .with_opacity(Channel::new(opacity as i32))
}
