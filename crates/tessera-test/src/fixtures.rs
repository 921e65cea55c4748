//! Synthetic test canvases

use crate::error::{TestError, TestResult};
use tessera_core::{Canvas, Pixel};

fn build(name: &'static str, width: u32, height: u32, pixels: Vec<Pixel>) -> TestResult<Canvas> {
    Canvas::from_pixels(width, height, pixels).map_err(|source| TestError::Fixture { name, source })
}

/// A canvas with every pixel set to `pixel`.
pub fn solid_canvas(
    name: &'static str,
    width: u32,
    height: u32,
    pixel: Pixel,
) -> TestResult<Canvas> {
    Canvas::filled(width, height, pixel).map_err(|source| TestError::Fixture { name, source })
}

/// Vertical stripes `stripe` pixels wide alternating between `a` and `b`.
pub fn stripe_canvas(
    width: u32,
    height: u32,
    stripe: u32,
    a: Pixel,
    b: Pixel,
) -> TestResult<Canvas> {
    let stripe = stripe.max(1);
    let pixels = (0..height)
        .flat_map(|_| (0..width).map(move |x| if (x / stripe) % 2 == 0 { a } else { b }))
        .collect();
    build("stripes", width, height, pixels)
}

/// Checkerboard of `cell`-sized squares, black and white.
pub fn checkerboard_canvas(width: u32, height: u32, cell: u32) -> TestResult<Canvas> {
    let cell = cell.max(1);
    let pixels = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| {
                if ((x / cell) + (y / cell)) % 2 == 0 {
                    Pixel::gray(0)
                } else {
                    Pixel::gray(255)
                }
            })
        })
        .collect();
    build("checkerboard", width, height, pixels)
}

/// Gray ramp from black on the left to white on the right.
pub fn horizontal_gradient(width: u32, height: u32) -> TestResult<Canvas> {
    let span = (width.max(2) - 1) as u64;
    let pixels = (0..height)
        .flat_map(|_| (0..width).map(move |x| Pixel::gray((x as u64 * 255 / span) as u8)))
        .collect();
    build("gradient", width, height, pixels)
}

/// Reproducible color noise from a linear congruential generator.
pub fn noise_canvas(width: u32, height: u32, seed: u32) -> TestResult<Canvas> {
    let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
    let mut next = move || {
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        (state >> 16) as u8
    };
    let pixels = (0..width as usize * height as usize)
        .map(|_| {
            let r = next();
            let g = next();
            let b = next();
            Pixel::rgb(r, g, b)
        })
        .collect();
    build("noise", width, height, pixels)
}
