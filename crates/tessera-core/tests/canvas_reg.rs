//! Canvas regression test
//!
//! Tests the canvas contract:
//!   (1) out-of-range access raises OutOfRange; fresh slots are transparent
//!   (2) blend weights by the other pixel's opacity
//!   (3) blend between canvases of different size raises DimensionMismatch
//!   (4) ARGB buffer round trip
//!   (5) coordinate-set statistics and Monte Carlo delta
//!   (6) exact equality versus luminance equality

use rand::SeedableRng;
use rand::rngs::StdRng;
use tessera_core::{ByLuminance, Canvas, Coord, Error, NeighborOffset, Pixel};
use tessera_test::{RegParams, checkerboard_canvas, noise_canvas, solid_canvas};

#[test]
fn canvas_reg_bounds() {
    let mut rp = RegParams::new("canvas_bounds");

    let pixs = Canvas::new(7, 5).expect("new");
    let mut out_of_range = 0;
    let mut checked = 0;
    for y in -2..7 {
        for x in -2..9 {
            let inside = (0..7).contains(&x) && (0..5).contains(&y);
            match pixs.get(x, y) {
                Ok(p) if inside => {
                    rp.compare_bool(true, p == Pixel::TRANSPARENT);
                }
                Err(Error::OutOfRange { .. }) if !inside => out_of_range += 1,
                _ => {
                    rp.compare_bool(true, false);
                }
            }
            checked += 1;
        }
    }
    rp.compare_values(99.0, checked as f64, 0.0);
    rp.compare_values(64.0, out_of_range as f64, 0.0);

    let mut pixm = pixs.to_mut();
    rp.compare_bool(true, pixm.set(7, 0, Pixel::gray(1)).is_err());
    rp.compare_bool(true, pixm.set(6, 4, Pixel::gray(1)).is_ok());

    assert!(rp.cleanup(), "canvas_bounds regression test failed");
}

#[test]
fn canvas_reg_blend() {
    let mut rp = RegParams::new("canvas_blend");

    let base = solid_canvas("base", 4, 4, Pixel::rgb(10, 10, 10)).expect("base");
    let half = solid_canvas("half", 4, 4, Pixel::argb(128, 210, 210, 210)).expect("half");
    let clear = solid_canvas("clear", 4, 4, Pixel::argb(0, 210, 210, 210)).expect("clear");

    let out = base.blended(&half).expect("blend half");
    let p = out.get(2, 3).expect("get");
    rp.compare_values(110.0, p.red.value() as f64, 1.0);
    rp.compare_values(110.0, p.green.value() as f64, 1.0);
    rp.compare_values(110.0, p.blue.value() as f64, 1.0);
    rp.compare_values(255.0, p.opacity.value() as f64, 0.0);

    let out = base.blended(&clear).expect("blend clear");
    rp.compare_canvas(&base, &out);

    let big = Canvas::new(5, 5).expect("new");
    rp.compare_bool(
        true,
        matches!(base.blended(&big), Err(Error::DimensionMismatch { .. })),
    );

    assert!(rp.cleanup(), "canvas_blend regression test failed");
}

#[test]
fn canvas_reg_serial() {
    let mut rp = RegParams::new("canvas_serial");

    let pixs = noise_canvas(13, 7, 5).expect("noise");
    let words = pixs.to_argb();
    rp.compare_values(91.0, words.len() as f64, 0.0);
    let back = Canvas::from_argb(13, 7, &words).expect("from_argb");
    rp.compare_canvas(&pixs, &back);

    let bytes = pixs.to_argb_bytes();
    rp.compare_values(364.0, bytes.len() as f64, 0.0);
    let back = Canvas::from_argb_bytes(13, 7, &bytes).expect("from_argb_bytes");
    rp.compare_canvas(&pixs, &back);

    rp.compare_bool(true, Canvas::from_argb_bytes(13, 7, &bytes[1..]).is_err());

    assert!(rp.cleanup(), "canvas_serial regression test failed");
}

#[test]
fn canvas_reg_stats() {
    let mut rp = RegParams::new("canvas_stats");

    let pixs = checkerboard_canvas(8, 8, 1).expect("checkerboard");
    let coords: Vec<Coord> = (0..4).map(|x| Coord::new(x, 0)).collect();
    let avg = pixs.get_average(&coords).expect("average");
    rp.compare_values(127.0, avg.red.value() as f64, 0.0);

    let off: Vec<Coord> = vec![Coord::new(-1, 0), Coord::new(8, 8)];
    rp.compare_bool(
        true,
        matches!(pixs.get_average(&off), Err(Error::EmptyInput(_))),
    );

    // Every adjacent neighbor of a 1-pixel checkerboard differs except diagonals
    let mut rng = StdRng::seed_from_u64(9);
    let delta = pixs.get_average_delta(2000, NeighborOffset::Adjacent, &mut rng);
    rp.compare_values(127.0, delta.red.value() as f64, 30.0);

    // At distance 2 every neighbor has the same color
    let delta = pixs.get_average_delta(2000, NeighborOffset::Wide, &mut rng);
    rp.compare_values(0.0, delta.red.value() as f64, 0.0);

    // Four of eight neighbors differ by 255: 1020 / 8
    rp.compare_values(127.0, pixs.local_contrast(3, 3).expect("contrast") as f64, 0.0);

    assert!(rp.cleanup(), "canvas_stats regression test failed");
}

#[test]
fn canvas_reg_luminance_order() {
    let mut rp = RegParams::new("canvas_luminance_order");

    // Both have luminance 2: 299 * 10 / 1000 and 1000 * 2 / 1000
    let red = Pixel::rgb(10, 0, 0);
    let gray = Pixel::gray(2);
    rp.compare_bool(false, red == gray);
    rp.compare_bool(true, ByLuminance(red) == ByLuminance(gray));

    let mut sorted = vec![
        ByLuminance(Pixel::gray(200)),
        ByLuminance(red),
        ByLuminance(Pixel::rgb(0, 0, 255)),
    ];
    sorted.sort();
    let lums: Vec<u8> = sorted.iter().map(|p| p.0.luminance()).collect();
    rp.compare_bool(true, lums == vec![2, 29, 200]);

    assert!(rp.cleanup(), "canvas_luminance_order regression test failed");
}
