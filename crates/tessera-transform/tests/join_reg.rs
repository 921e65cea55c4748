//! Join, scale and texture regression test
//!
//! Tests:
//!   (1) join_horizontal / join_vertical sizes and seam blending
//!   (2) join with zero margin is a plain concatenation
//!   (3) scale and resize_to_fill output sizes
//!   (4) mottled_texture reproducibility
//!   (5) mottled_texture with blobs far larger than the canvas

use tessera_core::{Canvas, Pixel};
use tessera_test::{RegParams, horizontal_gradient, solid_canvas};
use tessera_transform::{
    TextureOptions, join_horizontal, join_vertical, mottled_texture, resize_to_fill, rotate_90,
    scale,
};

#[test]
fn join_reg_sizes() {
    let mut rp = RegParams::new("join_sizes");

    let a = solid_canvas("a", 10, 6, Pixel::gray(0)).expect("a");
    let b = solid_canvas("b", 7, 6, Pixel::gray(200)).expect("b");

    for margin in [0u32, 1, 4, 7] {
        let j = join_horizontal(&a, &b, margin).expect("join_horizontal");
        rp.compare_values((17 - margin) as f64, j.width() as f64, 0.0);
        rp.compare_values(6.0, j.height() as f64, 0.0);
    }

    // Too large a margin is rejected
    rp.compare_bool(true, join_horizontal(&a, &b, 8).is_err());

    let top = rotate_90(&a, true).expect("rotate a");
    let bottom = rotate_90(&b, true).expect("rotate b");
    let j = join_vertical(&top, &bottom, 2).expect("join_vertical");
    rp.compare_values(6.0, j.width() as f64, 0.0);
    rp.compare_values(15.0, j.height() as f64, 0.0);

    assert!(rp.cleanup(), "join_sizes regression test failed");
}

#[test]
fn join_reg_seam() {
    let mut rp = RegParams::new("join_seam");

    let a = solid_canvas("black", 8, 3, Pixel::gray(0)).expect("black");
    let b = solid_canvas("white", 8, 3, Pixel::gray(255)).expect("white");

    // Zero margin: exact concatenation
    let j = join_horizontal(&a, &b, 0).expect("join 0");
    rp.compare_values(0.0, j.get(7, 1).expect("get").red.value() as f64, 0.0);
    rp.compare_values(255.0, j.get(8, 1).expect("get").red.value() as f64, 0.0);

    // Margin 3: the overlap rises monotonically between the two colors
    let j = join_horizontal(&a, &b, 3).expect("join 3");
    let mut prev = 0u8;
    for x in 4..=8 {
        let v = j.get(x, 2).expect("get").red.value();
        rp.compare_bool(true, v >= prev);
        prev = v;
    }
    rp.compare_values(128.0, j.get(6, 0).expect("get").red.value() as f64, 0.0);

    assert!(rp.cleanup(), "join_seam regression test failed");
}

#[test]
fn join_reg_scale() {
    let mut rp = RegParams::new("join_scale");

    let pixs = horizontal_gradient(40, 20).expect("gradient");

    let half = scale(&pixs, 20, 10).expect("scale");
    rp.compare_values(20.0, half.width() as f64, 0.0);
    rp.compare_values(10.0, half.height() as f64, 0.0);

    let up = scale(&pixs, 40, 20).expect("scale identity");
    rp.compare_canvas(&pixs, &up);

    let fill = resize_to_fill(&pixs, 15, 15).expect("resize_to_fill");
    rp.compare_values(15.0, fill.width() as f64, 0.0);
    rp.compare_values(15.0, fill.height() as f64, 0.0);
    // Center crop keeps the middle of the ramp
    let left = fill.get(0, 7).expect("get").red.value();
    let right = fill.get(14, 7).expect("get").red.value();
    rp.compare_bool(true, left > 0 && right < 255 && left < right);

    assert!(rp.cleanup(), "join_scale regression test failed");
}

#[test]
fn join_reg_texture() {
    let mut rp = RegParams::new("join_texture");

    let opts = TextureOptions::default()
        .with_size(48, 32)
        .with_base(Pixel::rgb(90, 120, 60))
        .with_variance(30)
        .with_blobs(20, 6)
        .with_seed(42);
    let t1 = mottled_texture(&opts).expect("texture");
    let t2 = mottled_texture(&opts).expect("texture");
    rp.compare_canvas(&t1, &t2);

    let t3 = mottled_texture(&opts.clone().with_seed(43)).expect("texture");
    rp.compare_bool(false, t1.equals(&t3));

    let solid = Canvas::filled(48, 32, Pixel::rgb(90, 120, 60)).expect("solid");
    rp.compare_bool(false, t1.equals(&solid));

    // A blob radius far past the canvas shifts every pixel by nearly the
    // full amount, so the result is one flat color
    let wide = TextureOptions::default()
        .with_size(8, 8)
        .with_blobs(1, 50_000)
        .with_seed(5);
    let t4 = mottled_texture(&wide).expect("oversized blob");
    let corner = t4.get(0, 0).expect("corner");
    let flat = Canvas::filled(8, 8, corner).expect("flat");
    rp.compare_canvas(&flat, &t4);

    let widest = TextureOptions::default()
        .with_size(4, 4)
        .with_blobs(2, u32::MAX);
    rp.compare_bool(true, mottled_texture(&widest).is_ok());

    assert!(rp.cleanup(), "join_texture regression test failed");
}
