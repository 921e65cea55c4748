//! Interest-window search regression test
//!
//! Scores synthetic canvases with a known interesting patch and checks the
//! search lands on it, independent of the thread count.

use tessera_core::{Bounds, Canvas, Pixel};
use tessera_filter::TransformStatus;
use tessera_interest::{InterestError, ThumbnailFinder, ThumbnailOptions};
use tessera_test::{RegParams, solid_canvas};

/// Dark 64x64 canvas with a one-pixel checkerboard in the lower-right quarter
fn patched_canvas() -> Canvas {
    let base = solid_canvas("dark", 64, 64, Pixel::gray(20)).expect("dark");
    let mut m = base.into_mut();
    for y in 32..64 {
        for x in 32..64 {
            let p = if (x + y) % 2 == 0 {
                Pixel::gray(0)
            } else {
                Pixel::gray(255)
            };
            m.set(x, y, p).expect("set");
        }
    }
    m.into()
}

fn quarter_options() -> ThumbnailOptions {
    ThumbnailOptions::default()
        .with_sections(4, 4)
        .with_min_cells(2, 2)
        .with_max_cells(2, 2)
        .with_seed(7)
}

#[test]
fn thumbnail_reg() {
    let mut rp = RegParams::new("thumbnail");
    let canvas = patched_canvas();

    // --- Test 1: the patch wins ---
    // Cells 2..=3 in both directions lie inside the checkerboard; their
    // corner areas span 32..=48 and 48..=63.
    let finder = ThumbnailFinder::new(quarter_options());
    let window = finder.find(&canvas).expect("find");
    rp.compare_bool(true, window == Bounds::new(32, 63, 32, 63));

    // --- Test 2: repeated searches agree ---
    let again = finder.find(&canvas).expect("find again");
    rp.compare_bool(true, window == again);

    // --- Test 3: scores inside the patch dominate ---
    let job = finder.score(&canvas).expect("score");
    job.wait_until_finished(None).expect("wait");
    rp.compare_bool(true, job.status() == TransformStatus::Success);
    let grid = job.grid().expect("grid");
    rp.compare_values(4.0, grid.dimensions().0 as f64, 0.0);
    let inside = grid.area(2, 2).expect("area (2, 2)");
    let outside = grid.area(0, 0).expect("area (0, 0)");
    rp.compare_values(255.0, inside.contrast as f64, 0.0);
    rp.compare_values(0.0, outside.contrast as f64, 0.0);
    rp.compare_values(20.0, outside.midtone as f64, 0.0);
    rp.compare_bool(true, inside.sharpness > 0);
    rp.compare_values(0.0, outside.sharpness as f64, 0.0);
    // sampled sharpness varies a little between patch areas
    rp.compare_bool(true, grid.normalized(2, 2).expect("score (2, 2)") >= 75);
    let corner = grid.normalized(0, 0).expect("score (0, 0)");
    rp.compare_values(0.0, corner as f64, 0.0);

    // --- Test 4: cached grid is stable ---
    let grid2 = job.grid().expect("cached grid");
    rp.compare_bool(true, grid.areas() == grid2.areas());

    assert!(rp.cleanup(), "thumbnail regression test failed");
}

#[test]
fn thumbnail_threads_reg() {
    let mut rp = RegParams::new("thumbnail_threads");
    let canvas = tessera_test::noise_canvas(48, 40, 11).expect("noise");
    let base = ThumbnailOptions::default()
        .with_sections(6, 5)
        .with_min_cells(1, 1)
        .with_max_cells(3, 3)
        .with_seed(99);

    let grid_for = |threads: usize| {
        let finder = ThumbnailFinder::new(base.clone().with_threads(threads));
        let job = finder.score(&canvas).expect("score");
        job.wait_until_finished(None).expect("wait");
        job.grid().expect("grid")
    };

    // Each area seeds its own generator, so partitioning never changes a score
    let one = grid_for(1);
    for threads in [2, 4, 6] {
        let many = grid_for(threads);
        rp.compare_bool(true, one.areas() == many.areas());
    }

    let single = ThumbnailFinder::new(base.clone().with_threads(1))
        .find(&canvas)
        .expect("single-threaded find");
    let multi = ThumbnailFinder::new(base.clone().with_threads(4))
        .find(&canvas)
        .expect("four-threaded find");
    rp.compare_bool(true, single == multi);

    assert!(rp.cleanup(), "thumbnail_threads regression test failed");
}

#[test]
fn thumbnail_params_reg() {
    let mut rp = RegParams::new("thumbnail_params");
    let canvas = solid_canvas("flat", 10, 10, Pixel::gray(127)).expect("flat");

    // More sections than pixels
    let finder = ThumbnailFinder::new(ThumbnailOptions::default().with_sections(11, 2));
    rp.compare_bool(
        true,
        matches!(finder.score(&canvas), Err(InterestError::InvalidParameters(_))),
    );

    // Zero partitions
    let finder = ThumbnailFinder::new(
        ThumbnailOptions::default()
            .with_sections(2, 2)
            .with_threads(0),
    );
    rp.compare_bool(
        true,
        matches!(finder.score(&canvas), Err(InterestError::Filter(_))),
    );

    // Smallest window larger than the grid
    let finder = ThumbnailFinder::new(
        ThumbnailOptions::default()
            .with_sections(2, 2)
            .with_min_cells(3, 1),
    );
    rp.compare_bool(
        true,
        matches!(finder.find(&canvas), Err(InterestError::InvalidParameters(_))),
    );

    // A flat canvas normalizes every area to 100; the first window examined wins
    let finder = ThumbnailFinder::new(
        ThumbnailOptions::default()
            .with_sections(2, 2)
            .with_min_cells(1, 1)
            .with_max_cells(2, 2),
    );
    let window = finder.find(&canvas).expect("flat find");
    // cell (0, 0): center (2, 2), radius 2
    rp.compare_bool(true, window == Bounds::new(0, 4, 0, 4));

    assert!(rp.cleanup(), "thumbnail_params regression test failed");
}
