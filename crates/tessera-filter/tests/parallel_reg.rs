//! Parallel transform regression test
//!
//! Tests the partition framework:
//!   (1) median filter output is identical for 1 and 4 threads
//!   (2) status machine: start twice, wait before start, output before success
//!   (3) failing partitions are aggregated without aborting siblings
//!   (4) timeouts leave the partitions running

use std::time::Duration;
use tessera_core::{Canvas, Pixel};
use tessera_filter::{
    Band, FilterError, FilterResult, MedianFilter, MedianFilterOptions, ParallelTransform,
    PixelVisitor, TransformStatus, median_filter,
};
use tessera_test::{RegParams, noise_canvas};

/// Fails on every pixel of the listed columns.
struct FailColumns(Vec<i32>);

impl PixelVisitor for FailColumns {
    type Scratch = ();

    fn visit(
        &self,
        source: &Canvas,
        x: i32,
        y: i32,
        band: &mut Band,
        _: &mut (),
    ) -> FilterResult<()> {
        if self.0.contains(&x) {
            return Err(FilterError::Partition(format!("column {} rejected", x)));
        }
        band.set(x, y, source.get(x, y)?)
    }
}

/// Copies the source, sleeping on every pixel.
struct Slow(Duration);

impl PixelVisitor for Slow {
    type Scratch = ();

    fn visit(
        &self,
        source: &Canvas,
        x: i32,
        y: i32,
        band: &mut Band,
        _: &mut (),
    ) -> FilterResult<()> {
        std::thread::sleep(self.0);
        band.set(x, y, source.get(x, y)?)
    }
}

#[test]
fn parallel_reg_thread_equivalence() {
    let mut rp = RegParams::new("parallel_equivalence");

    let pixs = noise_canvas(53, 29, 17).expect("noise");
    for radius in [1u32, 2] {
        let opts = MedianFilterOptions::default().with_radius(radius);
        let one = median_filter(&pixs, &opts.clone().with_threads(1)).expect("1 thread");
        let four = median_filter(&pixs, &opts.clone().with_threads(4)).expect("4 threads");
        let seven = median_filter(&pixs, &opts.with_threads(7)).expect("7 threads");
        rp.compare_canvas(&one, &four);
        rp.compare_canvas(&one, &seven);
    }

    assert!(rp.cleanup(), "parallel_equivalence regression test failed");
}

#[test]
fn parallel_reg_status_machine() {
    let mut rp = RegParams::new("parallel_status");

    let pixs = noise_canvas(12, 8, 1).expect("noise");
    let mut t = MedianFilter::transform(&pixs, &MedianFilterOptions::default()).expect("transform");
    rp.compare_bool(true, t.status() == TransformStatus::Ready);

    // Waiting before start is an error, not a hang
    let early = t.wait_until_finished(Some(Duration::from_secs(1)));
    rp.compare_bool(true, matches!(early, Err(FilterError::InvalidState(_))));
    rp.compare_bool(true, matches!(t.output(), Err(FilterError::InvalidState(_))));

    t.start().expect("start");
    rp.compare_bool(true, matches!(t.start(), Err(FilterError::InvalidState(_))));

    t.wait_until_finished(None).expect("wait");
    rp.compare_bool(true, t.status() == TransformStatus::Success);
    rp.compare_bool(true, matches!(t.start(), Err(FilterError::InvalidState(_))));

    let a = t.output().expect("output");
    let b = t.output().expect("output again");
    rp.compare_canvas(&a, &b);
    rp.compare_values(0.0, t.messages().len() as f64, 0.0);

    assert!(rp.cleanup(), "parallel_status regression test failed");
}

#[test]
fn parallel_reg_failure_aggregation() {
    let mut rp = RegParams::new("parallel_failure");

    let pixs = noise_canvas(4, 6, 2).expect("noise");
    let mut t = ParallelTransform::with_threads(&pixs, FailColumns(vec![1, 3]), 4)
        .expect("transform");
    t.start().expect("start");

    match t.wait_until_finished(None) {
        Err(FilterError::AggregateFailure { messages }) => {
            rp.compare_values(2.0, messages.len() as f64, 0.0);
            rp.compare_bool(true, messages.iter().all(|m| m.contains("rejected")));
        }
        other => {
            eprintln!("  unexpected result: {:?}", other);
            rp.compare_bool(true, false);
        }
    }
    rp.compare_bool(true, t.status() == TransformStatus::Failure);
    rp.compare_values(2.0, t.messages().len() as f64, 0.0);
    rp.compare_bool(true, matches!(t.output(), Err(FilterError::InvalidState(_))));

    // A visitor writing outside its band fails that partition only
    struct OutsideBand;
    impl PixelVisitor for OutsideBand {
        type Scratch = ();
        fn visit(
            &self,
            _: &Canvas,
            x: i32,
            y: i32,
            band: &mut Band,
            _: &mut (),
        ) -> FilterResult<()> {
            // column 0 writes into column 2, which belongs to the next band
            band.set(if x == 0 { 2 } else { x }, y, Pixel::gray(0))
        }
    }
    let mut t = ParallelTransform::with_threads(&pixs, OutsideBand, 2).expect("transform");
    t.start().expect("start");
    let res = t.wait_until_finished(None);
    let failed = matches!(
        res,
        Err(FilterError::AggregateFailure { ref messages }) if messages.len() == 1
    );
    rp.compare_bool(true, failed);
    rp.compare_bool(true, matches!(
        ParallelTransform::with_threads(&pixs, OutsideBand, 0),
        Err(FilterError::InvalidParameters(_))
    ));

    assert!(rp.cleanup(), "parallel_failure regression test failed");
}

#[test]
fn parallel_reg_timeout() {
    let mut rp = RegParams::new("parallel_timeout");

    let pixs = noise_canvas(4, 5, 3).expect("noise");
    let mut t = ParallelTransform::with_threads(&pixs, Slow(Duration::from_millis(10)), 4)
        .expect("transform");
    t.start().expect("start");

    let res = t.wait_until_finished(Some(Duration::from_millis(1)));
    rp.compare_bool(true, matches!(res, Err(FilterError::Timeout(_))));

    // The partitions kept running; an unbounded wait completes
    t.wait_until_finished(None).expect("wait");
    rp.compare_bool(true, t.status() == TransformStatus::Success);
    let out = t.output().expect("output");
    rp.compare_canvas(&pixs, &out);

    assert!(rp.cleanup(), "parallel_timeout regression test failed");
}
