//! GPU tests need an adapter, so they are ignored by default.
//! Run them on a GPU host with `cargo test --test integration_test -- --ignored`.

use langaus_compute::prelude::*;

fn gpu() -> GpuLangaus {
    GpuLangaus::new().expect("GPU not available.")
}

#[test]
#[ignore = "needs a GPU adapter"]
fn gpu_matches_cpu() {
    let gpu = gpu();
    const N: usize = 1000;
    let params = LangausParams::new(1.0, 10.0, 1.0, 1.0);
    let xs: Vec<f64> = (0..N).map(|i| 5.0 + i as f64 * 0.02).collect();
    let xs32: Vec<f32> = xs.iter().map(|&x| x as f32).collect();

    let cpu = Langaus::new().evaluate_many(&xs, &params);
    let outputs = gpu.evaluate(&xs32, &params).unwrap();
    assert_eq!(cpu.len(), outputs.len());
    for (a, b) in outputs.iter().zip(cpu) {
        let a = *a as f64;
        assert!((a - b).abs() <= 1e-3 * b.abs() + 1e-6, "{} != {}", a, b);
    }
}

#[test]
#[ignore = "needs a GPU adapter"]
fn gpu_respects_config() {
    let config = ConvolutionConfig::new(20, 3.0).unwrap();
    let gpu = GpuLangaus::with_config(config).expect("GPU not available.");
    let params = LangausParams::new(2.0, 30.0, 5.0, 1.5);
    let xs = [25.0f32, 28.0, 30.0, 31.5, 40.0, 60.0];
    let outputs = gpu.evaluate(&xs, &params).unwrap();
    let cpu = Langaus::with_config(config);
    for (x, a) in xs.iter().zip(outputs) {
        let b = cpu.evaluate(*x as f64, &params);
        assert!(
            (a as f64 - b).abs() <= 1e-3 * b.abs() + 1e-6,
            "{} != {} at {}",
            a,
            b,
            x
        );
    }
}

#[test]
#[ignore = "needs a GPU adapter"]
fn gpu_empty_and_oversized_input() {
    let gpu = gpu();
    let params = LangausParams::new(1.0, 10.0, 1.0, 1.0);
    assert_eq!(gpu.evaluate(&[], &params), Ok(Vec::new()));

    let max = gpu.max_points();
    let xs = vec![10.0f32; max + 1];
    assert_eq!(
        gpu.evaluate(&xs, &params),
        Err(LangausError::TooManyPoints { got: max + 1, max })
    );
}

#[pollster::test]
#[ignore = "needs a GPU adapter"]
async fn async_gpu_evaluation() {
    let gpu = GpuLangausAsync::new().await.expect("GPU not available.");
    let params = LangausParams::new(1.0, 10.0, 1.0, 1.0);
    let ys = gpu.evaluate(&[10.0, 10.5], &params).await.unwrap();
    let peak = Langaus::new().evaluate(10.5, &params);
    assert!((ys[1] as f64 - peak).abs() < 1e-4);
    assert!(ys[0] < ys[1]);
}
