use langaus_compute::prelude::*;

fn main() -> Result<(), LangausError> {
    let gpu = GpuLangaus::new()?;
    let params = LangausParams::new(1.0, 10.0, 1.0, 1.0);
    let xs: Vec<f32> = (0..=100).map(|i| 5.0 + i as f32 * 0.1).collect();
    let ys = gpu.evaluate(&xs, &params)?;
    let (x, y) = xs
        .iter()
        .zip(&ys)
        .fold((0.0f32, f32::NEG_INFINITY), |best, (&x, &y)| {
            if y > best.1 {
                (x, y)
            } else {
                best
            }
        });
    println!("{:?}", ys);
    println!("maximum {} at x = {}", y, x);
    Ok(())
}
