use langaus_compute::prelude::*;

fn main() -> Result<(), LangausError> {
    // Starting values from a cosmic-ray ADC spectrum fit.
    let params = LangausParams::new(100.0, 1000.0, 10.0, 150.0);
    let lg = Langaus::new();
    let shape = lg.shape(&params)?;
    println!(
        "peak at {:.2}, height {:.5e}, FWHM {:.2}",
        shape.position, shape.height, shape.fwhm
    );

    let with_bg = LangausWithBackground::default();
    let full = [100.0, 1000.0, 10.0, 150.0, -3.0, 2.0];
    println!("{:>8} {:>14} {:>14}", "x", "langaus", "+background");
    for i in 0..=20 {
        let x = 500.0 + i as f64 * 100.0;
        println!(
            "{:>8.1} {:>14.6e} {:>14.6e}",
            x,
            lg.try_evaluate(x, &params)?,
            with_bg.eval(x, &full)?
        );
    }
    Ok(())
}
