// Cost-curve chart for a training run.
use std::error::Error;

use plotters::prelude::*;

/// Draws cost against iteration and saves it as a PNG at `path`.
/// input: `(iteration, cost)` samples from training
/// logic: compute axis ranges with padding; set up PNG backend; draw one line through the samples
pub fn plot_cost_curve(history: &[(usize, f64)], path: &str) -> Result<(), Box<dyn Error>> {
    if history.is_empty() {
        return Err("no cost samples to plot".into());
    }
    let points: Vec<(f64, f64)> = history.iter().map(|&(i, c)| (i as f64, c)).collect();

    let max_x = points.last().map(|p| p.0).unwrap_or(0.0).max(1.0);
    let min_y = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let max_y = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
    let pad = ((max_y - min_y) * 0.1).max(1e-6);
    let y_range = (min_y - pad)..(max_y + pad);

    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Training Cost", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(0.0..max_x, y_range)?;

    chart
        .configure_mesh()
        .x_desc("Iteration")
        .y_desc("Cross-entropy")
        .draw()?;

    chart.draw_series(LineSeries::new(points.iter().copied(), &BLUE))?;
    chart.draw_series(points.iter().map(|&p| Circle::new(p, 3, BLUE.filled())))?;

    root.present()?;
    Ok(())
}
