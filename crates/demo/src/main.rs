// File: crates/demo/src/main.rs
// Summary: Demo replays a drag of one curve point (built-in sample or CSV input) through the
// limit checker and writes the per-iteration correction trace as CSV.

use anyhow::{Context, Result};
use chart_constraint::types::{HEIGHT, WIDTH};
use chart_constraint::{
    Axis, Chart, CoordinateMapper, CorrectionOptions, CorrectionStep, Insets, LimitChecker, PlotScales, Point, Series,
};
use std::path::{Path, PathBuf};

const CURVE: &str = "curve";
const LOWER: &str = "lower";
const UPPER: &str = "upper";

fn main() -> Result<()> {
    env_logger::init();

    // Usage: constellation-drag [CURVE_CSV|-] [INDEX TARGET_X TARGET_Y]
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (mut chart, source) = match args.first() {
        Some(raw) if raw != "-" => {
            let path = PathBuf::from(raw);
            let chart = load_chart_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            (chart, path.display().to_string())
        }
        _ => (sample_chart(), "built-in sample".to_string()),
    };
    println!("Using input: {source}");

    let (elem_index, target) = parse_drag(&args[args.len().min(1)..])?;
    let curve_index = chart
        .series_by_label(CURVE)
        .map(|(i, _)| i)
        .context("input has no 'curve' series")?;
    let start = chart
        .point(CURVE, elem_index)
        .with_context(|| format!("curve has no point {elem_index}"))?;
    println!("Dragging {CURVE}[{elem_index}] from ({}, {}) to ({}, {})", start.x, start.y, target.x, target.y);

    let scales = PlotScales::from_chart(&chart, WIDTH, HEIGHT, &Insets::default());
    let start_px = scales.to_device(start);
    let end_px = scales.to_device(target);

    let mut steps: Vec<CorrectionStep> = Vec::new();
    let correction = {
        let options = chart.checker_options(curve_index, elem_index)?;
        let mut checker = LimitChecker::new(&chart, options);
        let mut record = |step: &CorrectionStep| -> Result<()> {
            steps.push(*step);
            Ok(())
        };
        checker.correct_drag(start_px, end_px, &scales, &mut record, &CorrectionOptions::default())?
    };

    let out = out_path("drag_trace.csv");
    write_trace(&out, &scales, &steps)?;
    println!("Wrote {} ({} steps)", out.display(), steps.len());

    println!(
        "Result: ({:.6}, {:.6}) after {} iterations, in_limits={}, converged={}",
        correction.position.x, correction.position.y, correction.iterations, correction.in_limits, correction.converged
    );
    if correction.in_limits {
        chart.set_point(curve_index, elem_index, correction.position)?;
        log::info!("committed {CURVE}[{elem_index}] = ({}, {})", correction.position.x, correction.position.y);
    } else {
        println!("No admissible position found; point left unchanged.");
    }
    Ok(())
}

/// Curve with a lower and an upper limit on the default 0..10 x 0..20 axes.
fn sample_chart() -> Chart {
    let mut chart = Chart::new();
    chart.add_series(
        Series::with_data(CURVE, vec![(1.0, 2.0), (3.5, 7.0), (5.0, 7.0), (8.0, 6.0), (10.0, 14.5)])
            .with_limits(Some(UPPER), Some(LOWER)),
    );
    chart.add_series(Series::with_data(LOWER, vec![(1.0, 1.0), (4.0, 6.5), (4.7, 2.0), (10.0, 6.0)]));
    chart.add_series(Series::with_data(UPPER, vec![(1.0, 12.0), (5.0, 14.0), (5.0, 18.0), (10.0, 16.0)]));
    chart
}

/// Drag defaults to the sample's third point pulled down through the lower limit.
fn parse_drag(args: &[String]) -> Result<(usize, Point)> {
    match args {
        [] => Ok((2, Point::new(7.0, 3.0))),
        [i, x, y] => {
            let i = i.parse::<usize>().with_context(|| format!("bad index '{i}'"))?;
            let x = x.parse::<f64>().with_context(|| format!("bad target x '{x}'"))?;
            let y = y.parse::<f64>().with_context(|| format!("bad target y '{y}'"))?;
            Ok((i, Point::new(x, y)))
        }
        _ => anyhow::bail!("expected INDEX TARGET_X TARGET_Y, got {} values", args.len()),
    }
}

/// Load `series,x,y` rows. Axes are fitted to the data with a small margin.
fn load_chart_csv(path: &Path) -> Result<Chart> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let idx = |name: &str| headers.iter().position(|h| h == name);
    let (Some(i_series), Some(i_x), Some(i_y)) = (idx("series"), idx("x"), idx("y")) else {
        anyhow::bail!("expected columns series,x,y; found {:?}", headers);
    };

    let mut curve = Vec::new();
    let mut lower = Vec::new();
    let mut upper = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let field = |i: usize| rec.get(i).unwrap_or("");
        let x = field(i_x).parse::<f64>().with_context(|| format!("row {}: bad x", row + 1))?;
        let y = field(i_y).parse::<f64>().with_context(|| format!("row {}: bad y", row + 1))?;
        if !Point::new(x, y).is_finite() {
            anyhow::bail!("row {}: non-finite coordinate ({x}, {y})", row + 1);
        }
        match field(i_series).to_lowercase().as_str() {
            CURVE => curve.push((x, y)),
            LOWER => lower.push((x, y)),
            UPPER => upper.push((x, y)),
            other => log::warn!("row {}: ignoring unknown series '{other}'", row + 1),
        }
    }
    if curve.is_empty() {
        anyhow::bail!("no '{CURVE}' rows in {}", path.display());
    }

    let all = curve.iter().chain(&lower).chain(&upper).copied().collect::<Vec<_>>();
    let (x_min, x_max) = minmax(all.iter().map(|p| p.0));
    let (y_min, y_max) = minmax(all.iter().map(|p| p.1));
    let pad_y = ((y_max - y_min) * 0.05).max(1.0);

    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", x_min, x_max);
    chart.y_axis = Axis::new("Y", y_min - pad_y, y_max + pad_y);
    let upper_label = (!upper.is_empty()).then_some(UPPER);
    let lower_label = (!lower.is_empty()).then_some(LOWER);
    println!("Loaded {} curve / {} lower / {} upper points", curve.len(), lower.len(), upper.len());
    chart.add_series(Series::with_data(CURVE, curve).with_limits(upper_label, lower_label));
    if !lower.is_empty() {
        chart.add_series(Series::with_data(LOWER, lower));
    }
    if !upper.is_empty() {
        chart.add_series(Series::with_data(UPPER, upper));
    }
    Ok(chart)
}

fn write_trace(path: &Path, scales: &PlotScales, steps: &[CorrectionStep]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    wtr.write_record(["iteration", "device_x", "device_y", "model_x", "model_y", "in_limits"])?;
    for s in steps {
        let end = s.device.b;
        wtr.write_record([
            s.iteration.to_string(),
            format!("{:.3}", end.x),
            format!("{:.3}", end.y),
            format!("{:.6}", s.model.x),
            format!("{:.6}", s.model.y),
            s.in_limits.to_string(),
        ])?;
    }
    wtr.flush()?;
    if let Some(last) = steps.last() {
        let back = scales.to_model(last.device.b);
        log::debug!("last device endpoint maps back to ({:.6}, {:.6})", back.x, back.y);
    }
    Ok(())
}

/// Output file under target/out, created on demand.
fn out_path(name: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(name);
    out
}

fn minmax(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}
