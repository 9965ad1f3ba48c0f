//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual checks of a price window in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! The price path is drawn as a `*` line, oldest price on the left.

/// Render a share-price window as a fixed-size line chart.
pub fn render_price_plot(prices: &[f64], width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (p_min, p_max) = price_range(prices).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(p_min, p_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];
    draw_path(&mut grid, &downsample(prices, width), y_min, y_max);

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: days={} | price=[{p_min:.2}, {p_max:.2}]\n",
        prices.len()
    ));
    for row in grid {
        out.push_str(row.into_iter().collect::<String>().trim_end());
        out.push('\n');
    }
    out
}

/// Pick at most `n` evenly spaced prices, always keeping the first and last.
fn downsample(prices: &[f64], n: usize) -> Vec<f64> {
    if prices.len() <= n {
        return prices.to_vec();
    }
    let last = prices.len() - 1;
    (0..n)
        .map(|i| {
            let idx = (i as f64 * last as f64 / (n as f64 - 1.0)).round() as usize;
            prices[idx.min(last)]
        })
        .collect()
}

fn price_range(prices: &[f64]) -> Option<(f64, f64)> {
    let mut min_p = f64::INFINITY;
    let mut max_p = f64::NEG_INFINITY;
    for &p in prices {
        min_p = min_p.min(p);
        max_p = max_p.max(p);
    }
    if min_p.is_finite() && max_p.is_finite() {
        Some((min_p, max_p))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(i: usize, n: usize, width: usize) -> usize {
    if n < 2 {
        return 0;
    }
    let u = i as f64 / (n as f64 - 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_path(grid: &mut [Vec<char>], points: &[f64], y_min: f64, y_max: f64) {
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for (i, &p) in points.iter().enumerate() {
        let x = map_x(i, points.len(), width);
        let y = map_y(p, y_min, y_max, height);
        match prev {
            Some((x0, y0)) => draw_line(grid, x0, y0, x, y, '*'),
            None => grid[y][x] = '*',
        }
        prev = Some((x, y));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0 && (y0 as usize) < grid.len() && x0 >= 0 && (x0 as usize) < grid[0].len() {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_golden_snapshot_small() {
        let txt = render_price_plot(&[100.0, 110.0], 10, 5);
        let expected = concat!(
            "Plot: days=2 | price=[100.00, 110.00]\n",
            "        **\n",
            "      **\n",
            "    **\n",
            "  **\n",
            "**\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn flat_and_empty_series_still_render() {
        let flat = render_price_plot(&[5.0, 5.0, 5.0], 10, 5);
        assert_eq!(flat.lines().count(), 6);
        assert!(flat.contains("**********"));

        let empty = render_price_plot(&[], 10, 5);
        assert_eq!(empty.lines().next(), Some("Plot: days=0 | price=[0.00, 1.00]"));
    }

    #[test]
    fn downsample_keeps_endpoints() {
        let prices: Vec<f64> = (0..100).map(f64::from).collect();
        let picked = downsample(&prices, 10);
        assert_eq!(picked.len(), 10);
        assert_eq!(picked[0], 0.0);
        assert_eq!(picked[9], 99.0);
    }
}
