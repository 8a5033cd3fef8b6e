//! Risk normalization and RL quantization (§4.6).

use rz_grid::Grid;

/// Min-max normalize `combined_risk` over the AoI-inside cells into `[0,1]`,
/// then quantize into `1..=M`. `RL = M - min(|trunc(ln(risk))|, M-1)`, and
/// `risk == 0` maps directly to `RL = 1` (§9: natural log, not `log10`,
/// matching the reference implementation's actual arithmetic — and
/// truncation toward zero, matching Python's `int(...)`, not floor toward
/// negative infinity; for `risk` in `(e⁻¹, 1)` those two rounding modes
/// disagree, e.g. `risk = 0.5` truncates to `RL = M` but would floor to
/// `RL = M-1`).
pub fn normalize_and_quantize(grid: &mut Grid) {
    if grid.zones_inside.is_empty() {
        log::warn!("no AoI-inside cells to normalize; RL left at grid default");
        return;
    }

    let raw: Vec<f64> = grid.zones_inside.iter().map(|&id| grid.combined_risk(id)).collect();
    let min = raw.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = raw.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let amplitude = if (max - min).abs() > f64::EPSILON { max - min } else { 1.0 };

    let m = grid.m;

    for (&id, &r) in grid.zones_inside.iter().zip(raw.iter()) {
        let normalized = (r - min) / amplitude;
        let rl = quantize_rl(normalized, m);
        grid.rl[id.index()] = rl;
    }

    log::info!("normalized and quantized RL for {} inside cells (min={min:.6}, max={max:.6})", grid.zones_inside.len());
}

fn quantize_rl(risk: f64, m: u32) -> u32 {
    if risk == 0.0 {
        return 1;
    }
    let truncated = risk.ln().trunc().abs();
    let capped = truncated.min((m - 1) as f64);
    m - capped as u32
}
