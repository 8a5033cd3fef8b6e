//! Square spiral path generation (§4.9, "Spiral path").
//!
//! The sequence of `(dx, dy)` offsets that traces a square spiral outward
//! from a cell. Ring `k` contributes `k` vertical steps (`dy = ±1`) then `k`
//! horizontal steps (`dx = ±1`); the sign flips and `k` grows by one after
//! every ring, until the offset count reaches `(2R+1)² − 1` — every cell in
//! the `R`-radius box around the origin, excluding the origin itself.
//!
//! Offsets are `(dx, dy)` grid-coordinate deltas rather than a flat
//! row-major index delta. The reference implementation walks a flat index
//! (`id ± grid_x`, `id ± 1`), which can step past a row boundary near the
//! grid's left/right edge the same way road rasterization can (§9); adding
//! to `(x, y)` and bounds-checking both axes independently avoids that.
pub fn spiral_offsets(radius: u32) -> Vec<(i64, i64)> {
    let max_steps = ((2 * radius as i64 + 1) * (2 * radius as i64 + 1) - 1).max(0) as usize;
    let mut offsets = Vec::with_capacity(max_steps);

    let mut k: i64 = 1;
    let mut sign: i64 = -1;

    while offsets.len() < max_steps {
        for _ in 0..k {
            if offsets.len() >= max_steps {
                break;
            }
            offsets.push((0, sign));
        }
        for _ in 0..k {
            if offsets.len() >= max_steps {
                break;
            }
            offsets.push((sign, 0));
        }
        sign = -sign;
        k += 1;
    }

    offsets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_count_matches_box_size() {
        let offsets = spiral_offsets(2);
        assert_eq!(offsets.len(), 5 * 5 - 1);
    }

    #[test]
    fn radius_zero_is_empty() {
        assert!(spiral_offsets(0).is_empty());
    }

    #[test]
    fn every_offset_is_axis_aligned_unit_step() {
        for (dx, dy) in spiral_offsets(3) {
            assert!((dx == 0) ^ (dy == 0), "expected exactly one axis to move per step");
            assert!(dx.abs() <= 1 && dy.abs() <= 1);
        }
    }
}
