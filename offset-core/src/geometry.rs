//! Schematic geometry: two concentric circles and the offset dimension.

use serde::{Deserialize, Serialize};

use crate::constants::{CENTER, MAX_BUSH_R, MIN_BIT_R, MM2PX};
use crate::format::to_fixed;

/// Pixel radii for the bit and bushing circles.
///
/// Both radii shrink by the same ratio when the bushing would overflow the
/// viewport. A nonzero bit never drops below `MIN_BIT_R`, which breaks strict
/// proportionality for tiny bits.
pub fn circle_radii(bit: f64, bush: f64) -> (f64, f64) {
    let mut r_bush = bush / 2.0 * MM2PX;
    let mut r_bit = bit / 2.0 * MM2PX;
    if r_bush > MAX_BUSH_R {
        let ratio = MAX_BUSH_R / r_bush;
        r_bush = MAX_BUSH_R;
        r_bit *= ratio;
    }
    if r_bit < MIN_BIT_R && bit > 0.0 {
        r_bit = MIN_BIT_R;
    }
    (r_bit, r_bush)
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Schematic {
    pub bit_radius: f64,
    pub bush_radius: f64,
    /// Dimension line runs horizontally from the bit edge to the bushing edge.
    pub dim_start_x: f64,
    pub dim_end_x: f64,
    pub dim_mid_x: f64,
    /// Offset to one decimal, empty when there is no offset to show.
    pub dim_label: String,
    pub annotation_visible: bool,
}

impl Schematic {
    /// `offset` is `None` when the configuration was rejected.
    pub fn new(bit: f64, bush: f64, offset: Option<f64>) -> Self {
        let (r_bit, r_bush) = circle_radii(bit, bush);
        let start_x = CENTER.0 + r_bit;
        let end_x = CENTER.0 + r_bush;
        Schematic {
            bit_radius: r_bit,
            bush_radius: r_bush,
            dim_start_x: start_x,
            dim_end_x: end_x,
            dim_mid_x: start_x + (end_x - start_x) / 2.0,
            dim_label: offset.map(|o| to_fixed(o, 1)).unwrap_or_default(),
            annotation_visible: offset.is_some_and(|o| o > 0.0),
        }
    }

    /// Opacity for the dimension group.
    pub fn annotation_opacity(&self) -> &'static str {
        if self.annotation_visible { "1" } else { "0" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radii_follow_scale() {
        assert_eq!(circle_radii(8.0, 16.0), (14.0, 28.0));
    }

    #[test]
    fn large_bushing_is_capped_keeping_ratio() {
        let (r_bit, r_bush) = circle_radii(20.0, 50.0);
        assert_eq!(r_bush, 80.0);
        let expected = 35.0 * (80.0 / 87.5);
        assert!((r_bit - expected).abs() < 1e-9);
        assert!((r_bit / r_bush - 20.0 / 50.0).abs() < 1e-12);
    }

    #[test]
    fn tiny_bit_is_kept_visible() {
        assert_eq!(circle_radii(1.0, 16.0).0, MIN_BIT_R);
        assert_eq!(circle_radii(0.0, 16.0).0, 0.0);
    }

    #[test]
    fn radii_grow_with_diameter() {
        let mut prev = (0.0, 0.0);
        for d in 1..=40 {
            let d = d as f64;
            let (r_bit, r_bush) = circle_radii(d / 2.0, d);
            assert!(r_bit >= prev.0 && r_bush >= prev.1);
            prev = (r_bit, r_bush);
        }
    }

    #[test]
    fn dimension_spans_gap_between_circles() {
        let s = Schematic::new(8.0, 16.0, Some(4.0));
        assert_eq!(s.dim_start_x, 134.0);
        assert_eq!(s.dim_end_x, 148.0);
        assert_eq!(s.dim_mid_x, 141.0);
        assert_eq!(s.dim_label, "4.0");
        assert!(s.annotation_visible);
        assert_eq!(s.annotation_opacity(), "1");
    }

    #[test]
    fn non_positive_offset_hides_annotation() {
        assert!(!Schematic::new(0.0, 0.0, Some(0.0)).annotation_visible);
        assert!(!Schematic::new(8.0, 0.0, Some(-4.0)).annotation_visible);
        let rejected = Schematic::new(10.0, 8.0, None);
        assert!(!rejected.annotation_visible);
        assert_eq!(rejected.dim_label, "");
        assert_eq!(rejected.annotation_opacity(), "0");
    }
}
