use serde::{Deserialize, Serialize};

use crate::measurement::parse_measurement;

/// Diameters and target size in millimeters, as read from the fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    pub bit: f64,
    pub bush: f64,
    pub target: f64,
}

impl Inputs {
    pub fn new(bit: f64, bush: f64, target: f64) -> Self {
        Inputs { bit, bush, target }
    }

    /// Read the raw field texts. Never fails; bad fields count as zero.
    pub fn parse(bit: &str, bush: &str, target: &str) -> Self {
        Inputs {
            bit: parse_measurement(bit),
            bush: parse_measurement(bush),
            target: parse_measurement(target),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Radial standoff between bit edge and bushing edge (mm).
    pub offset: f64,
    /// Template hole diameter giving the target cut (mm).
    pub template_size: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    Valid(CalculationResult),
    /// The bit does not fit inside the bushing.
    BitTooLarge,
}

/// A bit at least as wide as a real (nonzero) bushing cannot sit inside it.
pub fn bit_fits(inputs: &Inputs) -> bool {
    !(inputs.bit >= inputs.bush && inputs.bush > 0.0)
}

pub fn calculate(inputs: &Inputs) -> Outcome {
    if !bit_fits(inputs) {
        return Outcome::BitTooLarge;
    }
    let gap = inputs.bush - inputs.bit;
    Outcome::Valid(CalculationResult {
        offset: gap / 2.0,
        template_size: inputs.target + gap,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid(bit: f64, bush: f64, target: f64) -> CalculationResult {
        match calculate(&Inputs::new(bit, bush, target)) {
            Outcome::Valid(r) => r,
            Outcome::BitTooLarge => panic!("expected valid result for {bit}/{bush}"),
        }
    }

    #[test]
    fn offset_is_half_the_gap() {
        assert_eq!(valid(8.0, 16.0, 0.0).offset, 4.0);
        assert_eq!(valid(6.35, 17.0, 0.0).offset, (17.0 - 6.35) / 2.0);
        for (bit, bush) in [(1.0, 2.0), (3.0, 30.0), (12.7, 12.8), (0.5, 40.0)] {
            assert_eq!(valid(bit, bush, 0.0).offset, (bush - bit) / 2.0);
        }
    }

    #[test]
    fn template_adds_full_gap_to_target() {
        let r = valid(8.0, 16.0, 20.0);
        assert_eq!(r.template_size, 28.0);
        for (bit, bush, target) in [(6.0, 10.0, 35.0), (12.0, 30.0, 0.0), (8.0, 17.0, 52.5)] {
            assert_eq!(valid(bit, bush, target).template_size, target + (bush - bit));
        }
    }

    #[test]
    fn bit_not_smaller_than_bushing_is_rejected() {
        assert_eq!(calculate(&Inputs::new(10.0, 8.0, 20.0)), Outcome::BitTooLarge);
        assert_eq!(calculate(&Inputs::new(8.0, 8.0, 20.0)), Outcome::BitTooLarge);
    }

    #[test]
    fn zero_bushing_is_not_an_error() {
        // Empty bushing field: computation proceeds with a negative offset.
        let r = valid(8.0, 0.0, 0.0);
        assert_eq!(r.offset, -4.0);
        assert_eq!(r.template_size, -8.0);
        assert_eq!(valid(0.0, 0.0, 0.0).offset, 0.0);
    }

    #[test]
    fn parses_raw_fields() {
        let i = Inputs::parse("6,35", "", "x");
        assert_eq!(i, Inputs::new(6.35, 0.0, 0.0));
    }
}
