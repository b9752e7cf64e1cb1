use std::f64::consts::PI;

pub const BACK_OVERSHOOT: f64 = 1.7;

// `Power1` is quadratic, `Power2` is cubic
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Ease {
    #[default]
    Linear,
    Power1InOut,
    Power2In,
    Power2Out,
    Power2InOut,
    SineInOut,
    BackOut(f64),
}

impl Ease {
    pub fn back_out() -> Self {
        Self::BackOut(BACK_OVERSHOOT)
    }

    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::Power2In => t * t * t,
            Self::Power2Out => 1.0 - (1.0 - t).powi(3),
            Self::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Self::BackOut(overshoot) => {
                let c3 = overshoot + 1.0;
                let t_minus_1 = t - 1.0;
                1.0 + c3 * t_minus_1.powi(3) + overshoot * t_minus_1.powi(2)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 7] = [
        Ease::Linear,
        Ease::Power1InOut,
        Ease::Power2In,
        Ease::Power2Out,
        Ease::Power2InOut,
        Ease::SineInOut,
        Ease::BackOut(BACK_OVERSHOOT),
    ];

    #[test]
    fn every_curve_starts_at_zero_and_ends_at_one() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-9, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{ease:?} at 1");
        }
    }

    #[test]
    fn progress_outside_unit_range_is_clamped() {
        assert_eq!(Ease::Power2Out.apply(-3.0), 0.0);
        assert!((Ease::Power2Out.apply(7.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn back_out_overshoots_before_settling() {
        let peak = (1..100)
            .map(|step| Ease::back_out().apply(f64::from(step) / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn out_curves_lead_and_in_curves_lag_linear() {
        assert!(Ease::Power2Out.apply(0.3) > 0.3);
        assert!(Ease::Power2In.apply(0.3) < 0.3);
        assert!((Ease::SineInOut.apply(0.5) - 0.5).abs() < 1e-9);
    }
}
