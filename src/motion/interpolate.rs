use super::MotionError;

/// Piecewise-linear map from an input value (usually scroll progress) to an
/// output value. Inputs below the first stop or above the last one are
/// clamped to the boundary outputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolation {
    inputs: Vec<f64>,
    outputs: Vec<f64>,
}

impl Interpolation {
    pub fn new(inputs: &[f64], outputs: &[f64]) -> Result<Self, MotionError> {
        if inputs.len() != outputs.len() {
            return Err(MotionError::MismatchedStops {
                inputs: inputs.len(),
                outputs: outputs.len(),
            });
        }
        if inputs.len() < 2 {
            return Err(MotionError::TooFewStops(inputs.len()));
        }
        if let Some(index) = inputs.windows(2).position(|pair| !(pair[0] <= pair[1])) {
            return Err(MotionError::UnorderedStops { index: index + 1 });
        }
        Ok(Self {
            inputs: inputs.to_vec(),
            outputs: outputs.to_vec(),
        })
    }

    fn constant(value: f64) -> Self {
        Self {
            inputs: vec![0.0, 0.0],
            outputs: vec![value, value],
        }
    }

    /// Evaluates the table at `input`.
    pub fn at(&self, input: f64) -> f64 {
        let last = self.inputs.len() - 1;
        if input.is_nan() || input <= self.inputs[0] {
            return self.outputs[0];
        }
        if input >= self.inputs[last] {
            return self.outputs[last];
        }
        // first stop strictly above the input; exists because of the clamp above
        let upper = self.inputs.partition_point(|stop| *stop <= input);
        let lower = upper - 1;
        lerp(
            (self.inputs[lower], self.inputs[upper]),
            (self.outputs[lower], self.outputs[upper]),
            input,
        )
    }
}

/// Two-stop interpolation: `[a, b] -> [c, d]`, clamped outside `[a, b]`.
///
/// With `a == b` the result steps from `c` to `d` at `a`.
pub fn derive(input: [f64; 2], output: [f64; 2]) -> Interpolation {
    let [a, b] = input;
    let [c, d] = output;
    let (inputs, outputs) = if a <= b { ([a, b], [c, d]) } else { ([b, a], [d, c]) };
    Interpolation::new(&inputs, &outputs).unwrap_or_else(|err| {
        log::warn!("invalid motion range {:?}: {}", input, err);
        Interpolation::constant(c)
    })
}

fn lerp((a, b): (f64, f64), (c, d): (f64, f64), value: f64) -> f64 {
    let t = (value - a) / (b - a);
    if t <= 0.0 {
        c
    } else if t >= 1.0 {
        d
    } else {
        c + (d - c) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn fade_out_is_one_minus_progress() {
        let fade = derive([0.0, 1.0], [1.0, 0.0]);
        for step in 0..=100 {
            let p = step as f64 / 100.0;
            assert_eq!(fade.at(p), 1.0 - p);
        }
        assert_eq!(fade.at(0.0), 1.0);
        assert_eq!(fade.at(1.0), 0.0);
    }

    #[rstest]
    #[case(-0.5, 1.0)]
    #[case(-100.0, 1.0)]
    #[case(1.5, 0.0)]
    #[case(42.0, 0.0)]
    fn out_of_range_clamps_to_boundary(#[case] progress: f64, #[case] expected: f64) {
        let fade = derive([0.0, 1.0], [1.0, 0.0]);
        assert_eq!(fade.at(progress), expected);
    }

    #[test]
    fn hero_opacity_finishes_fading_at_thirty_percent() {
        let opacity = derive([0.0, 0.3], [1.0, 0.0]);
        assert_eq!(opacity.at(0.0), 1.0);
        assert!((opacity.at(0.15) - 0.5).abs() < 1e-12);
        assert_eq!(opacity.at(0.3), 0.0);
        assert_eq!(opacity.at(0.9), 0.0);
    }

    #[test]
    fn degenerate_range_steps() {
        let step = derive([0.5, 0.5], [0.0, 10.0]);
        assert_eq!(step.at(0.2), 0.0);
        assert_eq!(step.at(0.5), 0.0);
        assert_eq!(step.at(0.6), 10.0);
    }

    #[test]
    fn reversed_input_range_maps_the_same_way() {
        let reversed = derive([1.0, 0.0], [0.0, 50.0]);
        assert_eq!(reversed.at(1.0), 0.0);
        assert_eq!(reversed.at(0.0), 50.0);
        assert_eq!(reversed.at(0.5), 25.0);
    }

    #[test]
    fn nan_range_falls_back_to_start_value() {
        let broken = derive([0.0, f64::NAN], [3.0, 9.0]);
        assert_eq!(broken.at(0.5), 3.0);
        assert_eq!(derive([0.0, 1.0], [1.0, 0.0]).at(f64::NAN), 1.0);
    }

    #[test]
    fn table_interpolates_each_segment() {
        let table = Interpolation::new(&[0.0, 0.5, 1.0], &[0.0, 100.0, 50.0]).unwrap();
        assert_eq!(table.at(-1.0), 0.0);
        assert_eq!(table.at(0.25), 50.0);
        assert_eq!(table.at(0.5), 100.0);
        assert_eq!(table.at(0.75), 75.0);
        assert_eq!(table.at(2.0), 50.0);
    }

    #[test]
    fn table_output_is_monotonic_within_segment() {
        let table = Interpolation::new(&[0.0, 1.0], &[0.0, 50.0]).unwrap();
        let samples: Vec<f64> = (0..=20).map(|i| table.at(i as f64 / 20.0)).collect();
        assert!(samples.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn malformed_tables_are_rejected() {
        assert_eq!(
            Interpolation::new(&[0.0, 1.0], &[1.0]),
            Err(MotionError::MismatchedStops { inputs: 2, outputs: 1 })
        );
        assert_eq!(
            Interpolation::new(&[0.0], &[1.0]),
            Err(MotionError::TooFewStops(1))
        );
        assert_eq!(
            Interpolation::new(&[0.0, 0.6, 0.4], &[1.0, 2.0, 3.0]),
            Err(MotionError::UnorderedStops { index: 2 })
        );
        assert!(matches!(
            Interpolation::new(&[0.0, f64::NAN], &[1.0, 2.0]),
            Err(MotionError::UnorderedStops { index: 1 })
        ));
    }
}
