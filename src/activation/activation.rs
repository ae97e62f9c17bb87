/// Rectifier: `x` when positive, `0` otherwise.
pub fn rectify(x: f32) -> f32 {
    if x > 0.0 { x } else { 0.0 }
}

/// Stand-in for the rectifier's derivative.
///
/// Evaluated on the post-activation value, so it is `1` for any neuron that
/// fired and `0` for one that was clamped.
pub fn gate(activation: f32) -> f32 {
    if activation > 0.0 { 1.0 } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectify_clamps_negatives() {
        assert_eq!(rectify(1.5), 1.5);
        assert_eq!(rectify(0.0), 0.0);
        assert_eq!(rectify(-2.0), 0.0);
    }

    #[test]
    fn gate_is_a_step() {
        assert_eq!(gate(0.3), 1.0);
        assert_eq!(gate(0.0), 0.0);
        assert_eq!(gate(-0.3), 0.0);
    }
}
