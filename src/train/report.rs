use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of one `train_until_streak` run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    /// Samples shown to the network, each a `compute` + `backprop` pair.
    pub presentations: usize,
    /// Length of the correct-classification run when training stopped.
    pub final_streak: usize,
    /// `false` when `max_presentations` ran out first.
    pub converged: bool,
}

/// Forward-only classification tally over freshly drawn samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Evaluation {
    pub correct: usize,
    pub wrong: usize,
}

impl Evaluation {
    pub fn total(&self) -> usize {
        self.correct + self.wrong
    }

    /// Fraction in [0, 1]; `0.0` when nothing was evaluated.
    pub fn accuracy(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total() as f64
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Correct guesses: {}/{} --- {}%",
            self.correct,
            self.total(),
            self.accuracy() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_and_display() {
        let eval = Evaluation { correct: 3, wrong: 1 };
        assert_eq!(eval.total(), 4);
        assert_eq!(eval.accuracy(), 0.75);
        assert_eq!(eval.to_string(), "Correct guesses: 3/4 --- 75%");
    }

    #[test]
    fn empty_evaluation_has_zero_accuracy() {
        assert_eq!(Evaluation::default().accuracy(), 0.0);
    }
}
