//! # Question Engine
//!
//! Generates questions at a difficulty level and validates player guesses.
//!
//! Generation follows a few rules:
//! 1. The operator is drawn uniformly from the four arithmetic operators
//! 2. Division draws a nonzero divisor and a quotient, then derives the dividend
//!    so the division is exact within rounding
//! 3. Other operators draw both operands and compute the solution
//! 4. Computed values are rounded to two more decimals than the operands

use crate::question::{Answer, MaskedField, Operator, Question, QuestionDisplay, QuestionMode};
use crate::utils::{format_number, round_to_decimals, sample_number};
use crate::{config, DifficultyLevel, MathdashError, MathdashResult};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Holds the current question and the state needed to check guesses.
///
/// Each call to [`QuestionEngine::generate_question`] replaces the previous
/// question; there is no history.
///
/// # Examples
///
/// ```
/// use mathdash::{DifficultyLevel, MaskedField, QuestionEngine, QuestionMode};
///
/// let mut engine = QuestionEngine::new(42);
/// let question = engine.generate_question(QuestionMode::RevealAll, &DifficultyLevel::easy());
/// assert_eq!(question.masked, MaskedField::Solution);
/// ```
#[derive(Debug, Clone)]
pub struct QuestionEngine {
    rng: StdRng,
    float_threshold: f64,
    level: Option<DifficultyLevel>,
    current: Option<Question>,
}

impl QuestionEngine {
    /// Creates an engine with a seeded random source.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Creates an engine seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            float_threshold: config::DEFAULT_FLOAT_THRESHOLD,
            level: None,
            current: None,
        }
    }

    /// Sets the tolerance used by [`QuestionEngine::validate_operator_guess`].
    pub fn with_float_threshold(mut self, float_threshold: f64) -> Self {
        self.float_threshold = float_threshold;
        self
    }

    /// Tolerance used when comparing solutions for operator guesses.
    pub fn float_threshold(&self) -> f64 {
        self.float_threshold
    }

    /// The level of the most recent question, if any.
    pub fn level(&self) -> Option<&DifficultyLevel> {
        self.level.as_ref()
    }

    /// The most recent question, if any.
    pub fn current_question(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    /// Draws an operator uniformly.
    pub fn random_operator(&mut self) -> Operator {
        Operator::ALL[self.rng.gen_range(0..Operator::ALL.len())]
    }

    /// Generates a new question with a random operator.
    pub fn generate_question(&mut self, mode: QuestionMode, level: &DifficultyLevel) -> &Question {
        let operator = self.random_operator();
        self.generate_question_with_operator(operator, mode, level)
    }

    /// Generates a new question using the given operator.
    pub fn generate_question_with_operator(
        &mut self,
        operator: Operator,
        mode: QuestionMode,
        level: &DifficultyLevel,
    ) -> &Question {
        self.level = Some(*level);
        let solution_decimals = level.number_decimals() + config::SOLUTION_EXTRA_DECIMALS;

        let (operand1, operand2, solution) = match operator {
            Operator::Divide => {
                // Levels are validated to contain a nonzero value, so this ends.
                let operand2 = loop {
                    let candidate = self.sample(level);
                    if candidate != 0.0 {
                        break candidate;
                    }
                    trace!("Rejected zero divisor");
                };
                let solution = self.sample(level);
                let operand1 = round_to_decimals(operand2 * solution, solution_decimals);
                (operand1, operand2, solution)
            }
            _ => {
                let operand2 = self.sample(level);
                let operand1 = self.sample(level);
                let solution =
                    round_to_decimals(operator.apply(operand1, operand2), solution_decimals);
                (operand1, operand2, solution)
            }
        };

        let masked = match mode {
            QuestionMode::RevealAll => MaskedField::Solution,
            QuestionMode::HideOperator => MaskedField::Operator,
            QuestionMode::HideOperand => {
                if self.rng.gen_bool(0.5) {
                    MaskedField::Operand1
                } else {
                    MaskedField::Operand2
                }
            }
        };

        let question = Question {
            operator,
            operand1,
            operand2,
            solution,
            mode,
            masked,
        };
        debug!("Generated question {} (answer {})", question, question.answer());

        self.current.insert(question)
    }

    /// Draws one number from the loaded level.
    pub fn generate_random_number(&mut self) -> MathdashResult<f64> {
        let level = self.level.ok_or(MathdashError::NoLevelLoaded)?;
        Ok(self.sample(&level))
    }

    fn sample(&mut self, level: &DifficultyLevel) -> f64 {
        sample_number(
            &mut self.rng,
            level.minimum_random(),
            level.maximum_random(),
            level.number_decimals(),
        )
    }

    /// Checks a guess for the hidden operand.
    ///
    /// The guess replaces the hidden operand and the solution is recomputed
    /// without rounding; it must equal the stored solution exactly. Returns
    /// `false` when no operand is hidden.
    pub fn validate_operand_guess(&self, input: f64) -> bool {
        let Some(question) = &self.current else {
            return false;
        };

        let recomputed = match question.masked {
            MaskedField::Operand1 => question.operator.apply(input, question.operand2),
            MaskedField::Operand2 => question.operator.apply(question.operand1, input),
            MaskedField::Operator | MaskedField::Solution => return false,
        };
        recomputed == question.solution
    }

    /// Checks a guess for the hidden operator.
    ///
    /// Magnitudes are compared within the float threshold, so an operator that
    /// produces the stored solution with the opposite sign is also accepted.
    pub fn validate_operator_guess(&self, guessed: Operator) -> bool {
        let Some(question) = &self.current else {
            return false;
        };

        let recomputed = guessed.apply(question.operand1, question.operand2);
        (question.solution.abs() - recomputed.abs()).abs() < self.float_threshold
    }

    /// The expected answer as text: the hidden number, or the operator symbol
    /// for operator questions. Empty before the first question.
    pub fn display_solution_text(&self) -> String {
        match &self.current {
            Some(question) => match question.answer() {
                Answer::Number(value) => format_number(value),
                Answer::Operator(operator) => operator.symbol().to_string(),
            },
            None => String::new(),
        }
    }

    /// Pushes the masked current question to a display. Does nothing before
    /// the first question.
    pub fn show(&self, display: &mut impl QuestionDisplay) {
        if let Some(question) = &self.current {
            display.show(&question.view());
        }
    }
}

impl Default for QuestionEngine {
    fn default() -> Self {
        Self::from_entropy()
    }
}
