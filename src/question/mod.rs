//! # Question Module
//!
//! Procedural arithmetic questions for the math game.
//!
//! A question is an equation `operand1 <operator> operand2 = solution` with
//! exactly one element hidden from the player. The [`QuestionEngine`] builds
//! questions from a [`DifficultyLevel`], pushes the masked form to a
//! [`QuestionDisplay`] and checks the player's guesses.

pub mod display;
pub mod engine;
pub mod level;

pub use display::*;
pub use engine::*;
pub use level::*;

use crate::utils::format_number;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Arithmetic operators a question can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Every operator, in selection order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Applies the operator to two operands.
    ///
    /// # Examples
    ///
    /// ```
    /// use mathdash::Operator;
    ///
    /// assert_eq!(Operator::Subtract.apply(7.0, 2.0), 5.0);
    /// assert_eq!(Operator::Divide.apply(9.0, 3.0), 3.0);
    /// ```
    pub fn apply(self, operand1: f64, operand2: f64) -> f64 {
        match self {
            Operator::Add => operand1 + operand2,
            Operator::Subtract => operand1 - operand2,
            Operator::Multiply => operand1 * operand2,
            Operator::Divide => operand1 / operand2,
        }
    }

    /// Text symbol shown to the player.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "x",
            Operator::Divide => "÷",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Symbol for an operator slot, `?` when the operator is unknown.
///
/// # Examples
///
/// ```
/// use mathdash::{operator_symbol, Operator};
///
/// assert_eq!(operator_symbol(Some(Operator::Multiply)), "x");
/// assert_eq!(operator_symbol(None), "?");
/// ```
pub fn operator_symbol(operator: Option<Operator>) -> &'static str {
    operator.map_or(HIDDEN_TEXT, Operator::symbol)
}

/// Text shown in place of a hidden element.
pub const HIDDEN_TEXT: &str = "?";

/// Which element of a question the player has to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionMode {
    /// Both operands and the operator are shown, the solution is hidden
    RevealAll,
    /// One of the two operands is hidden
    HideOperand,
    /// The operator is hidden
    HideOperator,
}

/// The single hidden element of a generated question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaskedField {
    Operand1,
    Operator,
    Operand2,
    Solution,
}

/// The value the player is expected to supply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Answer {
    Number(f64),
    Operator(Operator),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Number(value) => f.write_str(&format_number(*value)),
            Answer::Operator(operator) => f.write_str(operator.symbol()),
        }
    }
}

/// A display slot that either shows its value or is masked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Slot<T> {
    Shown(T),
    Hidden,
}

impl<T: Copy> Slot<T> {
    /// Returns the shown value, if any.
    pub fn value(&self) -> Option<T> {
        match self {
            Slot::Shown(value) => Some(*value),
            Slot::Hidden => None,
        }
    }

    /// Whether this slot is masked.
    pub fn is_hidden(&self) -> bool {
        matches!(self, Slot::Hidden)
    }
}

impl<T: fmt::Display> fmt::Display for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Shown(value) => write!(f, "{}", value),
            Slot::Hidden => f.write_str(HIDDEN_TEXT),
        }
    }
}

/// A generated equation together with its hidden element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub operator: Operator,
    pub operand1: f64,
    pub operand2: f64,
    pub solution: f64,
    pub mode: QuestionMode,
    pub masked: MaskedField,
}

impl Question {
    /// The hidden value the player has to supply.
    ///
    /// # Examples
    ///
    /// ```
    /// use mathdash::{Answer, MaskedField, Operator, Question, QuestionMode};
    ///
    /// let question = Question {
    ///     operator: Operator::Add,
    ///     operand1: 2.0,
    ///     operand2: 3.0,
    ///     solution: 5.0,
    ///     mode: QuestionMode::HideOperand,
    ///     masked: MaskedField::Operand2,
    /// };
    /// assert_eq!(question.answer(), Answer::Number(3.0));
    /// ```
    pub fn answer(&self) -> Answer {
        match self.masked {
            MaskedField::Operand1 => Answer::Number(self.operand1),
            MaskedField::Operand2 => Answer::Number(self.operand2),
            MaskedField::Solution => Answer::Number(self.solution),
            MaskedField::Operator => Answer::Operator(self.operator),
        }
    }

    /// The masked four-slot form of the question.
    pub fn view(&self) -> QuestionView {
        let number = |field: MaskedField, value: f64| {
            if self.masked == field {
                Slot::Hidden
            } else {
                Slot::Shown(value)
            }
        };

        QuestionView {
            operand1: number(MaskedField::Operand1, self.operand1),
            operator: if self.masked == MaskedField::Operator {
                Slot::Hidden
            } else {
                Slot::Shown(self.operator)
            },
            operand2: number(MaskedField::Operand2, self.operand2),
            solution: number(MaskedField::Solution, self.solution),
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.view();
        write!(
            f,
            "{} {} {} = {}",
            view.text(DisplaySlot::Operand1),
            view.text(DisplaySlot::Operator),
            view.text(DisplaySlot::Operand2),
            view.text(DisplaySlot::Solution)
        )
    }
}

/// What the player sees of a question.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuestionView {
    pub operand1: Slot<f64>,
    pub operator: Slot<Operator>,
    pub operand2: Slot<f64>,
    pub solution: Slot<f64>,
}

impl QuestionView {
    /// Text for one display slot, `?` when hidden.
    pub fn text(&self, slot: DisplaySlot) -> String {
        let number =
            |value: Slot<f64>| value.value().map_or(HIDDEN_TEXT.to_string(), format_number);
        match slot {
            DisplaySlot::Operand1 => number(self.operand1),
            DisplaySlot::Operator => operator_symbol(self.operator.value()).to_string(),
            DisplaySlot::Operand2 => number(self.operand2),
            DisplaySlot::Solution => number(self.solution),
        }
    }

    /// Number of hidden slots; always one for generated questions.
    pub fn hidden_count(&self) -> usize {
        [
            self.operand1.is_hidden(),
            self.operator.is_hidden(),
            self.operand2.is_hidden(),
            self.solution.is_hidden(),
        ]
        .iter()
        .filter(|hidden| **hidden)
        .count()
    }
}
