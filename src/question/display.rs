//! # Question Display
//!
//! The text surface a question is shown on.

use crate::question::QuestionView;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The four labels a question occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplaySlot {
    Operand1,
    Operator,
    Operand2,
    Solution,
}

impl DisplaySlot {
    /// All slots in reading order.
    pub const ALL: [DisplaySlot; 4] = [
        DisplaySlot::Operand1,
        DisplaySlot::Operator,
        DisplaySlot::Operand2,
        DisplaySlot::Solution,
    ];
}

/// A text surface with one settable label per [`DisplaySlot`].
///
/// Implemented by the host's UI layer.
pub trait QuestionDisplay {
    /// Replaces the text of one label.
    fn set_text(&mut self, slot: DisplaySlot, text: &str);

    /// Writes every slot of a question view.
    fn show(&mut self, view: &QuestionView) {
        for slot in DisplaySlot::ALL {
            self.set_text(slot, &view.text(slot));
        }
    }
}

/// In-memory display that keeps the last text of each slot.
///
/// # Examples
///
/// ```
/// use mathdash::{DisplaySlot, QuestionDisplay, TextPanel};
///
/// let mut panel = TextPanel::new();
/// panel.set_text(DisplaySlot::Operator, "+");
/// assert_eq!(panel.text(DisplaySlot::Operator), Some("+"));
/// assert_eq!(panel.text(DisplaySlot::Solution), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextPanel {
    labels: HashMap<DisplaySlot, String>,
}

impl TextPanel {
    /// Creates an empty panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of a slot, if it was ever set.
    pub fn text(&self, slot: DisplaySlot) -> Option<&str> {
        self.labels.get(&slot).map(String::as_str)
    }

    /// The panel as one line, unset slots left blank.
    pub fn line(&self) -> String {
        let [operand1, operator, operand2, solution] =
            DisplaySlot::ALL.map(|slot| self.text(slot).unwrap_or(""));
        format!("{} {} {} = {}", operand1, operator, operand2, solution)
    }
}

impl QuestionDisplay for TextPanel {
    fn set_text(&mut self, slot: DisplaySlot, text: &str) {
        self.labels.insert(slot, text.to_string());
    }
}
