//! Numbered-menu prompt
//!
//! Collects the eleven decision inputs one at a time. Answers are numbers;
//! anything else is reported and the same question is asked again.

use crate::error::PromptError;
use planning_sdk::{
    DecisionRequest, HeightCategory, Location, Modifier, Modifiers, StructureType,
    UniversalCondition, UniversalConditions,
};
use std::io::{BufRead, Write};
use std::num::IntErrorKind;

type Result<T> = std::result::Result<T, PromptError>;

/// Outcome of an interview
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interview {
    /// A universal condition was answered "yes"; remaining questions were skipped
    UniversalConditionMet(UniversalConditions),
    /// Every question was answered
    Complete(DecisionRequest),
}

/// Question text for a universal condition
pub fn universal_question(condition: UniversalCondition) -> &'static str {
    match condition {
        UniversalCondition::ListedBuilding => "Is the property a Listed Building?",
        UniversalCondition::Article23Land => "Is it Article 2(3) Land (removing PD rights)?",
        UniversalCondition::Article24Land => "Is it Article 2(4) Land (removing PD rights)?",
        UniversalCondition::Article4Directive => {
            "Is it covered by the Article 4 Directive (removing PD rights)?"
        }
        UniversalCondition::Aonb => {
            "Is the property in an AONB (Area of Outstanding Natural Beauty)?"
        }
        UniversalCondition::WorksAffectingTpo => {
            "Is it affected by a Tree Preservation Order (TPO)?"
        }
        UniversalCondition::FaceListedBuilding => {
            "Does the enclosure face onto a property with a listed building?"
        }
    }
}

/// Question text for a modifier
pub fn modifier_question(modifier: Modifier) -> &'static str {
    match modifier {
        Modifier::NewBuildProperty => "Is it a new build property?",
        Modifier::PdRemovedByPreviousPlanning => {
            "Have permitted development rights been removed with previous planning?"
        }
    }
}

/// Interactive prompt over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a new prompter
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write one line to the user
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask until the answer is one of the numbered choices
    pub fn numeric_choice<T: Copy>(&mut self, prompt: &str, choices: &[(u32, T)]) -> Result<T> {
        loop {
            let answer = self.read_line(prompt)?;
            let number = match answer.parse::<i64>() {
                Ok(number) => Some(number),
                // Too large for i64: still a number, just never a menu key
                Err(e)
                    if matches!(
                        e.kind(),
                        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                    ) =>
                {
                    None
                }
                Err(_) => {
                    tracing::debug!(answer = %answer, "Non-numeric answer");
                    self.say("Invalid input; please enter a number.")?;
                    continue;
                }
            };

            if let Some((_, value)) =
                number.and_then(|number| choices.iter().find(|(key, _)| i64::from(*key) == number))
            {
                return Ok(*value);
            }
            let keys: Vec<u32> = choices.iter().map(|(key, _)| *key).collect();
            tracing::debug!(answer = %answer, "Choice outside menu");
            self.say(&format!("Invalid choice. Please enter one of: {:?}", keys))?;
        }
    }

    /// Ask a yes/no question (1 for Yes, 2 for No)
    pub fn yes_no(&mut self, question: &str) -> Result<bool> {
        let prompt = format!("{} (Enter 1 for Yes, 2 for No): ", question);
        self.numeric_choice(&prompt, &[(1, true), (2, false)])
    }

    /// Ask for the structure type
    pub fn structure_type(&mut self) -> Result<StructureType> {
        let choices = numbered(&StructureType::KNOWN);
        let menu = choices
            .iter()
            .map(|(key, structure)| format!("{} for {}", key, structure))
            .collect::<Vec<_>>()
            .join(", ");
        self.numeric_choice(&format!("Enter the structure type ({}): ", menu), &choices)
    }

    /// Ask for the location
    pub fn location(&mut self) -> Result<Location> {
        self.numeric_choice(
            "Is the structure adjacent to a road/highway? (Enter 1 for adjacent, 2 for not adjacent): ",
            &numbered(&Location::ALL),
        )
    }

    /// Ask for the height category
    pub fn height(&mut self) -> Result<HeightCategory> {
        let choices = numbered(&HeightCategory::ALL);
        let menu = choices
            .iter()
            .map(|(key, height)| format!("{} for {}", key, height))
            .collect::<Vec<_>>()
            .join(",\n");
        self.numeric_choice(&format!("Enter the height category:\n{}: ", menu), &choices)
    }

    /// Run the full interview
    ///
    /// Universal conditions are asked first, all seven of them. If any is
    /// answered "yes" the enclosure questions are skipped.
    pub fn interview(&mut self) -> Result<Interview> {
        let mut universal = UniversalConditions::none();
        for condition in UniversalCondition::ALL {
            let answer = self.yes_no(universal_question(condition))?;
            tracing::debug!(
                condition = condition.code(),
                answer,
                "Universal condition answered"
            );
            universal.set(condition, answer);
        }

        if universal.any() {
            return Ok(Interview::UniversalConditionMet(universal));
        }

        let structure_type = self.structure_type()?;
        let location = self.location()?;
        let height = self.height()?;

        let mut modifiers = Modifiers::none();
        for modifier in Modifier::ALL {
            let answer = self.yes_no(modifier_question(modifier))?;
            modifiers.set(modifier, answer);
        }

        Ok(Interview::Complete(
            DecisionRequest::new(location, height, structure_type).with_modifiers(modifiers),
        ))
    }
}

/// Number menu entries from 1
fn numbered<T: Copy>(items: &[T]) -> Vec<(u32, T)> {
    (1u32..).zip(items.iter().copied()).collect()
}
