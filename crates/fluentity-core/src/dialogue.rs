//! Interactive model definition as a small synchronous state machine.
//!
//! The dialogue only talks to a [`Prompter`], so the same flow runs against a
//! terminal in the CLI and against scripted answers in tests.

use crate::error::PromptError;
use crate::ir::{
    AttributeDefinition, AttributeType, ModelDefinition, RelationshipDefinition, RelationshipType,
};
use crate::transform::naming::{capitalize, pluralize, to_pascal_case};

/// Choices offered for an attribute type. `other` asks for a custom type name.
pub const ATTRIBUTE_TYPE_CHOICES: [&str; 5] = ["string", "number", "boolean", "any", "other"];

/// Synchronous question/answer channel.
pub trait Prompter {
    /// Free text answer.
    fn text(&mut self, message: &str) -> Result<String, PromptError>;

    /// Yes/no answer.
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError>;

    /// One of `choices`, returned verbatim.
    fn select(&mut self, message: &str, choices: &[&str]) -> Result<String, PromptError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogueState {
    AskName,
    AskAttribute,
    AskAttributeDetails,
    AskRelation,
    AskRelationDetails,
    Done,
}

/// Collects a model name, then zero or more attributes, then zero or more relations.
#[derive(Debug, Clone)]
pub struct ModelDialogue {
    state: DialogueState,
    name: String,
    attributes: Vec<AttributeDefinition>,
    relationships: Vec<RelationshipDefinition>,
}

impl ModelDialogue {
    /// Start a dialogue. A non-empty `name` skips the name question.
    pub fn new(name: Option<String>) -> Self {
        let name = name.map(|n| n.trim().to_string()).unwrap_or_default();
        let state = if name.is_empty() {
            DialogueState::AskName
        } else {
            DialogueState::AskAttribute
        };
        Self {
            state,
            name,
            attributes: Vec::new(),
            relationships: Vec::new(),
        }
    }

    pub fn state(&self) -> DialogueState {
        self.state
    }

    /// Ask the question for the current state and move to the next one.
    pub fn step<P: Prompter + ?Sized>(
        &mut self,
        prompter: &mut P,
    ) -> Result<DialogueState, PromptError> {
        self.state = match self.state {
            DialogueState::AskName => {
                self.name = ask_required(
                    prompter,
                    "What is the name of your model?",
                    "Model name is required",
                )?;
                DialogueState::AskAttribute
            }
            DialogueState::AskAttribute => {
                if prompter.confirm("Add an attribute?", false)? {
                    DialogueState::AskAttributeDetails
                } else {
                    DialogueState::AskRelation
                }
            }
            DialogueState::AskAttributeDetails => {
                let attribute = ask_attribute(prompter)?;
                self.attributes.push(attribute);
                DialogueState::AskAttribute
            }
            DialogueState::AskRelation => {
                if prompter.confirm("Add a relation?", false)? {
                    DialogueState::AskRelationDetails
                } else {
                    DialogueState::Done
                }
            }
            DialogueState::AskRelationDetails => {
                let relation = ask_relation(prompter)?;
                self.relationships.push(relation);
                DialogueState::AskRelation
            }
            DialogueState::Done => DialogueState::Done,
        };
        Ok(self.state)
    }

    /// Drive the dialogue to completion and build the model.
    pub fn run<P: Prompter + ?Sized>(
        mut self,
        prompter: &mut P,
    ) -> Result<ModelDefinition, PromptError> {
        while self.state != DialogueState::Done {
            self.step(prompter)?;
        }
        Ok(self.into_model())
    }

    fn into_model(self) -> ModelDefinition {
        ModelDefinition {
            name: to_pascal_case(&self.name),
            resource: pluralize(&self.name),
            attributes: self.attributes,
            relationships: self.relationships,
        }
    }
}

fn ask_required<P: Prompter + ?Sized>(
    prompter: &mut P,
    message: &str,
    error: &str,
) -> Result<String, PromptError> {
    loop {
        let answer = prompter.text(message)?;
        let answer = answer.trim();
        if !answer.is_empty() {
            return Ok(answer.to_string());
        }
        log::debug!("{error}");
    }
}

fn ask_attribute<P: Prompter + ?Sized>(prompter: &mut P) -> Result<AttributeDefinition, PromptError> {
    let name = ask_required(prompter, "Attribute name:", "Attribute name is required")?;
    let choice = prompter.select("Attribute type:", &ATTRIBUTE_TYPE_CHOICES)?;
    let attr_type = match choice.as_str() {
        "string" => AttributeType::String,
        "number" => AttributeType::Number,
        "boolean" => AttributeType::Boolean,
        "any" => AttributeType::Any,
        _ => {
            let type_name = ask_required(prompter, "Type name:", "Type is required")?;
            AttributeType::Named(capitalize(&type_name))
        }
    };
    let is_array = prompter.confirm("Is this attribute an array?", false)?;
    let required = prompter.confirm("Is this attribute required?", true)?;

    Ok(AttributeDefinition {
        name: name.to_lowercase(),
        attr_type,
        is_array,
        required,
    })
}

fn ask_relation<P: Prompter + ?Sized>(
    prompter: &mut P,
) -> Result<RelationshipDefinition, PromptError> {
    let name = ask_required(prompter, "Relation name:", "Relation name is required")?;
    let choices = RelationshipType::ALL.map(RelationshipType::as_str);
    let rel_type = prompter
        .select("Relation type:", &choices)?
        .parse::<RelationshipType>()
        .map_err(PromptError::Failed)?;
    let model = ask_required(
        prompter,
        "Related model name:",
        "Related model name is required",
    )?;

    Ok(RelationshipDefinition {
        name: name.to_lowercase(),
        rel_type,
        model: capitalize(&model),
        foreign_key: None,
    })
}
