//! Modal form schemas.
//!
//! Each form kind declares its ordered field list once; the same schema
//! renders the modal and extracts the submitted values, with an arity check
//! in between. A submission that does not match its schema is a
//! programming/config error (`FormError`), failed loudly for that one
//! interaction instead of indexing out of range.

use serenity::builder::{CreateActionRow, CreateInputText, CreateModal};
use serenity::model::application::InputTextStyle;
use serenity::model::id::UserId;

use super::ids;
use crate::constants::{BOUNTY_MAX_LEN, BOUNTY_MIN_LEN, FOOTER_MAX_LEN, ROCKSTAR_ID_LEN};
use crate::database::players::{non_empty, ProfilePatch};

/// One ordered text field of a modal form.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub custom_id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub required: bool,
    pub min_len: Option<u16>,
    pub max_len: u16,
}

const SETUP_FIELDS: [FieldSpec; 3] = [
    FieldSpec {
        custom_id: ids::RID_INPUT,
        label: "R* ID:",
        placeholder: "123456789",
        required: false,
        min_len: Some(ROCKSTAR_ID_LEN),
        max_len: ROCKSTAR_ID_LEN,
    },
    FieldSpec {
        custom_id: ids::BOUNTY_INPUT,
        label: "Bounty (0-100):",
        placeholder: "19.99",
        required: false,
        min_len: Some(BOUNTY_MIN_LEN),
        max_len: BOUNTY_MAX_LEN,
    },
    FieldSpec {
        custom_id: ids::FOOTER_INPUT,
        label: "Footer Message:",
        placeholder: "What are you up to?",
        required: false,
        min_len: None,
        max_len: FOOTER_MAX_LEN,
    },
];

const BOUNTY_FIELD: [FieldSpec; 1] = [FieldSpec {
    custom_id: ids::BOUNTY_INPUT,
    label: "Set your current bounty (0-100):",
    placeholder: "10.01",
    required: true,
    min_len: Some(BOUNTY_MIN_LEN),
    max_len: BOUNTY_MAX_LEN,
}];

const FOOTER_FIELD: [FieldSpec; 1] = [FieldSpec {
    custom_id: ids::FOOTER_INPUT,
    label: "Set your footer message",
    placeholder: "What are you up to?",
    required: false,
    min_len: None,
    max_len: FOOTER_MAX_LEN,
}];

const RID_FIELD: [FieldSpec; 1] = [FieldSpec {
    custom_id: ids::RID_INPUT,
    label: "Copy & Paste your R* ID:",
    placeholder: "123456789",
    required: false,
    min_len: None,
    max_len: ROCKSTAR_ID_LEN,
}];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Setup,
    SetBounty,
    SetFooter,
    SetRockstarId,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("form `{form}` submitted {got} fields, schema expects {want}")]
    Arity {
        form: &'static str,
        want: usize,
        got: usize,
    },
    #[error("field {index} of form `{form}` carried no text input")]
    MissingInput { form: &'static str, index: usize },
}

impl FormKind {
    pub fn custom_id_base(self) -> &'static str {
        match self {
            FormKind::Setup => ids::SETUP_FORM,
            FormKind::SetBounty => ids::SET_BOUNTY,
            FormKind::SetFooter => ids::SET_FOOTER,
            FormKind::SetRockstarId => ids::SET_RID,
        }
    }

    /// Resolves a submitted modal custom_id back to its form kind and the
    /// member it was rendered for. Unknown ids yield `None` and are ignored
    /// by the router.
    pub fn from_custom_id(custom_id: &str) -> Option<(FormKind, UserId)> {
        let (family, user) = ids::split_user_tag(custom_id)?;
        let kind = match family {
            ids::SETUP_FORM => FormKind::Setup,
            ids::SET_BOUNTY => FormKind::SetBounty,
            ids::SET_FOOTER => FormKind::SetFooter,
            ids::SET_RID => FormKind::SetRockstarId,
            _ => return None,
        };
        Some((kind, user))
    }

    pub fn title(self) -> &'static str {
        match self {
            FormKind::Setup => "Profile Setup",
            FormKind::SetBounty => "Set Bounty",
            FormKind::SetFooter => "Footer Message",
            FormKind::SetRockstarId => "Set Rockstar ID",
        }
    }

    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            FormKind::Setup => &SETUP_FIELDS,
            FormKind::SetBounty => &BOUNTY_FIELD,
            FormKind::SetFooter => &FOOTER_FIELD,
            FormKind::SetRockstarId => &RID_FIELD,
        }
    }

    /// Renders the modal for a specific member, one text input per row, the
    /// modal id tagged with that member's identity.
    pub fn modal(self, user: UserId) -> CreateModal {
        let rows = self
            .fields()
            .iter()
            .map(|field| {
                let mut input = CreateInputText::new(
                    InputTextStyle::Short,
                    field.label,
                    ids::tag_user(field.custom_id, user),
                )
                .placeholder(field.placeholder)
                .required(field.required)
                .max_length(field.max_len);
                if let Some(min) = field.min_len {
                    input = input.min_length(min);
                }
                CreateActionRow::InputText(input)
            })
            .collect();
        CreateModal::new(ids::tag_user(self.custom_id_base(), user), self.title())
            .components(rows)
    }

    /// Validates positional arity and returns the submitted values in schema
    /// order. `None` marks a row that carried no text input at all — a
    /// schema/render mismatch, not a blank entry (those arrive as `Some("")`).
    pub fn extract<I>(self, rows: I) -> Result<Vec<String>, FormError>
    where
        I: IntoIterator<Item = Option<String>>,
    {
        let values: Vec<Option<String>> = rows.into_iter().collect();
        let want = self.fields().len();
        if values.len() != want {
            return Err(FormError::Arity {
                form: self.custom_id_base(),
                want,
                got: values.len(),
            });
        }
        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                value.ok_or(FormError::MissingInput {
                    form: self.custom_id_base(),
                    index,
                })
            })
            .collect()
    }

    /// Turns extracted values into a partial update. Blank inputs become
    /// "not supplied" so they never erase stored fields.
    pub fn patch_from_values(self, values: &[String]) -> ProfilePatch {
        match self {
            FormKind::Setup => ProfilePatch {
                rockstar_id: non_empty(&values[0]),
                bounty: non_empty(&values[1]),
                footer: non_empty(&values[2]),
                camp: None,
            },
            FormKind::SetBounty => ProfilePatch {
                bounty: non_empty(&values[0]),
                ..ProfilePatch::default()
            },
            FormKind::SetFooter => ProfilePatch {
                footer: non_empty(&values[0]),
                ..ProfilePatch::default()
            },
            FormKind::SetRockstarId => ProfilePatch {
                rockstar_id: non_empty(&values[0]),
                ..ProfilePatch::default()
            },
        }
    }
}
