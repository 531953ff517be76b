//! Contact form values and the snapshot captured for review.

use std::fmt;

/// Fields of the contact form that the controller tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum FieldId {
    /// Family name (`#nom`).
    Name,
    /// Given name (`#prenom`).
    GivenName,
    /// Contact address.
    Email,
    /// Birth date, `YYYY-MM-DD`.
    BirthDate,
    /// Free-text message.
    Message,
    /// Campaign named when "autre" is selected.
    OtherCampaign,
}

impl FieldId {
    /// Every field, in page order.
    pub const ALL: [FieldId; 6] = [
        FieldId::Name,
        FieldId::GivenName,
        FieldId::Email,
        FieldId::BirthDate,
        FieldId::Message,
        FieldId::OtherCampaign,
    ];

    /// Fields that carry an inline validation rule, in submit-check order.
    pub const VALIDATED: [FieldId; 3] =
        [FieldId::Name, FieldId::GivenName, FieldId::BirthDate];

    /// Element id of the field in the contact page markup.
    pub fn dom_id(&self) -> &'static str {
        match self {
            FieldId::Name => "nom",
            FieldId::GivenName => "prenom",
            FieldId::Email => "email",
            FieldId::BirthDate => "dateNaissance",
            FieldId::Message => "message",
            FieldId::OtherCampaign => "autre-campagne",
        }
    }

    /// Inverse of [`FieldId::dom_id`].
    pub fn from_dom_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.dom_id() == id)
    }

    /// Whether the field has an inline rule.
    pub fn is_validated(&self) -> bool {
        Self::VALIDATED.contains(self)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

/// Selected option of the mutually exclusive campaign radio group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum CampaignChoice {
    /// One of the campaigns listed on the page, by radio value.
    Listed(String),
    /// The "autre" option, which reveals a free-text field.
    Other,
}

impl CampaignChoice {
    /// Radio value of the "other" option.
    pub const OTHER_VALUE: &'static str = "autre";

    /// Interpret the value of the checked radio.
    pub fn from_radio_value(value: &str) -> Self {
        if value == Self::OTHER_VALUE {
            CampaignChoice::Other
        } else {
            CampaignChoice::Listed(value.to_string())
        }
    }

    /// Whether this is the "autre" option.
    pub fn is_other(&self) -> bool {
        matches!(self, CampaignChoice::Other)
    }

    /// Radio value this choice came from.
    pub fn radio_value(&self) -> &str {
        match self {
            CampaignChoice::Listed(value) => value,
            CampaignChoice::Other => Self::OTHER_VALUE,
        }
    }
}

/// Copy of the form's controls, kept by the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct FormValues {
    pub name: String,
    pub given_name: String,
    pub email: String,
    pub birth_date: String,
    pub message: String,
    pub other_campaign: String,
    /// Checked campaign radio, if any.
    pub campaign: Option<CampaignChoice>,
}

impl FormValues {
    /// Value of one field.
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::GivenName => &self.given_name,
            FieldId::Email => &self.email,
            FieldId::BirthDate => &self.birth_date,
            FieldId::Message => &self.message,
            FieldId::OtherCampaign => &self.other_campaign,
        }
    }

    /// Replace the value of one field.
    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        let slot = match field {
            FieldId::Name => &mut self.name,
            FieldId::GivenName => &mut self.given_name,
            FieldId::Email => &mut self.email,
            FieldId::BirthDate => &mut self.birth_date,
            FieldId::Message => &mut self.message,
            FieldId::OtherCampaign => &mut self.other_campaign,
        };
        *slot = value.into();
    }

    /// Whether every field is blank and no campaign is chosen.
    pub fn is_pristine(&self) -> bool {
        *self == FormValues::default()
    }
}

/// Immutable copy of the form taken when the user asks to send it.
///
/// Later edits to the live form never reach a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[allow(missing_docs)]
pub struct Submission {
    pub name: String,
    pub given_name: String,
    pub email: String,
    pub message: String,
    pub birth_date: String,
    pub campaign: Option<CampaignChoice>,
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none", default)
    )]
    /// Only set when the "autre" campaign was chosen.
    pub other_campaign: Option<String>,
}

impl Submission {
    /// Freeze `values`.
    pub fn capture(values: &FormValues) -> Self {
        let other_campaign = values
            .campaign
            .as_ref()
            .filter(|choice| choice.is_other())
            .map(|_| values.other_campaign.clone());

        Self {
            name: values.name.clone(),
            given_name: values.given_name.clone(),
            email: values.email.clone(),
            message: values.message.clone(),
            birth_date: values.birth_date.clone(),
            campaign: values.campaign.clone(),
            other_campaign,
        }
    }
}

/// Where the contact form is in its editing/review/success cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormPhase {
    /// Fields can be edited and submitted.
    #[default]
    Editing,
    /// The review dialog is open on a snapshot.
    Reviewing,
    /// The submission was confirmed; a reset is on its way.
    Success,
}
