use serde::Serialize;
use std::time::Duration;

/// Delay before a simulated submission is acknowledged
pub const SIMULATED_ACK_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Phone,
    Email,
    Address,
}

/// Valuation request captured by the lead form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeadForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub status: FormStatus,
}

impl LeadForm {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Phone => self.phone = value,
            FormField::Email => self.email = value,
            FormField::Address => self.address = value,
        }
    }

    /// Every field filled in and the email at least looks like one
    pub fn is_complete(&self) -> bool {
        let filled = [&self.name, &self.phone, &self.email, &self.address]
            .iter()
            .all(|value| !value.trim().is_empty());
        filled && self.email.contains('@')
    }

    /// Enters `Submitting`; false when the form is incomplete or a
    /// submission is already in flight
    pub fn begin_submit(&mut self) -> bool {
        if self.status == FormStatus::Submitting || !self.is_complete() {
            return false;
        }
        self.status = FormStatus::Submitting;
        true
    }

    /// Completes an in-flight submission and clears the fields
    pub fn acknowledge(&mut self) -> bool {
        if self.status != FormStatus::Submitting {
            return false;
        }
        *self = LeadForm {
            status: FormStatus::Success,
            ..LeadForm::default()
        };
        true
    }
}
