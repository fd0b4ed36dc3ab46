//! Lead Entity
//!
//! A sales/enrollment prospect captured through the lead form.

use serde::{Deserialize, Serialize};
use super::date::is_iso_date;
use super::entity::{DomainError, DomainResult, Entity};

/// Lead status options offered by the form
pub const LEAD_STATUSES: &[&str] = &["New", "Contacted", "Qualified", "Lost"];

/// Gender options offered by the form
pub const GENDERS: &[&str] = &["Male", "Female"];

/// A CRM prospect with contact and insurance details.
///
/// Field names are the persisted JSON names under the `leads` storage key.
/// Optional fields default to an empty string when absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Lead {
    /// Clock-derived identifier, immutable once assigned
    pub id: u64,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub lead_status: String,

    #[serde(default)]
    pub gender: String,
    /// ISO `YYYY-MM-DD`
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub insurance_type: String,
    #[serde(default)]
    pub policy_number: String,
    #[serde(default)]
    pub coverage_amount: String,
    #[serde(default)]
    pub preferred_plan: String,
    /// ISO `YYYY-MM-DD`
    #[serde(default)]
    pub next_follow_up_date: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub referrer: String,
    #[serde(default)]
    pub notes: String,
}

impl Entity for Lead {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }
}

impl Lead {
    /// Create an empty lead with the given id
    pub fn new(id: u64) -> Self {
        Self { id, ..Default::default() }
    }

    /// Read one editable field
    pub fn field(&self, field: LeadField) -> &str {
        match field {
            LeadField::FullName => &self.full_name,
            LeadField::Email => &self.email,
            LeadField::PhoneNumber => &self.phone_number,
            LeadField::LeadStatus => &self.lead_status,
            LeadField::Gender => &self.gender,
            LeadField::DateOfBirth => &self.date_of_birth,
            LeadField::Address => &self.address,
            LeadField::InsuranceType => &self.insurance_type,
            LeadField::PolicyNumber => &self.policy_number,
            LeadField::CoverageAmount => &self.coverage_amount,
            LeadField::PreferredPlan => &self.preferred_plan,
            LeadField::NextFollowUpDate => &self.next_follow_up_date,
            LeadField::Source => &self.source,
            LeadField::CompanyName => &self.company_name,
            LeadField::Referrer => &self.referrer,
            LeadField::Notes => &self.notes,
        }
    }

    /// Replace exactly one editable field
    pub fn set_field(&mut self, field: LeadField, value: String) {
        let slot = match field {
            LeadField::FullName => &mut self.full_name,
            LeadField::Email => &mut self.email,
            LeadField::PhoneNumber => &mut self.phone_number,
            LeadField::LeadStatus => &mut self.lead_status,
            LeadField::Gender => &mut self.gender,
            LeadField::DateOfBirth => &mut self.date_of_birth,
            LeadField::Address => &mut self.address,
            LeadField::InsuranceType => &mut self.insurance_type,
            LeadField::PolicyNumber => &mut self.policy_number,
            LeadField::CoverageAmount => &mut self.coverage_amount,
            LeadField::PreferredPlan => &mut self.preferred_plan,
            LeadField::NextFollowUpDate => &mut self.next_follow_up_date,
            LeadField::Source => &mut self.source,
            LeadField::CompanyName => &mut self.company_name,
            LeadField::Referrer => &mut self.referrer,
            LeadField::Notes => &mut self.notes,
        };
        *slot = value;
    }

    /// Check required fields and input formats before persisting
    pub fn validate(&self) -> DomainResult<()> {
        for field in LeadField::REQUIRED {
            if self.field(*field).trim().is_empty() {
                return Err(DomainError::InvalidInput(format!("{} is required", field.label())));
            }
        }
        if !looks_like_email(&self.email) {
            return Err(DomainError::InvalidInput(format!("'{}' is not a valid email", self.email)));
        }
        for field in [LeadField::DateOfBirth, LeadField::NextFollowUpDate] {
            let value = self.field(field);
            if !value.is_empty() && !is_iso_date(value) {
                return Err(DomainError::InvalidInput(format!("{} must be a date", field.label())));
            }
        }
        Ok(())
    }

    /// Case-insensitive substring match over name, email, phone and company
    pub fn matches_search(&self, needle_lower: &str) -> bool {
        if needle_lower.is_empty() {
            return true;
        }
        [&self.full_name, &self.email, &self.phone_number, &self.company_name]
            .iter()
            .any(|value| value.to_lowercase().contains(needle_lower))
    }
}

fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Editable lead fields, keyed by their form input `name`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadField {
    FullName,
    Email,
    PhoneNumber,
    LeadStatus,
    Gender,
    DateOfBirth,
    Address,
    InsuranceType,
    PolicyNumber,
    CoverageAmount,
    PreferredPlan,
    NextFollowUpDate,
    Source,
    CompanyName,
    Referrer,
    Notes,
}

impl LeadField {
    /// Every editable field in form order
    pub const ALL: &'static [LeadField] = &[
        LeadField::FullName,
        LeadField::Email,
        LeadField::PhoneNumber,
        LeadField::LeadStatus,
        LeadField::Gender,
        LeadField::DateOfBirth,
        LeadField::Address,
        LeadField::InsuranceType,
        LeadField::PolicyNumber,
        LeadField::CoverageAmount,
        LeadField::PreferredPlan,
        LeadField::NextFollowUpDate,
        LeadField::Source,
        LeadField::CompanyName,
        LeadField::Referrer,
        LeadField::Notes,
    ];

    pub const REQUIRED: &'static [LeadField] = &[
        LeadField::FullName,
        LeadField::Email,
        LeadField::PhoneNumber,
        LeadField::LeadStatus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadField::FullName => "full_name",
            LeadField::Email => "email",
            LeadField::PhoneNumber => "phone_number",
            LeadField::LeadStatus => "lead_status",
            LeadField::Gender => "gender",
            LeadField::DateOfBirth => "date_of_birth",
            LeadField::Address => "address",
            LeadField::InsuranceType => "insurance_type",
            LeadField::PolicyNumber => "policy_number",
            LeadField::CoverageAmount => "coverage_amount",
            LeadField::PreferredPlan => "preferred_plan",
            LeadField::NextFollowUpDate => "next_follow_up_date",
            LeadField::Source => "source",
            LeadField::CompanyName => "company_name",
            LeadField::Referrer => "referrer",
            LeadField::Notes => "notes",
        }
    }

    /// Human label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            LeadField::FullName => "Full Name",
            LeadField::Email => "Email",
            LeadField::PhoneNumber => "Phone Number",
            LeadField::LeadStatus => "Lead Status",
            LeadField::Gender => "Gender",
            LeadField::DateOfBirth => "Date of Birth",
            LeadField::Address => "Address",
            LeadField::InsuranceType => "Insurance Type",
            LeadField::PolicyNumber => "Policy Number",
            LeadField::CoverageAmount => "Coverage Amount",
            LeadField::PreferredPlan => "Preferred Plan",
            LeadField::NextFollowUpDate => "Next Follow-Up Date",
            LeadField::Source => "Source",
            LeadField::CompanyName => "Company Name",
            LeadField::Referrer => "Referrer",
            LeadField::Notes => "Notes",
        }
    }

    pub fn is_required(&self) -> bool {
        LeadField::REQUIRED.contains(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_lead() -> Lead {
        Lead {
            id: 1,
            full_name: "John Doe".to_string(),
            email: "j@x.com".to_string(),
            phone_number: "555".to_string(),
            lead_status: "New".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_optional_fields_default_to_empty() {
        let json = r#"{"id":1,"full_name":"John Doe","email":"j@x.com","phone_number":"555","lead_status":"New"}"#;
        let lead: Lead = serde_json::from_str(json).unwrap();
        assert_eq!(lead, valid_lead());
        assert_eq!(lead.company_name, "");
    }

    #[test]
    fn test_set_field_touches_only_that_field() {
        let mut lead = valid_lead();
        lead.set_field(LeadField::CompanyName, "Acme".to_string());
        assert_eq!(lead.company_name, "Acme");
        assert_eq!(lead.full_name, "John Doe");
        assert_eq!(lead.field(LeadField::CompanyName), "Acme");
    }

    #[test]
    fn test_field_names_match_json_keys() {
        let json = serde_json::to_value(valid_lead()).unwrap();
        for field in LeadField::ALL {
            assert!(json.get(field.as_str()).is_some(), "missing {}", field.as_str());
        }
    }

    #[test]
    fn test_validate_required_fields() {
        assert!(valid_lead().validate().is_ok());

        let mut lead = valid_lead();
        lead.phone_number = "   ".to_string();
        assert_eq!(
            lead.validate(),
            Err(DomainError::InvalidInput("Phone Number is required".to_string()))
        );
    }

    #[test]
    fn test_validate_email_and_dates() {
        let mut lead = valid_lead();
        lead.email = "not-an-email".to_string();
        assert!(lead.validate().is_err());

        let mut lead = valid_lead();
        lead.date_of_birth = "12/01/1990".to_string();
        assert!(lead.validate().is_err());

        lead.date_of_birth = "1990-01-12".to_string();
        assert!(lead.validate().is_ok());
    }

    #[test]
    fn test_matches_search_is_case_insensitive() {
        let mut lead = valid_lead();
        lead.company_name = "Acme Insurance".to_string();
        assert!(lead.matches_search("john"));
        assert!(lead.matches_search("acme"));
        assert!(lead.matches_search("55"));
        assert!(!lead.matches_search("zzz"));
        assert!(lead.matches_search(""));
    }
}
