use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Snapshot of the enquiry form's field values at the moment of submission.
///
/// Field names on the wire match the `name` attributes of the rendered inputs, which are also
/// the parameter names the mail template expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnquiryForm {
    #[serde(rename = "user_name", default)]
    pub name: String,
    #[serde(rename = "user_email", default)]
    pub email: String,
    #[serde(rename = "user_business", default)]
    pub business: String,
    #[serde(rename = "user_phone", default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

impl EnquiryForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Business => &self.business,
            FormField::Phone => &self.phone,
            FormField::Message => &self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL
            .iter()
            .all(|field| self.value(*field).is_empty())
    }

    /// Template parameters keyed by input name, blanks included.
    pub fn template_params(&self) -> BTreeMap<&'static str, String> {
        FormField::ALL
            .iter()
            .map(|field| (field.input_name(), self.value(*field).to_string()))
            .collect()
    }
}

/// The inputs rendered inside the enquiry form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Business,
    Phone,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::Business,
        FormField::Phone,
        FormField::Message,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Business => "business",
            FormField::Phone => "phone",
            FormField::Message => "message",
        }
    }

    pub fn input_name(self) -> &'static str {
        match self {
            FormField::Name => "user_name",
            FormField::Email => "user_email",
            FormField::Business => "user_business",
            FormField::Phone => "user_phone",
            FormField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name*",
            FormField::Email => "Email*",
            FormField::Business => "Business / Station Name",
            FormField::Phone => "Phone",
            FormField::Message => "Message*",
        }
    }

    /// HTML input type; `None` renders a textarea.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            FormField::Name | FormField::Business => Some("text"),
            FormField::Email => Some("email"),
            FormField::Phone => Some("tel"),
            FormField::Message => None,
        }
    }

    /// Required fields are enforced by the browser only.
    pub fn required(self) -> bool {
        matches!(self, FormField::Name | FormField::Email | FormField::Message)
    }

    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            FormField::Message => {
                Some("Tell us about your sites, locations, and what you'd like to achieve.")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_input_names() {
        let form: EnquiryForm = serde_json::from_value(serde_json::json!({
            "user_name": "Jo",
            "user_email": "jo@site.com",
            "message": "Interested in a quote",
        }))
        .expect("form parses");

        assert_eq!(form.name, "Jo");
        assert_eq!(form.email, "jo@site.com");
        assert_eq!(form.business, "");
        assert_eq!(form.phone, "");
        assert_eq!(form.message, "Interested in a quote");
    }

    #[test]
    fn template_params_cover_every_field() {
        let form = EnquiryForm {
            name: "Jo".to_string(),
            business: "Jo's Fuel".to_string(),
            ..EnquiryForm::default()
        };
        let params = form.template_params();

        assert_eq!(params.len(), 5);
        assert_eq!(params["user_name"], "Jo");
        assert_eq!(params["user_business"], "Jo's Fuel");
        assert_eq!(params["user_phone"], "");
    }

    #[test]
    fn only_contact_basics_are_required() {
        let required: Vec<_> = FormField::ALL
            .iter()
            .filter(|field| field.required())
            .map(|field| field.input_name())
            .collect();
        assert_eq!(required, vec!["user_name", "user_email", "message"]);
    }
}
