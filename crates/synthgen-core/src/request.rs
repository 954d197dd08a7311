use serde::{Deserialize, Serialize};

use crate::attribute::AttributeList;

/// Form field carrying the combined prompt text.
pub const PROMPT_FIELD: &str = "str";
/// Form field carrying the raw record count.
pub const COUNT_FIELD: &str = "num";

/// Submission built from the authoring form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub domain_label: String,
    pub attribute_descriptor: String,
    pub record_count: i64,
    pub seed_label: String,
}

impl GenerationRequest {
    /// Builds a request. Pure: the descriptor is derived fresh on every call,
    /// and neither the record count nor the seed is validated or normalised.
    pub fn build(
        domain_label: &str,
        attributes: &AttributeList,
        record_count: i64,
        seed_label: &str,
    ) -> Self {
        Self {
            domain_label: domain_label.to_string(),
            attribute_descriptor: describe_attributes(attributes),
            record_count,
            seed_label: seed_label.to_string(),
        }
    }

    /// Human-readable prompt sent under the `str` field.
    pub fn prompt(&self) -> String {
        format!(
            "Domain: {}, Attributes: {}, Records: {}, Seed: {}",
            self.domain_label, self.attribute_descriptor, self.record_count, self.seed_label
        )
    }

    /// Multipart form fields in wire order.
    pub fn form_fields(&self) -> [(&'static str, String); 2] {
        [
            (PROMPT_FIELD, self.prompt()),
            (COUNT_FIELD, self.record_count.to_string()),
        ]
    }
}

/// Renders `name (kind), name (kind), ...`; empty for an empty list.
pub fn describe_attributes(attributes: &AttributeList) -> String {
    attributes
        .iter()
        .map(|attribute| attribute.describe())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::{Attribute, AttributeKind};

    fn employee_attributes() -> AttributeList {
        [
            Attribute::new("id", AttributeKind::Number),
            Attribute::new("hired", AttributeKind::Date),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn builds_employee_prompt() {
        let request = GenerationRequest::build("Employee", &employee_attributes(), 3, "");
        assert_eq!(request.attribute_descriptor, "id (number), hired (date)");
        assert_eq!(
            request.prompt(),
            "Domain: Employee, Attributes: id (number), hired (date), Records: 3, Seed: "
        );
        let fields = request.form_fields();
        assert_eq!(fields[0].0, "str");
        assert_eq!(fields[1], ("num", "3".to_string()));
    }

    #[test]
    fn build_is_deterministic() {
        let attributes = employee_attributes();
        let a = GenerationRequest::build("Employee", &attributes, 10, "42");
        let b = GenerationRequest::build("Employee", &attributes, 10, "42");
        assert_eq!(a, b);
        assert_eq!(a.form_fields(), b.form_fields());
    }

    #[test]
    fn empty_list_yields_empty_descriptor() {
        let request = GenerationRequest::build("Empty", &AttributeList::new(), 1, "s");
        assert_eq!(request.attribute_descriptor, "");
        assert_eq!(request.prompt(), "Domain: Empty, Attributes: , Records: 1, Seed: s");
    }

    #[test]
    fn negative_count_passes_through_unclamped() {
        // Known input-validation gap: the builder does not clamp counts.
        let request = GenerationRequest::build("Employee", &employee_attributes(), -5, "");
        assert_eq!(request.record_count, -5);
        assert!(request.prompt().contains("Records: -5,"));
        assert_eq!(request.form_fields()[1].1, "-5");
    }
}
