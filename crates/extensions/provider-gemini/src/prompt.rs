//! Prompt construction.

use formfill_protocols::{FieldDescriptor, GenerationError};

/// Instruction asking for one generated value per field, in field order.
pub fn build_prompt(fields: &[FieldDescriptor]) -> Result<String, GenerationError> {
    let fields_json = serde_json::to_string_pretty(fields)
        .map_err(|e| GenerationError::InvalidRequest(format!("Failed to serialize fields: {}", e)))?;

    Ok(format!(
        r#"Generate fake but realistic data for the following form fields. For each field, provide ONLY the value, not explanations.

Format your response as a valid JSON array with one object per field, where each object has a 'value' property containing the generated data.

Here are the fields:
{fields_json}

For each field, consider:
1. If the field appears to collect personal information (name, email, phone), generate believable fake data
2. If it's an address field, generate a plausible fake address
3. For dates, provide dates in the correct format
4. For selections, suggest a plausible option

Return ONLY the JSON array with no explanation. Example:
[
  {{"value": "John Smith"}},
  {{"value": "john.smith@example.com"}},
  {{"value": "555-123-4567"}}
]"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use formfill_protocols::FieldTag;

    #[test]
    fn test_prompt_embeds_fields() {
        let fields = vec![
            FieldDescriptor::new(FieldTag::Input, "email")
                .with_id("e1")
                .with_label("Email"),
            FieldDescriptor::new(FieldTag::Select, "select-one").with_name("country"),
        ];
        let prompt = build_prompt(&fields).unwrap();

        assert!(prompt.starts_with("Generate fake but realistic data"));
        assert!(prompt.contains(&serde_json::to_string_pretty(&fields).unwrap()));
        assert!(prompt.contains("\"tagName\": \"select\""));
        assert!(prompt.contains("4. For selections, suggest a plausible option"));
        assert!(prompt.contains(r#"{"value": "john.smith@example.com"}"#));
    }

    #[test]
    fn test_prompt_with_no_fields() {
        let prompt = build_prompt(&[]).unwrap();
        assert!(prompt.contains("Here are the fields:\n[]"));
    }
}
