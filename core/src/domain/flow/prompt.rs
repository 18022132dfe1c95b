use crate::domain::common::entities::app_errors::CoreError;

/// Instruction text with `{{name}}` placeholders.
///
/// Rendering is plain substitution. Values are inserted verbatim and are never
/// scanned for further placeholders, so user text containing `{{...}}` is inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    name: &'static str,
    source: &'static str,
}

impl PromptTemplate {
    pub const fn new(name: &'static str, source: &'static str) -> Self {
        Self { name, source }
    }

    pub fn render(&self, values: &[(&str, &str)]) -> Result<String, CoreError> {
        let mut rendered = String::with_capacity(self.source.len());
        let mut rest = self.source;

        while let Some(start) = rest.find("{{") {
            rendered.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];
            let end = after_open.find("}}").ok_or_else(|| {
                CoreError::TemplateError(format!("{}: unterminated placeholder", self.name))
            })?;

            let key = after_open[..end].trim();
            let value = values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| *value)
                .ok_or_else(|| {
                    CoreError::TemplateError(format!("{}: no value for '{key}'", self.name))
                })?;

            rendered.push_str(value);
            rest = &after_open[end + 2..];
        }

        rendered.push_str(rest);
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREETING: PromptTemplate =
        PromptTemplate::new("greeting", "Hello {{ name }}, goal: {{goal}}.");

    #[test]
    fn interpolates_every_placeholder() {
        let out = GREETING
            .render(&[("name", "Alex"), ("goal", "build muscle")])
            .unwrap();
        assert_eq!(out, "Hello Alex, goal: build muscle.");
    }

    #[test]
    fn missing_value_is_an_error() {
        let err = GREETING.render(&[("name", "Alex")]).unwrap_err();
        assert!(matches!(err, CoreError::TemplateError(msg) if msg.contains("goal")));
    }

    #[test]
    fn inserted_values_are_not_expanded() {
        let out = GREETING
            .render(&[("name", "{{goal}}"), ("goal", "x")])
            .unwrap();
        assert_eq!(out, "Hello {{goal}}, goal: x.");
    }

    #[test]
    fn unterminated_placeholder_is_an_error() {
        let broken = PromptTemplate::new("broken", "Hi {{name");
        assert!(broken.render(&[("name", "a")]).is_err());
    }
}
