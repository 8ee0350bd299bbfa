//! Commit message templates.
//!
//! Templates use positional `%s` placeholders, filled in order with values
//! extracted from the arguments of the command being committed. `%%` stands
//! for a literal `%`.

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::{CoreError, CoreResult};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("%[s%]").expect("invalid regex"));

/// Computes one template value from a command's arguments.
pub type Extractor<A> = Box<dyn Fn(&A) -> String>;

/// Boxes a closure as an [`Extractor`].
pub fn extractor<A>(f: impl Fn(&A) -> String + 'static) -> Extractor<A> {
    Box::new(f)
}

/// Returns the number of `%s` placeholders in `template`.
pub fn placeholder_count(template: &str) -> usize {
    PLACEHOLDER
        .find_iter(template)
        .filter(|m| m.as_str() == "%s")
        .count()
}

/// Substitutes `values` into the `%s` placeholders of `template`, in order.
///
/// # Errors
///
/// Returns [`CoreError::Template`] if the number of values differs from the
/// number of placeholders.
pub fn format_positional<S: AsRef<str>>(template: &str, values: &[S]) -> CoreResult<String> {
    let expected = placeholder_count(template);
    if expected != values.len() {
        return Err(CoreError::Template {
            template: template.to_string(),
            expected,
            given: values.len(),
        });
    }
    Ok(substitute(template, values.iter().map(AsRef::as_ref)))
}

fn substitute<'v>(template: &str, mut values: impl Iterator<Item = &'v str>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            if &caps[0] == "%%" {
                "%".to_string()
            } else {
                values.next().unwrap_or_default().to_string()
            }
        })
        .into_owned()
}

/// A commit message template and the extractors that fill it.
pub struct MessageTemplate<A> {
    template: String,
    extractors: Vec<Extractor<A>>,
}

impl<A> MessageTemplate<A> {
    /// A message used verbatim; placeholders are left alone.
    pub fn fixed(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            extractors: Vec::new(),
        }
    }

    /// A message whose placeholders are filled by `extractors`, in order.
    ///
    /// With no extractors this is the same as [`MessageTemplate::fixed`].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Template`] if the extractor count differs from the
    /// placeholder count.
    pub fn with_extractors(
        template: impl Into<String>,
        extractors: Vec<Extractor<A>>,
    ) -> CoreResult<Self> {
        let template = template.into();
        let expected = placeholder_count(&template);
        if !extractors.is_empty() && expected != extractors.len() {
            return Err(CoreError::Template {
                template,
                expected,
                given: extractors.len(),
            });
        }
        Ok(Self {
            template,
            extractors,
        })
    }

    /// Returns the raw template.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Builds the message for one invocation.
    pub fn resolve(&self, args: &A) -> String {
        if self.extractors.is_empty() {
            return self.template.clone();
        }
        let values: Vec<String> = self.extractors.iter().map(|f| f(args)).collect();
        substitute(&self.template, values.iter().map(String::as_str))
    }
}

impl<A> fmt::Debug for MessageTemplate<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageTemplate")
            .field("template", &self.template)
            .field("extractors", &self.extractors.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AddArgs {
        module: String,
        index: String,
    }

    fn add_args() -> AddArgs {
        AddArgs {
            module: "pkg".to_string(),
            index: "index".to_string(),
        }
    }

    #[test]
    fn test_extractors_fill_in_order() {
        let template = MessageTemplate::with_extractors(
            "Added %s to %s",
            vec![
                extractor(|a: &AddArgs| a.module.clone()),
                extractor(|a: &AddArgs| a.index.clone()),
            ],
        )
        .unwrap();

        assert_eq!(template.resolve(&add_args()), "Added pkg to index");
    }

    #[test]
    fn test_extractor_order_matters() {
        let template = MessageTemplate::with_extractors(
            "Added %s to %s",
            vec![
                extractor(|a: &AddArgs| a.index.clone()),
                extractor(|a: &AddArgs| a.module.clone()),
            ],
        )
        .unwrap();

        assert_eq!(template.resolve(&add_args()), "Added index to pkg");
    }

    #[test]
    fn test_fixed_template_is_verbatim() {
        let template = MessageTemplate::<AddArgs>::fixed("100%s sure, 50%% done");
        assert_eq!(template.resolve(&add_args()), "100%s sure, 50%% done");
    }

    #[test]
    fn test_no_extractors_is_verbatim() {
        let template = MessageTemplate::<AddArgs>::with_extractors("Added %s", Vec::new()).unwrap();
        assert_eq!(template.resolve(&add_args()), "Added %s");
    }

    #[test]
    fn test_extractor_count_mismatch() {
        let result = MessageTemplate::with_extractors(
            "Added %s to %s",
            vec![extractor(|a: &AddArgs| a.module.clone())],
        );
        assert!(matches!(
            result,
            Err(CoreError::Template {
                expected: 2,
                given: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_escaped_percent() {
        let message = format_positional("Raised %s to 100%%", &["coverage"]).unwrap();
        assert_eq!(message, "Raised coverage to 100%");
    }

    #[test]
    fn test_placeholder_count_ignores_escapes() {
        assert_eq!(placeholder_count("%s and %s"), 2);
        assert_eq!(placeholder_count("100%% of %s"), 1);
        assert_eq!(placeholder_count("%%s"), 0);
        assert_eq!(placeholder_count("no placeholders"), 0);
    }

    #[test]
    fn test_format_positional_rejects_extra_values() {
        let result = format_positional("Added %s", &["a", "b"]);
        assert!(matches!(result, Err(CoreError::Template { given: 2, .. })));
    }

    #[test]
    fn test_value_with_percent_is_not_reexpanded() {
        let message = format_positional("Set %s", &["%s"]).unwrap();
        assert_eq!(message, "Set %s");
    }
}
