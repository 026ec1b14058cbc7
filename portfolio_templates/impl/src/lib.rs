use std::sync::Arc;

use portfolio_di::Build;
use portfolio_templates_contracts::{Template, TemplateService, BASE_TEMPLATE, TEMPLATES};
use tera::Tera;
use tracing::trace;

#[derive(Debug, Clone, Build)]
pub struct TemplateServiceImpl {
    #[state]
    state: State,
}

#[derive(Debug, Clone)]
struct State(Arc<Tera>);

impl Default for State {
    fn default() -> Self {
        let mut tera = Tera::default();

        // values are escaped before they are passed to a template
        tera.autoescape_on(Vec::new());

        tera.add_raw_templates(
            std::iter::once(("base", BASE_TEMPLATE)).chain(TEMPLATES.iter().copied()),
        )
        .unwrap();

        Self(tera.into())
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template>(&self, template: &T) -> anyhow::Result<String> {
        trace!(template = T::NAME, "rendering template");
        let context = tera::Context::from_serialize(template)?;
        self.state.0.render(T::NAME, &context).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use portfolio_templates_contracts::{ContactNotificationTemplate, HtmlEscaped};

    use super::*;

    fn sut() -> TemplateServiceImpl {
        TemplateServiceImpl {
            state: Default::default(),
        }
    }

    fn template() -> ContactNotificationTemplate {
        ContactNotificationTemplate {
            name: HtmlEscaped::new("山田太郎"),
            email: HtmlEscaped::new("test@example.com"),
            company: None,
            deadline: None,
            budget: None,
            message: HtmlEscaped::new("お問い合わせ内容です。"),
        }
    }

    #[test]
    fn contact_notification() {
        // Act
        let result = sut().render(&template()).unwrap();

        // Assert
        assert!(result.starts_with("<!DOCTYPE html>"));
        assert!(result.contains("新しいお問い合わせ"));
        assert!(result.contains("<div class=\"field-value\">山田太郎</div>"));
        assert!(result.contains("<div class=\"field-value\">test@example.com</div>"));
        assert!(result.contains("お問い合わせ内容です。"));
        assert!(result.contains("ポートフォリオサイトのお問い合わせフォーム"));
    }

    #[test]
    fn contact_notification_without_optional_fields() {
        // Act
        let result = sut().render(&template()).unwrap();

        // Assert
        for label in ["会社名", "ご希望納期", "予算感"] {
            assert!(!result.contains(label), "unexpected section {label}");
        }
    }

    #[test]
    fn contact_notification_with_optional_fields() {
        // Arrange
        let template = ContactNotificationTemplate {
            company: Some(HtmlEscaped::new("株式会社サンプル")),
            deadline: Some(HtmlEscaped::new("1ヶ月以内")),
            budget: Some(HtmlEscaped::new("10〜30万円")),
            ..template()
        };

        // Act
        let result = sut().render(&template).unwrap();

        // Assert
        for text in [
            "会社名",
            "株式会社サンプル",
            "ご希望納期",
            "1ヶ月以内",
            "予算感",
            "10〜30万円",
        ] {
            assert!(result.contains(text), "missing {text}");
        }
    }

    #[test]
    fn escaped_values_are_not_escaped_twice() {
        // Arrange
        let template = ContactNotificationTemplate {
            message: HtmlEscaped::new("<b>bold</b> & \"quoted\""),
            ..template()
        };

        // Act
        let result = sut().render(&template).unwrap();

        // Assert
        assert!(result.contains("&lt;b&gt;bold&lt;/b&gt; &amp; &quot;quoted&quot;"));
        assert!(!result.contains("<b>bold</b>"));
        assert!(!result.contains("&amp;lt;"));
    }
}
