//! Email template system
//!
//! Simple `{{variable_name}}` substitution over static templates. Values are
//! HTML-entity escaped at render time, so an arbitrary code string can never
//! inject markup into the message body.

use std::collections::HashMap;

/// How long a verification code stays valid, as rendered into the notice.
pub const CODE_TTL_MINUTES: u32 = 5;

/// Available email templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailTemplate {
    /// Verification-code email (HTML only)
    VerificationCode,
}

impl EmailTemplate {
    /// Get the subject line for this template
    pub fn subject(&self) -> &'static str {
        match self {
            Self::VerificationCode => "Your verification code",
        }
    }

    /// Get the HTML body template
    pub fn html_body(&self) -> &'static str {
        match self {
            Self::VerificationCode => VERIFICATION_CODE_TEMPLATE,
        }
    }
}

// A substitution token: `{{name}}` with a word-character name.
lazy_static::lazy_static! {
    static ref VARIABLE_TOKEN: regex::Regex = regex::Regex::new(r"\{\{(\w+)\}\}").unwrap();
}

/// Template rendering engine with escaped variable substitution
#[derive(Debug, Default)]
pub struct TemplateEngine {
    variables: HashMap<String, String>,
}

impl TemplateEngine {
    /// Create a new template engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable value (escaped when substituted)
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Render a template string, replacing `{{variable}}` with escaped values
    ///
    /// A single pass resolves every token, so a substituted value that itself
    /// looks like a placeholder stays literal. Unknown placeholders are left
    /// as-is.
    pub fn render(&self, template: &str) -> String {
        VARIABLE_TOKEN
            .replace_all(template, |caps: &regex::Captures| {
                match self.variables.get(&caps[1]) {
                    Some(value) => escape_html(value),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }

    /// Render a complete email template
    pub fn render_template(&self, template: EmailTemplate) -> RenderedEmail {
        RenderedEmail {
            subject: self.render(template.subject()),
            html_body: self.render(template.html_body()),
        }
    }
}

/// Rendered email with all variables substituted
#[derive(Debug, Clone)]
pub struct RenderedEmail {
    pub subject: String,
    pub html_body: String,
}

/// Escape the five HTML-significant characters for text-node interpolation.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// ============================================================================
// Email Templates
// ============================================================================

const VERIFICATION_CODE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Verification Code</title>
    <style>
        body { margin: 0; padding: 0; font-family: 'Segoe UI', Roboto, Helvetica, Arial, sans-serif; background: linear-gradient(135deg, #f7f6ec 0%, #e3e9f3 100%); }
        .container { max-width: 420px; margin: 48px auto 32px auto; padding: 32px 28px 28px 28px; background: rgba(255,255,255,0.92); border-radius: 18px; box-shadow: 0 6px 32px rgba(120,120,120,0.10); }
        .header h2 { margin-top: 0; color: #4a5a7a; text-align: center; letter-spacing: 2px; font-weight: 600; }
        .greeting { font-size: 15px; color: #4a5a7a; text-align: center; margin-bottom: 32px; }
        .code-wrap { text-align: center; margin: 32px 0; }
        .code-badge { display: inline-block; background: #f7f6ec; color: #3b6ca8; font-size: 32px; letter-spacing: 8px; font-weight: bold; padding: 16px 36px; border-radius: 12px; border: 2px dashed #b3c6ff; box-shadow: 0 2px 8px #e3e9f3; }
        .notice { font-size: 14px; color: #6b7a99; text-align: center; }
        .footer { margin-top: 32px; text-align: center; color: #b0b0b0; font-size: 12px; }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h2>{{app_name}} verification code</h2>
        </div>
        <p class="greeting">
            Welcome to {{app_name}}!<br>
            Your email verification code is:
        </p>
        <div class="code-wrap">
            <span class="code-badge">{{code}}</span>
        </div>
        <p class="notice">
            The code contains digits and uppercase letters; letter case matters when you enter it.<br>
            It expires in {{expires_in_minutes}} minutes. Do not share it with anyone.
        </p>
        <div class="footer">
            This is an automated message. Please do not reply.
        </div>
    </div>
</body>
</html>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_template_engine_basic() {
        let mut engine = TemplateEngine::new();
        engine.set("name", "John");

        let result = engine.render("Hello, {{name}}!");
        assert_eq!(result, "Hello, John!");
    }

    #[test]
    fn test_template_engine_multiple_vars() {
        let mut engine = TemplateEngine::new();
        engine.set("first", "John");
        engine.set("last", "Doe");

        let result = engine.render("Hello, {{first}} {{last}}!");
        assert_eq!(result, "Hello, John Doe!");
    }

    #[test]
    fn test_template_engine_missing_var() {
        let engine = TemplateEngine::new();
        let result = engine.render("Hello, {{name}}!");
        // Missing variables are left as-is
        assert_eq!(result, "Hello, {{name}}!");
    }

    #[test]
    fn test_template_engine_repeated_var() {
        let mut engine = TemplateEngine::new();
        engine.set("name", "Alice");

        let result = engine.render("{{name}} loves {{name}}");
        assert_eq!(result, "Alice loves Alice");
    }

    #[test]
    fn test_value_resembling_placeholder_stays_literal() {
        let mut engine = TemplateEngine::new();
        engine.set("name", "Alice");
        engine.set("greeting", "{{name}}");

        let result = engine.render("{{greeting}}, {{name}}!");
        assert_eq!(result, "{{name}}, Alice!");
    }

    #[test]
    fn test_code_resembling_placeholder_survives_template_render() {
        let mut engine = TemplateEngine::new();
        engine
            .set("app_name", "NestChat")
            .set("code", "{{app_name}}")
            .set("expires_in_minutes", CODE_TTL_MINUTES.to_string());

        let rendered = engine.render_template(EmailTemplate::VerificationCode);

        assert!(rendered
            .html_body
            .contains(r#"<span class="code-badge">{{app_name}}</span>"#));
        // The only token text left is the badge's literal value
        assert_eq!(rendered.html_body.matches("{{app_name}}").count(), 1);
    }

    #[test]
    fn test_render_escapes_values() {
        let mut engine = TemplateEngine::new();
        engine.set("code", "<script>alert('x')&\"</script>");

        let result = engine.render("<span>{{code}}</span>");
        assert_eq!(
            result,
            "<span>&lt;script&gt;alert(&#39;x&#39;)&amp;&quot;&lt;/script&gt;</span>"
        );
    }

    #[test]
    fn test_render_leaves_template_markup_alone() {
        let mut engine = TemplateEngine::new();
        engine.set("code", "AB12CD");

        let result = engine.render("<b>{{code}}</b>");
        assert_eq!(result, "<b>AB12CD</b>");
    }

    #[test]
    fn test_verification_code_template() {
        let mut engine = TemplateEngine::new();
        engine
            .set("app_name", "NestChat")
            .set("code", "AB12CD")
            .set("expires_in_minutes", CODE_TTL_MINUTES.to_string());

        let rendered = engine.render_template(EmailTemplate::VerificationCode);

        assert_eq!(rendered.subject, "Your verification code");
        assert!(rendered.html_body.contains("Welcome to NestChat!"));
        assert!(rendered
            .html_body
            .contains(r#"<span class="code-badge">AB12CD</span>"#));
        assert!(rendered.html_body.contains("It expires in 5 minutes."));
    }

    #[test]
    fn test_verification_code_appears_exactly_once() {
        let mut engine = TemplateEngine::new();
        engine
            .set("app_name", "NestChat")
            .set("code", "ZZTOKEN99")
            .set("expires_in_minutes", CODE_TTL_MINUTES.to_string());

        let rendered = engine.render_template(EmailTemplate::VerificationCode);
        assert_eq!(rendered.html_body.matches("ZZTOKEN99").count(), 1);
    }

    #[test]
    fn test_verification_template_has_single_code_placeholder() {
        assert_eq!(
            EmailTemplate::VerificationCode
                .html_body()
                .matches("{{code}}")
                .count(),
            1
        );
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(escape_html("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
        assert_eq!(escape_html(r#"a"b'c"#), "a&quot;b&#39;c");
    }
}
