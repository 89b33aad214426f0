//! HTML generator implementation.

use formgen::{FormNode, FormSchema, FormState, FormValues, render};
use tracing::debug;

/// Heading of the widget page unless configured otherwise.
pub const DEFAULT_HEADING: &str = "Dynamic Registration Form";

/// Options for HTML generation.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Title for the HTML document.
    pub title: Option<String>,
    /// Heading above the definition box of the widget page.
    pub heading: String,
    /// Whether to include default CSS styling.
    pub include_styles: bool,
    /// Whether to generate a complete HTML document (with html/head/body tags).
    pub full_document: bool,
    /// Custom CSS class prefix for all generated elements.
    pub class_prefix: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            title: None,
            heading: DEFAULT_HEADING.to_string(),
            include_styles: true,
            full_document: true,
            class_prefix: "formgen".to_string(),
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the widget heading.
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = heading.into();
        self
    }

    /// Enable or disable default CSS styling.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Generate a complete HTML document or just the fragment.
    pub fn full_document(mut self, full: bool) -> Self {
        self.full_document = full;
        self
    }

    /// Set a custom CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }
}

/// Generate the HTML form for a schema, bound to the given values.
///
/// Without `full_document` this is just the `<form>` element.
pub fn form_html(schema: &FormSchema, values: &FormValues, options: &HtmlOptions) -> String {
    let body = generate_form(schema, &render(schema, values), &options.class_prefix, 0);
    wrap_document(body, options)
}

/// Generate the whole widget for a state: heading, definition box,
/// generate button, notice, generated form and success message.
pub fn page_html(state: &FormState, options: &HtmlOptions) -> String {
    let prefix = &options.class_prefix;
    let mut html = String::new();

    html.push_str(&format!("<div class=\"{prefix}-widget\">\n"));
    html.push_str(&format!(
        "  <h1 class=\"{prefix}-heading\">{}</h1>\n",
        escape_html(&options.heading)
    ));
    // The HTML parser drops one newline directly after `<textarea>`.
    html.push_str(&format!(
        "  <textarea class=\"{prefix}-source\" name=\"source\" rows=\"10\" placeholder=\"Paste JSON here...\">\n{}</textarea>\n",
        escape_html(state.source())
    ));
    html.push_str(&format!(
        "  <button type=\"button\" class=\"{prefix}-generate\">Generate Form</button>\n"
    ));

    if let Some(notice) = state.notice() {
        html.push_str(&format!(
            "  <div class=\"{prefix}-notice\" role=\"alert\">{}</div>\n",
            escape_html(notice)
        ));
    }

    if let Some(schema) = state.schema() {
        html.push_str(&generate_form(schema, &state.view(), prefix, 1));
    }

    if let Some(success) = state.success_message() {
        html.push_str(&format!(
            "  <div class=\"{prefix}-success\">{}</div>\n",
            escape_html(success)
        ));
    }

    html.push_str("</div>\n");

    debug!(phase = ?state.phase(), bytes = html.len(), "rendered widget page");
    wrap_document(html, options)
}

fn wrap_document(body: String, options: &HtmlOptions) -> String {
    if !options.full_document {
        return body;
    }

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    html.push_str(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );

    if let Some(title) = &options.title {
        html.push_str(&format!("  <title>{}</title>\n", escape_html(title)));
    }

    if options.include_styles {
        html.push_str(&generate_styles(&options.class_prefix));
    }

    html.push_str("</head>\n<body>\n");
    html.push_str(&body);
    html.push_str("</body>\n</html>\n");
    html
}

/// Generate the `<form>` element with title, description and controls.
fn generate_form(schema: &FormSchema, nodes: &[FormNode], prefix: &str, indent: usize) -> String {
    let ind = "  ".repeat(indent);
    let mut html = String::new();

    html.push_str(&format!("{ind}<form class=\"{prefix}-form\">\n"));
    html.push_str(&format!(
        "{ind}  <h2 class=\"{prefix}-title\">{}</h2>\n",
        escape_html(&schema.title)
    ));
    html.push_str(&format!(
        "{ind}  <p class=\"{prefix}-description\">{}</p>\n",
        escape_html(&schema.description)
    ));

    for node in nodes {
        html.push_str(&generate_node(node, prefix, indent + 1));
    }

    html.push_str(&format!(
        "{ind}  <button type=\"submit\" class=\"{prefix}-submit\">Submit</button>\n"
    ));
    html.push_str(&format!("{ind}</form>\n"));
    html
}

/// Generate HTML for a single control.
fn generate_node(node: &FormNode, prefix: &str, indent: usize) -> String {
    let ind = "  ".repeat(indent);
    let mut html = String::new();

    let field_id = escape_html(node.id().as_str());
    let label = escape_html(node.label());
    let required = if node.is_required() { " required" } else { "" };

    html.push_str(&format!("{ind}<div class=\"{prefix}-field\">\n"));

    match node {
        FormNode::Input {
            input_type,
            placeholder,
            value,
            ..
        } => {
            html.push_str(&format!(
                "{ind}  <label for=\"{field_id}\">{label}</label>\n"
            ));
            html.push_str(&format!(
                "{ind}  <input type=\"{}\" id=\"{field_id}\" name=\"{field_id}\" class=\"{prefix}-input\"{}{required} value=\"{}\">\n",
                input_type.as_str(),
                placeholder_attr(placeholder.as_deref()),
                escape_html(value)
            ));
        }

        FormNode::TextArea {
            placeholder, value, ..
        } => {
            html.push_str(&format!(
                "{ind}  <label for=\"{field_id}\">{label}</label>\n"
            ));
            html.push_str(&format!(
                "{ind}  <textarea id=\"{field_id}\" name=\"{field_id}\" class=\"{prefix}-textarea\"{}{required}>\n{}</textarea>\n",
                placeholder_attr(placeholder.as_deref()),
                escape_html(value)
            ));
        }

        FormNode::Select {
            options, selected, ..
        } => {
            html.push_str(&format!(
                "{ind}  <label for=\"{field_id}\">{label}</label>\n"
            ));
            html.push_str(&format!(
                "{ind}  <select id=\"{field_id}\" name=\"{field_id}\" class=\"{prefix}-select\"{required}>\n"
            ));
            for (idx, option) in options.iter().enumerate() {
                let is_selected = if *selected == Some(idx) { " selected" } else { "" };
                html.push_str(&format!(
                    "{ind}    <option value=\"{}\"{is_selected}>{}</option>\n",
                    escape_html(&option.value),
                    escape_html(&option.label)
                ));
            }
            html.push_str(&format!("{ind}  </select>\n"));
        }

        FormNode::RadioGroup { choices, .. } => {
            html.push_str(&format!(
                "{ind}  <span class=\"{prefix}-label\">{label}</span>\n"
            ));
            html.push_str(&format!("{ind}  <div class=\"{prefix}-radio-group\">\n"));
            for choice in choices {
                let checked = if choice.checked { " checked" } else { "" };
                html.push_str(&format!(
                    "{ind}    <label class=\"{prefix}-radio-option\"><input type=\"radio\" name=\"{field_id}\" value=\"{}\"{required}{checked}> {}</label>\n",
                    escape_html(&choice.value),
                    escape_html(&choice.label)
                ));
            }
            html.push_str(&format!("{ind}  </div>\n"));
        }
    }

    html.push_str(&format!("{ind}</div>\n"));
    html
}

fn placeholder_attr(placeholder: Option<&str>) -> String {
    placeholder
        .map(|p| format!(" placeholder=\"{}\"", escape_html(p)))
        .unwrap_or_default()
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate default CSS styles.
fn generate_styles(prefix: &str) -> String {
    format!(
        r#"  <style>
    .{prefix}-widget {{
      max-width: 600px;
      margin: 2rem auto;
      padding: 1rem;
      font-family: sans-serif;
    }}
    .{prefix}-heading {{
      font-size: 1.25rem;
      font-weight: bold;
      margin-bottom: 1rem;
    }}
    .{prefix}-source, .{prefix}-input, .{prefix}-textarea, .{prefix}-select {{
      width: 100%;
      padding: 0.5rem;
      border: 1px solid #d1d5db;
      border-radius: 0.25rem;
      box-sizing: border-box;
    }}
    .{prefix}-generate {{
      margin-top: 0.5rem;
      padding: 0.5rem;
      background: #3b82f6;
      color: white;
      border: none;
      border-radius: 0.25rem;
    }}
    .{prefix}-notice {{
      margin-top: 1rem;
      color: #b91c1c;
    }}
    .{prefix}-form {{
      margin-top: 1.5rem;
    }}
    .{prefix}-title {{
      font-size: 1.125rem;
      font-weight: 600;
      margin-bottom: 1rem;
    }}
    .{prefix}-field {{
      margin-bottom: 1rem;
    }}
    .{prefix}-field > label, .{prefix}-label {{
      display: block;
      font-size: 0.875rem;
      font-weight: 500;
      margin-bottom: 0.5rem;
    }}
    .{prefix}-radio-option {{
      margin-right: 1rem;
    }}
    .{prefix}-submit {{
      padding: 0.5rem;
      background: #22c55e;
      color: white;
      border: none;
      border-radius: 0.25rem;
    }}
    .{prefix}-success {{
      margin-top: 1rem;
      color: #16a34a;
      font-weight: 600;
    }}
  </style>
"#
    )
}
