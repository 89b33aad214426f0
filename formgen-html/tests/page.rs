//! Rendering of the form builder page across the widget lifecycle.

use formgen::{FormController, RecordingSink};
use formgen_html::{DEFAULT_HEADING, HtmlOptions, form_html, page_html};
use pretty_assertions::assert_eq;

const CONTACT: &str = r#"{
    "formTitle": "Contact <us>",
    "formDescription": "We reply within a day",
    "fields": [
        { "id": "name", "type": "text", "label": "Name", "required": true },
        { "id": "topic", "type": "select", "label": "Topic", "required": false,
          "options": [{ "value": "sales", "label": "Sales" }, { "value": "support", "label": "Support" }] },
        { "id": "upload", "type": "file", "label": "Attachment", "required": false },
        { "id": "message", "type": "textarea", "label": "Message", "placeholder": "Say hi", "required": true }
    ]
}"#;

fn fragment() -> HtmlOptions {
    HtmlOptions::new().full_document(false)
}

#[test]
fn idle_page_has_only_the_definition_box() {
    let form = FormController::new(RecordingSink::new());
    let html = page_html(form.state(), &fragment());

    assert!(html.contains(&format!("<h1 class=\"formgen-heading\">{DEFAULT_HEADING}</h1>")));
    assert!(html.contains("placeholder=\"Paste JSON here...\""));
    assert!(html.contains("rows=\"10\""));
    assert!(html.contains(">Generate Form</button>"));
    assert!(!html.contains("<form"));
    assert!(!html.contains("formgen-notice"));
    assert!(!html.contains("formgen-success"));
}

#[test]
fn failed_load_shows_notice_and_keeps_typed_text() {
    let mut form = FormController::new(RecordingSink::new());
    let _ = form.load("{not json");

    let html = page_html(form.state(), &fragment());

    assert!(html.contains("<div class=\"formgen-notice\" role=\"alert\">Invalid JSON format"));
    assert!(html.contains(">\n{not json</textarea>"));
    assert!(!html.contains("<form"));
}

#[test]
fn generated_form_lists_recognized_fields_in_order() {
    let mut form = FormController::new(RecordingSink::new());
    form.load(CONTACT).unwrap();

    let html = page_html(form.state(), &fragment());

    assert!(html.contains("<h2 class=\"formgen-title\">Contact &lt;us&gt;</h2>"));
    assert!(html.contains("<p class=\"formgen-description\">We reply within a day</p>"));
    assert!(!html.contains("Attachment"));

    let name = html.find("id=\"name\"").unwrap();
    let topic = html.find("id=\"topic\"").unwrap();
    let message = html.find("id=\"message\"").unwrap();
    assert!(name < topic && topic < message);

    assert_eq!(html.matches("class=\"formgen-field\"").count(), 3);
    assert!(html.contains(
        "<textarea id=\"message\" name=\"message\" class=\"formgen-textarea\" placeholder=\"Say hi\" required>\n</textarea>"
    ));
    assert!(html.contains("<button type=\"submit\" class=\"formgen-submit\">Submit</button>"));
}

#[test]
fn submitted_page_shows_success_and_values() {
    let mut form = FormController::new(RecordingSink::new());
    form.load(CONTACT).unwrap();
    form.input_change("name", "Grace");
    form.input_change("topic", "support");
    form.input_change("message", "Hello & goodbye");
    assert!(form.submit().unwrap().is_submitted());

    let html = page_html(form.state(), &fragment());

    assert!(html.contains("<div class=\"formgen-success\">Form submitted successfully!</div>"));
    assert!(html.contains("value=\"Grace\""));
    assert!(html.contains("<option value=\"support\" selected>Support</option>"));
    assert!(html.contains(">\nHello &amp; goodbye</textarea>"));
}

#[test]
fn form_html_matches_form_in_page() {
    let mut form = FormController::new(RecordingSink::new());
    form.load(CONTACT).unwrap();
    form.input_change("name", "Grace");

    let schema = form.schema().unwrap();
    let standalone = form_html(schema, form.values(), &fragment());
    let page = page_html(form.state(), &fragment());

    let unindented = |html: &str| {
        html.lines()
            .map(str::trim_start)
            .collect::<Vec<_>>()
            .join("\n")
    };
    assert!(unindented(&page).contains(&unindented(&standalone)));
}

#[test]
fn class_prefix_is_applied_everywhere() {
    let mut form = FormController::new(RecordingSink::new());
    form.load(CONTACT).unwrap();

    let html = page_html(
        form.state(),
        &HtmlOptions::new().with_class_prefix("reg"),
    );

    assert!(html.contains(".reg-form {"));
    assert!(html.contains("class=\"reg-widget\""));
    assert!(html.contains("class=\"reg-input\""));
    assert!(!html.contains("formgen-"));
}

#[test]
fn textarea_keeps_leading_newline() {
    let mut form = FormController::new(RecordingSink::new());
    form.load(CONTACT).unwrap();
    form.input_change("message", "\nsecond line");
    form.edit_source(format!("\n{CONTACT}"));

    let schema = form.schema().unwrap();
    let standalone = form_html(schema, form.values(), &fragment());
    assert!(standalone.contains("required>\n\nsecond line</textarea>"));

    let page = page_html(form.state(), &fragment());
    assert!(page.contains("placeholder=\"Paste JSON here...\">\n\n{"));
}
