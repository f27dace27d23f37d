use crate::core::messages::Messages;
use crate::core::{CheckReport, OutcomeStatus};
use std::fmt::Write;

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn page(messages: &Messages, title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; }}
label {{ display: block; margin-top: 1rem; }}
input {{ width: 100%; padding: .4rem; }}
button {{ margin-top: 1rem; padding: .5rem 1rem; }}
.status {{ padding: 1rem; border-radius: .3rem; }}
.status-error {{ background: #fde2e2; }}
.status-not_found {{ background: #fff3cd; }}
.status-no_interaction {{ background: #e2f5e2; }}
.status-interaction {{ background: #ffe5cc; }}
footer {{ margin-top: 2rem; font-size: .8rem; color: #666; }}
</style>
</head>
<body>
<h1>{title}</h1>
{body}
<footer>{disclaimer}</footer>
</body>
</html>
"#,
        lang = messages.locale().as_str(),
        title = escape_html(title),
        body = body,
        disclaimer = escape_html(messages.form_labels().disclaimer),
    )
}

fn form(messages: &Messages, drug_a: &str, drug_b: &str) -> String {
    let labels = messages.form_labels();
    format!(
        r#"<form method="post" action="/check">
<label for="drug_a">{label_a}</label>
<input id="drug_a" name="drug_a" value="{drug_a}" required>
<label for="drug_b">{label_b}</label>
<input id="drug_b" name="drug_b" value="{drug_b}" required>
<button type="submit">{submit}</button>
</form>"#,
        label_a = escape_html(labels.drug_a),
        label_b = escape_html(labels.drug_b),
        drug_a = escape_html(drug_a),
        drug_b = escape_html(drug_b),
        submit = escape_html(labels.submit),
    )
}

pub fn render_index(messages: &Messages, title: &str) -> String {
    page(messages, title, &form(messages, "", ""))
}

pub fn render_result(messages: &Messages, title: &str, report: &CheckReport) -> String {
    let labels = messages.form_labels();
    let mut body = String::new();

    let _ = write!(
        body,
        r#"<section class="status status-{status}">
<h2>{heading}</h2>
<p><strong>{drug_a}</strong> + <strong>{drug_b}</strong></p>
<p class="message">{message}</p>"#,
        status = report.status.as_str(),
        heading = escape_html(messages.status_heading(report.status)),
        drug_a = escape_html(&report.drug_a),
        drug_b = escape_html(&report.drug_b),
        message = escape_html(&report.message),
    );

    if let (OutcomeStatus::Interaction, Some(interaction)) = (report.status, &report.interaction) {
        let _ = write!(
            body,
            "\n<p class=\"severity\">{}: <strong>{}</strong></p>",
            escape_html(labels.severity),
            escape_html(&interaction.severity)
        );
        if !interaction.explanations.is_empty() {
            let _ = write!(body, "\n<h3>{}</h3>\n<ul>", escape_html(labels.details));
            for explanation in &interaction.explanations {
                let _ = write!(body, "\n<li>{}</li>", escape_html(explanation));
            }
            body.push_str("\n</ul>");
        }
    }

    body.push_str("\n</section>\n");
    body.push_str(&form(messages, &report.drug_a, &report.drug_b));
    let _ = write!(
        body,
        "\n<p><a href=\"/\">{}</a></p>",
        escape_html(labels.back)
    );

    page(messages, title, &body)
}
