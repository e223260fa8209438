//! HTML rendering of the showcase page from the selection controller.

use selection::SelectionController;

/// Stylesheet inlined into every page.
pub const CSS: &str = include_str!("assets/site.css");

const PAGE_HEADING: &str = "Pascal \u{2192} LLVM IR samples";

/// Renders the full page for the controller's active sample. `notice` is shown
/// above the sample panel, e.g. after a rejected selection.
pub fn render_page(controller: &SelectionController, notice: Option<&str>) -> String {
    let view = controller.view_model();
    let rule = controller.registry().artifact_rule();

    let mut nav = String::new();
    for item in controller.nav() {
        let (class, current) = if item.active {
            ("sample active", " aria-current=\"page\"")
        } else {
            ("sample", "")
        };
        nav.push_str(&format!(
            "<a class=\"{class}\" href=\"{}\"{current}>{}</a>\n",
            escape_html(&item.href),
            escape_html(&item.title),
        ));
    }

    let notice = notice
        .map(|message| {
            format!(
                "<div class=\"panel notice\" role=\"alert\">{}</div>\n",
                escape_html(message)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} · {heading}</title>
<style>
{css}</style>
</head>
<body>
<div class="layout">
<aside>
<div class="panel">
<h2>Samples</h2>
<nav class="samples">
{nav}</nav>
</div>
</aside>
<main>
{notice}<div class="panel">
<div class="header">
<div>
<h3>{title}</h3>
<div class="muted">Source · Expected output · Download IR</div>
</div>
<a class="download" href="{href}" download>Download IR ({label})</a>
</div>
<section>
<div class="label">Pascal</div>
<pre>{source}</pre>
</section>
<section>
<div class="label">Expected Output</div>
<pre>{output}</pre>
<div class="muted">To run locally: <code>lli tests\{label}</code></div>
</section>
</div>
<div class="panel footer">
<b>How this works:</b> These are real Pascal programs and the LLVM IR the compiler generated for them.
The &ldquo;Download IR&rdquo; link serves the <code>.{ext}</code> files from <code>public/{dir}</code>. No backend.
</div>
</main>
</div>
</body>
</html>
"#,
        title = escape_html(&view.title),
        heading = PAGE_HEADING,
        css = CSS,
        nav = nav,
        notice = notice,
        href = escape_html(&view.download_href),
        label = escape_html(&view.download_label),
        source = escape_html(&view.source_text),
        output = escape_html(&view.expected_output),
        ext = escape_html(&rule.extension),
        dir = escape_html(rule.directory.trim_matches('/')),
    )
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
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
