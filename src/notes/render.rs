//! Rendering classified issues into release notes tables.
use serde::Serialize;
use tera::{Context, Tera};

use crate::{notes::classify::ClassifiedIssue, result::Result};

/// Tera template for the HTML table spliced into the in-app plugin.
///
/// Issue titles are trusted tracker content and pass through unescaped, the
/// same way the tracker itself renders them.
const HTML_BODY: &str = r#"<h2>Release notes for {{ version }}</h2>
<table border="1">
<tr>
<td><b>ID</b></td>
<td><b>Type</b></td>
<td><b>Priority</b></td>
<td><b>Summary</b></td>
</tr>
{%- for issue in issues %}
<tr>
<td><a href="{{ base_url }}/{{ issue.number }}">Issue {{ issue.number }}</a></td>
<td>{{ issue.kind }}</td>
<td>{{ issue.priority }}</td>
<td>{{ issue.title }}</td>
</tr>
{%- endfor %}
</table>
<p>Altogether {{ total }} issues.</p>
"#;

/// Tera template for the markdown table pasted into the tracker's release
/// page.
const MARKDOWN_BODY: &str = r#"ID  | Type | Priority | Summary
--- | ---- | -------- | -------
{%- for issue in issues %}
#{{ issue.number }} | {{ issue.kind }} | {{ issue.priority }} | {{ issue.title }}
{%- endfor %}
"#;

#[derive(Serialize)]
struct NotesContext<'a> {
    version: &'a str,
    base_url: &'a str,
    issues: &'a [ClassifiedIssue],
    total: usize,
}

/// Render the HTML notes table, headed by the full release version.
pub fn render_html(
    version: &str,
    issue_link_base_url: &str,
    issues: &[ClassifiedIssue],
) -> Result<String> {
    let context = Context::from_serialize(NotesContext {
        version,
        base_url: issue_link_base_url,
        issues,
        total: issues.len(),
    })?;

    let notes = Tera::one_off(HTML_BODY, &context, false)?;

    Ok(notes)
}

/// Render the markdown notes table.
pub fn render_markdown(issues: &[ClassifiedIssue]) -> Result<String> {
    let mut context = Context::new();
    context.insert("issues", issues);

    let notes = Tera::one_off(MARKDOWN_BODY, &context, false)?;

    Ok(notes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        notes::classify::classify, test_helpers::create_test_issue,
    };

    const BASE_URL: &str = "https://github.com/myorg/myapp/issues";

    #[test]
    fn html_with_no_issues_is_a_well_formed_table() {
        let html = render_html("2.0", BASE_URL, &[]).unwrap();

        assert_eq!(
            html,
            "<h2>Release notes for 2.0</h2>\n\
             <table border=\"1\">\n\
             <tr>\n\
             <td><b>ID</b></td>\n\
             <td><b>Type</b></td>\n\
             <td><b>Priority</b></td>\n\
             <td><b>Summary</b></td>\n\
             </tr>\n\
             </table>\n\
             <p>Altogether 0 issues.</p>\n"
        );
    }

    #[test]
    fn html_rows_link_issues_and_show_classification() {
        let issues = vec![classify(&create_test_issue(
            4072,
            "Crash when opening preferences",
            &["bug", "prio-high"],
        ))];

        let html = render_html("2.1b1", BASE_URL, &issues).unwrap();

        assert!(html.contains("<h2>Release notes for 2.1b1</h2>"));
        assert!(html.contains(
            "<td><a href=\"https://github.com/myorg/myapp/issues/4072\">Issue 4072</a></td>"
        ));
        assert!(html.contains("<td>bug</td>"));
        assert!(html.contains("<td>high</td>"));
        assert!(html.contains("<td>Crash when opening preferences</td>"));
        assert!(html.contains("<p>Altogether 1 issues.</p>"));
    }

    #[test]
    fn markdown_renders_header_and_rows() {
        let issues = vec![
            classify(&create_test_issue(
                4072,
                "Crash when opening preferences",
                &["bug", "prio-critical"],
            )),
            classify(&create_test_issue(
                4068,
                "Remember window size",
                &["enhancement", "prio-low"],
            )),
        ];

        let markdown = render_markdown(&issues).unwrap();

        assert_eq!(
            markdown,
            "ID  | Type | Priority | Summary\n\
             --- | ---- | -------- | -------\n\
             #4072 | bug | critical | Crash when opening preferences\n\
             #4068 | enhancement | low | Remember window size\n"
        );
    }

    #[test]
    fn unknown_classifications_render_their_placeholders() {
        let issues =
            vec![classify(&create_test_issue(9, "Mystery issue", &[]))];

        let markdown = render_markdown(&issues).unwrap();

        assert!(markdown.contains(
            "#9 | Unknown type | Unknown priority | Mystery issue"
        ));
    }
}
