//! Server-side HTML rendering
//!
//! Pages are built with `std::fmt::Write` into a `String`. Every piece of
//! user-supplied text passes through [`escape_html`] before it is written.

use crate::error::{PromptlogError, Result};
use crate::storage::{Prompt, WordCountSample};
use std::fmt::Write;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_error(e: std::fmt::Error) -> PromptlogError {
    PromptlogError::Render(e.to_string())
}

fn layout(title: &str, body: &str) -> Result<String> {
    let mut page = String::new();
    write!(
        page,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n\
         <nav><a href=\"/add\">Add prompt</a> | <a href=\"/view\">Pending</a> | \
         <a href=\"/view_completed\">Completed</a> | <a href=\"/words\">Word counts</a></nav>\n\
         <h1>{title}</h1>\n{body}</body>\n</html>\n",
        title = escape_html(title),
        body = body,
    )
    .map_err(render_error)?;
    Ok(page)
}

/// Empty prompt submission form
pub fn prompt_form() -> Result<String> {
    layout(
        "Add a writing prompt",
        "<form method=\"post\" action=\"/add\">\n\
         <textarea name=\"prompt\" rows=\"4\" cols=\"60\"></textarea><br>\n\
         <button type=\"submit\">Save prompt</button>\n\
         </form>\n",
    )
}

/// List of prompts; pending prompts get a link to mark them complete
pub fn prompt_list(title: &str, prompts: &[Prompt]) -> Result<String> {
    let mut body = String::new();

    if prompts.is_empty() {
        body.push_str("<p>No prompts.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for prompt in prompts {
            write!(
                body,
                "<li><span class=\"timestamp\">{}</span> {}",
                prompt.created_at.format(TIMESTAMP_FORMAT),
                escape_html(&prompt.text)
            )
            .map_err(render_error)?;
            if !prompt.completed {
                write!(
                    body,
                    " <a href=\"/complete?id={}\">Mark complete</a>",
                    prompt.id
                )
                .map_err(render_error)?;
            }
            body.push_str("</li>\n");
        }
        body.push_str("</ul>\n");
    }

    layout(title, &body)
}

fn word_count_entry_form() -> &'static str {
    "<form method=\"post\" action=\"/words/add\">\n\
     <input type=\"number\" name=\"wordcount\" required>\n\
     <button type=\"submit\">Log words</button>\n\
     </form>\n"
}

/// Empty word count submission form
pub fn word_count_form() -> Result<String> {
    layout("Log today's word count", word_count_entry_form())
}

/// Word count history with entry form and running total
pub fn word_count_list(samples: &[WordCountSample]) -> Result<String> {
    let mut body = String::from(word_count_entry_form());

    if samples.is_empty() {
        body.push_str("<p>No word counts logged yet.</p>\n");
    } else {
        body.push_str("<table>\n<tr><th>Date</th><th>Words</th></tr>\n");
        for sample in samples {
            writeln!(
                body,
                "<tr><td>{}</td><td>{}</td></tr>",
                sample.created_at.format(TIMESTAMP_FORMAT),
                sample.word_count
            )
            .map_err(render_error)?;
        }
        body.push_str("</table>\n");

        let total = samples
            .iter()
            .fold(0i64, |acc, s| acc.saturating_add(s.word_count));
        writeln!(body, "<p>Total: {} words</p>", total).map_err(render_error)?;
    }

    layout("Word counts", &body)
}
