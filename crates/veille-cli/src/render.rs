//! Plain-text table rendering for watch results.

use veille_pipeline::Article;

const TITLE_WIDTH: usize = 48;
const MODEL_WIDTH: usize = 14;
const SOURCE_WIDTH: usize = 24;

/// Print the result table, one row per article, newest first.
///
/// With `with_summary`, each row is followed by an indented summary line.
pub(crate) fn render_table(articles: &[Article], with_summary: bool) {
    println!(
        "{:<16} {:<TITLE_WIDTH$} {:<MODEL_WIDTH$} {:<8} {:<7} {:<SOURCE_WIDTH$} LINK",
        "DATE", "TITLE", "MODEL", "TONE", "LANG", "SOURCE"
    );
    for article in articles {
        println!(
            "{:<16} {:<TITLE_WIDTH$} {:<MODEL_WIDTH$} {:<8} {:<7} {:<SOURCE_WIDTH$} {}",
            article.date.format("%Y-%m-%d %H:%M"),
            truncate_cell(&article.title, TITLE_WIDTH),
            truncate_cell(&article.model_tag, MODEL_WIDTH),
            article.tone,
            article.language,
            truncate_cell(&article.source, SOURCE_WIDTH),
            article.link
        );
        if with_summary {
            println!("    {}", article.summary);
        }
    }
}

/// Bound a cell to `width` characters, marking truncation with an ellipsis.
fn truncate_cell(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let prefix: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{prefix}…")
}
