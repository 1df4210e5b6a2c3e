//! Server-rendered HTML for the dashboard pages.
//!
//! Every piece of scraped or user-supplied text goes through [`escape_html`]
//! before it is interpolated.

use aigent_core::{analysis::AnalysisOutcome, AggregateReport, EtfSource, SourceTable};

use super::links::SymbolLinks;

pub const CHOICE_SLUG: &str = "choice";
pub const CHOICE_LABEL: &str = "AIgent's Choice";

const STYLE: &str = "body{background:#000;color:#fff;font-family:sans-serif;margin:0}\
nav{background:#111;padding:12px 24px}nav a{color:#9cf;margin-right:16px}\
main{padding:24px}table{border-collapse:collapse}th,td{border:1px solid #444;padding:4px 10px}\
a{color:#9cf}.error{color:#f66}pre{white-space:pre-wrap}";

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
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

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{title} - AIgent</title>\
<style>{STYLE}</style></head><body>\
<nav><a href=\"/etfs\">ETFs</a><a href=\"/analyzer\">Stock Analyzer</a></nav>\
<main>{body}</main></body></html>",
        title = escape_html(title),
    )
}

fn error_line(message: &str) -> String {
    format!("<p class=\"error\">{}</p>", escape_html(message))
}

fn etf_selector(sources: &[EtfSource], selected: &str) -> String {
    let mut options = vec![(CHOICE_SLUG, CHOICE_LABEL)];
    options.extend(sources.iter().map(|s| (s.slug.as_str(), s.label.as_str())));

    let options: String = options
        .into_iter()
        .map(|(slug, label)| {
            let marker = if slug.eq_ignore_ascii_case(selected) {
                " selected"
            } else {
                ""
            };
            format!(
                "<option value=\"{}\"{}>{}</option>",
                escape_html(slug),
                marker,
                escape_html(label)
            )
        })
        .collect();

    format!(
        "<form method=\"get\" action=\"/etfs\"><label>Select an ETF to analyze: \
<select name=\"etf\" onchange=\"this.form.submit()\">{options}</select></label> \
<button type=\"submit\">Show</button></form>"
    )
}

fn etf_page(sources: &[EtfSource], selected: &str, content: &str) -> String {
    let body = format!(
        "<h2>Analyze the Top AI ETFs</h2>{}{}",
        etf_selector(sources, selected),
        content
    );
    layout("ETFs", &body)
}

/// Aggregate view: one error line per failed source, then the ranked table.
pub fn choice_page(sources: &[EtfSource], report: &AggregateReport, links: SymbolLinks) -> String {
    let mut content = format!(
        "<p>{} is selecting the most common stocks across the top AI ETFs.</p>",
        escape_html(CHOICE_LABEL)
    );
    for failure in &report.failures {
        content.push_str(&error_line(&failure.message()));
    }
    content.push_str("<h3>Common Stocks Across ETFs</h3>");
    if report.is_empty() {
        content.push_str("<p>No common stocks found.</p>");
    } else {
        let rows: String = report
            .rows
            .iter()
            .map(|row| {
                format!(
                    "<tr><td>{}</td><td>{}</td></tr>",
                    links.anchor(&row.symbol),
                    escape_html(&row.name)
                )
            })
            .collect();
        content.push_str(&format!(
            "<table><thead><tr><th>Symbol</th><th>Name</th></tr></thead><tbody>{rows}</tbody></table>"
        ));
    }
    etf_page(sources, CHOICE_SLUG, &content)
}

/// Single ETF view with the weights as the source reports them.
pub fn holdings_page(
    sources: &[EtfSource],
    selected: &str,
    table: &SourceTable,
    links: SymbolLinks,
) -> String {
    let content = if table.is_empty() {
        "<p>No stock data available.</p>".to_string()
    } else {
        let rows: String = table
            .rows
            .iter()
            .map(|row| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                    links.anchor(&row.symbol),
                    escape_html(&row.name),
                    escape_html(&row.weight)
                )
            })
            .collect();
        format!(
            "<h3>Holdings</h3><table><thead><tr><th>Symbol</th><th>Name</th><th>% Weight</th></tr>\
</thead><tbody>{rows}</tbody></table>"
        )
    };
    etf_page(sources, selected, &content)
}

/// A single-source request that could not be served.
pub fn etf_error_page(sources: &[EtfSource], selected: &str, message: &str) -> String {
    etf_page(sources, selected, &error_line(message))
}

pub fn analyzer_page(symbol: Option<&str>, outcome: Option<&AnalysisOutcome>) -> String {
    let mut body = format!(
        "<h2>Stock Analyzer</h2><form method=\"get\" action=\"/analyzer\">\
<label>Ticker symbol: <input type=\"text\" name=\"symbol\" value=\"{}\"></label> \
<button type=\"submit\">Analyze</button></form>",
        escape_html(symbol.unwrap_or_default())
    );
    match outcome {
        Some(AnalysisOutcome::Report { symbol, text }) => {
            body.push_str(&format!(
                "<h3>{}</h3><pre>{}</pre>",
                escape_html(symbol),
                escape_html(text)
            ));
        }
        Some(AnalysisOutcome::Failed { message, .. }) => body.push_str(&error_line(message)),
        None => {}
    }
    layout("Stock Analyzer", &body)
}
