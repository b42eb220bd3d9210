// src/extract/financial.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

// --- Constants ---
/// How many lines after a revenue keyword line are scanned for numeric values.
/// Tolerates label/value separation across table rows without layout parsing.
const LOOKAHEAD_LINES: usize = 5;

/// Keywords marking a line as revenue-bearing (matched case-insensitively as
/// substrings). "revenue" already subsumes "total revenue"; the longer form is
/// kept for parity with the documented rule set.
const REVENUE_KEYWORDS: &[&str] = &["revenue", "total revenue", "sales"];

/// Quarter tokens marking a period label line (case-sensitive literals).
const QUARTER_TOKENS: &[&str] = &["Q1", "Q2", "Q3", "Q4"];

// --- Regex Patterns (Lazy Static) ---
// Currency/number token: optional "$", digit groups with optional standard
// thousands commas, optional decimal fraction. The pattern accepts malformed
// groupings by shape; conversion failures are filtered out downstream.
static NUMERIC_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$?\d+(?:,\d{3})*(?:\.\d+)?").expect("Failed to compile NUMERIC_TOKEN_RE")
});

// Fiscal year marker: "FY", optional whitespace, four digits.
static FISCAL_YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"FY\s*\d{4}").expect("Failed to compile FISCAL_YEAR_RE"));

// --- Data Structures ---
/// Extraction result: revenue figures and period labels in document scan
/// order, truncated to equal length. The n-th revenue is associated with the
/// n-th label by index only; no structural linkage is verified.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialData {
    #[serde(rename = "Revenue")]
    pub revenue: Vec<f64>,
    #[serde(rename = "Date")]
    pub date: Vec<String>,
}

impl FinancialData {
    /// True when there is nothing to plot. `extract_financial_data` always
    /// pairs the sequences to one length, but hand-built values may not be
    /// paired yet, so both are checked.
    pub fn is_empty(&self) -> bool {
        self.revenue.is_empty() || self.date.is_empty()
    }
}

// --- Line Classification ---
/// Does this line mention revenue? Case-insensitive containment against
/// REVENUE_KEYWORDS.
pub fn is_revenue_line(line: &str) -> bool {
    let lowered = line.to_lowercase();
    REVENUE_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

/// Does this line name a reporting period? Either a literal quarter token or
/// a fiscal-year marker qualifies. Not mutually exclusive with
/// `is_revenue_line`.
pub fn is_period_line(line: &str) -> bool {
    QUARTER_TOKENS.iter().any(|tok| line.contains(tok)) || FISCAL_YEAR_RE.is_match(line)
}

// --- Numeric Extraction ---
/// All numeric values on a line, left to right.
pub fn numeric_values(line: &str) -> Vec<f64> {
    NUMERIC_TOKEN_RE
        .find_iter(line)
        .filter_map(|m| parse_token(m.as_str()))
        .collect()
}

/// Numeric values on a period label line. The label's own digits are not
/// figures, so tokens that are period artifacts are filtered out; a
/// currency-marked or comma-grouped value sharing the line with its label
/// (a common table layout) is kept.
pub fn period_line_figures(line: &str) -> Vec<f64> {
    NUMERIC_TOKEN_RE
        .find_iter(line)
        .filter(|m| !is_period_artifact(line, m))
        .filter_map(|m| parse_token(m.as_str()))
        .collect()
}

/// Label digits on a period line: quarter or fiscal-year digits (the token
/// directly follows "Q" or "FY"), or a bare four-digit year carrying no
/// currency symbol, grouping, or fraction.
fn is_period_artifact(line: &str, token: &regex::Match) -> bool {
    let prefix = &line[..token.start()];
    if prefix.ends_with('Q') || prefix.trim_end().ends_with("FY") {
        return true;
    }
    let text = token.as_str();
    text.len() == 4 && text.bytes().all(|b| b.is_ascii_digit())
}

/// "$" and thousands commas are stripped before conversion; tokens that
/// still fail to parse are dropped silently (expected filtering, not an
/// error).
fn parse_token(token: &str) -> Option<f64> {
    token.replace(['$', ','], "").parse::<f64>().ok()
}

// --- Pairing ---
/// Positional pairing: drop trailing elements of the longer sequence so both
/// share the length of the shorter one. Index position is the only linkage
/// between a revenue figure and a period label. A structural-linkage
/// algorithm (e.g. nearest-preceding-label association) could replace this
/// without touching the scanning pass.
fn pair_by_position(revenue: &mut Vec<f64>, date: &mut Vec<String>) {
    let paired_len = revenue.len().min(date.len());
    revenue.truncate(paired_len);
    date.truncate(paired_len);
}

// --- Extraction Algorithm ---
/// Extracts a revenue time-series from the flat text of a financial document.
///
/// Single pass over the lines: every revenue keyword line opens a bounded
/// lookahead window whose numeric values are harvested (on period label
/// lines inside the window only the label's own quarter/year digits are
/// filtered out; figures sharing such a line are kept); every period label
/// line contributes its trimmed text. The two independently collected
/// sequences are then paired positionally.
///
/// Pure function of the input: no I/O, no shared state, never fails.
/// Malformed input degrades to empty or shorter sequences.
pub fn extract_financial_data(document_text: &str) -> FinancialData {
    let lines: Vec<&str> = document_text.split('\n').collect();
    let mut revenue: Vec<f64> = Vec::new();
    let mut date: Vec<String> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if is_revenue_line(line) {
            // Window is clipped at the end of the document; running past the
            // last line yields no matches rather than an error.
            let window_end = (i + 1 + LOOKAHEAD_LINES).min(lines.len());
            for lookahead in &lines[i + 1..window_end] {
                if is_period_line(lookahead) {
                    revenue.extend(period_line_figures(lookahead));
                } else {
                    revenue.extend(numeric_values(lookahead));
                }
            }
        }

        // Evaluated on the original line, independently of the revenue check;
        // a single line may feed both sequences.
        if is_period_line(line) {
            date.push(line.trim().to_string());
        }
    }

    tracing::debug!(
        "Scanned {} lines: {} revenue candidates, {} period labels before pairing",
        lines.len(),
        revenue.len(),
        date.len()
    );

    pair_by_position(&mut revenue, &mut date);
    FinancialData { revenue, date }
}
