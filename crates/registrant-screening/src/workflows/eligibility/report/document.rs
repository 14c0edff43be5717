//! Plain-text pagination of partition reports.
//!
//! Pages hold a fixed number of lines including a two-line footer. The title
//! block only opens the first page and entries never straddle a page break.

use super::views::{PartitionReportView, RegistrantEntryView};

pub const MIN_LINES_PER_PAGE: usize = 10;
pub const DEFAULT_LINES_PER_PAGE: usize = 60;

const FOOTER_LINES: usize = 2;
const PAGE_SEPARATOR: &str = "\u{000C}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPage {
    pub number: usize,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    pub title: String,
    pub pages: Vec<ReportPage>,
}

impl ReportDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn to_text(&self) -> String {
        let total = self.pages.len();
        let mut rendered = Vec::with_capacity(total);

        for page in &self.pages {
            let mut text = page.lines.join("\n");
            text.push_str(&format!("\n\n{}\n", footer(page.number, total)));
            rendered.push(text);
        }

        rendered.join(PAGE_SEPARATOR)
    }
}

/// Lays out `view` on pages of `lines_per_page` lines (clamped to
/// [`MIN_LINES_PER_PAGE`]).
pub fn render_document(view: &PartitionReportView, lines_per_page: usize) -> ReportDocument {
    let capacity = lines_per_page.max(MIN_LINES_PER_PAGE) - FOOTER_LINES;
    let mut pages = Vec::new();
    let mut current = title_block(view);
    let mut has_entries = false;

    for entry in &view.entries {
        let block = entry_block(entry);
        if has_entries && current.len() + block.len() > capacity {
            pages.push(std::mem::take(&mut current));
        }
        current.extend(block);
        has_entries = true;
    }
    pages.push(current);

    ReportDocument {
        title: view.title.clone(),
        pages: pages
            .into_iter()
            .enumerate()
            .map(|(index, mut lines)| {
                while lines.last().is_some_and(|line| line.is_empty()) {
                    lines.pop();
                }
                ReportPage {
                    number: index + 1,
                    lines,
                }
            })
            .collect(),
    }
}

fn title_block(view: &PartitionReportView) -> Vec<String> {
    vec![
        view.title.clone(),
        format!(
            "Generated on {}  |  {} registrant(s)",
            view.generated_on.format("%Y-%m-%d"),
            view.entries.len()
        ),
        String::new(),
    ]
}

fn entry_block(entry: &RegistrantEntryView) -> Vec<String> {
    let mut lines = vec![
        format!("{}. {}", entry.position, entry.name),
        format!(
            "   CPF: {}  |  RG: {}",
            entry.identity_number, entry.identity_document
        ),
        format!(
            "   Activity hours: {}  |  Age: {}",
            entry.activity_hours, entry.age
        ),
        format!("   Locality: {}  |  Email: {}", entry.locality, entry.email),
    ];
    if let Some(reason) = &entry.reason {
        lines.push(format!("   Reason: {reason}"));
    }
    lines.push(String::new());
    lines
}

fn footer(number: usize, total: usize) -> String {
    format!("Page {number} of {total}")
}
