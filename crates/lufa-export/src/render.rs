use lufa_core::models::plan::PlanRecord;
use lufa_core::report::{SectionBody, SectionKind, SectionRow, to_sections};

use crate::paginate::{Block, StyledBlock};
use crate::styles::Theme;

/// Convert a plan into styled blocks for the exported document.
///
/// Every report section except the title becomes an upper-cased heading
/// followed by either one paragraph or one bullet per row. The title is
/// printed in the first-page banner instead.
pub fn plan_blocks(plan: &PlanRecord, theme: &Theme) -> Vec<StyledBlock> {
    let mut blocks = Vec::new();

    for section in to_sections(plan) {
        if section.kind == SectionKind::Title {
            continue;
        }

        blocks.push(StyledBlock {
            block: Block::Heading {
                text: section.heading.to_uppercase(),
                level: 1,
            },
            style: theme.heading,
        });

        match section.body {
            SectionBody::Text(text) => blocks.push(StyledBlock {
                block: Block::Paragraph { text },
                style: theme.body,
            }),
            SectionBody::Rows(rows) => {
                for row in &rows {
                    blocks.push(StyledBlock {
                        block: Block::BulletItem {
                            text: row_text(section.kind, row),
                        },
                        style: theme.bullet,
                    });
                }
            }
        }
    }

    blocks
}

fn row_text(kind: SectionKind, row: &SectionRow) -> String {
    let head = match kind {
        SectionKind::Flowchart => format!("{}. {}", row.label, row.value),
        SectionKind::CostAnalysis if !row.detail.is_empty() => {
            format!("\u{2022} {} ({}): {}", row.label, row.detail, row.value)
        }
        SectionKind::CostAnalysis => format!("\u{2022} {}: {}", row.label, row.value),
        _ => format!("\u{2022} {} - {}", row.label, row.value),
    };

    match kind {
        SectionKind::CostAnalysis => head,
        _ if row.detail.is_empty() => head,
        _ => format!("{head}: {}", row.detail),
    }
}
