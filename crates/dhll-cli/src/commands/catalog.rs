use dhll_core::catalog::{
    CIRCUMSTANCE_GROUPS, CULTURE_COUNTRIES, CULTURE_FAITH, CULTURE_NONE,
    CULTURE_REGIONS, CatalogItem, TONES, detect_circumstances,
};
use dhll_core::enums::RatingCode;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{CatalogArgs, CatalogKind, DetectArgs};
use crate::output::output;

#[derive(Debug, Serialize)]
struct CatalogRow {
    group: &'static str,
    label: &'static str,
    value: &'static str,
}

#[derive(Debug, Serialize)]
struct DetectView {
    tags: Vec<String>,
}

/// Handle `dhll catalog`.
pub fn handle(args: &CatalogArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&catalog_rows(args.kind), flags.format)
}

/// Handle `dhll detect`.
pub fn handle_detect(args: &DetectArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = DetectView {
        tags: detect_circumstances(&args.text),
    };
    output(&view, flags.format)
}

fn catalog_rows(kind: CatalogKind) -> Vec<CatalogRow> {
    match kind {
        CatalogKind::Tones => rows("tone", TONES),
        CatalogKind::Cultures => {
            let mut rows_out = vec![CatalogRow {
                group: "none",
                label: "No specific culture",
                value: CULTURE_NONE,
            }];
            rows_out.extend(rows("region", CULTURE_REGIONS));
            rows_out.extend(rows("faith", CULTURE_FAITH));
            rows_out.extend(rows("country", CULTURE_COUNTRIES));
            rows_out
        }
        CatalogKind::Circumstances => CIRCUMSTANCE_GROUPS
            .iter()
            .flat_map(|group| rows(group.key, group.items))
            .collect(),
        CatalogKind::Ratings => RatingCode::ALL
            .into_iter()
            .map(|code| CatalogRow {
                group: "rating",
                label: code.label(),
                value: code.as_str(),
            })
            .collect(),
    }
}

fn rows(group: &'static str, items: &'static [CatalogItem]) -> Vec<CatalogRow> {
    items
        .iter()
        .map(|item| CatalogRow {
            group,
            label: item.label,
            value: item.value,
        })
        .collect()
}
