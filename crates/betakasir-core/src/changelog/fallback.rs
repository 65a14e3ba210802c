//! Changelog bundled with the client, shown when the live list is empty
//! or unreachable. Newest first, one entry per version.

use chrono::NaiveDate;

use super::entry::{ChangeCategory, ChangeItem, ChangelogEntry, ReleaseType};

/// The bundled list.
pub fn bundled() -> Vec<ChangelogEntry> {
    vec![
        release(
            "1.2.2",
            (2024, 11, 20),
            "WhatsApp update contact",
            "Update prompts now link to the support WhatsApp number.",
            ReleaseType::Patch,
            &[
                (ChangeCategory::Feature, "Contact support on WhatsApp from the update prompt"),
                (ChangeCategory::Bugfix, "Fixed plan badge not refreshing after upgrade"),
            ],
        ),
        release(
            "1.2.1",
            (2024, 10, 28),
            "Billing fixes",
            "Corrections to plan selection and yearly pricing.",
            ReleaseType::Patch,
            &[
                (ChangeCategory::Bugfix, "Yearly savings no longer shown for the free plan"),
                (ChangeCategory::Improvement, "Clearer downgrade confirmation"),
            ],
        ),
        release(
            "1.2.0",
            (2024, 10, 1),
            "Subscription plans",
            "Standard and Pro plans with monthly or yearly billing.",
            ReleaseType::Minor,
            &[
                (ChangeCategory::Feature, "Standard and Pro subscription plans"),
                (ChangeCategory::Feature, "Yearly billing option"),
                (ChangeCategory::Improvement, "Plan limits shown in settings"),
            ],
        ),
        release(
            "1.1.10",
            (2024, 8, 14),
            "AI product scan",
            "Add products by photographing their packaging.",
            ReleaseType::Patch,
            &[
                (ChangeCategory::Feature, "Scan a product photo to fill in its details"),
                (ChangeCategory::Security, "Session tokens refreshed on app resume"),
            ],
        ),
        release(
            "1.1.9",
            (2024, 7, 30),
            "User guide",
            "In-app user guide for cashiers and owners.",
            ReleaseType::Patch,
            &[(ChangeCategory::Feature, "User guide available from the menu")],
        ),
    ]
}

fn release(
    version: &str,
    (year, month, day): (i32, u32, u32),
    title: &str,
    description: &str,
    release_type: ReleaseType,
    changes: &[(ChangeCategory, &str)],
) -> ChangelogEntry {
    ChangelogEntry {
        id: format!("v{version}"),
        version: version.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        title: title.to_string(),
        description: description.to_string(),
        release_type,
        changes: changes
            .iter()
            .map(|(category, text)| ChangeItem {
                category: *category,
                text: (*text).to_string(),
            })
            .collect(),
    }
}
