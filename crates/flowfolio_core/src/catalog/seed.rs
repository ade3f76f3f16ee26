//! Built-in default catalog.
//!
//! # Responsibility
//! - Provide the records shown before an admin ever edits the catalog.
//!
//! # Invariants
//! - Ids are assigned 1..=N in display order and stay in sync with the
//!   published site content.

use crate::model::project::Project;

struct SeedEntry {
    title: &'static str,
    category: &'static str,
    youtube_id: &'static str,
    description: &'static str,
}

// All videos from the @aflow_ YouTube channel.
const SEED_ENTRIES: &[SeedEntry] = &[
    SeedEntry {
        title: "[motion graphics] VYBE",
        category: "Motion Design",
        youtube_id: "lvVsp2EkzfA",
        description: "Motion design work by aflow",
    },
    SeedEntry {
        title: "[motion graphics] afterglow",
        category: "Motion Design",
        youtube_id: "dp-c10JwrNo",
        description: "Motion design work by aflow",
    },
    SeedEntry {
        title: "[motion graphics] Change",
        category: "Motion Design",
        youtube_id: "6-wuexGihME",
        description: "Motion design work by aflow",
    },
    SeedEntry {
        title: "[motion graphics] Surge",
        category: "Motion Design",
        youtube_id: "sqs3XrGvSiY",
        description: "Motion design work by aflow",
    },
    SeedEntry {
        title: "[motion graphics] Focus",
        category: "Motion Design",
        youtube_id: "2f7iNZclhpQ",
        description: "Motion design work by aflow",
    },
    SeedEntry {
        title: "[motion graphics] 2024 Showreel - aflow",
        category: "Showreel",
        youtube_id: "ZksgjJs3Kts",
        description: "2024 showreel compilation of aflow's best works",
    },
    SeedEntry {
        title: "[콜로소_aflow] 페이지 오픈 및 13가지 예제 공개!",
        category: "Motion Design",
        youtube_id: "0V01ww82Vog",
        description: "Motion design work by aflow",
    },
    SeedEntry {
        title: "[Motion Graphic] Inspiration",
        category: "Motion Design",
        youtube_id: "KfjV1HTT5ZE",
        description: "Motion design work by aflow",
    },
    SeedEntry {
        title: "[Motion Graphic] Spark to Canvas.",
        category: "Motion Design",
        youtube_id: "WpwKF_HKP64",
        description: "Motion design work by aflow",
    },
    SeedEntry {
        title: "[Motion Graphic] celebrate, 8000.",
        category: "Motion Design",
        youtube_id: "cIxWD4lBIMo",
        description: "Motion design work by aflow",
    },
    SeedEntry {
        title: "[motion graphics] define.",
        category: "Motion Design",
        youtube_id: "JPvLbNDABnA",
        description: "Motion design work by aflow",
    },
    SeedEntry {
        title: "[motion graphics] hi, aflow. - identity film",
        category: "Branding",
        youtube_id: "xBZzVNi_4Xw",
        description: "Identity film by aflow",
    },
    SeedEntry {
        title: "[motion graphics] Music, Memory",
        category: "Motion Design",
        youtube_id: "VZUwkWZ3v7E",
        description: "Motion design work by aflow",
    },
];

/// Builds the default catalog used when no persisted data exists.
pub fn seed_catalog() -> Vec<Project> {
    SEED_ENTRIES
        .iter()
        .enumerate()
        .map(|(index, entry)| Project {
            id: index as i64 + 1,
            title: entry.title.to_string(),
            category: entry.category.to_string(),
            description: entry.description.to_string(),
            youtube_id: Some(entry.youtube_id.to_string()),
            image: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::seed_catalog;
    use crate::video::extract_video_id;
    use std::collections::HashSet;

    #[test]
    fn seed_has_thirteen_records_with_sequential_ids() {
        let seed = seed_catalog();
        assert_eq!(seed.len(), 13);
        for (index, project) in seed.iter().enumerate() {
            assert_eq!(project.id, index as i64 + 1);
        }
    }

    #[test]
    fn seed_video_ids_are_unique_and_well_formed() {
        let seed = seed_catalog();
        let ids: HashSet<_> = seed
            .iter()
            .map(|project| {
                let id = project.youtube_id.as_deref().expect("seed entry has video");
                assert_eq!(extract_video_id(id).as_deref(), Some(id));
                id.to_string()
            })
            .collect();
        assert_eq!(ids.len(), seed.len());
    }
}
