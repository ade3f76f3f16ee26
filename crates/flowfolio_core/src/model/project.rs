//! Project domain model.
//!
//! # Responsibility
//! - Define the catalog record rendered by grid/carousel/row surfaces.
//! - Provide the normalize/merge rules used by catalog mutations.
//!
//! # Invariants
//! - `id` is assigned by the catalog service, never by the caller.
//! - `youtube_id` holds an extracted 11-character id or `None`, so the
//!   "has video" predicate stays unambiguous.
//! - Display prefers `youtube_id` when present; `image` is fallback media.

use crate::video::extract_video_id;
use serde::{Deserialize, Serialize};

/// Stable identity of one catalog record. Strictly positive, unique within
/// the catalog.
pub type ProjectId = i64;

/// Placeholder title applied when a draft omits one.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Placeholder category applied when a draft omits one.
pub const DEFAULT_CATEGORY: &str = "Motion Design";

/// One portfolio entry.
///
/// Serialized field names follow the stored blob schema, so catalogs written
/// by earlier builds of the site keep loading unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Extracted 11-character YouTube video id.
    #[serde(rename = "youtubeId", skip_serializing_if = "Option::is_none")]
    pub youtube_id: Option<String>,
    /// Direct image URL used when no video id is present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Project {
    /// Returns whether this record has playable video media.
    pub fn has_video(&self) -> bool {
        self.youtube_id.is_some()
    }

    /// Merges a partial draft onto this record, keeping `id` stable.
    ///
    /// # Contract
    /// - Omitted draft fields keep their current values.
    /// - A provided `video` input re-runs id extraction; its result replaces
    ///   the stored `youtube_id` even when extraction yields `None`.
    /// - A provided blank `title`/`category` keeps the existing value.
    /// - A provided blank `image` clears it.
    pub fn merged(&self, draft: &ProjectDraft) -> Project {
        Project {
            id: self.id,
            title: non_blank(draft.title.as_deref())
                .map(str::to_string)
                .unwrap_or_else(|| self.title.clone()),
            category: non_blank(draft.category.as_deref())
                .map(str::to_string)
                .unwrap_or_else(|| self.category.clone()),
            description: draft
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            youtube_id: match draft.video.as_deref() {
                Some(raw) => extract_video_id(raw),
                None => self.youtube_id.clone(),
            },
            image: match draft.image.as_deref() {
                Some(value) => non_blank(Some(value)).map(str::to_string),
                None => self.image.clone(),
            },
        }
    }
}

/// Partial record input accepted by catalog create/update operations.
///
/// `video` carries the raw YouTube URL-or-id string exactly as typed; the
/// extracted id never travels through drafts directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    /// Raw YouTube URL or bare 11-character id.
    pub video: Option<String>,
    pub image: Option<String>,
}

impl ProjectDraft {
    /// Completes this draft into a full record under the assigned `id`.
    ///
    /// Pure defaulting, no side effects: blank or omitted `title`/`category`
    /// become their placeholders, `description` becomes empty, media fields
    /// become absent rather than empty strings.
    pub fn normalize(&self, id: ProjectId) -> Project {
        Project {
            id,
            title: non_blank(self.title.as_deref())
                .map_or_else(|| DEFAULT_TITLE.to_string(), str::to_string),
            category: non_blank(self.category.as_deref())
                .map_or_else(|| DEFAULT_CATEGORY.to_string(), str::to_string),
            description: self.description.clone().unwrap_or_default(),
            youtube_id: self.video.as_deref().and_then(extract_video_id),
            image: non_blank(self.image.as_deref()).map(str::to_string),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::{Project, ProjectDraft, DEFAULT_CATEGORY, DEFAULT_TITLE};

    #[test]
    fn normalize_empty_draft_applies_placeholders() {
        let project = ProjectDraft::default().normalize(1);

        assert_eq!(project.id, 1);
        assert_eq!(project.title, DEFAULT_TITLE);
        assert_eq!(project.category, DEFAULT_CATEGORY);
        assert_eq!(project.description, "");
        assert_eq!(project.youtube_id, None);
        assert_eq!(project.image, None);
    }

    #[test]
    fn normalize_treats_blank_media_as_absent() {
        let draft = ProjectDraft {
            video: Some("   ".to_string()),
            image: Some(String::new()),
            ..ProjectDraft::default()
        };

        let project = draft.normalize(7);
        assert_eq!(project.youtube_id, None);
        assert_eq!(project.image, None);
        assert!(!project.has_video());
    }

    #[test]
    fn normalize_extracts_video_id_from_url_input() {
        let draft = ProjectDraft {
            title: Some("VYBE".to_string()),
            video: Some("https://www.youtube.com/watch?v=lvVsp2EkzfA".to_string()),
            ..ProjectDraft::default()
        };

        let project = draft.normalize(2);
        assert_eq!(project.youtube_id.as_deref(), Some("lvVsp2EkzfA"));
        assert!(project.has_video());
    }

    #[test]
    fn merged_keeps_omitted_fields_and_overwrites_provided_ones() {
        let existing = ProjectDraft {
            title: Some("Surge".to_string()),
            description: Some("first cut".to_string()),
            video: Some("sqs3XrGvSiY".to_string()),
            ..ProjectDraft::default()
        }
        .normalize(4);

        let merged = existing.merged(&ProjectDraft {
            description: Some("final cut".to_string()),
            ..ProjectDraft::default()
        });

        assert_eq!(merged.id, 4);
        assert_eq!(merged.title, "Surge");
        assert_eq!(merged.description, "final cut");
        assert_eq!(merged.youtube_id.as_deref(), Some("sqs3XrGvSiY"));
    }

    #[test]
    fn merged_reruns_extraction_when_video_input_is_provided() {
        let existing = ProjectDraft {
            video: Some("sqs3XrGvSiY".to_string()),
            ..ProjectDraft::default()
        }
        .normalize(4);

        let replaced = existing.merged(&ProjectDraft {
            video: Some("https://youtu.be/dp-c10JwrNo".to_string()),
            ..ProjectDraft::default()
        });
        assert_eq!(replaced.youtube_id.as_deref(), Some("dp-c10JwrNo"));

        let cleared = existing.merged(&ProjectDraft {
            video: Some("not a video".to_string()),
            ..ProjectDraft::default()
        });
        assert_eq!(cleared.youtube_id, None);
    }

    #[test]
    fn merged_blank_title_keeps_existing_and_blank_image_clears() {
        let existing = Project {
            id: 9,
            title: "Focus".to_string(),
            category: "Motion Design".to_string(),
            description: String::new(),
            youtube_id: None,
            image: Some("https://example.com/cover.png".to_string()),
        };

        let merged = existing.merged(&ProjectDraft {
            title: Some("  ".to_string()),
            image: Some(String::new()),
            ..ProjectDraft::default()
        });

        assert_eq!(merged.title, "Focus");
        assert_eq!(merged.image, None);
    }

    #[test]
    fn serialized_record_omits_absent_media_fields() {
        let project = ProjectDraft {
            title: Some("Change".to_string()),
            ..ProjectDraft::default()
        }
        .normalize(3);

        let json = serde_json::to_string(&project).expect("project should serialize");
        assert!(!json.contains("youtubeId"));
        assert!(!json.contains("image"));

        let with_video = ProjectDraft {
            video: Some("6-wuexGihME".to_string()),
            ..ProjectDraft::default()
        }
        .normalize(3);
        let json = serde_json::to_string(&with_video).expect("project should serialize");
        assert!(json.contains("\"youtubeId\":\"6-wuexGihME\""));
    }
}
