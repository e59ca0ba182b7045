//! Section classification: raw section entries -> `CanonicalSection`s.
//!
//! Three generations of section records coexist in the content store, and
//! none of them carries a version marker. Entries are classified by
//! precedence:
//!
//! 1. **Typed**: a recognized `type` tag plus a heading/title maps straight
//!    into the matching variant. Structured variants (gallery, timeline,
//!    comparison, specs) need only the tag; their payload identifies them.
//! 2. **Headed**: a `heading` with no `type` becomes a `Feature`; nested
//!    `subSections` add a synthetic `Subsections` right after it.
//! 3. **Legacy**: anything else becomes a bare `Feature` built from whatever
//!    title/body/bullets/image fields are present.

use serde_json::Value as JsonValue;

use super::error::json_kind;
use super::model::{
    CanonicalSection, ComparisonSection, FeatureSection, GallerySection, SpecGroup, SpecRow,
    SpecsSection, SubsectionsSection, TimelineSection, TimelineStep,
};
use crate::config::{FieldTable, NormalizeConfig};
use crate::debug;
use crate::field::{
    as_image, as_text, is_present, resolve_image, resolve_list, resolve_paragraphs,
    resolve_strings, resolve_text, resolve_with,
};

/// Recognized section type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Feature,
    Subsections,
    Gallery,
    Timeline,
    Comparison,
    Specs,
}

impl SectionKind {
    /// Parse a raw `type` tag. Case, `-`, `_` and spaces are ignored.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag: String = tag
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match tag.as_str() {
            "feature" | "text" | "content" => Some(Self::Feature),
            "subsections" => Some(Self::Subsections),
            "gallery" | "images" => Some(Self::Gallery),
            "timeline" | "history" => Some(Self::Timeline),
            "comparison" | "compare" | "table" => Some(Self::Comparison),
            "specs" | "specifications" | "spec" => Some(Self::Specs),
            _ => None,
        }
    }

    const fn is_structured(self) -> bool {
        matches!(
            self,
            Self::Gallery | Self::Timeline | Self::Comparison | Self::Specs
        )
    }
}

/// Classifies raw section entries using a field table.
pub struct SectionClassifier<'a> {
    fields: &'a FieldTable,
    options: &'a NormalizeConfig,
}

impl<'a> SectionClassifier<'a> {
    pub fn new(fields: &'a FieldTable, options: &'a NormalizeConfig) -> Self {
        Self { fields, options }
    }

    /// Classify every entry of a raw section list, preserving order.
    ///
    /// Object entries yield exactly one primary section each. Plain strings
    /// become body-only features; other scalars are skipped.
    pub fn classify_all(&self, entries: &[JsonValue]) -> Vec<CanonicalSection> {
        let mut sections = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            match entry {
                JsonValue::Object(_) => self.classify(entry, &mut sections),
                JsonValue::String(_) => {
                    if let Some(body) = as_text(entry) {
                        sections.push(CanonicalSection::Feature(FeatureSection {
                            body: Some(body),
                            ..Default::default()
                        }));
                    }
                }
                other => {
                    debug!("normalize"; "skipping section #{}: {} entry", index, json_kind(other));
                }
            }
        }
        sections
    }

    fn classify(&self, entry: &JsonValue, out: &mut Vec<CanonicalSection>) {
        let fields = self.fields;
        let tag = resolve_text(entry, &fields.section_type);
        let kind = tag.as_deref().and_then(SectionKind::from_tag);
        let title = resolve_text(entry, &fields.section_title);

        // Typed
        if let Some(kind) = kind
            && (title.is_some() || kind.is_structured())
        {
            out.push(self.typed(kind, entry, title));
            return;
        }

        // Headed
        if tag.is_none()
            && let Some(heading) = resolve_text(entry, &fields.section_heading)
        {
            let title = title.unwrap_or(heading);
            let children = resolve_list(entry, &fields.sub_sections);
            out.push(CanonicalSection::Feature(
                self.feature(entry, Some(title.clone())),
            ));
            if let Some(children) = children {
                out.push(CanonicalSection::Subsections(SubsectionsSection {
                    title,
                    bullets: self.child_bullets(children),
                }));
            }
            return;
        }

        // Legacy
        if let Some(tag) = &tag {
            debug!("normalize"; "section type `{}` not usable here, treating as feature", tag);
        }
        out.push(CanonicalSection::Feature(self.feature(entry, title)));
    }

    fn typed(&self, kind: SectionKind, entry: &JsonValue, title: Option<String>) -> CanonicalSection {
        let fields = self.fields;
        match kind {
            SectionKind::Feature => CanonicalSection::Feature(self.feature(entry, title)),
            SectionKind::Subsections => {
                let mut bullets = resolve_strings(entry, &fields.section_bullets);
                if bullets.is_empty()
                    && let Some(children) = resolve_list(entry, &fields.sub_sections)
                {
                    bullets = self.child_bullets(children);
                }
                CanonicalSection::Subsections(SubsectionsSection {
                    title: title.unwrap_or_default(),
                    bullets,
                })
            }
            SectionKind::Gallery => CanonicalSection::Gallery(GallerySection {
                title,
                items: resolve_list(entry, &fields.gallery_items)
                    .map(|items| items.iter().filter_map(as_image).collect())
                    .unwrap_or_default(),
            }),
            SectionKind::Timeline => CanonicalSection::Timeline(TimelineSection {
                title,
                steps: resolve_list(entry, &fields.timeline_steps)
                    .map(|steps| steps.iter().filter_map(|step| self.step(step)).collect())
                    .unwrap_or_default(),
            }),
            SectionKind::Comparison => CanonicalSection::Comparison(ComparisonSection {
                title,
                columns: resolve_strings(entry, &fields.comparison_columns),
                rows: present_items(resolve_list(entry, &fields.comparison_rows)),
                data: present_items(resolve_list(entry, &fields.comparison_data)),
            }),
            SectionKind::Specs => CanonicalSection::Specs(SpecsSection {
                title,
                groups: resolve_list(entry, &fields.section_spec_groups)
                    .map(|groups| groups.iter().filter_map(|g| self.spec_group(g)).collect())
                    .unwrap_or_default(),
            }),
        }
    }

    fn feature(&self, entry: &JsonValue, title: Option<String>) -> FeatureSection {
        let fields = self.fields;
        let body = resolve_paragraphs(entry, &fields.section_body);
        let bullets = resolve_strings(entry, &fields.section_bullets);
        let eyebrow = resolve_text(entry, &fields.eyebrow);
        let subtitle = resolve_text(entry, &fields.subtitle);

        let title = title.unwrap_or_else(|| {
            let has_text =
                body.is_some() || !bullets.is_empty() || eyebrow.is_some() || subtitle.is_some();
            if has_text {
                String::new()
            } else {
                self.options.section_placeholder.clone()
            }
        });

        FeatureSection {
            eyebrow,
            title,
            subtitle,
            body,
            bullets,
            image: resolve_image(entry, &fields.section_image),
            variant: resolve_text(entry, &fields.variant),
        }
    }

    /// One bullet per child: its heading, else its joined body.
    fn child_bullets(&self, children: &[JsonValue]) -> Vec<String> {
        children
            .iter()
            .filter_map(|child| match child {
                JsonValue::Object(_) => resolve_text(child, &self.fields.section_title)
                    .or_else(|| resolve_paragraphs(child, &self.fields.section_body)),
                other => as_text(other),
            })
            .collect()
    }

    fn step(&self, value: &JsonValue) -> Option<TimelineStep> {
        let fields = self.fields;
        match value {
            JsonValue::Object(_) => {
                let step = TimelineStep {
                    label: resolve_text(value, &fields.step_label),
                    title: resolve_text(value, &fields.section_title),
                    body: resolve_paragraphs(value, &fields.section_body),
                };
                (step != TimelineStep::default()).then_some(step)
            }
            other => as_text(other).map(|title| TimelineStep {
                title: Some(title),
                ..Default::default()
            }),
        }
    }

    fn spec_group(&self, value: &JsonValue) -> Option<SpecGroup> {
        if !value.is_object() {
            return None;
        }
        Some(SpecGroup {
            label: resolve_text(value, &self.fields.spec_label),
            rows: resolve_with(value, &self.fields.spec_rows, |rows| self.spec_rows(rows))
                .unwrap_or_default(),
        })
    }

    /// Rows as a list (`[{label, value}]`, `[[k, v]]`, `["k: v"]`)
    /// or as a plain `{label: value}` map.
    fn spec_rows(&self, value: &JsonValue) -> Option<Vec<SpecRow>> {
        match value {
            JsonValue::Array(rows) => Some(rows.iter().filter_map(|row| self.spec_row(row)).collect()),
            JsonValue::Object(map) => Some(
                map.iter()
                    .filter_map(|(label, value)| {
                        Some(SpecRow {
                            label: label.trim().to_string(),
                            value: as_text(value)?,
                        })
                    })
                    .filter(|row| !row.label.is_empty())
                    .collect(),
            ),
            _ => None,
        }
    }

    fn spec_row(&self, value: &JsonValue) -> Option<SpecRow> {
        let (label, value) = match value {
            JsonValue::Object(_) => (
                resolve_text(value, &self.fields.spec_label)?,
                resolve_text(value, &self.fields.spec_value)?,
            ),
            JsonValue::Array(pair) if pair.len() == 2 => (as_text(&pair[0])?, as_text(&pair[1])?),
            JsonValue::String(line) => {
                let (label, value) = line.split_once(':')?;
                (as_text(&label.into())?, as_text(&value.into())?)
            }
            _ => return None,
        };
        Some(SpecRow { label, value })
    }
}

fn present_items(items: Option<&[JsonValue]>) -> Vec<JsonValue> {
    items
        .unwrap_or_default()
        .iter()
        .filter(|item| is_present(item))
        .cloned()
        .collect()
}
