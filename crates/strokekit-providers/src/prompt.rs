//! Prompt construction
//!
//! Prompts are a pure function of the shape catalog and the drawing
//! features. Identical inputs always render identical text.

use std::fmt::Write as _;
use strokekit_core::{Locale, ShapeCatalog};
use strokekit_features::DrawingFeatures;

/// System and user prompt for one recognition call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Renders prompts shared by every provider adapter
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build both prompts
    pub fn build(&self, catalog: &ShapeCatalog, features: &DrawingFeatures) -> Prompt {
        Prompt {
            system: self.system_prompt(catalog),
            user: self.user_prompt(features),
        }
    }

    /// Candidate shapes, look-alike warnings and the reply contract
    pub fn system_prompt(&self, catalog: &ShapeCatalog) -> String {
        let shape_list = catalog.ids().join(", ");
        let shapes_desc = catalog
            .iter()
            .map(|s| {
                format!(
                    "{}: {} / {} - {} / {}",
                    s.shape_id, s.name_en, s.name_ja, s.description_en, s.description_ja
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        let negative_examples = catalog
            .iter()
            .filter(|s| !s.negative_examples.en.is_empty())
            .map(|s| {
                format!(
                    "Note: {} are NOT {}s and should score below {}%",
                    s.negative_examples.en, s.name_en, s.negative_examples.score_threshold
                )
            })
            .collect::<Vec<_>>()
            .join(" ");

        let (id_hint, reason_hint) = match catalog.locale {
            Locale::Ja => (
                "識別された形状ID",
                "必ず日本語で簡潔に1文で判断理由を説明してください。",
            ),
            Locale::En => (
                "identified shape ID",
                "Briefly explain the reason in one sentence in English.",
            ),
        };
        let language = catalog.locale;

        let mut prompt = format!(
            "You are an AI for shape recognition in a 3D VR application.\n\
             Identify which of the following shapes the user has drawn in space:\n\
             {shapes_desc}\n\
             \n\
             {negative_examples}\n\
             \n\
             Respond strictly in the following JSON format (Reply in {language} only):\n\
             ```json\n\
             {{\n\
             \x20   \"shape_id\": \"{id_hint}\",\n\
             \x20   \"score\": 0-100,\n\
             \x20   \"reason\": \"{reason_hint}\"\n\
             }}\n\
             ```\n\
             Notes:\n\
             \x20   Choose only one shape_id from the provided list: [{shape_list}].\n\
             \x20   Score represents confidence level (higher = more confident).\n\
             \x20   Score must be between 0-100 (Do not exceed this range).\n"
        );
        // The catalog-wide look-alike threshold comes from the first shape.
        if let Some(first) = catalog.shapes.first() {
            let _ = writeln!(
                prompt,
                "    If the shape resembles a negative example, assign a score below {}%.",
                first.negative_examples.score_threshold
            );
        }
        let _ = write!(
            prompt,
            "    Keep the reason concise (one sentence).\n\
             \x20   Ensure response is fully in {language} only.\n\
             \x20   Strictly follow the exact JSON format.\n\
             \x20   Do not create new shape IDs.\n"
        );
        prompt
    }

    /// Global features and a per-stroke breakdown, three decimals
    pub fn user_prompt(&self, features: &DrawingFeatures) -> String {
        let g = &features.global_features;
        let mut prompt = format!(
            "Analyze the following drawing data:\n\
             \n\
             Global Features:\n\
             - Total Strokes: {}\n\
             - Total Points: {}\n\
             - Aspect Ratio: {:.3}\n\
             - Centroid: x={:.3}, y={:.3}, z={:.3}\n\
             \n\
             Stroke Details:",
            g.total_strokes,
            g.total_points,
            g.aspect_ratio,
            g.centroid.x,
            g.centroid.y,
            g.centroid.z
        );

        for (i, s) in features.strokes.iter().enumerate() {
            let b = &s.bounding_box;
            let _ = write!(
                prompt,
                "\nStroke {}:\n\
                 - Point Count: {}\n\
                 - Bounding Box: width={:.3}, height={:.3}, depth={:.3}\n\
                 - Start Point: x={:.3}, y={:.3}, z={:.3}\n\
                 - End Point: x={:.3}, y={:.3}, z={:.3}\n\
                 - Total Length: {:.3}\n\
                 - Is Closed: {}",
                i + 1,
                s.points_count,
                b.width,
                b.height,
                b.depth,
                s.start_point.x,
                s.start_point.y,
                s.start_point.z,
                s.end_point.x,
                s.end_point.y,
                s.end_point.z,
                s.total_length,
                if s.is_closed { "Yes" } else { "No" }
            );
        }
        prompt
    }
}
