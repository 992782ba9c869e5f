#![allow(dead_code)]

use std::sync::Arc;
use strokekit_core::{
    DrawingData, ModelConfig, ModelSpec, NegativeExamples, Point3D, Provider, ShapeInfo, Stroke,
};
use strokekit_providers::{ChatAdapter, ProviderAdapter, ScriptedTransport};

pub fn shapes() -> Vec<ShapeInfo> {
    vec![
        ShapeInfo {
            shape_id: "triangle".into(),
            prefab_name: "TrianglePrefab".into(),
            threshold: 70,
            name_ja: "三角形".into(),
            name_en: "Triangle".into(),
            description_ja: "3つの角を持つ閉じた形".into(),
            description_en: "a closed shape with three corners".into(),
            negative_examples: NegativeExamples {
                en: "open V shapes".into(),
                ja: "開いたV字".into(),
                score_threshold: 30,
            },
        },
        ShapeInfo {
            shape_id: "star".into(),
            prefab_name: "StarPrefab".into(),
            threshold: 60,
            name_ja: "星".into(),
            name_en: "Star".into(),
            description_ja: "5つの先端".into(),
            description_en: "five points".into(),
            negative_examples: NegativeExamples::default(),
        },
    ]
}

/// One closed triangular stroke; routes to group B
pub fn triangle_drawing() -> DrawingData {
    let mut drawing = DrawingData::new(
        "drawing-tri",
        "scene-1",
        vec![Stroke::new(vec![
            Point3D::new(0.0, 0.0, 0.0),
            Point3D::new(1.0, 0.0, 0.0),
            Point3D::new(0.5, 0.8, 0.0),
            Point3D::new(0.0, 0.0, 0.0),
        ])],
    );
    drawing.client_id = "headset-7".into();
    drawing
}

/// Three long straight strokes; low density, routes to group A
pub fn three_lines_drawing() -> DrawingData {
    let strokes = (0..3)
        .map(|i| {
            let y = i as f64;
            Stroke::new(vec![Point3D::new(0.0, y, 0.0), Point3D::new(1.0, y, 0.0)])
        })
        .collect();
    DrawingData::new("drawing-lines", "scene-1", strokes)
}

pub fn reply(shape_id: &str, score: u8) -> String {
    format!(
        r#"{{"shape_id":"{}","score":{},"reason":"テスト"}}"#,
        shape_id, score
    )
}

/// Adapter answering `model` with `text`
pub fn scripted(provider: Provider, model: &str, text: &str) -> Arc<dyn ProviderAdapter> {
    Arc::new(ChatAdapter::new(
        ScriptedTransport::new(provider).reply(model, text),
        vec![ModelSpec::new(model, ModelConfig::default())],
    ))
}
