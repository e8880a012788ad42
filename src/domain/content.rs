//! Element manifest for hosts.
//!
//! The brush UI needs the id, key, behavior class and a swatch colour for
//! every element. It is served as JSON so the host never hard-codes ids.

use serde::Serialize;

use crate::elements::{BehaviorKind, ElementId, ElementKind};
use super::palette;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ElementManifest {
    format_version: u32,
    elements: Vec<ElementManifestEntry>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementManifestEntry {
    pub id: ElementId,
    pub key: &'static str,
    pub behavior: BehaviorKind,
    pub density: f32,
    pub color: u32,
    pub hidden: bool,
}

pub fn manifest_entries() -> Vec<ElementManifestEntry> {
    ElementKind::ALL
        .iter()
        .map(|&kind| {
            let props = kind.props();
            ElementManifestEntry {
                id: kind.id(),
                key: props.key,
                behavior: props.behavior,
                density: props.density,
                color: palette::palette(kind)[0],
                hidden: kind.is_empty(),
            }
        })
        .collect()
}

pub fn manifest_json() -> String {
    let out = ElementManifest {
        format_version: 1,
        elements: manifest_entries(),
    };
    serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_lists_every_element_once() {
        let json = manifest_json();
        let value: serde_json::Value = serde_json::from_str(&json).expect("manifest is valid json");
        let elements = value["elements"].as_array().expect("elements array");
        assert_eq!(elements.len(), ElementKind::ALL.len());
        assert_eq!(elements[4]["key"], "sand");
        assert_eq!(elements[4]["behavior"], "movable_solid");
        assert_eq!(elements[0]["hidden"], true);
    }
}
