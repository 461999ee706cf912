//! Sheet configuration
//!
//! Every sheet is a plain value built from literals each time it is
//! presented. Nothing here is mutated after construction.

use crate::theme::Tint;
use std::fmt;

/// Presentation units that make up one terminal row
pub const UNITS_PER_ROW: u16 = 20;

/// Icon badge or action button configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetConfig {
    /// Icon identifier for the badge, label text for buttons
    pub content: String,
    /// Fill colour, rendered as a gradient
    pub tint: Tint,
    /// Colour of the glyph or label on top of the fill
    pub foreground: Tint,
}

impl SheetConfig {
    pub fn new(content: impl Into<String>, tint: Tint, foreground: Tint) -> Self {
        Self {
            content: content.into(),
            tint,
            foreground,
        }
    }
}

/// Everything a sheet view needs to render itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSpec {
    pub title: String,
    pub body: String,
    pub image: SheetConfig,
    pub button1: SheetConfig,
    pub button2: Option<SheetConfig>,
    /// Fixed presentation height in layout units
    pub height: u16,
}

impl SheetSpec {
    /// Action buttons in display order: primary, then secondary if any
    pub fn actions(&self) -> impl Iterator<Item = &SheetConfig> {
        std::iter::once(&self.button1).chain(self.button2.as_ref())
    }

    /// Presentation height converted to terminal rows
    pub fn rows(&self) -> u16 {
        self.height / UNITS_PER_ROW
    }
}

/// The sheet variants offered by the root screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetKind {
    Alert,
    Question,
    Request,
}

impl SheetKind {
    /// All variants in trigger-bar order
    pub const ALL: [SheetKind; 3] = [SheetKind::Alert, SheetKind::Question, SheetKind::Request];

    pub fn trigger_label(&self) -> &'static str {
        match self {
            SheetKind::Alert => "Alert",
            SheetKind::Question => "Question",
            SheetKind::Request => "Request",
        }
    }

    pub fn trigger_tint(&self) -> Tint {
        match self {
            SheetKind::Alert => Tint::Red,
            SheetKind::Question => Tint::Blue,
            SheetKind::Request => Tint::Green,
        }
    }

    pub fn spec(&self) -> SheetSpec {
        match self {
            SheetKind::Alert => SheetSpec {
                title: "Ooops!".to_string(),
                body: "Lorem Ipsum is simply dummy text of the printing and typesetting industry."
                    .to_string(),
                image: SheetConfig::new("exclamationmark.triangle", Tint::Red, Tint::White),
                button1: SheetConfig::new("Done", Tint::Red, Tint::White),
                button2: None,
                height: 260,
            },
            SheetKind::Question => SheetSpec {
                title: "Replace Existing Folder?".to_string(),
                body: "Are you sure you want to replace the existing folder?".to_string(),
                image: SheetConfig::new("questionmark.folder.fill", Tint::Blue, Tint::White),
                button1: SheetConfig::new("Replace", Tint::Blue, Tint::White),
                button2: Some(SheetConfig::new("Cancel", Tint::Neutral, Tint::Primary)),
                height: 330,
            },
            SheetKind::Request => SheetSpec {
                title: "Request from iJustine".to_string(),
                body: "Do you really want to overwrite the current folder with this new one?"
                    .to_string(),
                image: SheetConfig::new("person.fill.checkmark", Tint::Green, Tint::White),
                button1: SheetConfig::new("Replace", Tint::Green, Tint::White),
                button2: Some(SheetConfig::new("Cancel", Tint::Red, Tint::White)),
                height: 330,
            },
        }
    }
}

impl fmt::Display for SheetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.trigger_label())
    }
}

/// Terminal glyph for an icon identifier
pub fn icon_glyph(identifier: &str) -> &'static str {
    match identifier {
        "exclamationmark.triangle" | "exclamationmark.triangle.fill" => "⚠",
        "questionmark.folder" | "questionmark.folder.fill" => "?",
        "person.fill.checkmark" | "person.crop.circle.badge.checkmark" => "✓",
        "trash" | "trash.fill" => "✗",
        _ => "●",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(spec: &SheetSpec) -> Vec<(&str, Tint, Tint)> {
        spec.actions()
            .map(|a| (a.content.as_str(), a.tint, a.foreground))
            .collect()
    }

    #[test]
    fn test_alert_spec() {
        let spec = SheetKind::Alert.spec();
        assert_eq!(spec.title, "Ooops!");
        assert_eq!(
            spec.body,
            "Lorem Ipsum is simply dummy text of the printing and typesetting industry."
        );
        assert_eq!(
            spec.image,
            SheetConfig::new("exclamationmark.triangle", Tint::Red, Tint::White)
        );
        assert_eq!(labels(&spec), vec![("Done", Tint::Red, Tint::White)]);
        assert!(spec.button2.is_none());
        assert_eq!(spec.height, 260);
    }

    #[test]
    fn test_question_spec() {
        let spec = SheetKind::Question.spec();
        assert_eq!(spec.title, "Replace Existing Folder?");
        assert_eq!(
            spec.body,
            "Are you sure you want to replace the existing folder?"
        );
        assert_eq!(
            spec.image,
            SheetConfig::new("questionmark.folder.fill", Tint::Blue, Tint::White)
        );
        assert_eq!(
            labels(&spec),
            vec![
                ("Replace", Tint::Blue, Tint::White),
                ("Cancel", Tint::Neutral, Tint::Primary)
            ]
        );
        assert_eq!(spec.height, 330);
    }

    #[test]
    fn test_request_spec() {
        let spec = SheetKind::Request.spec();
        assert_eq!(spec.title, "Request from iJustine");
        assert_eq!(
            spec.body,
            "Do you really want to overwrite the current folder with this new one?"
        );
        assert_eq!(
            spec.image,
            SheetConfig::new("person.fill.checkmark", Tint::Green, Tint::White)
        );
        assert_eq!(
            labels(&spec),
            vec![
                ("Replace", Tint::Green, Tint::White),
                ("Cancel", Tint::Red, Tint::White)
            ]
        );
        assert_eq!(spec.height, 330);
    }

    #[test]
    fn test_badges_use_white_glyphs() {
        for kind in SheetKind::ALL {
            assert_eq!(kind.spec().image.foreground, Tint::White, "{kind}");
        }
    }

    #[test]
    fn test_trigger_labels_and_tints() {
        let triggers: Vec<_> = SheetKind::ALL
            .iter()
            .map(|k| (k.trigger_label(), k.trigger_tint()))
            .collect();
        assert_eq!(
            triggers,
            vec![
                ("Alert", Tint::Red),
                ("Question", Tint::Blue),
                ("Request", Tint::Green)
            ]
        );
    }

    #[test]
    fn test_rows_from_height() {
        assert_eq!(SheetKind::Alert.spec().rows(), 13);
        assert_eq!(SheetKind::Question.spec().rows(), 16);
        assert_eq!(SheetKind::Request.spec().rows(), 16);
    }

    #[test]
    fn test_icon_glyph_fallback() {
        assert_eq!(icon_glyph("exclamationmark.triangle"), "⚠");
        assert_eq!(icon_glyph("not.a.symbol"), "●");
    }
}
