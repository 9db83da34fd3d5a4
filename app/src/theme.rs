//! Maps symbolic [`Style`] tokens onto CSS classes.

use yew::Classes;

use crate::view::Style;

pub trait StyleSheet {
    fn class(&self, style: Style) -> &'static str;

    fn classes(&self, styles: &[Style]) -> Classes {
        let mut out = Classes::new();
        for style in styles {
            out.push(self.class(*style));
        }
        out
    }
}

/// Tailwind utility classes, loaded by `index.html`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tailwind;

impl StyleSheet for Tailwind {
    fn class(&self, style: Style) -> &'static str {
        match style {
            Style::PaddingGenerous => "p-10",
            Style::AlignCenter => "text-center",
            Style::SizeDisplay => "text-4xl",
            Style::SizeLarge => "text-lg",
            Style::WeightBold => "font-bold",
            Style::ColorAccent => "text-indigo-600",
            Style::ColorMuted => "text-gray-700",
            Style::MarginTopSmall => "mt-4",
        }
    }
}
