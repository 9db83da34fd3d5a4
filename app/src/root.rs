use crate::view::{Style, ViewNode};

pub const TITLE: &str = "Welcome to EchoTwin";
pub const SUBTITLE: &str = "Your personalized digital twin platform";

/// Builds the welcome banner. Pure: every call returns an equal tree.
pub fn render() -> ViewNode {
    ViewNode::container(
        &[Style::PaddingGenerous, Style::AlignCenter],
        vec![
            ViewNode::heading(
                &[Style::SizeDisplay, Style::WeightBold, Style::ColorAccent],
                TITLE,
            ),
            ViewNode::text(
                &[Style::MarginTopSmall, Style::SizeLarge, Style::ColorMuted],
                SUBTITLE,
            ),
        ],
    )
}
