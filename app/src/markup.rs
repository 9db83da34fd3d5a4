use yew::prelude::*;

use crate::theme::StyleSheet;
use crate::view::ViewNode;

pub fn to_html<S: StyleSheet>(node: &ViewNode, sheet: &S) -> Html {
    let class = sheet.classes(node.styles());
    let body = match node {
        ViewNode::Container { children, .. } => html! {
            <>{ for children.iter().map(|child| to_html(child, sheet)) }</>
        },
        ViewNode::Heading { text, .. } | ViewNode::Text { text, .. } => html! {
            <>{ *text }</>
        },
    };

    html! {
        <@{node.kind().tag()} {class}>{ body }</@>
    }
}
