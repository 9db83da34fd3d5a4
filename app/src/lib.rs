//! EchoTwin web shell: a static welcome banner rendered with Yew.

pub mod markup;
pub mod root;
pub mod theme;
pub mod view;

use yew::prelude::*;

use crate::theme::Tailwind;

#[function_component(App)]
pub fn app() -> Html {
    markup::to_html(&root::render(), &Tailwind)
}
