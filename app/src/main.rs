use gloo::console::log;

use echotwin::App;

fn main() {
    log!("EchoTwin: mounting root view");
    yew::Renderer::<App>::new().render();
}
