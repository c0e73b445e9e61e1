use crate::app::App;

mod app;
mod components;
mod notify;
mod pages;

fn main() {
    yew::Renderer::<App>::new().render();
}
