use frontend::App;
use yew::Renderer;

fn main() {
    // Route the shared crate's log output to the browser console
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("Starting promo site");

    Renderer::<App>::new().render();
}
