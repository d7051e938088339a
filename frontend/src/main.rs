use renovation_viewer::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("Starting renovation viewer");
    yew::Renderer::<App>::new().render();
}
