mod app;
mod components;
mod pages;
mod startup;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    if let Err(err) = startup::start() {
        log::error!("Startup failed: {:#}", err);
    }
}
