use frontend::{api::RealApi, boot};

fn main() {
    console_error_panic_hook::set_once();
    let api = RealApi::new();
    wasm_bindgen_futures::spawn_local(boot::setup(api));
}
