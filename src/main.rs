#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::mount_to_body(bookdash::frontend::App);
}

// Trunk only builds the wasm32 target; this keeps host-target builds linking.
#[cfg(not(target_arch = "wasm32"))]
fn main() {}
