#[cfg(target_arch = "wasm32")]
fn main() {
    kencankuy_frontend::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("kencankuy-frontend runs in the browser; build it with `trunk build`.");
}
