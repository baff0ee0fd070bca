//! Local static host for the built page
//!
//! Usage: `rope-hop-serve [root-dir]` (default `www`); listen port comes
//! from the `PORT` environment variable.

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> std::io::Result<()> {
    use std::path::PathBuf;

    env_logger::init();

    let root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("www"));
    let port = rope_hop::server::port_from_env();

    rope_hop::server::serve(root, port).await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The server has no wasm build; the page entry point is the library's
    // wasm_main.
}
