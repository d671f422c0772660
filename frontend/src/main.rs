//! Entry point for the WASM application

pub fn main() {
    pdfdrop_web::start();
}
