use std::env;
use std::fs;
use std::path::PathBuf;

// Puts memory.x where the linker can find it and adds the linker scripts
// the runtime and defmt need.

fn main() {
    let out = PathBuf::from(env::var_os("OUT_DIR").unwrap_or_default());
    fs::write(out.join("memory.x"), include_bytes!("memory.x")).unwrap_or_else(|e| {
        panic!("cannot write memory.x: {e}");
    });
    println!("cargo:rustc-link-search={}", out.display());
    println!("cargo:rerun-if-changed=memory.x");

    // Skip args already supplied through RUSTFLAGS to avoid duplicate scripts
    let rustflags = env::var("CARGO_ENCODED_RUSTFLAGS").unwrap_or_default();
    if !rustflags.contains("link.x") {
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
    }
    if !rustflags.contains("link-rp.x") {
        println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    }
    if !rustflags.contains("defmt.x") {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }
    if !rustflags.contains("--nmagic") {
        println!("cargo:rustc-link-arg-bins=--nmagic");
    }
}
