//! Build script for generating the C header.

fn main() {
    let Ok(crate_dir) = std::env::var("CARGO_MANIFEST_DIR") else {
        return;
    };
    let Ok(out_dir) = std::env::var("OUT_DIR") else {
        return;
    };
    let config = cbindgen::Config {
        language: cbindgen::Language::C,
        include_guard: Some("PALLETLOAD_H".to_string()),
        ..Default::default()
    };

    if let Ok(bindings) = cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_config(config)
        .generate()
    {
        bindings.write_to_file(std::path::Path::new(&out_dir).join("palletload.h"));
    }
}
