use glob::glob;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Compiles the preview stylesheet into `$OUT_DIR/main.css`.
fn compile_css() {
    let release = env::var("PROFILE").map_or(false, |profile| profile == "release");

    for entry in glob("sass/**/*.scss").expect("invalid sass glob").flatten() {
        println!("cargo:rerun-if-changed={}", entry.display());
    }

    let style = if release {
        grass::OutputStyle::Compressed
    } else {
        grass::OutputStyle::Expanded
    };
    let options = grass::Options::default().style(style);

    let css = grass::from_path("sass/main.scss", &options).expect("sass/main.scss failed to compile");
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));
    fs::write(out_dir.join("main.css"), css).expect("could not write main.css");
}

fn main() {
    compile_css();
}
