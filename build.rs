use std::{env, fs, io, path::Path};

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=README.md");
    let out_dir = env::var_os("OUT_DIR").ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR"))?;
    let readme = fs::read_to_string("README.md")?;
    fs::write(Path::new(&out_dir).join("README-lib.md"), crate_docs(&readme))
}

// Drops the title block; examples under "## Features" need optional crates so they become `ignore`.
fn crate_docs(readme: &str) -> String {
    let mut optional = false;
    readme
        .lines()
        .skip_while(|line| !line.starts_with("[docs]"))
        .skip(1)
        .map(|line| {
            optional |= line.starts_with("## Features");
            let line = if optional && line.starts_with("```rust") { "```ignore" } else { line };
            format!("{}\n", line)
        })
        .collect()
}
