use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("marrow")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract the main article body from news pages")
        .arg(clap::arg!(<INPUT> "URL to fetch, local HTML file, or '-' for stdin"))
        .arg(
            clap::arg!(-b --"base-url" <URL> "Base URL for resolving relative image paths")
                .value_name("URL"),
        )
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (html, text, json, images)")
                .value_name("FORMAT")
                .default_value("html")
                .value_parser(["html", "text", "json", "images"]),
        )
        .arg(clap::arg!(--"min-length" <NUM> "Minimum cleaned-content length in characters").default_value("500"))
        .arg(clap::arg!(--"min-score" <NUM> "Minimum density score for content candidates").default_value("100"))
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(clap::arg!(--"user-agent" <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(-v --verbose "Enable debug logging and progress output"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "marrow", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "marrow", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "marrow", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "marrow", &completions_dir).unwrap();
}
