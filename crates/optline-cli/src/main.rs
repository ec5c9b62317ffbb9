//! optline-cli - Demo binary exercising the optline option parser

use anyhow::Result;
use colored::Colorize;
use optline_core::CommandLine;

fn main() -> Result<()> {
    let mut cl = CommandLine::new("Usage: optline-demo [options] <name>");
    let file = cl.add_value(
        Some("f"),
        Some("file"),
        "FILE",
        "write report to FILE or stdout if not specified",
        None,
    )?;
    let quiet = cl.add_toggle(Some("q"), Some("quiet"), "don't print status messages to stdout")?;
    let help = cl.add_toggle(Some("h"), Some("help"), "display this help text")?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let positional = match cl.parse(&args) {
        Ok(positional) => positional,
        Err(err) => {
            eprintln!("{} {}", "invalid command line:".red().bold(), err);
            eprint!("{}", cl.help_text());
            std::process::exit(2);
        }
    };

    if help.is_set() {
        print!("{}", cl.help_text());
        return Ok(());
    }

    if let Some(file) = file.value() {
        println!("--file={}", file);
    }
    if quiet.is_set() {
        println!("--quiet");
    }
    for arg in &positional {
        println!("{}", arg);
    }

    Ok(())
}
