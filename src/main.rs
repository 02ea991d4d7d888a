use std::time::Instant;

use anyhow::{Result, anyhow};
use clap::Parser;

use algotour::sections::{self, Section};

#[derive(Parser)]
#[command(
    name = "algotour",
    version,
    about = "A narrated tour of generic sequence algorithms in Rust"
)]
struct Args {
    /// Sections to run, in the given order. Runs all of them when empty.
    sections: Vec<String>,

    /// List the available sections and exit.
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.list {
        for s in sections::SECTIONS {
            println!("{:<14} {}", s.name, s.summary);
        }
        return Ok(());
    }

    let chosen: Vec<&Section> = if args.sections.is_empty() {
        sections::SECTIONS.iter().collect()
    } else {
        args.sections
            .iter()
            .map(|name| {
                sections::find(name)
                    .ok_or_else(|| anyhow!("unknown section '{name}' (see --list)"))
            })
            .collect::<Result<_>>()?
    };

    for s in chosen {
        println!("==== {} ====", s.name);
        let started = Instant::now();
        (s.run)()?;
        println!(
            "\n[{} done in {:.1}ms]\n",
            s.name,
            started.elapsed().as_secs_f64() * 1e3
        );
    }
    Ok(())
}
