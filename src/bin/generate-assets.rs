#![forbid(unsafe_code)]

use clap::CommandFactory;
use clap_complete::{generate_to, Shell};
use clap_mangen::Man;
use directree::cli::Args;
use std::fs;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let out_dir = PathBuf::from("dist");
    let completions_dir = out_dir.join("completions");
    let man_dir = out_dir.join("man");

    fs::create_dir_all(&completions_dir)?;
    fs::create_dir_all(&man_dir)?;

    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
        let mut cmd = Args::command();
        generate_to(shell, &mut cmd, "directree", &completions_dir)?;
    }

    let mut page = Vec::new();
    Man::new(Args::command()).render(&mut page)?;
    fs::write(man_dir.join("directree.1"), page)?;

    eprintln!(
        "wrote completions to {} and man page to {}",
        completions_dir.display(),
        man_dir.display()
    );
    Ok(())
}
