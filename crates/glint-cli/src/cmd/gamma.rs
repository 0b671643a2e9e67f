// crates/glint-cli/src/cmd/gamma.rs

use clap::Args;
use glint_core::gamma::table::{DEFAULT_BEGIN, DEFAULT_END};
use glint_core::GammaTable;
use log::info;

#[derive(Args, Debug)]
pub struct GammaArgs {
    /// Gamma exponent (> 0)
    #[arg(long)]
    pub gamma: f32,

    /// Lowest output byte
    #[arg(long, default_value_t = DEFAULT_BEGIN)]
    pub begin: u8,

    /// Highest output byte
    #[arg(long, default_value_t = DEFAULT_END)]
    pub end: u8,

    /// Look up these inputs (repeatable; conceptually in [0,1])
    #[arg(long, allow_negative_numbers = true)]
    pub at: Vec<f32>,

    /// Print every table entry, comma-separated
    #[arg(long)]
    pub dump: bool,
}

pub fn run(args: GammaArgs) -> anyhow::Result<()> {
    let table = GammaTable::new(args.gamma, args.begin, args.end)?;
    info!(
        "gamma table built: gamma={} len={}",
        table.gamma(),
        table.len()
    );

    println!("table_id={}", table.id_hex());
    println!("len={}", table.len());
    // Construction guarantees at least one entry.
    if let (Some(first), Some(last)) = (table.as_slice().first(), table.as_slice().last()) {
        println!("first={first} last={last}");
    }

    for x in &args.at {
        println!("at {x} = {}", table.get(*x));
    }

    if args.dump {
        let parts: Vec<String> = table.as_slice().iter().map(|b| b.to_string()).collect();
        println!("{}", parts.join(","));
    }
    Ok(())
}
