// crates/glint-cli/src/cmd/color.rs

use clap::{Args, ValueEnum};
use glint_core::color::{
    compare, distance, limit_max, limit_min, magic_abs, magic_add, magic_ceil, magic_floor,
    magic_hash, magic_invert, magic_mod, magic_mul, magic_neg, magic_pow, magic_pow_mod,
    magic_round, magic_sub, magic_truediv, magic_trunc, rotated, to_hex,
};
use glint_core::sample::{EightBit, Normal, Range255, Rgb, Sample, Scale};
use log::debug;

use super::util::{parse_color, ScaleArg};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorOp {
    /// Parse and print `a` in canonical form
    Show,
    Add,
    Sub,
    Mul,
    /// True division
    Div,
    /// Modulo, signed like the divisor
    Mod,
    /// `a ** b`, or `(a ** b) % c` when `--c` is given
    Pow,
    Abs,
    Ceil,
    Floor,
    Round,
    Trunc,
    Invert,
    Neg,
    Hash,
    /// Per-channel maximum of `a` and `b` (clamp from below)
    Min,
    /// Per-channel minimum of `a` and `b` (clamp from above)
    Max,
    Rotate,
    Distance,
    /// Signed lexicographic comparison `a` vs `b`
    Compare,
    Hex,
}

#[derive(Args, Debug)]
pub struct ColorArgs {
    /// Operator to apply
    #[arg(long, value_enum)]
    pub op: ColorOp,

    /// First operand (name, "(r, g, b)" in [0,1], or #rrggbb)
    #[arg(long, allow_hyphen_values = true)]
    pub a: String,

    /// Second operand for binary operators
    #[arg(long, allow_hyphen_values = true)]
    pub b: Option<String>,

    /// Modulus for three-argument pow
    #[arg(long, allow_hyphen_values = true)]
    pub c: Option<String>,

    /// Scaling policy the arithmetic runs in
    #[arg(long, value_enum, default_value_t = ScaleArg::Normal)]
    pub scale: ScaleArg,

    /// Channel positions for rotate
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub positions: i32,
}

pub fn run(args: ColorArgs) -> anyhow::Result<()> {
    let out = match args.scale {
        ScaleArg::Normal => eval::<Normal>(&args)?,
        ScaleArg::EightBit => eval::<EightBit>(&args)?,
        ScaleArg::Range255 => eval::<Range255>(&args)?,
    };
    println!("{out}");
    Ok(())
}

fn operand<S: Scale>(v: &Option<String>, name: &str, op: ColorOp) -> anyhow::Result<Sample<Rgb, S>> {
    match v {
        Some(s) => parse_color(s),
        None => anyhow::bail!("--op {:?} needs --{}", op, name),
    }
}

/// Evaluate one operator in scale `S`; the result is rendered as text.
pub fn eval<S: Scale>(args: &ColorArgs) -> anyhow::Result<String> {
    let a: Sample<Rgb, S> = parse_color(&args.a)?;
    let b = || operand::<S>(&args.b, "b", args.op);
    debug!("color op={:?} scale={} a={:?}", args.op, S::NAME, a);

    let s = match args.op {
        ColorOp::Show => a.to_string(),
        ColorOp::Add => magic_add(&a, &b()?).to_string(),
        ColorOp::Sub => magic_sub(&a, &b()?).to_string(),
        ColorOp::Mul => magic_mul(&a, &b()?).to_string(),
        ColorOp::Div => magic_truediv(&a, &b()?)?.to_string(),
        ColorOp::Mod => magic_mod(&a, &b()?)?.to_string(),
        ColorOp::Pow => match &args.c {
            Some(_) => {
                let c = operand::<S>(&args.c, "c", args.op)?;
                magic_pow_mod(&a, &b()?, &c)?.to_string()
            }
            None => magic_pow(&a, &b()?)?.to_string(),
        },
        ColorOp::Abs => magic_abs(&a).to_string(),
        ColorOp::Ceil => magic_ceil(&a).to_string(),
        ColorOp::Floor => magic_floor(&a).to_string(),
        ColorOp::Round => magic_round(&a).to_string(),
        ColorOp::Trunc => magic_trunc(&a).to_string(),
        ColorOp::Invert => magic_invert(&a).to_string(),
        ColorOp::Neg => magic_neg(&a).to_string(),
        ColorOp::Hash => magic_hash(&a).to_string(),
        ColorOp::Min => limit_min(&a, &b()?).to_string(),
        ColorOp::Max => limit_max(&a, &b()?).to_string(),
        ColorOp::Rotate => rotated(&a, args.positions).to_string(),
        ColorOp::Distance => distance(&a, &b()?).to_string(),
        ColorOp::Compare => compare(&a, &b()?).to_string(),
        ColorOp::Hex => format!("{:#08x}", to_hex(&a)),
    };
    Ok(s)
}
