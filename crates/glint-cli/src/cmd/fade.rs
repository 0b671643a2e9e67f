// crates/glint-cli/src/cmd/fade.rs

use clap::Args;
use glint_core::sample::Normal;
use glint_core::signal::fade::{apply_extend, apply_same};
use glint_core::{Color, Fade, FadeCurve};
use log::info;

use super::util::parse_color_list;

#[derive(Args, Debug)]
pub struct FadeArgs {
    /// First color list, `;`-separated
    #[arg(long, allow_hyphen_values = true)]
    pub a: String,

    /// Second color list, `;`-separated
    #[arg(long, allow_hyphen_values = true)]
    pub b: String,

    /// Blend position
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub fader: f32,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub begin: f32,

    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub end: f32,

    /// Response curve: linear, sqr or sqrt
    #[arg(long, default_value_t = FadeCurve::Linear)]
    pub curve: FadeCurve,

    /// Accept lists of different lengths (shorter one padded with black)
    #[arg(long)]
    pub extend: bool,
}

pub fn run(args: FadeArgs) -> anyhow::Result<()> {
    let fade = Fade::try_new(args.begin, args.end, args.fader, args.curve)?;

    let a = parse_color_list::<Normal>(&args.a)?;
    let b = parse_color_list::<Normal>(&args.b)?;
    info!(
        "fade: a={} b={} fader={} curve={}",
        a.len(),
        b.len(),
        fade.fader,
        fade.curve
    );

    let out: Vec<Color> = if args.extend {
        let mut out = Vec::new();
        apply_extend(&fade, &a, &b, &mut out);
        out
    } else {
        let mut out = vec![Color::zero(); a.len()];
        apply_same(&fade, &a, &b, &mut out)?;
        out
    };

    for c in &out {
        println!("{c}");
    }
    Ok(())
}
