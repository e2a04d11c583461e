use animus::{
    Animation, Average, FloatAverage, FreeSemiring, InMemorySink, RenderOpts, Scene,
    SceneFragment, linear, render_to_sink, sample_evenly,
};
use anyhow::Context as _;
use clap::{Parser, Subcommand};
use serde::Serialize;

type Numeric = Animation<FloatAverage<f64>>;

#[derive(Parser, Debug)]
#[command(name = "animus", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sample the demo sequence and parallel animations at evenly spaced progress values.
    Sample(SampleArgs),
    /// Check the semiring laws on the demo animations.
    Laws(SampleArgs),
    /// Print the interval layout of the demo scene.
    Timeline,
    /// Step the demo sequence frame by frame, as a headless renderer would.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Number of samples, including both endpoints.
    #[arg(long, default_value_t = 6)]
    steps: u64,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Frames per second (numerator).
    #[arg(long, default_value_t = 4)]
    fps: u32,
}

#[derive(Serialize)]
struct SampledAnimation {
    name: &'static str,
    duration: f64,
    averages: Vec<f64>,
}

#[derive(Serialize)]
struct LawCheck {
    law: &'static str,
    holds: bool,
}

#[derive(Serialize)]
struct TimelineReport {
    total_duration: f64,
    interpreted_duration: f64,
    intervals: Vec<animus::FragmentInterval>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Laws(args) => cmd_laws(args),
        Command::Timeline => cmd_timeline(),
        Command::Render(args) => cmd_render(args),
    }
}

struct Steps {
    step1: Numeric,
    step2: Numeric,
    step3: Numeric,
}

fn demo_steps() -> anyhow::Result<Steps> {
    Ok(Steps {
        step1: linear(0.0, 200.0, 1.0)?,
        step2: linear(50.0, 200.0, 3.0)?,
        step3: linear(200.0, 300.0, 1.0)?,
    })
}

fn averages(anim: &Numeric, steps: u64) -> anyhow::Result<Vec<f64>> {
    sample_evenly(anim, steps)?
        .into_iter()
        .map(|v| v.avg().context("sampled an empty average"))
        .collect()
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let s = demo_steps()?;
    let sequenced = &(&s.step1 * &s.step2) * &s.step3;
    let paralleled = &s.step1 + &s.step2;

    let out = vec![
        SampledAnimation {
            name: "step1 * step2 * step3",
            duration: sequenced.duration(),
            averages: averages(&sequenced, args.steps)?,
        },
        SampledAnimation {
            name: "step1 + step2",
            duration: paralleled.duration(),
            averages: averages(&paralleled, args.steps)?,
        },
    ];
    print_json(&out)
}

fn same(a: &Numeric, b: &Numeric, steps: u64) -> anyhow::Result<bool> {
    let xs = averages(a, steps)?;
    let ys = averages(b, steps)?;
    Ok(xs.len() == ys.len() && xs.iter().zip(&ys).all(|(x, y)| (x - y).abs() < 1e-9))
}

fn cmd_laws(args: SampleArgs) -> anyhow::Result<()> {
    let Steps {
        step1: a,
        step2: b,
        step3: c,
    } = demo_steps()?;
    let one = Animation::Trivial;
    let n = args.steps;

    let checks = vec![
        LawCheck {
            law: "(a * b) * c == a * (b * c)",
            holds: same(&(&(&a * &b) * &c), &(&a * &(&b * &c)), n)?,
        },
        LawCheck {
            law: "(a + b) + c == a + (b + c)",
            holds: same(&(&(&a + &b) + &c), &(&a + &(&b + &c)), n)?,
        },
        LawCheck {
            law: "a + b == b + a",
            holds: same(&(&a + &b), &(&b + &a), n)?,
        },
        LawCheck {
            law: "a * one == a == one * a",
            holds: same(&(&a * &one), &a, n)? && same(&(&one * &a), &a, n)?,
        },
        LawCheck {
            law: "a * (b + c) == a * b + a * c",
            holds: same(&(&a * &(&b + &c)), &(&(&a * &b) + &(&a * &c)), n)?,
        },
        LawCheck {
            law: "reversed(reversed(a)) == a",
            holds: same(&a.reversed().reversed(), &a, n)?,
        },
    ];

    print_json(&checks)?;
    if let Some(failed) = checks.iter().find(|c| !c.holds) {
        anyhow::bail!("law does not hold: {}", failed.law);
    }
    Ok(())
}

fn demo_scene() -> anyhow::Result<Scene> {
    let s = demo_steps()?;
    let fragment = |name: &str, anim: &Numeric| {
        FreeSemiring::single(SceneFragment::new(name, anim.effect(|_| {})))
    };
    let intro = FreeSemiring::plus(fragment("slide", &s.step1), fragment("grow", &s.step2));
    Ok(Scene::new(FreeSemiring::times(
        intro,
        fragment("settle", &s.step3),
    )))
}

fn cmd_timeline() -> anyhow::Result<()> {
    let scene = demo_scene()?;
    print_json(&TimelineReport {
        total_duration: scene.total_duration(),
        interpreted_duration: scene.animation().duration(),
        intervals: scene.intervals(),
    })
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let s = demo_steps()?;
    let sequenced = (&s.step1 * &s.step2).map(|v| v.avg());
    let opts = RenderOpts {
        fps: animus::Fps::new(args.fps, 1)?,
    };
    let mut sink = InMemorySink::<Option<f64>>::new();
    let frames = render_to_sink(&sequenced, opts, &mut sink)?;
    tracing::info!(frames, "rendered demo sequence");
    print_json(&sink.frames())
}
