use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use colored::Colorize;
use rand::prelude::*;
use rand_distr::StandardNormal;
use rand_xoshiro::*;

use dilepton::*;
use dilepton::input::*;

/// What the driver decays, and how many times
struct Run {
    code: i32,
    parent: Species,
    momentum: [f64; 3],
    pt_spread: f64,
    events: usize,
    seed: u64,
    output: Option<String>,
}

impl Run {
    fn from_config(input: &Config) -> Result<Self, InputError> {
        // either a combined code, or the parent and partner species
        let code = match input.read::<i32, _>("run:parent") {
            Ok(code) => code,
            Err(e) if e.kind() == InputErrorKind::Conversion => {
                let parent: Species = input.read("run:parent")?;
                let partner: Option<Species> = input.read_opt("run:partner")?;
                decay_code(parent, partner)
            },
            Err(e) => return Err(e),
        };

        let (parent_code, _) = split_code(code);
        let parent = Species::from_pdg(parent_code)
            .ok_or_else(|| InputError::invalid("run:parent", "parent is not a known species"))?;

        Ok(Run {
            code,
            parent,
            momentum: input.read_opt::<[f64; 3], _>("run:momentum")?.unwrap_or([0.0; 3]),
            pt_spread: input.read_opt::<f64, _>("run:pt_spread")?.unwrap_or(0.0),
            events: input.read("run:events")?,
            seed: input.read_opt::<u64, _>("run:seed")?.unwrap_or(0),
            output: input.read_opt("run:output")?,
        })
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".bold().bright_red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .ok_or_else(|| InputError::file("no input file given. Usage: dilepton input-file"))?;

    let mut input = Config::from_file(&path)?;
    input.with_context("constants")?;

    let settings = Settings::from_config(&input)?;
    let run = Run::from_config(&input)?;

    let decayer = Decayer::new(settings)?;
    let channel = decayer.classify(run.code)
        .ok_or(DecayError::UnknownChannel { code: run.code })?;

    println!("{} {} {} decays ({}) of {}s with momentum [{}, {}, {}] GeV...",
        "Sampling".bold().cyan(),
        run.events,
        settings.leptons,
        channel.to_string().bold().blue(),
        run.parent,
        run.momentum[0], run.momentum[1], run.momentum[2],
    );

    let mass = decayer.table().mass(run.parent);
    let mut rng = Xoshiro256StarStar::seed_from_u64(run.seed);

    let mut output = match &run.output {
        Some(filename) => Some(BufWriter::new(File::create(filename)?)),
        None => None,
    };

    let mut accepted = 0;
    let mut sum = 0.0;
    let mut sum_sqr = 0.0;

    for _ in 0..run.events {
        let px = run.momentum[0] + run.pt_spread * rng.sample::<f64,_>(StandardNormal);
        let py = run.momentum[1] + run.pt_spread * rng.sample::<f64,_>(StandardNormal);
        let parent = FourVector::new(0.0, px, py, run.momentum[2]).with_sqr(mass * mass);

        if let Some(event) = decayer.decay(run.code, parent, &mut rng) {
            accepted += 1;
            sum += event.pair_mass;
            sum_sqr += event.pair_mass.powi(2);
            if let Some(file) = output.as_mut() {
                write!(file, "{}", event)?;
            }
        }
    }

    if let Some(mut file) = output {
        file.flush()?;
    }

    if accepted == 0 {
        println!("{} no decays were accepted.", "Finished:".bold().bright_red());
        return Ok(());
    }

    let n = accepted as f64;
    let mean = sum / n;
    let std_dev = (sum_sqr / n - mean * mean).max(0.0).sqrt();

    println!("{} {} of {} decays accepted.", "Finished:".bold().bright_green(), accepted, run.events);
    println!("\tpair mass = {:.6e} +/- {:.6e} GeV", mean, std_dev);
    if let Some(spectrum) = decayer.spectrum(channel) {
        println!("\tspectrum: [{:.4e}, {:.4e}] GeV in {} bins, mean {:.6e} GeV", spectrum.min(), spectrum.max(), spectrum.bins(), spectrum.mean());
    }
    if let Some(filename) = &run.output {
        println!("\tproducts written to {}", filename.bold().blue());
    }

    Ok(())
}
