use serde::Deserialize;
use std::fs;

use anyhow::{Context, Result};

pub mod flds;
pub mod init;
pub mod phase;
pub mod save;

// We use a type alias for f64/Float to easily support
// double and single precision.
#[cfg(feature = "dprec")]
pub type Float = f64;

#[cfg(not(feature = "dprec"))]
pub type Float = f32;

pub const PI: Float = std::f64::consts::PI as Float;

// Ghost cells on each side of a padded axis. The 4th order flux
// stencil reads two cells past a face, so two is the minimum.
pub const PAD: usize = 2;

pub const E_TOL: Float = 1e-4;

#[derive(Deserialize)]
pub struct Config {
    pub params: Params,
    pub setup: Setup,
    pub output: Output,
    pub species: Vec<SpeciesParams>,
}

#[derive(Deserialize)]
pub struct Params {
    pub nx: usize,
    pub dx: Float,
    pub dt: Float,
    pub ntime: u32,
}

#[derive(Deserialize)]
pub struct Setup {
    pub amplitude: Float,
    pub mode: Float,
    pub noise: Float,
}

#[derive(Deserialize)]
pub struct Output {
    pub write_output: bool,
    pub output_interval: u32,
    pub stride: usize,
}

#[derive(Deserialize, Clone)]
pub struct SpeciesParams {
    pub nv: usize,
    pub dv: Float,
    pub qm: Float,
    pub qn: Float,
    pub drift: Float,
    pub vth: Float,
}

impl Config {
    pub fn new() -> Result<Config> {
        let contents =
            fs::read_to_string("config.toml").context("Could not open the config.toml file")?;
        toml::from_str(&contents).with_context(|| "Could not parse Config file")
    }
}

pub struct Sim {
    pub nx: usize,
    pub dx: Float,
    pub dt: Float,
    pub ntime: u32,
    pub amplitude: Float,
    pub mode: Float,
    pub noise: Float,
    pub write_output: bool,
    pub output_interval: u32,
    pub stride: usize,
    pub species: Vec<SpeciesParams>,
}

impl Sim {
    pub fn new(cfg: &Config) -> Sim {
        Sim {
            nx: cfg.params.nx,
            dx: cfg.params.dx,
            dt: cfg.params.dt,
            ntime: cfg.params.ntime,
            amplitude: cfg.setup.amplitude,
            mode: cfg.setup.mode,
            noise: cfg.setup.noise,
            write_output: cfg.output.write_output,
            output_interval: cfg.output.output_interval,
            stride: cfg.output.stride,
            species: cfg.species.clone(),
        }
    }

    // Spatial axis length including the ghost cells.
    #[inline(always)]
    pub fn xfull(&self) -> usize {
        self.nx + 2 * PAD
    }
}

pub fn run(cfg: Config) -> Result<()> {
    // All shape and sign checks happen here, once. The loop body
    // assumes valid indices and does not re-check per iteration.
    if cfg.params.nx == 0 {
        return Err(anyhow::Error::msg("Number of spatial cells must be nonzero"));
    }
    if !(cfg.params.dx > 0.0) {
        return Err(anyhow::Error::msg("Spatial step dx must be positive"));
    }
    if !(cfg.params.dt > 0.0) {
        return Err(anyhow::Error::msg("Time step dt must be positive"));
    }
    if cfg.species.is_empty() {
        return Err(anyhow::Error::msg("At least one species is required"));
    }
    for sp in &cfg.species {
        if sp.nv == 0 {
            return Err(anyhow::Error::msg("Number of velocity cells must be nonzero"));
        }
        if !(sp.dv > 0.0) {
            return Err(anyhow::Error::msg("Velocity step dv must be positive"));
        }
    }
    if cfg.output.output_interval == 0 {
        return Err(anyhow::Error::msg("Output interval must be nonzero"));
    }
    if cfg.output.stride == 0 {
        return Err(anyhow::Error::msg("Output stride must be nonzero"));
    }

    let sim = Sim::new(&cfg);
    println!("initializing distributions");
    let (mut dists, mut flds) = init::initialize(&sim);

    // Bootstrap: one Poisson solve gives a field consistent with the
    // initial charge, then one position step seeds the current so the
    // leapfrog cycle starts consistent.
    phase::deposit_charge(&sim, &dists, &mut flds);
    flds.solve_poisson(&sim);
    phase::transport::advance_position(&sim, &mut dists, &mut flds);
    flds.advance_efield(&sim);

    if sim.write_output {
        save::save_grids(&sim, &dists)?;
    }

    let mut history =
        Vec::<save::HistoryRecord>::with_capacity((sim.ntime / sim.output_interval) as usize + 1);

    for t in 0..sim.ntime {
        phase::transport::advance_velocity(&sim, &mut dists, &mut flds);
        phase::transport::advance_position(&sim, &mut dists, &mut flds);
        phase::deposit_charge(&sim, &dists, &mut flds);
        flds.advance_efield(&sim);

        if t % sim.output_interval == 0 {
            println!("{}", t);
            if sim.write_output {
                history.push(save::HistoryRecord::sample(t, &sim, &flds));
                save::save_output(t, &sim, &dists, &flds)?;
            }
        }
    }

    if sim.write_output {
        save::save_history(history)?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn build_test_sim() -> Sim {
    // Small two stream setup shared by the unit tests.
    let cfg = Config {
        params: Params {
            nx: 16,
            dx: 1.0,
            dt: 0.05,
            ntime: 10,
        },
        setup: Setup {
            amplitude: 0.05,
            mode: 1.0,
            noise: 0.0,
        },
        output: Output {
            write_output: false,
            output_interval: 5,
            stride: 1,
        },
        species: vec![
            SpeciesParams {
                nv: 12,
                dv: 0.5,
                qm: -1.0,
                qn: -0.25,
                drift: 1.5,
                vth: 0.75,
            },
            SpeciesParams {
                nv: 12,
                dv: 0.5,
                qm: -1.0,
                qn: -0.25,
                drift: -1.5,
                vth: 0.75,
            },
        ],
    };
    Sim::new(&cfg)
}
