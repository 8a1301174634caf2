use rand::prelude::*;
use rand_distr::StandardNormal;

use crate::flds::Flds;
use crate::phase::Dist;
use crate::{Float, Sim, PAD, PI};

// Builds the initial state the driver consumes: per species a
// drifting Maxwellian in v with a single-mode cosine density
// perturbation in x. A small Gaussian noise floor can be added on
// top to seed modes beyond the drive.
pub fn initialize(sim: &Sim) -> (Vec<Dist>, Flds) {
    let mut rng = thread_rng();
    let kx = 2.0 * PI * sim.mode / (sim.nx as Float * sim.dx);

    let mut dists = Vec::with_capacity(sim.species.len());
    for prm in sim.species.iter() {
        let mut dist = Dist::new(sim, prm);
        let norm = 1.0 / ((2.0 * PI).sqrt() * prm.vth);
        let cols = dist.dim.cols;
        for j in PAD..dist.dim.rows - PAD {
            let vv = (dist.vx[j] - prm.drift) / prm.vth;
            let fv = norm * (-0.5 * vv * vv).exp();
            let row = j * cols;
            for i in PAD..PAD + sim.nx {
                let xx = (i - PAD) as Float * sim.dx;
                let mut val = fv * (1.0 + sim.amplitude * (kx * xx).cos());
                if sim.noise > 0.0 {
                    let r: Float = rng.sample(StandardNormal);
                    val += fv * sim.noise * r;
                }
                dist.f[row + i] = val;
            }
        }
        dist.update_spatial_ghosts();
        dist.update_velocity_ghosts();
        dists.push(dist);
    }
    (dists, Flds::new(sim))
}

// Cell-center positions of the padded spatial axis.
pub fn x_grid(sim: &Sim) -> Vec<Float> {
    (0..sim.xfull())
        .map(|i| (i as Float - PAD as Float) * sim.dx)
        .collect()
}
