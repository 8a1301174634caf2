use itertools::izip;

use crate::phase::ghosts::update_ghosts_1d;
use crate::{Float, Sim, PAD};

pub struct Flds {
    // The struct that holds all the grid quantities. The field lives
    // on faces, staggered half a cell from the distribution's spatial
    // axis; everything shares the same padded 1-D layout.
    pub e_x: Vec<Float>,
    pub j_x: Vec<Float>,
    pub rho: Vec<Float>,
    pub rho_spec: Vec<Vec<Float>>,
    // workspace: the field averaged onto cell centers
    pub f_ex: Vec<Float>,
}

impl Flds {
    pub fn new(sim: &Sim) -> Flds {
        let xfull = sim.xfull();
        Flds {
            e_x: vec![0.0; xfull],
            j_x: vec![0.0; xfull],
            rho: vec![0.0; xfull],
            rho_spec: vec![vec![0.0; xfull]; sim.species.len()],
            f_ex: vec![0.0; xfull],
        }
    }

    #[inline(always)]
    fn interior_mean(sim: &Sim, fld: &[Float]) -> Float {
        fld[PAD..PAD + sim.nx].iter().sum::<Float>() / (sim.nx as Float)
    }

    // Bootstrap field solve, used exactly once before the time loop.
    // The interior mean of the charge is removed first: the periodic
    // zero mode is ill posed, subtracting the mean is the gauge choice
    // that makes the cumulative sum single valued. The field's own
    // additive constant is pinned by removing its mean afterwards.
    pub fn solve_poisson(&mut self, sim: &Sim) {
        let mean = Flds::interior_mean(sim, &self.rho);
        for v in self.rho[PAD..PAD + sim.nx].iter_mut() {
            *v -= mean;
        }
        update_ghosts_1d(sim, &mut self.rho);

        // cumulative sum across the interior, the discrete form of
        // Gauss's law in 1-D
        for i in PAD + 1..PAD + sim.nx {
            self.e_x[i] = self.e_x[i - 1] + self.rho[i];
        }
        update_ghosts_1d(sim, &mut self.e_x);

        let mean = Flds::interior_mean(sim, &self.e_x);
        for v in self.e_x[PAD..PAD + sim.nx].iter_mut() {
            *v -= mean;
        }
        update_ghosts_1d(sim, &mut self.e_x);
    }

    // Discrete Ampere's law: E_n+1 = E_n - J, with the interior mean
    // of the current removed for the same gauge reason as the charge
    // in the Poisson solve. Used every cycle after the bootstrap.
    pub fn advance_efield(&mut self, sim: &Sim) {
        let mean = Flds::interior_mean(sim, &self.j_x);
        for v in self.j_x[PAD..PAD + sim.nx].iter_mut() {
            *v -= mean;
        }
        update_ghosts_1d(sim, &mut self.j_x);

        for (e, j) in izip!(
            self.e_x[PAD..PAD + sim.nx].iter_mut(),
            self.j_x[PAD..PAD + sim.nx].iter()
        ) {
            *e -= *j;
        }
        update_ghosts_1d(sim, &mut self.e_x);
    }

    // Average the face-staggered field onto the distribution's cell
    // centers: f_ex[i] = (e[i] + e[i-1]) / 2.
    pub fn interp_to_centers(&mut self, sim: &Sim) {
        for i in PAD..PAD + sim.nx {
            self.f_ex[i] = 0.5 * (self.e_x[i] + self.e_x[i - 1]);
        }
        update_ghosts_1d(sim, &mut self.f_ex);
    }
}
