use crate::flds::Flds;
use crate::{Float, Sim, SpeciesParams, PAD};

pub mod ghosts;
pub mod transport;

pub struct Pos {
    pub row: usize,
    pub col: usize,
}

pub struct SlabDim {
    pub rows: usize,
    pub cols: usize,
}

impl SlabDim {
    #[inline(always)]
    pub fn get_index(&self, pos: Pos) -> usize {
        // Convenience method to get a position in the slab.
        // Using a 1d vec to represent the 2D phase space for speed,
        // row major: row = velocity cell, col = spatial cell.
        if !cfg!(feature = "unchecked") {
            assert!(pos.row < self.rows);
            assert!(pos.col < self.cols);
        }
        pos.row * self.cols + pos.col
    }
}

pub struct Dist {
    // Phase space slab for one species. Both axes carry PAD ghost
    // cells on each side; the species axis is not padded.
    pub f: Vec<Float>,
    pub vx: Vec<Float>,
    pub prm: SpeciesParams,
    pub dim: SlabDim,
}

impl Dist {
    pub fn new(sim: &Sim, prm: &SpeciesParams) -> Dist {
        let rows = prm.nv + 2 * PAD;
        let cols = sim.xfull();
        let mut vx = vec![0.0; rows];
        for (j, v) in vx.iter_mut().enumerate() {
            // Linear velocity grid centered on zero, extended through
            // the ghost rows.
            *v = (j as Float - PAD as Float - 0.5 * (prm.nv as Float - 1.0)) * prm.dv;
        }
        Dist {
            f: vec![0.0; rows * cols],
            vx,
            prm: prm.clone(),
            dim: SlabDim { rows, cols },
        }
    }

    // Sum of the distribution over the interior of both axes.
    pub fn interior_sum(&self, sim: &Sim) -> Float {
        let cols = self.dim.cols;
        let mut total = 0.0;
        for j in PAD..self.dim.rows - PAD {
            let row = j * cols;
            total += self.f[row + PAD..row + PAD + sim.nx].iter().sum::<Float>();
        }
        total
    }
}

// Velocity moment of every species, scaled by its charge density
// normalization and reduced into the total charge. Velocity ghost
// rows are excluded.
pub fn deposit_charge(sim: &Sim, dists: &[Dist], flds: &mut Flds) {
    let xfull = sim.xfull();
    if !cfg!(feature = "unchecked") {
        assert_eq!(dists.len(), flds.rho_spec.len());
        assert_eq!(flds.rho.len(), xfull);
    }
    for v in flds.rho.iter_mut() {
        *v = 0.0;
    }
    for (dist, rho_s) in dists.iter().zip(flds.rho_spec.iter_mut()) {
        if !cfg!(feature = "unchecked") {
            assert_eq!(dist.f.len(), dist.dim.rows * dist.dim.cols);
            assert_eq!(dist.dim.cols, xfull);
            assert_eq!(rho_s.len(), xfull);
        }
        for v in rho_s.iter_mut() {
            *v = 0.0;
        }
        let qn = dist.prm.qn;
        for j in PAD..dist.dim.rows - PAD {
            let row = j * xfull;
            for i in 0..xfull {
                unsafe {
                    // safe because of the length asserts above
                    *rho_s.get_unchecked_mut(i) += qn * *dist.f.get_unchecked(row + i);
                }
            }
        }
        for (tot, s) in flds.rho.iter_mut().zip(rho_s.iter()) {
            *tot += *s;
        }
    }
    ghosts::update_ghosts_1d(sim, &mut flds.rho);
    for rho_s in flds.rho_spec.iter_mut() {
        ghosts::update_ghosts_1d(sim, rho_s);
    }
}
