use crate::phase::Dist;
use crate::{Float, Sim, PAD};

// Copy the last PAD interior cells into the leading ghosts and the
// first PAD interior cells into the trailing ghosts. Exact copies,
// no arithmetic, so periodicity never drifts.
#[inline(always)]
pub fn update_ghosts_1d(sim: &Sim, fld: &mut Vec<Float>) {
    let nx = sim.nx;
    if !cfg!(feature = "unchecked") {
        assert_eq!(fld.len(), nx + 2 * PAD);
    }
    for k in 0..PAD {
        unsafe {
            // safe because of the length assert above
            *fld.get_unchecked_mut(k) = *fld.get_unchecked(nx + k);
            *fld.get_unchecked_mut(PAD + nx + k) = *fld.get_unchecked(PAD + k);
        }
    }
}

impl Dist {
    // Wrap the spatial ghost columns of every row, ghost rows
    // included so the corners stay consistent.
    #[inline(always)]
    pub fn update_spatial_ghosts(&mut self) {
        let rows = self.dim.rows;
        let cols = self.dim.cols;
        let nx = cols - 2 * PAD;
        if !cfg!(feature = "unchecked") {
            assert_eq!(self.f.len(), rows * cols);
        }
        for j in 0..rows {
            let row = j * cols;
            for k in 0..PAD {
                unsafe {
                    *self.f.get_unchecked_mut(row + k) = *self.f.get_unchecked(row + nx + k);
                    *self.f.get_unchecked_mut(row + PAD + nx + k) =
                        *self.f.get_unchecked(row + PAD + k);
                }
            }
        }
    }

    // Wrap the velocity ghost rows from the opposite edge interior
    // rows, whole rows at a time.
    #[inline(always)]
    pub fn update_velocity_ghosts(&mut self) {
        let rows = self.dim.rows;
        let cols = self.dim.cols;
        let nv = rows - 2 * PAD;
        if !cfg!(feature = "unchecked") {
            assert_eq!(self.f.len(), rows * cols);
        }
        for k in 0..PAD {
            let ghost_lo = k * cols;
            let src_lo = (nv + k) * cols;
            let ghost_hi = (PAD + nv + k) * cols;
            let src_hi = (PAD + k) * cols;
            for i in 0..cols {
                unsafe {
                    *self.f.get_unchecked_mut(ghost_lo + i) = *self.f.get_unchecked(src_lo + i);
                    *self.f.get_unchecked_mut(ghost_hi + i) = *self.f.get_unchecked(src_hi + i);
                }
            }
        }
    }
}
