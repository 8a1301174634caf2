use crate::flds::Flds;
use crate::phase::{ghosts, Dist};
use crate::{Float, Sim, PAD};

// 4th order conservative upwind-biased flux through the face to the
// right of cell i, as a degree-4 polynomial in the cell shift a.
// Stencil: cells i-1, i, i+1, i+2. Accurate only while |a| < 1; the
// caller keeps dt small enough, nothing is clamped here.
#[inline(always)]
pub fn flux4(a: Float, fm1: Float, f0: Float, fp1: Float, fp2: Float) -> Float {
    let a2 = a * a;
    a * (-fp2 + 7.0 * fp1 + 7.0 * f0 - fm1) / 12.0
        + a2 * (fp2 - 15.0 * fp1 + 15.0 * f0 - fm1) / 24.0
        + a2 * a * (fp2 - fp1 - f0 + fm1) / 12.0
        + a2 * a2 * (-fp2 + 3.0 * fp1 - 3.0 * f0 + fm1) / 24.0
}

// Advect every species along x at its velocity-row speed and deposit
// the face fluxes into the total current. The flux difference form
// makes the summed distribution exactly conserved: the boundary
// fluxes are periodic copies of each other and cancel.
pub fn advance_position(sim: &Sim, dists: &mut [Dist], flds: &mut Flds) {
    let xfull = sim.xfull();
    let dt_dx = sim.dt / sim.dx;

    for v in flds.j_x.iter_mut() {
        *v = 0.0;
    }

    let mut flux = vec![0.0; xfull];
    for dist in dists.iter_mut() {
        let rows = dist.dim.rows;
        let cols = dist.dim.cols;
        if !cfg!(feature = "unchecked") {
            assert_eq!(cols, xfull);
            assert_eq!(dist.f.len(), rows * cols);
            assert_eq!(flds.j_x.len(), xfull);
            assert_eq!(flux.len(), xfull);
        }
        let qn = dist.prm.qn;
        for j in PAD..rows - PAD {
            // shift in cell units for this velocity row
            let aa = dist.vx[j] * dt_dx;
            let row = j * cols;
            for i in PAD - 1..PAD + sim.nx {
                unsafe {
                    // safe because of the length asserts above:
                    // i + 2 <= PAD + nx + 1 < cols
                    *flux.get_unchecked_mut(i) = flux4(
                        aa,
                        *dist.f.get_unchecked(row + i - 1),
                        *dist.f.get_unchecked(row + i),
                        *dist.f.get_unchecked(row + i + 1),
                        *dist.f.get_unchecked(row + i + 2),
                    );
                }
            }
            for i in PAD..PAD + sim.nx {
                unsafe {
                    *dist.f.get_unchecked_mut(row + i) -=
                        *flux.get_unchecked(i) - *flux.get_unchecked(i - 1);
                    *flds.j_x.get_unchecked_mut(i) += qn * *flux.get_unchecked(i);
                }
            }
        }
        dist.update_spatial_ghosts();
        dist.update_velocity_ghosts();
    }
    ghosts::update_ghosts_1d(sim, &mut flds.j_x);
}

// Advect every species along v under the cell-centered field. The
// staggered field is first averaged onto centers; ghost columns are
// transported with the wrapped field values, so the spatial ghosts
// remain exact mirrors without a second wrap. No current comes out
// of this step, current is a spatial flux quantity.
pub fn advance_velocity(sim: &Sim, dists: &mut [Dist], flds: &mut Flds) {
    flds.interp_to_centers(sim);

    for dist in dists.iter_mut() {
        let rows = dist.dim.rows;
        let cols = dist.dim.cols;
        if !cfg!(feature = "unchecked") {
            assert_eq!(cols, flds.f_ex.len());
            assert_eq!(dist.f.len(), rows * cols);
        }
        let qmdt_dv = dist.prm.qm * sim.dt / dist.prm.dv;
        let mut flux = vec![0.0; rows];
        for i in 0..cols {
            // shift in velocity cell units for this spatial column
            let aa = flds.f_ex[i] * qmdt_dv;
            for j in PAD - 1..rows - PAD {
                unsafe {
                    // safe: j + 2 <= rows - PAD + 1 < rows and the
                    // column index i < cols was checked above
                    *flux.get_unchecked_mut(j) = flux4(
                        aa,
                        *dist.f.get_unchecked((j - 1) * cols + i),
                        *dist.f.get_unchecked(j * cols + i),
                        *dist.f.get_unchecked((j + 1) * cols + i),
                        *dist.f.get_unchecked((j + 2) * cols + i),
                    );
                }
            }
            for j in PAD..rows - PAD {
                unsafe {
                    *dist.f.get_unchecked_mut(j * cols + i) -=
                        *flux.get_unchecked(j) - *flux.get_unchecked(j - 1);
                }
            }
        }
        dist.update_velocity_ghosts();
    }
}
