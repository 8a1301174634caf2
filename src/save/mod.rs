use crate::flds::Flds;
use crate::phase::{Dist, Pos};
use crate::{init, Float, Sim, PAD};
use anyhow::{Context, Result};

// One row of the run history, written as a structured npy record at
// the end of the run.
#[derive(npy_derive::Serializable, Debug)]
pub struct HistoryRecord {
    pub time: Float,
    pub field_energy: Float,
    pub total_charge: Float,
}

impl HistoryRecord {
    pub fn sample(t: u32, sim: &Sim, flds: &Flds) -> HistoryRecord {
        let field_energy = flds.e_x[PAD..PAD + sim.nx]
            .iter()
            .map(|&e| e * e)
            .sum::<Float>();
        let total_charge = flds.rho[PAD..PAD + sim.nx].iter().sum::<Float>();
        HistoryRecord {
            time: t as Float * sim.dt,
            field_energy,
            total_charge,
        }
    }
}

fn save_interior(fld: &[Float], sim: &Sim, path: String) -> Result<()> {
    let out: Vec<Float> = fld[PAD..PAD + sim.nx].to_vec();
    npy::to_file(&path, out).with_context(|| format!("Could not save {}", path))?;
    Ok(())
}

// Write the spatial and velocity grids once, next to the snapshot
// directories, so the dumps can be plotted without re-deriving them.
pub fn save_grids(sim: &Sim, dists: &[Dist]) -> Result<()> {
    std::fs::create_dir_all("output").context("Unable to create output directory")?;
    let xx: Vec<Float> = init::x_grid(sim)[PAD..PAD + sim.nx].to_vec();
    npy::to_file("output/x.npy", xx).context("Could not save x grid to file")?;
    for (k, dist) in dists.iter().enumerate() {
        let vv: Vec<Float> = dist.vx[PAD..dist.dim.rows - PAD].to_vec();
        npy::to_file(format!("output/v_{}.npy", k), vv)
            .with_context(|| format!("Could not save v grid of species {}", k))?;
    }
    Ok(())
}

// Read-only snapshot of the state at one output step. Nothing here
// feeds back into the solver.
pub fn save_output(t: u32, sim: &Sim, dists: &[Dist], flds: &Flds) -> Result<()> {
    let output_prefix = format!("output/dat_{:05}", t / sim.output_interval);
    std::fs::create_dir_all(&output_prefix).context("Unable to create output directory")?;

    save_interior(&flds.e_x, sim, format!("{}/ex.npy", output_prefix))?;
    save_interior(&flds.j_x, sim, format!("{}/jx.npy", output_prefix))?;
    save_interior(&flds.rho, sim, format!("{}/rho.npy", output_prefix))?;

    for (k, dist) in dists.iter().enumerate() {
        let nv = dist.dim.rows - 2 * PAD;
        let mut out: Vec<Float> = Vec::with_capacity((nv / sim.stride + 1) * sim.nx);
        // interior rows only, thinned by the output stride
        for j in (PAD..dist.dim.rows - PAD).step_by(sim.stride) {
            let row = dist.dim.get_index(Pos { row: j, col: PAD });
            out.extend(dist.f[row..row + sim.nx].iter());
        }
        npy::to_file(format!("{}/f_{}.npy", output_prefix, k), out)
            .with_context(|| format!("Could not save distribution of species {}", k))?;
    }
    Ok(())
}

pub fn save_history(history: Vec<HistoryRecord>) -> Result<()> {
    std::fs::create_dir_all("output").context("Unable to create output directory")?;
    npy::to_file("output/history.npy", history).context("Could not save run history to file")?;
    Ok(())
}
