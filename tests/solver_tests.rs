mod common;

use vlasov_rs::flds::Flds;
use vlasov_rs::phase::{deposit_charge, transport, Dist};
use vlasov_rs::{init, Float, E_TOL, PAD};

// Runs the same cycle the driver runs, bootstrap included, and hands
// back the state after `nsteps` cycles.
fn run_cycles(sim: &vlasov_rs::Sim, nsteps: u32) -> (Vec<Dist>, Flds) {
    let (mut dists, mut flds) = init::initialize(sim);

    deposit_charge(sim, &dists, &mut flds);
    flds.solve_poisson(sim);
    transport::advance_position(sim, &mut dists, &mut flds);
    flds.advance_efield(sim);

    for _ in 0..nsteps {
        transport::advance_velocity(sim, &mut dists, &mut flds);
        transport::advance_position(sim, &mut dists, &mut flds);
        deposit_charge(sim, &dists, &mut flds);
        flds.advance_efield(sim);
    }
    (dists, flds)
}

fn interior_sum(sim: &vlasov_rs::Sim, fld: &[Float]) -> Float {
    fld[PAD..PAD + sim.nx].iter().sum::<Float>()
}

#[test]
fn quiescent_plasma_stays_quiescent() {
    // uniform single species: the charge density is flat, the Poisson
    // solve returns a zero field and the current imbalance after one
    // full cycle is zero, so the field never moves
    let sim = common::setup_uniform_sim();
    let (dists, flds) = run_cycles(&sim, 1);

    let rho_0 = flds.rho[PAD];
    for v in &flds.rho[PAD..PAD + sim.nx] {
        assert!((v - rho_0).abs() < E_TOL);
    }
    for v in &flds.e_x {
        assert!(v.abs() < E_TOL);
    }
    // the distribution itself only advected uniformly: still flat in x
    let dist = &dists[0];
    let cols = dist.dim.cols;
    for j in PAD..dist.dim.rows - PAD {
        let row = j * cols;
        let f_0 = dist.f[row + PAD];
        for v in &dist.f[row + PAD..row + PAD + sim.nx] {
            assert!((v - f_0).abs() < E_TOL);
        }
    }
}

#[test]
fn two_stream_conserves_total_charge() {
    let sim = common::setup_sim();
    let (mut dists, mut flds) = init::initialize(&sim);

    deposit_charge(&sim, &dists, &mut flds);
    let charge_0 = interior_sum(&sim, &flds.rho);
    flds.solve_poisson(&sim);
    transport::advance_position(&sim, &mut dists, &mut flds);
    flds.advance_efield(&sim);

    for _ in 0..sim.ntime {
        transport::advance_velocity(&sim, &mut dists, &mut flds);
        transport::advance_position(&sim, &mut dists, &mut flds);
        deposit_charge(&sim, &dists, &mut flds);
        flds.advance_efield(&sim);

        let charge = interior_sum(&sim, &flds.rho);
        assert!((charge - charge_0).abs() < E_TOL * charge_0.abs().max(1.0));
    }
}

#[test]
fn field_mean_stays_pinned() {
    // the zero mode is gauged away at the bootstrap and every Ampere
    // update must keep it away
    let sim = common::setup_sim();
    let (mut dists, mut flds) = init::initialize(&sim);

    deposit_charge(&sim, &dists, &mut flds);
    flds.solve_poisson(&sim);
    assert!(interior_sum(&sim, &flds.e_x).abs() / (sim.nx as Float) < E_TOL);
    transport::advance_position(&sim, &mut dists, &mut flds);
    flds.advance_efield(&sim);

    for _ in 0..sim.ntime {
        transport::advance_velocity(&sim, &mut dists, &mut flds);
        transport::advance_position(&sim, &mut dists, &mut flds);
        deposit_charge(&sim, &dists, &mut flds);
        flds.advance_efield(&sim);
        assert!(interior_sum(&sim, &flds.e_x).abs() / (sim.nx as Float) < E_TOL);
    }
}

#[test]
fn two_stream_state_stays_finite() {
    // sub-CFL two stream run: nothing blows up and the ghosts remain
    // exact mirrors at the end
    let sim = common::setup_sim();
    let (dists, flds) = run_cycles(&sim, sim.ntime);

    for fld in &[&flds.e_x, &flds.j_x, &flds.rho] {
        for v in fld.iter() {
            assert!(v.is_finite());
        }
        for k in 0..PAD {
            assert_eq!(fld[k], fld[sim.nx + k]);
            assert_eq!(fld[PAD + sim.nx + k], fld[PAD + k]);
        }
    }
    for dist in &dists {
        let cols = dist.dim.cols;
        for v in &dist.f {
            assert!(v.is_finite());
        }
        for j in 0..dist.dim.rows {
            let row = j * cols;
            for k in 0..PAD {
                assert_eq!(dist.f[row + k], dist.f[row + sim.nx + k]);
            }
        }
    }
}

#[test]
fn driver_runs_and_validates() {
    use vlasov_rs::{run, Config, Output, Params, Setup, SpeciesParams};

    let make_cfg = |dt: Float| Config {
        params: Params {
            nx: 16,
            dx: 1.0,
            dt,
            ntime: 4,
        },
        setup: Setup {
            amplitude: 0.05,
            mode: 1.0,
            noise: 0.0,
        },
        output: Output {
            write_output: false,
            output_interval: 2,
            stride: 1,
        },
        species: vec![SpeciesParams {
            nv: 12,
            dv: 0.5,
            qm: -1.0,
            qn: -0.25,
            drift: 1.0,
            vth: 0.75,
        }],
    };

    assert!(run(make_cfg(0.05)).is_ok());
    // malformed configurations fail before the loop starts
    assert!(run(make_cfg(0.0)).is_err());
    assert!(run(make_cfg(-0.1)).is_err());

    let mut cfg = make_cfg(0.05);
    cfg.species.clear();
    assert!(run(cfg).is_err());

    let mut cfg = make_cfg(0.05);
    cfg.species[0].dv = 0.0;
    assert!(run(cfg).is_err());
}
