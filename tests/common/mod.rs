use vlasov_rs::{Config, Output, Params, Setup, Sim, SpeciesParams};

pub fn setup_sim() -> Sim {
    // This is a function that sets up a dummy small
    // simulation so that it can be used in testing;
    // a symmetric two stream pair on a short box.
    let cfg = Config {
        params: Params {
            nx: 32,
            dx: 1.0,
            dt: 0.05,
            ntime: 20,
        },
        setup: Setup {
            amplitude: 0.05,
            mode: 1.0,
            noise: 0.0,
        },
        output: Output {
            write_output: false,
            output_interval: 10,
            stride: 1,
        },
        species: vec![
            SpeciesParams {
                nv: 24,
                dv: 0.25,
                qm: -1.0,
                qn: -0.125,
                drift: 1.5,
                vth: 0.5,
            },
            SpeciesParams {
                nv: 24,
                dv: 0.25,
                qm: -1.0,
                qn: -0.125,
                drift: -1.5,
                vth: 0.5,
            },
        ],
    };
    Sim::new(&cfg)
}

#[allow(dead_code)]
pub fn setup_uniform_sim() -> Sim {
    // single species, no drift, no perturbation: nothing should move
    let cfg = Config {
        params: Params {
            nx: 32,
            dx: 1.0,
            dt: 0.05,
            ntime: 1,
        },
        setup: Setup {
            amplitude: 0.0,
            mode: 1.0,
            noise: 0.0,
        },
        output: Output {
            write_output: false,
            output_interval: 1,
            stride: 1,
        },
        species: vec![SpeciesParams {
            nv: 24,
            dv: 0.25,
            qm: -1.0,
            qn: -0.125,
            drift: 0.0,
            vth: 0.5,
        }],
    };
    Sim::new(&cfg)
}
