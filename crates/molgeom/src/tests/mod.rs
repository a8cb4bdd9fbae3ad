mod metrics;
mod rotor;
