mod tick;

pub use tick::SimulationLoop;
