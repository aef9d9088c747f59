use rubiks::CompositorConfig;

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub tick_rate: u32,
    /// Stop after this many ticks, 0 runs until the script is done.
    pub max_ticks: u64,
    pub compositor: CompositorConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60,
            max_ticks: 0,
            compositor: CompositorConfig::default(),
        }
    }
}
