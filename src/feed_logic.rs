/// Decide whether a periodic refresh is due at this tick.
///
/// Never due at tick zero - the startup path issues the initial
/// requests itself.
pub fn refresh_due(tick: u32, period_ticks: u32) -> bool {
    tick > 0 && tick % period_ticks == 0
}
