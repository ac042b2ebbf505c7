/// Initialization parameters for the GL layer.
///
/// Keep this structure stable and minimal. Add configuration flags only when a
/// concrete platform or driver requirement exists.
#[derive(Debug, Clone)]
pub struct GlInit {
    /// Requested context version as `(major, minor)`.
    ///
    /// 4.1 is the newest core version macOS exposes.
    pub version: (u8, u8),

    /// Request a core-profile context instead of compatibility.
    pub core_profile: bool,

    /// Wait for vertical blank on buffer swaps.
    pub vsync: bool,
}

impl Default for GlInit {
    fn default() -> Self {
        Self {
            version: (4, 1),
            core_profile: true,
            vsync: true,
        }
    }
}
