use crate::project_identity;

/// Decides whether the package manager may be spawned at all.
pub trait ToolProbe: Send + Sync {
    fn is_available(&self, program: &str) -> bool;
}

/// Real check: supported platform and `program` resolvable on PATH.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl ToolProbe for SystemProbe {
    fn is_available(&self, program: &str) -> bool {
        platform_supported() && which::which(program).is_ok()
    }
}

/// Fixed answer, for hosts that already know (and for tests).
#[derive(Debug, Clone, Copy)]
pub struct FixedProbe(pub bool);

impl ToolProbe for FixedProbe {
    fn is_available(&self, _program: &str) -> bool {
        self.0
    }
}

pub fn platform_supported() -> bool {
    std::env::consts::OS == project_identity::TOOL_PLATFORM
}
