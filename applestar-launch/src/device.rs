//! Accelerator selector - pick exactly one compute backend
//!
//! Policy, in strict priority order:
//! 1. An explicit CPU request wins; no probing happens at all
//! 2. Otherwise probe Metal, then CUDA, and take the first available
//! 3. CPU is the terminal fallback and is always assumed available
//!
//! Selection is total: it never fails, and the resulting device enum and
//! backend flags always agree.

use std::path::Path;

use applestar_core::Device;

/// Hardware availability probe
///
/// Selection logic only sees this trait, which makes it a total function
/// of (cpu flag, metal available, cuda available) under test.
pub trait AcceleratorProbe {
    fn metal_available(&self) -> bool;
    fn cuda_available(&self) -> bool;
}

/// Probes the actual host
///
/// Metal is only ever offered on macOS; CUDA detection looks for the
/// NVIDIA kernel driver. A false negative means the match runs on CPU.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemProbe;

impl AcceleratorProbe for SystemProbe {
    fn metal_available(&self) -> bool {
        cfg!(target_os = "macos")
    }

    fn cuda_available(&self) -> bool {
        Path::new("/proc/driver/nvidia/version").exists()
    }
}

/// Selected backend with its mutually exclusive flags
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceChoice {
    pub device: Device,
    pub use_mps: bool,
    pub use_cuda: bool,
}

impl DeviceChoice {
    fn cpu() -> Self {
        Self {
            device: Device::Cpu,
            use_mps: false,
            use_cuda: false,
        }
    }

    fn metal() -> Self {
        Self {
            device: Device::Mps,
            use_mps: true,
            use_cuda: false,
        }
    }

    fn cuda() -> Self {
        Self {
            device: Device::Cuda,
            use_mps: false,
            use_cuda: true,
        }
    }
}

/// Choose the compute backend
pub fn select(force_cpu: bool, probe: &dyn AcceleratorProbe) -> DeviceChoice {
    if force_cpu {
        tracing::info!("CPU mode requested, skipping accelerator probing");
        return DeviceChoice::cpu();
    }

    if probe.metal_available() {
        tracing::info!("Metal is available, using MPS for acceleration");
        DeviceChoice::metal()
    } else if probe.cuda_available() {
        tracing::warn!("no Metal support found, using CUDA instead");
        DeviceChoice::cuda()
    } else {
        tracing::warn!("no accelerator found, falling back to CPU");
        DeviceChoice::cpu()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeProbe {
        metal: bool,
        cuda: bool,
    }

    impl AcceleratorProbe for FakeProbe {
        fn metal_available(&self) -> bool {
            self.metal
        }

        fn cuda_available(&self) -> bool {
            self.cuda
        }
    }

    fn choice(force_cpu: bool, metal: bool, cuda: bool) -> DeviceChoice {
        select(force_cpu, &FakeProbe { metal, cuda })
    }

    #[test]
    fn test_explicit_cpu_skips_probing() {
        // Even with both accelerators present
        assert_eq!(choice(true, true, true).device, Device::Cpu);
    }

    #[test]
    fn test_metal_wins_over_cuda() {
        assert_eq!(choice(false, true, true).device, Device::Mps);
        assert_eq!(choice(false, true, false).device, Device::Mps);
    }

    #[test]
    fn test_cuda_when_no_metal() {
        assert_eq!(choice(false, false, true).device, Device::Cuda);
    }

    #[test]
    fn test_cpu_is_terminal_fallback() {
        assert_eq!(choice(false, false, false).device, Device::Cpu);
    }

    #[test]
    fn test_flags_always_consistent() {
        for force_cpu in [false, true] {
            for metal in [false, true] {
                for cuda in [false, true] {
                    let c = choice(force_cpu, metal, cuda);
                    let set = [c.use_mps, c.use_cuda].iter().filter(|&&f| f).count();
                    match c.device {
                        Device::Cpu => assert_eq!(set, 0),
                        Device::Mps => assert!(c.use_mps && !c.use_cuda),
                        Device::Cuda => assert!(c.use_cuda && !c.use_mps),
                    }
                    assert!(set <= 1);
                }
            }
        }
    }
}
