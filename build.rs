use std::cmp::Ordering;
use std::env;

// CPU features that select a native lane backend
#[derive(PartialEq, Eq, Debug)]
struct CpuFeature {
    name: &'static str,
    target_arch: &'static [&'static str],
    cfg_flag: &'static str,
    detected: bool,
}

impl CpuFeature {
    // Define priority order between CPU Features (Lowest number == Highest Priority)
    fn priority(&self) -> usize {
        match self.name {
            "neon" => 0,
            "sse2" => 1,
            _ => usize::MAX, // lowest priority by default
        }
    }

    // Groups all supported CPU features that have a native backend in this crate
    fn features() -> Vec<CpuFeature> {
        vec![
            CpuFeature {
                name: "sse2",
                target_arch: &["x86", "x86_64"],
                cfg_flag: "sse",
                detected: false,
            },
            CpuFeature {
                name: "neon",
                target_arch: &["aarch64"],
                cfg_flag: "neon",
                detected: false,
            },
        ]
    }
}

impl Ord for CpuFeature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for CpuFeature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Reads the features cargo reports for the compilation target, so cross
// builds select the backend of the target and not of the host.
struct TargetDetector {
    arch: String,
    features: Vec<String>,
}

impl TargetDetector {
    fn from_env() -> Self {
        let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
        let features = env::var("CARGO_CFG_TARGET_FEATURE")
            .unwrap_or_default()
            .split(',')
            .map(str::to_owned)
            .collect();

        Self { arch, features }
    }

    fn detect_features(&self, features: &mut [CpuFeature]) {
        for feature in features.iter_mut() {
            feature.detected = feature.target_arch.contains(&self.arch.as_str())
                && self.features.iter().any(|enabled| enabled == feature.name);
        }
    }
}

fn apply(features: &mut [CpuFeature], force_scalar: bool) {
    // Sort features by priority (highest first)
    features.sort();

    // Find and use the highest detected feature (if any)
    // if no feature is detected, use fallback implementation
    let cfg_flag = features
        .iter()
        .filter(|_| !force_scalar)
        .find(|cpu_feature| cpu_feature.detected)
        .map(|cpu_feature| cpu_feature.cfg_flag)
        .unwrap_or("fallback");

    println!("applying: {cfg_flag}");

    println!("cargo:rustc-cfg={cfg_flag}");

    println!("cargo::rustc-check-cfg=cfg(sse)");
    println!("cargo::rustc-check-cfg=cfg(neon)");
    println!("cargo::rustc-check-cfg=cfg(fallback)");
}

fn main() {
    println!("cargo::rerun-if-changed=build.rs");

    let force_scalar = env::var_os("CARGO_FEATURE_SCALAR").is_some();

    let mut features = CpuFeature::features();

    TargetDetector::from_env().detect_features(&mut features);

    apply(&mut features, force_scalar);
}
