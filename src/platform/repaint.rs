//! Forced-repaint schedule for mobile browsers.
//!
//! Some mobile engines keep painting the old background after the theme
//! classes change. The plan below nudges them with reflows: one right away
//! on any mobile device, plus two retries and a final body reflow on
//! Android. Desktop browsers get nothing.

use std::sync::LazyLock;

use regex::Regex;

static MOBILE_UA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Android|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini")
        .expect("mobile user agent pattern")
});

static ANDROID_UA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Android").expect("android user agent pattern"));

/// Device class derived from the user agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DeviceProfile {
    #[default]
    Desktop,
    Mobile,
    Android,
}

impl DeviceProfile {
    pub fn from_user_agent(user_agent: &str) -> Self {
        if !MOBILE_UA.is_match(user_agent) {
            DeviceProfile::Desktop
        } else if ANDROID_UA.is_match(user_agent) {
            DeviceProfile::Android
        } else {
            DeviceProfile::Mobile
        }
    }
}

/// One reflow trick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepaintStep {
    /// `translateZ(0)` + hidden backface on the root, cleared on the next
    /// animation frame and followed by a `display: none` toggle.
    Transform,
    /// `display: none` toggle on the body.
    BodyReflow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledRepaint {
    pub delay_ms: u32,
    pub step: RepaintStep,
}

impl ScheduledRepaint {
    const fn at(delay_ms: u32, step: RepaintStep) -> Self {
        Self { delay_ms, step }
    }
}

const MOBILE_STEPS: &[ScheduledRepaint] = &[ScheduledRepaint::at(0, RepaintStep::Transform)];

const ANDROID_STEPS: &[ScheduledRepaint] = &[
    ScheduledRepaint::at(0, RepaintStep::Transform),
    ScheduledRepaint::at(50, RepaintStep::Transform),
    ScheduledRepaint::at(150, RepaintStep::Transform),
    ScheduledRepaint::at(300, RepaintStep::BodyReflow),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepaintPlan {
    steps: &'static [ScheduledRepaint],
}

impl RepaintPlan {
    pub fn for_profile(profile: DeviceProfile) -> Self {
        let steps: &'static [ScheduledRepaint] = match profile {
            DeviceProfile::Desktop => &[],
            DeviceProfile::Mobile => MOBILE_STEPS,
            DeviceProfile::Android => ANDROID_STEPS,
        };
        Self { steps }
    }

    pub fn steps(&self) -> &'static [ScheduledRepaint] {
        self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_detection() {
        let cases = [
            (
                "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/126.0",
                DeviceProfile::Desktop,
            ),
            (
                "Mozilla/5.0 (iPhone; CPU iPhone OS 17_5 like Mac OS X) AppleWebKit/605.1.15",
                DeviceProfile::Mobile,
            ),
            (
                "Mozilla/5.0 (Linux; Android 14; SM-S918B) AppleWebKit/537.36 Mobile",
                DeviceProfile::Android,
            ),
            ("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)", DeviceProfile::Mobile),
            ("mozilla/5.0 (linux; android 9)", DeviceProfile::Android),
        ];

        for (ua, expected) in cases {
            assert_eq!(DeviceProfile::from_user_agent(ua), expected, "{ua}");
        }
    }

    #[test]
    fn test_desktop_plan_is_empty() {
        assert!(RepaintPlan::for_profile(DeviceProfile::Desktop).is_empty());
    }

    #[test]
    fn test_android_plan_order() {
        let plan = RepaintPlan::for_profile(DeviceProfile::Android);
        let delays: Vec<u32> = plan.steps().iter().map(|s| s.delay_ms).collect();
        assert_eq!(delays, vec![0, 50, 150, 300]);
        assert_eq!(plan.steps()[3].step, RepaintStep::BodyReflow);
    }

    #[test]
    fn test_mobile_plan_is_single_immediate_transform() {
        let plan = RepaintPlan::for_profile(DeviceProfile::Mobile);
        assert_eq!(
            plan.steps(),
            &[ScheduledRepaint {
                delay_ms: 0,
                step: RepaintStep::Transform
            }]
        );
    }
}
