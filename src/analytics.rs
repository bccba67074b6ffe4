use serde::Serialize;

use crate::model::StudentProfile;

/// One bar in the dashboard's performance-factors chart, as a 0-100 percent.
#[derive(Debug, Clone, Serialize)]
pub struct Factor {
    pub name: &'static str,
    pub percent: f64,
}

/// Chart payload plus the strengths / growth-areas lists rendered next to the
/// predicted score.
#[derive(Debug, Clone, Serialize)]
pub struct FactorBreakdown {
    pub factors: Vec<Factor>,
    pub strengths: Vec<&'static str>,
    pub growth_areas: Vec<&'static str>,
}

/// 4 h/day of study and 9 h of sleep count as 100%.
const STUDY_HOURS_TARGET: f64 = 4.0;
const SLEEP_HOURS_TARGET: f64 = 9.0;

pub fn factor_breakdown(profile: &StudentProfile, score: f64) -> FactorBreakdown {
    let mut factors = vec![
        Factor {
            name: "Study Hours",
            percent: (profile.hours_studied / STUDY_HOURS_TARGET * 100.0).min(100.0),
        },
        Factor {
            name: "School Attendance",
            percent: profile.attendance,
        },
        Factor {
            name: "Report Card Level",
            percent: f64::from(profile.previous_exam_level) * 10.0,
        },
        Factor {
            name: "Sleep Quality",
            percent: (profile.sleep_hours / SLEEP_HOURS_TARGET * 100.0).min(100.0),
        },
    ];
    if profile.activity_count > 0 {
        factors.push(Factor {
            name: "Activity Participation",
            percent: (f64::from(profile.activity_count) * 20.0).min(100.0),
        });
    }
    factors.push(Factor {
        name: "Predicted Score",
        percent: score.clamp(0.0, 100.0),
    });

    let mut strengths = Vec::new();
    let mut growth_areas = Vec::new();

    if profile.hours_studied >= 3.0 {
        strengths.push("Good study habits");
    } else {
        growth_areas.push("Increase daily study time");
    }

    if profile.attendance >= 90.0 {
        strengths.push("Excellent attendance");
    } else if profile.attendance >= 80.0 {
        strengths.push("Good attendance");
    } else {
        growth_areas.push("Improve school attendance");
    }

    if profile.sleep_hours >= 8.0 {
        strengths.push("Healthy sleep schedule");
    } else {
        growth_areas.push("Get more sleep for better focus");
    }

    if profile.activity_count > 0 {
        strengths.push("Well-rounded with activities");
    } else {
        growth_areas.push("Consider joining school activities");
    }

    FactorBreakdown {
        factors,
        strengths,
        growth_areas,
    }
}
