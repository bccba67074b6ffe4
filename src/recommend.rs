use serde::Serialize;

use crate::model::PerformanceLevel;

/// Canned insight for a performance band: a headline, action tips, and
/// grade-band advice. Pure lookup, no I/O.
#[derive(Debug, Clone, Serialize)]
pub struct Insight {
    pub headline: String,
    pub tips: Vec<String>,
    pub grade_advice: String,
}

pub fn insight_for(level: PerformanceLevel, grade_level: u8) -> Insight {
    let (headline, tips): (&str, &[&str]) = match level {
        PerformanceLevel::Outstanding => (
            "Exceptional performance! You're on track for academic excellence.",
            &[
                "Maintain your current study routine",
                "Consider helping peers with their studies",
                "Explore advanced learning opportunities",
                "Set higher academic goals",
            ],
        ),
        PerformanceLevel::Excellent => (
            "Great job! You're performing very well academically.",
            &[
                "Keep up the consistent study habits",
                "Focus on areas that need improvement",
                "Participate actively in class discussions",
                "Seek additional challenges",
            ],
        ),
        PerformanceLevel::Good => (
            "You're doing well! There's room for improvement.",
            &[
                "Increase daily study hours gradually",
                "Improve attendance if possible",
                "Create a structured study schedule",
                "Ask teachers for extra help",
            ],
        ),
        PerformanceLevel::NeedsImprovement => (
            "Let's work together to improve your performance!",
            &[
                "Significantly increase study time",
                "Improve attendance regularly",
                "Seek help from teachers and tutors",
                "Create a daily study routine",
                "Limit distractions during study time",
            ],
        ),
    };

    Insight {
        headline: headline.to_string(),
        tips: tips.iter().map(|t| t.to_string()).collect(),
        grade_advice: grade_advice(grade_level).to_string(),
    }
}

/// Middle school / early high school / senior years advice, keyed on the
/// grade field the form collects but the model does not consume.
pub fn grade_advice(grade_level: u8) -> &'static str {
    if grade_level <= 8 {
        "Middle School Focus: build strong study habits, explore interests, ask questions!"
    } else if grade_level <= 10 {
        "High School Focus: balance academics with activities, start thinking about future goals!"
    } else {
        "Senior Years: prepare for college and careers, maintain grades, seek leadership opportunities!"
    }
}

/// General study tips shown on the dashboard before any prediction is made.
pub fn success_tips() -> Vec<&'static str> {
    vec![
        "Study 2-4 hours daily after school",
        "Maintain 95%+ school attendance",
        "Get 8-9 hours of sleep - growing minds need rest",
        "Limit social media during homework time",
        "Set specific grade goals for each subject",
        "Review class notes the same day you take them",
        "Prepare for tests at least 3 days ahead",
    ]
}
