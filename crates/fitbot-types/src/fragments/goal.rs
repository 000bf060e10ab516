use std::{fmt, str::FromStr};

use fitbot_core::error::FitbotError;
use fitbot_prompt::builder::PromptBuilder;

/// Fitness goals with a dedicated focus section that can be appended to the
/// persona instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FitnessGoal {
    WeightLoss,
    MuscleGain,
    Endurance,
    GeneralFitness,
}

impl FitnessGoal {
    pub const ALL: [FitnessGoal; 4] = [
        FitnessGoal::WeightLoss,
        FitnessGoal::MuscleGain,
        FitnessGoal::Endurance,
        FitnessGoal::GeneralFitness,
    ];

    /// What the coach should emphasise for this goal.
    pub fn focus_points(self) -> &'static [&'static str] {
        match self {
            FitnessGoal::WeightLoss => &[
                "Moderate caloric deficit (300–500 kcal/day max)",
                "High-protein meals to preserve muscle mass",
                "A mix of cardio and resistance training",
                "Sustainable, long-term habits over crash dieting",
            ],
            FitnessGoal::MuscleGain => &[
                "A moderate caloric surplus (200–400 kcal/day)",
                "High protein intake (1.6–2.2g per kg bodyweight)",
                "Progressive overload resistance training",
                "Adequate sleep and recovery emphasis",
            ],
            FitnessGoal::Endurance => &[
                "Aerobic base building (Zone 2 cardio)",
                "Carbohydrate periodisation for fuel",
                "Cross-training to prevent overuse injuries",
                "VO2 max and lactate threshold improvement",
            ],
            FitnessGoal::GeneralFitness => &[
                "Balanced mix of cardio, strength, and flexibility",
                "Whole-food, nutrient-dense dietary approach",
                "Building consistent daily movement habits",
                "Stress management and sleep optimisation",
            ],
        }
    }

    /// The focus section on its own: a blank line, `Focus on:` and one
    /// bullet per focus point.
    pub fn context(self) -> String {
        self.render_context(PromptBuilder::new())
    }

    pub(crate) fn render_context(self, builder: PromptBuilder) -> String {
        self.focus_points()
            .iter()
            .fold(
                builder.add_blank_line().add_line("Focus on:"),
                |builder, point| builder.add_bullet(point),
            )
            .finalize()
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FitnessGoal::WeightLoss => "weight loss",
            FitnessGoal::MuscleGain => "muscle gain",
            FitnessGoal::Endurance => "endurance",
            FitnessGoal::GeneralFitness => "general fitness",
        };
        f.write_str(label)
    }
}

/// Accepts labels like `"weight loss"`, `"weight_loss"` or `"Muscle-Gain"`.
impl FromStr for FitnessGoal {
    type Err = FitbotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '_' | '-' => ' ',
                other => other.to_ascii_lowercase(),
            })
            .collect();

        FitnessGoal::ALL
            .into_iter()
            .find(|goal| goal.to_string() == normalized)
            .ok_or_else(|| FitbotError::Invalid(format!("unknown fitness goal: {s:?}")))
    }
}
