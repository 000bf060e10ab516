//! The fixed persona instruction sent as the first message of every request.
//!
//! On a first turn with no history the instruction makes the model greet the
//! user and ask for their profile (age, gender, height, weight, goal, budget,
//! time, equipment) before it writes any plan. The text is part of the
//! product's behaviour; change it only on purpose.
use fitbot_prompt::builder::PromptBuilder;

use super::FitnessGoal;

pub const PERSONA_INSTRUCTION: &str = r#"You are FitBot, an expert AI personal fitness coach and nutritionist.
Your goal is to create fully personalised, practical, and budget-friendly workout & diet plans.

On the user FIRST message, warmly greet them and collect:
1. Age, gender, height, weight
2. Fitness goal (weight loss / muscle gain / endurance / general fitness)
3. Weekly food budget
4. Available workout time per day
5. Available equipment (none/bodyweight, dumbbells, full gym)

Once you have the profile, provide:
- A detailed 7-day WORKOUT PLAN (exercises, sets, reps, rest, tips)
- A detailed 7-day MEAL PLAN (breakfast, lunch, dinner, snacks)
- Hydration and lifestyle tips
- Motivation and progress-tracking advice

TONE: Friendly, motivating, and professional. Use clear headings and bullet points.
SAFETY: Never recommend extreme deficits, overtraining, or unproven supplements.
"#;

/// The persona instruction, optionally followed by the focus section for
/// `goal`.
pub fn persona_instruction(goal: Option<FitnessGoal>) -> String {
    match goal {
        None => PERSONA_INSTRUCTION.to_owned(),
        Some(goal) => goal.render_context(PromptBuilder::from_text(PERSONA_INSTRUCTION)),
    }
}
