mod goal;
mod persona;
mod static_fragment;

pub use goal::FitnessGoal;
pub use persona::{PERSONA_INSTRUCTION, persona_instruction};
pub use static_fragment::StaticFragment;
