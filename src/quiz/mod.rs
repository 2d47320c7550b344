//! Quiz Module
//!
//! Ten-question arithmetic quiz held in an explicit session value.
//!
//! ## Flow
//! ```text
//! new(difficulty) ─▶ next_problem(rng) ─▶ submit(input) ─┬─ Correct ──────┐
//!                          ▲                             ├─ TryAgain ─▶ submit
//!                          │                             └─ Incorrect ────┤
//!                          └──────────────── (until 10 asked) ◀───────────┘
//! ```
//!
//! The caller supplies the random source and owns the `QuizHistory`, so
//! nothing lives in process-wide state.

mod history;
mod problem;
mod session;

pub use history::QuizHistory;
pub use problem::{Difficulty, Operation, Problem};
pub use session::{
    AnswerOutcome, QuizGrade, QuizSession, FIRST_ATTEMPT_POINTS, MAX_SCORE, QUESTIONS_PER_QUIZ,
    SECOND_ATTEMPT_POINTS,
};
